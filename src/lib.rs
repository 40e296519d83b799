// src/lib.rs

//! # passlock
//!
//! Password/key-based authenticated encryption producing one self-contained
//! container: `salt(16) ‖ iv ‖ tag(16) ‖ ciphertext`, optionally text-encoded.
//! The secret is stretched with scrypt per call (fresh random salt), the
//! payload is sealed with an AEAD, and decryption fails closed — a wrong key
//! or tampered byte yields an explicit
//! [`DecryptOutcome::AuthenticationFailed`], never partial plaintext.
//!
//! Two entry points over the same pipeline:
//!
//! - [`encrypt_data`] / [`decrypt_data`] — fixed aes-256-gcm, hex container,
//!   UTF-8 data.
//! - [`Crypter`] — algorithm, key/iv lengths, and encodings chosen once at
//!   construction and validated eagerly.

pub mod config;
pub mod consts;
pub mod container;
pub mod crypter;
pub mod crypto;
pub mod decrypt;
pub mod encrypt;
pub mod error;
pub mod ingest;
pub mod secret;

// High-level API — this is what most users import
pub use crypter::Crypter;
pub use decrypt::decrypt_data;
pub use encrypt::encrypt_data;
pub use error::{DecryptOutcome, PasslockError};

pub use config::{Algorithm, AlgorithmSpec, ContainerEncoding, CrypterConfig, DataEncoding};
pub use container::Container;
pub use ingest::{Coded, Payload};
pub use secret::{DerivedKey, SecretBytes};

// Low-level key stretching — public for custom derivation flows that need
// raw keys outside the container pipeline.
pub use crypto::kdf::{stretch_key, stretch_key_blocking};
