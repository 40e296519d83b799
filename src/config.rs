//! # Algorithm Registry and Crypter Configuration
//!
//! Everything here is validated **once**, at [`Crypter::new`](crate::Crypter::new)
//! time. A bad algorithm name, a key/iv length that does not match the
//! algorithm's nominal lengths, or an unusable encoding combination is a
//! [`PasslockError::Config`] raised immediately — never deferred to the
//! first encrypt/decrypt call and never silently defaulted.

use crate::consts::{DEFAULT_IV_LEN, DEFAULT_KEY_LEN};
use crate::error::PasslockError;

/// An AEAD algorithm the cipher backend recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// AES-128-GCM (16-byte key, 12- or 16-byte IV).
    Aes128Gcm,
    /// AES-256-GCM (32-byte key, 12- or 16-byte IV). The compiled-in default.
    Aes256Gcm,
    /// ChaCha20-Poly1305 (32-byte key, 12-byte IV).
    ChaCha20Poly1305,
}

impl Algorithm {
    /// Look up an algorithm by its wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "aes-128-gcm" => Some(Algorithm::Aes128Gcm),
            "aes-256-gcm" => Some(Algorithm::Aes256Gcm),
            "chacha20-poly1305" => Some(Algorithm::ChaCha20Poly1305),
            _ => None,
        }
    }

    /// Canonical name.
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Aes128Gcm => "aes-128-gcm",
            Algorithm::Aes256Gcm => "aes-256-gcm",
            Algorithm::ChaCha20Poly1305 => "chacha20-poly1305",
        }
    }

    /// Nominal key length in bytes.
    pub const fn key_len(self) -> usize {
        match self {
            Algorithm::Aes128Gcm => 16,
            Algorithm::Aes256Gcm => 32,
            Algorithm::ChaCha20Poly1305 => 32,
        }
    }

    /// Whether this algorithm accepts an IV of the given byte length.
    pub const fn supports_iv_len(self, iv_len: usize) -> bool {
        match self {
            Algorithm::Aes128Gcm | Algorithm::Aes256Gcm => iv_len == 12 || iv_len == 16,
            Algorithm::ChaCha20Poly1305 => iv_len == 12,
        }
    }
}

/// Algorithm selection for a [`Crypter`](crate::Crypter).
///
/// The tagged form makes the "named a custom algorithm but forgot its
/// lengths" error class unrepresentable: either you take the default, or you
/// state all three of name, key length, and iv length together.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AlgorithmSpec {
    /// aes-256-gcm with a 32-byte key and 16-byte IV.
    #[default]
    Default,
    /// A caller-chosen algorithm. All three fields are validated against the
    /// registry at construction.
    Custom {
        name: String,
        key_len: usize,
        iv_len: usize,
    },
}

impl AlgorithmSpec {
    /// Resolve against the algorithm registry.
    pub(crate) fn resolve(&self) -> Result<ResolvedAlgorithm, PasslockError> {
        match self {
            AlgorithmSpec::Default => Ok(ResolvedAlgorithm {
                algorithm: Algorithm::Aes256Gcm,
                key_len: DEFAULT_KEY_LEN,
                iv_len: DEFAULT_IV_LEN,
            }),
            AlgorithmSpec::Custom {
                name,
                key_len,
                iv_len,
            } => {
                let algorithm = Algorithm::from_name(name).ok_or_else(|| {
                    PasslockError::Config(format!("unknown algorithm: {name:?}"))
                })?;
                if *key_len != algorithm.key_len() {
                    return Err(PasslockError::Config(format!(
                        "{} requires a {}-byte key, got {key_len}",
                        algorithm.name(),
                        algorithm.key_len(),
                    )));
                }
                if !algorithm.supports_iv_len(*iv_len) {
                    return Err(PasslockError::Config(format!(
                        "{} does not support a {iv_len}-byte iv",
                        algorithm.name(),
                    )));
                }
                Ok(ResolvedAlgorithm {
                    algorithm,
                    key_len: *key_len,
                    iv_len: *iv_len,
                })
            }
        }
    }
}

/// A validated (algorithm, key length, iv length) triple.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ResolvedAlgorithm {
    pub algorithm: Algorithm,
    pub key_len: usize,
    pub iv_len: usize,
}

/// How the encrypted container leaves (and re-enters) the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContainerEncoding {
    /// Raw bytes, no text wrapping.
    #[default]
    Binary,
    /// Lowercase hex string.
    Hex,
    /// Standard base64 string.
    Base64,
}

/// How text payloads are interpreted on encrypt and how recovered plaintext
/// is represented on decrypt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataEncoding {
    /// Text is taken as UTF-8 bytes; decrypted data is returned as a UTF-8
    /// string (non-UTF-8 plaintext is an [`PasslockError::InvalidInput`]).
    #[default]
    Utf8,
    /// Decrypted data is returned as raw bytes; text input is taken as its
    /// UTF-8 bytes.
    Binary,
    /// Text input is hex-decoded; decrypted data is hex-encoded.
    Hex,
    /// Text input is base64-decoded; decrypted data is base64-encoded.
    Base64,
}

/// Configuration for a [`Crypter`](crate::Crypter).
///
/// All fields have documented defaults: aes-256-gcm with a 32-byte key and
/// 16-byte IV, a raw-bytes container, and UTF-8 data.
///
/// ```
/// use passlock::{ContainerEncoding, Crypter, CrypterConfig};
///
/// let crypter = Crypter::new(
///     CrypterConfig::default()
///         .with_algorithm("chacha20-poly1305", 32, 12)
///         .with_output_encoding(ContainerEncoding::Base64),
/// )?;
/// # let _ = crypter;
/// # Ok::<(), passlock::PasslockError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct CrypterConfig {
    pub algorithm: AlgorithmSpec,
    pub output_encoding: ContainerEncoding,
    pub data_encoding: DataEncoding,
}

impl CrypterConfig {
    /// Select a custom algorithm. Name, key length, and iv length must be
    /// supplied together and are validated by [`Crypter::new`](crate::Crypter::new).
    #[must_use]
    pub fn with_algorithm(mut self, name: impl Into<String>, key_len: usize, iv_len: usize) -> Self {
        self.algorithm = AlgorithmSpec::Custom {
            name: name.into(),
            key_len,
            iv_len,
        };
        self
    }

    /// Set the container encoding.
    #[must_use]
    pub fn with_output_encoding(mut self, encoding: ContainerEncoding) -> Self {
        self.output_encoding = encoding;
        self
    }

    /// Set the data encoding.
    #[must_use]
    pub fn with_data_encoding(mut self, encoding: DataEncoding) -> Self {
        self.data_encoding = encoding;
        self
    }
}
