//! # Authenticated Cipher Wrapper
//!
//! Seals and opens plaintext with an AEAD construction (no associated data).
//! The tag is carried separately from the ciphertext because the container
//! format stores it as its own field.
//!
//! `open` never yields partial plaintext: tag verification happens inside
//! the aead crates in constant time, and any mismatch — wrong key, flipped
//! bit, truncated ciphertext — surfaces as
//! [`DecryptOutcome::AuthenticationFailed`], not an error and not garbage.

use aes_gcm::aead::consts::{U12, U16};
use aes_gcm::aead::generic_array::typenum::Unsigned;
use aes_gcm::aead::generic_array::GenericArray;
use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::aes::{Aes128, Aes256};
use aes_gcm::AesGcm;
use chacha20poly1305::ChaCha20Poly1305;

use crate::config::Algorithm;
use crate::consts::TAG_LEN;
use crate::error::{DecryptOutcome, PasslockError};
use crate::secret::DerivedKey;

// GCM nonce size is a type parameter, so each (cipher, iv length) pair the
// registry admits gets its own instantiation.
type Aes128Gcm12 = AesGcm<Aes128, U12>;
type Aes128Gcm16 = AesGcm<Aes128, U16>;
type Aes256Gcm12 = AesGcm<Aes256, U12>;
type Aes256Gcm16 = AesGcm<Aes256, U16>;

/// Ciphertext plus its detached 16-byte authentication tag.
#[derive(Debug, Clone)]
pub struct Sealed {
    pub ciphertext: Vec<u8>,
    pub tag: [u8; TAG_LEN],
}

/// Encrypt `plaintext` under `key`/`iv`.
///
/// Key and iv lengths were validated against the algorithm at configuration
/// time; a mismatch here means the caller bypassed [`Crypter::new`](crate::Crypter::new)
/// and is reported as a [`PasslockError::Config`].
pub(crate) fn seal(
    algorithm: Algorithm,
    key: &DerivedKey,
    iv: &[u8],
    plaintext: &[u8],
) -> Result<Sealed, PasslockError> {
    match (algorithm, iv.len()) {
        (Algorithm::Aes128Gcm, 12) => seal_with::<Aes128Gcm12>(key, iv, plaintext),
        (Algorithm::Aes128Gcm, 16) => seal_with::<Aes128Gcm16>(key, iv, plaintext),
        (Algorithm::Aes256Gcm, 12) => seal_with::<Aes256Gcm12>(key, iv, plaintext),
        (Algorithm::Aes256Gcm, 16) => seal_with::<Aes256Gcm16>(key, iv, plaintext),
        (Algorithm::ChaCha20Poly1305, 12) => seal_with::<ChaCha20Poly1305>(key, iv, plaintext),
        (algorithm, iv_len) => Err(PasslockError::Config(format!(
            "{} does not support a {iv_len}-byte iv",
            algorithm.name(),
        ))),
    }
}

/// Decrypt and authenticate `ciphertext` + `tag` under `key`/`iv`.
pub(crate) fn open(
    algorithm: Algorithm,
    key: &DerivedKey,
    iv: &[u8],
    tag: &[u8; TAG_LEN],
    ciphertext: &[u8],
) -> Result<DecryptOutcome<Vec<u8>>, PasslockError> {
    match (algorithm, iv.len()) {
        (Algorithm::Aes128Gcm, 12) => open_with::<Aes128Gcm12>(key, iv, tag, ciphertext),
        (Algorithm::Aes128Gcm, 16) => open_with::<Aes128Gcm16>(key, iv, tag, ciphertext),
        (Algorithm::Aes256Gcm, 12) => open_with::<Aes256Gcm12>(key, iv, tag, ciphertext),
        (Algorithm::Aes256Gcm, 16) => open_with::<Aes256Gcm16>(key, iv, tag, ciphertext),
        (Algorithm::ChaCha20Poly1305, 12) => open_with::<ChaCha20Poly1305>(key, iv, tag, ciphertext),
        (algorithm, iv_len) => Err(PasslockError::Config(format!(
            "{} does not support a {iv_len}-byte iv",
            algorithm.name(),
        ))),
    }
}

fn seal_with<C: Aead + KeyInit>(
    key: &DerivedKey,
    iv: &[u8],
    plaintext: &[u8],
) -> Result<Sealed, PasslockError> {
    let cipher = build_cipher::<C>(key, iv)?;

    // The aead API appends the tag to the ciphertext; the container stores
    // it as a separate field, so split it back off.
    let mut sealed = cipher
        .encrypt(GenericArray::from_slice(iv), plaintext)
        .map_err(|_| PasslockError::InvalidInput("aead encryption failed".into()))?;
    let tag_bytes = sealed.split_off(sealed.len() - TAG_LEN);
    let mut tag = [0u8; TAG_LEN];
    tag.copy_from_slice(&tag_bytes);

    Ok(Sealed {
        ciphertext: sealed,
        tag,
    })
}

fn open_with<C: Aead + KeyInit>(
    key: &DerivedKey,
    iv: &[u8],
    tag: &[u8; TAG_LEN],
    ciphertext: &[u8],
) -> Result<DecryptOutcome<Vec<u8>>, PasslockError> {
    let cipher = build_cipher::<C>(key, iv)?;

    let mut buf = Vec::with_capacity(ciphertext.len() + TAG_LEN);
    buf.extend_from_slice(ciphertext);
    buf.extend_from_slice(tag);

    match cipher.decrypt(GenericArray::from_slice(iv), buf.as_slice()) {
        Ok(plaintext) => Ok(DecryptOutcome::Plaintext(plaintext)),
        // The aead error is deliberately opaque: any mismatch is the same
        // benign "failed to authenticate" signal.
        Err(_) => Ok(DecryptOutcome::AuthenticationFailed),
    }
}

fn build_cipher<C: Aead + KeyInit>(key: &DerivedKey, iv: &[u8]) -> Result<C, PasslockError> {
    let nonce_len = <C::NonceSize as Unsigned>::to_usize();
    if iv.len() != nonce_len {
        return Err(PasslockError::Config(format!(
            "cipher expects a {nonce_len}-byte iv, got {}",
            iv.len(),
        )));
    }
    C::new_from_slice(key.expose_secret()).map_err(|_| {
        PasslockError::Config(format!(
            "cipher rejected a {}-byte key",
            key.len(),
        ))
    })
}
