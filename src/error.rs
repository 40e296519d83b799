//! # Error Types
//!
//! This module defines the error type used throughout the library, plus the
//! [`DecryptOutcome`] sum type that separates *authentication failure* (an
//! expected operational outcome) from genuine errors.
//!
//! All fallible operations return [`Result<T, PasslockError>`](PasslockError).

use thiserror::Error;

/// The error type for all passlock operations.
///
/// Authentication failure during decryption is deliberately **not** part of
/// this enum — a wrong key or tampered container is a normal operational
/// occurrence and surfaces as [`DecryptOutcome::AuthenticationFailed`]
/// instead, so callers can branch on it without crashing.
#[derive(Error, Debug)]
pub enum PasslockError {
    /// Bad or incomplete algorithm/encoding parameters at construction.
    ///
    /// Raised by [`Crypter::new`](crate::Crypter::new) only — configuration
    /// is validated eagerly, never deferred to encrypt/decrypt time and
    /// never silently defaulted once a custom algorithm is named.
    #[error("configuration error: {0}")]
    Config(String),

    /// Missing, empty, or undecodable data or key at call time.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The key-stretching primitive reported an error or yielded no output.
    #[error("key derivation error: {0}")]
    KeyDerivation(String),

    /// The container is too short to hold salt + iv + tag, or its text
    /// encoding cannot be decoded. Raised before any cipher operation.
    #[error("malformed container: {0}")]
    MalformedContainer(String),
}

impl From<&'static str> for PasslockError {
    fn from(msg: &'static str) -> Self {
        PasslockError::InvalidInput(msg.to_string())
    }
}

/// The result of an authenticated decryption.
///
/// `Plaintext` carries the recovered data; `AuthenticationFailed` means the
/// tag did not verify (wrong key, flipped bit, truncated ciphertext). There
/// is no way to obtain partial plaintext from a failed decryption.
///
/// ```
/// use passlock::DecryptOutcome;
///
/// fn handle(outcome: DecryptOutcome<String>) {
///     match outcome {
///         DecryptOutcome::Plaintext(text) => println!("recovered: {text}"),
///         DecryptOutcome::AuthenticationFailed => eprintln!("wrong key or tampered data"),
///     }
/// }
/// ```
#[must_use = "an unchecked decryption outcome hides authentication failures"]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecryptOutcome<T> {
    /// Authentication succeeded; the original plaintext was recovered.
    Plaintext(T),
    /// Tag verification failed. No plaintext is available.
    AuthenticationFailed,
}

impl<T> DecryptOutcome<T> {
    /// `true` if decryption authenticated successfully.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, DecryptOutcome::Plaintext(_))
    }

    /// Convert into `Some(plaintext)` on success, `None` on failure.
    pub fn into_plaintext(self) -> Option<T> {
        match self {
            DecryptOutcome::Plaintext(value) => Some(value),
            DecryptOutcome::AuthenticationFailed => None,
        }
    }

    /// Map the plaintext, preserving an authentication failure.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> DecryptOutcome<U> {
        match self {
            DecryptOutcome::Plaintext(value) => DecryptOutcome::Plaintext(f(value)),
            DecryptOutcome::AuthenticationFailed => DecryptOutcome::AuthenticationFailed,
        }
    }

    /// Map the plaintext with a fallible function, preserving an
    /// authentication failure.
    pub fn try_map<U, F>(self, f: F) -> Result<DecryptOutcome<U>, PasslockError>
    where
        F: FnOnce(T) -> Result<U, PasslockError>,
    {
        match self {
            DecryptOutcome::Plaintext(value) => Ok(DecryptOutcome::Plaintext(f(value)?)),
            DecryptOutcome::AuthenticationFailed => Ok(DecryptOutcome::AuthenticationFailed),
        }
    }
}
