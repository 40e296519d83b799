//! Fixed-function decryption: the exact inverse of
//! [`encrypt_data`](crate::encrypt_data), with the same hardcoded
//! aes-256-gcm/16-byte-iv convention on both directions.

use crate::crypter::Crypter;
use crate::error::{DecryptOutcome, PasslockError};
use crate::ingest::{Coded, Payload};

/// Decrypt a hex container produced by [`encrypt_data`](crate::encrypt_data)
/// with the same key.
///
/// A wrong key or tampered container is **not** an error: it returns
/// [`DecryptOutcome::AuthenticationFailed`] so callers can branch on the
/// expected operational outcome without crashing.
///
/// # Errors
///
/// - [`PasslockError::MalformedContainer`] — shorter than 96 hex chars or
///   not valid hex; raised before any cipher work.
/// - [`PasslockError::InvalidInput`] — empty key.
/// - [`PasslockError::KeyDerivation`] — the stretch primitive failed.
///
/// ```
/// use passlock::DecryptOutcome;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), passlock::PasslockError> {
/// let container = passlock::encrypt_data("attack at dawn", "hunter2").await?;
///
/// match passlock::decrypt_data(&container, "hunter2").await? {
///     DecryptOutcome::Plaintext(text) => assert_eq!(text, "attack at dawn"),
///     DecryptOutcome::AuthenticationFailed => unreachable!("same key"),
/// }
/// # Ok(())
/// # }
/// ```
pub async fn decrypt_data<'k>(
    container: &str,
    key: impl Into<Payload<'k>>,
) -> Result<DecryptOutcome<String>, PasslockError> {
    let outcome = Crypter::fixed().decrypt_data(container, key).await?;
    outcome.try_map(|coded| match coded {
        Coded::Text(text) => Ok(text),
        // Fixed mode always configures UTF-8 data.
        Coded::Binary(_) => unreachable!("utf-8 data encoding always yields text"),
    })
}
