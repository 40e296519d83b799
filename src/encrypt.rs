//! Fixed-function encryption: aes-256-gcm, hex container, UTF-8 data.

use crate::crypter::Crypter;
use crate::error::PasslockError;
use crate::ingest::{Coded, Payload};

/// Encrypt UTF-8 `data` under `key` using the compiled-in default
/// configuration (aes-256-gcm, 32-byte derived key, 16-byte salt/iv/tag).
///
/// Returns a single hex string laid out as
/// `salt(32 hex) ‖ iv(32 hex) ‖ tag(32 hex) ‖ ciphertext(hex)` — everything
/// [`decrypt_data`](crate::decrypt_data) needs besides the key. Salt and iv
/// are public values; they are unique per call, not secret.
///
/// # Errors
///
/// - [`PasslockError::InvalidInput`] — empty data or key.
/// - [`PasslockError::KeyDerivation`] — the stretch primitive failed.
///
/// ```
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), passlock::PasslockError> {
/// let container = passlock::encrypt_data("attack at dawn", "hunter2").await?;
/// assert!(container.len() >= 96);
/// assert!(container.chars().all(|c| c.is_ascii_hexdigit()));
/// # Ok(())
/// # }
/// ```
pub async fn encrypt_data<'k>(
    data: &str,
    key: impl Into<Payload<'k>>,
) -> Result<String, PasslockError> {
    match Crypter::fixed().encrypt_data(data, key).await? {
        Coded::Text(container) => Ok(container),
        // Fixed mode always configures hex output.
        Coded::Binary(_) => unreachable!("hex container encoding always yields text"),
    }
}
