//! # Configurable Crypter
//!
//! The object form of the pipeline: algorithm, key/iv lengths, and
//! encodings are fixed at construction (validated fail-fast), then
//! `encrypt_data`/`decrypt_data` run the three stages — stretch, AEAD,
//! container codec — per call.
//!
//! A `Crypter` holds no mutable state. Every call draws its own salt and iv,
//! derives its own key, and drops all secret material at completion, so any
//! number of calls may run concurrently on one shared instance.

use tracing::debug;

use crate::config::{Algorithm, ContainerEncoding, CrypterConfig, DataEncoding};
use crate::consts::{DEFAULT_IV_LEN, DEFAULT_KEY_LEN, SALT_LEN};
use crate::container::{self, Container};
use crate::crypto::{cipher, kdf, rng};
use crate::error::{DecryptOutcome, PasslockError};
use crate::ingest::{Coded, Payload};
use crate::secret::SecretBytes;

/// A configured encryptor/decryptor.
///
/// ```
/// use passlock::{Crypter, CrypterConfig, DecryptOutcome};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), passlock::PasslockError> {
/// let crypter = Crypter::new(CrypterConfig::default())?;
/// let container = crypter.encrypt_data("hello", "my password").await?;
///
/// match crypter.decrypt_data(&container.clone().into_bytes(), "my password").await? {
///     DecryptOutcome::Plaintext(data) => assert_eq!(data.as_text(), Some("hello")),
///     DecryptOutcome::AuthenticationFailed => unreachable!("same key"),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Crypter {
    algorithm: Algorithm,
    key_len: usize,
    iv_len: usize,
    output_encoding: ContainerEncoding,
    data_encoding: DataEncoding,
}

impl Crypter {
    /// Validate `config` and build a crypter.
    ///
    /// # Errors
    ///
    /// [`PasslockError::Config`] for an unknown algorithm name or a key/iv
    /// length that does not match the algorithm — raised here, never at
    /// encrypt/decrypt time.
    pub fn new(config: CrypterConfig) -> Result<Self, PasslockError> {
        let resolved = config.algorithm.resolve()?;
        Ok(Self {
            algorithm: resolved.algorithm,
            key_len: resolved.key_len,
            iv_len: resolved.iv_len,
            output_encoding: config.output_encoding,
            data_encoding: config.data_encoding,
        })
    }

    /// The fixed-function configuration: aes-256-gcm, hex container, UTF-8
    /// data. Identical for encrypt and decrypt so the two directions can
    /// never diverge.
    pub(crate) fn fixed() -> Self {
        Self {
            algorithm: Algorithm::Aes256Gcm,
            key_len: DEFAULT_KEY_LEN,
            iv_len: DEFAULT_IV_LEN,
            output_encoding: ContainerEncoding::Hex,
            data_encoding: DataEncoding::Utf8,
        }
    }

    /// The configured algorithm.
    pub fn algorithm_name(&self) -> &'static str {
        self.algorithm.name()
    }

    /// The configured iv length in bytes.
    pub fn iv_len(&self) -> usize {
        self.iv_len
    }

    /// Encrypt `data` under `key`.
    ///
    /// Generates a fresh salt and iv, stretches the key on the blocking
    /// pool, seals with the configured AEAD, and packs
    /// `salt ‖ iv ‖ tag ‖ ciphertext` in the configured container encoding.
    ///
    /// # Errors
    ///
    /// - [`PasslockError::InvalidInput`] — empty data or key, or text data
    ///   that fails its declared encoding.
    /// - [`PasslockError::KeyDerivation`] — the stretch primitive failed.
    pub async fn encrypt_data<'d, 'k>(
        &self,
        data: impl Into<Payload<'d>>,
        key: impl Into<Payload<'k>>,
    ) -> Result<Coded, PasslockError> {
        let data = data.into();
        let key = key.into();
        if key.is_empty() {
            return Err(PasslockError::InvalidInput("key must not be empty".into()));
        }
        let plaintext = data.decode(self.data_encoding)?;
        if plaintext.is_empty() {
            return Err(PasslockError::InvalidInput("data must not be empty".into()));
        }

        let secret = SecretBytes::new(key.raw_bytes());
        let bytes = self.seal_container(plaintext, secret).await?;
        Ok(container::wrap(bytes, self.output_encoding))
    }

    /// Decrypt a container produced by [`encrypt_data`](Self::encrypt_data)
    /// with the same configuration.
    ///
    /// Returns [`DecryptOutcome::AuthenticationFailed`] — not an error — for
    /// a wrong key or tampered container.
    ///
    /// # Errors
    ///
    /// - [`PasslockError::InvalidInput`] — empty key, or plaintext that
    ///   cannot be represented in the configured data encoding.
    /// - [`PasslockError::MalformedContainer`] — container shorter than
    ///   salt + iv + tag, or undecodable container text; raised before any
    ///   cipher work.
    /// - [`PasslockError::KeyDerivation`] — the stretch primitive failed.
    pub async fn decrypt_data<'c, 'k>(
        &self,
        container: impl Into<Payload<'c>>,
        key: impl Into<Payload<'k>>,
    ) -> Result<DecryptOutcome<Coded>, PasslockError> {
        let container = container.into();
        let key = key.into();
        if key.is_empty() {
            return Err(PasslockError::InvalidInput("key must not be empty".into()));
        }

        let bytes = container::unwrap(&container, self.output_encoding)?;
        let secret = SecretBytes::new(key.raw_bytes());
        let outcome = self.open_container(&bytes, secret).await?;
        outcome.try_map(|plaintext| self.encode_output(plaintext))
    }

    async fn seal_container(
        &self,
        plaintext: Vec<u8>,
        secret: SecretBytes,
    ) -> Result<Vec<u8>, PasslockError> {
        let salt: [u8; SALT_LEN] = rng::random_array();
        let iv = rng::random_bytes(self.iv_len);

        let derived = kdf::stretch_key(secret, salt.to_vec(), self.key_len).await?;
        let sealed = cipher::seal(self.algorithm, &derived, &iv, &plaintext)?;

        debug!(
            algorithm = self.algorithm.name(),
            plaintext_len = plaintext.len(),
            "sealed container"
        );

        let container = Container {
            salt,
            iv,
            tag: sealed.tag,
            ciphertext: sealed.ciphertext,
        };
        Ok(container.to_bytes())
    }

    async fn open_container(
        &self,
        bytes: &[u8],
        secret: SecretBytes,
    ) -> Result<DecryptOutcome<Vec<u8>>, PasslockError> {
        let fields = Container::parse(bytes, self.iv_len)?;

        let derived = kdf::stretch_key(secret, fields.salt.to_vec(), self.key_len).await?;
        let outcome = cipher::open(
            self.algorithm,
            &derived,
            &fields.iv,
            &fields.tag,
            &fields.ciphertext,
        )?;

        debug!(
            algorithm = self.algorithm.name(),
            ciphertext_len = fields.ciphertext.len(),
            authenticated = outcome.is_authenticated(),
            "opened container"
        );
        Ok(outcome)
    }

    fn encode_output(&self, plaintext: Vec<u8>) -> Result<Coded, PasslockError> {
        use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
        match self.data_encoding {
            DataEncoding::Binary => Ok(Coded::Binary(plaintext)),
            DataEncoding::Utf8 => String::from_utf8(plaintext).map(Coded::Text).map_err(|_| {
                PasslockError::InvalidInput("decrypted data is not valid UTF-8".into())
            }),
            DataEncoding::Hex => Ok(Coded::Text(hex::encode(plaintext))),
            DataEncoding::Base64 => Ok(Coded::Text(BASE64.encode(plaintext))),
        }
    }
}
