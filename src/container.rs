//! # Container Codec
//!
//! The single artifact that crosses the system boundary is the container:
//! `salt(16) ‖ iv(iv_len) ‖ tag(16) ‖ ciphertext(variable)`, optionally
//! wrapped in hex or base64.
//!
//! Splitting happens at fixed offsets. The decoder learns `iv_len` from
//! configuration, never from the container itself — if the algorithm or iv
//! length differs between encrypt and decrypt, decryption fails to
//! authenticate rather than misparse.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

use crate::config::ContainerEncoding;
use crate::consts::{SALT_LEN, TAG_LEN};
use crate::error::PasslockError;
use crate::ingest::{Coded, Payload};

/// Parsed container fields. Salt, iv, and tag are public values; only the
/// ciphertext is opaque.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    pub salt: [u8; SALT_LEN],
    pub iv: Vec<u8>,
    pub tag: [u8; TAG_LEN],
    pub ciphertext: Vec<u8>,
}

impl Container {
    /// Concatenate into the wire layout.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out =
            Vec::with_capacity(SALT_LEN + self.iv.len() + TAG_LEN + self.ciphertext.len());
        out.extend_from_slice(&self.salt);
        out.extend_from_slice(&self.iv);
        out.extend_from_slice(&self.tag);
        out.extend_from_slice(&self.ciphertext);
        out
    }

    /// Split a raw container at fixed offsets.
    ///
    /// # Errors
    ///
    /// [`PasslockError::MalformedContainer`] if `bytes` is shorter than
    /// `salt + iv + tag` — checked before anything touches the cipher.
    pub fn parse(bytes: &[u8], iv_len: usize) -> Result<Self, PasslockError> {
        let min_len = SALT_LEN + iv_len + TAG_LEN;
        if bytes.len() < min_len {
            return Err(PasslockError::MalformedContainer(format!(
                "container too short to hold salt, iv and tag: {} < {min_len} bytes",
                bytes.len(),
            )));
        }

        let mut salt = [0u8; SALT_LEN];
        salt.copy_from_slice(&bytes[..SALT_LEN]);
        let iv = bytes[SALT_LEN..SALT_LEN + iv_len].to_vec();
        let mut tag = [0u8; TAG_LEN];
        tag.copy_from_slice(&bytes[SALT_LEN + iv_len..min_len]);
        let ciphertext = bytes[min_len..].to_vec();

        Ok(Self {
            salt,
            iv,
            tag,
            ciphertext,
        })
    }
}

/// Apply the configured container encoding on the way out.
pub(crate) fn wrap(bytes: Vec<u8>, encoding: ContainerEncoding) -> Coded {
    match encoding {
        ContainerEncoding::Binary => Coded::Binary(bytes),
        ContainerEncoding::Hex => Coded::Text(hex::encode(bytes)),
        ContainerEncoding::Base64 => Coded::Text(BASE64.encode(bytes)),
    }
}

/// Reverse the container encoding on the way in.
///
/// Text handed to a `Binary` configuration is taken as its raw bytes — it can
/// only ever fail authentication, never misparse. Undecodable hex/base64 is a
/// [`PasslockError::MalformedContainer`].
pub(crate) fn unwrap(
    container: &Payload<'_>,
    encoding: ContainerEncoding,
) -> Result<Vec<u8>, PasslockError> {
    match encoding {
        ContainerEncoding::Binary => Ok(container.raw_bytes()),
        ContainerEncoding::Hex => hex::decode(container.raw_bytes()).map_err(|e| {
            PasslockError::MalformedContainer(format!("container is not valid hex: {e}"))
        }),
        ContainerEncoding::Base64 => BASE64.decode(container.raw_bytes()).map_err(|e| {
            PasslockError::MalformedContainer(format!("container is not valid base64: {e}"))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(iv_len: usize, ct_len: usize) -> Container {
        Container {
            salt: [0xaa; SALT_LEN],
            iv: vec![0xbb; iv_len],
            tag: [0xcc; TAG_LEN],
            ciphertext: vec![0xdd; ct_len],
        }
    }

    #[test]
    fn split_inverts_concat() {
        for (iv_len, ct_len) in [(12, 0), (12, 1), (16, 5000)] {
            let container = sample(iv_len, ct_len);
            let bytes = container.to_bytes();
            assert_eq!(bytes.len(), SALT_LEN + iv_len + TAG_LEN + ct_len);
            assert_eq!(Container::parse(&bytes, iv_len).unwrap(), container);
        }
    }

    #[test]
    fn short_container_rejected_at_every_length() {
        let iv_len = 16;
        let min_len = SALT_LEN + iv_len + TAG_LEN;
        for len in [0, 1, SALT_LEN, min_len - 1] {
            let err = Container::parse(&vec![0u8; len], iv_len).unwrap_err();
            assert!(
                matches!(err, PasslockError::MalformedContainer(_)),
                "length {len} must be malformed"
            );
        }
        // Exactly salt + iv + tag is valid: empty ciphertext.
        let parsed = Container::parse(&vec![0u8; min_len], iv_len).unwrap();
        assert!(parsed.ciphertext.is_empty());
    }

    #[test]
    fn text_wrapping_round_trips() {
        let bytes = sample(12, 7).to_bytes();
        for encoding in [
            ContainerEncoding::Binary,
            ContainerEncoding::Hex,
            ContainerEncoding::Base64,
        ] {
            let coded = wrap(bytes.clone(), encoding);
            let payload = match &coded {
                Coded::Binary(b) => Payload::Bytes(b),
                Coded::Text(s) => Payload::Text(s),
            };
            assert_eq!(unwrap(&payload, encoding).unwrap(), bytes);
        }
    }

    #[test]
    fn undecodable_container_text_is_malformed() {
        let err = unwrap(&Payload::Text("zz not hex"), ContainerEncoding::Hex).unwrap_err();
        assert!(matches!(err, PasslockError::MalformedContainer(_)));
    }
}
