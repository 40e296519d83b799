//! # Input Ingestion
//!
//! One canonical entry point for everything the caller can hand us: text in
//! a declared encoding, or raw bytes. Every supported representation
//! normalizes into a plain byte vector before entering the pipeline; anything
//! else (numbers, structs, ...) is unrepresentable at the type level rather
//! than silently coerced.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

use crate::config::DataEncoding;
use crate::error::PasslockError;

/// A borrowed payload: either text or raw bytes.
///
/// `From` impls cover the common owner types so call sites stay terse:
///
/// ```
/// use passlock::Payload;
///
/// let from_str: Payload = "hello".into();
/// let from_bytes: Payload = b"hello".as_slice().into();
/// assert!(!from_str.is_empty());
/// # let _ = from_bytes;
/// ```
#[derive(Debug, Clone, Copy)]
pub enum Payload<'a> {
    Text(&'a str),
    Bytes(&'a [u8]),
}

impl<'a> Payload<'a> {
    pub fn is_empty(&self) -> bool {
        match self {
            Payload::Text(s) => s.is_empty(),
            Payload::Bytes(b) => b.is_empty(),
        }
    }

    /// Normalize into bytes according to the declared data encoding.
    ///
    /// Byte payloads pass through untouched regardless of encoding; text is
    /// decoded. Undecodable text is an [`PasslockError::InvalidInput`].
    pub(crate) fn decode(&self, encoding: DataEncoding) -> Result<Vec<u8>, PasslockError> {
        match (self, encoding) {
            (Payload::Bytes(b), _) => Ok(b.to_vec()),
            (Payload::Text(s), DataEncoding::Utf8 | DataEncoding::Binary) => {
                Ok(s.as_bytes().to_vec())
            }
            (Payload::Text(s), DataEncoding::Hex) => hex::decode(s)
                .map_err(|e| PasslockError::InvalidInput(format!("data is not valid hex: {e}"))),
            (Payload::Text(s), DataEncoding::Base64) => BASE64
                .decode(s)
                .map_err(|e| PasslockError::InvalidInput(format!("data is not valid base64: {e}"))),
        }
    }

    /// Secrets are always taken verbatim: text as its UTF-8 bytes, bytes
    /// as-is. The data encoding never applies to key material.
    pub(crate) fn raw_bytes(&self) -> Vec<u8> {
        match self {
            Payload::Text(s) => s.as_bytes().to_vec(),
            Payload::Bytes(b) => b.to_vec(),
        }
    }
}

impl<'a> From<&'a str> for Payload<'a> {
    fn from(s: &'a str) -> Self {
        Payload::Text(s)
    }
}

impl<'a> From<&'a String> for Payload<'a> {
    fn from(s: &'a String) -> Self {
        Payload::Text(s)
    }
}

impl<'a> From<&'a [u8]> for Payload<'a> {
    fn from(b: &'a [u8]) -> Self {
        Payload::Bytes(b)
    }
}

impl<'a> From<&'a Vec<u8>> for Payload<'a> {
    fn from(b: &'a Vec<u8>) -> Self {
        Payload::Bytes(b)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Payload<'a> {
    fn from(b: &'a [u8; N]) -> Self {
        Payload::Bytes(b)
    }
}

/// An owned output value: raw bytes or text, depending on the configured
/// encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Coded {
    Binary(Vec<u8>),
    Text(String),
}

impl Coded {
    /// The underlying bytes (text is its UTF-8 bytes).
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Coded::Binary(b) => b,
            Coded::Text(s) => s.into_bytes(),
        }
    }

    /// Borrow as text, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Coded::Text(s) => Some(s),
            Coded::Binary(_) => None,
        }
    }

    /// Convert into text, if this is a text value.
    pub fn into_text(self) -> Option<String> {
        match self {
            Coded::Text(s) => Some(s),
            Coded::Binary(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_pass_through_every_encoding() {
        let raw = vec![0x00, 0xff, 0x10];
        for encoding in [
            DataEncoding::Utf8,
            DataEncoding::Binary,
            DataEncoding::Hex,
            DataEncoding::Base64,
        ] {
            let payload = Payload::from(&raw);
            assert_eq!(payload.decode(encoding).unwrap(), raw);
        }
    }

    #[test]
    fn text_decodes_per_encoding() {
        assert_eq!(
            Payload::Text("00ff10").decode(DataEncoding::Hex).unwrap(),
            vec![0x00, 0xff, 0x10]
        );
        assert_eq!(
            Payload::Text("AP8Q").decode(DataEncoding::Base64).unwrap(),
            vec![0x00, 0xff, 0x10]
        );
        assert_eq!(
            Payload::Text("héllo").decode(DataEncoding::Utf8).unwrap(),
            "héllo".as_bytes()
        );
    }

    #[test]
    fn undecodable_text_is_invalid_input() {
        let err = Payload::Text("not hex!").decode(DataEncoding::Hex).unwrap_err();
        assert!(matches!(err, PasslockError::InvalidInput(_)));

        let err = Payload::Text("@@@@").decode(DataEncoding::Base64).unwrap_err();
        assert!(matches!(err, PasslockError::InvalidInput(_)));
    }

    #[test]
    fn keys_are_taken_verbatim() {
        assert_eq!(Payload::Text("abc").raw_bytes(), b"abc");
        assert_eq!(Payload::Bytes(&[1, 2, 3]).raw_bytes(), [1, 2, 3]);
    }
}
