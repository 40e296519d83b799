//! Zeroize-on-drop wrappers for secret material.
//!
//! Both types exist only for the duration of one encrypt/decrypt call and
//! wipe their heap buffer when dropped. Access to the raw bytes requires an
//! explicit [`expose_secret`](SecretBytes::expose_secret) call so secrets
//! never leak through `Debug`, logging, or accidental copies.

use zeroize::{Zeroize, ZeroizeOnDrop};

/// A caller-supplied secret (password or raw key material), arbitrary length.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretBytes(Vec<u8>);

impl SecretBytes {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Raw secret bytes. Keep the borrow short-lived.
    pub fn expose_secret(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for SecretBytes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecretBytes([REDACTED; {} bytes])", self.0.len())
    }
}

/// A stretched symmetric key of the cipher's required length.
///
/// Recomputed identically on decrypt from the same secret + salt; never
/// stored, transmitted, or cached across calls.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey(Vec<u8>);

impl DerivedKey {
    pub(crate) fn from_vec(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn expose_secret(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DerivedKey([REDACTED; {} bytes])", self.0.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_never_prints_contents() {
        let secret = SecretBytes::new(b"hunter2".to_vec());
        let rendered = format!("{secret:?}");
        assert!(rendered.contains("REDACTED"));
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn derived_key_reports_length() {
        let key = DerivedKey::from_vec(vec![0u8; 32]);
        assert_eq!(key.len(), 32);
        assert!(!key.is_empty());
    }
}
