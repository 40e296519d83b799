//! tests/tamper_tests.rs
//! Wrong-key rejection, bit-flip detection, and salt/iv freshness.

mod common;

use common::{OTHER_KEY, TEST_DATA, TEST_KEY};
use passlock::{decrypt_data, encrypt_data, Crypter, CrypterConfig};

#[tokio::test]
async fn wrong_key_is_benign_failure_not_error() {
    let container = encrypt_data(TEST_DATA, TEST_KEY).await.unwrap();

    // No panic, no Err — an explicit outcome the caller can branch on.
    let outcome = decrypt_data(&container, OTHER_KEY).await.unwrap();
    assert!(!outcome.is_authenticated());
    assert!(outcome.into_plaintext().is_none());
}

#[tokio::test]
async fn flipped_bit_in_tag_fails_authentication() {
    let container = encrypt_data(TEST_DATA, TEST_KEY).await.unwrap();
    let bytes = hex::decode(&container).unwrap();

    // Tag occupies bytes 32..48.
    for offset in [32, 40, 47] {
        let mut tampered = bytes.clone();
        tampered[offset] ^= 0x01;
        let outcome = decrypt_data(&hex::encode(&tampered), TEST_KEY)
            .await
            .unwrap();
        assert!(
            !outcome.is_authenticated(),
            "bit flip at tag byte {offset} went undetected"
        );
    }

    // Untampered control still decrypts.
    assert!(decrypt_data(&hex::encode(&bytes), TEST_KEY)
        .await
        .unwrap()
        .is_authenticated());
}

#[tokio::test]
async fn flipped_bit_in_ciphertext_fails_authentication() {
    let container = encrypt_data(TEST_DATA, TEST_KEY).await.unwrap();
    let bytes = hex::decode(&container).unwrap();

    for bit in 0..8 {
        let mut tampered = bytes.clone();
        let last = tampered.len() - 1; // inside the ciphertext region
        tampered[last] ^= 1 << bit;
        let outcome = decrypt_data(&hex::encode(&tampered), TEST_KEY)
            .await
            .unwrap();
        assert!(
            !outcome.is_authenticated(),
            "ciphertext bit flip {bit} went undetected"
        );
    }
}

#[tokio::test]
async fn truncated_ciphertext_fails_authentication() {
    let container = encrypt_data(TEST_DATA, TEST_KEY).await.unwrap();

    // Still ≥ 96 hex chars, so it parses — but the tag no longer verifies.
    let truncated = &container[..container.len() - 2];
    let outcome = decrypt_data(truncated, TEST_KEY).await.unwrap();
    assert!(!outcome.is_authenticated());
}

#[tokio::test]
async fn salt_and_iv_are_fresh_per_call() {
    let a = encrypt_data(TEST_DATA, TEST_KEY).await.unwrap();
    let b = encrypt_data(TEST_DATA, TEST_KEY).await.unwrap();

    // Identical secret and plaintext, yet salt (hex 0..32) and iv
    // (hex 32..64) never repeat.
    assert_ne!(&a[..32], &b[..32], "salt reused across calls");
    assert_ne!(&a[32..64], &b[32..64], "iv reused across calls");
    assert_ne!(a, b);
}

#[tokio::test]
async fn binary_containers_detect_tampering_too() {
    let crypter = Crypter::new(CrypterConfig::default()).unwrap();
    let mut container = crypter
        .encrypt_data(TEST_DATA, TEST_KEY)
        .await
        .unwrap()
        .into_bytes();

    let last = container.len() - 1;
    container[last] ^= 0x80;
    let outcome = crypter.decrypt_data(&container, TEST_KEY).await.unwrap();
    assert!(!outcome.is_authenticated());
}
