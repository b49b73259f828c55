//! Integration tests for the linkseal codec.

use std::sync::Arc;
use std::thread;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use linkseal::codec::{open, seal, CiphertextBlob, SymmetricLinkCodec};
use linkseal::crypto::{NONCE_LEN, TAG_LEN};
use linkseal::errors::LinkSealError;

fn assert_decryption_failed<T: std::fmt::Debug>(result: Result<T, LinkSealError>) {
    assert!(
        matches!(result, Err(LinkSealError::DecryptionFailed)),
        "expected DecryptionFailed, got {result:?}"
    );
}

// ---------------------------------------------------------------------------
// Round trips
// ---------------------------------------------------------------------------

#[test]
fn seal_open_roundtrip() {
    let cases = [
        ("https://example.com/secret", "pw123"),
        ("https://example.com/ünïcødé/路径?q=1", "correct horse battery staple"),
        ("", "pw"),
        ("https://example.com", ""),
        ("https://example.com/😀", "пароль 🔑"),
    ];

    for (plaintext, password) in cases {
        let blob = seal(plaintext, password).expect("seal");
        assert_eq!(open(&blob, password).expect("open"), plaintext);
    }
}

#[test]
fn concrete_scenario() {
    let blob = seal("https://example.com/secret", "pw123").unwrap();

    assert_eq!(open(&blob, "pw123").unwrap(), "https://example.com/secret");
    assert_decryption_failed(open(&blob, "wrongpw"));

    let truncated = &blob[..blob.len() - 1];
    assert_decryption_failed(open(truncated, "pw123"));
}

#[test]
fn long_plaintext_roundtrip() {
    let url = format!("https://example.com/?q={}", "x".repeat(10_000));
    let blob = seal(&url, "pw").unwrap();
    assert_eq!(open(&blob, "pw").unwrap(), url);
}

// ---------------------------------------------------------------------------
// Blob shape
// ---------------------------------------------------------------------------

#[test]
fn blob_length_is_nonce_plus_plaintext_plus_tag() {
    let plaintext = "https://example.com/secret";
    let blob = seal(plaintext, "pw123").unwrap();
    let raw = BASE64.decode(&blob).unwrap();
    assert_eq!(raw.len(), NONCE_LEN + plaintext.len() + TAG_LEN);
}

#[test]
fn seal_is_not_deterministic() {
    let a = seal("https://example.com/secret", "pw123").unwrap();
    let b = seal("https://example.com/secret", "pw123").unwrap();
    assert_ne!(a, b, "two seals of the same input must differ");

    // The difference starts with the nonce.
    let ra = BASE64.decode(&a).unwrap();
    let rb = BASE64.decode(&b).unwrap();
    assert_ne!(ra[..NONCE_LEN], rb[..NONCE_LEN]);
}

// ---------------------------------------------------------------------------
// Failures are uniform
// ---------------------------------------------------------------------------

#[test]
fn wrong_password_fails() {
    let blob = seal("https://example.com/secret", "password1").unwrap();
    for wrong in ["password2", "Password1", "password1 ", ""] {
        assert_decryption_failed(open(&blob, wrong));
    }
}

#[test]
fn flipping_any_byte_fails() {
    let blob = seal("https://example.com/secret", "pw123").unwrap();
    let raw = BASE64.decode(&blob).unwrap();

    for i in 0..raw.len() {
        let mut tampered = raw.clone();
        tampered[i] ^= 0x01;
        assert_decryption_failed(open(&BASE64.encode(&tampered), "pw123"));
    }
}

#[test]
fn short_and_malformed_input_fails() {
    for len in 0..NONCE_LEN {
        assert_decryption_failed(open(&BASE64.encode(vec![0u8; len]), "pw"));
    }
    assert_decryption_failed(open("%%% not base64 %%%", "pw"));
    assert_decryption_failed(open("AAAA=", "pw"));
}

#[test]
fn truncated_payload_fails() {
    let blob = seal("https://example.com/secret", "pw123").unwrap();
    let raw = BASE64.decode(&blob).unwrap();
    // Drop the last byte of the tag and re-encode cleanly.
    assert_decryption_failed(open(&BASE64.encode(&raw[..raw.len() - 1]), "pw123"));
    // Nonce with nothing after it.
    assert_decryption_failed(open(&BASE64.encode(&raw[..NONCE_LEN]), "pw123"));
}

#[test]
fn error_message_does_not_reveal_the_cause() {
    let blob = seal("https://example.com/secret", "pw123").unwrap();

    let wrong_pw = open(&blob, "nope").unwrap_err().to_string();
    let garbage = open("!!!", "pw123").unwrap_err().to_string();
    let short = open("AAAA", "pw123").unwrap_err().to_string();

    assert_eq!(wrong_pw, garbage);
    assert_eq!(wrong_pw, short);
}

// ---------------------------------------------------------------------------
// Interop with the browser implementation
// ---------------------------------------------------------------------------

// Produced in JavaScript with WebCrypto: SHA-256 of the password imported
// as a raw AES-GCM key, 12-byte random iv, `btoa(iv + ciphertext)`.
const BROWSER_VECTORS: &[(&str, &str, &str)] = &[
    (
        "9/uL9EOaRlXNtT2HyuxTUtuRU4iyu8hOhlZg0lky+jCehLrVFVSOwpkO0rFZOSEJGm7/sI4Y",
        "pw123",
        "https://example.com/secret",
    ),
    (
        "CR6PlGjzbi1WXvzSc4jFS3F8SpbhBhKqeScmpT1TT+KteWqvb+D0Q3YIBVkySpwFEBPh6AE/lnb2AqMS0O+gwU1temxSqA==",
        "correct horse battery staple",
        "https://example.com/ünïcødé/路径?q=1",
    ),
    ("sBeF7I9UnODmb0MnBwRZpQOhLkLb4PwKW2K3lw==", "pw123", ""),
];

#[test]
fn opens_blobs_sealed_by_the_browser() {
    for (blob, password, expected) in BROWSER_VECTORS {
        assert_eq!(open(blob, password).unwrap(), *expected);
    }
}

#[test]
fn browser_blob_with_wrong_password_fails() {
    let (blob, _, _) = BROWSER_VECTORS[0];
    assert_decryption_failed(open(blob, "wrongpw"));
}

#[test]
fn truncated_browser_blob_fails() {
    let (blob, password, _) = BROWSER_VECTORS[0];
    assert_decryption_failed(open(&blob[..blob.len() - 1], password));
}

// ---------------------------------------------------------------------------
// Typed API and concurrency
// ---------------------------------------------------------------------------

#[test]
fn typed_codec_matches_string_helpers() {
    let codec = SymmetricLinkCodec::new();
    let blob = codec.seal("https://example.com/a", "pw").unwrap();

    let text = blob.to_string();
    let parsed: CiphertextBlob = text.parse().unwrap();
    assert_eq!(parsed, blob);
    assert_eq!(open(&text, "pw").unwrap(), "https://example.com/a");
    assert_eq!(codec.open(&parsed, "pw").unwrap(), "https://example.com/a");
}

#[test]
fn concurrent_seal_and_open() {
    let codec = Arc::new(SymmetricLinkCodec::new());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let codec = Arc::clone(&codec);
            thread::spawn(move || {
                let url = format!("https://example.com/{i}");
                let password = format!("pw-{i}");
                for _ in 0..50 {
                    let blob = codec.seal(&url, &password).unwrap();
                    assert_eq!(codec.open(&blob, &password).unwrap(), url);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("worker thread panicked");
    }
}
