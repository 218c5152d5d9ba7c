#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! Edge-case tests for the datagram metadata codecs.
//! Covers boundary sizes, truncation, malformed grammar, and error payloads.

use i2p_datagrams::error::DatagramError;
use i2p_datagrams::sigtype::{self, SigTypeRole};
use i2p_datagrams::{I2PAddr, OfflineSignature, Options};

const ED25519: u16 = 7;

fn ed25519_block() -> OfflineSignature {
    OfflineSignature {
        expires: 2_000_000_000,
        transient_sig_type: ED25519,
        transient_public_key: vec![0x11; 32],
        signature: vec![0x22; 64],
    }
}

// ============================================================================
// OFFLINE SIGNATURE EDGE CASES
// ============================================================================

#[test]
fn test_offline_known_sizes_per_type() {
    // (dest type, transient type, expected total block size)
    let cases = [
        (7u16, 7u16, 102usize), // Ed25519 both: 6 + 32 + 64
        (0, 0, 174),            // DSA both: 6 + 128 + 40
        (0, 7, 78),             // Ed25519 transient, DSA destination: 6 + 32 + 40
        (7, 0, 198),            // DSA transient, Ed25519 destination: 6 + 128 + 64
    ];

    for (dest, transient, expected) in cases {
        let block = OfflineSignature {
            expires: 0,
            transient_sig_type: transient,
            transient_public_key: vec![0; sigtype::public_key_length(transient)],
            signature: vec![0; sigtype::signature_length(dest)],
        };
        assert_eq!(block.len(), expected, "dest {dest} transient {transient}");
        assert_eq!(block.to_bytes().len(), expected);

        let (_, consumed) = OfflineSignature::from_bytes(&block.to_bytes(), dest).unwrap();
        assert_eq!(consumed, expected);
    }
}

#[test]
fn test_offline_every_truncated_prefix_fails_cleanly() {
    let bytes = ed25519_block().to_bytes();
    for cut in 0..bytes.len() {
        match OfflineSignature::from_bytes(&bytes[..cut], ED25519) {
            Err(DatagramError::TooShort { required, actual }) => {
                assert_eq!(actual, cut);
                assert!(required > cut);
            }
            other => panic!("prefix of {cut} bytes: expected TooShort, got {other:?}"),
        }
    }
}

#[test]
fn test_offline_error_reports_required_total() {
    let bytes = ed25519_block().to_bytes();
    let err = OfflineSignature::from_bytes(&bytes[..50], ED25519).unwrap_err();
    assert_eq!(
        err,
        DatagramError::TooShort {
            required: 102,
            actual: 50
        }
    );
}

#[test]
fn test_offline_unknown_types_name_their_role() {
    let mut bytes = ed25519_block().to_bytes();

    let err = OfflineSignature::from_bytes(&bytes, 255).unwrap_err();
    assert!(matches!(
        err,
        DatagramError::UnknownSigType {
            code: 255,
            role: SigTypeRole::Destination
        }
    ));

    bytes[4..6].copy_from_slice(&255u16.to_be_bytes());
    let err = OfflineSignature::from_bytes(&bytes, ED25519).unwrap_err();
    assert!(matches!(
        err,
        DatagramError::UnknownSigType {
            code: 255,
            role: SigTypeRole::Transient
        }
    ));
}

#[test]
fn test_offline_transient_type_checked_before_destination_type() {
    // both codes unknown: the wire-carried transient code wins
    let mut bytes = ed25519_block().to_bytes();
    bytes[4..6].copy_from_slice(&200u16.to_be_bytes());

    let err = OfflineSignature::from_bytes(&bytes, 201).unwrap_err();
    assert_eq!(
        err,
        DatagramError::UnknownSigType {
            code: 200,
            role: SigTypeRole::Transient
        }
    );
}

#[test]
fn test_offline_decode_copies_out_of_input() {
    let mut bytes = ed25519_block().to_bytes();
    let (decoded, _) = OfflineSignature::from_bytes(&bytes, ED25519).unwrap();

    // clobbering the input must not affect the decoded value
    bytes.fill(0);
    assert!(decoded.transient_public_key.iter().all(|&b| b == 0x11));
    assert!(decoded.signature.iter().all(|&b| b == 0x22));
}

#[test]
fn test_offline_expiry_boundaries() {
    let block = OfflineSignature {
        expires: u32::MAX,
        ..ed25519_block()
    };
    assert!(!block.is_expired_at(u64::from(u32::MAX)));
    assert!(block.is_expired_at(u64::from(u32::MAX) + 1));

    let epoch = OfflineSignature {
        expires: 0,
        ..ed25519_block()
    };
    assert!(!epoch.is_expired_at(0));
    assert!(epoch.is_expired_at(1));
}

// ============================================================================
// OPTIONS MAPPING EDGE CASES
// ============================================================================

#[test]
fn test_options_empty_mapping_is_two_zero_bytes() {
    let (opts, consumed) = Options::from_bytes(&[0x00, 0x00]).unwrap();
    assert!(opts.is_empty());
    assert_eq!(consumed, 2);
    assert_eq!(opts.to_bytes().unwrap(), vec![0x00, 0x00]);
}

#[test]
fn test_options_empty_mapping_with_trailing_payload() {
    let data = [0x00, 0x00, 0xDE, 0xAD, 0xBE, 0xEF];
    let (opts, consumed) = Options::from_bytes(&data).unwrap();
    assert!(opts.is_empty());
    assert_eq!(consumed, 2);
}

#[test]
fn test_options_declared_size_larger_than_buffer() {
    let err = Options::from_bytes(&[0xFF, 0xFF, 0x01]).unwrap_err();
    assert_eq!(
        err,
        DatagramError::SizeMismatch {
            declared: 0xFFFF,
            available: 1
        }
    );
}

#[test]
fn test_options_zero_length_key_and_value() {
    // "" = "" ; is grammatically valid: 00 3d 00 3b
    let data = [0x00, 0x04, 0x00, b'=', 0x00, b';'];
    let (opts, consumed) = Options::from_bytes(&data).unwrap();
    assert_eq!(consumed, 6);
    assert_eq!(opts.get(""), Some(""));
}

#[test]
fn test_options_separator_outside_region_rejected() {
    // region covers only the key; the '=' sits past the declared size
    let data = [0x00, 0x02, 0x01, b'a', b'=', 0x01, b'b', b';'];
    let err = Options::from_bytes(&data).unwrap_err();
    assert_eq!(err, DatagramError::MalformedPair { offset: 4 });
}

#[test]
fn test_options_garbage_after_valid_pair() {
    // one valid pair, then a stray byte inside the declared region
    let mut data = vec![0x00, 0x07];
    data.extend_from_slice(&[0x01, b'a', b'=', 0x01, b'1', b';']);
    data.push(0xFF); // length prefix claiming 255 bytes at region end
    let err = Options::from_bytes(&data).unwrap_err();
    assert_eq!(err, DatagramError::MalformedPair { offset: 8 });
}

#[test]
fn test_options_invalid_utf8_rejected() {
    // key bytes are not valid UTF-8
    let data = [0x00, 0x06, 0x02, 0xC3, 0x28, b'=', 0x00, b';'];
    let err = Options::from_bytes(&data).unwrap_err();
    assert_eq!(err, DatagramError::MalformedPair { offset: 2 });
}

#[test]
fn test_options_long_string_errors_name_the_key() {
    let mut opts = Options::new();
    opts.set("ok", "fine");
    opts.set("bad-key", "v".repeat(300));

    match opts.to_bytes() {
        Err(DatagramError::ValueTooLong { key }) => assert_eq!(key, "bad-key"),
        other => panic!("expected ValueTooLong, got {other:?}"),
    }
}

#[test]
fn test_options_byte_len_matches_encoding() {
    let opts = Options::from_map([("a", "1"), ("bb", "22"), ("ccc", "333")]);
    assert_eq!(opts.byte_len().unwrap(), opts.to_bytes().unwrap().len());
}

#[test]
fn test_options_reencode_is_byte_identical() {
    // signature stability: decode then re-encode must reproduce the bytes
    let original = Options::from_map([("host", "example.i2p"), ("port", "8080")])
        .to_bytes()
        .unwrap();
    let (decoded, _) = Options::from_bytes(&original).unwrap();
    assert_eq!(decoded.to_bytes().unwrap(), original);
}

// ============================================================================
// ADDRESS EDGE CASES
// ============================================================================

#[test]
fn test_addr_port_at_limits() {
    assert_eq!(I2PAddr::parse("d:0").unwrap().port, 0);
    assert_eq!(I2PAddr::parse("d:65535").unwrap().port, 65535);
    assert!(matches!(
        I2PAddr::parse("d:65536").unwrap_err(),
        DatagramError::InvalidPort { .. }
    ));
}

#[test]
fn test_addr_trailing_colon_is_invalid_port() {
    let err = I2PAddr::parse("dest.i2p:").unwrap_err();
    assert_eq!(
        err,
        DatagramError::InvalidPort {
            segment: String::new()
        }
    );
}

#[test]
fn test_addr_lone_colon_is_invalid_port() {
    assert!(matches!(
        I2PAddr::parse(":").unwrap_err(),
        DatagramError::InvalidPort { .. }
    ));
}

#[test]
fn test_addr_multi_colon_destination_roundtrip() {
    let addr = I2PAddr::parse("a:b:c:1234").unwrap();
    assert_eq!(addr.destination, "a:b:c");
    assert_eq!(addr.port, 1234);

    // short destinations format without truncation and re-parse exactly
    let reparsed = I2PAddr::parse(&addr.to_string()).unwrap();
    assert_eq!(reparsed, addr);
}

#[test]
fn test_addr_independent_parses_compare_equal() {
    let a = I2PAddr::parse("same.i2p:4444").unwrap();
    let b = I2PAddr::parse("same.i2p:4444").unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_addr_empty_destination_never_equals_named_one() {
    assert_ne!(I2PAddr::anonymous(4444), I2PAddr::new("named.i2p", 4444));
}

// ============================================================================
// ERROR SURFACE
// ============================================================================

#[test]
fn test_error_messages_are_descriptive() {
    let err = Options::from_bytes(&[0x00]).unwrap_err();
    assert_eq!(err.to_string(), "data too short: need 2 bytes, got 1");

    let err = OfflineSignature::from_bytes(&ed25519_block().to_bytes(), 255).unwrap_err();
    assert_eq!(err.to_string(), "unknown destination signature type 255");

    let err = I2PAddr::parse("x:-1").unwrap_err();
    assert_eq!(err.to_string(), "invalid port \"-1\"");
}

#[test]
fn test_errors_serialize_for_transport() {
    let err = DatagramError::MalformedPair { offset: 7 };
    let json = serde_json::to_string(&err).unwrap();
    let back: DatagramError = serde_json::from_str(&json).unwrap();
    assert_eq!(back, err);
}
