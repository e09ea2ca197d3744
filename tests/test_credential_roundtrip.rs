//! Credential round-trip tests: what the encoder writes, the decoder must
//! read back and verify, and anything tampered or malformed must be caught.

use qrcode::QrCode;
use sha2::{Digest, Sha256};
use voter_checkin_example::{encode, scan, ScanOutcome, VoteRecord};

fn scratch_png(dir: &tempfile::TempDir, name: &str) -> std::path::PathBuf {
    dir.path().join(name)
}

/// Renders an arbitrary payload as a QR PNG, bypassing the encoder.
fn write_raw_qr(path: &std::path::Path, payload: &str) {
    let code = QrCode::new(payload.as_bytes()).unwrap();
    let img = code
        .render::<image::Luma<u8>>()
        .module_dimensions(10, 10)
        .build();
    img.save(path).unwrap();
}

#[test]
fn roundtrip_verifies_session_token() {
    let dir = tempfile::tempdir().unwrap();
    let path = scratch_png(&dir, "credential.png");

    let encoded = encode("voter123", "session456", &path).unwrap();

    let mut hasher = Sha256::new();
    hasher.update(b"voter123-session456");
    let expected_token = hex::encode(hasher.finalize());
    assert_eq!(encoded.session_token, expected_token);

    match scan(&path).unwrap() {
        ScanOutcome::Verified(record) => {
            assert_eq!(record, encoded);
            assert_eq!(record.session_token, expected_token);
        }
        other => panic!("expected Verified, got {:?}", other),
    }
}

#[test]
fn tampered_token_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = scratch_png(&dir, "tampered.png");

    let mut record = VoteRecord::new("voter123", "session456");
    record.session_token = "0000".repeat(16);
    write_raw_qr(&path, &serde_json::to_string(&record).unwrap());

    match scan(&path).unwrap() {
        ScanOutcome::Tampered {
            record: decoded,
            expected_token,
        } => {
            assert_eq!(decoded.session_token, record.session_token);
            assert_eq!(expected_token, decoded.expected_token());
            assert!(!decoded.token_is_valid());
        }
        other => panic!("expected Tampered, got {:?}", other),
    }
}

#[test]
fn blank_image_yields_no_code() {
    let dir = tempfile::tempdir().unwrap();
    let path = scratch_png(&dir, "blank.png");

    let blank = image::GrayImage::from_pixel(200, 200, image::Luma([255u8]));
    blank.save(&path).unwrap();

    assert!(matches!(scan(&path).unwrap(), ScanOutcome::NoCode));
}

#[test]
fn malformed_payload_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = scratch_png(&dir, "garbage.png");

    write_raw_qr(&path, "this is not a vote record");

    let err = scan(&path).unwrap_err();
    assert!(err.to_string().contains("not a valid vote record"));
}

#[test]
fn empty_identity_fields_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = scratch_png(&dir, "never-written.png");

    assert!(encode("", "session456", &path).is_err());
    assert!(encode("voter123", "", &path).is_err());
    assert!(!path.exists());
}
