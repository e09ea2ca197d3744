//! Submission log: the local ledger cache that makes retried submissions
//! idempotent.

use voter_checkin_example::{SubmissionLog, VoteRecord};

#[test]
fn lookup_on_absent_log_is_none() {
    let dir = tempfile::tempdir().unwrap();
    let log = SubmissionLog::new(&dir.path().join("submitted_votes.json"));

    let record = VoteRecord::new("voter123", "session456");
    assert!(log.lookup(&record.request_id()).unwrap().is_none());
}

#[test]
fn recorded_signature_survives_a_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("submitted_votes.json");

    let record = VoteRecord::new("voter123", "session456");
    SubmissionLog::new(&path)
        .record(&record.request_id(), "sig-abc")
        .unwrap();

    // A fresh handle reads the same backing file.
    let reloaded = SubmissionLog::new(&path);
    assert_eq!(
        reloaded.lookup(&record.request_id()).unwrap().as_deref(),
        Some("sig-abc")
    );
}

#[test]
fn request_id_is_deterministic_per_record() {
    let a = VoteRecord::new("voter123", "session456");
    let b = VoteRecord::new("voter123", "session456");
    assert_eq!(a.request_id(), b.request_id());

    // Any field change produces a different id.
    let other_voter = VoteRecord::new("voter124", "session456");
    assert_ne!(a.request_id(), other_voter.request_id());

    let mut tampered = a.clone();
    tampered.session_token = "deadbeef".to_string();
    assert_ne!(a.request_id(), tampered.request_id());

    // And the id is distinct from the session token itself.
    assert_ne!(a.request_id(), a.session_token);
}
