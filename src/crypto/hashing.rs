// This file is used to derive the deterministic digests carried by a credential.

use sha2::{Digest, Sha256};

// Domain separation constant so request identifiers can never collide with
// session tokens.
const REQUEST_DOMAIN: &[u8] = b"VOTEREQ";

/// Computes the session token binding a voter identity to a voting session.
///
/// The token is the hex-encoded SHA-256 of `voter_id + "-" + voting_session_id`.
/// Both the encoder and the decoder recompute it from the same inputs, so a
/// decoded record can be checked against its claimed fields.
pub fn session_token(voter_id: &str, voting_session_id: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(voter_id.as_bytes());
    hasher.update(b"-");
    hasher.update(voting_session_id.as_bytes());
    hex::encode(hasher.finalize())
}

/// Derives the request identifier used to deduplicate retried submissions.
///
/// Stable across retry attempts: the same record always maps to the same id.
pub fn request_id(voter_id: &str, voting_session_id: &str, session_token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(REQUEST_DOMAIN);
    hasher.update(voter_id.as_bytes());
    hasher.update(b"-");
    hasher.update(voting_session_id.as_bytes());
    hasher.update(b"-");
    hasher.update(session_token.as_bytes());
    hex::encode(hasher.finalize())
}
