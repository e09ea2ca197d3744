//! Domain model for voter check-in records.

use serde::{Deserialize, Serialize};

use crate::crypto::hashing;

/// A single check-in credential: who checked in, in which voting session,
/// and the token binding the two together.
///
/// This is also the wire shape of the QR payload and the queue file entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteRecord {
    pub voter_id: String,
    pub voting_session_id: String,
    pub session_token: String,
}

impl VoteRecord {
    /// Builds a record with a freshly computed session token.
    pub fn new(voter_id: &str, voting_session_id: &str) -> Self {
        Self {
            voter_id: voter_id.to_string(),
            voting_session_id: voting_session_id.to_string(),
            session_token: hashing::session_token(voter_id, voting_session_id),
        }
    }

    /// Recomputes the token from the carried identity fields.
    pub fn expected_token(&self) -> String {
        hashing::session_token(&self.voter_id, &self.voting_session_id)
    }

    /// True when the carried token matches the recomputed digest.
    pub fn token_is_valid(&self) -> bool {
        self.session_token == self.expected_token()
    }

    /// Deterministic identifier used to deduplicate retried submissions.
    pub fn request_id(&self) -> String {
        hashing::request_id(&self.voter_id, &self.voting_session_id, &self.session_token)
    }
}
