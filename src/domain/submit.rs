//! Seam between the check-in flow and the concrete ledger client.

use async_trait::async_trait;

use crate::domain::model::VoteRecord;

/// Result of one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The transfer landed on-ledger with this signature.
    Submitted(String),
    /// The submission log already holds a signature for this record.
    AlreadySubmitted(String),
    /// Payer balance below the transfer amount; skipped without error.
    InsufficientFunds,
}

/// Anything that can place a vote record on the ledger.
///
/// The offline queue and the orchestrator only see this trait, so tests can
/// drive them with fakes instead of a live RPC endpoint.
#[async_trait]
pub trait VoteSubmitter: Send + Sync {
    async fn submit(&self, record: &VoteRecord) -> anyhow::Result<SubmitOutcome>;
}
