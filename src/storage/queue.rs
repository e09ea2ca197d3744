// Durable offline holding area for vote records.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::domain::model::VoteRecord;
use crate::domain::submit::{SubmitOutcome, VoteSubmitter};

/// Counts from one drain pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DrainReport {
    /// Records confirmed on the ledger (including ones already there).
    pub submitted: usize,
    /// Records kept in the queue for the next pass.
    pub retained: usize,
}

/// Ordered queue of vote records persisted as a single JSON array file.
///
/// An absent file is the empty queue. Single-process assumption: no locking
/// on the backing file.
pub struct OfflineQueue {
    path: PathBuf,
}

impl OfflineQueue {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    /// Records currently held, oldest first.
    pub fn load(&self) -> anyhow::Result<Vec<VoteRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read offline queue {}", self.path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("offline queue {} is not valid JSON", self.path.display()))
    }

    fn store(&self, records: &[VoteRecord]) -> anyhow::Result<()> {
        let raw = serde_json::to_string(records)?;
        fs::write(&self.path, raw)
            .with_context(|| format!("failed to write offline queue {}", self.path.display()))
    }

    /// Appends one record, creating the backing file when absent.
    pub fn enqueue(&self, record: VoteRecord) -> anyhow::Result<()> {
        let mut records = self.load()?;
        records.push(record);
        self.store(&records)?;
        println!("Vote saved offline ({} pending).", records.len());
        Ok(())
    }

    /// Attempts to resubmit every queued record in original order.
    ///
    /// A failure on one record is printed and does not stop the rest. The
    /// backing file is rewritten with exactly the records that were not
    /// confirmed, so nothing is lost on a partial failure.
    pub async fn drain(&self, submitter: &dyn VoteSubmitter) -> anyhow::Result<DrainReport> {
        if !self.path.exists() {
            println!("No offline votes to sync.");
            return Ok(DrainReport::default());
        }

        let records = self.load()?;
        let mut submitted = 0;
        let mut retained = Vec::new();

        for record in records {
            match submitter.submit(&record).await {
                Ok(SubmitOutcome::Submitted(signature)) => {
                    println!("Synced vote for {}: {}", record.voter_id, signature);
                    submitted += 1;
                }
                Ok(SubmitOutcome::AlreadySubmitted(signature)) => {
                    println!(
                        "Vote for {} already on ledger: {}",
                        record.voter_id, signature
                    );
                    submitted += 1;
                }
                Ok(SubmitOutcome::InsufficientFunds) => {
                    println!(
                        "Skipping vote for {}: insufficient funds.",
                        record.voter_id
                    );
                    retained.push(record);
                }
                Err(e) => {
                    println!("Failed to sync vote for {}: {}", record.voter_id, e);
                    retained.push(record);
                }
            }
        }

        self.store(&retained)?;
        if retained.is_empty() {
            println!("All offline votes synchronized!");
        } else {
            println!("{} vote(s) retained for the next sync.", retained.len());
        }
        Ok(DrainReport {
            submitted,
            retained: retained.len(),
        })
    }
}
