//! The check-in flow.
//!
//! Sequences the whole demonstration: encode a credential, scan it back,
//! submit or queue depending on connectivity, then drain the offline queue
//! opportunistically.

use std::path::PathBuf;

use crate::domain::credential::{self, ScanOutcome};
use crate::domain::model::VoteRecord;
use crate::domain::submit::{SubmitOutcome, VoteSubmitter};
use crate::infra::connectivity::Connectivity;
use crate::storage::queue::OfflineQueue;

/// Orchestrates one check-in run. Holds only trait objects and paths, so
/// tests can wire it with fakes and temp files.
pub struct CheckInService<'a> {
    submitter: &'a dyn VoteSubmitter,
    probe: &'a dyn Connectivity,
    queue: OfflineQueue,
    qr_output_path: PathBuf,
}

impl<'a> CheckInService<'a> {
    pub fn new(
        submitter: &'a dyn VoteSubmitter,
        probe: &'a dyn Connectivity,
        queue: OfflineQueue,
        qr_output_path: PathBuf,
    ) -> Self {
        Self {
            submitter,
            probe,
            queue,
            qr_output_path,
        }
    }

    /// Runs one full check-in for the given identity: encode, scan, submit
    /// or queue, then resync whatever is pending.
    pub async fn run(&self, voter_id: &str, voting_session_id: &str) -> anyhow::Result<()> {
        credential::encode(voter_id, voting_session_id, &self.qr_output_path)?;

        match credential::scan(&self.qr_output_path)? {
            ScanOutcome::NoCode => {
                println!("No QR code found!");
            }
            ScanOutcome::Tampered {
                record,
                expected_token,
            } => {
                println!(
                    "Rejecting tampered credential for voter {}: carried token {} does not match {}",
                    record.voter_id, record.session_token, expected_token
                );
            }
            ScanOutcome::Verified(record) => {
                println!("\nScanned data verified:");
                println!("Voter ID: {}", record.voter_id);
                println!("Voting Session ID: {}", record.voting_session_id);
                println!("Session Token: {}", record.session_token);
                self.submit_or_queue(record).await?;
            }
        }

        // Opportunistic resync, even when nothing was just enqueued.
        if self.probe.is_connected().await {
            println!("\nPrevious request reattempt:");
            println!("-------------------------------------");
            self.queue.drain(self.submitter).await?;
        }
        Ok(())
    }

    /// Submits when online; any submission error or a dead network routes
    /// the record into the offline queue instead.
    async fn submit_or_queue(&self, record: VoteRecord) -> anyhow::Result<()> {
        if !self.probe.is_connected().await {
            println!("No internet connection. Saving vote offline.");
            return self.queue.enqueue(record);
        }

        match self.submitter.submit(&record).await {
            Ok(SubmitOutcome::Submitted(signature)) => {
                println!("Transaction response: {}", signature);
            }
            Ok(SubmitOutcome::AlreadySubmitted(signature)) => {
                println!("Vote already on ledger: {}", signature);
            }
            Ok(SubmitOutcome::InsufficientFunds) => {
                println!("Insufficient funds for transaction. Skipping transaction.");
            }
            Err(e) => {
                println!("Blockchain submission failed: {}", e);
                self.queue.enqueue(record)?;
            }
        }
        Ok(())
    }
}
