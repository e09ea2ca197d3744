pub mod app;
pub mod crypto;
pub mod domain;
pub mod infra;
pub mod storage;

// Convenience re-exports (keeps call-sites clean)
pub use app::checkin::CheckInService;
pub use crypto::hashing::{request_id, session_token};
pub use domain::credential::{encode, scan, ScanOutcome};
pub use domain::model::VoteRecord;
pub use domain::submit::{SubmitOutcome, VoteSubmitter};
pub use infra::config::Config;
pub use infra::connectivity::{Connectivity, HttpProbe};
pub use infra::solana::{LedgerClient, TRANSFER_LAMPORTS};
pub use storage::queue::{DrainReport, OfflineQueue};
pub use storage::submission_log::SubmissionLog;
