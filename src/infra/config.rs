//! Centralized configuration (environment variables + defaults).

use std::path::PathBuf;

use anyhow::Context;

/// Public devnet endpoint used when `LEDGER_RPC_URL` is unset.
pub const DEVNET_RPC_URL: &str = "https://api.devnet.solana.com";

/// Runtime configuration, resolved once in `main` and passed into each
/// component at construction.
#[derive(Debug, Clone)]
pub struct Config {
    /// Ledger RPC base URL; also the connectivity-probe target.
    pub ledger_rpc_url: String,
    /// Path to the payer keypair file (tilde-expanded).
    pub payer_keypair_path: PathBuf,
    /// Counterparty address for the check-in transfer.
    pub receiver_pubkey: String,
    /// Backing file for the offline vote queue.
    pub offline_votes_file: PathBuf,
    /// Backing file for the submission log (request id -> signature).
    pub submission_log_file: PathBuf,
    /// Where the QR artifact is written.
    pub qr_output_path: PathBuf,
}

impl Config {
    /// Loads configuration from the environment, filling defaults where unset.
    ///
    /// `RECEIVER_PUBKEY` is required; everything else has a devnet-friendly
    /// default.
    pub fn from_env() -> anyhow::Result<Self> {
        let payer = std::env::var("PAYER_KEYPAIR_PATH")
            .unwrap_or_else(|_| "~/.config/solana/id.json".to_string());
        Ok(Self {
            ledger_rpc_url: std::env::var("LEDGER_RPC_URL")
                .unwrap_or_else(|_| DEVNET_RPC_URL.to_string()),
            payer_keypair_path: PathBuf::from(shellexpand::tilde(&payer).to_string()),
            receiver_pubkey: std::env::var("RECEIVER_PUBKEY")
                .context("RECEIVER_PUBKEY must be set")?,
            offline_votes_file: env_path("OFFLINE_VOTES_FILE", "offline_votes.json"),
            submission_log_file: env_path("SUBMISSION_LOG_FILE", "submitted_votes.json"),
            qr_output_path: env_path("QR_OUTPUT_PATH", "voter_qr_code.png"),
        })
    }
}

fn env_path(var: &str, default: &str) -> PathBuf {
    std::env::var(var)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(default))
}
