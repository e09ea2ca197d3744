//! Reference check-in flow against Solana devnet.
//!
//! Runs one check-in for a hard-coded sample identity; a real deployment
//! takes the identity from operator input.

use voter_checkin_example::{CheckInService, Config, HttpProbe, LedgerClient, OfflineQueue};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env()?;
    let client = LedgerClient::new(&config)?;
    let probe = HttpProbe::new(&config.ledger_rpc_url)?;
    let queue = OfflineQueue::new(&config.offline_votes_file);

    let service = CheckInService::new(&client, &probe, queue, config.qr_output_path.clone());

    let voter_id = "voter123";
    let voting_session_id = "session456";
    service.run(voter_id, voting_session_id).await
}
