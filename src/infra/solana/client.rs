// Responsible for all communication with the Solana ledger.

use std::str::FromStr;

use anyhow::Context;
use async_trait::async_trait;
use solana_client::client_error::{ClientError, ClientErrorKind};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    commitment_config::CommitmentConfig,
    pubkey::Pubkey,
    signer::{
        keypair::{read_keypair_file, Keypair},
        Signer,
    },
    system_instruction,
    transaction::Transaction,
};

use crate::domain::model::VoteRecord;
use crate::domain::submit::{SubmitOutcome, VoteSubmitter};
use crate::infra::config::Config;
use crate::infra::retry::{with_retry, MAX_ATTEMPTS, RETRY_DELAY};
use crate::storage::submission_log::SubmissionLog;

/// Lamports moved per check-in transfer. A placeholder unit value: the
/// transfer itself is the on-ledger record, no vote payload is encoded.
pub const TRANSFER_LAMPORTS: u64 = 100;

/// RPC client plus payer identity, wired from an explicit [`Config`].
pub struct LedgerClient {
    client: RpcClient,
    payer: Keypair,
    receiver: Pubkey,
    log: SubmissionLog,
}

impl LedgerClient {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let payer = read_keypair_file(&config.payer_keypair_path).map_err(|e| {
            anyhow::anyhow!(
                "failed to read keypair file {}: {}",
                config.payer_keypair_path.display(),
                e
            )
        })?;
        let receiver = Pubkey::from_str(&config.receiver_pubkey)
            .context("RECEIVER_PUBKEY is not a valid pubkey")?;
        let client = RpcClient::new_with_commitment(
            config.ledger_rpc_url.clone(),
            CommitmentConfig::confirmed(),
        );
        Ok(Self {
            client,
            payer,
            receiver,
            log: SubmissionLog::new(&config.submission_log_file),
        })
    }

    pub fn payer_pubkey(&self) -> Pubkey {
        self.payer.pubkey()
    }

    pub async fn payer_balance(&self) -> anyhow::Result<u64> {
        Ok(self.client.get_balance(&self.payer.pubkey()).await?)
    }

    /// Sends the unit transfer, retrying transport failures up to the fixed
    /// budget. A fresh blockhash is fetched per attempt.
    async fn send_transfer(&self) -> anyhow::Result<String> {
        let instruction =
            system_instruction::transfer(&self.payer.pubkey(), &self.receiver, TRANSFER_LAMPORTS);
        let client = &self.client;
        let payer = &self.payer;
        let instruction = &instruction;

        with_retry(MAX_ATTEMPTS, RETRY_DELAY, is_transport_error, move || {
            async move {
                let recent_blockhash = client.get_latest_blockhash().await?;
                let transaction = Transaction::new_signed_with_payer(
                    &[instruction.clone()],
                    Some(&payer.pubkey()),
                    &[payer],
                    recent_blockhash,
                );
                let signature = client.send_and_confirm_transaction(&transaction).await?;
                Ok(signature.to_string())
            }
        })
        .await
    }
}

#[async_trait]
impl VoteSubmitter for LedgerClient {
    /// Submits one record as a unit transfer to the configured counterparty.
    ///
    /// Deduplicates by request id through the submission log, then checks the
    /// payer balance, then sends. The signature is recorded in the log before
    /// returning, so a later run of the same record short-circuits.
    async fn submit(&self, record: &VoteRecord) -> anyhow::Result<SubmitOutcome> {
        let request_id = record.request_id();
        if let Some(signature) = self.log.lookup(&request_id)? {
            return Ok(SubmitOutcome::AlreadySubmitted(signature));
        }

        let balance = self.payer_balance().await?;
        if balance < TRANSFER_LAMPORTS {
            println!(
                "Insufficient funds. Current balance: {}, required: {}",
                balance, TRANSFER_LAMPORTS
            );
            return Ok(SubmitOutcome::InsufficientFunds);
        }

        let signature = self.send_transfer().await?;
        self.log.record(&request_id, &signature)?;
        Ok(SubmitOutcome::Submitted(signature))
    }
}

/// Transport-level RPC failures are worth retrying; anything the ledger
/// itself rejected is not.
fn is_transport_error(e: &anyhow::Error) -> bool {
    match e.downcast_ref::<ClientError>() {
        Some(err) => matches!(
            err.kind(),
            ClientErrorKind::Io(_) | ClientErrorKind::Reqwest(_) | ClientErrorKind::Middleware(_)
        ),
        None => false,
    }
}
