use std::str::FromStr;

use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signer::keypair::read_keypair_file;
use solana_sdk::signer::Signer;

use voter_checkin_example::infra::config::Config;
use voter_checkin_example::infra::solana::TRANSFER_LAMPORTS;

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin preflight\n\
         \n\
         Env vars (defaults in parentheses):\n\
           LEDGER_RPC_URL (https://api.devnet.solana.com)\n\
           PAYER_KEYPAIR_PATH (~/.config/solana/id.json)\n\
           RECEIVER_PUBKEY (required)\n\
           OFFLINE_VOTES_FILE (offline_votes.json)\n\
           SUBMISSION_LOG_FILE (submitted_votes.json)\n\
           QR_OUTPUT_PATH (voter_qr_code.png)\n"
    );
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }

    let config = Config::from_env()?;

    println!("> Preflight:");
    println!("  LEDGER_RPC_URL={}", config.ledger_rpc_url);
    println!("  RECEIVER_PUBKEY={}", config.receiver_pubkey);
    println!("  OFFLINE_VOTES_FILE={}", config.offline_votes_file.display());
    println!("  QR_OUTPUT_PATH={}", config.qr_output_path.display());

    // Same payer location the flow uses.
    let payer = read_keypair_file(&config.payer_keypair_path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read {}: {}",
            config.payer_keypair_path.display(),
            e
        )
    })?;

    let receiver = Pubkey::from_str(&config.receiver_pubkey)
        .map_err(|e| anyhow::anyhow!("RECEIVER_PUBKEY is not a valid pubkey: {}", e))?;

    let client = RpcClient::new_with_commitment(
        config.ledger_rpc_url.clone(),
        CommitmentConfig::confirmed(),
    );

    // Basic RPC connectivity
    let version = client.get_version().await?;
    println!("  RPC version: {}", version.solana_core);

    // Payer balance
    let balance_lamports = client.get_balance(&payer.pubkey()).await?;
    let sol = balance_lamports as f64 / 1_000_000_000_f64;
    println!("  Payer: {}", payer.pubkey());
    println!(
        "  Payer balance: {} lamports (~{:.6} SOL)",
        balance_lamports, sol
    );
    if balance_lamports < TRANSFER_LAMPORTS {
        eprintln!("  Warning: payer cannot fund even one check-in transfer.");
    }

    // Receiver existence is informational: a system transfer creates the
    // account when it does not exist yet.
    match client.get_account(&receiver).await {
        Ok(_) => println!("  Receiver account exists."),
        Err(_) => println!("  Receiver account not found yet (first transfer will create it)."),
    }

    println!("> Preflight OK.");
    Ok(())
}
