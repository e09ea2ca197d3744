pub mod client;

pub use client::{LedgerClient, TRANSFER_LAMPORTS};
