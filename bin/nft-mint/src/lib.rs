//! Owner-gated token minting.
//!
//! Reads a token contract's state, checks that the configured key owns the contract,
//! simulates and submits `mint`, waits for the receipt and reports how supply and the
//! recipient's balance changed.

pub mod client;
pub mod config;
pub mod constants;
pub mod contract;
pub mod display;
pub mod error;
pub mod gas;
pub mod mint;
pub mod opts;
pub mod provider;

pub use client::{MintReceipt, PreparedMint, TokenClient};
pub use config::{ChainSpec, MintConfig, MintParams};
pub use error::Error;
pub use mint::{MintOutcome, MintReport};
pub use provider::AlloyTokenClient;
