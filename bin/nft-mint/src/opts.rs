//! Command line and environment configuration.

use alloy::{
    primitives::Address, signers::local::PrivateKeySigner, transports::http::reqwest::Url,
};
use clap::Parser;
use std::time::Duration;

use crate::{
    config::{ChainSpec, MintConfig},
    constants::{chain, defaults},
    error::Error,
};

/// Mint tokens on an owner-gated contract.
///
/// Every value can be given on the command line or through the environment (including a
/// `.env` file in the working directory). Command line values win.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "nft-mint", version, about, long_about = None)]
pub struct MintArgs {
    /// Address of the token contract.
    #[arg(value_name = "CONTRACT_ADDRESS", env = "CONTRACT_ADDRESS")]
    pub contract_address: Option<String>,

    /// Number of tokens to mint.
    #[arg(value_name = "MINT_AMOUNT", env = "MINT_AMOUNT", default_value_t = defaults::MINT_AMOUNT)]
    pub amount: u64,

    /// Receiver of the minted tokens. Defaults to the caller.
    #[arg(value_name = "MINT_TO", env = "MINT_TO")]
    pub mint_to: Option<String>,

    /// Hex-encoded private key of the contract owner.
    #[arg(long, env = "PRIVATE_KEY", hide_env_values = true)]
    pub private_key: Option<String>,

    /// JSON-RPC endpoint of the chain.
    #[arg(long, env = "RPC_URL", default_value = chain::DEFAULT_RPC_URL)]
    pub rpc_url: String,

    /// Chain ID used when signing. Any value other than the default is shown as a custom chain.
    #[arg(long, env = "CHAIN_ID", default_value_t = chain::CHAIN_ID)]
    pub chain_id: u64,

    /// Seconds to wait for the transaction receipt.
    #[arg(long, default_value_t = defaults::RECEIPT_TIMEOUT_SECS)]
    pub receipt_timeout: u64,

    /// Milliseconds between receipt polls.
    #[arg(long, default_value_t = defaults::POLL_INTERVAL_MS)]
    pub poll_interval: u64,

    /// Simulate the mint without submitting a transaction.
    #[arg(long)]
    pub dry_run: bool,
}

impl MintArgs {
    /// Validate the arguments and build the [`MintConfig`].
    ///
    /// Does not touch the network.
    pub fn resolve(self) -> Result<MintConfig, Error> {
        let contract = required("CONTRACT_ADDRESS", self.contract_address)?;
        let key = required("PRIVATE_KEY", self.private_key)?;

        let contract = parse_address("CONTRACT_ADDRESS", &contract)?;
        let signer: PrivateKeySigner = key
            .trim()
            .parse()
            .map_err(|err| Error::invalid("PRIVATE_KEY", err))?;

        let recipient = match self.mint_to.as_deref().map(str::trim) {
            Some(to) if !to.is_empty() => parse_address("MINT_TO", to)?,
            _ => signer.address(),
        };

        let rpc_url: Url = self
            .rpc_url
            .parse()
            .map_err(|err| Error::invalid("RPC_URL", err))?;

        if self.receipt_timeout == 0 {
            return Err(Error::invalid("receipt timeout", "must be at least one second"));
        }
        if self.poll_interval == 0 {
            return Err(Error::invalid("poll interval", "must be at least one millisecond"));
        }

        Ok(MintConfig {
            chain: ChainSpec::zksync_os_testnet(rpc_url).with_id(self.chain_id),
            contract,
            amount: self.amount,
            recipient,
            signer,
            receipt_timeout: Duration::from_secs(self.receipt_timeout),
            poll_interval: Duration::from_millis(self.poll_interval),
            dry_run: self.dry_run,
        })
    }
}

fn required(name: &'static str, value: Option<String>) -> Result<String, Error> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or(Error::MissingConfig(name))
}

fn parse_address(name: &'static str, value: &str) -> Result<Address, Error> {
    value
        .trim()
        .parse()
        .map_err(|err| Error::invalid(name, err))
}
