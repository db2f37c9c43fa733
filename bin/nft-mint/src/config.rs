//! Chain descriptor and resolved invocation parameters.

use alloy::{
    primitives::Address, signers::local::PrivateKeySigner, transports::http::reqwest::Url,
};
use std::time::Duration;

use crate::constants::chain;

/// Native currency metadata of a chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeCurrency {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

/// Chain the tool talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainSpec {
    /// EIP-155 chain ID, pinned on every submitted transaction.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Short network tag.
    pub network: String,
    pub native_currency: NativeCurrency,
    /// HTTP JSON-RPC endpoint.
    pub rpc_url: Url,
}

impl ChainSpec {
    /// The zkSync OS developer preview, reached through `rpc_url`.
    pub fn zksync_os_testnet(rpc_url: Url) -> Self {
        Self {
            id: chain::CHAIN_ID,
            name: chain::NAME.to_string(),
            network: chain::NETWORK.to_string(),
            native_currency: NativeCurrency {
                name: chain::currency::NAME.to_string(),
                symbol: chain::currency::SYMBOL.to_string(),
                decimals: chain::currency::DECIMALS,
            },
            rpc_url,
        }
    }

    /// Override the chain ID.
    ///
    /// A different ID no longer describes the named network, so the descriptor is renamed
    /// to a custom chain. RPC endpoint and currency are kept.
    pub fn with_id(mut self, id: u64) -> Self {
        if id != self.id {
            self.id = id;
            self.name = format!("Custom chain {id}");
            self.network = "custom".to_string();
        }
        self
    }
}

/// Fully resolved configuration, built once at startup.
#[derive(Debug, Clone)]
pub struct MintConfig {
    pub chain: ChainSpec,
    /// Token contract to mint on.
    pub contract: Address,
    /// Number of tokens to mint.
    pub amount: u64,
    /// Receiver of the minted tokens.
    pub recipient: Address,
    /// Key used to sign the mint transaction.
    pub signer: PrivateKeySigner,
    /// Upper bound on the wait for a receipt.
    pub receipt_timeout: Duration,
    /// Delay between receipt polls.
    pub poll_interval: Duration,
    /// Stop after a successful simulation.
    pub dry_run: bool,
}

impl MintConfig {
    /// Address derived from the signing key.
    pub fn caller(&self) -> Address {
        self.signer.address()
    }

    /// Plain invocation parameters, without key material.
    pub fn params(&self) -> MintParams {
        MintParams {
            contract: self.contract,
            amount: self.amount,
            recipient: self.recipient,
            caller: self.caller(),
        }
    }
}

/// Invocation parameters consumed by the mint flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MintParams {
    pub contract: Address,
    pub amount: u64,
    pub recipient: Address,
    pub caller: Address,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn testnet() -> ChainSpec {
        ChainSpec::zksync_os_testnet(chain::DEFAULT_RPC_URL.parse().unwrap())
    }

    #[test]
    fn default_id_keeps_network_name() {
        let chain_spec = testnet().with_id(chain::CHAIN_ID);
        assert_eq!(chain_spec, testnet());
    }

    #[test]
    fn other_id_renames_chain() {
        let chain_spec = testnet().with_id(1);
        assert_eq!(chain_spec.id, 1);
        assert_eq!(chain_spec.name, "Custom chain 1");
        assert_eq!(chain_spec.network, "custom");
        assert_eq!(chain_spec.native_currency, testnet().native_currency);
    }
}
