//! Interface to the chain used by the mint flow.

use alloy::{
    primitives::{Address, B256, U256},
    rpc::types::TransactionRequest,
};
use async_trait::async_trait;

use crate::error::{ClientError, SimulationError};

/// A `mint` call that passed simulation and is ready to be signed and sent.
#[derive(Debug, Clone)]
pub struct PreparedMint {
    pub to: Address,
    pub amount: u64,
    pub gas_limit: u64,
    /// Request validated by the simulation.
    pub request: TransactionRequest,
}

/// Confirmed result of a submitted transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MintReceipt {
    pub tx_hash: B256,
    pub block_number: Option<u64>,
    pub gas_used: u64,
    pub success: bool,
}

/// Access to one token contract and the chain it lives on.
///
/// Read calls never mutate state. `simulate_mint` must report the same revert reason
/// a real submission would.
#[async_trait]
pub trait TokenClient: Send + Sync {
    async fn name(&self) -> Result<String, ClientError>;

    async fn symbol(&self) -> Result<String, ClientError>;

    async fn total_supply(&self) -> Result<U256, ClientError>;

    async fn owner(&self) -> Result<Address, ClientError>;

    async fn balance_of(&self, holder: Address) -> Result<U256, ClientError>;

    /// Native currency balance of `account`, in the smallest unit.
    async fn native_balance(&self, account: Address) -> Result<U256, ClientError>;

    /// Dry run `mint(to, amount)` from the caller against the latest state.
    ///
    /// A rejection by the contract is [`SimulationError::Reverted`] with the node's message.
    async fn simulate_mint(
        &self,
        to: Address,
        amount: u64,
        gas_limit: u64,
    ) -> Result<PreparedMint, SimulationError>;

    /// Sign and broadcast a simulated mint, returning its hash.
    async fn send_mint(&self, prepared: PreparedMint) -> Result<B256, ClientError>;

    /// Block until `tx_hash` is included.
    ///
    /// Does not time out on its own.
    async fn wait_for_receipt(&self, tx_hash: B256) -> Result<MintReceipt, ClientError>;
}
