//! Error types for the mint flow.

use alloy::primitives::{Address, B256};
use std::time::Duration;
use thiserror::Error;

/// Error returned by a [`TokenClient`](crate::client::TokenClient) call.
pub type ClientError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Why a `mint` dry run did not produce a request.
#[derive(Debug, Error)]
pub enum SimulationError {
    /// The node executed the call and the contract rejected it.
    #[error("{0}")]
    Reverted(String),
    /// The call never got an answer from the contract.
    #[error(transparent)]
    Failed(ClientError),
}

/// Errors that can occur while minting.
///
/// Every variant is fatal: the binary reports it and exits with [`Error::EXIT_CODE`].
#[derive(Debug, Error)]
pub enum Error {
    /// A required setting was given neither on the command line nor in the environment.
    #[error("{0} must be provided via environment (or .env file) or command line argument")]
    MissingConfig(&'static str),
    /// A setting was present but could not be parsed.
    #[error("invalid {name}: {reason}")]
    InvalidConfig { name: &'static str, reason: String },
    /// The RPC clients could not be constructed.
    #[error("failed to connect to {rpc_url}")]
    Connect {
        rpc_url: String,
        #[source]
        source: ClientError,
    },
    /// One of the contract state reads failed.
    #[error("failed to read `{call}` from contract")]
    ReadFailed {
        call: &'static str,
        #[source]
        source: ClientError,
    },
    /// The caller does not own the contract.
    #[error(
        "you are not the contract owner, only the owner can mint (contract owner: {owner}, your address: {caller})"
    )]
    Unauthorized { owner: Address, caller: Address },
    /// The dry run of `mint` was rejected by the contract.
    #[error("transaction simulation failed: {0}")]
    SimulationReverted(String),
    /// The dry run of `mint` could not be carried out.
    #[error("failed to simulate transaction")]
    SimulationFailed(#[source] ClientError),
    /// The transaction could not be signed or broadcast.
    #[error("failed to submit transaction")]
    SubmissionFailed(#[source] ClientError),
    /// Polling for the receipt failed.
    #[error("failed to fetch receipt for {tx_hash}")]
    ReceiptFailed {
        tx_hash: B256,
        #[source]
        source: ClientError,
    },
    /// The transaction was included but reverted.
    #[error("transaction {tx_hash} was included but failed")]
    ConfirmationFailed { tx_hash: B256 },
    /// No receipt showed up within the configured timeout.
    #[error("no receipt for {tx_hash} after {}s", .timeout.as_secs())]
    Timeout { tx_hash: B256, timeout: Duration },
}

impl Error {
    /// Process exit status for any failed run.
    pub const EXIT_CODE: u8 = 1;

    pub(crate) fn invalid(name: &'static str, reason: impl ToString) -> Self {
        Self::InvalidConfig {
            name,
            reason: reason.to_string(),
        }
    }
}
