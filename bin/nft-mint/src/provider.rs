//! [`TokenClient`] backed by alloy JSON-RPC providers.

use alloy::{
    network::{EthereumWallet, TransactionBuilder},
    primitives::{Address, B256, I256, U256},
    providers::{DynProvider, Provider, ProviderBuilder},
};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info, trace};

use crate::{
    client::{MintReceipt, PreparedMint, TokenClient},
    config::MintConfig,
    contract::IMintableToken::{self, IMintableTokenInstance},
    error::{ClientError, Error, SimulationError},
};

/// Talks to the token contract over HTTP.
///
/// Holds a read-only provider for calls and simulation, and a wallet provider that signs
/// with the configured key.
#[derive(Clone)]
pub struct AlloyTokenClient {
    reader: DynProvider,
    writer: DynProvider,
    contract: Address,
    caller: Address,
    chain_id: u64,
    poll_interval: Duration,
}

impl AlloyTokenClient {
    /// Create both providers for the configured chain.
    pub async fn connect(config: &MintConfig) -> Result<Self, Error> {
        let rpc_url = config.chain.rpc_url.as_str();
        let connect_err = |source: alloy::transports::TransportError| Error::Connect {
            rpc_url: rpc_url.to_string(),
            source: source.into(),
        };

        let reader = ProviderBuilder::new()
            .connect(rpc_url)
            .await
            .map_err(connect_err)?
            .erased();

        let wallet = EthereumWallet::from(config.signer.clone());
        let writer = ProviderBuilder::new()
            .wallet(wallet)
            .connect(rpc_url)
            .await
            .map_err(connect_err)?
            .erased();

        debug!(%rpc_url, chain_id = config.chain.id, "connected providers");

        Ok(Self {
            reader,
            writer,
            contract: config.contract,
            caller: config.caller(),
            chain_id: config.chain.id,
            poll_interval: config.poll_interval,
        })
    }

    fn token(&self) -> IMintableTokenInstance<&DynProvider> {
        IMintableToken::new(self.contract, &self.reader)
    }
}

#[async_trait]
impl TokenClient for AlloyTokenClient {
    async fn name(&self) -> Result<String, ClientError> {
        Ok(self.token().name().call().await?)
    }

    async fn symbol(&self) -> Result<String, ClientError> {
        Ok(self.token().symbol().call().await?)
    }

    async fn total_supply(&self) -> Result<U256, ClientError> {
        Ok(self.token().totalSupply().call().await?)
    }

    async fn owner(&self) -> Result<Address, ClientError> {
        Ok(self.token().owner().call().await?)
    }

    async fn balance_of(&self, holder: Address) -> Result<U256, ClientError> {
        Ok(self.token().balanceOf(holder).call().await?)
    }

    async fn native_balance(&self, account: Address) -> Result<U256, ClientError> {
        Ok(self.reader.get_balance(account).await?)
    }

    async fn simulate_mint(
        &self,
        to: Address,
        amount: u64,
        gas_limit: u64,
    ) -> Result<PreparedMint, SimulationError> {
        let token = self.token();
        let call = token
            .mint(to, I256::from_raw(U256::from(amount)))
            .from(self.caller)
            .gas(gas_limit);

        debug!(%to, amount, gas_limit, "simulating mint");
        call.call().await.map_err(simulation_error)?;

        let request = call.into_transaction_request().with_chain_id(self.chain_id);

        Ok(PreparedMint {
            to,
            amount,
            gas_limit,
            request,
        })
    }

    async fn send_mint(&self, prepared: PreparedMint) -> Result<B256, ClientError> {
        let pending = self.writer.send_transaction(prepared.request).await?;
        let tx_hash = *pending.tx_hash();
        info!(%tx_hash, "mint transaction submitted");
        Ok(tx_hash)
    }

    async fn wait_for_receipt(&self, tx_hash: B256) -> Result<MintReceipt, ClientError> {
        loop {
            if let Some(receipt) = self.reader.get_transaction_receipt(tx_hash).await? {
                debug!(%tx_hash, block_number = ?receipt.block_number, "receipt received");
                return Ok(MintReceipt {
                    tx_hash: receipt.transaction_hash,
                    block_number: receipt.block_number,
                    gas_used: receipt.gas_used,
                    success: receipt.status(),
                });
            }
            trace!(%tx_hash, "receipt not available yet");
            tokio::time::sleep(self.poll_interval).await;
        }
    }
}

/// Split a failed `eth_call` into a contract rejection and everything else.
///
/// The node answering with a JSON-RPC error means it executed the call; the message is kept
/// exactly as the node sent it.
fn simulation_error(err: alloy::contract::Error) -> SimulationError {
    match err {
        alloy::contract::Error::TransportError(ref rpc) if rpc.as_error_resp().is_some() => {
            SimulationError::Reverted(err.to_string())
        }
        other => SimulationError::Failed(other.into()),
    }
}
