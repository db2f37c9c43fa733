//! The mint flow: read state, check ownership, simulate, send, confirm, report.

use alloy::primitives::{Address, U256};
use std::{
    fmt,
    future::Future,
    time::{Duration, Instant},
};
use tracing::{debug, info, warn};

use crate::{
    client::{MintReceipt, TokenClient},
    config::MintConfig,
    display,
    error::{ClientError, Error, SimulationError},
    gas::GasPlan,
};

/// Contract and wallet state read before minting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractSnapshot {
    pub name: String,
    pub symbol: String,
    pub total_supply: U256,
    pub owner: Address,
    pub recipient_balance: U256,
    /// Native currency balance of the caller.
    pub caller_balance: U256,
}

/// Result of a completed mint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintReport {
    pub before: ContractSnapshot,
    pub gas: GasPlan,
    pub receipt: MintReceipt,
    pub after_total_supply: U256,
    pub after_recipient_balance: U256,
    /// Time from the start of the mint stage until the receipt arrived.
    pub elapsed: Duration,
}

impl MintReport {
    pub fn supply_delta(&self) -> Delta {
        Delta::new(self.before.total_supply, self.after_total_supply)
    }

    pub fn balance_delta(&self) -> Delta {
        Delta::new(self.before.recipient_balance, self.after_recipient_balance)
    }
}

/// What [`run`] ended with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MintOutcome {
    /// Dry run: the simulation passed and nothing was sent.
    Simulated {
        snapshot: ContractSnapshot,
        gas: GasPlan,
    },
    Minted(MintReport),
}

/// Signed difference between two unsigned values. Displays as `+N` or `-N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delta {
    pub magnitude: U256,
    pub negative: bool,
}

impl Delta {
    pub fn new(before: U256, after: U256) -> Self {
        if after >= before {
            Self {
                magnitude: after - before,
                negative: false,
            }
        } else {
            Self {
                magnitude: before - after,
                negative: true,
            }
        }
    }
}

impl fmt::Display for Delta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.negative { '-' } else { '+' };
        write!(f, "{sign}{}", self.magnitude)
    }
}

/// Fail unless `caller` owns the contract.
///
/// Addresses compare by value, so the hex casing (checksummed or not) of either side does
/// not matter.
pub fn ensure_owner(owner: Address, caller: Address) -> Result<(), Error> {
    if owner == caller {
        Ok(())
    } else {
        Err(Error::Unauthorized { owner, caller })
    }
}

async fn read<T>(
    call: &'static str,
    fut: impl Future<Output = Result<T, ClientError>>,
) -> Result<T, Error> {
    fut.await
        .map_err(|source| Error::ReadFailed { call, source })
}

/// Read all pre-mint state concurrently. The first failing read aborts the rest.
pub async fn read_snapshot<C>(
    client: &C,
    recipient: Address,
    caller: Address,
) -> Result<ContractSnapshot, Error>
where
    C: TokenClient + ?Sized,
{
    let (name, symbol, total_supply, owner, recipient_balance, caller_balance) = tokio::try_join!(
        read("name", client.name()),
        read("symbol", client.symbol()),
        read("totalSupply", client.total_supply()),
        read("owner", client.owner()),
        read("balanceOf", client.balance_of(recipient)),
        read("getBalance", client.native_balance(caller)),
    )?;

    Ok(ContractSnapshot {
        name,
        symbol,
        total_supply,
        owner,
        recipient_balance,
        caller_balance,
    })
}

/// Run the whole mint against `client`.
///
/// Nothing is written to the chain unless the caller owns the contract and the simulation
/// passes.
pub async fn run<C>(client: &C, config: &MintConfig) -> Result<MintOutcome, Error>
where
    C: TokenClient + ?Sized,
{
    let params = config.params();
    display::configuration(&config.chain, &params);

    let before = read_snapshot(client, params.recipient, params.caller).await?;
    debug!(?before, "read contract state");
    display::contract_info(&before, &config.chain.native_currency);

    display::ownership(before.owner, params.caller);
    ensure_owner(before.owner, params.caller)?;

    let started = Instant::now();
    let gas = GasPlan::for_amount(params.amount);
    display::gas_plan(&params, &gas);

    let prepared = client
        .simulate_mint(params.recipient, params.amount, gas.limit)
        .await
        .map_err(|err| match err {
            SimulationError::Reverted(reason) => Error::SimulationReverted(reason),
            SimulationError::Failed(source) => Error::SimulationFailed(source),
        })?;

    if config.dry_run {
        display::simulated();
        return Ok(MintOutcome::Simulated {
            snapshot: before,
            gas,
        });
    }

    let tx_hash = client
        .send_mint(prepared)
        .await
        .map_err(Error::SubmissionFailed)?;
    display::submitted(tx_hash);

    let receipt = tokio::time::timeout(config.receipt_timeout, client.wait_for_receipt(tx_hash))
        .await
        .map_err(|_| Error::Timeout {
            tx_hash,
            timeout: config.receipt_timeout,
        })?
        .map_err(|source| Error::ReceiptFailed { tx_hash, source })?;
    let elapsed = started.elapsed();
    display::receipt(&receipt, elapsed);

    if !receipt.success {
        warn!(%tx_hash, "mint transaction reverted on chain");
        return Err(Error::ConfirmationFailed { tx_hash });
    }

    let (after_total_supply, after_recipient_balance) = tokio::try_join!(
        read("totalSupply", client.total_supply()),
        read("balanceOf", client.balance_of(params.recipient)),
    )?;

    let report = MintReport {
        before,
        gas,
        receipt,
        after_total_supply,
        after_recipient_balance,
        elapsed,
    };
    info!(
        %tx_hash,
        supply_delta = %report.supply_delta(),
        "mint confirmed"
    );
    display::updated_stats(&report);

    Ok(MintOutcome::Minted(report))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_check_ignores_hex_case() {
        let owner: Address = "0xABCDEFABCDEFABCDEFABCDEFABCDEFABCDEFABCD".parse().unwrap();
        let caller: Address = "0xabcdefabcdefabcdefabcdefabcdefabcdefabcd".parse().unwrap();
        assert!(ensure_owner(owner, caller).is_ok());
    }

    #[test]
    fn owner_check_rejects_other_address() {
        let owner = Address::repeat_byte(0xab);
        let caller = Address::repeat_byte(0xcd);
        let err = ensure_owner(owner, caller).unwrap_err();
        assert!(matches!(
            err,
            Error::Unauthorized { owner: o, caller: c } if o == owner && c == caller
        ));
        let message = err.to_string();
        assert!(message.contains(&owner.to_string()));
        assert!(message.contains(&caller.to_string()));
    }

    #[test]
    fn delta_display() {
        assert_eq!(Delta::new(U256::from(100), U256::from(105)).to_string(), "+5");
        assert_eq!(Delta::new(U256::from(7), U256::from(7)).to_string(), "+0");
        assert_eq!(Delta::new(U256::from(10), U256::from(4)).to_string(), "-6");
    }
}
