//! Console output for the mint flow.
//!
//! Progress and results go to stdout, errors to stderr. Logs are written by `tracing`
//! to stderr as well, so stdout only ever carries the report.

use alloy::primitives::{Address, B256, U256, utils::format_units};
use std::{error::Error as _, time::Duration};

use crate::{
    client::MintReceipt,
    config::{ChainSpec, MintParams, NativeCurrency},
    error::Error,
    gas::GasPlan,
    mint::{ContractSnapshot, MintReport},
};

/// Echo the resolved configuration.
pub fn configuration(chain: &ChainSpec, params: &MintParams) {
    println!("🚀 Starting mint");
    println!("📋 Configuration:");
    println!("   Chain:      {} ({})", chain.name, chain.id);
    println!("   RPC:        {}", chain.rpc_url);
    println!("   Contract:   {}", params.contract);
    println!("   Amount:     {}", params.amount);
    println!("   Recipient:  {}", params.recipient);
    println!("   Caller:     {}", params.caller);
}

pub fn contract_info(snapshot: &ContractSnapshot, currency: &NativeCurrency) {
    println!();
    println!("📊 Contract Info:");
    println!("   Name:                  {}", snapshot.name);
    println!("   Symbol:                {}", snapshot.symbol);
    println!("   Owner:                 {}", snapshot.owner);
    println!("   Total Supply:          {}", snapshot.total_supply);
    println!("   Recipient Balance:     {}", snapshot.recipient_balance);
    println!(
        "   Wallet Balance:        {} {}",
        format_native(snapshot.caller_balance, currency.decimals),
        currency.symbol
    );
}

pub fn ownership(owner: Address, caller: Address) {
    println!();
    println!("🔍 Ownership Check:");
    println!("   Contract Owner:  {owner}");
    println!("   Your Address:    {caller}");
    println!(
        "   Are you owner?   {}",
        if owner == caller { "✅ Yes" } else { "❌ No" }
    );
}

pub fn gas_plan(params: &MintParams, plan: &GasPlan) {
    println!();
    println!("🧪 Preparing transaction...");
    println!("   Function:         mint({}, {})", params.recipient, params.amount);
    println!("   Calculated Gas:   {}", plan.calculated);
    println!(
        "   Using Gas Limit:  {}{}",
        plan.limit,
        if plan.is_capped() { " (fixed)" } else { "" }
    );
}

pub fn simulated() {
    println!();
    println!("✓ Simulation succeeded");
    println!("Dry run mode - no transaction will be submitted");
}

pub fn submitted(tx_hash: B256) {
    println!();
    println!("📝 Transaction submitted: {tx_hash}");
    println!("⏳ Waiting for confirmation...");
}

pub fn receipt(receipt: &MintReceipt, elapsed: Duration) {
    println!();
    if receipt.success {
        println!("✅ Minting completed successfully!");
    } else {
        println!("❌ Minting transaction failed!");
    }
    println!("⏱️  Total time: {}ms", elapsed.as_millis());
    println!("📊 Transaction Details:");
    println!("   Hash:      {}", receipt.tx_hash);
    match receipt.block_number {
        Some(block) => println!("   Block:     {block}"),
        None => println!("   Block:     pending"),
    }
    println!("   Gas Used:  {}", receipt.gas_used);
    println!(
        "   Status:    {}",
        if receipt.success { "✅ Success" } else { "❌ Failed" }
    );
}

pub fn updated_stats(report: &MintReport) {
    println!();
    println!("📈 Updated Stats:");
    println!(
        "   New Total Supply:          {} ({})",
        report.after_total_supply,
        report.supply_delta()
    );
    println!(
        "   New Balance of Recipient:  {} ({})",
        report.after_recipient_balance,
        report.balance_delta()
    );
}

/// Print an error and its full source chain to stderr.
pub fn error(err: &Error) {
    eprintln!();
    eprintln!("❌ Error during minting: {err}");
    let mut source = err.source();
    while let Some(cause) = source {
        eprintln!("   Cause: {cause}");
        source = cause.source();
    }
}

fn format_native(amount: U256, decimals: u8) -> String {
    format_units(amount, decimals).unwrap_or_else(|_| amount.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_balance_uses_currency_decimals() {
        let one_and_a_half = U256::from(1_500_000_000_000_000_000u128);
        assert_eq!(format_native(one_and_a_half, 18), "1.500000000000000000");
        assert_eq!(format_native(U256::ZERO, 18), "0.000000000000000000");
    }
}
