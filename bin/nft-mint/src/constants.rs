//! Constants for the mint tool.

/// Defaults for the zkSync OS developer preview network.
pub mod chain {
    /// Chain ID of the zkSync OS developer preview.
    pub const CHAIN_ID: u64 = 8_022_833;
    /// Human-readable chain name.
    pub const NAME: &str = "zkSync OS Developer Preview";
    /// Short network tag.
    pub const NETWORK: &str = "zksync-testnet";
    /// Public RPC endpoint used when `RPC_URL` is not set.
    pub const DEFAULT_RPC_URL: &str = "https://zksync-os-testnet-alpha.zksync.dev/";

    /// Native currency metadata.
    pub mod currency {
        pub const NAME: &str = "Ether";
        pub const SYMBOL: &str = "ETH";
        pub const DECIMALS: u8 = 18;
    }
}

/// Gas limit heuristic for `mint`.
///
/// Small mints get a linear estimate. Anything from [`LARGE_MINT`] upwards uses a fixed
/// ceiling, since extrapolating would quickly run past [`BLOCK_GAS_LIMIT`].
pub mod gas {
    /// Base transaction cost.
    pub const BASE: u64 = 100_000;
    /// Approximate cost per minted token.
    pub const PER_TOKEN: u64 = 26_000;
    /// Safety buffer added on top of the linear estimate.
    pub const BUFFER: u64 = 1_000_000;

    /// Amount from which the fixed [`LARGE_MINT_LIMIT`] applies.
    pub const LARGE_MINT: u64 = 500;
    /// Fixed limit for large mints.
    pub const LARGE_MINT_LIMIT: u64 = 80_000_000;
    /// Amount from which the fixed [`VERY_LARGE_MINT_LIMIT`] applies.
    pub const VERY_LARGE_MINT: u64 = 2_000;
    /// Fixed limit for very large mints.
    pub const VERY_LARGE_MINT_LIMIT: u64 = 95_000_000;

    /// Per-block gas ceiling of the target network.
    pub const BLOCK_GAS_LIMIT: u64 = 100_000_000;
}

/// Defaults for invocation parameters.
pub mod defaults {
    /// Number of tokens minted when no amount is given.
    pub const MINT_AMOUNT: u64 = 5;
    /// Seconds to wait for a receipt before giving up.
    pub const RECEIPT_TIMEOUT_SECS: u64 = 120;
    /// Milliseconds between receipt polls.
    pub const POLL_INTERVAL_MS: u64 = 1_000;
}
