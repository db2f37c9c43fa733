//! Gas limit selection for `mint`.

use crate::constants::gas;

/// Gas limit chosen for a mint, together with the linear estimate it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GasPlan {
    /// `BASE + amount * PER_TOKEN + BUFFER`, shown for reference even when unused.
    pub calculated: u64,
    /// Limit actually attached to the transaction.
    pub limit: u64,
}

impl GasPlan {
    pub fn for_amount(amount: u64) -> Self {
        let calculated = gas::BASE
            .saturating_add(amount.saturating_mul(gas::PER_TOKEN))
            .saturating_add(gas::BUFFER);

        let limit = if amount >= gas::VERY_LARGE_MINT {
            gas::VERY_LARGE_MINT_LIMIT
        } else if amount >= gas::LARGE_MINT {
            gas::LARGE_MINT_LIMIT
        } else {
            calculated
        };

        Self { calculated, limit }
    }

    /// Whether a fixed ceiling replaced the linear estimate.
    pub fn is_capped(&self) -> bool {
        self.limit != self.calculated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_amounts_use_linear_estimate() {
        assert_eq!(GasPlan::for_amount(0).limit, 1_100_000);
        assert_eq!(GasPlan::for_amount(5).limit, 1_230_000);
        assert_eq!(GasPlan::for_amount(499).limit, 100_000 + 499 * 26_000 + 1_000_000);

        for amount in 0..500 {
            let plan = GasPlan::for_amount(amount);
            assert_eq!(plan.limit, plan.calculated);
            assert!(!plan.is_capped());
        }
    }

    #[test]
    fn large_amounts_use_fixed_limit() {
        for amount in [500, 501, 1_000, 1_999] {
            let plan = GasPlan::for_amount(amount);
            assert_eq!(plan.limit, 80_000_000, "amount {amount}");
            assert!(plan.is_capped());
        }
    }

    #[test]
    fn very_large_amounts_use_fixed_limit() {
        for amount in [2_000, 2_001, 10_000, u64::MAX] {
            assert_eq!(GasPlan::for_amount(amount).limit, 95_000_000, "amount {amount}");
        }
    }

    #[test]
    fn limits_stay_below_block_gas_limit() {
        for amount in [0, 5, 499, 500, 1_999, 2_000, u64::MAX] {
            assert!(GasPlan::for_amount(amount).limit < gas::BLOCK_GAS_LIMIT);
        }
    }
}
