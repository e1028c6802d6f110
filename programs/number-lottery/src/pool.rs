//! Prize pool arithmetic: the tier split at round close and the per-winner
//! payout. All amounts are integer lamports; the split conserves the
//! collected total exactly by folding truncation remainders into the
//! protocol fee bucket, and per-winner payouts use floor division with the
//! remainder left unclaimed in the pool. Both rounding policies are
//! deliberate.

use anchor_lang::prelude::*;

use crate::constants::PCT_DENOMINATOR;
use crate::error::LotteryError;

#[derive(Clone, Copy, Debug)]
pub struct TierDistribution {
    pub tier1_pct: u8,
    pub tier2_pct: u8,
    pub tier3_pct: u8,
    pub fee_pct: u8,
}

impl TierDistribution {
    pub fn validate(&self) -> Result<()> {
        let sum = self.tier1_pct as u16
            + self.tier2_pct as u16
            + self.tier3_pct as u16
            + self.fee_pct as u16;
        require!(sum == PCT_DENOMINATOR, LotteryError::InvalidDistribution);
        Ok(())
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PoolSplit {
    pub tier1: u64,
    pub tier2: u64,
    pub tier3: u64,
    pub fee: u64,
}

/// Splits the collected total into tier pools plus the protocol fee.
/// Tier amounts truncate; the fee takes whatever remains, so
/// `tier1 + tier2 + tier3 + fee == total` holds exactly.
pub fn split_pool(total: u64, dist: &TierDistribution) -> Result<PoolSplit> {
    dist.validate()?;
    let share = |pct: u8| ((total as u128 * pct as u128) / PCT_DENOMINATOR as u128) as u64;
    let tier1 = share(dist.tier1_pct);
    let tier2 = share(dist.tier2_pct);
    let tier3 = share(dist.tier3_pct);
    let fee = total - tier1 - tier2 - tier3;
    Ok(PoolSplit {
        tier1,
        tier2,
        tier3,
        fee,
    })
}

/// Even share of a tier pool per winner, floor division. With zero winners
/// the tier pool simply stays put.
pub fn payout_per_winner(tier_pool: u64, winners: u64) -> u64 {
    if winners == 0 {
        0
    } else {
        tier_pool / winners
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> TierDistribution {
        TierDistribution {
            tier1_pct: 65,
            tier2_pct: 20,
            tier3_pct: 10,
            fee_pct: 5,
        }
    }

    #[test]
    fn split_conserves_total_exactly() {
        for total in [0u64, 1, 7, 99, 100, 101, 123_000_000_007, u64::MAX / 2] {
            let s = split_pool(total, &reference()).unwrap();
            assert_eq!(s.tier1 + s.tier2 + s.tier3 + s.fee, total);
        }
    }

    #[test]
    fn reference_round_splits_as_expected() {
        // 50 tickets at 1 SUI-equivalent each.
        let total = 50 * 1_000_000_000u64;
        let s = split_pool(total, &reference()).unwrap();
        assert_eq!(s.tier1, 32_500_000_000);
        assert_eq!(s.tier2, 10_000_000_000);
        assert_eq!(s.tier3, 5_000_000_000);
        assert_eq!(s.fee, 2_500_000_000);
    }

    #[test]
    fn truncation_remainder_goes_to_fee() {
        // 101 splits as 65 + 20 + 10 = 95 for tiers, fee picks up 6
        // (its own 5 plus the 1 lost to truncation).
        let s = split_pool(101, &reference()).unwrap();
        assert_eq!(s.tier1, 65);
        assert_eq!(s.tier2, 20);
        assert_eq!(s.tier3, 10);
        assert_eq!(s.fee, 6);

        let s = split_pool(1, &reference()).unwrap();
        assert_eq!((s.tier1, s.tier2, s.tier3, s.fee), (0, 0, 0, 1));
    }

    #[test]
    fn invalid_distribution_is_rejected() {
        let mut d = reference();
        d.fee_pct = 4;
        assert_eq!(
            split_pool(100, &d).unwrap_err(),
            LotteryError::InvalidDistribution.into()
        );
    }

    #[test]
    fn payout_floors_and_leaves_remainder() {
        assert_eq!(payout_per_winner(10, 3), 3);
        assert_eq!(payout_per_winner(10_000_000_000, 4), 2_500_000_000);
        assert_eq!(payout_per_winner(5, 7), 0);
        assert_eq!(payout_per_winner(10, 0), 0);
    }
}
