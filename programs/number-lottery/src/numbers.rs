//! Validated, order-independent sets of chosen numbers, the match-counting
//! core of the draw, and the expansion of revealed randomness into a
//! winning set.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::keccak;

use crate::constants::NUMBERS_PER_TICKET;
use crate::error::LotteryError;
use crate::state::PrizeTier;

/// A full set of chosen numbers, stored sorted ascending. Immutable once
/// constructed; construction is the only validation point.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct NumberSet([u8; NUMBERS_PER_TICKET]);

impl NumberSet {
    /// Validation order is fixed and each failure reported distinctly:
    /// count, then range, then duplicates.
    pub fn new(raw: &[u8], min: u8, max: u8) -> Result<Self> {
        require!(raw.len() == NUMBERS_PER_TICKET, LotteryError::WrongCount);
        require!(
            raw.iter().all(|&n| n >= min && n <= max),
            LotteryError::OutOfRange
        );
        let mut numbers = [0u8; NUMBERS_PER_TICKET];
        numbers.copy_from_slice(raw);
        numbers.sort_unstable();
        require!(
            numbers.windows(2).all(|w| w[0] != w[1]),
            LotteryError::DuplicateNumber
        );
        Ok(Self(numbers))
    }

    pub fn as_array(&self) -> [u8; NUMBERS_PER_TICKET] {
        self.0
    }

    /// Cardinality of the intersection with `other`. Both sets are small
    /// and sorted; a linear scan is enough.
    pub fn match_count(&self, other: &NumberSet) -> usize {
        self.0.iter().filter(|n| other.0.contains(n)).count()
    }
}

/// Fixed match-to-tier table: a full match is Tier1, one short is Tier2,
/// two short is Tier3, anything less wins nothing. Total over 0..=K.
pub fn tier_for_matches(matches: usize) -> Option<PrizeTier> {
    if matches == NUMBERS_PER_TICKET {
        Some(PrizeTier::Tier1)
    } else if matches == NUMBERS_PER_TICKET - 1 {
        Some(PrizeTier::Tier2)
    } else if matches == NUMBERS_PER_TICKET - 2 {
        Some(PrizeTier::Tier3)
    } else {
        None
    }
}

/// Expands a revealed 32-byte randomness value into a winning set:
/// keccak(seed, counter) chunks reduced into the number range, first
/// distinct picks win. Deterministic, so anyone holding the revealed
/// value can recompute and verify the draw.
pub fn derive_winning_numbers(seed: &[u8], min: u8, max: u8) -> Result<NumberSet> {
    let span = (max as u64)
        .checked_sub(min as u64)
        .map(|d| d + 1)
        .ok_or(LotteryError::InvalidDrawOutput)?;
    require!(span >= NUMBERS_PER_TICKET as u64, LotteryError::InvalidDrawOutput);

    let mut picked: Vec<u8> = Vec::with_capacity(NUMBERS_PER_TICKET);
    let mut counter: u64 = 0;
    while picked.len() < NUMBERS_PER_TICKET {
        // Bounded: with span >= K the chance of exhausting 64 digests
        // without K distinct picks is negligible, but fail loudly rather
        // than loop forever on a degenerate range.
        require!(counter < 64, LotteryError::InvalidDrawOutput);
        let digest = keccak::hashv(&[&seed[..], &counter.to_le_bytes()[..]]);
        for chunk in digest.0.chunks_exact(8) {
            if picked.len() == NUMBERS_PER_TICKET {
                break;
            }
            let value = u64::from_le_bytes(chunk.try_into().unwrap());
            let candidate = min + (value % span) as u8;
            if !picked.contains(&candidate) {
                picked.push(candidate);
            }
        }
        counter += 1;
    }
    NumberSet::new(&picked, min, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIN: u8 = 1;
    const MAX: u8 = 50;

    fn set(raw: &[u8]) -> NumberSet {
        NumberSet::new(raw, MIN, MAX).unwrap()
    }

    #[test]
    fn stores_numbers_sorted_ascending() {
        let s = set(&[42, 7, 35, 14, 28, 21]);
        assert_eq!(s.as_array(), [7, 14, 21, 28, 35, 42]);
    }

    #[test]
    fn creation_is_order_independent() {
        assert_eq!(set(&[42, 7, 35, 14, 28, 21]), set(&[7, 14, 21, 28, 35, 42]));
    }

    #[test]
    fn rejects_wrong_count_first() {
        assert_eq!(
            NumberSet::new(&[1, 2, 3, 4, 5], MIN, MAX),
            Err(LotteryError::WrongCount.into())
        );
        assert_eq!(
            NumberSet::new(&[1, 2, 3, 4, 5, 6, 7], MIN, MAX),
            Err(LotteryError::WrongCount.into())
        );
        // Duplicates present, but the count check fires first.
        assert_eq!(
            NumberSet::new(&[1, 1, 2, 3, 4], MIN, MAX),
            Err(LotteryError::WrongCount.into())
        );
    }

    #[test]
    fn rejects_out_of_range_before_duplicates() {
        assert_eq!(
            NumberSet::new(&[0, 1, 2, 3, 4, 5], MIN, MAX),
            Err(LotteryError::OutOfRange.into())
        );
        assert_eq!(
            NumberSet::new(&[1, 2, 3, 4, 5, 51], MIN, MAX),
            Err(LotteryError::OutOfRange.into())
        );
        assert_eq!(
            NumberSet::new(&[0, 0, 2, 3, 4, 5], MIN, MAX),
            Err(LotteryError::OutOfRange.into())
        );
    }

    #[test]
    fn rejects_duplicates() {
        assert_eq!(
            NumberSet::new(&[1, 1, 2, 3, 4, 5], MIN, MAX),
            Err(LotteryError::DuplicateNumber.into())
        );
    }

    #[test]
    fn match_count_is_intersection_cardinality() {
        let winning = set(&[3, 9, 18, 27, 36, 45]);
        assert_eq!(set(&[7, 14, 21, 28, 35, 42]).match_count(&winning), 0);
        assert_eq!(set(&[3, 9, 18, 27, 28, 45]).match_count(&winning), 4);
        assert_eq!(winning.match_count(&winning), 6);
        // Symmetric.
        let a = set(&[1, 2, 3, 4, 5, 6]);
        let b = set(&[4, 5, 6, 7, 8, 9]);
        assert_eq!(a.match_count(&b), b.match_count(&a));
    }

    #[test]
    fn tier_table_is_total_and_fixed() {
        assert_eq!(tier_for_matches(6), Some(PrizeTier::Tier1));
        assert_eq!(tier_for_matches(5), Some(PrizeTier::Tier2));
        assert_eq!(tier_for_matches(4), Some(PrizeTier::Tier3));
        for m in 0..=3 {
            assert_eq!(tier_for_matches(m), None);
        }
    }

    #[test]
    fn exact_match_in_any_order_is_tier1() {
        let winning = set(&[3, 9, 18, 27, 36, 45]);
        let ticket = set(&[45, 3, 27, 9, 36, 18]);
        assert_eq!(
            tier_for_matches(ticket.match_count(&winning)),
            Some(PrizeTier::Tier1)
        );
    }

    #[test]
    fn derived_numbers_are_deterministic_and_valid() {
        let seed = [7u8; 32];
        let a = derive_winning_numbers(&seed, MIN, MAX).unwrap();
        let b = derive_winning_numbers(&seed, MIN, MAX).unwrap();
        assert_eq!(a, b);
        let numbers = a.as_array();
        assert!(numbers.iter().all(|&n| (MIN..=MAX).contains(&n)));
        assert!(numbers.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn different_seeds_diverge() {
        let a = derive_winning_numbers(&[1u8; 32], MIN, MAX).unwrap();
        let b = derive_winning_numbers(&[2u8; 32], MIN, MAX).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn derivation_works_on_the_tightest_range() {
        // Range exactly K wide: every number must be picked.
        let s = derive_winning_numbers(&[9u8; 32], 1, 6).unwrap();
        assert_eq!(s.as_array(), [1, 2, 3, 4, 5, 6]);
    }
}
