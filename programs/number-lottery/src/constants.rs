use anchor_lang::prelude::*;

#[constant]
pub const CONFIG_SEED: &str = "lottery_config";

#[constant]
pub const ROUND_SEED: &str = "round";

#[constant]
pub const TICKET_SEED: &str = "ticket";

/// Numbers carried by a single ticket. Sizes the on-chain arrays, so it is
/// a compile-time constant; the number range, tier split and purchase
/// limits live in `LotteryConfig`.
pub const NUMBERS_PER_TICKET: usize = 6;

/// Tier percentages must sum to exactly this.
pub const PCT_DENOMINATOR: u16 = 100;

pub const SECONDS_PER_DAY: i64 = 86_400;
