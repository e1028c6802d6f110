use anchor_lang::prelude::*;

use crate::constants::{NUMBERS_PER_TICKET, PCT_DENOMINATOR};
use crate::error::LotteryError;
use crate::pool::TierDistribution;

/// Lifecycle of a round. Created in `Waiting`, opened for sales, moved to
/// `Drawing` once the deadline passes and randomness is committed, and
/// `Closed` after every ticket has been classified. `Closed` is terminal.
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, PartialEq, Eq, Debug)]
pub enum RoundState {
    Waiting,
    Open,
    Drawing,
    Closed,
}

/// Prize class, determined solely by match count against the winning set.
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, PartialEq, Eq, Debug)]
pub enum PrizeTier {
    Tier1,
    Tier2,
    Tier3,
}

impl PrizeTier {
    pub fn rank(self) -> u8 {
        match self {
            PrizeTier::Tier1 => 1,
            PrizeTier::Tier2 => 2,
            PrizeTier::Tier3 => 3,
        }
    }
}

/// The configuration record supplied once at `initialize_config`.
/// Rule changes are a redeploy of this record, never an edit to logic.
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug)]
pub struct LotteryRules {
    pub min_number: u8,
    pub max_number: u8,
    pub max_tickets_per_purchase: u8,
    pub tier1_pct: u8,
    pub tier2_pct: u8,
    pub tier3_pct: u8,
    pub fee_pct: u8,
    pub claim_window_days: u16,
}

impl LotteryRules {
    pub fn validate(&self) -> Result<()> {
        let span = self
            .max_number
            .checked_sub(self.min_number)
            .map(|d| d as usize + 1)
            .ok_or(LotteryError::InvalidNumberRange)?;
        require!(span >= NUMBERS_PER_TICKET, LotteryError::InvalidNumberRange);
        require!(self.max_tickets_per_purchase > 0, LotteryError::TooManyTickets);
        let pct_sum = self.tier1_pct as u16
            + self.tier2_pct as u16
            + self.tier3_pct as u16
            + self.fee_pct as u16;
        require!(pct_sum == PCT_DENOMINATOR, LotteryError::InvalidDistribution);
        Ok(())
    }

    pub fn distribution(&self) -> TierDistribution {
        TierDistribution {
            tier1_pct: self.tier1_pct,
            tier2_pct: self.tier2_pct,
            tier3_pct: self.tier3_pct,
            fee_pct: self.fee_pct,
        }
    }
}

/// Global lottery state: the rules, the authority allowed to run draws,
/// and which round (if any) is currently open.
#[account]
#[derive(InitSpace)]
pub struct LotteryConfig {
    pub bump: u8,
    pub authority: Pubkey,
    pub rules: LotteryRules,
    /// Id of the most recently created round; round ids start at 1.
    pub last_round_id: u64,
    /// The single round currently in `Open` state, if any.
    pub active_round: Option<u64>,
}

/// One lottery round. Owns its prize pool balances and winner tallies;
/// collected lamports are held on this account and paid out from it.
#[account]
#[derive(InitSpace)]
pub struct LotteryRound {
    pub bump: u8,
    pub round_id: u64,
    pub state: RoundState,
    pub ticket_price: u64,
    pub open_time: i64,
    /// Sales deadline; also the earliest moment a draw may be committed.
    pub draw_time: i64,
    pub close_time: i64,
    pub total_tickets_sold: u64,
    pub tickets_scored: u64,
    pub total_collected: u64,
    pub tier1_pool: u64,
    pub tier2_pool: u64,
    pub tier3_pool: u64,
    pub fee_amount: u64,
    pub split_done: bool,
    pub fee_collected: bool,
    pub tier1_winners: u64,
    pub tier2_winners: u64,
    pub tier3_winners: u64,
    pub winning_numbers: Option<[u8; NUMBERS_PER_TICKET]>,
    /// Committed Switchboard randomness account for this round's draw.
    pub randomness_account: Pubkey,
}

impl LotteryRound {
    pub fn tier_pool(&self, tier: PrizeTier) -> u64 {
        match tier {
            PrizeTier::Tier1 => self.tier1_pool,
            PrizeTier::Tier2 => self.tier2_pool,
            PrizeTier::Tier3 => self.tier3_pool,
        }
    }

    pub fn tier_winners(&self, tier: PrizeTier) -> u64 {
        match tier {
            PrizeTier::Tier1 => self.tier1_winners,
            PrizeTier::Tier2 => self.tier2_winners,
            PrizeTier::Tier3 => self.tier3_winners,
        }
    }

    pub fn record_winner(&mut self, tier: PrizeTier) {
        match tier {
            PrizeTier::Tier1 => self.tier1_winners += 1,
            PrizeTier::Tier2 => self.tier2_winners += 1,
            PrizeTier::Tier3 => self.tier3_winners += 1,
        }
    }
}

/// One purchased ticket. Tier is assigned exactly once by classification
/// (`scored` guards re-runs); `claimed` flips exactly once by a claim.
#[account]
#[derive(InitSpace)]
pub struct Ticket {
    pub bump: u8,
    pub round_id: u64,
    pub ticket_id: u64,
    pub owner: Pubkey,
    /// Chosen numbers, stored sorted ascending.
    pub numbers: [u8; NUMBERS_PER_TICKET],
    pub purchase_time: i64,
    pub scored: bool,
    pub tier: Option<PrizeTier>,
    pub claimed: bool,
}
