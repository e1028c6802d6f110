use anchor_lang::prelude::*;

use crate::constants::{CONFIG_SEED, ROUND_SEED, SECONDS_PER_DAY, TICKET_SEED};
use crate::error::LotteryError;
use crate::events::PrizeClaimed;
use crate::pool::payout_per_winner;
use crate::state::{LotteryConfig, LotteryRound, RoundState, Ticket};

/// Accounts required to claim a ticket's prize.
///
/// Ensures:
/// 1. The ticket belongs to the given round (PDA derivation).
/// 2. Only the ticket owner can claim.
/// 3. Each ticket pays out at most once.
#[derive(Accounts)]
#[instruction(round_id: u64, ticket_id: u64)]
pub struct ClaimPrize<'info> {
    #[account(mut)]
    pub claimant: Signer<'info>,

    #[account(
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump,
    )]
    pub config: Account<'info, LotteryConfig>,

    /// The closed round holding the prize funds.
    #[account(
        mut,
        seeds = [ROUND_SEED.as_bytes(), &round_id.to_le_bytes()],
        bump = round.bump,
    )]
    pub round: Account<'info, LotteryRound>,

    #[account(
        mut,
        seeds = [TICKET_SEED.as_bytes(), round.key().as_ref(), &ticket_id.to_le_bytes()],
        bump = ticket.bump,
    )]
    pub ticket: Account<'info, Ticket>,
}

/// The claim settlement core, kept free of account plumbing so the guard
/// order and replay behavior are directly testable. Guard order: round
/// closed, ownership, prize tier present, not yet claimed, claim window.
/// Marks the ticket claimed and returns the payout.
pub(crate) fn settle_claim(
    ticket: &mut Ticket,
    round: &LotteryRound,
    claimant: &Pubkey,
    now: i64,
    claim_window_days: u16,
) -> Result<u64> {
    require!(
        round.state == RoundState::Closed,
        LotteryError::RoundNotClosed
    );
    require!(ticket.owner == *claimant, LotteryError::NotOwner);
    let tier = ticket.tier.ok_or(LotteryError::NoPrize)?;
    require!(!ticket.claimed, LotteryError::AlreadyClaimed);

    let claim_deadline = round.close_time + claim_window_days as i64 * SECONDS_PER_DAY;
    require!(now <= claim_deadline, LotteryError::ClaimWindowExpired);

    let payout = payout_per_winner(round.tier_pool(tier), round.tier_winners(tier));
    ticket.claimed = true;
    Ok(payout)
}

/// Pays out a winning ticket from the round account. Replays fail with
/// `AlreadyClaimed` and never move funds twice.
pub fn process_claim_prize(ctx: Context<ClaimPrize>, round_id: u64, ticket_id: u64) -> Result<()> {
    let clock = Clock::get()?;
    let claim_window_days = ctx.accounts.config.rules.claim_window_days;

    let payout = settle_claim(
        &mut ctx.accounts.ticket,
        &ctx.accounts.round,
        &ctx.accounts.claimant.key(),
        clock.unix_timestamp,
        claim_window_days,
    )?;
    let tier = ctx.accounts.ticket.tier.ok_or(LotteryError::NoPrize)?;

    **ctx
        .accounts
        .round
        .to_account_info()
        .try_borrow_mut_lamports()? -= payout;
    **ctx.accounts.claimant.try_borrow_mut_lamports()? += payout;

    emit!(PrizeClaimed {
        round_id,
        ticket_id,
        claimer: ctx.accounts.claimant.key(),
        tier: tier.rank(),
        amount: payout,
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::PrizeTier;

    const DAY: i64 = SECONDS_PER_DAY;

    fn closed_round() -> LotteryRound {
        LotteryRound {
            bump: 255,
            round_id: 1,
            state: RoundState::Closed,
            ticket_price: 1_000_000_000,
            open_time: 0,
            draw_time: 100,
            close_time: 200,
            total_tickets_sold: 5,
            tickets_scored: 5,
            total_collected: 5_000_000_000,
            tier1_pool: 3_250_000_000,
            tier2_pool: 1_000_000_000,
            tier3_pool: 500_000_000,
            fee_amount: 250_000_000,
            split_done: true,
            fee_collected: false,
            tier1_winners: 0,
            tier2_winners: 0,
            tier3_winners: 2,
            winning_numbers: Some([3, 9, 18, 27, 36, 45]),
            randomness_account: Pubkey::default(),
        }
    }

    fn winning_ticket(owner: Pubkey) -> Ticket {
        Ticket {
            bump: 254,
            round_id: 1,
            ticket_id: 0,
            owner,
            numbers: [3, 9, 18, 27, 28, 45],
            purchase_time: 50,
            scored: true,
            tier: Some(PrizeTier::Tier3),
            claimed: false,
        }
    }

    #[test]
    fn claim_pays_once_then_reports_already_claimed() {
        let owner = Pubkey::new_unique();
        let round = closed_round();
        let mut ticket = winning_ticket(owner);

        let payout = settle_claim(&mut ticket, &round, &owner, 300, 90).unwrap();
        assert_eq!(payout, 250_000_000); // tier3 pool split between 2 winners
        assert!(ticket.claimed);

        assert_eq!(
            settle_claim(&mut ticket, &round, &owner, 301, 90),
            Err(LotteryError::AlreadyClaimed.into())
        );
    }

    #[test]
    fn only_the_owner_can_claim() {
        let owner = Pubkey::new_unique();
        let round = closed_round();
        let mut ticket = winning_ticket(owner);
        assert_eq!(
            settle_claim(&mut ticket, &round, &Pubkey::new_unique(), 300, 90),
            Err(LotteryError::NotOwner.into())
        );
        assert!(!ticket.claimed);
    }

    #[test]
    fn losing_ticket_has_no_prize() {
        let owner = Pubkey::new_unique();
        let round = closed_round();
        let mut ticket = winning_ticket(owner);
        ticket.tier = None;
        ticket.numbers = [7, 14, 21, 28, 35, 42]; // zero matches
        assert_eq!(
            settle_claim(&mut ticket, &round, &owner, 300, 90),
            Err(LotteryError::NoPrize.into())
        );
    }

    #[test]
    fn claims_require_a_closed_round() {
        let owner = Pubkey::new_unique();
        let mut round = closed_round();
        round.state = RoundState::Drawing;
        let mut ticket = winning_ticket(owner);
        assert_eq!(
            settle_claim(&mut ticket, &round, &owner, 300, 90),
            Err(LotteryError::RoundNotClosed.into())
        );
    }

    #[test]
    fn claims_expire_after_the_window() {
        let owner = Pubkey::new_unique();
        let round = closed_round();
        let mut ticket = winning_ticket(owner);
        let deadline = round.close_time + 90 * DAY;
        assert_eq!(
            settle_claim(&mut ticket, &round, &owner, deadline + 1, 90),
            Err(LotteryError::ClaimWindowExpired.into())
        );
        // On the deadline itself the claim still succeeds.
        assert!(settle_claim(&mut ticket, &round, &owner, deadline, 90).is_ok());
    }
}
