use anchor_lang::prelude::*;

use crate::constants::{CONFIG_SEED, ROUND_SEED};
use crate::error::LotteryError;
use crate::events::RoundClosed;
use crate::numbers::{tier_for_matches, NumberSet};
use crate::state::{LotteryConfig, LotteryRound, RoundState, Ticket};

/// Accounts required to classify tickets and close a drawn round. The
/// round's ticket accounts are passed as remaining accounts; calls may be
/// batched until every sold ticket has been scored.
#[derive(Accounts)]
#[instruction(round_id: u64)]
pub struct FinalizeRound<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump,
        has_one = authority @ LotteryError::NotAuthorized,
    )]
    pub config: Account<'info, LotteryConfig>,

    #[account(
        mut,
        seeds = [ROUND_SEED.as_bytes(), &round_id.to_le_bytes()],
        bump = round.bump,
    )]
    pub round: Account<'info, LotteryRound>,
}

/// Scores every supplied ticket against the winning numbers and tallies
/// winners per tier. Classification is a pure function of the two number
/// sets, so re-running over the same tickets is a no-op (`scored` guard).
/// Once all sold tickets are scored the round closes; with zero tickets
/// it closes immediately.
pub fn process_finalize_round<'info>(
    ctx: Context<'_, '_, '_, 'info, FinalizeRound<'info>>,
    round_id: u64,
) -> Result<()> {
    let clock = Clock::get()?;
    let rules = ctx.accounts.config.rules;
    let round = &mut ctx.accounts.round;

    require!(
        round.state == RoundState::Drawing,
        LotteryError::RoundNotReady
    );
    let winning_raw = round.winning_numbers.ok_or(LotteryError::RoundNotReady)?;
    let winning = NumberSet::new(&winning_raw, rules.min_number, rules.max_number)?;

    for ticket_info in ctx.remaining_accounts {
        require_keys_eq!(
            *ticket_info.owner,
            crate::ID,
            LotteryError::TicketAccountMismatch
        );
        let mut data = ticket_info.try_borrow_mut_data()?;
        let mut ticket = Ticket::try_deserialize(&mut &data[..])?;
        require!(ticket.round_id == round_id, LotteryError::RoundMismatch);
        if ticket.scored {
            continue;
        }

        let chosen = NumberSet::new(&ticket.numbers, rules.min_number, rules.max_number)?;
        let tier = tier_for_matches(chosen.match_count(&winning));
        ticket.tier = tier;
        ticket.scored = true;
        if let Some(tier) = tier {
            round.record_winner(tier);
        }
        round.tickets_scored += 1;

        let mut cursor = &mut data[..];
        ticket.try_serialize(&mut cursor)?;
    }

    if round.tickets_scored == round.total_tickets_sold {
        round.state = RoundState::Closed;
        round.close_time = clock.unix_timestamp;
        ctx.accounts.config.active_round = None;

        emit!(RoundClosed {
            round_id,
            total_collected: round.total_collected,
            tier1_winners: round.tier1_winners,
            tier2_winners: round.tier2_winners,
            tier3_winners: round.tier3_winners,
        });
    }
    Ok(())
}
