use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::constants::{CONFIG_SEED, ROUND_SEED, TICKET_SEED};
use crate::error::LotteryError;
use crate::events::TicketsPurchased;
use crate::numbers::NumberSet;
use crate::state::{LotteryConfig, LotteryRound, LotteryRules, RoundState, Ticket};

/// Accounts required to buy tickets. The ticket accounts themselves are
/// passed as remaining accounts, one uninitialized PDA per number set, in
/// order, so a single call can purchase a whole batch atomically.
#[derive(Accounts)]
#[instruction(round_id: u64)]
pub struct BuyTickets<'info> {
    /// The account paying for the tickets; becomes their owner.
    #[account(mut)]
    pub buyer: Signer<'info>,

    #[account(
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump,
    )]
    pub config: Account<'info, LotteryConfig>,

    /// The round being bought into; collected lamports are held here.
    #[account(
        mut,
        seeds = [ROUND_SEED.as_bytes(), &round_id.to_le_bytes()],
        bump = round.bump,
    )]
    pub round: Account<'info, LotteryRound>,

    pub system_program: Program<'info, System>,
}

/// Validates a purchase batch before anything is committed: at least one
/// set, at most the configured per-call limit, and every set a valid
/// NumberSet. All-or-nothing; the first failure rejects the whole batch.
pub(crate) fn validate_selections(
    numbers_sets: &[Vec<u8>],
    rules: &LotteryRules,
) -> Result<Vec<NumberSet>> {
    require!(!numbers_sets.is_empty(), LotteryError::EmptyPurchase);
    require!(
        numbers_sets.len() <= rules.max_tickets_per_purchase as usize,
        LotteryError::TooManyTickets
    );
    numbers_sets
        .iter()
        .map(|raw| NumberSet::new(raw, rules.min_number, rules.max_number))
        .collect()
}

/// Buys one ticket per number set in a single atomic instruction.
///
/// Steps performed:
/// 1. Check the round is open and the sales deadline has not passed.
/// 2. Validate every number set (all-or-nothing).
/// 3. Check the payment covers the batch exactly.
/// 4. Transfer the payment into the round account.
/// 5. Create and populate one ticket PDA per set.
pub fn process_buy_tickets<'info>(
    ctx: Context<'_, '_, '_, 'info, BuyTickets<'info>>,
    round_id: u64,
    numbers_sets: Vec<Vec<u8>>,
    payment: u64,
) -> Result<()> {
    let clock = Clock::get()?;
    let rules = ctx.accounts.config.rules;
    let round_key = ctx.accounts.round.key();

    require!(
        ctx.accounts.round.state == RoundState::Open,
        LotteryError::RoundNotOpen
    );
    require!(
        clock.unix_timestamp < ctx.accounts.round.draw_time,
        LotteryError::DeadlinePassed
    );

    let selections = validate_selections(&numbers_sets, &rules)?;
    let quantity = selections.len() as u64;

    let total_cost = ctx
        .accounts
        .round
        .ticket_price
        .checked_mul(quantity)
        .ok_or(LotteryError::NumericalOverflow)?;
    require!(payment == total_cost, LotteryError::InsufficientPayment);
    require!(
        ctx.remaining_accounts.len() == selections.len(),
        LotteryError::TicketAccountMismatch
    );

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.buyer.to_account_info(),
                to: ctx.accounts.round.to_account_info(),
            },
        ),
        total_cost,
    )?;

    let first_ticket_id = ctx.accounts.round.total_tickets_sold;
    let space = 8 + Ticket::INIT_SPACE;
    let lamports = Rent::get()?.minimum_balance(space);

    for (index, selection) in selections.iter().enumerate() {
        let ticket_id = first_ticket_id + index as u64;
        let id_bytes = ticket_id.to_le_bytes();
        let (expected, bump) = Pubkey::find_program_address(
            &[TICKET_SEED.as_bytes(), round_key.as_ref(), &id_bytes],
            &crate::ID,
        );
        let ticket_info = &ctx.remaining_accounts[index];
        require_keys_eq!(
            ticket_info.key(),
            expected,
            LotteryError::TicketAccountMismatch
        );

        let signer_seeds: &[&[u8]] =
            &[TICKET_SEED.as_bytes(), round_key.as_ref(), &id_bytes, &[bump]];
        system_program::create_account(
            CpiContext::new_with_signer(
                ctx.accounts.system_program.to_account_info(),
                system_program::CreateAccount {
                    from: ctx.accounts.buyer.to_account_info(),
                    to: ticket_info.clone(),
                },
                &[signer_seeds],
            ),
            lamports,
            space as u64,
            &crate::ID,
        )?;

        let ticket = Ticket {
            bump,
            round_id,
            ticket_id,
            owner: ctx.accounts.buyer.key(),
            numbers: selection.as_array(),
            purchase_time: clock.unix_timestamp,
            scored: false,
            tier: None,
            claimed: false,
        };
        let mut data = ticket_info.try_borrow_mut_data()?;
        let mut cursor = &mut data[..];
        ticket.try_serialize(&mut cursor)?;
    }

    let round = &mut ctx.accounts.round;
    round.total_tickets_sold = round
        .total_tickets_sold
        .checked_add(quantity)
        .ok_or(LotteryError::NumericalOverflow)?;
    round.total_collected = round
        .total_collected
        .checked_add(total_cost)
        .ok_or(LotteryError::NumericalOverflow)?;

    emit!(TicketsPurchased {
        round_id,
        buyer: ctx.accounts.buyer.key(),
        quantity,
        first_ticket_id,
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> LotteryRules {
        LotteryRules {
            min_number: 1,
            max_number: 50,
            max_tickets_per_purchase: 3,
            tier1_pct: 65,
            tier2_pct: 20,
            tier3_pct: 10,
            fee_pct: 5,
            claim_window_days: 90,
        }
    }

    #[test]
    fn accepts_a_batch_up_to_the_limit() {
        let sets = vec![
            vec![1, 2, 3, 4, 5, 6],
            vec![7, 14, 21, 28, 35, 42],
            vec![50, 1, 25, 13, 37, 44],
        ];
        let selections = validate_selections(&sets, &rules()).unwrap();
        assert_eq!(selections.len(), 3);
        assert_eq!(selections[2].as_array(), [1, 13, 25, 37, 44, 50]);
    }

    #[test]
    fn rejects_empty_and_oversized_batches() {
        assert_eq!(
            validate_selections(&[], &rules()),
            Err(LotteryError::EmptyPurchase.into())
        );
        let sets = vec![vec![1, 2, 3, 4, 5, 6]; 4];
        assert_eq!(
            validate_selections(&sets, &rules()),
            Err(LotteryError::TooManyTickets.into())
        );
    }

    #[test]
    fn one_bad_set_rejects_the_whole_batch() {
        let sets = vec![vec![1, 2, 3, 4, 5, 6], vec![1, 1, 2, 3, 4, 5]];
        assert_eq!(
            validate_selections(&sets, &rules()),
            Err(LotteryError::DuplicateNumber.into())
        );
    }
}
