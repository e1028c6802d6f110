use anchor_lang::prelude::*;

use crate::constants::{CONFIG_SEED, ROUND_SEED};
use crate::error::LotteryError;
use crate::events::RoundOpened;
use crate::state::{LotteryConfig, LotteryRound, RoundState};

/// Accounts required to create a new round in `Waiting` state.
#[derive(Accounts)]
pub struct CreateRound<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump,
        has_one = authority @ LotteryError::NotAuthorized,
    )]
    pub config: Account<'info, LotteryConfig>,

    #[account(
        init,
        payer = authority,
        space = 8 + LotteryRound::INIT_SPACE,
        seeds = [ROUND_SEED.as_bytes(), &(config.last_round_id + 1).to_le_bytes()],
        bump
    )]
    pub round: Account<'info, LotteryRound>,

    pub system_program: Program<'info, System>,
}

/// Accounts required to open an existing `Waiting` round for sales.
#[derive(Accounts)]
#[instruction(round_id: u64)]
pub struct OpenRound<'info> {
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

/// Creates the next round. Rounds are numbered from 1 and start in
/// `Waiting`; nothing can be purchased until the round is opened.
pub fn process_create_round(ctx: Context<CreateRound>) -> Result<()> {
    let config = &mut ctx.accounts.config;
    let round = &mut ctx.accounts.round;

    config.last_round_id = config
        .last_round_id
        .checked_add(1)
        .ok_or(LotteryError::NumericalOverflow)?;

    round.bump = ctx.bumps.round;
    round.round_id = config.last_round_id;
    round.state = RoundState::Waiting;
    Ok(())
}

/// Opens a `Waiting` round for ticket sales, fixing the ticket price and
/// the draw deadline. Only one round may be open at a time.
pub fn process_open_round(
    ctx: Context<OpenRound>,
    _round_id: u64,
    ticket_price: u64,
    draw_time: i64,
) -> Result<()> {
    let clock = Clock::get()?;
    let config = &mut ctx.accounts.config;
    let round = &mut ctx.accounts.round;

    require!(config.active_round.is_none(), LotteryError::RoundAlreadyActive);
    require!(
        round.state == RoundState::Waiting,
        LotteryError::RoundAlreadyActive
    );
    require!(draw_time > clock.unix_timestamp, LotteryError::DeadlineInPast);

    round.state = RoundState::Open;
    round.ticket_price = ticket_price;
    round.open_time = clock.unix_timestamp;
    round.draw_time = draw_time;
    config.active_round = Some(round.round_id);

    emit!(RoundOpened {
        round_id: round.round_id,
        ticket_price,
        open_time: round.open_time,
        draw_time,
    });
    Ok(())
}
