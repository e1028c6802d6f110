use anchor_lang::prelude::*;
use switchboard_on_demand::accounts::RandomnessAccountData;

use crate::constants::{CONFIG_SEED, ROUND_SEED};
use crate::error::LotteryError;
use crate::state::{LotteryConfig, LotteryRound, RoundState};

/// Accounts required to commit a randomness account for a round's draw.
///
/// Ensures:
/// 1. Only the lottery authority can commit.
/// 2. The sales deadline has passed.
/// 3. The randomness account is fresh and not yet revealed.
#[derive(Accounts)]
#[instruction(round_id: u64)]
pub struct CommitDraw<'info> {
    pub authority: Signer<'info>,

    #[account(
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

    /// Randomness account from Switchboard.
    /// CHECK: The account's data is validated manually within the handler.
    pub randomness_account_data: UncheckedAccount<'info>,
}

/// Commits the round to a randomness account and moves it to `Drawing`,
/// ending ticket sales. The committed account must have been seeded in the
/// previous slot so its value was unpredictable at sale time.
pub fn process_commit_draw(ctx: Context<CommitDraw>, _round_id: u64) -> Result<()> {
    let clock = Clock::get()?;
    let round = &mut ctx.accounts.round;

    require!(round.state == RoundState::Open, LotteryError::RoundNotReady);
    require!(
        clock.unix_timestamp >= round.draw_time,
        LotteryError::RoundNotReady
    );
    require!(round.winning_numbers.is_none(), LotteryError::AlreadyDrawn);

    let randomness_data =
        RandomnessAccountData::parse(ctx.accounts.randomness_account_data.data.borrow())
            .map_err(|_| LotteryError::IncorrectRandomnessAccount)?;
    require!(
        randomness_data.seed_slot == clock.slot - 1,
        LotteryError::RandomnessAlreadyRevealed
    );

    round.randomness_account = ctx.accounts.randomness_account_data.key();
    round.state = RoundState::Drawing;
    Ok(())
}
