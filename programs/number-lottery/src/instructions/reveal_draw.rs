use anchor_lang::prelude::*;
use switchboard_on_demand::accounts::RandomnessAccountData;

use crate::constants::{CONFIG_SEED, ROUND_SEED};
use crate::error::LotteryError;
use crate::events::RoundDrawn;
use crate::numbers::derive_winning_numbers;
use crate::pool::split_pool;
use crate::state::{LotteryConfig, LotteryRound, RoundState};

/// Accounts required to reveal a round's draw.
///
/// Ensures:
/// 1. Only the lottery authority can reveal.
/// 2. The randomness account matches the committed one.
/// 3. The draw happens at most once per round.
#[derive(Accounts)]
#[instruction(round_id: u64)]
pub struct RevealDraw<'info> {
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

    /// The randomness oracle account committed in `commit_draw`.
    /// CHECK: The account's data is validated manually within the handler.
    pub randomness_account_data: UncheckedAccount<'info>,
}

/// Resolves the committed randomness into the round's winning numbers.
/// The prize pool is split into tiers first, then the winning set is
/// fixed; both happen exactly once.
pub fn process_reveal_draw(ctx: Context<RevealDraw>, round_id: u64) -> Result<()> {
    let clock = Clock::get()?;
    let rules = ctx.accounts.config.rules;
    let round = &mut ctx.accounts.round;

    require!(
        round.state == RoundState::Drawing,
        LotteryError::RoundNotReady
    );
    require_keys_eq!(
        ctx.accounts.randomness_account_data.key(),
        round.randomness_account,
        LotteryError::IncorrectRandomnessAccount
    );
    require!(round.winning_numbers.is_none(), LotteryError::AlreadyDrawn);

    let randomness_data =
        RandomnessAccountData::parse(ctx.accounts.randomness_account_data.data.borrow())
            .map_err(|_| LotteryError::IncorrectRandomnessAccount)?;
    let revealed = randomness_data
        .get_value(&clock)
        .map_err(|_| LotteryError::RandomnessNotResolved)?;

    require!(!round.split_done, LotteryError::AlreadySplit);
    let split = split_pool(round.total_collected, &rules.distribution())?;
    round.tier1_pool = split.tier1;
    round.tier2_pool = split.tier2;
    round.tier3_pool = split.tier3;
    round.fee_amount = split.fee;
    round.split_done = true;

    let winning = derive_winning_numbers(&revealed, rules.min_number, rules.max_number)?;
    round.winning_numbers = Some(winning.as_array());

    msg!("Round {} drew {:?}", round_id, winning.as_array());
    emit!(RoundDrawn {
        round_id,
        winning_numbers: winning.as_array(),
    });
    Ok(())
}
