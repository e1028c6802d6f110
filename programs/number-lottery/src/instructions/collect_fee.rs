use anchor_lang::prelude::*;

use crate::constants::{CONFIG_SEED, ROUND_SEED};
use crate::error::LotteryError;
use crate::state::{LotteryConfig, LotteryRound, RoundState};

/// Accounts required to withdraw a closed round's protocol fee bucket.
#[derive(Accounts)]
#[instruction(round_id: u64)]
pub struct CollectFee<'info> {
    #[account(mut)]
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
}

/// Moves the round's fee bucket to the authority, once. The bucket also
/// carries the truncation remainder from the split, so after collection
/// only tier pools (and any unclaimed floor remainders) stay on the round.
pub fn process_collect_fee(ctx: Context<CollectFee>, _round_id: u64) -> Result<()> {
    let round = &mut ctx.accounts.round;

    require!(
        round.state == RoundState::Closed,
        LotteryError::RoundNotClosed
    );
    require!(!round.fee_collected, LotteryError::FeeAlreadyCollected);

    let amount = round.fee_amount;
    round.fee_collected = true;

    **round.to_account_info().try_borrow_mut_lamports()? -= amount;
    **ctx.accounts.authority.try_borrow_mut_lamports()? += amount;
    Ok(())
}
