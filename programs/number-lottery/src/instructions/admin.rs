use anchor_lang::prelude::*;

use crate::constants::CONFIG_SEED;
use crate::state::{LotteryConfig, LotteryRules};

/// Accounts required to initialize the lottery configuration.
/// This sets up the global config account with the rules record.
#[derive(Accounts)]
pub struct InitializeConfig<'info> {
    /// The account paying for account creation; becomes the authority.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The global configuration account.
    #[account(
        init,
        payer = payer,
        space = 8 + LotteryConfig::INIT_SPACE,
        seeds = [CONFIG_SEED.as_bytes()],
        bump
    )]
    pub config: Account<'info, LotteryConfig>,

    /// System program to create accounts.
    pub system_program: Program<'info, System>,
}

/// Stores the validated rules record and the operating authority.
/// The rules (number range, purchase limit, tier split, claim window)
/// are fixed here once; every handler reads them from this account.
pub fn process_initialize_config(ctx: Context<InitializeConfig>, rules: LotteryRules) -> Result<()> {
    rules.validate()?;
    let config = &mut ctx.accounts.config;
    config.bump = ctx.bumps.config;
    config.authority = ctx.accounts.payer.key();
    config.rules = rules;
    config.last_round_id = 0;
    config.active_round = None;
    Ok(())
}
