use anchor_lang::prelude::*;
use instructions::*;

mod constants;
mod error;
mod events;
mod instructions;
mod numbers;
mod pool;
mod state;

use state::LotteryRules;

declare_id!("UzoDjjktJ5V6frSqc7wCCukiPuSEU9bFmpEYiRsAvPe");

#[program]
pub mod number_lottery {
    use super::*;

    pub fn initialize_config(ctx: Context<InitializeConfig>, rules: LotteryRules) -> Result<()> {
        process_initialize_config(ctx, rules)
    }

    pub fn create_round(ctx: Context<CreateRound>) -> Result<()> {
        process_create_round(ctx)
    }

    pub fn open_round(
        ctx: Context<OpenRound>,
        round_id: u64,
        ticket_price: u64,
        draw_time: i64,
    ) -> Result<()> {
        process_open_round(ctx, round_id, ticket_price, draw_time)
    }

    pub fn buy_tickets<'info>(
        ctx: Context<'_, '_, '_, 'info, BuyTickets<'info>>,
        round_id: u64,
        numbers_sets: Vec<Vec<u8>>,
        payment: u64,
    ) -> Result<()> {
        process_buy_tickets(ctx, round_id, numbers_sets, payment)
    }

    pub fn commit_draw(ctx: Context<CommitDraw>, round_id: u64) -> Result<()> {
        process_commit_draw(ctx, round_id)
    }

    pub fn reveal_draw(ctx: Context<RevealDraw>, round_id: u64) -> Result<()> {
        process_reveal_draw(ctx, round_id)
    }

    pub fn finalize_round<'info>(
        ctx: Context<'_, '_, '_, 'info, FinalizeRound<'info>>,
        round_id: u64,
    ) -> Result<()> {
        process_finalize_round(ctx, round_id)
    }

    pub fn claim_prize(ctx: Context<ClaimPrize>, round_id: u64, ticket_id: u64) -> Result<()> {
        process_claim_prize(ctx, round_id, ticket_id)
    }

    pub fn collect_fee(ctx: Context<CollectFee>, round_id: u64) -> Result<()> {
        process_collect_fee(ctx, round_id)
    }
}
