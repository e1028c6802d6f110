use anchor_lang::prelude::*;

use crate::constants::NUMBERS_PER_TICKET;

#[event]
pub struct RoundOpened {
    pub round_id: u64,
    pub ticket_price: u64,
    pub open_time: i64,
    pub draw_time: i64,
}

#[event]
pub struct TicketsPurchased {
    pub round_id: u64,
    pub buyer: Pubkey,
    pub quantity: u64,
    pub first_ticket_id: u64,
}

#[event]
pub struct RoundDrawn {
    pub round_id: u64,
    pub winning_numbers: [u8; NUMBERS_PER_TICKET],
}

#[event]
pub struct RoundClosed {
    pub round_id: u64,
    pub total_collected: u64,
    pub tier1_winners: u64,
    pub tier2_winners: u64,
    pub tier3_winners: u64,
}

#[event]
pub struct PrizeClaimed {
    pub round_id: u64,
    pub ticket_id: u64,
    pub claimer: Pubkey,
    pub tier: u8,
    pub amount: u64,
}
