//! Custom error codes for the number lottery.

use anchor_lang::prelude::*;

#[error_code]
pub enum LotteryError {
    // ── Number selection ────────────────────────────────────────
    #[msg("A ticket must carry exactly the configured count of numbers")]
    WrongCount,

    #[msg("Number outside the configured range")]
    OutOfRange,

    #[msg("Duplicate number on a single ticket")]
    DuplicateNumber,

    // ── Purchase ────────────────────────────────────────────────
    #[msg("Round is not open for ticket sales")]
    RoundNotOpen,

    #[msg("Sales deadline has passed")]
    DeadlinePassed,

    #[msg("Purchase exceeds the per-call ticket limit")]
    TooManyTickets,

    #[msg("Purchase contains no number sets")]
    EmptyPurchase,

    #[msg("Payment does not equal ticket price times ticket count")]
    InsufficientPayment,

    #[msg("Supplied ticket account does not match the expected address")]
    TicketAccountMismatch,

    // ── Draw ────────────────────────────────────────────────────
    #[msg("Round is not ready for this draw step")]
    RoundNotReady,

    #[msg("Winning numbers have already been drawn")]
    AlreadyDrawn,

    #[msg("Randomness could not be expanded into a valid number set")]
    InvalidDrawOutput,

    #[msg("Prize pool has already been split")]
    AlreadySplit,

    #[msg("Randomness account does not match the committed one")]
    IncorrectRandomnessAccount,

    #[msg("Randomness has already been revealed")]
    RandomnessAlreadyRevealed,

    #[msg("Randomness is not yet resolved")]
    RandomnessNotResolved,

    // ── Round lifecycle ─────────────────────────────────────────
    #[msg("Another round is already active")]
    RoundAlreadyActive,

    #[msg("Round is not closed yet")]
    RoundNotClosed,

    #[msg("Ticket does not belong to this round")]
    RoundMismatch,

    #[msg("Draw deadline is in the past")]
    DeadlineInPast,

    // ── Claims ──────────────────────────────────────────────────
    #[msg("Claimant is not the ticket owner")]
    NotOwner,

    #[msg("Ticket did not win a prize tier")]
    NoPrize,

    #[msg("Prize has already been claimed")]
    AlreadyClaimed,

    #[msg("Claim window has expired")]
    ClaimWindowExpired,

    // ── Admin / misc ────────────────────────────────────────────
    #[msg("Not authorized")]
    NotAuthorized,

    #[msg("Tier percentages must sum to 100")]
    InvalidDistribution,

    #[msg("Number range cannot hold a full ticket")]
    InvalidNumberRange,

    #[msg("Protocol fee has already been collected")]
    FeeAlreadyCollected,

    #[msg("Arithmetic overflow")]
    NumericalOverflow,
}
