pub mod admin;
pub mod buy_ticket;
pub mod claim_prize;
pub mod collect_fee;
pub mod commit_draw;
pub mod finalize_round;
pub mod open_round;
pub mod reveal_draw;

pub use admin::*;
pub use buy_ticket::*;
pub use claim_prize::*;
pub use collect_fee::*;
pub use commit_draw::*;
pub use finalize_round::*;
pub use open_round::*;
pub use reveal_draw::*;
