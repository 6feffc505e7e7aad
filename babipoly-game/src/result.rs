//! Per-game result snapshot consumed by the aggregation layer.

use serde::{Deserialize, Serialize};

use crate::board::Money;
use crate::player::PlayerId;

/// Running per-seat counters, frozen into the result when the game ends.
///
/// `peak_cash` starts at zero and records post-credit cash only: bank
/// credits and rent income raise it, while spending and peer-transfer
/// cards never touch it. A seat that spends early and is never credited
/// above its starting cash therefore reports a peak below that start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlayerTally {
    pub peak_cash: Money,
    pub properties_bought: u32,
    pub rent_paid: Money,
    pub rent_received: Money,
    pub go_bonuses: Money,
    pub tax_paid: Money,
}

/// Immutable snapshot produced once per game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub rounds: u32,
    pub turns: u32,
    /// Winning seat, or `None` when the last players went bankrupt in the
    /// same settlement.
    pub winner: Option<PlayerId>,
    /// True when the round ceiling forced termination; the winner is then
    /// the net-worth leader.
    pub timed_out: bool,
    /// Seats in the order they went bankrupt.
    pub bankrupt_order: Vec<PlayerId>,
    pub players: Vec<PlayerTally>,
}
