//! Centralized balance and tuning constants for Babipoly game logic.
//!
//! These values define the deterministic math for the core simulation.
//! They reproduce the published Babipoly rule sheet exactly, including its
//! known imbalances; balance experiments override starting money through
//! `GameConfig` rather than by editing this file.

use crate::board::Money;

// Board geometry -----------------------------------------------------------
pub(crate) const BOARD_SIZE: u8 = 40;
pub(crate) const JAIL_POS: u8 = 10;

// Bank amounts (FCFA) ------------------------------------------------------
pub(crate) const STARTING_MONEY: Money = 250_000;
/// Credit for passing or landing on GO; public so the balance reports can
/// relate the bank injection rate to starting money.
pub const GO_REWARD: Money = 10_000;
pub(crate) const JAIL_BAIL: Money = 5_000;

// Building limits ----------------------------------------------------------
pub(crate) const MAX_BUILDINGS: u8 = 5;
pub(crate) const BUILDING_RESALE_DIVISOR: Money = 2;

// Jail ---------------------------------------------------------------------
pub(crate) const JAIL_FORCED_EXIT_TURNS: u8 = 3;
pub(crate) const MAX_DOUBLES_STREAK: u8 = 3;

// Termination --------------------------------------------------------------
pub(crate) const MAX_ROUNDS: u32 = 10_000;

// AI tuning knobs ----------------------------------------------------------
pub(crate) const BUY_RESERVE_RATIO: f64 = 0.10;
pub(crate) const BUILD_RESERVE_RATIO: f64 = 0.15;
pub(crate) const BAIL_RICH_RATIO: f64 = 0.40;

// Player limits ------------------------------------------------------------
pub(crate) const MIN_PLAYERS: usize = 2;
pub(crate) const MAX_PLAYERS: usize = 8;
