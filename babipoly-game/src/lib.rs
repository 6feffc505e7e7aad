//! Babipoly Game Engine
//!
//! Deterministic core rules for the Babipoly board game (Ivory Coast
//! edition, FCFA currency). This crate drives complete games from a seed
//! with no UI, clock, or I/O dependencies, so batch simulation stays fast
//! and reproducible.

pub mod board;
pub mod cards;
pub mod constants;
pub mod economy;
pub mod game;
pub mod ledger;
pub mod player;
pub mod policy;
pub mod rent;
pub mod result;
pub mod rng;
pub mod state;
pub mod turn;

// Re-export commonly used types
pub use board::{Group, Money, SQUARES, Square, max_hotel_rent, nearest_station_forward, square};
pub use cards::{CHANCE_CARDS, COMMUNITY_CARDS, CardEffect, Deck};
pub use economy::{CashSource, charge, credit, declare_bankruptcy, raise_funds};
pub use game::{ConfigError, Game, GameConfig};
pub use ledger::{Ledger, Lot};
pub use player::{Player, PlayerId};
pub use policy::{PolicyConfig, run_build_pass, should_buy};
pub use rent::rent_due;
pub use result::{GameResult, PlayerTally};
pub use rng::{RngBundle, derive_stream_seed};
pub use state::GameState;
pub use turn::play_turn;
