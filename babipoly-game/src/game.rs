//! Game construction and the round loop.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::Money;
use crate::constants::{MAX_PLAYERS, MAX_ROUNDS, MIN_PLAYERS, STARTING_MONEY};
use crate::player::PlayerId;
use crate::policy::PolicyConfig;
use crate::result::GameResult;
use crate::state::GameState;
use crate::turn;

/// Rejected [`GameConfig`] values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("player count {0} out of range ({MIN_PLAYERS}-{MAX_PLAYERS})")]
    PlayerCount(usize),
    #[error("starting money must be positive, got {0}")]
    StartingMoney(Money),
}

/// Parameters for one simulated game.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GameConfig {
    pub num_players: usize,
    pub starting_money: Money,
    pub seed: u64,
    #[serde(default)]
    pub policy: PolicyConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            num_players: 4,
            starting_money: STARTING_MONEY,
            seed: 0,
            policy: PolicyConfig::default(),
        }
    }
}

impl GameConfig {
    /// Reject configurations the engine cannot play.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.num_players) {
            return Err(ConfigError::PlayerCount(self.num_players));
        }
        if self.starting_money <= 0 {
            return Err(ConfigError::StartingMoney(self.starting_money));
        }
        Ok(())
    }
}

/// One game in progress. Construct with [`Game::new`], then consume with
/// [`Game::run`].
pub struct Game {
    state: GameState,
    policy: PolicyConfig,
}

impl Game {
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            state: GameState::new(config.num_players, config.starting_money, config.seed),
            policy: config.policy,
        })
    }

    /// Play to completion: last solvent player wins, or the round ceiling
    /// trips and the richest player by net worth takes a timeout win.
    ///
    /// Every non-bankrupt player finishes the round before termination is
    /// evaluated, so the last survivor can still bankrupt on tax or
    /// repairs during the remainder of the round and leave no winner.
    #[must_use]
    pub fn run(mut self) -> GameResult {
        let gs = &mut self.state;

        let (winner, timed_out) = loop {
            gs.round += 1;
            for pid in 0..gs.players.len() {
                if !gs.players[pid].bankrupt {
                    turn::play_turn(gs, pid, &self.policy);
                }
            }

            let survivors = gs.solvent_ids();
            if survivors.len() <= 1 {
                break (survivors.first().copied(), false);
            }
            if gs.round >= MAX_ROUNDS {
                break (richest(gs, &survivors), true);
            }
        };

        GameResult {
            rounds: gs.round,
            turns: gs.turns,
            winner,
            timed_out,
            bankrupt_order: std::mem::take(&mut gs.bankrupt_order),
            players: std::mem::take(&mut gs.tallies),
        }
    }
}

/// Highest net worth among `ids`; ties go to the earliest seat because
/// only a strictly greater total displaces the current leader.
fn richest(gs: &GameState, ids: &[PlayerId]) -> Option<PlayerId> {
    let mut best: Option<(PlayerId, Money)> = None;
    for &pid in ids {
        let worth = gs.players[pid].net_worth(&gs.ledger);
        match best {
            Some((_, top)) if worth <= top => {}
            _ => best = Some((pid, worth)),
        }
    }
    best.map(|(pid, _)| pid)
}
