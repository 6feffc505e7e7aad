//! Batch runner: many independent games in parallel, one summary out.

use anyhow::Result;
use babipoly_game::{Game, GameConfig, GameResult, Money, PolicyConfig, derive_stream_seed};
use rayon::prelude::*;
use serde::Serialize;

use crate::stats::Stats;

/// Parameters for one batch of identically configured games.
#[derive(Debug, Clone, Copy)]
pub struct BatchConfig {
    pub games: usize,
    pub num_players: usize,
    pub starting_money: Money,
    pub seed: u64,
    pub policy: PolicyConfig,
}

/// Mean per-seat economics across a batch.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct SeatEconomics {
    pub wins: usize,
    pub peak_cash: f64,
    pub properties_bought: f64,
    pub rent_paid: f64,
    pub rent_received: f64,
    pub go_bonuses: f64,
    pub tax_paid: f64,
}

/// Aggregated outcome of a batch.
#[derive(Debug, Clone, Serialize)]
pub struct BatchSummary {
    pub games: usize,
    pub num_players: usize,
    pub starting_money: Money,
    pub seed: u64,
    /// Games decided by bankruptcies, not the round ceiling.
    pub decisive: usize,
    pub timeouts: usize,
    pub rounds: Stats,
    pub turns: Stats,
    /// Rounds restricted to decisive games; `None` when every game timed
    /// out.
    pub decisive_rounds: Option<Stats>,
    pub seats: Vec<SeatEconomics>,
}

impl BatchSummary {
    #[allow(clippy::cast_precision_loss)]
    fn from_results(cfg: &BatchConfig, results: &[GameResult]) -> Self {
        let rounds: Vec<f64> = results.iter().map(|r| f64::from(r.rounds)).collect();
        let turns: Vec<f64> = results.iter().map(|r| f64::from(r.turns)).collect();
        let decisive_rounds: Vec<f64> = results
            .iter()
            .filter(|r| !r.timed_out)
            .map(|r| f64::from(r.rounds))
            .collect();

        let mut seats = vec![SeatEconomics::default(); cfg.num_players];
        for result in results {
            if let Some(winner) = result.winner {
                seats[winner].wins += 1;
            }
            for (seat, tally) in seats.iter_mut().zip(&result.players) {
                seat.peak_cash += tally.peak_cash as f64;
                seat.properties_bought += f64::from(tally.properties_bought);
                seat.rent_paid += tally.rent_paid as f64;
                seat.rent_received += tally.rent_received as f64;
                seat.go_bonuses += tally.go_bonuses as f64;
                seat.tax_paid += tally.tax_paid as f64;
            }
        }
        let n = results.len().max(1) as f64;
        for seat in &mut seats {
            seat.peak_cash /= n;
            seat.properties_bought /= n;
            seat.rent_paid /= n;
            seat.rent_received /= n;
            seat.go_bonuses /= n;
            seat.tax_paid /= n;
        }

        let timeouts = results.iter().filter(|r| r.timed_out).count();
        Self {
            games: results.len(),
            num_players: cfg.num_players,
            starting_money: cfg.starting_money,
            seed: cfg.seed,
            decisive: results.len() - timeouts,
            timeouts,
            rounds: Stats::from_values(&rounds).unwrap_or_else(empty_stats),
            turns: Stats::from_values(&turns).unwrap_or_else(empty_stats),
            decisive_rounds: Stats::from_values(&decisive_rounds),
            seats,
        }
    }

    /// Fraction of games decided by bankruptcy.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn decisive_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.decisive as f64 / self.games as f64
        }
    }
}

fn empty_stats() -> Stats {
    Stats {
        min: 0.0,
        p25: 0.0,
        median: 0.0,
        mean: 0.0,
        p75: 0.0,
        max: 0.0,
        stddev: 0.0,
    }
}

/// Seed for game `index` within a batch, independent of every engine RNG
/// stream and of all other indices.
#[must_use]
pub fn game_seed(batch_seed: u64, index: u64) -> u64 {
    derive_stream_seed(batch_seed, &index.to_le_bytes())
}

/// Run the whole batch across the rayon thread pool. Games share nothing,
/// so this scales linearly with cores.
pub fn run_batch(cfg: &BatchConfig) -> Result<BatchSummary> {
    let results = (0..cfg.games as u64)
        .into_par_iter()
        .map(|index| {
            let game_cfg = GameConfig {
                num_players: cfg.num_players,
                starting_money: cfg.starting_money,
                seed: game_seed(cfg.seed, index),
                policy: cfg.policy,
            };
            Ok(Game::new(&game_cfg)?.run())
        })
        .collect::<Result<Vec<GameResult>>>()?;

    log::info!(
        "batch done: {} games, {} decisive, {} timeouts",
        results.len(),
        results.iter().filter(|r| !r.timed_out).count(),
        results.iter().filter(|r| r.timed_out).count(),
    );

    Ok(BatchSummary::from_results(cfg, &results))
}
