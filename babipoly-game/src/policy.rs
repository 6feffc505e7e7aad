//! Scripted buy/build policy driven by cash-reserve thresholds.

use serde::{Deserialize, Serialize};

use crate::board::{Group, Money};
use crate::constants::{
    BAIL_RICH_RATIO, BUILD_RESERVE_RATIO, BUY_RESERVE_RATIO, MAX_BUILDINGS,
};
use crate::player::PlayerId;
use crate::state::GameState;

/// Reserve ratios, expressed as fractions of starting money.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Minimum cash kept after buying an unowned square.
    pub buy_reserve_ratio: f64,
    /// Minimum cash kept after placing one building.
    pub build_reserve_ratio: f64,
    /// Cash fraction above which a jailed player pays bail immediately.
    pub bail_rich_ratio: f64,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            buy_reserve_ratio: BUY_RESERVE_RATIO,
            build_reserve_ratio: BUILD_RESERVE_RATIO,
            bail_rich_ratio: BAIL_RICH_RATIO,
        }
    }
}

impl PolicyConfig {
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub(crate) fn reserve(ratio: f64, starting_money: Money) -> Money {
        (starting_money as f64 * ratio) as Money
    }
}

/// Buy an unowned landed-on square iff the post-purchase cash stays at or
/// above the buy reserve.
#[must_use]
pub fn should_buy(gs: &GameState, pid: PlayerId, price: Money, cfg: &PolicyConfig) -> bool {
    let reserve = PolicyConfig::reserve(cfg.buy_reserve_ratio, gs.starting_money);
    gs.players[pid].cash - price >= reserve
}

/// One development pass: for every monopoly the player holds, add houses
/// one at a time to the squares at the group's current minimum (even
/// development), while the build reserve holds and the minimum stays
/// below the hotel. The first failed affordability check stops that
/// group's pass, keeping development level.
pub fn run_build_pass(gs: &mut GameState, pid: PlayerId, cfg: &PolicyConfig) {
    let reserve = PolicyConfig::reserve(cfg.build_reserve_ratio, gs.starting_money);

    for group in Group::ALL {
        if !gs.ledger.owns_group(pid, group) {
            continue;
        }
        let positions = group.positions();
        let house_cost = group.house_cost();

        let mut improved = true;
        while improved {
            improved = false;
            let min_buildings = positions
                .iter()
                .filter_map(|&pos| gs.ledger.lot(pos))
                .map(|lot| lot.buildings)
                .min()
                .unwrap_or(MAX_BUILDINGS);
            if min_buildings >= MAX_BUILDINGS {
                break;
            }
            for &pos in positions {
                let Some(lot) = gs.ledger.lot_mut(pos) else {
                    continue;
                };
                if lot.buildings == min_buildings && lot.buildings < MAX_BUILDINGS {
                    if gs.players[pid].cash - house_cost >= reserve {
                        gs.players[pid].cash -= house_cost;
                        if let Some(lot) = gs.ledger.lot_mut(pos) {
                            lot.buildings += 1;
                        }
                        improved = true;
                    } else {
                        improved = false;
                        break;
                    }
                }
            }
        }
    }
}
