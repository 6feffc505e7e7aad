//! Rent computation for the three purchasable square kinds.

use crate::board::{self, Money, Square};
use crate::state::GameState;

/// Rent owed for landing on `pos` with a movement roll of `dice_sum`.
///
/// Unowned or mortgaged squares charge nothing. The monopoly bonus only
/// applies to the undeveloped tier: a full unmortgaged color group doubles
/// base rent, and the first house switches to the schedule instead.
/// `double_station` is the nearest-station card rule, which doubles the
/// station tier. Utility rent is dice-derived from the sum that moved the
/// player here, even when a card did the moving.
#[must_use]
pub fn rent_due(gs: &GameState, pos: u8, dice_sum: u8, double_station: bool) -> Money {
    let Some(lot) = gs.ledger.lot(pos) else {
        return 0;
    };
    let Some(owner) = lot.owner else {
        return 0;
    };
    if lot.mortgaged {
        return 0;
    }

    match board::square(pos) {
        Square::Property { group, rent, .. } => {
            let mut due = rent[lot.buildings as usize];
            if lot.buildings == 0 && gs.ledger.owns_group(owner, *group) {
                due *= 2;
            }
            due
        }
        Square::Station { rent, .. } => {
            // The landed station itself is unmortgaged, so the count is
            // always at least one.
            let tier = gs.ledger.stations_owned(owner).saturating_sub(1).min(3);
            let multiplier = if double_station { 2 } else { 1 };
            rent[tier] * multiplier
        }
        Square::Utility { .. } => {
            let multiplier = if gs.ledger.utilities_owned(owner) >= 2 {
                10
            } else {
                4
            };
            Money::from(dice_sum) * multiplier
        }
        _ => 0,
    }
}
