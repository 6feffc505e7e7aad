//! Money movement: credits, charges, forced liquidation, bankruptcy.
//!
//! A shortfall is not an error. `charge` liquidates buildings and
//! mortgages until the debt is covered or nothing is left, and an
//! uncoverable debt resolves into the terminal bankruptcy transition.

use crate::board::{self, Money};
use crate::constants::BUILDING_RESALE_DIVISOR;
use crate::player::PlayerId;
use crate::state::GameState;

/// Where a credit came from; GO bonuses are tracked as bank injections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CashSource {
    Bank,
    GoBonus,
}

/// Unconditionally add cash, updating the peak-cash watermark.
pub fn credit(gs: &mut GameState, pid: PlayerId, amount: Money, source: CashSource) {
    let player = &mut gs.players[pid];
    player.cash += amount;
    let tally = &mut gs.tallies[pid];
    if source == CashSource::GoBonus {
        tally.go_bonuses += amount;
    }
    if player.cash > tally.peak_cash {
        tally.peak_cash = player.cash;
    }
}

/// Debit `amount`, liquidating first if cash falls short. On success the
/// solvent creditor (if any) receives the full amount as rent income; on
/// failure the payer goes bankrupt in the creditor's favor. Returns
/// whether the payment went through.
pub fn charge(
    gs: &mut GameState,
    pid: PlayerId,
    amount: Money,
    creditor: Option<PlayerId>,
) -> bool {
    if gs.players[pid].cash < amount {
        raise_funds(gs, pid, amount);
    }

    if gs.players[pid].cash >= amount {
        gs.players[pid].cash -= amount;
        if let Some(cid) = creditor
            && !gs.players[cid].bankrupt
        {
            gs.tallies[cid].rent_received += amount;
            gs.players[cid].cash += amount;
            if gs.players[cid].cash > gs.tallies[cid].peak_cash {
                gs.tallies[cid].peak_cash = gs.players[cid].cash;
            }
        }
        return true;
    }

    declare_bankruptcy(gs, pid, creditor);
    false
}

/// Liquidate until cash covers `needed` or nothing sellable remains.
/// Two ordered passes over the owned squares in ascending board position:
/// first sell every building on a property at once for half its cumulative
/// house cost, then mortgage the remaining building-free squares.
pub fn raise_funds(gs: &mut GameState, pid: PlayerId, needed: Money) {
    let owned: Vec<u8> = gs.players[pid].owned.to_vec();

    for &pos in &owned {
        if gs.players[pid].cash >= needed {
            break;
        }
        let Some(group) = board::square(pos).group() else {
            continue;
        };
        let Some(lot) = gs.ledger.lot_mut(pos) else {
            continue;
        };
        if lot.buildings > 0 {
            let refund =
                Money::from(lot.buildings) * group.house_cost() / BUILDING_RESALE_DIVISOR;
            lot.buildings = 0;
            gs.players[pid].cash += refund;
        }
    }

    for &pos in &owned {
        if gs.players[pid].cash >= needed {
            break;
        }
        let Some(lot) = gs.ledger.lot_mut(pos) else {
            continue;
        };
        if !lot.mortgaged && lot.buildings == 0 {
            lot.mortgaged = true;
            gs.players[pid].cash += board::square(pos).mortgage_value().unwrap_or(0);
        }
    }
}

/// Terminal state transition. A solvent creditor inherits the remaining
/// cash and every owned square flagged mortgaged (debt-transfer properties
/// arrive encumbered); with no creditor the squares return to the bank
/// wiped clean. Either way the player ends with zero cash and an empty
/// owned set, and is skipped by all further turn processing.
pub fn declare_bankruptcy(gs: &mut GameState, pid: PlayerId, creditor: Option<PlayerId>) {
    gs.players[pid].bankrupt = true;
    gs.bankrupt_order.push(pid);

    let owned = std::mem::take(&mut gs.players[pid].owned);
    let residual_cash = std::mem::replace(&mut gs.players[pid].cash, 0);

    match creditor {
        Some(cid) if !gs.players[cid].bankrupt => {
            gs.players[cid].cash += residual_cash;
            for &pos in &owned {
                if let Some(lot) = gs.ledger.lot_mut(pos) {
                    lot.owner = Some(cid);
                    lot.mortgaged = true;
                }
                gs.players[cid].acquire(pos);
            }
        }
        _ => {
            for &pos in &owned {
                if let Some(lot) = gs.ledger.lot_mut(pos) {
                    lot.owner = None;
                    lot.buildings = 0;
                    lot.mortgaged = false;
                }
            }
        }
    }
}
