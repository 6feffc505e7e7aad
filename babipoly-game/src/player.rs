//! Per-seat player state.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{self, Money};
use crate::constants::BUILDING_RESALE_DIVISOR;
use crate::ledger::Ledger;

/// Seat index into the game's player table.
pub type PlayerId = usize;

/// Mutable record for one seat. Lives for exactly one game.
///
/// `owned` is a derived index over the ownership ledger and is kept sorted
/// ascending; every mutation happens in lock-step with the ledger inside
/// the engine's transactional operations (purchase, transfer, bankruptcy).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub cash: Money,
    pub position: u8,
    pub in_jail: bool,
    pub jail_turns: u8,
    pub jail_cards: u8,
    pub bankrupt: bool,
    pub owned: SmallVec<[u8; 28]>,
    pub doubles_streak: u8,
}

impl Player {
    #[must_use]
    pub fn new(id: PlayerId, starting_money: Money) -> Self {
        Self {
            id,
            cash: starting_money,
            position: 0,
            in_jail: false,
            jail_turns: 0,
            jail_cards: 0,
            bankrupt: false,
            owned: SmallVec::new(),
            doubles_streak: 0,
        }
    }

    /// Record a newly held position, keeping the index sorted so that
    /// liquidation always walks the board in ascending order.
    pub fn acquire(&mut self, pos: u8) {
        if let Err(at) = self.owned.binary_search(&pos) {
            self.owned.insert(at, pos);
        }
    }

    /// Cash plus the liquidation value of all held assets: mortgage value
    /// for mortgaged squares, otherwise purchase price plus the 50%
    /// building resale value.
    #[must_use]
    pub fn net_worth(&self, ledger: &Ledger) -> Money {
        let mut worth = self.cash;
        for &pos in &self.owned {
            let Some(lot) = ledger.lot(pos) else { continue };
            let sq = board::square(pos);
            if lot.mortgaged {
                worth += sq.mortgage_value().unwrap_or(0);
            } else {
                worth += sq.price().unwrap_or(0);
                if lot.buildings > 0
                    && let Some(group) = sq.group()
                {
                    worth += Money::from(lot.buildings) * group.house_cost()
                        / BUILDING_RESALE_DIVISOR;
                }
            }
        }
        worth
    }
}
