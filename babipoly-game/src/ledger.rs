//! Ownership ledger: the single source of truth for who owns what.
//!
//! One slot per board position; purchasable squares carry a `Lot`, the
//! rest stay `None` for the whole game. Player-side `owned` indexes are
//! derived caches maintained by the same operations that mutate this
//! table.

use serde::{Deserialize, Serialize};

use crate::board::{Group, STATION_POSITIONS, SQUARES, UTILITY_POSITIONS};
use crate::player::PlayerId;

/// Mutable ownership record for one purchasable square.
///
/// Invariants: `buildings > 0` implies `!mortgaged`; `mortgaged` implies
/// `owner.is_some()`; buildings only ever appear on color properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Lot {
    pub owner: Option<PlayerId>,
    pub buildings: u8,
    pub mortgaged: bool,
}

/// Per-square ownership state for one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(with = "lots_serde")]
    lots: [Option<Lot>; 40],
}

/// Serde impls for `[Option<Lot>; 40]`; serde's built-in array support
/// stops at length 32. Keeps the same wire format (a sequence of 40).
mod lots_serde {
    use super::Lot;
    use serde::de::{Error, SeqAccess, Visitor};
    use serde::ser::SerializeTuple;
    use serde::{Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        lots: &[Option<Lot>; 40],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(40)?;
        for lot in lots {
            tuple.serialize_element(lot)?;
        }
        tuple.end()
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<[Option<Lot>; 40], D::Error> {
        struct LotsVisitor;

        impl<'de> Visitor<'de> for LotsVisitor {
            type Value = [Option<Lot>; 40];

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("an array of 40 optional lots")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut lots = [None; 40];
                for (i, slot) in lots.iter_mut().enumerate() {
                    *slot = seq
                        .next_element()?
                        .ok_or_else(|| A::Error::invalid_length(i, &self))?;
                }
                Ok(lots)
            }
        }

        deserializer.deserialize_tuple(40, LotsVisitor)
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    /// Fresh ledger: every purchasable square unowned, nothing mortgaged.
    #[must_use]
    pub fn new() -> Self {
        let mut lots = [None; 40];
        for (pos, sq) in SQUARES.iter().enumerate() {
            if sq.is_purchasable() {
                lots[pos] = Some(Lot::default());
            }
        }
        Self { lots }
    }

    #[must_use]
    pub fn lot(&self, pos: u8) -> Option<&Lot> {
        self.lots.get(pos as usize)?.as_ref()
    }

    pub fn lot_mut(&mut self, pos: u8) -> Option<&mut Lot> {
        self.lots.get_mut(pos as usize)?.as_mut()
    }

    #[must_use]
    pub fn owner(&self, pos: u8) -> Option<PlayerId> {
        self.lot(pos).and_then(|lot| lot.owner)
    }

    /// True when `player` holds every square of `group` unmortgaged.
    #[must_use]
    pub fn owns_group(&self, player: PlayerId, group: Group) -> bool {
        group.positions().iter().all(|&pos| {
            self.lot(pos)
                .is_some_and(|lot| lot.owner == Some(player) && !lot.mortgaged)
        })
    }

    /// Stations held unmortgaged by `player`; drives the station rent tier.
    #[must_use]
    pub fn stations_owned(&self, player: PlayerId) -> usize {
        self.count_unmortgaged(&STATION_POSITIONS, player)
    }

    /// Utilities held unmortgaged by `player`; drives the dice multiplier.
    #[must_use]
    pub fn utilities_owned(&self, player: PlayerId) -> usize {
        self.count_unmortgaged(&UTILITY_POSITIONS, player)
    }

    fn count_unmortgaged(&self, positions: &[u8], player: PlayerId) -> usize {
        positions
            .iter()
            .filter(|&&pos| {
                self.lot(pos)
                    .is_some_and(|lot| lot.owner == Some(player) && !lot.mortgaged)
            })
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_purchasable_squares_have_lots() {
        let ledger = Ledger::new();
        for (pos, sq) in SQUARES.iter().enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            let lot = ledger.lot(pos as u8);
            assert_eq!(lot.is_some(), sq.is_purchasable(), "position {pos}");
        }
    }

    #[test]
    fn group_ownership_requires_every_square_unmortgaged() {
        let mut ledger = Ledger::new();
        ledger.lot_mut(1).unwrap().owner = Some(2);
        assert!(!ledger.owns_group(2, Group::Yellow));

        ledger.lot_mut(3).unwrap().owner = Some(2);
        assert!(ledger.owns_group(2, Group::Yellow));

        ledger.lot_mut(3).unwrap().mortgaged = true;
        assert!(!ledger.owns_group(2, Group::Yellow));
    }

    #[test]
    fn mortgaged_stations_do_not_raise_the_tier() {
        let mut ledger = Ledger::new();
        ledger.lot_mut(5).unwrap().owner = Some(0);
        ledger.lot_mut(14).unwrap().owner = Some(0);
        assert_eq!(ledger.stations_owned(0), 2);

        ledger.lot_mut(14).unwrap().mortgaged = true;
        assert_eq!(ledger.stations_owned(0), 1);
    }
}
