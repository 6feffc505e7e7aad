//! Static board catalog for the Babipoly 40-square track.
//!
//! Pure lookup tables; nothing in this module is ever mutated. The square
//! data is the published Ivory Coast edition, reproduced verbatim. Note
//! that Yamoussoukro (position 31) is priced below its group's house cost;
//! that imbalance is part of the source material and is preserved so the
//! simulator measures the game as shipped.

use serde::{Deserialize, Serialize};

use crate::constants::BOARD_SIZE;

/// Currency amount in FCFA. Cash can transiently go negative only inside
/// the liquidation path; everything else stays non-negative.
pub type Money = i64;

/// Color group of same-family properties. Full unmortgaged ownership of a
/// group unlocks building rights and the double-base-rent bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Group {
    Yellow,
    Red,
    Orange,
    Brown,
    Green,
    LightBlue,
    DarkBlue,
    Purple,
}

impl Group {
    pub const ALL: [Self; 8] = [
        Self::Yellow,
        Self::Red,
        Self::Orange,
        Self::Brown,
        Self::Green,
        Self::LightBlue,
        Self::DarkBlue,
        Self::Purple,
    ];

    /// Board positions belonging to this group, ascending.
    #[must_use]
    pub const fn positions(self) -> &'static [u8] {
        match self {
            Self::Yellow => &[1, 3],
            Self::Red => &[6, 8, 9],
            Self::Orange => &[13, 15, 16],
            Self::Brown => &[18, 19],
            Self::Green => &[21, 23, 24],
            Self::LightBlue => &[26, 27, 29],
            Self::DarkBlue => &[31, 33, 34],
            Self::Purple => &[37, 39],
        }
    }

    /// Cost of one house (or the hotel step) anywhere in this group.
    #[must_use]
    pub const fn house_cost(self) -> Money {
        match self {
            Self::Yellow => 1_000,
            Self::Red => 2_000,
            Self::Orange => 3_000,
            Self::Brown => 4_000,
            Self::Green => 5_000,
            Self::LightBlue => 6_000,
            Self::DarkBlue => 7_000,
            Self::Purple => 10_000,
        }
    }
}

/// One board square. Kind-specific payloads live on the variant, so rent
/// schedules and prices only exist where the rules define them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Square {
    Go {
        name: &'static str,
    },
    Property {
        name: &'static str,
        group: Group,
        price: Money,
        mortgage: Money,
        /// Rent tiers indexed by building count: base, 1-4 houses, hotel.
        rent: [Money; 6],
    },
    Station {
        name: &'static str,
        price: Money,
        mortgage: Money,
        /// Rent tiers indexed by (stations owned by the owner - 1).
        rent: [Money; 4],
    },
    Utility {
        name: &'static str,
        price: Money,
        mortgage: Money,
    },
    Chance {
        name: &'static str,
    },
    Community {
        name: &'static str,
    },
    Tax {
        name: &'static str,
        amount: Money,
    },
    Jail {
        name: &'static str,
    },
    GoToJail {
        name: &'static str,
    },
    FreeParking {
        name: &'static str,
    },
}

impl Square {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Go { name }
            | Self::Property { name, .. }
            | Self::Station { name, .. }
            | Self::Utility { name, .. }
            | Self::Chance { name }
            | Self::Community { name }
            | Self::Tax { name, .. }
            | Self::Jail { name }
            | Self::GoToJail { name }
            | Self::FreeParking { name } => name,
        }
    }

    /// Purchase price, for squares that can be bought.
    #[must_use]
    pub const fn price(&self) -> Option<Money> {
        match self {
            Self::Property { price, .. }
            | Self::Station { price, .. }
            | Self::Utility { price, .. } => Some(*price),
            _ => None,
        }
    }

    /// Cash received when the square is mortgaged.
    #[must_use]
    pub const fn mortgage_value(&self) -> Option<Money> {
        match self {
            Self::Property { mortgage, .. }
            | Self::Station { mortgage, .. }
            | Self::Utility { mortgage, .. } => Some(*mortgage),
            _ => None,
        }
    }

    #[must_use]
    pub const fn group(&self) -> Option<Group> {
        match self {
            Self::Property { group, .. } => Some(*group),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_purchasable(&self) -> bool {
        matches!(
            self,
            Self::Property { .. } | Self::Station { .. } | Self::Utility { .. }
        )
    }
}

/// Station squares, evenly spaced; order matters for the nearest-forward
/// query below.
pub const STATION_POSITIONS: [u8; 4] = [5, 14, 25, 35];

/// Utility squares.
pub const UTILITY_POSITIONS: [u8; 4] = [4, 11, 12, 28];

/// The full 40-square track, indexed by board position.
pub static SQUARES: [Square; 40] = [
    Square::Go {
        name: "AKWABA (GO)",
    },
    Square::Property {
        name: "Plateau",
        group: Group::Yellow,
        price: 3_000,
        mortgage: 1_000,
        rent: [1_000, 2_000, 4_000, 6_000, 8_000, 10_000],
    },
    Square::Community {
        name: "Caisse de Communauté",
    },
    Square::Property {
        name: "Cocody",
        group: Group::Yellow,
        price: 3_000,
        mortgage: 1_000,
        rent: [1_000, 2_000, 4_000, 6_000, 8_000, 10_000],
    },
    Square::Utility {
        name: "Petit Café pour Autorité",
        price: 10_000,
        mortgage: 5_000,
    },
    Square::Station {
        name: "Pinasse de Vridi",
        price: 10_000,
        mortgage: 5_000,
        rent: [3_000, 6_000, 12_000, 24_000],
    },
    Square::Property {
        name: "Marcory",
        group: Group::Red,
        price: 5_000,
        mortgage: 2_000,
        rent: [1_000, 3_000, 6_000, 9_000, 12_000, 15_000],
    },
    Square::Chance { name: "Chance" },
    Square::Property {
        name: "Zone 4",
        group: Group::Red,
        price: 6_000,
        mortgage: 3_000,
        rent: [1_000, 3_000, 7_000, 10_000, 14_000, 18_000],
    },
    Square::Property {
        name: "Treichville",
        group: Group::Red,
        price: 5_000,
        mortgage: 2_000,
        rent: [1_000, 3_000, 6_000, 9_000, 12_000, 15_000],
    },
    Square::Jail {
        name: "Passage Libre",
    },
    Square::Utility {
        name: "Threesixty Gym",
        price: 10_000,
        mortgage: 5_000,
    },
    Square::Utility {
        name: "CIE",
        price: 7_500,
        mortgage: 4_000,
    },
    Square::Property {
        name: "Bouaké",
        group: Group::Orange,
        price: 7_000,
        mortgage: 3_000,
        rent: [2_000, 4_000, 8_000, 12_000, 17_000, 23_000],
    },
    Square::Station {
        name: "Gare de Gbôkas de Treichville",
        price: 10_000,
        mortgage: 5_000,
        rent: [3_000, 6_000, 12_000, 24_000],
    },
    Square::Property {
        name: "Korhogo",
        group: Group::Orange,
        price: 8_000,
        mortgage: 4_000,
        rent: [2_000, 5_000, 9_000, 14_000, 19_000, 26_000],
    },
    Square::Property {
        name: "Man",
        group: Group::Orange,
        price: 5_000,
        mortgage: 2_000,
        rent: [1_000, 3_000, 6_000, 10_000, 14_000, 19_000],
    },
    Square::Chance { name: "Chance" },
    Square::Property {
        name: "Daloa",
        group: Group::Brown,
        price: 9_000,
        mortgage: 4_000,
        rent: [2_000, 5_000, 10_000, 15_000, 21_000, 28_000],
    },
    Square::Property {
        name: "Abobo",
        group: Group::Brown,
        price: 10_000,
        mortgage: 5_000,
        rent: [2_000, 6_000, 11_000, 17_000, 23_000, 31_000],
    },
    Square::FreeParking {
        name: "Dans la Forêt du Banco",
    },
    Square::Property {
        name: "Yopougon",
        group: Group::Green,
        price: 11_000,
        mortgage: 5_000,
        rent: [2_000, 6_000, 12_000, 17_000, 24_000, 33_000],
    },
    Square::Community {
        name: "Caisse de Communauté",
    },
    Square::Property {
        name: "Koumassi",
        group: Group::Green,
        price: 11_000,
        mortgage: 5_000,
        rent: [2_000, 6_000, 12_000, 17_000, 24_000, 33_000],
    },
    Square::Property {
        name: "Adjamé",
        group: Group::Green,
        price: 12_000,
        mortgage: 6_000,
        rent: [2_000, 7_000, 13_000, 19_000, 26_000, 36_000],
    },
    Square::Station {
        name: "Gare UTB d'Adjamé",
        price: 10_000,
        mortgage: 5_000,
        rent: [3_000, 6_000, 12_000, 24_000],
    },
    Square::Property {
        name: "Bingerville",
        group: Group::LightBlue,
        price: 13_000,
        mortgage: 6_000,
        rent: [2_000, 7_000, 14_000, 21_000, 28_000, 39_000],
    },
    Square::Property {
        name: "Duékoué",
        group: Group::LightBlue,
        price: 13_000,
        mortgage: 6_000,
        rent: [2_000, 7_000, 14_000, 21_000, 28_000, 39_000],
    },
    Square::Utility {
        name: "SODECI",
        price: 7_500,
        mortgage: 4_000,
    },
    Square::Property {
        name: "Gagnoa",
        group: Group::LightBlue,
        price: 14_000,
        mortgage: 7_000,
        rent: [2_000, 8_000, 15_000, 23_000, 31_000, 43_000],
    },
    Square::GoToJail {
        name: "Allez dans la Forêt",
    },
    // Source-data anomaly: priced below the dark-blue house cost.
    Square::Property {
        name: "Yamoussoukro",
        group: Group::DarkBlue,
        price: 5_000,
        mortgage: 2_000,
        rent: [1_000, 3_000, 6_000, 10_000, 14_000, 19_000],
    },
    Square::Community {
        name: "Caisse de Communauté",
    },
    Square::Property {
        name: "Sassandra",
        group: Group::DarkBlue,
        price: 15_000,
        mortgage: 7_000,
        rent: [2_000, 8_000, 16_000, 23_000, 31_000, 43_000],
    },
    Square::Property {
        name: "San Pedro",
        group: Group::DarkBlue,
        price: 16_000,
        mortgage: 8_000,
        rent: [2_000, 9_000, 17_000, 25_000, 34_000, 46_000],
    },
    Square::Station {
        name: "Aéroport Houphouët-Boigny",
        price: 10_000,
        mortgage: 5_000,
        rent: [3_000, 6_000, 12_000, 24_000],
    },
    Square::Chance { name: "Chance" },
    Square::Property {
        name: "Assinie",
        group: Group::Purple,
        price: 17_500,
        mortgage: 9_000,
        rent: [2_000, 10_000, 18_000, 27_000, 37_000, 50_000],
    },
    Square::Tax {
        name: "Taxe Choco",
        amount: 5_000,
    },
    Square::Property {
        name: "Grand Bassam",
        group: Group::Purple,
        price: 20_000,
        mortgage: 10_000,
        rent: [2_000, 11_000, 21_000, 31_000, 42_000, 58_000],
    },
];

/// Look up the square at a board position.
///
/// # Panics
///
/// Panics if `pos >= 40`; callers hold positions produced by wrapping
/// movement, which never leave the board.
#[must_use]
pub fn square(pos: u8) -> &'static Square {
    &SQUARES[pos as usize]
}

/// Nearest station at or ahead of `pos`, wrapping past GO. Stations are
/// evenly spaced so the forward cyclic distance never ties.
#[must_use]
pub fn nearest_station_forward(pos: u8) -> u8 {
    let mut best = STATION_POSITIONS[0];
    let mut best_dist = forward_distance(pos, best);
    for &station in &STATION_POSITIONS[1..] {
        let dist = forward_distance(pos, station);
        if dist < best_dist {
            best = station;
            best_dist = dist;
        }
    }
    best
}

const fn forward_distance(from: u8, to: u8) -> u8 {
    (to + BOARD_SIZE - from) % BOARD_SIZE
}

/// Highest hotel-tier rent of any color property on the board, the worst
/// single hit a player can take. Used by the balance reports to relate
/// rent pressure to starting money.
#[must_use]
pub fn max_hotel_rent() -> Money {
    SQUARES
        .iter()
        .filter_map(|sq| match sq {
            Square::Property { rent, .. } => rent.last().copied(),
            _ => None,
        })
        .max()
        .unwrap_or(0)
}
