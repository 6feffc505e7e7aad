//! Chance and community effect decks.
//!
//! Decks are consumed front-to-back. An exhausted deck is transparently
//! rebuilt from its full card set: every card except "get out of jail" is
//! shuffled, and the jail cards are appended at the bottom. That fixed
//! placement means a jail card only surfaces after the rest of the cycle
//! has been drawn, matching the physical game's replacement rule.

use std::collections::VecDeque;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::board::Money;

/// One drawable card effect with its kind-specific payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardEffect {
    /// Teleport to the target position; GO bonus when it lies behind.
    MoveTo(u8),
    /// Step backward, no GO bonus.
    MoveBack(u8),
    /// Teleport to the nearest forward station; double rent if owned.
    NearestStation,
    GoToJail,
    GetOutOfJail,
    /// Bank pays the player.
    Receive(Money),
    /// Player pays the bank.
    Pay(Money),
    /// Player pays every other active player, capped by available cash.
    PayEach(Money),
    /// Every other active player pays, capped by their own cash.
    ReceiveFromEach(Money),
    /// Per-building levy: `house` per house, `hotel` per hotel.
    Repairs { house: Money, hotel: Money },
}

impl CardEffect {
    #[must_use]
    pub const fn is_jail_release(self) -> bool {
        matches!(self, Self::GetOutOfJail)
    }
}

/// The sixteen chance cards of the published edition.
pub static CHANCE_CARDS: [CardEffect; 16] = [
    CardEffect::MoveTo(0),
    CardEffect::MoveTo(39),
    CardEffect::MoveTo(3),
    CardEffect::MoveTo(35),
    CardEffect::MoveTo(25),
    CardEffect::NearestStation,
    CardEffect::MoveTo(5),
    CardEffect::Receive(2_500),
    CardEffect::GetOutOfJail,
    CardEffect::MoveBack(3),
    CardEffect::GoToJail,
    CardEffect::Repairs {
        house: 1_250,
        hotel: 5_000,
    },
    CardEffect::Pay(750),
    CardEffect::PayEach(2_500),
    CardEffect::Receive(7_500),
    CardEffect::MoveTo(21),
];

/// The sixteen community chest cards of the published edition.
pub static COMMUNITY_CARDS: [CardEffect; 16] = [
    CardEffect::MoveTo(0),
    CardEffect::Receive(10_000),
    CardEffect::Pay(2_500),
    CardEffect::Receive(2_500),
    CardEffect::GetOutOfJail,
    CardEffect::GoToJail,
    CardEffect::ReceiveFromEach(500),
    CardEffect::Receive(1_000),
    CardEffect::Receive(5_000),
    CardEffect::Receive(5_000),
    CardEffect::Pay(7_500),
    CardEffect::Pay(5_000),
    CardEffect::Receive(500),
    CardEffect::Receive(12_500),
    CardEffect::Repairs {
        house: 2_000,
        hotel: 5_750,
    },
    CardEffect::Receive(1_250),
];

/// An ordered draw pile over a fixed card set.
#[derive(Debug, Clone)]
pub struct Deck {
    source: &'static [CardEffect],
    pile: VecDeque<CardEffect>,
}

impl Deck {
    /// Build a freshly shuffled deck over `source`.
    pub fn new<R: Rng>(source: &'static [CardEffect], rng: &mut R) -> Self {
        let mut deck = Self {
            source,
            pile: VecDeque::with_capacity(source.len()),
        };
        deck.rebuild(rng);
        deck
    }

    /// Draw the top card, reshuffling the full set first if the pile is
    /// empty. Never fails; deck exhaustion is not an error.
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> CardEffect {
        if self.pile.is_empty() {
            self.rebuild(rng);
        }
        self.pile
            .pop_front()
            .expect("rebuild refills from a non-empty card set")
    }

    /// Cards left before the next reshuffle.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.pile.len()
    }

    fn rebuild<R: Rng>(&mut self, rng: &mut R) {
        let mut normal: Vec<CardEffect> = self
            .source
            .iter()
            .copied()
            .filter(|c| !c.is_jail_release())
            .collect();
        normal.shuffle(rng);
        self.pile.clear();
        self.pile.extend(normal);
        self.pile
            .extend(self.source.iter().copied().filter(|c| c.is_jail_release()));
    }
}
