//! Mutable state for one game in flight.

use crate::board::Money;
use crate::cards::{CHANCE_CARDS, COMMUNITY_CARDS, Deck};
use crate::ledger::Ledger;
use crate::player::{Player, PlayerId};
use crate::result::PlayerTally;
use crate::rng::RngBundle;

/// Everything a single game owns: players, ledger, decks, RNG streams,
/// and the running tallies that become the `GameResult` snapshot. Nothing
/// here is shared across games, so instances can run on worker threads
/// without synchronization.
#[derive(Debug, Clone)]
pub struct GameState {
    pub starting_money: Money,
    pub players: Vec<Player>,
    pub ledger: Ledger,
    pub chance: Deck,
    pub community: Deck,
    pub rng: RngBundle,
    pub round: u32,
    pub turns: u32,
    pub tallies: Vec<PlayerTally>,
    pub bankrupt_order: Vec<PlayerId>,
}

impl GameState {
    /// Fresh state with every player on GO holding the starting money and
    /// both decks shuffled on their own RNG streams.
    #[must_use]
    pub fn new(num_players: usize, starting_money: Money, seed: u64) -> Self {
        let mut rng = RngBundle::from_user_seed(seed);
        let chance = Deck::new(&CHANCE_CARDS, &mut rng.chance);
        let community = Deck::new(&COMMUNITY_CARDS, &mut rng.community);
        Self {
            starting_money,
            players: (0..num_players)
                .map(|id| Player::new(id, starting_money))
                .collect(),
            ledger: Ledger::new(),
            chance,
            community,
            rng,
            round: 0,
            turns: 0,
            tallies: vec![PlayerTally::default(); num_players],
            bankrupt_order: Vec::new(),
        }
    }

    /// Seat ids of players still in the game, in seat order.
    #[must_use]
    pub fn solvent_ids(&self) -> Vec<PlayerId> {
        self.players
            .iter()
            .filter(|p| !p.bankrupt)
            .map(|p| p.id)
            .collect()
    }

    /// Seat ids of every non-bankrupt player except `pid`, in seat order.
    /// This is the recipient/payer list for peer-transfer cards.
    #[must_use]
    pub fn active_others(&self, pid: PlayerId) -> Vec<PlayerId> {
        self.players
            .iter()
            .filter(|p| !p.bankrupt && p.id != pid)
            .map(|p| p.id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_places_everyone_on_go() {
        let state = GameState::new(4, 250_000, 1);
        assert_eq!(state.players.len(), 4);
        assert!(state.players.iter().all(|p| p.position == 0));
        assert!(state.players.iter().all(|p| p.cash == 250_000));
        assert_eq!(state.solvent_ids(), vec![0, 1, 2, 3]);
        assert_eq!(state.active_others(1), vec![0, 2, 3]);
    }

    #[test]
    fn bankrupt_players_drop_out_of_rosters() {
        let mut state = GameState::new(3, 250_000, 2);
        state.players[1].bankrupt = true;
        assert_eq!(state.solvent_ids(), vec![0, 2]);
        assert_eq!(state.active_others(0), vec![2]);
    }
}
