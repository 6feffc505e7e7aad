//! One player's turn: dice, movement, square and card resolution, jail.
//!
//! The doubles chain, speeding rule, and jail-escape ordering follow the
//! published rule sheet exactly; see the individual functions for the
//! subtleties (single GO credit per wrap, the teleport wrap rule, and the
//! escape roll doubling as a movement roll).

use crate::board::{self, Money, Square};
use crate::cards::CardEffect;
use crate::constants::{
    BOARD_SIZE, GO_REWARD, JAIL_BAIL, JAIL_FORCED_EXIT_TURNS, JAIL_POS, MAX_BUILDINGS,
    MAX_DOUBLES_STREAK,
};
use crate::economy::{self, CashSource};
use crate::player::PlayerId;
use crate::policy::{self, PolicyConfig};
use crate::rent::rent_due;
use crate::state::GameState;

/// Play one full turn for `pid`, including doubles re-rolls. Bankrupt
/// players are skipped by the caller but guarded here as well.
pub fn play_turn(gs: &mut GameState, pid: PlayerId, cfg: &PolicyConfig) {
    if gs.players[pid].bankrupt {
        return;
    }

    gs.players[pid].doubles_streak = 0;

    loop {
        let (d1, d2) = if gs.players[pid].in_jail {
            match jail_turn(gs, pid, cfg) {
                Some(roll) => roll,
                None => break, // stays jailed, no movement this turn
            }
        } else {
            gs.rng.roll_dice()
        };

        let dice_sum = d1 + d2;
        let is_double = d1 == d2;

        if is_double && !gs.players[pid].in_jail {
            gs.players[pid].doubles_streak += 1;
            if gs.players[pid].doubles_streak == MAX_DOUBLES_STREAK {
                // Speeding: the third double cancels its own movement.
                send_to_jail(gs, pid);
                break;
            }
        }

        if !gs.players[pid].in_jail {
            move_steps(gs, pid, dice_sum);
        }

        resolve_square(gs, pid, dice_sum, cfg);

        if gs.players[pid].bankrupt {
            break;
        }

        policy::run_build_pass(gs, pid, cfg);

        // A double earns another roll unless it landed the player in jail.
        if !is_double || gs.players[pid].in_jail {
            break;
        }
    }

    gs.turns += 1;
}

/// Attempt to leave jail. Returns the movement roll when the player gets
/// out, `None` when they stay put for this turn.
///
/// Order matters: a held release card is spent first; then bail is paid
/// when forced out after three turns or when rich enough to not bother
/// waiting; otherwise the player needs a double.
fn jail_turn(gs: &mut GameState, pid: PlayerId, cfg: &PolicyConfig) -> Option<(u8, u8)> {
    gs.players[pid].jail_turns += 1;

    if gs.players[pid].jail_cards > 0 {
        gs.players[pid].jail_cards -= 1;
        release_from_jail(gs, pid);
        return Some(gs.rng.roll_dice());
    }

    let rich_threshold = PolicyConfig::reserve(cfg.bail_rich_ratio, gs.starting_money);
    if (gs.players[pid].jail_turns >= JAIL_FORCED_EXIT_TURNS
        || gs.players[pid].cash > rich_threshold)
        && gs.players[pid].cash >= JAIL_BAIL
    {
        gs.players[pid].cash -= JAIL_BAIL;
        release_from_jail(gs, pid);
        return Some(gs.rng.roll_dice());
    }

    let (d1, d2) = gs.rng.roll_dice();
    if d1 == d2 {
        release_from_jail(gs, pid);
        return Some((d1, d2));
    }
    None
}

fn release_from_jail(gs: &mut GameState, pid: PlayerId) {
    gs.players[pid].in_jail = false;
    gs.players[pid].jail_turns = 0;
}

pub(crate) fn send_to_jail(gs: &mut GameState, pid: PlayerId) {
    let player = &mut gs.players[pid];
    player.position = JAIL_POS;
    player.in_jail = true;
    player.jail_turns = 0;
    player.doubles_streak = 0;
}

/// Move forward by `steps`, crediting the GO bonus once per wrap. Landing
/// exactly on GO is left to the square resolver's GO branch so the bonus
/// is never paid twice for one move.
fn move_steps(gs: &mut GameState, pid: PlayerId, steps: u8) {
    let old = gs.players[pid].position;
    let new = (old + steps) % BOARD_SIZE;
    if new < old && new != 0 {
        economy::credit(gs, pid, GO_REWARD, CashSource::GoBonus);
    }
    gs.players[pid].position = new;
}

/// Teleport for card effects: the bonus is credited when the target lies
/// strictly behind the current position. A card targeting GO therefore
/// pays for the wrap here and again for the landing in the GO branch,
/// matching the source rules.
fn teleport(gs: &mut GameState, pid: PlayerId, target: u8) {
    if target < gs.players[pid].position {
        economy::credit(gs, pid, GO_REWARD, CashSource::GoBonus);
    }
    gs.players[pid].position = target;
}

/// Resolve the square under `pid` after movement or teleport.
fn resolve_square(gs: &mut GameState, pid: PlayerId, dice_sum: u8, cfg: &PolicyConfig) {
    if gs.players[pid].bankrupt {
        return;
    }
    let pos = gs.players[pid].position;

    match board::square(pos) {
        Square::Go { .. } => {
            economy::credit(gs, pid, GO_REWARD, CashSource::GoBonus);
        }
        Square::GoToJail { .. } => send_to_jail(gs, pid),
        Square::Tax { amount, .. } => {
            gs.tallies[pid].tax_paid += amount;
            economy::charge(gs, pid, *amount, None);
        }
        Square::Chance { .. } => {
            let card = gs.chance.draw(&mut gs.rng.chance);
            apply_card(gs, pid, card, dice_sum, cfg);
        }
        Square::Community { .. } => {
            let card = gs.community.draw(&mut gs.rng.community);
            apply_card(gs, pid, card, dice_sum, cfg);
        }
        Square::Property { price, .. }
        | Square::Station { price, .. }
        | Square::Utility { price, .. } => {
            resolve_purchasable(gs, pid, pos, *price, dice_sum, cfg);
        }
        Square::Jail { .. } | Square::FreeParking { .. } => {}
    }
}

fn resolve_purchasable(
    gs: &mut GameState,
    pid: PlayerId,
    pos: u8,
    price: Money,
    dice_sum: u8,
    cfg: &PolicyConfig,
) {
    let Some(lot) = gs.ledger.lot(pos) else { return };

    match lot.owner {
        None => {
            if policy::should_buy(gs, pid, price, cfg) {
                gs.players[pid].cash -= price;
                if let Some(lot) = gs.ledger.lot_mut(pos) {
                    lot.owner = Some(pid);
                }
                gs.players[pid].acquire(pos);
                gs.tallies[pid].properties_bought += 1;
            }
        }
        Some(owner) if owner != pid && !lot.mortgaged => {
            if gs.players[owner].bankrupt {
                return;
            }
            let rent = rent_due(gs, pos, dice_sum, false);
            if rent > 0 {
                gs.tallies[pid].rent_paid += rent;
                economy::charge(gs, pid, rent, Some(owner));
            }
        }
        Some(_) => {}
    }
}

/// Apply one drawn card. Effects that relocate the player fall through to
/// the normal square resolver, so a "move to" card onto a property still
/// triggers the purchase/rent decision.
fn apply_card(gs: &mut GameState, pid: PlayerId, card: CardEffect, dice_sum: u8, cfg: &PolicyConfig) {
    match card {
        CardEffect::MoveTo(target) => {
            teleport(gs, pid, target);
            resolve_square(gs, pid, dice_sum, cfg);
        }
        CardEffect::MoveBack(steps) => {
            let pos = gs.players[pid].position;
            gs.players[pid].position = (pos + BOARD_SIZE - steps % BOARD_SIZE) % BOARD_SIZE;
            resolve_square(gs, pid, dice_sum, cfg);
        }
        CardEffect::NearestStation => {
            let station = board::nearest_station_forward(gs.players[pid].position);
            teleport(gs, pid, station);
            // Inline charge at the doubled station rate; a normal landing
            // would bill the single rate, so this cannot reuse the square
            // resolver.
            if let Some(lot) = gs.ledger.lot(station)
                && let Some(owner) = lot.owner
                && owner != pid
                && !lot.mortgaged
                && !gs.players[owner].bankrupt
            {
                let rent = rent_due(gs, station, dice_sum, true);
                if rent > 0 {
                    gs.tallies[pid].rent_paid += rent;
                    economy::charge(gs, pid, rent, Some(owner));
                }
            }
        }
        CardEffect::GoToJail => send_to_jail(gs, pid),
        CardEffect::GetOutOfJail => gs.players[pid].jail_cards += 1,
        CardEffect::Receive(amount) => economy::credit(gs, pid, amount, CashSource::Bank),
        CardEffect::Pay(amount) => {
            gs.tallies[pid].tax_paid += amount;
            economy::charge(gs, pid, amount, None);
        }
        CardEffect::PayEach(amount) => {
            // Direct peer transfer capped by remaining cash; later seats
            // simply receive the truncated remainder. Never bankrupts.
            for other in gs.active_others(pid) {
                let paid = amount.min(gs.players[pid].cash);
                gs.players[pid].cash -= paid;
                gs.players[other].cash += paid;
            }
        }
        CardEffect::ReceiveFromEach(amount) => {
            for other in gs.active_others(pid) {
                let paid = amount.min(gs.players[other].cash);
                gs.players[other].cash -= paid;
                gs.players[pid].cash += paid;
            }
        }
        CardEffect::Repairs { house, hotel } => {
            let mut total = 0;
            for &pos in gs.players[pid].owned.iter() {
                if board::square(pos).group().is_none() {
                    continue;
                }
                if let Some(lot) = gs.ledger.lot(pos) {
                    total += if lot.buildings == MAX_BUILDINGS {
                        hotel
                    } else {
                        i64::from(lot.buildings) * house
                    };
                }
            }
            if total > 0 {
                gs.tallies[pid].tax_paid += total;
                economy::charge(gs, pid, total, None);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(players: usize) -> GameState {
        GameState::new(players, 250_000, 7)
    }

    #[test]
    fn wrapping_movement_credits_go_once() {
        let mut gs = state(2);
        gs.players[0].position = 38;
        move_steps(&mut gs, 0, 6);
        assert_eq!(gs.players[0].position, 4);
        assert_eq!(gs.tallies[0].go_bonuses, GO_REWARD);
    }

    #[test]
    fn landing_exactly_on_go_defers_to_the_square() {
        let mut gs = state(2);
        gs.players[0].position = 35;
        move_steps(&mut gs, 0, 5);
        assert_eq!(gs.players[0].position, 0);
        // move itself pays nothing; the GO square branch pays on resolve
        assert_eq!(gs.tallies[0].go_bonuses, 0);
        resolve_square(&mut gs, 0, 5, &PolicyConfig::default());
        assert_eq!(gs.tallies[0].go_bonuses, GO_REWARD);
    }

    #[test]
    fn teleport_to_go_from_ahead_pays_wrap_and_landing() {
        let mut gs = state(2);
        gs.players[0].position = 22;
        apply_card(&mut gs, 0, CardEffect::MoveTo(0), 7, &PolicyConfig::default());
        assert_eq!(gs.players[0].position, 0);
        assert_eq!(gs.tallies[0].go_bonuses, 2 * GO_REWARD);
    }

    #[test]
    fn move_back_never_pays_the_bonus() {
        let mut gs = state(2);
        gs.players[0].position = 2;
        apply_card(&mut gs, 0, CardEffect::MoveBack(3), 7, &PolicyConfig::default());
        assert_eq!(gs.players[0].position, 39);
        assert_eq!(gs.tallies[0].go_bonuses, 0);
    }

    #[test]
    fn go_to_jail_resets_counters() {
        let mut gs = state(2);
        gs.players[0].doubles_streak = 2;
        gs.players[0].position = 30;
        resolve_square(&mut gs, 0, 9, &PolicyConfig::default());
        let p = &gs.players[0];
        assert!(p.in_jail);
        assert_eq!(p.position, JAIL_POS);
        assert_eq!(p.doubles_streak, 0);
        assert_eq!(p.jail_turns, 0);
    }

    #[test]
    fn release_card_is_spent_before_bail() {
        let mut gs = state(2);
        send_to_jail(&mut gs, 0);
        gs.players[0].jail_cards = 1;
        let cash_before = gs.players[0].cash;

        let roll = jail_turn(&mut gs, 0, &PolicyConfig::default());
        assert!(roll.is_some());
        assert!(!gs.players[0].in_jail);
        assert_eq!(gs.players[0].jail_cards, 0);
        assert_eq!(gs.players[0].cash, cash_before); // no bail paid
    }

    #[test]
    fn rich_player_pays_bail_immediately() {
        let mut gs = state(2);
        send_to_jail(&mut gs, 0);
        // 250,000 > 40% threshold, so bail on the first jailed turn.
        let roll = jail_turn(&mut gs, 0, &PolicyConfig::default());
        assert!(roll.is_some());
        assert_eq!(gs.players[0].cash, 250_000 - JAIL_BAIL);
    }

    #[test]
    fn poor_player_without_double_stays_jailed() {
        let mut gs = state(2);
        send_to_jail(&mut gs, 0);
        gs.players[0].cash = 1_000; // below rich threshold and bail

        let mut stayed = 0;
        for _ in 0..3 {
            if jail_turn(&mut gs, 0, &PolicyConfig::default()).is_none() {
                stayed += 1;
                assert!(gs.players[0].in_jail);
            } else {
                assert!(!gs.players[0].in_jail);
                break;
            }
        }
        // Either escaped on a double or sat out all three attempts.
        assert!(stayed <= 3);
    }

    #[test]
    fn pay_each_truncates_when_cash_runs_out() {
        let mut gs = state(4);
        gs.players[0].cash = 4_000;
        apply_card(
            &mut gs,
            0,
            CardEffect::PayEach(2_500),
            7,
            &PolicyConfig::default(),
        );
        assert_eq!(gs.players[0].cash, 0);
        assert_eq!(gs.players[1].cash, 252_500);
        assert_eq!(gs.players[2].cash, 251_500); // shortfall truncated
        assert_eq!(gs.players[3].cash, 250_000);
        assert!(!gs.players[0].bankrupt);
    }

    #[test]
    fn receive_from_each_caps_at_payer_cash() {
        let mut gs = state(3);
        gs.players[1].cash = 300;
        apply_card(
            &mut gs,
            0,
            CardEffect::ReceiveFromEach(500),
            7,
            &PolicyConfig::default(),
        );
        assert_eq!(gs.players[0].cash, 250_800);
        assert_eq!(gs.players[1].cash, 0);
        assert_eq!(gs.players[2].cash, 249_500);
    }

    #[test]
    fn repairs_bill_houses_and_hotels() {
        let mut gs = state(2);
        for &pos in &[1u8, 3] {
            gs.ledger.lot_mut(pos).unwrap().owner = Some(0);
            gs.players[0].acquire(pos);
        }
        gs.ledger.lot_mut(1).unwrap().buildings = 5;
        gs.ledger.lot_mut(3).unwrap().buildings = 2;

        let before = gs.players[0].cash;
        apply_card(
            &mut gs,
            0,
            CardEffect::Repairs {
                house: 1_250,
                hotel: 5_000,
            },
            7,
            &PolicyConfig::default(),
        );
        let expected: Money = 5_000 + 2 * 1_250;
        assert_eq!(gs.players[0].cash, before - expected);
        assert_eq!(gs.tallies[0].tax_paid, expected);
    }

    #[test]
    fn unowned_landing_buys_when_reserve_allows() {
        let mut gs = state(2);
        gs.players[0].position = 1;
        resolve_square(&mut gs, 0, 1, &PolicyConfig::default());
        assert_eq!(gs.ledger.owner(1), Some(0));
        assert_eq!(gs.players[0].cash, 250_000 - 3_000);
        assert_eq!(gs.tallies[0].properties_bought, 1);
    }

    #[test]
    fn landing_on_owned_square_pays_rent_through_the_engine() {
        let mut gs = state(2);
        gs.ledger.lot_mut(1).unwrap().owner = Some(1);
        gs.players[1].acquire(1);
        gs.players[0].position = 1;

        resolve_square(&mut gs, 0, 1, &PolicyConfig::default());
        assert_eq!(gs.players[0].cash, 249_000);
        assert_eq!(gs.players[1].cash, 251_000);
        assert_eq!(gs.tallies[0].rent_paid, 1_000);
        assert_eq!(gs.tallies[1].rent_received, 1_000);
    }

    #[test]
    fn nearest_station_card_charges_double_rent() {
        let mut gs = state(2);
        gs.ledger.lot_mut(14).unwrap().owner = Some(1);
        gs.players[1].acquire(14);
        gs.players[0].position = 7;

        apply_card(&mut gs, 0, CardEffect::NearestStation, 9, &PolicyConfig::default());
        assert_eq!(gs.players[0].position, 14);
        assert_eq!(gs.tallies[0].rent_paid, 6_000); // 3,000 tier doubled
        assert_eq!(gs.players[1].cash, 256_000);
    }

    #[test]
    fn full_turn_advances_the_turn_counter() {
        let mut gs = state(2);
        play_turn(&mut gs, 0, &PolicyConfig::default());
        assert_eq!(gs.turns, 1);
        assert!(gs.players[0].position < BOARD_SIZE || gs.players[0].in_jail);
    }
}
