//! Battle resolution
//!
//! One battle = one die per side, higher roll wins, attacker wins
//! ties. The loser's territory drops one troop; a defender reduced to
//! zero is conquered: it flips to the attacker's faction with exactly
//! one troop, moved over from the attacker.

use crate::board::Board;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// How a battle ended
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleOutcome {
    /// Attacker won the roll; defender lost a troop but holds
    AttackerHit,
    /// Attacker won the roll and the defender ran out of troops:
    /// the territory changed hands
    Conquest,
    /// Defender won the roll; attacker lost a troop
    DefenderHolds,
}

/// Everything a caller needs to report one resolved battle.
/// The board mutation is the authoritative side effect; this is
/// a description of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleReport {
    pub attacker_roll: u8,
    pub defender_roll: u8,
    /// Troops removed from the attacker's territory (combat loss, or
    /// the one troop moved into a conquered territory)
    pub attacker_losses: u32,
    /// Troops removed from the defender's territory by combat
    pub defender_losses: u32,
    pub outcome: BattleOutcome,
}

/// Roll one six-sided die
pub fn roll_die(rng: &mut impl Rng) -> u8 {
    rng.gen_range(1..=6)
}

/// Resolve one battle between two territories, drawing both dice from
/// `rng`.
///
/// Preconditions (enforced by the caller, see `Session::attack`):
/// `attacker_idx != defender_idx`, both in range, attacker has at
/// least 2 troops.
///
/// Returns `None` when the defender territory has no troops left —
/// nothing to resolve. Under normal flow a territory never persists
/// at zero, so this guard is degenerate.
pub fn resolve(
    board: &mut Board,
    attacker_idx: usize,
    defender_idx: usize,
    rng: &mut impl Rng,
) -> Option<BattleReport> {
    if board.territories()[defender_idx].troops == 0 {
        return None;
    }
    let attacker_roll = roll_die(rng);
    let defender_roll = roll_die(rng);
    Some(resolve_with_rolls(
        board,
        attacker_idx,
        defender_idx,
        attacker_roll,
        defender_roll,
    ))
}

/// Deterministic battle kernel: resolve with the dice already drawn.
///
/// Public so that replays and tests can force specific rolls; `resolve`
/// is the same thing with dice from an RNG. Same preconditions as
/// `resolve`, plus defender troops > 0.
pub fn resolve_with_rolls(
    board: &mut Board,
    attacker_idx: usize,
    defender_idx: usize,
    attacker_roll: u8,
    defender_roll: u8,
) -> BattleReport {
    let (attacker, defender) = board.pair_mut(attacker_idx, defender_idx);
    debug_assert!(attacker.troops >= 2);
    debug_assert!(defender.troops > 0);

    if attacker_roll >= defender_roll {
        // Attacker wins ties
        defender.troops -= 1;
        if defender.troops == 0 {
            // Conquest: flip ownership, move one troop across.
            // With the >= 2 precondition the attacker cannot go
            // negative here.
            defender.owner = attacker.owner;
            defender.troops = 1;
            attacker.troops -= 1;
            BattleReport {
                attacker_roll,
                defender_roll,
                attacker_losses: 1,
                defender_losses: 1,
                outcome: BattleOutcome::Conquest,
            }
        } else {
            BattleReport {
                attacker_roll,
                defender_roll,
                attacker_losses: 0,
                defender_losses: 1,
                outcome: BattleOutcome::AttackerHit,
            }
        }
    } else {
        attacker.troops -= 1;
        BattleReport {
            attacker_roll,
            defender_roll,
            attacker_losses: 1,
            defender_losses: 0,
            outcome: BattleOutcome::DefenderHolds,
        }
    }
}
