//! Missions and victory evaluation

use crate::board::Board;
use crate::faction::Faction;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Faction targeted by the elimination mission on the standard board
pub const ELIMINATION_TARGET: Faction = Faction::Verde;

/// Territory count required by the control mission
pub const CONTROL_THRESHOLD: usize = 3;

/// The player's secret win condition, fixed for the session
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mission {
    /// Wipe every territory of the target faction off the map
    EliminateFaction(Faction),
    /// Hold at least this many territories
    ControlCount(usize),
}

impl Mission {
    /// Human-readable mission description
    pub fn describe(&self) -> String {
        match self {
            Mission::EliminateFaction(target) => {
                format!("Destroy the {target} army (no {target} territory may survive)")
            }
            Mission::ControlCount(threshold) => {
                format!("Conquer {threshold} territories (hold {threshold} under your color)")
            }
        }
    }
}

/// Draw the player's mission for the session.
///
/// Uniform between the two variants; redraws while the draw is an
/// elimination mission against the player's own faction, so the
/// assigned mission is always completable. Terminates with
/// probability 1 (each redraw escapes with probability 1/2).
pub fn assign_mission(player: Faction, rng: &mut impl Rng) -> Mission {
    loop {
        let mission = if rng.gen_bool(0.5) {
            Mission::EliminateFaction(ELIMINATION_TARGET)
        } else {
            Mission::ControlCount(CONTROL_THRESHOLD)
        };
        if mission != Mission::EliminateFaction(player) {
            return mission;
        }
    }
}

/// Whether the mission is complete on the current board.
///
/// Read-only and idempotent; scans the whole board on every call.
pub fn check_victory(board: &Board, player: Faction, mission: Mission) -> bool {
    match mission {
        Mission::EliminateFaction(target) => !board.faction_active(target),
        Mission::ControlCount(threshold) => board.count_owned_by(player) >= threshold,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Territory;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_eliminate_mission() {
        let mission = Mission::EliminateFaction(Faction::Verde);
        // A zero-troop Verde territory does not keep Verde alive, but
        // the one-troop territory does.
        let board = Board::new(vec![
            Territory::new("Alfa", Faction::Verde, 0),
            Territory::new("Charlie", Faction::Verde, 1),
            Territory::new("Echo", Faction::Azul, 3),
        ]);
        assert!(!check_victory(&board, Faction::Azul, mission));

        let board = Board::new(vec![
            Territory::new("Alfa", Faction::Verde, 0),
            Territory::new("Echo", Faction::Azul, 3),
        ]);
        assert!(check_victory(&board, Faction::Azul, mission));
    }

    #[test]
    fn test_control_mission() {
        let mission = Mission::ControlCount(3);
        let board = Board::new(vec![
            Territory::new("Alfa", Faction::Azul, 1),
            Territory::new("Bravo", Faction::Azul, 1),
            Territory::new("Charlie", Faction::Verde, 2),
        ]);
        assert!(!check_victory(&board, Faction::Azul, mission));

        let board = Board::new(vec![
            Territory::new("Alfa", Faction::Azul, 1),
            Territory::new("Bravo", Faction::Azul, 1),
            Territory::new("Charlie", Faction::Azul, 1),
        ]);
        assert!(check_victory(&board, Faction::Azul, mission));
    }

    #[test]
    fn test_assignment_never_impossible() {
        // A Verde player must never be asked to eliminate Verde.
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..1000 {
            let mission = assign_mission(Faction::Verde, &mut rng);
            assert_eq!(mission, Mission::ControlCount(CONTROL_THRESHOLD));
        }
    }

    #[test]
    fn test_assignment_draws_both_variants() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut saw_eliminate = false;
        let mut saw_control = false;
        for _ in 0..100 {
            match assign_mission(Faction::Azul, &mut rng) {
                Mission::EliminateFaction(target) => {
                    assert_eq!(target, ELIMINATION_TARGET);
                    saw_eliminate = true;
                }
                Mission::ControlCount(_) => saw_control = true,
            }
        }
        assert!(saw_eliminate && saw_control);
    }
}
