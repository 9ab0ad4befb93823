//! Game session: owns the board, validates attacks, answers victory
//! queries
//!
//! The session is the single writer of the board; everything else
//! reads through `&self`. Randomness is injected: the default
//! constructor seeds one ChaCha8 generator for the whole session,
//! tests pass a seeded one.

use crate::board::Board;
use crate::combat::{resolve, BattleReport};
use crate::faction::Faction;
use crate::mission::{assign_mission, check_victory, Mission};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

/// Minimum troops a territory needs to launch an attack
pub const MIN_ATTACK_TROOPS: u32 = 2;

/// Rejected attack selection
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum AttackError {
    #[error("attacker and defender must be different territories")]
    SameTerritory,
    #[error("territory index {index} out of range (board has {len})")]
    OutOfRange { index: usize, len: usize },
    #[error("attacker needs at least 2 troops to attack, has {troops}")]
    InsufficientTroops { troops: u32 },
}

/// One player's running game
#[derive(Clone, Debug)]
pub struct Session<R: Rng = ChaCha8Rng> {
    board: Board,
    player: Faction,
    mission: Mission,
    rng: R,
}

impl Session<ChaCha8Rng> {
    /// Start a session on the standard board with an entropy-seeded
    /// generator
    pub fn start(player: Faction) -> Self {
        Self::from_rng(player, ChaCha8Rng::from_entropy())
    }

    /// Reproducible session from a fixed seed
    pub fn from_seed(player: Faction, seed: u64) -> Self {
        Self::from_rng(player, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Session<R> {
    /// Standard board, mission drawn from `rng`
    pub fn from_rng(player: Faction, mut rng: R) -> Self {
        let mission = assign_mission(player, &mut rng);
        Self {
            board: Board::standard(),
            player,
            mission,
            rng,
        }
    }

    /// Fully explicit constructor for tests and embedders
    pub fn with_parts(board: Board, player: Faction, mission: Mission, rng: R) -> Self {
        Self {
            board,
            player,
            mission,
            rng,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player(&self) -> Faction {
        self.player
    }

    pub fn mission(&self) -> Mission {
        self.mission
    }

    /// Validate an attacker/defender selection and resolve one battle.
    ///
    /// `Ok(None)` is the degenerate no-op case: the defender territory
    /// has no troops to fight over.
    pub fn attack(
        &mut self,
        attacker_idx: usize,
        defender_idx: usize,
    ) -> Result<Option<BattleReport>, AttackError> {
        let len = self.board.len();
        for index in [attacker_idx, defender_idx] {
            if index >= len {
                return Err(AttackError::OutOfRange { index, len });
            }
        }
        if attacker_idx == defender_idx {
            return Err(AttackError::SameTerritory);
        }
        let troops = self.board.territories()[attacker_idx].troops;
        if troops < MIN_ATTACK_TROOPS {
            return Err(AttackError::InsufficientTroops { troops });
        }
        Ok(resolve(
            &mut self.board,
            attacker_idx,
            defender_idx,
            &mut self.rng,
        ))
    }

    /// Whether the player's mission is complete on the current board
    pub fn mission_complete(&self) -> bool {
        check_victory(&self.board, self.player, self.mission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Territory;
    use crate::combat::BattleOutcome;

    fn seeded_session() -> Session {
        Session::from_seed(Faction::Azul, 11)
    }

    #[test]
    fn test_selection_validation() {
        let mut session = seeded_session();
        assert_eq!(session.attack(2, 2), Err(AttackError::SameTerritory));
        assert_eq!(
            session.attack(5, 0),
            Err(AttackError::OutOfRange { index: 5, len: 5 })
        );
        assert_eq!(
            session.attack(0, 9),
            Err(AttackError::OutOfRange { index: 9, len: 5 })
        );
        // No board change from rejected selections
        assert_eq!(session.board().total_troops(), 15);
    }

    #[test]
    fn test_attack_requires_two_troops() {
        let board = Board::new(vec![
            Territory::new("Alfa", Faction::Azul, 1),
            Territory::new("Bravo", Faction::Verde, 3),
        ]);
        let mut session = Session::with_parts(
            board,
            Faction::Azul,
            Mission::ControlCount(2),
            ChaCha8Rng::seed_from_u64(3),
        );
        assert_eq!(
            session.attack(0, 1),
            Err(AttackError::InsufficientTroops { troops: 1 })
        );
    }

    #[test]
    fn test_valid_attack_resolves() {
        let mut session = seeded_session();
        let report = session
            .attack(4, 0)
            .expect("valid selection")
            .expect("defender has troops");
        assert!((1..=6).contains(&report.attacker_roll));
        assert!((1..=6).contains(&report.defender_roll));
        // Exactly one troop left the board
        assert_eq!(session.board().total_troops(), 14);
        match report.outcome {
            BattleOutcome::DefenderHolds => {
                assert_eq!(session.board().territories()[4].troops, 2);
            }
            BattleOutcome::AttackerHit => {
                assert_eq!(session.board().territories()[0].troops, 2);
            }
            BattleOutcome::Conquest => unreachable!("defender starts with 3 troops"),
        }
    }

    #[test]
    fn test_mission_complete_queries_board() {
        let session = Session::with_parts(
            Board::standard(),
            Faction::Azul,
            Mission::ControlCount(1),
            ChaCha8Rng::seed_from_u64(5),
        );
        assert!(session.mission_complete());

        let session = Session::with_parts(
            Board::standard(),
            Faction::Azul,
            Mission::ControlCount(3),
            ChaCha8Rng::seed_from_u64(5),
        );
        assert!(!session.mission_complete());
    }

    #[test]
    fn test_assigned_mission_is_completable() {
        for seed in 0..50 {
            let session = Session::from_seed(Faction::Verde, seed);
            assert_ne!(
                session.mission(),
                Mission::EliminateFaction(Faction::Verde)
            );
        }
    }
}
