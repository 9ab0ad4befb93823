//! Conquest Core - territorial conquest game engine
//!
//! This crate provides the core game logic:
//! - Faction identifiers (army colors)
//! - Board state: a fixed roster of territories with owner and troops
//! - Dice-roll battle resolution with conquest handling
//! - Mission assignment and victory evaluation
//! - Session object owning board, mission and RNG

pub mod board;
pub mod combat;
pub mod faction;
pub mod mission;
pub mod session;

// Re-exports for convenient access
pub use board::{Board, Territory, NUM_TERRITORIES};
pub use combat::{resolve, resolve_with_rolls, roll_die, BattleOutcome, BattleReport};
pub use faction::{faction_from_name, Faction, ALL_FACTIONS};
pub use mission::{assign_mission, check_victory, Mission, CONTROL_THRESHOLD, ELIMINATION_TARGET};
pub use session::{AttackError, Session, MIN_ATTACK_TROOPS};
