//! Faction identifiers (army colors)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Army color owning territories; also the player's identity
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    Azul,
    Verde,
    Vermelho,
    Amarelo,
}

/// All factions present on the standard board
pub const ALL_FACTIONS: [Faction; 4] = [
    Faction::Azul,
    Faction::Verde,
    Faction::Vermelho,
    Faction::Amarelo,
];

impl Faction {
    /// Display name as shown on the map table
    pub fn name(self) -> &'static str {
        match self {
            Faction::Azul => "Azul",
            Faction::Verde => "Verde",
            Faction::Vermelho => "Vermelho",
            Faction::Amarelo => "Amarelo",
        }
    }
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Look up a faction from its name (case-insensitive)
pub fn faction_from_name(name: &str) -> Option<Faction> {
    ALL_FACTIONS
        .iter()
        .copied()
        .find(|f| f.name().eq_ignore_ascii_case(name))
}
