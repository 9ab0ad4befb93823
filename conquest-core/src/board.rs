//! Territory records and the fixed game board

use crate::faction::Faction;
use serde::{Deserialize, Serialize};

/// Number of territories on the standard board
pub const NUM_TERRITORIES: usize = 5;

/// Troops each territory starts with on the standard board
pub const INITIAL_TROOPS: u32 = 3;

/// A single territory: name, owning faction, troop count
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Territory {
    pub name: String,
    pub owner: Faction,
    pub troops: u32,
}

impl Territory {
    pub fn new(name: &str, owner: Faction, troops: u32) -> Self {
        Self {
            name: name.to_string(),
            owner,
            troops,
        }
    }
}

/// Fixed-length ordered collection of territories.
///
/// Created once per session; there is no API to add or remove
/// territories afterwards. Combat is the only mutator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    territories: Vec<Territory>,
}

impl Board {
    /// Build a board from an explicit territory list
    pub fn new(territories: Vec<Territory>) -> Self {
        Self { territories }
    }

    /// The standard five-territory map
    pub fn standard() -> Self {
        Self::new(vec![
            Territory::new("Alfa", Faction::Verde, INITIAL_TROOPS),
            Territory::new("Bravo", Faction::Vermelho, INITIAL_TROOPS),
            Territory::new("Charlie", Faction::Verde, INITIAL_TROOPS),
            Territory::new("Delta", Faction::Amarelo, INITIAL_TROOPS),
            Territory::new("Echo", Faction::Azul, INITIAL_TROOPS),
        ])
    }

    pub fn len(&self) -> usize {
        self.territories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.territories.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Territory> {
        self.territories.get(index)
    }

    /// All territories in board order
    pub fn territories(&self) -> &[Territory] {
        &self.territories
    }

    /// Number of territories owned by a faction
    pub fn count_owned_by(&self, faction: Faction) -> usize {
        self.territories
            .iter()
            .filter(|t| t.owner == faction)
            .count()
    }

    /// Whether the faction still holds any territory with troops on it
    pub fn faction_active(&self, faction: Faction) -> bool {
        self.territories
            .iter()
            .any(|t| t.owner == faction && t.troops > 0)
    }

    /// Total troops across the whole board
    pub fn total_troops(&self) -> u32 {
        self.territories.iter().map(|t| t.troops).sum()
    }

    /// Mutable access to two distinct territories at once.
    /// Caller guarantees `a != b` and both in range.
    pub(crate) fn pair_mut(&mut self, a: usize, b: usize) -> (&mut Territory, &mut Territory) {
        debug_assert!(a != b);
        if a < b {
            let (left, right) = self.territories.split_at_mut(b);
            (&mut left[a], &mut right[0])
        } else {
            let (left, right) = self.territories.split_at_mut(a);
            (&mut right[0], &mut left[b])
        }
    }
}
