//! Identifiers for cards, enemies, spawn groups, and combatants.
//!
//! Card and enemy ids come from definition files and are strings
//! (`"1"`, `"jaw_worm"`). Group ids are assigned by the battle setup.
//! `CombatantId` addresses a live participant inside one battle.

use serde::{Deserialize, Serialize};

/// Identifier of a card definition in the catalog.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub String);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Identifier of an enemy definition in the catalog.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnemyId(pub String);

impl EnemyId {
    /// Create a new enemy ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EnemyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EnemyId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Spawn group an enemy belongs to.
///
/// Enemies loaded from the same enemy group share one id, and enemies
/// spawned mid-battle inherit the spawner's group. Boss-directed intents
/// search the group for a `Boss`-tagged member.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupId(pub u32);

impl GroupId {
    /// Create a new group ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for GroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Group({})", self.0)
    }
}

/// A participant in a battle.
///
/// Enemies are addressed by their index in the battle's enemy list.
/// Spawned enemies are appended, so indices stay valid for the whole
/// encounter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CombatantId {
    Player,
    Enemy(usize),
}

impl CombatantId {
    /// Check if this refers to the player.
    #[must_use]
    pub const fn is_player(self) -> bool {
        matches!(self, CombatantId::Player)
    }

    /// Enemy index, if this refers to an enemy.
    #[must_use]
    pub const fn enemy_index(self) -> Option<usize> {
        match self {
            CombatantId::Enemy(idx) => Some(idx),
            CombatantId::Player => None,
        }
    }
}

impl std::fmt::Display for CombatantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CombatantId::Player => f.write_str("Player"),
            CombatantId::Enemy(idx) => write!(f, "Enemy({idx})"),
        }
    }
}
