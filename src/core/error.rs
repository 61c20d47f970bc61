//! Error types.
//!
//! Every error here is fatal for the operation that raised it: a battle
//! that hits a `BattleError` is abandoned, a catalog that fails to load
//! is never built. Expected-empty situations (nothing playable, nothing
//! left to draw) are not errors and never surface here.

use thiserror::Error;

use super::ids::{CardId, CombatantId, EnemyId};

/// Failures raised while a battle is running.
#[derive(Debug, Error)]
pub enum BattleError {
    #[error("card '{card}' was played with no targets")]
    NoTargets { card: String },

    #[error("unknown target selector '{0}'")]
    UnknownSelector(String),

    #[error("card id '{0}' is not in the catalog")]
    UnknownCard(CardId),

    #[error("enemy id '{0}' is not in the catalog")]
    UnknownEnemy(EnemyId),

    #[error("effect '{effect}' can only be used by the player, not {user}")]
    PlayerOnlyEffect {
        effect: &'static str,
        user: CombatantId,
    },

    #[error("hand index {index} out of range (hand size {len})")]
    HandIndex { index: usize, len: usize },

    #[error("combatant {0} does not exist in this battle")]
    UnknownCombatant(CombatantId),
}

/// Failures raised while loading definitions into a catalog.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed definition file")]
    Json(#[from] serde_json::Error),

    #[error("unknown effect tag '{0}'")]
    UnknownEffect(String),

    #[error("unknown intent tag '{0}'")]
    UnknownIntent(String),

    #[error("unknown status name '{0}'")]
    UnknownStatus(String),

    #[error("invalid card cost '{0}'")]
    InvalidCost(String),

    #[error("{tag} is missing required field '{field}'")]
    MissingField {
        tag: &'static str,
        field: &'static str,
    },

    #[error("card id '{0}' is not in the catalog")]
    UnknownCard(CardId),

    #[error("enemy id '{0}' is not in the catalog")]
    UnknownEnemy(EnemyId),

    #[error("deck '{0}' is not in the catalog")]
    UnknownDeck(String),

    #[error("enemy group '{0}' is not in the catalog")]
    UnknownGroup(String),

    #[error("duplicate {kind} id '{id}'")]
    Duplicate { kind: &'static str, id: String },
}

/// Failures raised by the batch simulation driver.
#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("simulation {index} (seed {seed}) aborted")]
    Battle {
        index: u32,
        seed: u64,
        #[source]
        source: BattleError,
    },
}
