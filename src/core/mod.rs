//! Core engine types: identifiers, RNG, configuration, errors.
//!
//! Everything else in the crate builds on these. None of them know about
//! cards or combat rules.

pub mod ids;
pub mod rng;
pub mod config;
pub mod error;

pub use ids::{CardId, CombatantId, EnemyId, GroupId};
pub use rng::GameRng;
pub use config::{BattleConfig, SimConfig};
pub use error::{BattleError, LoadError, SimError};
