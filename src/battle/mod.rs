//! The turn engine and its records.
//!
//! - `engine`: `Battle`, the round loop and every pile operation
//! - `outcome`: End conditions and the result summary
//! - `log`: Event log lines and per-turn action records

pub mod engine;
pub mod outcome;
pub mod log;

pub use engine::Battle;
pub use outcome::{BattleOutcome, BattleSummary, StandardVictory, VictoryCondition};
pub use log::{ActionRecord, BattleEvent, TurnRecord};
