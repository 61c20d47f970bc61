//! Batch simulation and action statistics.
//!
//! - `runner`: `Simulator` and the JSON simulation report
//! - `stats`: Play counts per situation and hand ranking

pub mod runner;
pub mod stats;

pub use runner::{SimulationRecord, SimulationReport, Simulator, PLAYER_NAME};
pub use stats::{ActionKey, ActionStats, Recommendation};
