//! Buffs, debuffs, and powers.
//!
//! - `kinds`: The enumerated status names
//! - `ledger`: Value/duration storage and start-of-turn ticking
//!
//! Powers are plain counters stored on the player and never tick, so they
//! have a kind here but no ledger.

pub mod kinds;
pub mod ledger;

pub use kinds::{BuffKind, DebuffKind, PowerKind};
pub use ledger::{BuffTick, DebuffTick, StatusEntry, StatusLedger};
