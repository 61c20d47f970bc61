//! Battle participants.
//!
//! - `Combatant`: Hp, block, and status ledgers shared by everyone
//! - `Player`: Energy, powers, and status flags on top of that
//! - `Enemy`: Scripted turn plans, tags, spawn group

pub mod stats;
pub mod player;
pub mod enemy;

pub use stats::{Combatant, DebuffOutcome, TurnUpkeep};
pub use player::{FlagLifetime, Player, NO_DRAW_FLAG};
pub use enemy::{Enemy, BOSS_TAG};
