//! # deck-battle
//!
//! A turn-based deck battle simulator: one player with a deck of cards
//! against a group of scripted enemies.
//!
//! ## Design Principles
//!
//! 1. **Closed Effect Sets**: Card effects and enemy intents are enums.
//!    Definition files are checked when loaded, so a running battle never
//!    meets an unknown tag.
//!
//! 2. **Deterministic**: Every shuffle, random target, and insertion index
//!    comes from the battle's seeded `GameRng`.
//!
//! 3. **Ordered Mutation**: Effects, intents, and status ticks commit in a
//!    fixed order, and every change is appended to the battle's event log.
//!
//! ## Modules
//!
//! - `core`: Ids, RNG, configuration, errors
//! - `status`: Buffs, debuffs, powers, and turn ticking
//! - `combatants`: Player and enemy state
//! - `cards`: Card definitions and the card registry
//! - `zones`: Deck, hand, discard, exhaust, and used-power piles
//! - `effects`: Card effects, targeting, formulas, resolution
//! - `intents`: Enemy intents and their execution
//! - `strategy`: Player decision policies
//! - `battle`: The turn engine
//! - `loader`: JSON definitions and the shared catalog
//! - `sim`: Batch simulation and action statistics

pub mod core;
pub mod status;
pub mod combatants;
pub mod cards;
pub mod zones;
pub mod effects;
pub mod intents;
pub mod strategy;
pub mod battle;
pub mod loader;
pub mod sim;

// Re-export commonly used types
pub use crate::core::{
    BattleConfig, BattleError, CardId, CombatantId, EnemyId, GameRng, GroupId, LoadError,
    SimConfig, SimError,
};

pub use crate::status::{BuffKind, DebuffKind, PowerKind, StatusEntry, StatusLedger};

pub use crate::combatants::{Combatant, Enemy, FlagLifetime, Player};

pub use crate::cards::{Card, CardRegistry, CardType, Cost};

pub use crate::zones::{Pile, Piles};

pub use crate::effects::{Destination, Effect, EffectResolver, TargetSelector, Targets};

pub use crate::intents::{Intent, IntentExecutor, SplitRule};

pub use crate::strategy::{
    DecisionContext, FirstPlayable, RandomPlayable, Scripted, ScriptedPlay, Strategy,
};

pub use crate::battle::{
    ActionRecord, Battle, BattleEvent, BattleOutcome, BattleSummary, StandardVictory, TurnRecord,
    VictoryCondition,
};

pub use crate::loader::{Catalog, CatalogSources};

pub use crate::sim::{ActionStats, Recommendation, SimulationReport, Simulator};
