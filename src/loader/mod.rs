//! Definition loading.
//!
//! - `spec`: Serde records for the JSON definition files
//! - `catalog`: The validated, shared template catalog

pub mod spec;
pub mod catalog;

pub use spec::{CardSpec, CostSpec, DeckDefinition, EffectSpec, EnemyGroup, EnemySpec, IntentSpec};
pub use catalog::{Catalog, CatalogSources};
