//! Enemy intents.
//!
//! - `Intent`: One scripted enemy action
//! - `SplitRule`: The pre-action spawn hook
//! - `IntentExecutor`: Runs intents against a battle

pub mod intent;
pub mod executor;

pub use intent::{Intent, SplitRule};
pub use executor::IntentExecutor;
