//! Card effects and target selection.
//!
//! - `Effect`: The closed set of atomic card mutations
//! - `TargetSelector`: Selector tokens and their resolution
//! - `formula`: Attack damage and block gain
//! - `EffectResolver`: Applies effects to a running battle

mod effect;
pub mod formula;
mod targeting;
mod resolver;

pub use effect::{Destination, Effect};
pub use targeting::{TargetSelector, Targets};
pub use resolver::EffectResolver;
