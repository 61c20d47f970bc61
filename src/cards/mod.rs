//! Cards and the card template registry.
//!
//! - `Card`: Cost, type, target selector, flags, ordered effects
//! - `CardRegistry`: Id to template lookup, fresh copies per battle

pub mod definition;
pub mod registry;

pub use definition::{Card, CardType, Cost};
pub use registry::CardRegistry;
