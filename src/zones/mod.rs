//! Card piles: deck, hand, discard, exhaust, used powers.

pub mod piles;

pub use piles::{Pile, Piles, ZonePosition};
