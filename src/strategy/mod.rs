//! Player decision strategies.
//!
//! A strategy only *selects*: which hand card to play next and which
//! targets to aim it at. It never mutates battle state. The battle filters
//! the hand down to playable cards (flag, energy, Entangled) before asking.
//!
//! ## Implementation Notes
//!
//! - `choose_card` returns an index into `ctx.hand`; returning `None` ends
//!   the turn
//! - `choose_targets` returning `None` (or an empty list) also ends the
//!   turn, without playing the chosen card
//! - Any randomness must come from the `rng` argument

pub mod policy;

pub use policy::{FirstPlayable, RandomPlayable, Scripted, ScriptedPlay};

use crate::cards::Card;
use crate::combatants::{Enemy, Player};
use crate::core::{BattleError, CombatantId, GameRng};
use crate::effects::Targets;

/// Read-only view handed to a strategy.
#[derive(Clone, Copy, Debug)]
pub struct DecisionContext<'a> {
    pub player: &'a Player,
    pub enemies: &'a [Enemy],
    pub hand: &'a [Card],
    /// Indices into `hand` the battle would accept.
    pub playable: &'a [usize],
    pub turn: u32,
}

impl<'a> DecisionContext<'a> {
    /// Playable cards with their hand indices.
    pub fn playable_cards(&self) -> impl Iterator<Item = (usize, &'a Card)> {
        let (hand, playable) = (self.hand, self.playable);
        playable.iter().map(move |&idx| (idx, &hand[idx]))
    }
}

/// Card and target selection policy.
pub trait Strategy {
    /// Short name for logs and reports.
    fn name(&self) -> &'static str;

    /// Pick the next card to play, by hand index.
    fn choose_card(&mut self, ctx: &DecisionContext<'_>, rng: &mut GameRng) -> Option<usize>;

    /// Pick targets for the chosen card.
    ///
    /// The default resolves the card's own selector from the player's side.
    fn choose_targets(
        &mut self,
        card: &Card,
        ctx: &DecisionContext<'_>,
        rng: &mut GameRng,
    ) -> Result<Option<Targets>, BattleError> {
        let targets = card
            .target
            .resolve(CombatantId::Player, ctx.player, ctx.enemies, rng)?;
        Ok((!targets.is_empty()).then_some(targets))
    }
}
