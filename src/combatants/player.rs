//! The player combatant.
//!
//! The player adds energy, persistent powers, and named status flags to
//! the shared `Combatant`. Card piles belong to the battle, and the
//! decision strategy is held by the battle as well, so a `Player` is plain
//! data that effects can mutate freely.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;

use super::stats::{Combatant, TurnUpkeep};
use crate::cards::Cost;
use crate::status::{BuffKind, DebuffKind, PowerKind};

/// Flag name that blocks drawing while set.
pub const NO_DRAW_FLAG: &str = "NoDraw";

/// How long a status flag lasts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum FlagLifetime {
    /// Cleared at the end of the player's turn.
    Temporary,
    /// Lasts for the rest of the battle.
    Permanent,
}

/// The controlled combatant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub stats: Combatant,
    pub energy: i32,
    pub max_energy: i32,
    pub powers: BTreeMap<PowerKind, i32>,
    pub flags: FxHashMap<String, FlagLifetime>,
}

impl Player {
    /// Create a player at full hp and energy.
    #[must_use]
    pub fn new(name: impl Into<String>, hp: i32, max_energy: i32) -> Self {
        Self {
            stats: Combatant::new(name, hp),
            energy: max_energy,
            max_energy,
            powers: BTreeMap::new(),
            flags: FxHashMap::default(),
        }
    }

    /// Start with a power already active (builder pattern).
    #[must_use]
    pub fn with_power(mut self, kind: PowerKind, value: i32) -> Self {
        self.add_power(kind, value);
        self
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.stats.is_alive()
    }

    /// Stack count of a power (0 if inactive).
    #[must_use]
    pub fn power(&self, kind: PowerKind) -> i32 {
        self.powers.get(&kind).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn has_power(&self, kind: PowerKind) -> bool {
        self.powers.contains_key(&kind)
    }

    /// Accumulate into a power.
    pub fn add_power(&mut self, kind: PowerKind, value: i32) {
        *self.powers.entry(kind).or_insert(0) += value;
    }

    /// Set a named flag. A temporary set never downgrades a permanent flag.
    pub fn set_flag(&mut self, name: impl Into<String>, lifetime: FlagLifetime) {
        let slot = self.flags.entry(name.into()).or_insert(lifetime);
        if lifetime == FlagLifetime::Permanent {
            *slot = FlagLifetime::Permanent;
        }
    }

    #[must_use]
    pub fn has_flag(&self, name: &str) -> bool {
        self.flags.contains_key(name)
    }

    /// Check whether drawing is currently allowed.
    #[must_use]
    pub fn can_draw(&self) -> bool {
        !self.stats.has_debuff(DebuffKind::NoDraw) && !self.has_flag(NO_DRAW_FLAG)
    }

    /// Check whether attack cards may be played.
    #[must_use]
    pub fn can_play_attacks(&self) -> bool {
        !self.stats.has_debuff(DebuffKind::Entangled)
    }

    /// Check whether a card cost can be paid now. X is always payable.
    #[must_use]
    pub fn can_afford(&self, cost: Cost) -> bool {
        match cost {
            Cost::X => true,
            Cost::Fixed(c) => i64::from(self.energy) >= i64::from(c),
        }
    }

    /// Debit a card cost and return the amount taken.
    ///
    /// X takes all current energy. Fixed costs never push energy below 0.
    pub fn pay(&mut self, cost: Cost) -> i32 {
        let taken = match cost {
            Cost::X => self.energy,
            Cost::Fixed(c) => i32::try_from(c).unwrap_or(i32::MAX).min(self.energy),
        }
        .max(0);
        self.energy -= taken;
        taken
    }

    /// Start-of-turn upkeep: block reset (unless Barricade), energy refill,
    /// status ticking. Power triggers that need the battle run afterwards.
    pub fn begin_turn(&mut self) -> TurnUpkeep {
        let keep_block = self.has_power(PowerKind::Barricade);
        self.energy = self.max_energy;
        self.stats.begin_turn(keep_block)
    }

    /// End-of-turn upkeep: LoseStrength, NoDraw removal, temporary flags.
    ///
    /// Returns the Strength lost to LoseStrength, if any.
    pub fn end_turn(&mut self) -> Option<i32> {
        let lost = self.stats.end_turn();
        self.stats.debuffs.remove(DebuffKind::NoDraw);
        self.flags
            .retain(|_, lifetime| *lifetime == FlagLifetime::Permanent);
        lost
    }

    /// Damage the player inflicts on themselves (Brutality).
    ///
    /// Blockable. Rupture converts it into Strength. Returns hp lost.
    pub fn take_self_damage(&mut self, amount: i32) -> i32 {
        let lost = self.stats.take_damage(amount);
        let rupture = self.power(PowerKind::Rupture);
        if rupture != 0 {
            self.stats.apply_buff(BuffKind::Strength, rupture, None);
        }
        lost
    }
}
