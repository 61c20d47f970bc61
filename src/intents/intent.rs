//! Enemy intent definitions.
//!
//! An intent is one scripted enemy action. Like card effects, the set is
//! closed and every variant carries its target selector explicitly, with
//! the per-variant default filled in at load time.

use serde::{Deserialize, Serialize};

use crate::core::{CardId, EnemyId};
use crate::effects::{Destination, TargetSelector};
use crate::status::{BuffKind, DebuffKind};

/// One scripted enemy action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    /// Attack-formula damage. Defaults to the player.
    Attack { value: i32, target: TargetSelector },

    /// Block-formula block, computed for each target. Defaults to self.
    Block { value: i32, target: TargetSelector },

    /// Buff with accumulating semantics. Defaults to self.
    Buff {
        kind: BuffKind,
        value: i32,
        duration: Option<i32>,
        target: TargetSelector,
    },

    /// Debuff with accumulating semantics. Defaults to the player.
    Debuff {
        kind: DebuffKind,
        duration: i32,
        value: Option<i32>,
        target: TargetSelector,
    },

    /// Heal, clamped at max hp. Defaults to self.
    Heal { value: i32, target: TargetSelector },

    /// Put fresh copies of a catalog card into the player's piles.
    InsertCard {
        card: CardId,
        amount: usize,
        destination: Destination,
    },

    /// Replace the enemy with `amount` copies of another enemy.
    ///
    /// Fires unconditionally without a threshold, otherwise only once hp
    /// is at or below it.
    Spawn {
        threshold: Option<i32>,
        enemy: EnemyId,
        amount: usize,
    },
}

impl Intent {
    /// Attack the player.
    #[must_use]
    pub fn attack(value: i32) -> Self {
        Intent::Attack {
            value,
            target: TargetSelector::SingleEnemy,
        }
    }

    /// Block self.
    #[must_use]
    pub fn block(value: i32) -> Self {
        Intent::Block {
            value,
            target: TargetSelector::SelfTarget,
        }
    }

    /// Buff self.
    #[must_use]
    pub fn buff(kind: BuffKind, value: i32) -> Self {
        Intent::Buff {
            kind,
            value,
            duration: None,
            target: TargetSelector::SelfTarget,
        }
    }

    /// Debuff the player.
    #[must_use]
    pub fn debuff(kind: DebuffKind, duration: i32) -> Self {
        Intent::Debuff {
            kind,
            duration,
            value: None,
            target: TargetSelector::SingleEnemy,
        }
    }

    /// Heal self.
    #[must_use]
    pub fn heal(value: i32) -> Self {
        Intent::Heal {
            value,
            target: TargetSelector::SelfTarget,
        }
    }

    /// Redirect at a different selector (builder pattern).
    ///
    /// No effect on intents without a target.
    #[must_use]
    pub fn targeting(mut self, selector: TargetSelector) -> Self {
        match &mut self {
            Intent::Attack { target, .. }
            | Intent::Block { target, .. }
            | Intent::Buff { target, .. }
            | Intent::Debuff { target, .. }
            | Intent::Heal { target, .. } => *target = selector,
            Intent::InsertCard { .. } | Intent::Spawn { .. } => {}
        }
        self
    }

    /// Short tag used in logs.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Intent::Attack { .. } => "attack",
            Intent::Block { .. } => "block",
            Intent::Buff { .. } => "buff",
            Intent::Debuff { .. } => "debuff",
            Intent::Heal { .. } => "heal",
            Intent::InsertCard { .. } => "insert_card",
            Intent::Spawn { .. } => "spawn",
        }
    }
}

/// Pre-action spawn hook.
///
/// Before acting, an enemy whose hp has fallen to `floor(max_hp * ratio)`
/// or below splits into `amount` copies of `spawn` and skips its plan.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SplitRule {
    pub ratio: f64,
    pub spawn: EnemyId,
    #[serde(default = "default_split_amount")]
    pub amount: usize,
}

fn default_split_amount() -> usize {
    2
}

impl SplitRule {
    /// Check the hp threshold.
    #[must_use]
    pub fn is_triggered(&self, hp: i32, max_hp: i32) -> bool {
        let threshold = (f64::from(max_hp) * self.ratio).floor();
        hp > 0 && f64::from(hp) <= threshold
    }
}
