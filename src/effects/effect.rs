//! Card effect definitions.
//!
//! Effects are the atomic mutations a card performs. The set is closed:
//! the loader maps each definition tag to exactly one variant and rejects
//! anything else, so resolution never meets an unknown effect.
//!
//! ## Damage Effects
//!
//! - `Attack`, `XAttack`, `BlockAttack`, `Reaper`: run the attack formula
//!   against the target
//!
//! ## Defensive Effects
//!
//! - `Block`, `DoubleBlock`: add to the user's block
//!
//! ## Status Effects
//!
//! - `Buff`, `Debuff`: apply to the target
//! - `Power`, `Status`, `DoubleStrength`: modify the user
//!
//! ## Pile Effects
//!
//! - `Draw`, `GenerateCard`: fire once per play, not per target
//! - `ExhaustByType`: exhausts from the hand

use serde::{Deserialize, Serialize};

use crate::cards::CardType;
use crate::combatants::FlagLifetime;
use crate::core::CardId;
use crate::status::{BuffKind, DebuffKind, PowerKind};

/// Where a created card goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Destination {
    /// Into the hand; overflows to discard when the hand is full.
    Hand,
    /// Into the deck at a uniformly random index.
    #[serde(alias = "deck")]
    Draw,
    Discard,
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Destination::Hand => "hand",
            Destination::Draw => "draw pile",
            Destination::Discard => "discard pile",
        };
        f.write_str(label)
    }
}

/// An atomic card effect.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Deal `value` through the attack formula.
    Attack { value: i32 },

    /// Hit once per point of energy the user holds when this resolves.
    XAttack { value: i32 },

    /// Attack with base damage equal to the user's current block.
    BlockAttack,

    /// Attack with base `attack`, then heal the user by hp removed times `ratio`.
    Reaper { ratio: f64, attack: i32 },

    /// Gain `value` through the block formula.
    Block { value: i32 },

    /// Double the user's block.
    DoubleBlock,

    /// Apply a buff to the target.
    Buff {
        kind: BuffKind,
        value: i32,
        duration: Option<i32>,
    },

    /// Apply a debuff to the target.
    Debuff {
        kind: DebuffKind,
        duration: i32,
        value: Option<i32>,
    },

    /// Double the user's Strength if positive.
    DoubleStrength,

    /// Draw cards. Fires once per play.
    Draw { amount: usize },

    /// Gain energy. Player only.
    Energy { value: i32 },

    /// Change the user's hp, clamped at max.
    Hp { value: i32 },

    /// Accumulate a persistent power. Player only.
    Power { kind: PowerKind, value: i32 },

    /// Set a named flag on the user. Player only.
    Status {
        name: String,
        lifetime: FlagLifetime,
    },

    /// Exhaust every hand card whose type is not in `keep`.
    ///
    /// The user gains `block_per_card` block per exhausted card; when
    /// `attack_per_card` is positive the target is attacked for
    /// `count * attack_per_card`.
    ExhaustByType {
        keep: Vec<CardType>,
        block_per_card: i32,
        attack_per_card: i32,
    },

    /// Create fresh copies of a catalog card. Fires once per play.
    GenerateCard {
        card: CardId,
        amount: usize,
        destination: Destination,
    },
}

impl Effect {
    /// Short tag used in logs and errors.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Effect::Attack { .. } => "attack",
            Effect::XAttack { .. } => "x_attack",
            Effect::BlockAttack => "block_attack",
            Effect::Reaper { .. } => "reaper",
            Effect::Block { .. } => "block",
            Effect::DoubleBlock => "double_block",
            Effect::Buff { .. } => "buff",
            Effect::Debuff { .. } => "debuff",
            Effect::DoubleStrength => "double_strength",
            Effect::Draw { .. } => "draw",
            Effect::Energy { .. } => "energy",
            Effect::Hp { .. } => "hp",
            Effect::Power { .. } => "power",
            Effect::Status { .. } => "status",
            Effect::ExhaustByType { .. } => "exhaust_by_type",
            Effect::GenerateCard { .. } => "generate_card",
        }
    }

    /// Fires once per play regardless of how many targets were chosen.
    #[must_use]
    pub const fn fires_once(&self) -> bool {
        matches!(self, Effect::Draw { .. } | Effect::GenerateCard { .. })
    }

    /// Needs a player as the user.
    #[must_use]
    pub const fn player_only(&self) -> bool {
        matches!(
            self,
            Effect::Energy { .. } | Effect::Power { .. } | Effect::Status { .. }
        )
    }
}
