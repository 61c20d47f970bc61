//! Enumerated buff, debuff, and power names.
//!
//! Definition files refer to statuses by name (`"Strength"`, `"Poison"`).
//! Names are parsed once at load time into these enums, so an unknown
//! status is a load error rather than a silent no-op mid-battle.

use std::str::FromStr;

use crate::core::LoadError;

macro_rules! status_kind {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal $(| $alias:literal)* ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every kind, in ledger iteration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Canonical display name.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $( $name::$variant => $label ),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $name {
            type Err = LoadError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $label $(| $alias)* => Ok($name::$variant), )+
                    other => Err(LoadError::UnknownStatus(other.to_string())),
                }
            }
        }
    };
}

status_kind! {
    /// Buffs: positive statuses with an optional value and duration.
    BuffKind {
        Strength => "Strength",
        Dexterity => "Dexterity",
        /// Heals by its value at the start of the owner's turn.
        Regen => "Regen",
        /// Adds its value to Strength at the start of the owner's turn.
        StrengthGain => "StrengthGain" | "GainStrength" | "Ritual",
        /// Each stack absorbs one debuff application.
        Artifact => "Artifact",
        /// Caps incoming attack damage at 1.
        Intangible => "Intangible",
        /// Keeps block through the start of the owner's turn.
        Blur => "Blur",
    }
}

status_kind! {
    /// Debuffs: negative statuses. Always carry a duration once applied.
    DebuffKind {
        Weak => "Weak",
        Vulnerable => "Vulnerable",
        Frail => "Frail",
        /// Unblockable damage equal to its value, decaying by one per tick.
        Poison => "Poison",
        /// Removes its value from Strength at the end of the owner's turn.
        LoseStrength => "LoseStrength",
        /// Blocks all draws until the owner's turn ends.
        NoDraw => "NoDraw",
        /// Forbids playing attack cards.
        Entangled => "Entangled",
    }
}

status_kind! {
    /// Persistent player powers. Never ticked or expired.
    PowerKind {
        /// Block is not cleared at the start of the turn.
        Barricade => "Barricade",
        /// Start of turn: lose N hp (blockable), draw N.
        Brutality => "Brutality",
        /// Gain N Strength whenever the player damages themselves.
        Rupture => "Rupture",
        /// Draw N when a status or curse is drawn.
        Evolve => "Evolve",
        /// Deal N to every enemy when a status or curse is drawn.
        FireBreath => "FireBreath",
        /// Gain N block whenever a card is exhausted.
        GainBlockOnExhaust => "GainBlockOnExhaust",
        /// Draw N whenever a card is exhausted.
        DrawOnExhaust => "DrawOnExhaust",
    }
}
