//! Card data.
//!
//! A `Card` is a value: the catalog holds one template per id and the
//! battle works with clones. Nothing mutates a card after creation; only
//! the pile it sits in changes.

use serde::{Deserialize, Serialize};

use crate::core::CardId;
use crate::effects::{Effect, TargetSelector};

/// Card category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    Attack,
    Skill,
    Power,
    Status,
    Curse,
}

impl CardType {
    /// Status and curse cards trigger Evolve and FireBreath when drawn.
    #[must_use]
    pub const fn is_status_or_curse(self) -> bool {
        matches!(self, CardType::Status | CardType::Curse)
    }
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            CardType::Attack => "attack",
            CardType::Skill => "skill",
            CardType::Power => "power",
            CardType::Status => "status",
            CardType::Curse => "curse",
        };
        f.write_str(label)
    }
}

/// Energy cost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cost {
    Fixed(u32),
    /// All energy on hand when the card is paid for.
    X,
}

impl std::fmt::Display for Cost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cost::Fixed(c) => write!(f, "{c}"),
            Cost::X => f.write_str("X"),
        }
    }
}

/// A playable card.
///
/// ## Example
///
/// ```
/// use deck_battle::cards::{Card, CardType, Cost};
/// use deck_battle::effects::{Effect, TargetSelector};
///
/// let strike = Card::new("1", "Strike", Cost::Fixed(1), CardType::Attack)
///     .with_target(TargetSelector::SingleEnemy)
///     .with_effect(Effect::Attack { value: 6 });
///
/// assert!(strike.is_attack());
/// assert_eq!(strike.effects.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Card {
    pub id: CardId,
    pub name: String,
    pub cost: Cost,
    pub card_type: CardType,
    /// Selector the strategy resolves into the play's target list.
    pub target: TargetSelector,
    pub rarity: Option<String>,
    /// Effects applied in order when the card is played.
    pub effects: Vec<Effect>,

    pub playable: bool,
    /// Exhausted if still in hand at end of turn.
    pub ethereal: bool,
    /// Exhausted after being played.
    pub exhaust: bool,
    /// Drawn first at battle start.
    pub innate: bool,
    /// Stays in hand at end of turn.
    pub retain: bool,
    /// Shuffled back into the deck after being played.
    pub shuffle_back: bool,
}

impl Card {
    /// Create a playable card with no effects, targeting the first live enemy.
    #[must_use]
    pub fn new(
        id: impl Into<CardId>,
        name: impl Into<String>,
        cost: Cost,
        card_type: CardType,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cost,
            card_type,
            target: TargetSelector::SingleEnemy,
            rarity: None,
            effects: Vec::new(),
            playable: true,
            ethereal: false,
            exhaust: false,
            innate: false,
            retain: false,
            shuffle_back: false,
        }
    }

    /// Set the target selector (builder pattern).
    #[must_use]
    pub fn with_target(mut self, target: TargetSelector) -> Self {
        self.target = target;
        self
    }

    /// Append an effect (builder pattern).
    #[must_use]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    /// Set the rarity (builder pattern).
    #[must_use]
    pub fn with_rarity(mut self, rarity: impl Into<String>) -> Self {
        self.rarity = Some(rarity.into());
        self
    }

    /// Mark as unplayable (builder pattern).
    #[must_use]
    pub fn unplayable(mut self) -> Self {
        self.playable = false;
        self
    }

    /// Mark as exhausting (builder pattern).
    #[must_use]
    pub fn exhausting(mut self) -> Self {
        self.exhaust = true;
        self
    }

    /// Mark as ethereal (builder pattern).
    #[must_use]
    pub fn ethereal(mut self) -> Self {
        self.ethereal = true;
        self
    }

    /// Mark as innate (builder pattern).
    #[must_use]
    pub fn innate(mut self) -> Self {
        self.innate = true;
        self
    }

    /// Mark as retained (builder pattern).
    #[must_use]
    pub fn retained(mut self) -> Self {
        self.retain = true;
        self
    }

    /// Mark as shuffled back after play (builder pattern).
    #[must_use]
    pub fn shuffled_back(mut self) -> Self {
        self.shuffle_back = true;
        self
    }

    #[must_use]
    pub fn is_attack(&self) -> bool {
        self.card_type == CardType::Attack
    }

    #[must_use]
    pub fn is_power(&self) -> bool {
        self.card_type == CardType::Power
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_flags() {
        let card = Card::new("9", "Dazed", Cost::Fixed(0), CardType::Status)
            .unplayable()
            .ethereal();

        assert!(!card.playable);
        assert!(card.ethereal);
        assert!(!card.exhaust);
        assert!(card.card_type.is_status_or_curse());
    }

    #[test]
    fn test_display() {
        let card = Card::new("7", "Whirlwind", Cost::X, CardType::Attack);
        assert_eq!(card.to_string(), "Whirlwind (X)");
        assert_eq!(Cost::Fixed(2).to_string(), "2");
    }

    #[test]
    fn test_card_type_serde_lowercase() {
        let ty: CardType = serde_json::from_str("\"curse\"").unwrap();
        assert_eq!(ty, CardType::Curse);
        assert_eq!(serde_json::to_string(&CardType::Skill).unwrap(), "\"skill\"");
    }
}
