//! The shared template catalog.
//!
//! A `Catalog` holds every card, enemy, deck, and enemy group definition.
//! It is built once, validated, and then shared read-only (behind an
//! `Arc`) by every battle, which instantiates fresh cards and enemies from
//! it whenever a deck is built, a card is generated, or an enemy spawns.
//!
//! ## Usage
//!
//! ```
//! use deck_battle::loader::{Catalog, CatalogSources};
//! use deck_battle::core::GroupId;
//!
//! let sources = CatalogSources {
//!     cards: r#"[{"id": "1", "name": "Strike", "cost": 1, "card_type": "attack",
//!                 "effects": [{"effect": "attack", "value": 6}]}]"#.into(),
//!     enemies: r#"[{"id": "louse", "hp": 12, "intent_sq": [[{"type": "attack", "value": 5}]]}]"#.into(),
//!     decks: r#"{"starter": {"name": "Starter", "cards": ["1", "1"]}}"#.into(),
//!     groups: r#"{"g1": {"name": "Lice", "enemy_ids": ["louse"]}}"#.into(),
//! };
//! let catalog = Catalog::from_sources(&sources).unwrap();
//!
//! assert_eq!(catalog.build_deck("starter").unwrap().len(), 2);
//! assert_eq!(catalog.build_group("g1", GroupId::new(1)).unwrap()[0].stats.hp, 12);
//! ```

use std::path::Path;

use rustc_hash::FxHashMap;

use super::spec::{CardSpec, DeckDefinition, EnemyGroup, EnemySpec};
use crate::cards::{Card, CardRegistry};
use crate::combatants::Enemy;
use crate::core::{CardId, EnemyId, GroupId, LoadError};
use crate::effects::Effect;
use crate::intents::Intent;

/// File names read by `Catalog::load_dir`.
pub const CARDS_FILE: &str = "cards.json";
pub const ENEMIES_FILE: &str = "enemies.json";
pub const DECKS_FILE: &str = "decks.json";
pub const GROUPS_FILE: &str = "enemy_groups.json";

/// Raw JSON text of the four definition files.
#[derive(Clone, Debug, Default)]
pub struct CatalogSources {
    pub cards: String,
    pub enemies: String,
    pub decks: String,
    pub groups: String,
}

impl CatalogSources {
    /// Read the four definition files from a directory.
    pub fn read_dir(dir: impl AsRef<Path>) -> Result<Self, LoadError> {
        let dir = dir.as_ref();
        let read = |name: &str| {
            let path = dir.join(name);
            std::fs::read_to_string(&path).map_err(|source| LoadError::Io {
                path: path.display().to_string(),
                source,
            })
        };

        Ok(Self {
            cards: read(CARDS_FILE)?,
            enemies: read(ENEMIES_FILE)?,
            decks: read(DECKS_FILE)?,
            groups: read(GROUPS_FILE)?,
        })
    }
}

/// Card, enemy, deck, and group templates.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    cards: CardRegistry,
    enemies: FxHashMap<EnemyId, Enemy>,
    decks: FxHashMap<String, DeckDefinition>,
    groups: FxHashMap<String, EnemyGroup>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate all four definition files.
    pub fn from_sources(sources: &CatalogSources) -> Result<Self, LoadError> {
        let mut catalog = Self::new();

        let cards: Vec<CardSpec> = serde_json::from_str(&sources.cards)?;
        for spec in cards {
            catalog.register_card(Card::try_from(spec)?)?;
        }

        let enemies: Vec<EnemySpec> = serde_json::from_str(&sources.enemies)?;
        for spec in enemies {
            catalog.register_enemy(Enemy::try_from(spec)?)?;
        }

        let decks: FxHashMap<String, DeckDefinition> = serde_json::from_str(&sources.decks)?;
        for (id, deck) in decks {
            catalog.add_deck(id, deck);
        }

        let groups: FxHashMap<String, EnemyGroup> = serde_json::from_str(&sources.groups)?;
        for (id, group) in groups {
            catalog.add_group(id, group);
        }

        catalog.validate()?;
        tracing::debug!(
            cards = catalog.cards.len(),
            enemies = catalog.enemies.len(),
            decks = catalog.decks.len(),
            groups = catalog.groups.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Load `cards.json`, `enemies.json`, `decks.json`, and
    /// `enemy_groups.json` from a directory.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, LoadError> {
        Self::from_sources(&CatalogSources::read_dir(dir)?)
    }

    /// Add a card template.
    pub fn register_card(&mut self, card: Card) -> Result<(), LoadError> {
        self.cards.register(card)
    }

    /// Add an enemy template.
    pub fn register_enemy(&mut self, enemy: Enemy) -> Result<(), LoadError> {
        if self.enemies.contains_key(&enemy.id) {
            return Err(LoadError::Duplicate {
                kind: "enemy",
                id: enemy.id.to_string(),
            });
        }
        self.enemies.insert(enemy.id.clone(), enemy);
        Ok(())
    }

    /// Add or replace a deck.
    pub fn add_deck(&mut self, id: impl Into<String>, deck: DeckDefinition) {
        self.decks.insert(id.into(), deck);
    }

    /// Add or replace an enemy group.
    pub fn add_group(&mut self, id: impl Into<String>, group: EnemyGroup) {
        self.groups.insert(id.into(), group);
    }

    /// Add a card template (builder pattern).
    pub fn with_card(mut self, card: Card) -> Result<Self, LoadError> {
        self.register_card(card)?;
        Ok(self)
    }

    /// Add an enemy template (builder pattern).
    pub fn with_enemy(mut self, enemy: Enemy) -> Result<Self, LoadError> {
        self.register_enemy(enemy)?;
        Ok(self)
    }

    /// Check that every id referenced by a definition exists.
    ///
    /// Covers deck contents, group members, cards created by effects or
    /// intents, and enemies named by spawn intents or split rules.
    pub fn validate(&self) -> Result<(), LoadError> {
        for deck in self.decks.values() {
            for id in &deck.cards {
                self.require_card(id)?;
            }
        }
        for group in self.groups.values() {
            for id in &group.enemy_ids {
                self.require_enemy(id)?;
            }
        }
        for card in self.cards.iter() {
            for effect in &card.effects {
                if let Effect::GenerateCard { card, .. } = effect {
                    self.require_card(card)?;
                }
            }
        }
        for enemy in self.enemies.values() {
            for intent in enemy.intents.iter().flatten() {
                match intent {
                    Intent::InsertCard { card, .. } => self.require_card(card)?,
                    Intent::Spawn { enemy, .. } => self.require_enemy(enemy)?,
                    _ => {}
                }
            }
            if let Some(split) = &enemy.split {
                self.require_enemy(&split.spawn)?;
            }
        }
        Ok(())
    }

    fn require_card(&self, id: &CardId) -> Result<(), LoadError> {
        if self.cards.contains(id) {
            Ok(())
        } else {
            Err(LoadError::UnknownCard(id.clone()))
        }
    }

    fn require_enemy(&self, id: &EnemyId) -> Result<(), LoadError> {
        if self.enemies.contains_key(id) {
            Ok(())
        } else {
            Err(LoadError::UnknownEnemy(id.clone()))
        }
    }

    /// The card templates.
    #[must_use]
    pub fn cards(&self) -> &CardRegistry {
        &self.cards
    }

    /// A fresh copy of a card.
    #[must_use]
    pub fn instantiate_card(&self, id: &CardId) -> Option<Card> {
        self.cards.instantiate(id)
    }

    /// An enemy template.
    #[must_use]
    pub fn enemy(&self, id: &EnemyId) -> Option<&Enemy> {
        self.enemies.get(id)
    }

    /// A fresh copy of an enemy, at full hp with its cursor at the start.
    #[must_use]
    pub fn instantiate_enemy(&self, id: &EnemyId) -> Option<Enemy> {
        self.enemies.get(id).cloned()
    }

    #[must_use]
    pub fn deck(&self, id: &str) -> Option<&DeckDefinition> {
        self.decks.get(id)
    }

    #[must_use]
    pub fn group(&self, id: &str) -> Option<&EnemyGroup> {
        self.groups.get(id)
    }

    /// Deck ids, sorted.
    #[must_use]
    pub fn deck_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.decks.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Enemy group ids, sorted.
    #[must_use]
    pub fn group_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.groups.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Fresh card instances for a deck, in definition order.
    pub fn build_deck(&self, deck_id: &str) -> Result<Vec<Card>, LoadError> {
        let deck = self
            .decks
            .get(deck_id)
            .ok_or_else(|| LoadError::UnknownDeck(deck_id.to_string()))?;
        self.cards.build_deck(&deck.cards)
    }

    /// Fresh enemy instances for a group, all placed in `group`.
    pub fn build_group(&self, group_id: &str, group: GroupId) -> Result<Vec<Enemy>, LoadError> {
        let definition = self
            .groups
            .get(group_id)
            .ok_or_else(|| LoadError::UnknownGroup(group_id.to_string()))?;

        definition
            .enemy_ids
            .iter()
            .map(|id| {
                self.instantiate_enemy(id)
                    .map(|enemy| enemy.in_group(group))
                    .ok_or_else(|| LoadError::UnknownEnemy(id.clone()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardType, Cost};
    use crate::effects::Destination;

    fn strike() -> Card {
        Card::new("1", "Strike", Cost::Fixed(1), CardType::Attack)
            .with_effect(Effect::Attack { value: 6 })
    }

    #[test]
    fn test_duplicate_enemy_rejected() {
        let mut catalog = Catalog::new();
        catalog.register_enemy(Enemy::new("louse", "Louse", 10)).unwrap();
        let err = catalog
            .register_enemy(Enemy::new("louse", "Louse", 12))
            .unwrap_err();
        assert!(matches!(err, LoadError::Duplicate { kind: "enemy", .. }));
    }

    #[test]
    fn test_validate_catches_missing_generated_card() {
        let card = Card::new("2", "Summon", Cost::Fixed(1), CardType::Skill).with_effect(
            Effect::GenerateCard {
                card: CardId::new("missing"),
                amount: 1,
                destination: Destination::Hand,
            },
        );
        let catalog = Catalog::new().with_card(card).unwrap();

        let err = catalog.validate().unwrap_err();
        assert!(matches!(err, LoadError::UnknownCard(id) if id.as_str() == "missing"));
    }

    #[test]
    fn test_validate_catches_missing_spawn() {
        let enemy = Enemy::new("slime", "Slime", 30).with_plan(vec![Intent::Spawn {
            threshold: None,
            enemy: EnemyId::new("tiny_slime"),
            amount: 2,
        }]);
        let catalog = Catalog::new().with_enemy(enemy).unwrap();

        assert!(matches!(
            catalog.validate().unwrap_err(),
            LoadError::UnknownEnemy(_)
        ));
    }

    #[test]
    fn test_build_group_assigns_group() {
        let mut catalog = Catalog::new()
            .with_enemy(Enemy::new("louse", "Louse", 10))
            .unwrap();
        catalog.add_group(
            "pair",
            EnemyGroup {
                name: "Two lice".into(),
                enemy_ids: vec![EnemyId::new("louse"), EnemyId::new("louse")],
            },
        );

        let enemies = catalog.build_group("pair", GroupId::new(3)).unwrap();
        assert_eq!(enemies.len(), 2);
        assert!(enemies.iter().all(|e| e.group == GroupId::new(3)));
        assert!(matches!(
            catalog.build_group("nope", GroupId::new(0)),
            Err(LoadError::UnknownGroup(_))
        ));
    }

    #[test]
    fn test_build_deck_unknown() {
        let mut catalog = Catalog::new().with_card(strike()).unwrap();
        catalog.add_deck(
            "starter",
            DeckDefinition {
                name: "Starter".into(),
                cards: vec![CardId::new("1"), CardId::new("1")],
            },
        );

        assert_eq!(catalog.build_deck("starter").unwrap().len(), 2);
        assert!(matches!(
            catalog.build_deck("other"),
            Err(LoadError::UnknownDeck(_))
        ));
        assert_eq!(catalog.deck_ids(), vec!["starter"]);
    }
}
