//! Definition file records.
//!
//! These mirror the JSON files one-to-one. Each record converts into its
//! typed counterpart with `TryFrom`, which is where unknown effect tags,
//! intent tags, and status names are rejected.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardType, Cost};
use crate::combatants::{Combatant, Enemy, FlagLifetime};
use crate::core::{CardId, EnemyId, LoadError};
use crate::effects::{Destination, Effect, TargetSelector};
use crate::intents::{Intent, SplitRule};
use crate::status::{BuffKind, DebuffKind, PowerKind, StatusEntry, StatusLedger};

/// Card cost as written: a number or `"X"`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CostSpec {
    Fixed(u32),
    Text(String),
}

impl TryFrom<CostSpec> for Cost {
    type Error = LoadError;

    fn try_from(spec: CostSpec) -> Result<Self, Self::Error> {
        match spec {
            CostSpec::Fixed(c) => Ok(Cost::Fixed(c)),
            CostSpec::Text(s) if s.eq_ignore_ascii_case("x") => Ok(Cost::X),
            CostSpec::Text(s) => Err(LoadError::InvalidCost(s)),
        }
    }
}

/// One entry of the card file.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CardSpec {
    pub id: CardId,
    pub name: String,
    pub cost: CostSpec,
    pub card_type: CardType,
    #[serde(default)]
    pub rarity: Option<String>,
    #[serde(default = "default_true")]
    pub playable: bool,
    #[serde(default = "default_card_selector")]
    pub target_selector: TargetSelector,
    #[serde(default)]
    pub ethereal: bool,
    #[serde(default)]
    pub exhaust: bool,
    #[serde(default)]
    pub innate: bool,
    #[serde(default)]
    pub retain: bool,
    #[serde(default)]
    pub shuffle_back: bool,
    #[serde(default)]
    pub effects: Vec<EffectSpec>,
}

fn default_true() -> bool {
    true
}

fn default_card_selector() -> TargetSelector {
    TargetSelector::SingleEnemy
}

impl TryFrom<CardSpec> for Card {
    type Error = LoadError;

    fn try_from(spec: CardSpec) -> Result<Self, Self::Error> {
        let effects = spec
            .effects
            .into_iter()
            .map(Effect::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Card {
            id: spec.id,
            name: spec.name,
            cost: Cost::try_from(spec.cost)?,
            card_type: spec.card_type,
            target: spec.target_selector,
            rarity: spec.rarity,
            effects,
            playable: spec.playable,
            ethereal: spec.ethereal,
            exhaust: spec.exhaust,
            innate: spec.innate,
            retain: spec.retain,
            shuffle_back: spec.shuffle_back,
        })
    }
}

/// One effect inside a card record. `effect` selects the variant.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EffectSpec {
    pub effect: String,
    #[serde(default)]
    pub value: Option<i32>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub duration: Option<i32>,
    #[serde(default)]
    pub ratio: Option<f64>,
    #[serde(default)]
    pub attack: Option<i32>,
    #[serde(default)]
    pub block_per_card: Option<i32>,
    #[serde(default)]
    pub attack_per_card: Option<i32>,
    #[serde(default)]
    pub exclude_types: Option<Vec<CardType>>,
    #[serde(default)]
    pub include_types: Option<Vec<CardType>>,
    #[serde(default)]
    pub card_id: Option<CardId>,
    #[serde(default)]
    pub amount: Option<usize>,
    #[serde(default)]
    pub destination: Option<Destination>,
    #[serde(default)]
    pub temporary: Option<bool>,
}

fn required<T>(field: Option<T>, tag: &'static str, name: &'static str) -> Result<T, LoadError> {
    field.ok_or(LoadError::MissingField { tag, field: name })
}

fn draw_amount(value: i32) -> usize {
    usize::try_from(value).unwrap_or(0)
}

impl TryFrom<EffectSpec> for Effect {
    type Error = LoadError;

    fn try_from(spec: EffectSpec) -> Result<Self, Self::Error> {
        let effect = match spec.effect.as_str() {
            "attack" => Effect::Attack {
                value: required(spec.value, "attack", "value")?,
            },
            "x_attack" => Effect::XAttack {
                value: required(spec.value, "x_attack", "value")?,
            },
            "block" => Effect::Block {
                value: required(spec.value, "block", "value")?,
            },
            "buff" => Effect::Buff {
                kind: required(spec.name, "buff", "name")?.parse::<BuffKind>()?,
                value: required(spec.value, "buff", "value")?,
                duration: spec.duration,
            },
            "debuff" => Effect::Debuff {
                kind: required(spec.name, "debuff", "name")?.parse::<DebuffKind>()?,
                duration: required(spec.duration, "debuff", "duration")?,
                value: spec.value,
            },
            "draw" => Effect::Draw {
                amount: draw_amount(required(spec.value, "draw", "value")?),
            },
            "energy" => Effect::Energy {
                value: required(spec.value, "energy", "value")?,
            },
            "hp" => Effect::Hp {
                value: required(spec.value, "hp", "value")?,
            },
            "reaper" => Effect::Reaper {
                ratio: spec.ratio.unwrap_or(1.0),
                attack: spec.attack.unwrap_or(1),
            },
            "power" => Effect::Power {
                kind: required(spec.name, "power", "name")?.parse::<PowerKind>()?,
                value: spec.value.unwrap_or(1),
            },
            "double_block" => Effect::DoubleBlock,
            "double_strength" => Effect::DoubleStrength,
            "block_attack" => Effect::BlockAttack,
            "exhaust_by_type" => {
                let keep = match spec.include_types {
                    Some(include) if !include.is_empty() => include,
                    _ => spec.exclude_types.unwrap_or_default(),
                };
                Effect::ExhaustByType {
                    keep,
                    block_per_card: spec.block_per_card.unwrap_or(0),
                    attack_per_card: spec.attack_per_card.unwrap_or(0),
                }
            }
            "status" => Effect::Status {
                name: required(spec.name, "status", "name")?,
                lifetime: if spec.temporary.unwrap_or(true) {
                    FlagLifetime::Temporary
                } else {
                    FlagLifetime::Permanent
                },
            },
            "generate_card" => Effect::GenerateCard {
                card: required(spec.card_id, "generate_card", "card_id")?,
                amount: spec.amount.unwrap_or(1),
                destination: spec.destination.unwrap_or(Destination::Hand),
            },
            other => return Err(LoadError::UnknownEffect(other.to_string())),
        };
        Ok(effect)
    }
}

/// One intent inside an enemy turn plan. `type` selects the variant.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct IntentSpec {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub value: Option<i32>,
    #[serde(default)]
    pub target_selector: Option<TargetSelector>,
    #[serde(default)]
    pub duration: Option<i32>,
    #[serde(default)]
    pub card_id: Option<CardId>,
    #[serde(default)]
    pub amount: Option<usize>,
    #[serde(default)]
    pub destination: Option<Destination>,
    #[serde(default)]
    pub threshold: Option<i32>,
    #[serde(default)]
    pub summon_enemy_id: Option<EnemyId>,
}

impl TryFrom<IntentSpec> for Intent {
    type Error = LoadError;

    fn try_from(spec: IntentSpec) -> Result<Self, Self::Error> {
        let IntentSpec {
            kind,
            name,
            value,
            target_selector,
            duration,
            card_id,
            amount,
            destination,
            threshold,
            summon_enemy_id,
        } = spec;
        let selector = |default: TargetSelector| target_selector.clone().unwrap_or(default);

        let intent = match kind.as_str() {
            "attack" => Intent::Attack {
                value: required(value, "attack", "value")?,
                target: selector(TargetSelector::SingleEnemy),
            },
            "block" | "block_boss" => Intent::Block {
                value: required(value, "block", "value")?,
                target: boss_or(&kind, selector(TargetSelector::SelfTarget)),
            },
            "buff" | "buff_boss" => Intent::Buff {
                kind: required(name, "buff", "name")?.parse::<BuffKind>()?,
                value: required(value, "buff", "value")?,
                duration,
                target: boss_or(&kind, selector(TargetSelector::SelfTarget)),
            },
            "debuff" => Intent::Debuff {
                kind: required(name, "debuff", "name")?.parse::<DebuffKind>()?,
                duration: required(duration, "debuff", "duration")?,
                value,
                target: selector(TargetSelector::SingleEnemy),
            },
            "heal" | "heal_boss" => Intent::Heal {
                value: required(value, "heal", "value")?,
                target: boss_or(&kind, selector(TargetSelector::SelfTarget)),
            },
            "insert_card" => Intent::InsertCard {
                card: required(card_id, "insert_card", "card_id")?,
                amount: amount.unwrap_or(1),
                destination: destination.unwrap_or(Destination::Discard),
            },
            "spawn" => Intent::Spawn {
                threshold,
                enemy: required(summon_enemy_id, "spawn", "summon_enemy_id")?,
                amount: amount.unwrap_or(2),
            },
            other => return Err(LoadError::UnknownIntent(other.to_string())),
        };
        Ok(intent)
    }
}

fn boss_or(kind: &str, selector: TargetSelector) -> TargetSelector {
    if kind.ends_with("_boss") {
        TargetSelector::Boss
    } else {
        selector
    }
}

/// One entry of the enemy file.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EnemySpec {
    pub id: EnemyId,
    #[serde(default)]
    pub name: Option<String>,
    pub hp: i32,
    #[serde(default)]
    pub block: i32,
    #[serde(default)]
    pub buffs: BTreeMap<String, StatusEntry>,
    #[serde(default)]
    pub debuffs: BTreeMap<String, StatusEntry>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub die_after_turn: Option<u32>,
    #[serde(default)]
    pub split: Option<SplitRule>,
    #[serde(default)]
    pub intent_sq: Vec<Vec<IntentSpec>>,
}

fn parse_ledger<K>(raw: BTreeMap<String, StatusEntry>) -> Result<StatusLedger<K>, LoadError>
where
    K: Ord + Copy + std::str::FromStr<Err = LoadError>,
{
    let mut ledger = StatusLedger::new();
    for (name, entry) in raw {
        ledger.insert(name.parse::<K>()?, entry);
    }
    Ok(ledger)
}

impl TryFrom<EnemySpec> for Enemy {
    type Error = LoadError;

    fn try_from(spec: EnemySpec) -> Result<Self, Self::Error> {
        let intents = spec
            .intent_sq
            .into_iter()
            .map(|plan| {
                plan.into_iter()
                    .map(Intent::try_from)
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        let name = spec.name.unwrap_or_else(|| spec.id.to_string());
        let mut stats = Combatant::new(name, spec.hp).with_block(spec.block);
        stats.buffs = parse_ledger(spec.buffs)?;
        stats.debuffs = parse_ledger(spec.debuffs)?;

        Ok(Enemy {
            id: spec.id,
            stats,
            intents,
            cursor: 0,
            tags: spec.tags,
            die_after_turn: spec.die_after_turn,
            group: Default::default(),
            split: spec.split,
        })
    }
}

/// A named deck: card ids in order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckDefinition {
    pub name: String,
    pub cards: Vec<CardId>,
}

/// A named enemy group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyGroup {
    pub name: String,
    pub enemy_ids: Vec<EnemyId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn effect(json: &str) -> Result<Effect, LoadError> {
        let spec: EffectSpec = serde_json::from_str(json).unwrap();
        Effect::try_from(spec)
    }

    fn intent(json: &str) -> Result<Intent, LoadError> {
        let spec: IntentSpec = serde_json::from_str(json).unwrap();
        Intent::try_from(spec)
    }

    #[test]
    fn test_cost_parsing() {
        assert_eq!(Cost::try_from(CostSpec::Fixed(2)).unwrap(), Cost::Fixed(2));
        assert_eq!(Cost::try_from(CostSpec::Text("x".into())).unwrap(), Cost::X);
        assert_eq!(Cost::try_from(CostSpec::Text("X".into())).unwrap(), Cost::X);
        assert!(Cost::try_from(CostSpec::Text("two".into())).is_err());
    }

    #[test]
    fn test_effect_defaults() {
        assert_eq!(
            effect(r#"{"effect": "reaper"}"#).unwrap(),
            Effect::Reaper {
                ratio: 1.0,
                attack: 1
            }
        );
        assert_eq!(
            effect(r#"{"effect": "power", "name": "Barricade"}"#).unwrap(),
            Effect::Power {
                kind: PowerKind::Barricade,
                value: 1
            }
        );
        assert_eq!(
            effect(r#"{"effect": "generate_card", "card_id": "burn"}"#).unwrap(),
            Effect::GenerateCard {
                card: CardId::new("burn"),
                amount: 1,
                destination: Destination::Hand
            }
        );
        assert_eq!(
            effect(r#"{"effect": "status", "name": "NoDraw"}"#).unwrap(),
            Effect::Status {
                name: "NoDraw".into(),
                lifetime: FlagLifetime::Temporary
            }
        );
    }

    #[test]
    fn test_exhaust_by_type_include_wins() {
        let e = effect(
            r#"{"effect": "exhaust_by_type", "block_per_card": 5,
                "exclude_types": ["attack"], "include_types": ["skill", "power"]}"#,
        )
        .unwrap();
        assert_eq!(
            e,
            Effect::ExhaustByType {
                keep: vec![CardType::Skill, CardType::Power],
                block_per_card: 5,
                attack_per_card: 0
            }
        );
    }

    #[test]
    fn test_unknown_effect_tag_rejected() {
        let err = effect(r#"{"effect": "teleport", "value": 1}"#).unwrap_err();
        assert!(matches!(err, LoadError::UnknownEffect(tag) if tag == "teleport"));
    }

    #[test]
    fn test_debuff_requires_duration() {
        let err = effect(r#"{"effect": "debuff", "name": "Weak"}"#).unwrap_err();
        assert!(matches!(
            err,
            LoadError::MissingField {
                tag: "debuff",
                field: "duration"
            }
        ));
    }

    #[test]
    fn test_unknown_status_rejected() {
        let err = effect(r#"{"effect": "buff", "name": "Flight", "value": 1}"#).unwrap_err();
        assert!(matches!(err, LoadError::UnknownStatus(_)));
    }

    #[test]
    fn test_intent_defaults() {
        assert_eq!(intent(r#"{"type": "attack", "value": 6}"#).unwrap(), Intent::attack(6));
        assert_eq!(intent(r#"{"type": "block", "value": 5}"#).unwrap(), Intent::block(5));
        assert_eq!(
            intent(r#"{"type": "insert_card", "card_id": "dazed"}"#).unwrap(),
            Intent::InsertCard {
                card: CardId::new("dazed"),
                amount: 1,
                destination: Destination::Discard
            }
        );
        assert_eq!(
            intent(r#"{"type": "spawn", "threshold": 20, "summon_enemy_id": "slime_m"}"#).unwrap(),
            Intent::Spawn {
                threshold: Some(20),
                enemy: EnemyId::new("slime_m"),
                amount: 2
            }
        );
    }

    #[test]
    fn test_boss_intents() {
        assert_eq!(
            intent(r#"{"type": "heal_boss", "value": 10}"#).unwrap(),
            Intent::heal(10).targeting(TargetSelector::Boss)
        );
        assert_eq!(
            intent(r#"{"type": "buff_boss", "name": "Strength", "value": 2}"#).unwrap(),
            Intent::buff(BuffKind::Strength, 2).targeting(TargetSelector::Boss)
        );
    }

    #[test]
    fn test_unknown_intent_tag_rejected() {
        let err = intent(r#"{"type": "dance", "value": 1}"#).unwrap_err();
        assert!(matches!(err, LoadError::UnknownIntent(tag) if tag == "dance"));
    }

    #[test]
    fn test_enemy_spec_conversion() {
        let spec: EnemySpec = serde_json::from_str(
            r#"{
                "id": "cultist",
                "hp": 48,
                "buffs": {"Ritual": {"value": 3}},
                "intent_sq": [[{"type": "buff", "name": "Strength", "value": 3}], [{"type": "attack", "value": 6}]]
            }"#,
        )
        .unwrap();
        let enemy = Enemy::try_from(spec).unwrap();

        assert_eq!(enemy.stats.name, "cultist");
        assert_eq!(enemy.stats.max_hp, 48);
        assert_eq!(enemy.stats.buffs.value(BuffKind::StrengthGain), 3);
        assert_eq!(enemy.intents.len(), 2);
    }

    #[test]
    fn test_card_spec_conversion() {
        let spec: CardSpec = serde_json::from_str(
            r#"{
                "id": "12", "name": "Whirlwind", "cost": "x", "card_type": "attack",
                "target_selector": "all_enemies",
                "effects": [{"effect": "x_attack", "value": 5}]
            }"#,
        )
        .unwrap();
        let card = Card::try_from(spec).unwrap();

        assert_eq!(card.cost, Cost::X);
        assert_eq!(card.target, TargetSelector::AllEnemies);
        assert!(card.playable);
        assert_eq!(card.effects, vec![Effect::XAttack { value: 5 }]);
    }
}
