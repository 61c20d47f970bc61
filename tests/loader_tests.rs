//! Definition loading tests.
//!
//! These tests load the bundled `data/` directory and small inline
//! catalogs, and check that bad definitions are rejected at load time.

use std::path::PathBuf;

use deck_battle::cards::{CardType, Cost};
use deck_battle::core::{GroupId, LoadError};
use deck_battle::effects::{Destination, Effect, TargetSelector};
use deck_battle::intents::Intent;
use deck_battle::loader::{Catalog, CatalogSources};
use deck_battle::status::{BuffKind, PowerKind};

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

fn sources(cards: &str, enemies: &str) -> CatalogSources {
    CatalogSources {
        cards: cards.into(),
        enemies: enemies.into(),
        decks: "{}".into(),
        groups: "{}".into(),
    }
}

/// The bundled definitions load and validate.
#[test]
fn test_load_bundled_data() {
    let catalog = Catalog::load_dir(data_dir()).unwrap();

    assert_eq!(catalog.deck_ids(), vec!["ironclad_mix", "starter"]);
    assert!(catalog.group_ids().contains(&"large_slime"));

    let starter = catalog.build_deck("starter").unwrap();
    assert_eq!(starter.len(), 10);
    assert_eq!(starter.iter().filter(|c| c.name == "Strike").count(), 5);

    let whirlwind = catalog.instantiate_card(&"4".into()).unwrap();
    assert_eq!(whirlwind.cost, Cost::X);
    assert_eq!(whirlwind.target, TargetSelector::AllEnemies);

    let wound = catalog.instantiate_card(&"wound".into()).unwrap();
    assert!(!wound.playable);
    assert_eq!(wound.card_type, CardType::Status);
}

/// Enemy groups build fresh enemies that share the group id.
#[test]
fn test_build_group() {
    let catalog = Catalog::load_dir(data_dir()).unwrap();

    let gang = catalog.build_group("gremlin_gang", GroupId::new(7)).unwrap();
    assert_eq!(gang.len(), 2);
    assert!(gang[0].is_boss());
    assert!(gang.iter().all(|e| e.group == GroupId::new(7)));
    assert_eq!(
        gang[1].intents[0],
        vec![Intent::Block {
            value: 7,
            target: TargetSelector::Boss,
        }]
    );

    let sentry = catalog.enemy(&"sentry".into()).unwrap();
    assert_eq!(sentry.stats.buffs.value(BuffKind::Artifact), 1);
}

/// A missing directory reports which file could not be read.
#[test]
fn test_missing_dir() {
    let dir = std::env::temp_dir().join("deck_battle_missing_definitions");
    let err = Catalog::load_dir(&dir).unwrap_err();
    assert!(matches!(err, LoadError::Io { path, .. } if path.ends_with("cards.json")));
}

/// Files written to disk load the same as inline sources.
#[test]
fn test_load_dir_round_trip() {
    let dir = std::env::temp_dir().join(format!("deck_battle_loader_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join("cards.json"),
        r#"[{"id": "s", "name": "Strike", "cost": 1, "card_type": "attack",
             "effects": [{"effect": "attack", "value": 6}]}]"#,
    )
    .unwrap();
    std::fs::write(
        dir.join("enemies.json"),
        r#"[{"id": "louse", "hp": 10, "intent_sq": [[{"type": "attack", "value": 3}]]}]"#,
    )
    .unwrap();
    std::fs::write(dir.join("decks.json"), r#"{"d": {"name": "D", "cards": ["s"]}}"#).unwrap();
    std::fs::write(
        dir.join("enemy_groups.json"),
        r#"{"g": {"name": "G", "enemy_ids": ["louse"]}}"#,
    )
    .unwrap();

    let catalog = Catalog::load_dir(&dir).unwrap();
    std::fs::remove_dir_all(&dir).unwrap();

    assert_eq!(catalog.deck("d").unwrap().name, "D");
    let louse = catalog.instantiate_enemy(&"louse".into()).unwrap();
    assert_eq!(louse.stats.name, "louse");
    assert_eq!(louse.intents, vec![vec![Intent::attack(3)]]);
}

/// Every effect tag parses with its defaults.
#[test]
fn test_effect_defaults() {
    let cards = r#"[
        {"id": "a", "name": "A", "cost": 0, "card_type": "skill", "effects": [
            {"effect": "reaper"},
            {"effect": "power", "name": "Barricade"},
            {"effect": "status", "name": "NoDraw"},
            {"effect": "status", "name": "Calm", "temporary": false},
            {"effect": "exhaust_by_type", "exclude_types": ["skill"], "block_per_card": 2},
            {"effect": "double_block"},
            {"effect": "draw", "value": 2}
        ]},
        {"id": "b", "name": "B", "cost": 0, "card_type": "status"}
    ]"#;
    let catalog = Catalog::from_sources(&sources(cards, "[]")).unwrap();
    let effects = catalog.instantiate_card(&"a".into()).unwrap().effects;

    assert_eq!(effects[0], Effect::Reaper { ratio: 1.0, attack: 1 });
    assert_eq!(
        effects[1],
        Effect::Power {
            kind: PowerKind::Barricade,
            value: 1
        }
    );
    assert!(matches!(&effects[2], Effect::Status { name, lifetime } if name == "NoDraw"
        && *lifetime == deck_battle::combatants::FlagLifetime::Temporary));
    assert!(matches!(&effects[3], Effect::Status { lifetime, .. }
        if *lifetime == deck_battle::combatants::FlagLifetime::Permanent));
    assert_eq!(
        effects[4],
        Effect::ExhaustByType {
            keep: vec![CardType::Skill],
            block_per_card: 2,
            attack_per_card: 0,
        }
    );
    assert_eq!(effects[6], Effect::Draw { amount: 2 });
}

/// Unknown effect tags fail the whole load.
#[test]
fn test_unknown_effect_tag() {
    let cards = r#"[{"id": "a", "name": "A", "cost": 1, "card_type": "attack",
                     "effects": [{"effect": "teleport", "value": 3}]}]"#;
    let err = Catalog::from_sources(&sources(cards, "[]")).unwrap_err();
    assert!(matches!(err, LoadError::UnknownEffect(tag) if tag == "teleport"));
}

/// Unknown intent tags and status names fail the whole load.
#[test]
fn test_unknown_intent_and_status() {
    let enemies = r#"[{"id": "e", "hp": 5, "intent_sq": [[{"type": "dance"}]]}]"#;
    let err = Catalog::from_sources(&sources("[]", enemies)).unwrap_err();
    assert!(matches!(err, LoadError::UnknownIntent(tag) if tag == "dance"));

    let enemies = r#"[{"id": "e", "hp": 5, "buffs": {"Courage": {"value": 1}}}]"#;
    let err = Catalog::from_sources(&sources("[]", enemies)).unwrap_err();
    assert!(matches!(err, LoadError::UnknownStatus(name) if name == "Courage"));
}

/// Invalid costs and missing required fields are rejected.
#[test]
fn test_bad_card_fields() {
    let cards = r#"[{"id": "a", "name": "A", "cost": "free", "card_type": "skill"}]"#;
    let err = Catalog::from_sources(&sources(cards, "[]")).unwrap_err();
    assert!(matches!(err, LoadError::InvalidCost(cost) if cost == "free"));

    let cards = r#"[{"id": "a", "name": "A", "cost": 1, "card_type": "skill",
                     "effects": [{"effect": "debuff", "name": "Weak"}]}]"#;
    let err = Catalog::from_sources(&sources(cards, "[]")).unwrap_err();
    assert!(matches!(
        err,
        LoadError::MissingField {
            tag: "debuff",
            field: "duration"
        }
    ));
}

/// Cross references are checked after everything is parsed.
#[test]
fn test_dangling_references() {
    let cards = r#"[{"id": "a", "name": "A", "cost": 1, "card_type": "skill",
                     "effects": [{"effect": "generate_card", "card_id": "ghost"}]}]"#;
    let err = Catalog::from_sources(&sources(cards, "[]")).unwrap_err();
    assert!(matches!(err, LoadError::UnknownCard(id) if id.as_str() == "ghost"));

    let enemies = r#"[{"id": "e", "hp": 5, "intent_sq": [[{"type": "spawn", "summon_enemy_id": "ghost"}]]}]"#;
    let err = Catalog::from_sources(&sources("[]", enemies)).unwrap_err();
    assert!(matches!(err, LoadError::UnknownEnemy(id) if id.as_str() == "ghost"));

    let mut bad_deck = sources("[]", "[]");
    bad_deck.decks = r#"{"d": {"name": "D", "cards": ["nope"]}}"#.into();
    let err = Catalog::from_sources(&bad_deck).unwrap_err();
    assert!(matches!(err, LoadError::UnknownCard(id) if id.as_str() == "nope"));
}

/// Duplicate ids are rejected.
#[test]
fn test_duplicate_card() {
    let cards = r#"[{"id": "a", "name": "A", "cost": 1, "card_type": "skill"},
                    {"id": "a", "name": "B", "cost": 1, "card_type": "skill"}]"#;
    let err = Catalog::from_sources(&sources(cards, "[]")).unwrap_err();
    assert!(matches!(err, LoadError::Duplicate { kind: "card", .. }));
}

/// Intent tags fill in their default targets and amounts.
#[test]
fn test_intent_defaults() {
    let cards = r#"[{"id": "burn", "name": "Burn", "cost": 0, "card_type": "status", "playable": false}]"#;
    let enemies = r#"[
        {"id": "m", "hp": 5},
        {"id": "e", "hp": 50, "intent_sq": [[
            {"type": "insert_card", "card_id": "burn"},
            {"type": "spawn", "threshold": 10, "summon_enemy_id": "m"},
            {"type": "buff_boss", "name": "Strength", "value": 2}
        ]]}
    ]"#;
    let catalog = Catalog::from_sources(&sources(cards, enemies)).unwrap();
    let plan = &catalog.enemy(&"e".into()).unwrap().intents[0];

    assert_eq!(
        plan[0],
        Intent::InsertCard {
            card: "burn".into(),
            amount: 1,
            destination: Destination::Discard,
        }
    );
    assert_eq!(
        plan[1],
        Intent::Spawn {
            threshold: Some(10),
            enemy: "m".into(),
            amount: 2,
        }
    );
    assert_eq!(
        plan[2],
        Intent::Buff {
            kind: BuffKind::Strength,
            value: 2,
            duration: None,
            target: TargetSelector::Boss,
        }
    );
}
