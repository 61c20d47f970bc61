//! Property tests.
//!
//! These tests check invariants that must hold for any seed or input:
//! - Cards are never created or lost by drawing and reshuffling
//! - The hand never exceeds its limit
//! - Damage and block formulas never go negative
//! - Energy never goes negative after paying for a card
//! - A full battle always ends and restores the deck

use std::sync::Arc;

use proptest::prelude::*;

use deck_battle::battle::Battle;
use deck_battle::cards::{Card, CardType, Cost};
use deck_battle::combatants::{Combatant, Enemy, Player};
use deck_battle::core::{BattleConfig, GameRng};
use deck_battle::effects::{formula, Effect};
use deck_battle::intents::Intent;
use deck_battle::loader::Catalog;
use deck_battle::status::{BuffKind, DebuffKind};
use deck_battle::strategy::RandomPlayable;
use deck_battle::zones::Pile;

fn strike() -> Card {
    Card::new("strike", "Strike", Cost::Fixed(1), CardType::Attack)
        .with_effect(Effect::Attack { value: 6 })
}

fn battle(deck_size: usize, seed: u64, hand_limit: usize) -> Battle {
    Battle::new(
        Player::new("Hero", 50, 3),
        vec![Enemy::new("dummy", "Dummy", 1000)],
        vec![strike(); deck_size],
        Arc::new(Catalog::new()),
        GameRng::new(seed),
    )
    .with_config(BattleConfig::new().with_hand_limit(hand_limit))
}

fn combatant(strength: i32, dexterity: i32, weak: bool, frail: bool, vulnerable: bool) -> Combatant {
    let mut c = Combatant::new("C", 50);
    c.apply_buff(BuffKind::Strength, strength, None);
    c.apply_buff(BuffKind::Dexterity, dexterity, None);
    if weak {
        c.apply_debuff(DebuffKind::Weak, 1, None);
    }
    if frail {
        c.apply_debuff(DebuffKind::Frail, 1, None);
    }
    if vulnerable {
        c.apply_debuff(DebuffKind::Vulnerable, 1, None);
    }
    c
}

proptest! {
    /// Draws and discards move cards between piles without changing the total.
    #[test]
    fn prop_card_conservation(
        deck_size in 1usize..30,
        seed in any::<u64>(),
        ops in prop::collection::vec((0usize..8, any::<bool>()), 1..40),
    ) {
        let mut battle = battle(deck_size, seed, 10);
        for (n, discard_hand) in ops {
            battle.draw_cards(n);
            if discard_hand {
                battle.cleanup();
            }
            prop_assert_eq!(battle.piles().total(), deck_size);
        }
    }

    /// The hand never exceeds the configured limit.
    #[test]
    fn prop_hand_limit(
        deck_size in 1usize..40,
        limit in 1usize..12,
        draws in prop::collection::vec(0usize..15, 1..10),
        seed in any::<u64>(),
    ) {
        let mut battle = battle(deck_size, seed, limit);
        for n in draws {
            battle.draw_cards(n);
            prop_assert!(battle.piles().len(Pile::Hand) <= limit);
        }
    }

    /// Attack damage and block gain are never negative.
    #[test]
    fn prop_formulas_non_negative(
        base in -20i32..50,
        strength in -30i32..30,
        dexterity in -30i32..30,
        weak in any::<bool>(),
        frail in any::<bool>(),
        vulnerable in any::<bool>(),
    ) {
        let c = combatant(strength, dexterity, weak, frail, vulnerable);
        prop_assert!(formula::attack_damage(base, &c, &c) >= 0);
        prop_assert!(formula::block_gain(base, &c) >= 0);
    }

    /// Block absorbs first and never goes negative.
    #[test]
    fn prop_take_damage(hp in 1i32..100, block in 0i32..50, amount in 0i32..120) {
        let mut c = Combatant::new("C", hp).with_block(block);
        let lost = c.take_damage(amount);

        prop_assert!(c.block >= 0);
        prop_assert_eq!(lost, (amount - block).max(0));
        prop_assert_eq!(c.hp, hp - lost);
    }

    /// Paying for a card never leaves negative energy.
    #[test]
    fn prop_energy_non_negative(energy in 0i32..10, cost in 0u32..10, x in any::<bool>()) {
        let mut player = Player::new("Hero", 50, energy);
        let cost = if x { Cost::X } else { Cost::Fixed(cost) };
        let paid = player.pay(cost);

        prop_assert!(player.energy >= 0);
        prop_assert_eq!(paid + player.energy, energy);
    }

    /// Random battles finish within the turn cap and leave the deck as built.
    #[test]
    fn prop_battle_terminates(seed in any::<u64>(), deck_size in 5usize..20, enemy_hp in 1i32..200) {
        let deck = vec![strike(); deck_size];
        let louse = Enemy::new("louse", "Louse", enemy_hp).with_plan(vec![Intent::attack(7)]);
        let mut battle = Battle::new(
            Player::new("Hero", 60, 3),
            vec![louse],
            deck.clone(),
            Arc::new(Catalog::new()),
            GameRng::new(seed),
        )
        .with_config(BattleConfig::new().with_max_turns(30))
        .with_strategy(RandomPlayable);

        let summary = battle.run().unwrap();
        prop_assert!(summary.turns_taken <= 30);
        prop_assert_eq!(summary.turns.len() as u32, summary.turns_taken);
        if summary.win {
            prop_assert!(summary.final_hp > 0);
        }
        prop_assert_eq!(&battle.piles().deck, &deck);
    }
}
