//! Effect resolution.
//!
//! The `EffectResolver` applies a card's effects to a running battle.
//! Effects are addressed by `CombatantId`, and every mutation goes through
//! the battle's shared helpers so damage, block, and status changes are
//! logged the same way whether a card or an intent caused them.

use super::formula;
use super::Effect;
use crate::battle::{Battle, BattleEvent};
use crate::core::{BattleError, CombatantId};
use crate::status::BuffKind;

/// Applies card effects to a battle.
pub struct EffectResolver;

impl EffectResolver {
    /// Resolve a card's effects in order.
    ///
    /// Effects that fire once per play resolve against the first target;
    /// every other effect resolves once per target, in target order.
    pub fn apply_card_effects(
        battle: &mut Battle,
        effects: &[Effect],
        user: CombatantId,
        targets: &[CombatantId],
    ) -> Result<(), BattleError> {
        for effect in effects {
            if effect.fires_once() {
                Self::resolve(battle, effect, user, targets.first().copied().unwrap_or(user))?;
            } else {
                for &target in targets {
                    Self::resolve(battle, effect, user, target)?;
                }
            }
        }
        Ok(())
    }

    /// Resolve a single effect from `user` against `target`.
    ///
    /// Effects that only touch the user ignore `target`.
    pub fn resolve(
        battle: &mut Battle,
        effect: &Effect,
        user: CombatantId,
        target: CombatantId,
    ) -> Result<(), BattleError> {
        if effect.player_only() && !user.is_player() {
            return Err(BattleError::PlayerOnlyEffect {
                effect: effect.tag(),
                user,
            });
        }

        match effect {
            Effect::Attack { value } => {
                battle.attack(user, target, *value)?;
            }

            Effect::XAttack { value } => {
                // Hits read energy now; the card's cost is debited later.
                let hits = if user.is_player() {
                    battle.player.energy.max(0)
                } else {
                    0
                };
                for _ in 0..hits {
                    battle.attack(user, target, *value)?;
                }
            }

            Effect::BlockAttack => {
                let base = battle.combatant(user)?.block;
                battle.attack(user, target, base)?;
            }

            Effect::Reaper { ratio, attack } => {
                let before = battle.combatant(target)?.hp;
                battle.attack(user, target, *attack)?;
                let after = battle.combatant(target)?.hp;

                let reaped = (before - after.max(0)).max(0);
                let heal = (f64::from(reaped) * ratio).floor() as i32;
                battle.record(BattleEvent::Reaped { amount: reaped });
                if heal > 0 {
                    battle.heal(user, heal)?;
                }
            }

            Effect::Block { value } => {
                let gain = formula::block_gain(*value, battle.combatant(user)?);
                battle.gain_block(user, gain)?;
            }

            Effect::DoubleBlock => {
                let current = battle.combatant(user)?.block;
                battle.gain_block(user, current)?;
            }

            Effect::Buff {
                kind,
                value,
                duration,
            } => {
                battle.apply_buff(target, *kind, *value, *duration)?;
            }

            Effect::Debuff {
                kind,
                duration,
                value,
            } => {
                battle.apply_debuff(target, *kind, *duration, *value)?;
            }

            Effect::DoubleStrength => {
                let stats = battle.combatant_mut(user)?;
                let strength = stats.strength();
                if stats.has_buff(BuffKind::Strength) && strength > 0 {
                    stats.buffs.set_value(BuffKind::Strength, strength * 2);
                }
            }

            Effect::Draw { amount } => {
                battle.draw_cards(*amount);
            }

            Effect::Energy { value } => {
                battle.player.energy += value;
            }

            Effect::Hp { value } => {
                battle.heal(user, *value)?;
            }

            Effect::Power { kind, value } => {
                battle.player.add_power(*kind, *value);
                battle.record(BattleEvent::PowerGained {
                    power: kind.to_string(),
                    value: *value,
                });
            }

            Effect::Status { name, lifetime } => {
                battle.player.set_flag(name.clone(), *lifetime);
            }

            Effect::ExhaustByType {
                keep,
                block_per_card,
                attack_per_card,
            } => {
                let exhausted = battle
                    .piles
                    .drain_hand_where(|card| !keep.contains(&card.card_type));
                let count = i32::try_from(exhausted.len()).unwrap_or(i32::MAX);
                for card in exhausted {
                    battle.exhaust_card(card);
                }

                let block = count * block_per_card;
                if block != 0 {
                    battle.gain_block(user, block)?;
                }
                if *attack_per_card > 0 {
                    battle.attack(user, target, count * attack_per_card)?;
                }
            }

            Effect::GenerateCard {
                card,
                amount,
                destination,
            } => {
                battle.create_cards(card, *amount, *destination)?;
            }
        }

        Ok(())
    }
}
