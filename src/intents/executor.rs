//! Intent execution.
//!
//! Runs one scripted enemy action against the battle. Targets resolve
//! from the acting enemy's point of view; an intent whose selector finds
//! nobody (the player is already down, the boss is dead) does nothing.

use super::Intent;
use crate::battle::{Battle, BattleEvent};
use crate::core::{BattleError, CombatantId, EnemyId};
use crate::effects::{formula, TargetSelector, Targets};

/// Executes enemy intents.
pub struct IntentExecutor;

impl IntentExecutor {
    /// Execute one intent for the enemy at `actor`.
    pub fn execute(battle: &mut Battle, actor: usize, intent: &Intent) -> Result<(), BattleError> {
        let user = CombatantId::Enemy(actor);

        match intent {
            Intent::Attack { value, target } => {
                for t in Self::targets(battle, user, target)? {
                    battle.attack(user, t, *value)?;
                }
            }

            Intent::Block { value, target } => {
                for t in Self::targets(battle, user, target)? {
                    let gain = formula::block_gain(*value, battle.combatant(t)?);
                    battle.gain_block(t, gain)?;
                }
            }

            Intent::Buff {
                kind,
                value,
                duration,
                target,
            } => {
                for t in Self::targets(battle, user, target)? {
                    battle.apply_buff(t, *kind, *value, *duration)?;
                }
            }

            Intent::Debuff {
                kind,
                duration,
                value,
                target,
            } => {
                for t in Self::targets(battle, user, target)? {
                    battle.apply_debuff(t, *kind, *duration, *value)?;
                }
            }

            Intent::Heal { value, target } => {
                for t in Self::targets(battle, user, target)? {
                    battle.heal(t, *value)?;
                }
            }

            Intent::InsertCard {
                card,
                amount,
                destination,
            } => {
                battle.create_cards(card, *amount, *destination)?;
            }

            Intent::Spawn {
                threshold,
                enemy,
                amount,
            } => {
                let hp = battle.combatant(user)?.hp;
                if threshold.map_or(true, |limit| hp <= limit) {
                    Self::spawn(battle, actor, enemy, *amount)?;
                }
            }
        }

        Ok(())
    }

    /// Run the split hook of the enemy at `actor`, if it has one.
    pub fn split(battle: &mut Battle, actor: usize) -> Result<(), BattleError> {
        let Some(rule) = battle.enemies.get(actor).and_then(|e| e.split.clone()) else {
            return Ok(());
        };
        Self::spawn(battle, actor, &rule.spawn, rule.amount)
    }

    /// Replace the enemy at `spawner` with `amount` fresh catalog enemies.
    ///
    /// Spawns inherit the spawner's current hp and group and are appended
    /// to the enemy list. The spawner's hp drops to 0.
    pub fn spawn(
        battle: &mut Battle,
        spawner: usize,
        enemy: &EnemyId,
        amount: usize,
    ) -> Result<(), BattleError> {
        let template = battle
            .catalog
            .instantiate_enemy(enemy)
            .ok_or_else(|| BattleError::UnknownEnemy(enemy.clone()))?;

        let parent = battle
            .enemies
            .get_mut(spawner)
            .ok_or(BattleError::UnknownCombatant(CombatantId::Enemy(spawner)))?;
        let (hp, group) = (parent.stats.hp, parent.group);
        parent.stats.hp = 0;
        let spawner_name = parent.stats.name.clone();

        for _ in 0..amount {
            let mut child = template.clone().in_group(group);
            child.stats.hp = hp;
            battle.enemies.push(child);
        }

        battle.record(BattleEvent::Spawned {
            spawner: spawner_name,
            spawn: template.stats.name,
            count: amount,
        });
        Ok(())
    }

    fn targets(
        battle: &mut Battle,
        user: CombatantId,
        selector: &TargetSelector,
    ) -> Result<Targets, BattleError> {
        selector.resolve(user, &battle.player, &battle.enemies, &mut battle.rng)
    }
}
