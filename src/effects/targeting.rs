//! Target selection.
//!
//! A `TargetSelector` is the token a card or intent carries
//! (`"single_enemy"`, `"boss"`, an enemy name, ...). Resolution turns it
//! into a concrete, ordered list of combatants.
//!
//! Selectors are relative to the actor: "enemy" means the opposing side,
//! so `single_enemy` used by an enemy picks the player.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::combatants::{Enemy, Player};
use crate::core::{BattleError, CombatantId, GameRng};

/// Resolved target list. Almost always one or a handful of combatants.
pub type Targets = SmallVec<[CombatantId; 4]>;

/// Named target selection rule.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TargetSelector {
    /// The actor itself.
    SelfTarget,
    /// Every live opponent, in order.
    AllEnemies,
    /// One uniformly random live opponent.
    RandomEnemy,
    /// The live opponent with the least hp (first on ties).
    LowestHp,
    /// The first live opponent.
    SingleEnemy,
    /// Live enemies tagged Boss. For an enemy actor, only its own group.
    Boss,
    /// The player, if alive.
    Player,
    /// Every live member of the actor's own side.
    AllAllies,
    /// Exact id or name match.
    Named(String),
}

impl From<&str> for TargetSelector {
    fn from(token: &str) -> Self {
        match token {
            "self" => TargetSelector::SelfTarget,
            "all_enemies" => TargetSelector::AllEnemies,
            "random_enemy" => TargetSelector::RandomEnemy,
            "lowest_hp" => TargetSelector::LowestHp,
            "single_enemy" => TargetSelector::SingleEnemy,
            "boss" => TargetSelector::Boss,
            "player" => TargetSelector::Player,
            "all_allies" => TargetSelector::AllAllies,
            other => TargetSelector::Named(other.to_string()),
        }
    }
}

impl From<String> for TargetSelector {
    fn from(token: String) -> Self {
        TargetSelector::from(token.as_str())
    }
}

impl From<TargetSelector> for String {
    fn from(selector: TargetSelector) -> Self {
        selector.to_string()
    }
}

impl std::fmt::Display for TargetSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let token = match self {
            TargetSelector::SelfTarget => "self",
            TargetSelector::AllEnemies => "all_enemies",
            TargetSelector::RandomEnemy => "random_enemy",
            TargetSelector::LowestHp => "lowest_hp",
            TargetSelector::SingleEnemy => "single_enemy",
            TargetSelector::Boss => "boss",
            TargetSelector::Player => "player",
            TargetSelector::AllAllies => "all_allies",
            TargetSelector::Named(name) => name,
        };
        f.write_str(token)
    }
}

impl TargetSelector {
    /// Resolve against the current battle participants.
    ///
    /// An empty result is not an error here; callers decide whether an
    /// empty list is fatal. A `Named` token that matches no combatant,
    /// alive or dead, is `UnknownSelector`.
    pub fn resolve(
        &self,
        actor: CombatantId,
        player: &Player,
        enemies: &[Enemy],
        rng: &mut GameRng,
    ) -> Result<Targets, BattleError> {
        let opponents = opponents_of(actor, player, enemies);

        let targets = match self {
            TargetSelector::SelfTarget => smallvec::smallvec![actor],
            TargetSelector::AllEnemies => opponents,
            TargetSelector::RandomEnemy => rng.choose(&opponents).copied().into_iter().collect(),
            TargetSelector::SingleEnemy => opponents.first().copied().into_iter().collect(),
            TargetSelector::LowestHp => {
                let mut best: Option<(CombatantId, i32)> = None;
                for id in opponents {
                    let hp = hp_of(id, player, enemies);
                    if best.map_or(true, |(_, best_hp)| hp < best_hp) {
                        best = Some((id, hp));
                    }
                }
                best.map(|(id, _)| id).into_iter().collect()
            }
            TargetSelector::Boss => {
                let group = actor
                    .enemy_index()
                    .and_then(|idx| enemies.get(idx))
                    .map(|e| e.group);
                enemies
                    .iter()
                    .enumerate()
                    .filter(|(_, e)| e.is_alive() && e.is_boss())
                    .filter(|(_, e)| group.map_or(true, |g| e.group == g))
                    .map(|(idx, _)| CombatantId::Enemy(idx))
                    .collect()
            }
            TargetSelector::Player => live_player(player),
            TargetSelector::AllAllies => match actor {
                CombatantId::Player => live_player(player),
                CombatantId::Enemy(_) => live_enemies(enemies),
            },
            TargetSelector::Named(name) => {
                let mut matched = false;
                let mut targets = Targets::new();
                if player.stats.name == *name {
                    matched = true;
                    if player.is_alive() {
                        targets.push(CombatantId::Player);
                    }
                }
                for (idx, enemy) in enemies.iter().enumerate() {
                    if enemy.id.as_str() == name.as_str() || enemy.stats.name == *name {
                        matched = true;
                        if enemy.is_alive() {
                            targets.push(CombatantId::Enemy(idx));
                        }
                    }
                }
                if !matched {
                    return Err(BattleError::UnknownSelector(name.clone()));
                }
                targets
            }
        };

        Ok(targets)
    }
}

/// Live members of the side opposing `actor`.
fn opponents_of(actor: CombatantId, player: &Player, enemies: &[Enemy]) -> Targets {
    match actor {
        CombatantId::Player => live_enemies(enemies),
        CombatantId::Enemy(_) => live_player(player),
    }
}

fn live_player(player: &Player) -> Targets {
    if player.is_alive() {
        smallvec::smallvec![CombatantId::Player]
    } else {
        Targets::new()
    }
}

fn live_enemies(enemies: &[Enemy]) -> Targets {
    enemies
        .iter()
        .enumerate()
        .filter(|(_, e)| e.is_alive())
        .map(|(idx, _)| CombatantId::Enemy(idx))
        .collect()
}

fn hp_of(id: CombatantId, player: &Player, enemies: &[Enemy]) -> i32 {
    match id {
        CombatantId::Player => player.stats.hp,
        CombatantId::Enemy(idx) => enemies.get(idx).map_or(0, |e| e.stats.hp),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combatants::BOSS_TAG;
    use crate::core::GroupId;

    fn setup() -> (Player, Vec<Enemy>) {
        let player = Player::new("Hero", 50, 3);
        let enemies = vec![
            Enemy::new("louse", "Louse", 12),
            Enemy::new("cultist", "Cultist", 8),
            Enemy::new("slaver", "Slaver", 8),
        ];
        (player, enemies)
    }

    fn resolve(selector: &str, actor: CombatantId, player: &Player, enemies: &[Enemy]) -> Targets {
        let mut rng = GameRng::new(1);
        TargetSelector::from(selector)
            .resolve(actor, player, enemies, &mut rng)
            .unwrap()
    }

    #[test]
    fn test_token_round_trip() {
        for token in ["self", "all_enemies", "random_enemy", "lowest_hp", "single_enemy", "boss", "player", "all_allies", "Cultist"] {
            assert_eq!(TargetSelector::from(token).to_string(), token);
        }
        assert_eq!(
            TargetSelector::from("Cultist"),
            TargetSelector::Named("Cultist".into())
        );
    }

    #[test]
    fn test_self_and_single() {
        let (player, enemies) = setup();
        assert_eq!(
            resolve("self", CombatantId::Player, &player, &enemies).as_slice(),
            &[CombatantId::Player]
        );
        assert_eq!(
            resolve("single_enemy", CombatantId::Player, &player, &enemies).as_slice(),
            &[CombatantId::Enemy(0)]
        );
    }

    #[test]
    fn test_dead_enemies_filtered() {
        let (player, mut enemies) = setup();
        enemies[0].stats.hp = 0;

        assert_eq!(
            resolve("single_enemy", CombatantId::Player, &player, &enemies).as_slice(),
            &[CombatantId::Enemy(1)]
        );
        assert_eq!(
            resolve("all_enemies", CombatantId::Player, &player, &enemies).as_slice(),
            &[CombatantId::Enemy(1), CombatantId::Enemy(2)]
        );
    }

    #[test]
    fn test_lowest_hp_ties_pick_first() {
        let (player, enemies) = setup();
        assert_eq!(
            resolve("lowest_hp", CombatantId::Player, &player, &enemies).as_slice(),
            &[CombatantId::Enemy(1)]
        );
    }

    #[test]
    fn test_random_enemy_is_live() {
        let (player, mut enemies) = setup();
        enemies[1].stats.hp = 0;
        let mut rng = GameRng::new(5);

        for _ in 0..20 {
            let targets = TargetSelector::RandomEnemy
                .resolve(CombatantId::Player, &player, &enemies, &mut rng)
                .unwrap();
            assert_eq!(targets.len(), 1);
            assert_ne!(targets[0], CombatantId::Enemy(1));
        }
    }

    #[test]
    fn test_enemy_actor_targets_player() {
        let (player, enemies) = setup();
        assert_eq!(
            resolve("single_enemy", CombatantId::Enemy(2), &player, &enemies).as_slice(),
            &[CombatantId::Player]
        );
        assert_eq!(
            resolve("all_allies", CombatantId::Enemy(2), &player, &enemies).len(),
            3
        );
    }

    #[test]
    fn test_boss_restricted_to_group_for_enemies() {
        let player = Player::new("Hero", 50, 3);
        let enemies = vec![
            Enemy::new("king", "King", 80).with_tag(BOSS_TAG).in_group(GroupId::new(1)),
            Enemy::new("guard", "Guard", 20).in_group(GroupId::new(1)),
            Enemy::new("stray", "Stray", 20).in_group(GroupId::new(2)),
        ];

        assert_eq!(
            resolve("boss", CombatantId::Enemy(1), &player, &enemies).as_slice(),
            &[CombatantId::Enemy(0)]
        );
        assert!(resolve("boss", CombatantId::Enemy(2), &player, &enemies).is_empty());
        assert_eq!(
            resolve("boss", CombatantId::Player, &player, &enemies).as_slice(),
            &[CombatantId::Enemy(0)]
        );
    }

    #[test]
    fn test_named_lookup() {
        let (player, mut enemies) = setup();
        assert_eq!(
            resolve("cultist", CombatantId::Player, &player, &enemies).as_slice(),
            &[CombatantId::Enemy(1)]
        );
        assert_eq!(
            resolve("Slaver", CombatantId::Player, &player, &enemies).as_slice(),
            &[CombatantId::Enemy(2)]
        );

        enemies[2].stats.hp = 0;
        assert!(resolve("Slaver", CombatantId::Player, &player, &enemies).is_empty());
    }

    #[test]
    fn test_unknown_name_is_error() {
        let (player, enemies) = setup();
        let mut rng = GameRng::new(1);
        let err = TargetSelector::from("Gremlin")
            .resolve(CombatantId::Player, &player, &enemies, &mut rng)
            .unwrap_err();
        assert!(matches!(err, BattleError::UnknownSelector(name) if name == "Gremlin"));
    }

    #[test]
    fn test_serde_as_token() {
        let selector: TargetSelector = serde_json::from_str("\"lowest_hp\"").unwrap();
        assert_eq!(selector, TargetSelector::LowestHp);
        assert_eq!(
            serde_json::to_string(&TargetSelector::SelfTarget).unwrap(),
            "\"self\""
        );
    }
}
