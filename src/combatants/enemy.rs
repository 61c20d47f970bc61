//! Scripted enemies.
//!
//! An enemy cycles through a list of turn plans. Each acting turn it takes
//! the plan under its cursor and advances the cursor, wrapping around.

use super::stats::Combatant;
use crate::core::{EnemyId, GroupId};
use crate::intents::{Intent, SplitRule};

/// Tag marking an enemy as the boss of its group.
pub const BOSS_TAG: &str = "Boss";

/// A scripted opponent.
#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    /// Catalog id this enemy was built from.
    pub id: EnemyId,
    pub stats: Combatant,
    /// Turn plans, cycled in order.
    pub intents: Vec<Vec<Intent>>,
    /// Index of the next plan (taken modulo the plan count).
    pub cursor: usize,
    pub tags: Vec<String>,
    /// Turn on which the enemy dies instead of acting.
    pub die_after_turn: Option<u32>,
    pub group: GroupId,
    /// Pre-action spawn hook.
    pub split: Option<SplitRule>,
}

impl Enemy {
    /// Create an enemy with no plans.
    #[must_use]
    pub fn new(id: impl Into<EnemyId>, name: impl Into<String>, hp: i32) -> Self {
        Self {
            id: id.into(),
            stats: Combatant::new(name, hp),
            intents: Vec::new(),
            cursor: 0,
            tags: Vec::new(),
            die_after_turn: None,
            group: GroupId::default(),
            split: None,
        }
    }

    /// Append a turn plan (builder pattern).
    #[must_use]
    pub fn with_plan(mut self, plan: Vec<Intent>) -> Self {
        self.intents.push(plan);
        self
    }

    /// Add a tag (builder pattern).
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Die on the given turn (builder pattern).
    #[must_use]
    pub fn with_die_after_turn(mut self, turn: u32) -> Self {
        self.die_after_turn = Some(turn);
        self
    }

    /// Attach a split hook (builder pattern).
    #[must_use]
    pub fn with_split(mut self, split: SplitRule) -> Self {
        self.split = Some(split);
        self
    }

    /// Place in a spawn group (builder pattern).
    #[must_use]
    pub fn in_group(mut self, group: GroupId) -> Self {
        self.group = group;
        self
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.stats.is_alive()
    }

    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    #[must_use]
    pub fn is_boss(&self) -> bool {
        self.has_tag(BOSS_TAG)
    }

    /// Check whether the scripted death turn has been reached.
    #[must_use]
    pub fn scripted_death_due(&self, turn: u32) -> bool {
        self.die_after_turn.is_some_and(|limit| turn >= limit)
    }

    /// The plan the enemy will execute next, without advancing.
    #[must_use]
    pub fn upcoming_plan(&self) -> Option<&[Intent]> {
        if self.intents.is_empty() {
            return None;
        }
        Some(&self.intents[self.cursor % self.intents.len()])
    }

    /// Take the current plan and advance the cursor.
    ///
    /// Returns an empty plan if the enemy has none.
    pub fn next_plan(&mut self) -> Vec<Intent> {
        let plan = self.upcoming_plan().map(<[Intent]>::to_vec).unwrap_or_default();
        if !self.intents.is_empty() {
            self.cursor += 1;
        }
        plan
    }

    /// Check whether the split hook should fire this turn.
    #[must_use]
    pub fn split_due(&self) -> bool {
        self.split
            .as_ref()
            .is_some_and(|rule| rule.is_triggered(self.stats.hp, self.stats.max_hp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attack(value: i32) -> Intent {
        Intent::attack(value)
    }

    #[test]
    fn test_plans_cycle() {
        let mut enemy = Enemy::new("cultist", "Cultist", 30)
            .with_plan(vec![attack(1)])
            .with_plan(vec![attack(2)]);

        assert_eq!(enemy.next_plan(), vec![attack(1)]);
        assert_eq!(enemy.next_plan(), vec![attack(2)]);
        assert_eq!(enemy.next_plan(), vec![attack(1)]);
        assert_eq!(enemy.cursor, 3);
    }

    #[test]
    fn test_no_plans_is_empty() {
        let mut enemy = Enemy::new("dummy", "Dummy", 10);
        assert!(enemy.upcoming_plan().is_none());
        assert!(enemy.next_plan().is_empty());
        assert_eq!(enemy.cursor, 0);
    }

    #[test]
    fn test_scripted_death() {
        let enemy = Enemy::new("spark", "Spark", 5).with_die_after_turn(3);
        assert!(!enemy.scripted_death_due(2));
        assert!(enemy.scripted_death_due(3));
        assert!(enemy.scripted_death_due(4));
    }

    #[test]
    fn test_boss_tag() {
        let enemy = Enemy::new("king", "King", 100).with_tag(BOSS_TAG);
        assert!(enemy.is_boss());
        assert!(!Enemy::new("pawn", "Pawn", 10).is_boss());
    }

    #[test]
    fn test_split_due() {
        let mut slime = Enemy::new("slime", "Slime", 40).with_split(SplitRule {
            ratio: 0.5,
            spawn: "small_slime".into(),
            amount: 2,
        });
        assert!(!slime.split_due());

        slime.stats.hp = 20;
        assert!(slime.split_due());
    }
}
