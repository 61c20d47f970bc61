//! Built-in strategies.
//!
//! - `FirstPlayable`: Plays the first playable card in hand order
//! - `RandomPlayable`: Plays a random playable card; single-target cards
//!   hit a random live enemy
//! - `Scripted`: Plays a queue of card ids fed from outside (tests,
//!   interactive front ends). An empty queue never plays anything.

use std::collections::VecDeque;

use super::{DecisionContext, Strategy};
use crate::cards::Card;
use crate::core::{BattleError, CardId, CombatantId, GameRng};
use crate::effects::{TargetSelector, Targets};

/// Always plays the first playable card.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstPlayable;

impl Strategy for FirstPlayable {
    fn name(&self) -> &'static str {
        "first_playable"
    }

    fn choose_card(&mut self, ctx: &DecisionContext<'_>, _rng: &mut GameRng) -> Option<usize> {
        ctx.playable.first().copied()
    }
}

/// Plays a uniformly random playable card.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomPlayable;

impl Strategy for RandomPlayable {
    fn name(&self) -> &'static str {
        "random_playable"
    }

    fn choose_card(&mut self, ctx: &DecisionContext<'_>, rng: &mut GameRng) -> Option<usize> {
        rng.choose(ctx.playable).copied()
    }

    fn choose_targets(
        &mut self,
        card: &Card,
        ctx: &DecisionContext<'_>,
        rng: &mut GameRng,
    ) -> Result<Option<Targets>, BattleError> {
        let selector = match card.target {
            TargetSelector::SingleEnemy => &TargetSelector::RandomEnemy,
            ref other => other,
        };
        let targets = selector.resolve(CombatantId::Player, ctx.player, ctx.enemies, rng)?;
        Ok((!targets.is_empty()).then_some(targets))
    }
}

/// One queued play for `Scripted`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptedPlay {
    pub card: CardId,
    /// Explicit targets. `None` resolves the card's own selector.
    pub targets: Option<Vec<CombatantId>>,
}

impl ScriptedPlay {
    /// Play a card at its default targets.
    #[must_use]
    pub fn card(card: impl Into<CardId>) -> Self {
        Self {
            card: card.into(),
            targets: None,
        }
    }

    /// Play a card at explicit targets.
    #[must_use]
    pub fn at(card: impl Into<CardId>, targets: Vec<CombatantId>) -> Self {
        Self {
            card: card.into(),
            targets: Some(targets),
        }
    }
}

/// Plays queued card ids in order.
///
/// When the front of the queue is not playable the turn ends and the play
/// stays queued for the next turn.
#[derive(Clone, Debug, Default)]
pub struct Scripted {
    queue: VecDeque<ScriptedPlay>,
}

impl Scripted {
    /// Create an empty script (plays nothing).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a script from a list of plays.
    #[must_use]
    pub fn from_plays(plays: impl IntoIterator<Item = ScriptedPlay>) -> Self {
        Self {
            queue: plays.into_iter().collect(),
        }
    }

    /// Queue another play.
    pub fn push(&mut self, play: ScriptedPlay) {
        self.queue.push_back(play);
    }

    /// Plays still queued.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl Strategy for Scripted {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn choose_card(&mut self, ctx: &DecisionContext<'_>, _rng: &mut GameRng) -> Option<usize> {
        let next = self.queue.front()?;
        ctx.playable_cards()
            .find(|(_, card)| card.id == next.card)
            .map(|(idx, _)| idx)
    }

    fn choose_targets(
        &mut self,
        card: &Card,
        ctx: &DecisionContext<'_>,
        rng: &mut GameRng,
    ) -> Result<Option<Targets>, BattleError> {
        let Some(play) = self.queue.pop_front() else {
            return Ok(None);
        };
        let targets: Targets = match play.targets {
            Some(ids) => ids.into_iter().collect(),
            None => card
                .target
                .resolve(CombatantId::Player, ctx.player, ctx.enemies, rng)?,
        };
        Ok((!targets.is_empty()).then_some(targets))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardType, Cost};
    use crate::combatants::{Enemy, Player};

    fn fixture() -> (Player, Vec<Enemy>, Vec<Card>) {
        let player = Player::new("Hero", 50, 3);
        let enemies = vec![Enemy::new("a", "A", 10), Enemy::new("b", "B", 10)];
        let hand = vec![
            Card::new("1", "Strike", Cost::Fixed(1), CardType::Attack),
            Card::new("2", "Defend", Cost::Fixed(1), CardType::Skill)
                .with_target(TargetSelector::SelfTarget),
        ];
        (player, enemies, hand)
    }

    #[test]
    fn test_first_playable() {
        let (player, enemies, hand) = fixture();
        let playable = [1];
        let ctx = DecisionContext {
            player: &player,
            enemies: &enemies,
            hand: &hand,
            playable: &playable,
            turn: 1,
        };
        let mut rng = GameRng::new(0);
        let mut strategy = FirstPlayable;

        assert_eq!(strategy.choose_card(&ctx, &mut rng), Some(1));
        let targets = strategy.choose_targets(&hand[1], &ctx, &mut rng).unwrap().unwrap();
        assert_eq!(targets.as_slice(), &[CombatantId::Player]);
    }

    #[test]
    fn test_no_playable_means_none() {
        let (player, enemies, hand) = fixture();
        let ctx = DecisionContext {
            player: &player,
            enemies: &enemies,
            hand: &hand,
            playable: &[],
            turn: 1,
        };
        let mut rng = GameRng::new(0);
        assert_eq!(FirstPlayable.choose_card(&ctx, &mut rng), None);
        assert_eq!(RandomPlayable.choose_card(&ctx, &mut rng), None);
    }

    #[test]
    fn test_random_playable_single_target_is_live_enemy() {
        let (player, mut enemies, hand) = fixture();
        enemies[0].stats.hp = 0;
        let playable = [0, 1];
        let ctx = DecisionContext {
            player: &player,
            enemies: &enemies,
            hand: &hand,
            playable: &playable,
            turn: 1,
        };
        let mut rng = GameRng::new(11);
        let mut strategy = RandomPlayable;

        for _ in 0..10 {
            let idx = strategy.choose_card(&ctx, &mut rng).unwrap();
            assert!(playable.contains(&idx));
            let targets = strategy.choose_targets(&hand[0], &ctx, &mut rng).unwrap().unwrap();
            assert_eq!(targets.as_slice(), &[CombatantId::Enemy(1)]);
        }
    }

    #[test]
    fn test_scripted_waits_for_playable_card() {
        let (player, enemies, hand) = fixture();
        let playable = [1];
        let ctx = DecisionContext {
            player: &player,
            enemies: &enemies,
            hand: &hand,
            playable: &playable,
            turn: 1,
        };
        let mut rng = GameRng::new(0);
        let mut strategy = Scripted::from_plays([ScriptedPlay::card("1"), ScriptedPlay::card("2")]);

        assert_eq!(strategy.choose_card(&ctx, &mut rng), None);
        assert_eq!(strategy.remaining(), 2);
    }

    #[test]
    fn test_scripted_explicit_targets() {
        let (player, enemies, hand) = fixture();
        let playable = [0, 1];
        let ctx = DecisionContext {
            player: &player,
            enemies: &enemies,
            hand: &hand,
            playable: &playable,
            turn: 1,
        };
        let mut rng = GameRng::new(0);
        let mut strategy = Scripted::new();
        strategy.push(ScriptedPlay::at("1", vec![CombatantId::Enemy(1)]));

        assert_eq!(strategy.choose_card(&ctx, &mut rng), Some(0));
        let targets = strategy.choose_targets(&hand[0], &ctx, &mut rng).unwrap().unwrap();
        assert_eq!(targets.as_slice(), &[CombatantId::Enemy(1)]);
        assert_eq!(strategy.remaining(), 0);
        assert_eq!(strategy.choose_card(&ctx, &mut rng), None);
    }
}
