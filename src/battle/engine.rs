//! The turn engine.
//!
//! `Battle` is the aggregate root of one encounter: it owns the player,
//! the enemies, every card pile, the RNG, and the decision strategy, and
//! drives the round loop:
//!
//! ```text
//! turn += 1 -> player begin-turn -> draw -> decisions -> player end-turn
//!   -> check -> cleanup -> enemy turn -> check -> repeat
//! ```
//!
//! Effects and intents mutate the battle through `EffectResolver` and
//! `IntentExecutor`, which address combatants by `CombatantId` so no
//! reference into the battle is held across a mutation.

use std::sync::Arc;

use super::log::{ActionRecord, BattleEvent, TurnRecord};
use super::outcome::{BattleOutcome, BattleSummary, StandardVictory, VictoryCondition};
use crate::cards::{Card, CardType};
use crate::combatants::{Combatant, DebuffOutcome, Enemy, Player, TurnUpkeep};
use crate::core::{BattleConfig, BattleError, CardId, CombatantId, GameRng};
use crate::effects::{formula, Destination, EffectResolver};
use crate::intents::IntentExecutor;
use crate::loader::Catalog;
use crate::status::{BuffKind, DebuffKind, PowerKind};
use crate::strategy::{DecisionContext, FirstPlayable, Strategy};
use crate::zones::{Pile, Piles};

/// One encounter between the player and a group of enemies.
///
/// ## Example
///
/// ```
/// use std::sync::Arc;
/// use deck_battle::battle::{Battle, BattleOutcome};
/// use deck_battle::cards::{Card, CardType, Cost};
/// use deck_battle::combatants::{Enemy, Player};
/// use deck_battle::core::GameRng;
/// use deck_battle::effects::Effect;
/// use deck_battle::intents::Intent;
/// use deck_battle::loader::Catalog;
///
/// let strike = Card::new("1", "Strike", Cost::Fixed(1), CardType::Attack)
///     .with_effect(Effect::Attack { value: 6 });
/// let deck = vec![strike; 10];
/// let louse = Enemy::new("louse", "Louse", 12).with_plan(vec![Intent::attack(3)]);
///
/// let mut battle = Battle::new(
///     Player::new("Hero", 50, 3),
///     vec![louse],
///     deck,
///     Arc::new(Catalog::new()),
///     GameRng::new(7),
/// );
/// let summary = battle.run().unwrap();
///
/// assert_eq!(summary.outcome, BattleOutcome::Victory);
/// assert_eq!(summary.turns_taken, 1);
/// ```
pub struct Battle {
    pub(crate) player: Player,
    pub(crate) enemies: Vec<Enemy>,
    pub(crate) piles: Piles,
    pub(crate) turn: u32,
    pub(crate) rng: GameRng,
    pub(crate) config: BattleConfig,
    pub(crate) catalog: Arc<Catalog>,
    strategy: Box<dyn Strategy>,
    victory: Box<dyn VictoryCondition>,
    log: Vec<BattleEvent>,
    records: Vec<TurnRecord>,
    current: Option<TurnRecord>,
    outcome: Option<BattleOutcome>,
    started: bool,
}

impl std::fmt::Debug for Battle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Battle")
            .field("turn", &self.turn)
            .field("player", &self.player.stats.name)
            .field("enemies", &self.enemies.len())
            .field("strategy", &self.strategy.name())
            .field("outcome", &self.outcome)
            .finish_non_exhaustive()
    }
}

impl Battle {
    /// Create a battle with default rules, `FirstPlayable`, and
    /// `StandardVictory`.
    ///
    /// `deck` is taken with its last card on top.
    #[must_use]
    pub fn new(
        player: Player,
        enemies: Vec<Enemy>,
        deck: Vec<Card>,
        catalog: Arc<Catalog>,
        rng: GameRng,
    ) -> Self {
        Self {
            player,
            enemies,
            piles: Piles::new(deck),
            turn: 0,
            rng,
            config: BattleConfig::default(),
            catalog,
            strategy: Box::new(FirstPlayable),
            victory: Box::new(StandardVictory),
            log: Vec::new(),
            records: Vec::new(),
            current: None,
            outcome: None,
            started: false,
        }
    }

    /// Replace the rules (builder pattern).
    #[must_use]
    pub fn with_config(mut self, config: BattleConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the decision strategy (builder pattern).
    #[must_use]
    pub fn with_strategy(mut self, strategy: impl Strategy + 'static) -> Self {
        self.strategy = Box::new(strategy);
        self
    }

    /// Replace the end condition (builder pattern).
    #[must_use]
    pub fn with_victory_condition(mut self, victory: impl VictoryCondition + 'static) -> Self {
        self.victory = Box::new(victory);
        self
    }

    /// Swap the decision strategy mid-battle.
    pub fn set_strategy(&mut self, strategy: Box<dyn Strategy>) {
        self.strategy = strategy;
    }

    // === Accessors ===

    #[must_use]
    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    #[must_use]
    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    /// Mutable access to one enemy.
    pub fn enemy_mut(&mut self, index: usize) -> Option<&mut Enemy> {
        self.enemies.get_mut(index)
    }

    #[must_use]
    pub fn piles(&self) -> &Piles {
        &self.piles
    }

    pub fn piles_mut(&mut self) -> &mut Piles {
        &mut self.piles
    }

    /// Rounds started so far.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Every event recorded so far, in order.
    #[must_use]
    pub fn log(&self) -> &[BattleEvent] {
        &self.log
    }

    /// Finished player turns.
    #[must_use]
    pub fn records(&self) -> &[TurnRecord] {
        &self.records
    }

    /// The result, once decided.
    #[must_use]
    pub fn outcome(&self) -> Option<BattleOutcome> {
        self.outcome
    }

    /// Look up a combatant's shared stats.
    pub fn combatant(&self, id: CombatantId) -> Result<&Combatant, BattleError> {
        match id {
            CombatantId::Player => Ok(&self.player.stats),
            CombatantId::Enemy(idx) => self
                .enemies
                .get(idx)
                .map(|e| &e.stats)
                .ok_or(BattleError::UnknownCombatant(id)),
        }
    }

    /// Mutable lookup of a combatant's shared stats.
    pub fn combatant_mut(&mut self, id: CombatantId) -> Result<&mut Combatant, BattleError> {
        match id {
            CombatantId::Player => Ok(&mut self.player.stats),
            CombatantId::Enemy(idx) => self
                .enemies
                .get_mut(idx)
                .map(|e| &mut e.stats)
                .ok_or(BattleError::UnknownCombatant(id)),
        }
    }

    /// Append to the event log.
    pub fn record(&mut self, event: BattleEvent) {
        tracing::debug!(turn = self.turn, "{event}");
        self.log.push(event);
    }

    // === Round loop ===

    /// Shuffle the deck and raise innate cards. Idempotent.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;

        if self.config.shuffle_on_start {
            self.piles.shuffle_deck(&mut self.rng);
        }
        self.piles.raise_innate();

        let enemies = self.enemies.iter().map(|e| e.stats.name.clone()).collect();
        self.record(BattleEvent::BattleStarted {
            deck_size: self.piles.len(Pile::Deck),
            enemies,
        });
    }

    /// Play rounds until the battle ends, then restore the deck.
    ///
    /// The deck is restored even when a round fails.
    pub fn run(&mut self) -> Result<BattleSummary, BattleError> {
        self.start();
        let result = self.run_rounds();
        self.teardown();
        let outcome = result?;
        Ok(self.summary(outcome))
    }

    fn run_rounds(&mut self) -> Result<BattleOutcome, BattleError> {
        loop {
            if let Some(outcome) = self.play_round()? {
                return Ok(outcome);
            }
        }
    }

    /// Play one full round.
    ///
    /// Returns the outcome once the battle has ended; later calls keep
    /// returning it without playing.
    pub fn play_round(&mut self) -> Result<Option<BattleOutcome>, BattleError> {
        if let Some(outcome) = self.outcome {
            return Ok(Some(outcome));
        }
        self.start();

        if self.turn >= self.config.max_turns {
            tracing::warn!(turns = self.turn, "turn limit reached");
            self.record(BattleEvent::TurnLimit { turns: self.turn });
            self.finish(BattleOutcome::TurnLimit);
            return Ok(Some(BattleOutcome::TurnLimit));
        }

        self.turn += 1;
        self.record(BattleEvent::TurnStarted { turn: self.turn });

        self.begin_player_turn();
        self.player_decisions()?;
        self.end_player_turn();
        if let Some(outcome) = self.check_outcome() {
            return Ok(Some(outcome));
        }

        self.cleanup();
        self.enemy_turn()?;
        Ok(self.check_outcome())
    }

    /// Player start-of-turn: upkeep, Brutality, then the turn's draw.
    pub fn begin_player_turn(&mut self) {
        let upkeep = self.player.begin_turn();
        self.note_upkeep(CombatantId::Player, upkeep);

        let brutality = self.player.power(PowerKind::Brutality);
        if brutality > 0 {
            let lost = self.player.take_self_damage(brutality);
            self.record(BattleEvent::HpLost {
                target: self.player.stats.name.clone(),
                amount: lost,
                source: "Brutality".into(),
            });
            self.draw_cards(usize::try_from(brutality).unwrap_or(0));
        }

        self.draw_cards(self.config.draw_per_turn);

        let hand = self.piles.hand.iter().map(|c| c.id.clone()).collect();
        self.current = Some(TurnRecord::new(self.turn, hand));
    }

    /// Hand indices the player may play right now.
    #[must_use]
    pub fn playable_indices(&self) -> Vec<usize> {
        let attacks_allowed = self.player.can_play_attacks();
        self.piles
            .hand
            .iter()
            .enumerate()
            .filter(|(_, card)| {
                card.playable
                    && self.player.can_afford(card.cost)
                    && (attacks_allowed || !card.is_attack())
            })
            .map(|(idx, _)| idx)
            .collect()
    }

    fn player_decisions(&mut self) -> Result<(), BattleError> {
        for _ in 0..self.config.max_plays_per_turn {
            if self.decided() {
                return Ok(());
            }

            let playable = self.playable_indices();
            if playable.is_empty() {
                if !self.player.can_play_attacks() && self.piles.hand.iter().any(Card::is_attack) {
                    self.record(BattleEvent::Entangled);
                }
                self.record(BattleEvent::NoPlayableCards);
                return Ok(());
            }

            let ctx = DecisionContext {
                player: &self.player,
                enemies: &self.enemies,
                hand: &self.piles.hand,
                playable: &playable,
                turn: self.turn,
            };
            let Some(index) = self.strategy.choose_card(&ctx, &mut self.rng) else {
                return Ok(());
            };
            if !playable.contains(&index) {
                tracing::warn!(
                    strategy = self.strategy.name(),
                    index,
                    "strategy chose an unplayable card"
                );
                return Ok(());
            }
            let card = &self.piles.hand[index];
            let targets = self.strategy.choose_targets(card, &ctx, &mut self.rng)?;
            let Some(targets) = targets.filter(|t| !t.is_empty()) else {
                return Ok(());
            };

            self.play_card(index, &targets)?;
        }

        tracing::warn!(
            turn = self.turn,
            cap = self.config.max_plays_per_turn,
            "play cap reached"
        );
        Ok(())
    }

    /// Play the hand card at `index` against `targets`.
    ///
    /// Effects resolve in order, `Draw` and `GenerateCard` once, everything
    /// else once per target. The cost is debited after the effects, so an
    /// X card sees the energy it started with. The card then goes to
    /// exhaust, back into the deck, used powers, or discard.
    pub fn play_card(&mut self, index: usize, targets: &[CombatantId]) -> Result<(), BattleError> {
        let len = self.piles.hand.len();
        let card_name = self
            .piles
            .hand
            .get(index)
            .map(|c| c.name.clone())
            .ok_or(BattleError::HandIndex { index, len })?;
        if targets.is_empty() {
            return Err(BattleError::NoTargets { card: card_name });
        }
        for &target in targets {
            self.combatant(target)?;
        }

        let card = self
            .piles
            .take_from_hand(index)
            .ok_or(BattleError::HandIndex { index, len })?;

        let action = ActionRecord {
            card: card.id.clone(),
            targets: targets.iter().map(|&t| self.target_key(t)).collect(),
        };
        if let Some(current) = self.current.as_mut() {
            current.actions.push(action);
        }
        let target_names = targets.iter().map(|&t| self.name_of(t)).collect();
        self.record(BattleEvent::Played {
            user: self.player.stats.name.clone(),
            card: card.name.clone(),
            targets: target_names,
        });

        EffectResolver::apply_card_effects(self, &card.effects, CombatantId::Player, targets)?;
        self.player.pay(card.cost);

        if card.exhaust {
            self.exhaust_card(card);
        } else if card.shuffle_back {
            self.piles.insert_into_deck_randomly(card, &mut self.rng);
        } else if card.is_power() {
            self.piles.push(Pile::UsedPowers, card);
        } else {
            self.piles.push(Pile::Discard, card);
        }
        Ok(())
    }

    /// Player end-of-turn upkeep and the turn record.
    pub fn end_player_turn(&mut self) {
        if let Some(amount) = self.player.end_turn() {
            self.record(BattleEvent::StrengthLost {
                target: self.player.stats.name.clone(),
                amount,
            });
        }

        let hp = self.player.stats.hp;
        self.record(BattleEvent::PlayerTurnEnded {
            hp,
            block: self.player.stats.block,
            hand: self.hand_names(),
        });
        if let Some(mut record) = self.current.take() {
            record.hp_left = hp;
            self.records.push(record);
        }
    }

    /// End-of-turn hand cleanup.
    ///
    /// Burn cards hurt and are discarded, ethereal cards are exhausted,
    /// retained cards stay, everything else is discarded.
    pub fn cleanup(&mut self) {
        let hand = std::mem::take(&mut self.piles.hand);
        let mut ethereal = Vec::new();

        for card in hand {
            if card.name == self.config.burn_card_name {
                let damage = self.config.burn_damage;
                self.player.stats.lose_hp(damage);
                self.record(BattleEvent::Burned { damage });
                self.piles.push(Pile::Discard, card);
            } else if card.ethereal {
                ethereal.push(card);
            } else if card.retain {
                self.piles.hand.push(card);
            } else {
                self.piles.push(Pile::Discard, card);
            }
        }

        for card in ethereal {
            self.exhaust_card(card);
        }
    }

    /// Every enemy that was present when the pass began takes its turn.
    ///
    /// Enemies spawned during the pass act from the next round on.
    pub fn enemy_turn(&mut self) -> Result<(), BattleError> {
        self.record(BattleEvent::EnemyTurnStarted { turn: self.turn });

        let acting = self.enemies.len();
        for idx in 0..acting {
            if !self.enemies[idx].is_alive() {
                continue;
            }

            if self.enemies[idx].scripted_death_due(self.turn) {
                self.enemies[idx].stats.hp = 0;
                self.record(BattleEvent::ScriptedDeath {
                    enemy: self.enemies[idx].stats.name.clone(),
                    turn: self.turn,
                });
                continue;
            }

            let upkeep = self.enemies[idx].stats.begin_turn(false);
            self.note_upkeep(CombatantId::Enemy(idx), upkeep);
            if !self.enemies[idx].is_alive() {
                continue;
            }

            if self.enemies[idx].split_due() {
                IntentExecutor::split(self, idx)?;
                continue;
            }

            let plan = self.enemies[idx].next_plan();
            for intent in &plan {
                IntentExecutor::execute(self, idx, intent)?;
            }

            if let Some(amount) = self.enemies[idx].stats.end_turn() {
                self.record(BattleEvent::StrengthLost {
                    target: self.enemies[idx].stats.name.clone(),
                    amount,
                });
            }
        }
        Ok(())
    }

    /// Evaluate the end condition and latch the outcome.
    pub fn check_outcome(&mut self) -> Option<BattleOutcome> {
        if self.outcome.is_some() {
            return self.outcome;
        }
        let outcome = self
            .victory
            .evaluate(&self.player, &self.enemies, self.turn)?;
        match outcome {
            BattleOutcome::Victory => self.record(BattleEvent::Victory),
            BattleOutcome::Defeat => self.record(BattleEvent::Defeat),
            BattleOutcome::TurnLimit => self.record(BattleEvent::TurnLimit { turns: self.turn }),
        }
        self.finish(outcome);
        Some(outcome)
    }

    fn decided(&self) -> bool {
        self.victory
            .evaluate(&self.player, &self.enemies, self.turn)
            .is_some()
    }

    fn finish(&mut self, outcome: BattleOutcome) {
        self.outcome = Some(outcome);
        tracing::info!(
            outcome = ?outcome,
            turns = self.turn,
            hp = self.player.stats.hp,
            "battle finished"
        );
    }

    /// Restore the original deck and empty every other pile.
    pub fn teardown(&mut self) {
        self.current = None;
        self.piles.reset();
    }

    /// Summary of the battle so far.
    #[must_use]
    pub fn summary(&self, outcome: BattleOutcome) -> BattleSummary {
        BattleSummary {
            final_hp: self.player.stats.hp,
            turns_taken: self.turn,
            outcome,
            win: outcome.is_win(),
            turns: self.records.clone(),
        }
    }

    // === Pile operations ===

    /// Draw up to `n` cards. Returns how many were drawn.
    ///
    /// Stops early at the hand limit or when deck and discard are both
    /// empty. Drawing a status or curse card fires Evolve and FireBreath.
    pub fn draw_cards(&mut self, n: usize) -> usize {
        if !self.player.can_draw() {
            self.record(BattleEvent::DrawBlocked);
            return 0;
        }

        let mut drawn = Vec::new();
        for _ in 0..n {
            if self.piles.hand.len() >= self.config.hand_limit {
                self.record(BattleEvent::HandFull);
                break;
            }
            if self.piles.deck.is_empty() && !self.piles.discard.is_empty() {
                let count = self.piles.reshuffle_discard(&mut self.rng);
                self.record(BattleEvent::Reshuffled { count });
            }
            let Some(card) = self.piles.pop_top() else {
                break;
            };

            let card_type = card.card_type;
            drawn.push(card.name.clone());
            self.piles.hand.push(card);
            self.on_card_drawn(card_type);
        }

        if !drawn.is_empty() {
            self.record(BattleEvent::Drew {
                cards: drawn.clone(),
                hand: self.hand_names(),
            });
        }
        drawn.len()
    }

    fn on_card_drawn(&mut self, card_type: CardType) {
        if !card_type.is_status_or_curse() {
            return;
        }

        let evolve = self.player.power(PowerKind::Evolve);
        if evolve > 0 {
            self.draw_cards(usize::try_from(evolve).unwrap_or(0));
        }

        let fire_breath = self.player.power(PowerKind::FireBreath);
        if fire_breath > 0 {
            for idx in 0..self.enemies.len() {
                if self.enemies[idx].is_alive() {
                    let lost = self.enemies[idx].stats.take_damage(fire_breath);
                    self.record(BattleEvent::Damaged {
                        target: self.enemies[idx].stats.name.clone(),
                        amount: lost,
                        hp: self.enemies[idx].stats.hp,
                    });
                }
            }
        }
    }

    /// Move a card to the exhaust pile and fire exhaust powers.
    pub fn exhaust_card(&mut self, card: Card) {
        self.record(BattleEvent::Exhausted {
            card: card.name.clone(),
        });
        self.piles.push(Pile::Exhaust, card);

        let block = self.player.power(PowerKind::GainBlockOnExhaust);
        if block > 0 {
            self.player.stats.gain_block(block);
            self.record(BattleEvent::BlockGained {
                target: self.player.stats.name.clone(),
                amount: block,
            });
        }

        let draw = self.player.power(PowerKind::DrawOnExhaust);
        if draw > 0 {
            self.draw_cards(usize::try_from(draw).unwrap_or(0));
        }
    }

    /// Put fresh copies of a catalog card into the player's piles.
    pub fn create_cards(
        &mut self,
        id: &CardId,
        amount: usize,
        destination: Destination,
    ) -> Result<(), BattleError> {
        let template = self
            .catalog
            .instantiate_card(id)
            .ok_or_else(|| BattleError::UnknownCard(id.clone()))?;

        for _ in 0..amount {
            let card = template.clone();
            let name = card.name.clone();
            let pile = match destination {
                Destination::Hand => self.piles.add_to_hand(card, self.config.hand_limit),
                Destination::Draw => {
                    self.piles.insert_into_deck_randomly(card, &mut self.rng);
                    Pile::Deck
                }
                Destination::Discard => {
                    self.piles.push(Pile::Discard, card);
                    Pile::Discard
                }
            };
            self.record(BattleEvent::CardCreated { card: name, pile });
        }
        Ok(())
    }

    // === Combatant mutations shared by effects and intents ===

    /// Attack-formula damage from `attacker` to `defender`. Returns hp lost.
    pub fn attack(
        &mut self,
        attacker: CombatantId,
        defender: CombatantId,
        base: i32,
    ) -> Result<i32, BattleError> {
        let damage = formula::attack_damage(
            base,
            self.combatant(attacker)?,
            self.combatant(defender)?,
        );
        self.deal_damage(defender, damage)
    }

    /// Blockable damage with no modifiers. Returns hp lost.
    pub fn deal_damage(&mut self, target: CombatantId, amount: i32) -> Result<i32, BattleError> {
        let stats = self.combatant_mut(target)?;
        let lost = stats.take_damage(amount);
        let event = BattleEvent::Damaged {
            target: stats.name.clone(),
            amount: lost,
            hp: stats.hp,
        };
        self.record(event);
        Ok(lost)
    }

    /// Add block with no modifiers.
    pub fn gain_block(&mut self, target: CombatantId, amount: i32) -> Result<(), BattleError> {
        let stats = self.combatant_mut(target)?;
        stats.gain_block(amount);
        let event = BattleEvent::BlockGained {
            target: stats.name.clone(),
            amount,
        };
        self.record(event);
        Ok(())
    }

    /// Heal, clamped at max hp. A negative amount loses hp.
    pub fn heal(&mut self, target: CombatantId, amount: i32) -> Result<(), BattleError> {
        let stats = self.combatant_mut(target)?;
        stats.heal(amount);
        let event = BattleEvent::Healed {
            target: stats.name.clone(),
            amount,
        };
        self.record(event);
        Ok(())
    }

    pub fn apply_buff(
        &mut self,
        target: CombatantId,
        kind: BuffKind,
        value: i32,
        duration: Option<i32>,
    ) -> Result<(), BattleError> {
        let stats = self.combatant_mut(target)?;
        stats.apply_buff(kind, value, duration);
        let event = BattleEvent::BuffApplied {
            target: stats.name.clone(),
            status: kind.to_string(),
        };
        self.record(event);
        Ok(())
    }

    /// Apply a debuff; Artifact may absorb it.
    pub fn apply_debuff(
        &mut self,
        target: CombatantId,
        kind: DebuffKind,
        duration: i32,
        value: Option<i32>,
    ) -> Result<DebuffOutcome, BattleError> {
        let stats = self.combatant_mut(target)?;
        let outcome = stats.apply_debuff(kind, duration, value);
        let target = stats.name.clone();
        let status = kind.to_string();
        self.record(match outcome {
            DebuffOutcome::Applied => BattleEvent::DebuffApplied { target, status },
            DebuffOutcome::Blocked => BattleEvent::DebuffBlocked { target, status },
        });
        Ok(outcome)
    }

    // === Helpers ===

    fn note_upkeep(&mut self, id: CombatantId, upkeep: TurnUpkeep) {
        let name = self.name_of(id);
        if upkeep.healed > 0 {
            self.record(BattleEvent::Healed {
                target: name.clone(),
                amount: upkeep.healed,
            });
        }
        if upkeep.poison_damage > 0 {
            self.record(BattleEvent::HpLost {
                target: name,
                amount: upkeep.poison_damage,
                source: "Poison".into(),
            });
        }
    }

    /// Display name of a combatant.
    #[must_use]
    pub fn name_of(&self, id: CombatantId) -> String {
        self.combatant(id)
            .map(|c| c.name.clone())
            .unwrap_or_else(|_| id.to_string())
    }

    /// Id used in action records: the enemy's catalog id, or `"player"`.
    fn target_key(&self, id: CombatantId) -> String {
        match id {
            CombatantId::Player => "player".to_string(),
            CombatantId::Enemy(idx) => self
                .enemies
                .get(idx)
                .map_or_else(|| id.to_string(), |e| e.id.to_string()),
        }
    }

    fn hand_names(&self) -> Vec<String> {
        self.piles.hand.iter().map(|c| c.name.clone()).collect()
    }
}
