//! Batch simulation.
//!
//! Runs one deck against one enemy group many times and collects the
//! per-battle turn records into a report that serializes to the JSON
//! shape consumed by `ActionStats`.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::battle::{Battle, TurnRecord};
use crate::combatants::Player;
use crate::core::{CardId, GameRng, GroupId, LoadError, SimConfig, SimError};
use crate::loader::Catalog;
use crate::strategy::{RandomPlayable, Strategy};

/// Player name used in simulated battles.
pub const PLAYER_NAME: &str = "Hero";

/// One simulated battle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRecord {
    /// Seed of the battle's RNG; rerunning with it replays the battle.
    pub seed: u64,
    pub final_hp: i32,
    pub turns_taken: u32,
    pub win: bool,
    pub turns: Vec<TurnRecord>,
}

/// Every battle of one batch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub deck_id: String,
    pub deck_name: String,
    /// Deck card ids in definition order.
    pub cards: Vec<CardId>,
    pub enemygroup_id: String,
    pub enemygroup_name: String,
    pub initial_hp: i32,
    pub simulations: Vec<SimulationRecord>,
}

impl SimulationReport {
    /// Number of won battles.
    #[must_use]
    pub fn wins(&self) -> usize {
        self.simulations.iter().filter(|s| s.win).count()
    }

    /// Fraction of battles won (0 when empty).
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.simulations.is_empty() {
            0.0
        } else {
            self.wins() as f64 / self.simulations.len() as f64
        }
    }

    /// Mean turns over won battles (0 when none were won).
    #[must_use]
    pub fn avg_turns_to_win(&self) -> f64 {
        let wins = self.wins();
        if wins == 0 {
            return 0.0;
        }
        let total: u64 = self
            .simulations
            .iter()
            .filter(|s| s.win)
            .map(|s| u64::from(s.turns_taken))
            .sum();
        total as f64 / wins as f64
    }
}

type StrategyFactory = Box<dyn Fn() -> Box<dyn Strategy>>;

/// Runs batches of battles from a shared catalog.
///
/// ## Example
///
/// ```
/// use std::sync::Arc;
/// use deck_battle::core::SimConfig;
/// use deck_battle::loader::{Catalog, CatalogSources};
/// use deck_battle::sim::Simulator;
///
/// let sources = CatalogSources {
///     cards: r#"[{"id": "1", "name": "Strike", "cost": 1, "card_type": "attack",
///                 "effects": [{"effect": "attack", "value": 6}]}]"#.into(),
///     enemies: r#"[{"id": "louse", "hp": 12, "intent_sq": [[{"type": "attack", "value": 5}]]}]"#.into(),
///     decks: r#"{"d1": {"name": "Strikes", "cards": ["1", "1", "1", "1", "1"]}}"#.into(),
///     groups: r#"{"g1": {"name": "Louse", "enemy_ids": ["louse"]}}"#.into(),
/// };
/// let catalog = Arc::new(Catalog::from_sources(&sources).unwrap());
///
/// let simulator = Simulator::new(catalog, SimConfig::new().with_simulations(5));
/// let report = simulator.run("d1", "g1").unwrap();
/// assert_eq!(report.simulations.len(), 5);
/// assert_eq!(report.wins(), 5);
/// ```
pub struct Simulator {
    catalog: Arc<Catalog>,
    config: SimConfig,
    strategy: StrategyFactory,
}

impl Simulator {
    /// Create a simulator that plays with `RandomPlayable`.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, config: SimConfig) -> Self {
        Self {
            catalog,
            config,
            strategy: Box::new(|| Box::new(RandomPlayable)),
        }
    }

    /// Use a different strategy; `make` is called once per battle.
    #[must_use]
    pub fn with_strategy<S, F>(mut self, make: F) -> Self
    where
        S: Strategy + 'static,
        F: Fn() -> S + 'static,
    {
        self.strategy = Box::new(move || Box::new(make()));
        self
    }

    #[must_use]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Run `config.simulations` battles of `deck_id` against `group_id`.
    ///
    /// Battle `i` gets the `i`-th fork of an RNG seeded with
    /// `config.seed`, so a batch is reproducible from its seed alone.
    pub fn run(&self, deck_id: &str, group_id: &str) -> Result<SimulationReport, SimError> {
        let deck = self
            .catalog
            .deck(deck_id)
            .ok_or_else(|| LoadError::UnknownDeck(deck_id.to_string()))?;
        let group = self
            .catalog
            .group(group_id)
            .ok_or_else(|| LoadError::UnknownGroup(group_id.to_string()))?;

        let mut report = SimulationReport {
            deck_id: deck_id.to_string(),
            deck_name: deck.name.clone(),
            cards: deck.cards.clone(),
            enemygroup_id: group_id.to_string(),
            enemygroup_name: group.name.clone(),
            initial_hp: self.config.player_hp,
            simulations: Vec::with_capacity(self.config.simulations as usize),
        };

        let mut base = GameRng::new(self.config.seed);
        for index in 0..self.config.simulations {
            let rng = base.fork();
            let record = self.run_one(deck_id, group_id, index, rng)?;
            report.simulations.push(record);
        }

        tracing::info!(
            deck = deck_id,
            group = group_id,
            battles = report.simulations.len(),
            wins = report.wins(),
            "simulation batch finished"
        );
        Ok(report)
    }

    /// Run a single battle with an explicit RNG.
    pub fn run_one(
        &self,
        deck_id: &str,
        group_id: &str,
        index: u32,
        rng: GameRng,
    ) -> Result<SimulationRecord, SimError> {
        let seed = rng.seed();
        let deck = self.catalog.build_deck(deck_id)?;
        let enemies = self.catalog.build_group(group_id, GroupId::new(0))?;
        let player = Player::new(PLAYER_NAME, self.config.player_hp, self.config.player_energy);

        let mut battle = Battle::new(player, enemies, deck, Arc::clone(&self.catalog), rng)
            .with_config(self.config.battle.clone());
        battle.set_strategy((self.strategy)());

        let summary = battle
            .run()
            .map_err(|source| SimError::Battle { index, seed, source })?;
        tracing::debug!(index, seed, win = summary.win, turns = summary.turns_taken, "battle done");

        Ok(SimulationRecord {
            seed,
            final_hp: summary.final_hp,
            turns_taken: summary.turns_taken,
            win: summary.win,
            turns: summary.turns,
        })
    }
}
