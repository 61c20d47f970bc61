//! Battle and simulation configuration.
//!
//! - `BattleConfig`: Pile sizes, turn guards, and the burn card rule
//! - `SimConfig`: Batch simulation parameters
//!
//! Both are plain serde records with builder methods, so a front end can
//! read them from JSON or construct them in code.

use serde::{Deserialize, Serialize};

/// Rules for a single encounter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleConfig {
    /// Cards drawn at the start of each player turn.
    pub draw_per_turn: usize,

    /// Maximum hand size. Draws stop when the hand is full.
    pub hand_limit: usize,

    /// Hard cap on rounds. A battle reaching it ends with `TurnLimit`.
    pub max_turns: u32,

    /// Cap on cards played in one player turn.
    pub max_plays_per_turn: usize,

    /// Name of the status card that burns the player at end of turn.
    pub burn_card_name: String,

    /// Unblockable damage dealt per burn card left in hand.
    pub burn_damage: i32,

    /// Shuffle the deck when the battle starts.
    pub shuffle_on_start: bool,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            draw_per_turn: 5,
            hand_limit: 10,
            max_turns: 100,
            max_plays_per_turn: 64,
            burn_card_name: "Burn".to_string(),
            burn_damage: 2,
            shuffle_on_start: true,
        }
    }
}

impl BattleConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set cards drawn per turn.
    #[must_use]
    pub fn with_draw_per_turn(mut self, n: usize) -> Self {
        self.draw_per_turn = n;
        self
    }

    /// Set the hand limit.
    #[must_use]
    pub fn with_hand_limit(mut self, limit: usize) -> Self {
        self.hand_limit = limit;
        self
    }

    /// Set the round cap.
    #[must_use]
    pub fn with_max_turns(mut self, turns: u32) -> Self {
        self.max_turns = turns;
        self
    }

    /// Set the per-turn play cap.
    #[must_use]
    pub fn with_max_plays_per_turn(mut self, plays: usize) -> Self {
        self.max_plays_per_turn = plays;
        self
    }

    /// Keep the deck in its given order at battle start.
    #[must_use]
    pub fn without_shuffle(mut self) -> Self {
        self.shuffle_on_start = false;
        self
    }
}

/// Parameters for a batch of simulated battles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Number of battles to run.
    pub simulations: u32,

    /// Base seed. Each battle forks its own stream from it.
    pub seed: u64,

    /// Player starting and maximum hp.
    pub player_hp: i32,

    /// Player energy per turn.
    pub player_energy: i32,

    /// Rules applied to every battle.
    pub battle: BattleConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            simulations: 100,
            seed: 42,
            player_hp: 50,
            player_energy: 3,
            battle: BattleConfig::default(),
        }
    }
}

impl SimConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of battles.
    #[must_use]
    pub fn with_simulations(mut self, n: u32) -> Self {
        self.simulations = n;
        self
    }

    /// Set the base seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set player hp.
    #[must_use]
    pub fn with_player_hp(mut self, hp: i32) -> Self {
        self.player_hp = hp;
        self
    }

    /// Set the battle rules.
    #[must_use]
    pub fn with_battle(mut self, battle: BattleConfig) -> Self {
        self.battle = battle;
        self
    }

    /// Set player energy per turn.
    #[must_use]
    pub fn with_player_energy(mut self, energy: i32) -> Self {
        self.player_energy = energy;
        self
    }
}
