//! Battle end conditions and the result summary.
//!
//! The battle asks a `VictoryCondition` after the player's turn and after
//! the enemies' turn. Victory is checked before defeat, so a round in which
//! both sides fall counts as a win.

use serde::{Deserialize, Serialize};

use super::log::TurnRecord;
use crate::combatants::{Enemy, Player};

/// How a battle ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BattleOutcome {
    Victory,
    Defeat,
    /// The round cap was reached with both sides standing.
    TurnLimit,
}

impl BattleOutcome {
    #[must_use]
    pub fn is_win(self) -> bool {
        self == BattleOutcome::Victory
    }
}

/// End-of-battle predicates.
///
/// ## Implementation Notes
///
/// - `is_victory` and `is_defeat` must be pure reads
/// - `evaluate` checks victory first; override it only to change that order
pub trait VictoryCondition {
    /// Check whether the player has won.
    fn is_victory(&self, player: &Player, enemies: &[Enemy], turn: u32) -> bool;

    /// Check whether the player has lost.
    fn is_defeat(&self, player: &Player, enemies: &[Enemy], turn: u32) -> bool;

    /// Returns `Some(outcome)` if the battle has ended, `None` if it continues.
    fn evaluate(&self, player: &Player, enemies: &[Enemy], turn: u32) -> Option<BattleOutcome> {
        if self.is_victory(player, enemies, turn) {
            Some(BattleOutcome::Victory)
        } else if self.is_defeat(player, enemies, turn) {
            Some(BattleOutcome::Defeat)
        } else {
            None
        }
    }
}

/// Win when every enemy is down, lose when the player is.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardVictory;

impl VictoryCondition for StandardVictory {
    fn is_victory(&self, _player: &Player, enemies: &[Enemy], _turn: u32) -> bool {
        enemies.iter().all(|e| !e.is_alive())
    }

    fn is_defeat(&self, player: &Player, _enemies: &[Enemy], _turn: u32) -> bool {
        !player.is_alive()
    }
}

/// Result of one finished battle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleSummary {
    pub final_hp: i32,
    pub turns_taken: u32,
    pub outcome: BattleOutcome,
    pub win: bool,
    /// Per-turn hand and action records.
    pub turns: Vec<TurnRecord>,
}
