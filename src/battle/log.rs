//! Battle event log and per-turn records.
//!
//! ## Sections
//!
//! - `BattleEvent`: One human-readable line per state change, in order
//! - `TurnRecord` / `ActionRecord`: The compact per-turn history that batch
//!   simulation reports and action statistics are built from

use serde::{Deserialize, Serialize};

use crate::core::CardId;
use crate::zones::Pile;

/// One recorded battle event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum BattleEvent {
    BattleStarted { deck_size: usize, enemies: Vec<String> },
    TurnStarted { turn: u32 },
    Drew { cards: Vec<String>, hand: Vec<String> },
    DrawBlocked,
    HandFull,
    Reshuffled { count: usize },
    Played { user: String, card: String, targets: Vec<String> },
    NoPlayableCards,
    Entangled,
    Damaged { target: String, amount: i32, hp: i32 },
    HpLost { target: String, amount: i32, source: String },
    Healed { target: String, amount: i32 },
    BlockGained { target: String, amount: i32 },
    BuffApplied { target: String, status: String },
    DebuffApplied { target: String, status: String },
    DebuffBlocked { target: String, status: String },
    PowerGained { power: String, value: i32 },
    StrengthLost { target: String, amount: i32 },
    Reaped { amount: i32 },
    CardCreated { card: String, pile: Pile },
    Exhausted { card: String },
    Burned { damage: i32 },
    ScriptedDeath { enemy: String, turn: u32 },
    Spawned { spawner: String, spawn: String, count: usize },
    PlayerTurnEnded { hp: i32, block: i32, hand: Vec<String> },
    EnemyTurnStarted { turn: u32 },
    Victory,
    Defeat,
    TurnLimit { turns: u32 },
}

impl std::fmt::Display for BattleEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BattleEvent::BattleStarted { deck_size, enemies } => {
                write!(f, "[Battle] {deck_size} cards vs {}", enemies.join(", "))
            }
            BattleEvent::TurnStarted { turn } => write!(f, "--- Turn {turn} ---"),
            BattleEvent::Drew { cards, hand } => write!(
                f,
                "[Draw] Drew: {} | Hand: {}",
                cards.join(", "),
                hand.join(", ")
            ),
            BattleEvent::DrawBlocked => f.write_str("[Draw] Prevented from drawing cards"),
            BattleEvent::HandFull => f.write_str("[Draw] Hand limit reached"),
            BattleEvent::Reshuffled { count } => {
                write!(f, "[Draw] Shuffled {count} discarded cards into the deck")
            }
            BattleEvent::Played { user, card, targets } => {
                if targets.is_empty() {
                    write!(f, "[Play] {user} plays {card} with no target")
                } else {
                    write!(f, "[Play] {user} plays {card} targeting {}", targets.join(", "))
                }
            }
            BattleEvent::NoPlayableCards => f.write_str("[Skip] No playable cards"),
            BattleEvent::Entangled => f.write_str("[Entangled] Attack cards cannot be played"),
            BattleEvent::Damaged { target, amount, hp } => {
                write!(f, "[Damage] {target} takes {amount} (hp {hp})")
            }
            BattleEvent::HpLost {
                target,
                amount,
                source,
            } => write!(f, "[{source}] {target} loses {amount} hp"),
            BattleEvent::Healed { target, amount } => write!(f, "[Heal] {target} heals {amount}"),
            BattleEvent::BlockGained { target, amount } => {
                write!(f, "[Block] {target} gains {amount} block")
            }
            BattleEvent::BuffApplied { target, status } => write!(f, "[Buff] {target} gains {status}"),
            BattleEvent::DebuffApplied { target, status } => {
                write!(f, "[Debuff] {target} receives {status}")
            }
            BattleEvent::DebuffBlocked { target, status } => {
                write!(f, "[Artifact] {target} negates {status}")
            }
            BattleEvent::PowerGained { power, value } => write!(f, "[Power] {power} +{value}"),
            BattleEvent::StrengthLost { target, amount } => {
                write!(f, "[EndTurn] {target} loses {amount} Strength")
            }
            BattleEvent::Reaped { amount } => write!(f, "[Effect] Reaped {amount}"),
            BattleEvent::CardCreated { card, pile } => write!(f, "[Effect] Created {card} in {pile}"),
            BattleEvent::Exhausted { card } => write!(f, "[Exhaust] {card}"),
            BattleEvent::Burned { damage } => write!(f, "[Burn] Player takes {damage}"),
            BattleEvent::ScriptedDeath { enemy, turn } => {
                write!(f, "[AutoDeath] {enemy} dies after turn {turn}")
            }
            BattleEvent::Spawned {
                spawner,
                spawn,
                count,
            } => write!(f, "[Spawn] {spawner} splits into {count} {spawn}"),
            BattleEvent::PlayerTurnEnded { hp, block, hand } => write!(
                f,
                "[EndTurn] Player hp {hp}, block {block} | Hand: {}",
                hand.join(", ")
            ),
            BattleEvent::EnemyTurnStarted { turn } => write!(f, "[Turn {turn}] Enemies act"),
            BattleEvent::Victory => f.write_str("[Battle] You win!"),
            BattleEvent::Defeat => f.write_str("[Battle] You lose!"),
            BattleEvent::TurnLimit { turns } => {
                write!(f, "[Battle] Stopped after {turns} turns")
            }
        }
    }
}

/// One card play.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionRecord {
    pub card: CardId,
    /// Target ids: enemy catalog ids, or `"player"`.
    pub targets: Vec<String>,
}

/// Everything the player saw and did in one turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    pub turn: u32,
    /// Hand after the start-of-turn draw.
    pub hand: Vec<CardId>,
    pub actions: Vec<ActionRecord>,
    /// Player hp at the end of the player's turn.
    pub hp_left: i32,
}

impl TurnRecord {
    /// Start a record for a turn.
    #[must_use]
    pub fn new(turn: u32, hand: Vec<CardId>) -> Self {
        Self {
            turn,
            hand,
            actions: Vec::new(),
            hp_left: 0,
        }
    }
}
