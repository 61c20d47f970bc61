//! Action statistics over simulation reports.
//!
//! Counts which card was played at which targets for each
//! `(turn, sorted hand)` situation, and ranks the plays available in a
//! live hand by how often they were chosen in past (winning) battles.
//! When the exact hand was never seen, the counts for the turn number
//! alone are used instead.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::runner::SimulationReport;
use crate::battle::TurnRecord;
use crate::cards::Card;
use crate::core::CardId;

/// A card id with its sorted target ids.
pub type ActionKey = (CardId, Vec<String>);

/// One ranked suggestion for a live hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Index of the suggested card in the hand.
    pub hand_index: usize,
    pub card: CardId,
    /// Target ids as recorded: enemy catalog ids or `"player"`.
    pub targets: Vec<String>,
    /// Times this play was seen.
    pub count: u32,
}

/// Play counts keyed by situation.
#[derive(Clone, Debug, Default)]
pub struct ActionStats {
    by_hand: FxHashMap<String, FxHashMap<ActionKey, u32>>,
    by_turn: FxHashMap<u32, FxHashMap<ActionKey, u32>>,
}

impl ActionStats {
    /// Create empty statistics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every play in a report. With `only_wins`, lost battles are
    /// skipped.
    #[must_use]
    pub fn from_report(report: &SimulationReport, only_wins: bool) -> Self {
        let mut stats = Self::new();
        for sim in &report.simulations {
            if only_wins && !sim.win {
                continue;
            }
            for turn in &sim.turns {
                stats.record_turn(turn);
            }
        }
        stats
    }

    /// Count the plays of one turn.
    pub fn record_turn(&mut self, turn: &TurnRecord) {
        let key = Self::situation_key(turn.turn, &turn.hand);
        for action in &turn.actions {
            let mut targets = action.targets.clone();
            targets.sort_unstable();
            let action_key = (action.card.clone(), targets);

            *self
                .by_hand
                .entry(key.clone())
                .or_default()
                .entry(action_key.clone())
                .or_insert(0) += 1;
            *self
                .by_turn
                .entry(turn.turn)
                .or_default()
                .entry(action_key)
                .or_insert(0) += 1;
        }
    }

    /// `"turn=N|hand=a,b,c"` with the hand ids sorted.
    #[must_use]
    pub fn situation_key(turn: u32, hand: &[CardId]) -> String {
        let mut ids: Vec<&str> = hand.iter().map(CardId::as_str).collect();
        ids.sort_unstable();
        format!("turn={turn}|hand={}", ids.join(","))
    }

    /// Distinct situations seen.
    #[must_use]
    pub fn situations(&self) -> usize {
        self.by_hand.len()
    }

    /// Check if nothing has been counted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_hand.is_empty()
    }

    /// Counts for an exact turn and hand.
    #[must_use]
    pub fn counts(&self, turn: u32, hand: &[CardId]) -> Option<&FxHashMap<ActionKey, u32>> {
        self.by_hand.get(&Self::situation_key(turn, hand))
    }

    /// Rank the plays available in `hand`, most frequent first.
    ///
    /// Only plays whose card is in the hand are returned; each points at
    /// the first hand card with that id. Ties break on card id, then
    /// targets.
    #[must_use]
    pub fn rank(&self, turn: u32, hand: &[Card]) -> Vec<Recommendation> {
        let ids: Vec<CardId> = hand.iter().map(|c| c.id.clone()).collect();

        let exact = self
            .counts(turn, &ids)
            .map(|counts| Self::rank_counts(counts, hand))
            .unwrap_or_default();
        if !exact.is_empty() {
            return exact;
        }

        self.by_turn
            .get(&turn)
            .map(|counts| Self::rank_counts(counts, hand))
            .unwrap_or_default()
    }

    fn rank_counts(counts: &FxHashMap<ActionKey, u32>, hand: &[Card]) -> Vec<Recommendation> {
        let mut ranked: Vec<(&ActionKey, u32)> = counts.iter().map(|(k, &n)| (k, n)).collect();
        ranked.sort_by(|(ka, na), (kb, nb)| nb.cmp(na).then_with(|| ka.cmp(kb)));

        ranked
            .into_iter()
            .filter_map(|((card, targets), count)| {
                let hand_index = hand.iter().position(|c| c.id == *card)?;
                Some(Recommendation {
                    hand_index,
                    card: card.clone(),
                    targets: targets.clone(),
                    count,
                })
            })
            .collect()
    }
}
