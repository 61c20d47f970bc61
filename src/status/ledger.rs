//! Per-combatant status storage and turn ticking.
//!
//! A `StatusLedger` maps a status kind to a `StatusEntry` holding an
//! optional value and an optional duration. The two are independent:
//! Strength usually has a value and no duration (it never expires),
//! Weak has a duration, Poison counts down through its value.
//!
//! ## Accumulation
//!
//! - Buffs: value always accumulates (created at 0); a supplied duration
//!   accumulates too (created if absent).
//! - Debuffs: duration always accumulates (created at 0); a supplied value
//!   accumulates too.
//!
//! Artifact suppression lives on the combatant, which sees both ledgers.
//!
//! ## Ticking
//!
//! `tick_start_of_turn` runs once per owner turn. It returns what the
//! owner must apply to its own hp (Regen healing, Poison damage) rather
//! than touching hp itself.

use std::collections::BTreeMap;

use super::kinds::{BuffKind, DebuffKind};

/// One status: value and duration, each optional.
///
/// An entry with `duration: None` never expires on its own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StatusEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<i32>,
}

impl StatusEntry {
    /// Entry with a value and no duration.
    #[must_use]
    pub const fn with_value(value: i32) -> Self {
        Self {
            value: Some(value),
            duration: None,
        }
    }

    /// Entry with a duration and no value.
    #[must_use]
    pub const fn with_duration(duration: i32) -> Self {
        Self {
            value: None,
            duration: Some(duration),
        }
    }

    /// Set the duration (builder pattern).
    #[must_use]
    pub const fn and_duration(mut self, duration: i32) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Stored value, or 0 when absent.
    #[must_use]
    pub fn value_or_zero(&self) -> i32 {
        self.value.unwrap_or(0)
    }

    /// Decrement the duration if there is one.
    ///
    /// Returns `false` when the entry has expired and should be removed.
    fn tick_duration(&mut self) -> bool {
        match self.duration.as_mut() {
            Some(d) => {
                *d -= 1;
                *d > 0
            }
            None => true,
        }
    }
}

/// Ordered map of status kind to entry.
///
/// Iteration follows the kind's declaration order, which keeps ticking
/// deterministic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusLedger<K: Ord> {
    entries: BTreeMap<K, StatusEntry>,
}

impl<K: Ord> Default for StatusLedger<K> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<K: Ord + Copy> StatusLedger<K> {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get an entry.
    #[must_use]
    pub fn get(&self, kind: K) -> Option<&StatusEntry> {
        self.entries.get(&kind)
    }

    /// Check whether an entry exists (regardless of its value).
    #[must_use]
    pub fn contains(&self, kind: K) -> bool {
        self.entries.contains_key(&kind)
    }

    /// The entry's value, or 0 if absent or valueless.
    #[must_use]
    pub fn value(&self, kind: K) -> i32 {
        self.entries.get(&kind).map_or(0, StatusEntry::value_or_zero)
    }

    /// Replace an entry outright.
    pub fn insert(&mut self, kind: K, entry: StatusEntry) {
        self.entries.insert(kind, entry);
    }

    /// Remove an entry, returning it.
    pub fn remove(&mut self, kind: K) -> Option<StatusEntry> {
        self.entries.remove(&kind)
    }

    /// Overwrite the value of an existing entry.
    ///
    /// Returns `false` (and does nothing) if the entry is absent.
    pub fn set_value(&mut self, kind: K, value: i32) -> bool {
        match self.entries.get_mut(&kind) {
            Some(entry) => {
                entry.value = Some(value);
                true
            }
            None => false,
        }
    }

    /// Accumulate with buff semantics.
    pub fn add_buff(&mut self, kind: K, value: i32, duration: Option<i32>) {
        let entry = self.entries.entry(kind).or_default();
        entry.value = Some(entry.value_or_zero() + value);
        if let Some(d) = duration {
            entry.duration = Some(entry.duration.unwrap_or(0) + d);
        }
    }

    /// Accumulate with debuff semantics.
    pub fn add_debuff(&mut self, kind: K, duration: i32, value: Option<i32>) {
        let entry = self.entries.entry(kind).or_default();
        entry.duration = Some(entry.duration.unwrap_or(0) + duration);
        if let Some(v) = value {
            entry.value = Some(entry.value_or_zero() + v);
        }
    }

    /// Iterate entries in kind order.
    pub fn iter(&self) -> impl Iterator<Item = (K, &StatusEntry)> {
        self.entries.iter().map(|(k, e)| (*k, e))
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the ledger is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn keys(&self) -> Vec<K> {
        self.entries.keys().copied().collect()
    }
}

/// What the owner must apply after a buff tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuffTick {
    /// Total Regen healing.
    pub heal: i32,
}

/// What the owner must apply after a debuff tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DebuffTick {
    /// Unblockable Poison damage.
    pub poison_damage: i32,
}

impl StatusLedger<BuffKind> {
    /// Start-of-turn buff tick.
    ///
    /// Regen and StrengthGain fire first, then the entry's duration
    /// decays. Entries without a duration persist.
    pub fn tick_start_of_turn(&mut self) -> BuffTick {
        let mut tick = BuffTick::default();

        for kind in self.keys() {
            let Some(entry) = self.entries.get(&kind).copied() else {
                continue;
            };

            match kind {
                BuffKind::Regen => tick.heal += entry.value_or_zero(),
                BuffKind::StrengthGain => {
                    self.add_buff(BuffKind::Strength, entry.value_or_zero(), None);
                }
                _ => {}
            }

            let keep = self
                .entries
                .get_mut(&kind)
                .map_or(false, StatusEntry::tick_duration);
            if !keep {
                self.entries.remove(&kind);
            }
        }

        tick
    }
}

impl StatusLedger<DebuffKind> {
    /// Start-of-turn debuff tick.
    ///
    /// Poison deals its value and loses one point, ignoring duration.
    /// Every other debuff decays by duration.
    pub fn tick_start_of_turn(&mut self) -> DebuffTick {
        let mut tick = DebuffTick::default();

        for kind in self.keys() {
            let Some(entry) = self.entries.get_mut(&kind) else {
                continue;
            };

            let keep = if kind == DebuffKind::Poison {
                let value = entry.value_or_zero();
                tick.poison_damage += value;
                entry.value = Some(value - 1);
                value - 1 > 0
            } else {
                entry.tick_duration()
            };

            if !keep {
                self.entries.remove(&kind);
            }
        }

        tick
    }

    /// Remove LoseStrength entirely, returning its value.
    ///
    /// Any remaining duration is discarded along with it.
    pub fn take_lose_strength(&mut self) -> Option<i32> {
        self.entries
            .remove(&DebuffKind::LoseStrength)
            .map(|entry| entry.value_or_zero())
    }
}
