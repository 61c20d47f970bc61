//! The shape shared by the player and every enemy.
//!
//! `Combatant` holds hp, block, and both status ledgers, and implements
//! the mutations every damage or status source goes through: damage
//! intake, healing, block gain, buff and debuff application.

use serde::{Deserialize, Serialize};

use crate::status::{BuffKind, DebuffKind, StatusLedger};

/// Result of applying a debuff.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DebuffOutcome {
    Applied,
    /// Artifact absorbed it and lost one stack.
    Blocked,
}

/// Hp, block, and statuses of one participant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Combatant {
    /// Display name.
    pub name: String,
    pub hp: i32,
    pub max_hp: i32,
    pub block: i32,
    pub buffs: StatusLedger<BuffKind>,
    pub debuffs: StatusLedger<DebuffKind>,
}

impl Combatant {
    /// Create a combatant at full hp.
    #[must_use]
    pub fn new(name: impl Into<String>, hp: i32) -> Self {
        Self {
            name: name.into(),
            hp,
            max_hp: hp,
            block: 0,
            buffs: StatusLedger::new(),
            debuffs: StatusLedger::new(),
        }
    }

    /// Set current hp below the maximum (builder pattern).
    #[must_use]
    pub fn with_hp(mut self, hp: i32) -> Self {
        self.hp = hp;
        self
    }

    /// Set starting block (builder pattern).
    #[must_use]
    pub fn with_block(mut self, block: i32) -> Self {
        self.block = block;
        self
    }

    /// Check if hp is above zero.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Current Strength value (0 if none).
    #[must_use]
    pub fn strength(&self) -> i32 {
        self.buffs.value(BuffKind::Strength)
    }

    /// Current Dexterity value (0 if none).
    #[must_use]
    pub fn dexterity(&self) -> i32 {
        self.buffs.value(BuffKind::Dexterity)
    }

    /// Check for a buff entry.
    #[must_use]
    pub fn has_buff(&self, kind: BuffKind) -> bool {
        self.buffs.contains(kind)
    }

    /// Check for a debuff entry.
    #[must_use]
    pub fn has_debuff(&self, kind: DebuffKind) -> bool {
        self.debuffs.contains(kind)
    }

    /// Blockable damage intake.
    ///
    /// Block absorbs up to its size; the remainder comes off hp. Returns
    /// the hp actually lost.
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        let lost = (amount - self.block).max(0);
        self.hp -= lost;
        self.block = (self.block - amount).max(0);
        lost
    }

    /// Unblockable hp loss (Poison, Burn).
    pub fn lose_hp(&mut self, amount: i32) {
        self.hp -= amount;
    }

    /// Heal, clamped at max hp.
    pub fn heal(&mut self, amount: i32) {
        self.hp = (self.hp + amount).min(self.max_hp);
    }

    /// Add block.
    pub fn gain_block(&mut self, amount: i32) {
        self.block += amount;
    }

    /// Apply a buff with accumulating semantics.
    pub fn apply_buff(&mut self, kind: BuffKind, value: i32, duration: Option<i32>) {
        self.buffs.add_buff(kind, value, duration);
    }

    /// Apply a debuff unless Artifact absorbs it.
    pub fn apply_debuff(
        &mut self,
        kind: DebuffKind,
        duration: i32,
        value: Option<i32>,
    ) -> DebuffOutcome {
        let artifact = self.buffs.value(BuffKind::Artifact);
        if artifact > 0 {
            self.buffs.set_value(BuffKind::Artifact, artifact - 1);
            return DebuffOutcome::Blocked;
        }

        self.debuffs.add_debuff(kind, duration, value);
        DebuffOutcome::Applied
    }

    /// Start-of-turn upkeep shared by every combatant.
    ///
    /// Clears block unless `keep_block` or Blur is active, then ticks buffs
    /// (Regen heals) and debuffs (Poison hurts).
    pub fn begin_turn(&mut self, keep_block: bool) -> TurnUpkeep {
        if !keep_block && !self.has_buff(BuffKind::Blur) {
            self.block = 0;
        }

        let buffs = self.buffs.tick_start_of_turn();
        if buffs.heal != 0 {
            self.heal(buffs.heal);
        }

        let debuffs = self.debuffs.tick_start_of_turn();
        if debuffs.poison_damage != 0 {
            self.lose_hp(debuffs.poison_damage);
        }

        TurnUpkeep {
            healed: buffs.heal,
            poison_damage: debuffs.poison_damage,
        }
    }

    /// End-of-turn upkeep shared by every combatant.
    ///
    /// LoseStrength subtracts from Strength (if present) and is removed.
    /// Returns the amount of Strength lost.
    pub fn end_turn(&mut self) -> Option<i32> {
        let amount = self.debuffs.take_lose_strength()?;
        let strength = self.strength();
        if self.buffs.set_value(BuffKind::Strength, strength - amount) {
            Some(amount)
        } else {
            None
        }
    }
}

/// Hp changes produced by start-of-turn ticking.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnUpkeep {
    pub healed: i32,
    pub poison_damage: i32,
}
