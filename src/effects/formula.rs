//! Damage and block formulas.
//!
//! Every attack, from cards, intents, or powers that route through the
//! attack formula, uses `attack_damage`; every block gain uses
//! `block_gain`. Modifier order matters because each step floors.

use crate::combatants::Combatant;
use crate::status::{BuffKind, DebuffKind};

/// Attack damage before block.
///
/// `base + Strength`, Weak attacker ×0.75 (floor), Intangible defender
/// caps at 1, Vulnerable defender ×1.5 (floor), never negative.
#[must_use]
pub fn attack_damage(base: i32, attacker: &Combatant, defender: &Combatant) -> i32 {
    let mut dmg = base + attacker.strength();

    if attacker.has_debuff(DebuffKind::Weak) {
        dmg = scale_floor(dmg, 3, 4);
    }
    if defender.has_buff(BuffKind::Intangible) {
        dmg = dmg.min(1);
    }
    if defender.has_debuff(DebuffKind::Vulnerable) {
        dmg = scale_floor(dmg, 3, 2);
    }

    dmg.max(0)
}

/// Block gained from a block source.
///
/// Frail ×0.75 (floor), then `+ Dexterity`, never negative.
#[must_use]
pub fn block_gain(base: i32, user: &Combatant) -> i32 {
    let mut blk = base;

    if user.has_debuff(DebuffKind::Frail) {
        blk = scale_floor(blk, 3, 4);
    }
    blk += user.dexterity();

    blk.max(0)
}

/// `floor(value * num / den)` in integer arithmetic.
fn scale_floor(value: i32, num: i32, den: i32) -> i32 {
    (value * num).div_euclid(den)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dummy() -> Combatant {
        Combatant::new("Dummy", 100)
    }

    #[test]
    fn test_plain_attack() {
        assert_eq!(attack_damage(10, &dummy(), &dummy()), 10);
    }

    #[test]
    fn test_strength_then_vulnerable() {
        let mut attacker = dummy();
        attacker.apply_buff(BuffKind::Strength, 3, None);
        assert_eq!(attack_damage(10, &attacker, &dummy()), 13);

        let mut defender = dummy();
        defender.apply_debuff(DebuffKind::Vulnerable, 2, None);
        assert_eq!(attack_damage(10, &attacker, &defender), 19);
    }

    #[test]
    fn test_weak_floors() {
        let mut attacker = dummy();
        attacker.apply_debuff(DebuffKind::Weak, 1, None);
        assert_eq!(attack_damage(10, &attacker, &dummy()), 7);
    }

    #[test]
    fn test_intangible_caps_before_vulnerable() {
        let mut defender = dummy();
        defender.apply_buff(BuffKind::Intangible, 1, Some(1));
        assert_eq!(attack_damage(30, &dummy(), &defender), 1);

        defender.apply_debuff(DebuffKind::Vulnerable, 1, None);
        assert_eq!(attack_damage(30, &dummy(), &defender), 1);
    }

    #[test]
    fn test_negative_strength_clamps_to_zero() {
        let mut attacker = dummy();
        attacker.apply_buff(BuffKind::Strength, -8, None);
        assert_eq!(attack_damage(5, &attacker, &dummy()), 0);
    }

    #[test]
    fn test_negative_damage_under_weak_floors_toward_negative() {
        let mut attacker = dummy();
        attacker.apply_buff(BuffKind::Strength, -7, None);
        attacker.apply_debuff(DebuffKind::Weak, 1, None);
        assert_eq!(attack_damage(5, &attacker, &dummy()), 0);
    }

    #[test]
    fn test_block_frail_then_dexterity() {
        let mut user = dummy();
        user.apply_debuff(DebuffKind::Frail, 1, None);
        user.apply_buff(BuffKind::Dexterity, 2, None);
        assert_eq!(block_gain(5, &user), 5);
    }

    #[test]
    fn test_block_never_negative() {
        let mut user = dummy();
        user.apply_buff(BuffKind::Dexterity, -10, None);
        assert_eq!(block_gain(5, &user), 0);
    }
}
