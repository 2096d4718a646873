//! Pure progression rules: experience gain, level-ups, attribute point
//! allocation, and difficulty-based bonus rewards.
//!
//! Every function here is a value transform over immutable snapshots.
//! Nothing in this module touches the store or the UI.

use crate::core::constants::{
    LEVEL_UP_ATTRIBUTE_POINTS, XP_BONUS_PER_ATTRIBUTE_POINT, XP_THRESHOLD_GROWTH,
};
use crate::core::hero::{Attribute, Hero};
use crate::core::mission::{Difficulty, Mission};

/// Returns the attribute that boosts rewards for a given difficulty.
///
/// Easy missions reward vitality, medium reward intelligence, hard
/// reward strength.
pub fn bonus_attribute(difficulty: Difficulty) -> Attribute {
    match difficulty {
        Difficulty::Easy => Attribute::Vitality,
        Difficulty::Medium => Attribute::Intelligence,
        Difficulty::Hard => Attribute::Strength,
    }
}

/// Computes the bonus-adjusted XP for completing a mission.
///
/// The multiplier starts at 1.0 and gains +2% per point in the attribute
/// matching the mission's difficulty. Only the final product is rounded
/// (half away from zero, which is round-half-up for these non-negative
/// values); the multiplier itself is never rounded.
pub fn effective_reward(hero: &Hero, mission: &Mission) -> u32 {
    let attr_value = hero.attribute(bonus_attribute(mission.difficulty));
    let multiplier = 1.0 + attr_value as f64 * XP_BONUS_PER_ATTRIBUTE_POINT;
    (mission.xp_reward as f64 * multiplier).round() as u32
}

/// Adds XP to the hero and processes any resulting level-ups.
///
/// Excess XP carries over: while the accumulated XP meets the threshold,
/// the hero levels up, the threshold grows by 20% (rounded), and 3
/// attribute points are banked. Terminates for any amount because the
/// threshold is positive and growing. The add saturates, so an absurd
/// stored reward costs precision instead of wrapping the counter.
pub fn gain_experience(hero: &Hero, amount: u32) -> Hero {
    let mut next = *hero;
    next.current_xp = next.current_xp.saturating_add(amount);

    // The threshold is positive everywhere the crate constructs a Hero,
    // but the fields are public; a zero threshold must not spin here.
    while next.xp_to_next_level > 0 && next.current_xp >= next.xp_to_next_level {
        next.current_xp -= next.xp_to_next_level;
        next.level += 1;
        next.xp_to_next_level = (next.xp_to_next_level as f64 * XP_THRESHOLD_GROWTH).round() as u32;
        next.unspent_points += LEVEL_UP_ATTRIBUTE_POINTS;
    }

    next
}

/// Spends one unspent point on the given attribute.
///
/// Returns the hero unchanged when no points are available; spending
/// with an empty pool is a no-op, not an error.
pub fn allocate_point(hero: &Hero, attribute: Attribute) -> Hero {
    if hero.unspent_points == 0 {
        return *hero;
    }

    let mut next = *hero;
    *next.attribute_mut(attribute) += 1;
    next.unspent_points -= 1;
    next
}

/// Fraction of progress toward the next level, in `0.0..1.0`.
///
/// Guards against a zero threshold rather than dividing by it; the
/// invariants never produce one, but a malformed save could.
pub fn progress_fraction(hero: &Hero) -> f64 {
    if hero.xp_to_next_level == 0 {
        return 0.0;
    }
    hero.current_xp as f64 / hero.xp_to_next_level as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hero_with(current_xp: u32, xp_to_next_level: u32) -> Hero {
        Hero {
            current_xp,
            xp_to_next_level,
            ..Hero::default()
        }
    }

    #[test]
    fn test_gain_without_level_up() {
        let hero = hero_with(0, 100);
        let after = gain_experience(&hero, 40);
        assert_eq!(after.level, 1);
        assert_eq!(after.current_xp, 40);
        assert_eq!(after.xp_to_next_level, 100);
        assert_eq!(after.unspent_points, 0);
    }

    #[test]
    fn test_gain_with_single_level_up() {
        // Level 1 at 90/100, gain 15: carry 5 into level 2 at threshold 120
        let hero = hero_with(90, 100);
        let after = gain_experience(&hero, 15);
        assert_eq!(after.level, 2);
        assert_eq!(after.current_xp, 5);
        assert_eq!(after.xp_to_next_level, 120);
        assert_eq!(after.unspent_points, 3);
    }

    #[test]
    fn test_gain_with_multiple_level_ups() {
        // 100 -> 120 -> 144: 300 XP from zero clears two thresholds
        let hero = hero_with(0, 100);
        let after = gain_experience(&hero, 300);
        assert_eq!(after.level, 3);
        assert_eq!(after.current_xp, 80);
        assert_eq!(after.xp_to_next_level, 144);
        assert_eq!(after.unspent_points, 6);
    }

    #[test]
    fn test_gain_invariant_holds_for_large_amounts() {
        let hero = hero_with(0, 100);
        for amount in [0, 1, 99, 100, 101, 1000, 50_000, 1_000_000] {
            let after = gain_experience(&hero, amount);
            assert!(
                after.current_xp < after.xp_to_next_level,
                "invariant violated for amount {}: {}/{}",
                amount,
                after.current_xp,
                after.xp_to_next_level
            );
        }
    }

    #[test]
    fn test_gain_huge_amount_saturates_and_terminates() {
        // An absurd stored reward must neither wrap the counter nor hang
        let hero = hero_with(50, 100);
        let after = gain_experience(&hero, u32::MAX);
        assert!(after.current_xp < after.xp_to_next_level);
        assert!(after.level > hero.level);
    }

    #[test]
    fn test_gain_with_zero_threshold_does_not_spin() {
        let hero = hero_with(0, 0);
        let after = gain_experience(&hero, 10);
        assert_eq!(after.level, 1);
        assert_eq!(after.current_xp, 10);
    }

    #[test]
    fn test_gain_exactly_at_threshold_levels_up() {
        let hero = hero_with(0, 100);
        let after = gain_experience(&hero, 100);
        assert_eq!(after.level, 2);
        assert_eq!(after.current_xp, 0);
    }

    #[test]
    fn test_gain_does_not_mutate_input() {
        let hero = hero_with(90, 100);
        let _ = gain_experience(&hero, 15);
        assert_eq!(hero.current_xp, 90);
        assert_eq!(hero.level, 1);
    }

    #[test]
    fn test_effective_reward_easy_uses_vitality() {
        // base 10, vitality 5: round(10 * 1.10) = 11
        let hero = Hero {
            vitality: 5,
            ..Hero::default()
        };
        let mission = Mission::new("test", Difficulty::Easy);
        assert_eq!(effective_reward(&hero, &mission), 11);
    }

    #[test]
    fn test_effective_reward_medium_uses_intelligence() {
        // base 25, intelligence 10: round(25 * 1.20) = 30
        let hero = Hero {
            intelligence: 10,
            ..Hero::default()
        };
        let mission = Mission::new("test", Difficulty::Medium);
        assert_eq!(effective_reward(&hero, &mission), 30);
    }

    #[test]
    fn test_effective_reward_hard_uses_strength() {
        // base 50, strength 3: round(50 * 1.06) = 53
        let hero = Hero {
            strength: 3,
            ..Hero::default()
        };
        let mission = Mission::new("test", Difficulty::Hard);
        assert_eq!(effective_reward(&hero, &mission), 53);
    }

    #[test]
    fn test_effective_reward_rounds_half_up() {
        // base 25, intelligence 1: 25 * 1.02 = 25.5, rounds to 26
        let hero = Hero::default();
        let mission = Mission::new("test", Difficulty::Medium);
        assert_eq!(effective_reward(&hero, &mission), 26);
    }

    #[test]
    fn test_effective_reward_ignores_other_attributes() {
        // Strength and intelligence do not affect easy missions
        let base = Hero {
            vitality: 4,
            ..Hero::default()
        };
        let buffed = Hero {
            strength: 99,
            intelligence: 99,
            ..base
        };
        let mission = Mission::new("test", Difficulty::Easy);
        assert_eq!(
            effective_reward(&base, &mission),
            effective_reward(&buffed, &mission)
        );
    }

    #[test]
    fn test_effective_reward_monotone_in_bonus_attribute() {
        let mission = Mission::new("test", Difficulty::Hard);
        let mut previous = 0;
        for strength in 0..50 {
            let hero = Hero {
                strength,
                ..Hero::default()
            };
            let reward = effective_reward(&hero, &mission);
            assert!(reward >= previous, "reward decreased at strength {}", strength);
            previous = reward;
        }
    }

    #[test]
    fn test_allocate_point_spends_one() {
        let hero = Hero {
            unspent_points: 3,
            ..Hero::default()
        };
        let after = allocate_point(&hero, Attribute::Intelligence);
        assert_eq!(after.intelligence, 2);
        assert_eq!(after.unspent_points, 2);
        assert_eq!(after.strength, 1);
        assert_eq!(after.vitality, 1);
    }

    #[test]
    fn test_allocate_point_without_points_is_noop() {
        let hero = Hero::default();
        assert_eq!(hero.unspent_points, 0);
        let after = allocate_point(&hero, Attribute::Strength);
        assert_eq!(after, hero);
    }

    #[test]
    fn test_allocate_drains_exactly_unspent_points() {
        let mut hero = Hero {
            unspent_points: 5,
            ..Hero::default()
        };
        for _ in 0..5 {
            hero = allocate_point(&hero, Attribute::Vitality);
        }
        assert_eq!(hero.unspent_points, 0);
        assert_eq!(hero.vitality, 6);

        // One more is a no-op
        let after = allocate_point(&hero, Attribute::Vitality);
        assert_eq!(after, hero);
    }

    #[test]
    fn test_progress_fraction() {
        let hero = hero_with(25, 100);
        assert!((progress_fraction(&hero) - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_progress_fraction_zero_threshold() {
        let hero = hero_with(10, 0);
        assert_eq!(progress_fraction(&hero), 0.0);
    }

    #[test]
    fn test_bonus_attribute_mapping() {
        assert_eq!(bonus_attribute(Difficulty::Easy), Attribute::Vitality);
        assert_eq!(bonus_attribute(Difficulty::Medium), Attribute::Intelligence);
        assert_eq!(bonus_attribute(Difficulty::Hard), Attribute::Strength);
    }
}
