//! Declarative normalization of persisted records.
//!
//! Stored JSON may come from older versions or be hand-edited, so every
//! field is validated individually and falls back to its default rather
//! than failing the whole load. The rest of the crate only ever sees
//! fully-formed [`Hero`] and [`Mission`] values.

use crate::core::hero::Hero;
use crate::core::mission::{default_missions, Difficulty, Mission};
use crate::core::rules::gain_experience;
use serde_json::Value;
use uuid::Uuid;

/// Parses a stored hero record, substituting defaults field-by-field.
///
/// Missing, non-numeric, non-finite, and negative fields all fall back
/// to the default hero's value for that field. `level` and
/// `xpToNextLevel` must be positive, so a stored zero falls back too.
/// The result always satisfies `current_xp < xp_to_next_level`:
/// overflow in a stored record is resolved through the normal level-up
/// carry.
pub fn hero_from_json(raw: &str) -> Hero {
    let value: Value = match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(_) => return Hero::default(),
    };
    let Some(obj) = value.as_object() else {
        return Hero::default();
    };

    let defaults = Hero::default();
    let hero = Hero {
        level: positive_number_field(obj.get("level"), defaults.level),
        current_xp: number_field(obj.get("currentXp"), defaults.current_xp),
        xp_to_next_level: positive_number_field(
            obj.get("xpToNextLevel"),
            defaults.xp_to_next_level,
        ),
        strength: number_field(obj.get("strength"), defaults.strength),
        intelligence: number_field(obj.get("intelligence"), defaults.intelligence),
        vitality: number_field(obj.get("vitality"), defaults.vitality),
        unspent_points: number_field(obj.get("unspentPoints"), defaults.unspent_points),
    };

    if hero.current_xp >= hero.xp_to_next_level {
        gain_experience(&hero, 0)
    } else {
        hero
    }
}

/// Parses a stored mission collection, keeping entry order.
///
/// An unparseable or non-array record falls back to the default seed
/// missions. Entries without a usable title are dropped; every other
/// field is defaulted individually.
pub fn missions_from_json(raw: &str) -> Vec<Mission> {
    let value: Value = match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(_) => return default_missions(),
    };
    let Some(entries) = value.as_array() else {
        return default_missions();
    };

    entries.iter().filter_map(mission_from_value).collect()
}

fn mission_from_value(value: &Value) -> Option<Mission> {
    let obj = value.as_object()?;

    // A mission without a title has nothing to display; skip it.
    let title = obj.get("title")?.as_str()?.trim();
    if title.is_empty() {
        return None;
    }

    let difficulty = obj
        .get("difficulty")
        .and_then(|d| serde_json::from_value::<Difficulty>(d.clone()).ok())
        .unwrap_or(Difficulty::Easy);

    let id = obj
        .get("id")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    Some(Mission {
        id,
        title: title.to_string(),
        difficulty,
        xp_reward: number_field(obj.get("xpReward"), difficulty.xp_reward()),
        completed: obj
            .get("completed")
            .and_then(Value::as_bool)
            .unwrap_or(false),
    })
}

fn number_field(value: Option<&Value>, fallback: u32) -> u32 {
    value
        .and_then(Value::as_f64)
        .filter(|n| n.is_finite() && *n >= 0.0)
        .map(|n| n.round() as u32)
        .unwrap_or(fallback)
}

/// Like `number_field`, but zero is also invalid. Used for fields the
/// data model declares positive.
fn positive_number_field(value: Option<&Value>, fallback: u32) -> u32 {
    match number_field(value, fallback) {
        0 => fallback,
        n => n,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_hero_roundtrip() {
        let hero = Hero {
            level: 7,
            current_xp: 42,
            xp_to_next_level: 248,
            strength: 4,
            intelligence: 9,
            vitality: 2,
            unspent_points: 1,
        };
        let json = serde_json::to_string(&hero).unwrap();
        assert_eq!(hero_from_json(&json), hero);
    }

    #[test]
    fn test_hero_garbage_input_yields_default() {
        assert_eq!(hero_from_json("not json at all"), Hero::default());
        assert_eq!(hero_from_json("[1,2,3]"), Hero::default());
        assert_eq!(hero_from_json("null"), Hero::default());
    }

    #[test]
    fn test_hero_missing_fields_fall_back_individually() {
        let parsed = hero_from_json(r#"{"level": 5, "strength": 8}"#);
        assert_eq!(parsed.level, 5);
        assert_eq!(parsed.strength, 8);
        assert_eq!(parsed.current_xp, 0);
        assert_eq!(parsed.xp_to_next_level, 100);
        assert_eq!(parsed.intelligence, 1);
    }

    #[test]
    fn test_hero_non_numeric_fields_fall_back() {
        let parsed =
            hero_from_json(r#"{"level": "nine", "vitality": true, "currentXp": 12}"#);
        assert_eq!(parsed.level, 1);
        assert_eq!(parsed.vitality, 1);
        assert_eq!(parsed.current_xp, 12);
    }

    #[test]
    fn test_hero_negative_fields_fall_back() {
        let parsed = hero_from_json(r#"{"currentXp": -50, "level": 3}"#);
        assert_eq!(parsed.current_xp, 0);
        assert_eq!(parsed.level, 3);
    }

    #[test]
    fn test_hero_overflowed_xp_is_carried_into_levels() {
        let parsed = hero_from_json(r#"{"level": 1, "currentXp": 250, "xpToNextLevel": 100}"#);
        assert!(parsed.current_xp < parsed.xp_to_next_level);
        assert_eq!(parsed.level, 3);
        assert_eq!(parsed.unspent_points, 6);
    }

    #[test]
    fn test_hero_zero_threshold_falls_back_to_default() {
        // A zero threshold would make the level-up carry spin forever;
        // the data model declares the field positive.
        let parsed = hero_from_json(r#"{"currentXp": 10, "xpToNextLevel": 0}"#);
        assert_eq!(parsed.xp_to_next_level, 100);
        assert_eq!(parsed.current_xp, 10);
    }

    #[test]
    fn test_hero_zero_level_falls_back_to_default() {
        let parsed = hero_from_json(r#"{"level": 0, "currentXp": 5}"#);
        assert_eq!(parsed.level, 1);
        assert_eq!(parsed.current_xp, 5);
    }

    #[test]
    fn test_hero_zero_threshold_with_overflowed_xp_still_carries() {
        let parsed = hero_from_json(r#"{"currentXp": 250, "xpToNextLevel": 0}"#);
        assert!(parsed.current_xp < parsed.xp_to_next_level);
        assert_eq!(parsed.level, 3);
    }

    #[test]
    fn test_well_formed_missions_roundtrip() {
        let missions = vec![
            Mission::new("Water the plants", Difficulty::Easy),
            Mission {
                completed: true,
                ..Mission::new("Write the report", Difficulty::Hard)
            },
        ];
        let json = serde_json::to_string(&missions).unwrap();
        assert_eq!(missions_from_json(&json), missions);
    }

    #[test]
    fn test_missions_garbage_input_yields_seeds() {
        assert_eq!(missions_from_json("oops"), default_missions());
        assert_eq!(missions_from_json(r#"{"not": "an array"}"#), default_missions());
    }

    #[test]
    fn test_missions_empty_array_stays_empty() {
        // An empty list is a valid saved state, not a missing record
        assert!(missions_from_json("[]").is_empty());
    }

    #[test]
    fn test_mission_entry_without_title_is_dropped() {
        let json = r#"[
            {"id": "a", "difficulty": "easy", "xpReward": 10, "completed": false},
            {"id": "b", "title": "Keep me", "difficulty": "hard", "xpReward": 50, "completed": false},
            {"id": "c", "title": "   ", "difficulty": "easy", "xpReward": 10, "completed": false}
        ]"#;
        let missions = missions_from_json(json);
        assert_eq!(missions.len(), 1);
        assert_eq!(missions[0].title, "Keep me");
    }

    #[test]
    fn test_mission_unknown_difficulty_falls_back_to_easy() {
        let json = r#"[{"id": "a", "title": "t", "difficulty": "nightmare", "completed": false}]"#;
        let missions = missions_from_json(json);
        assert_eq!(missions[0].difficulty, Difficulty::Easy);
    }

    #[test]
    fn test_mission_missing_reward_derived_from_difficulty() {
        let json = r#"[{"id": "a", "title": "t", "difficulty": "medium"}]"#;
        let missions = missions_from_json(json);
        assert_eq!(missions[0].xp_reward, 25);
        assert!(!missions[0].completed);
    }

    #[test]
    fn test_mission_missing_id_gets_fresh_one() {
        let json = r#"[{"title": "t", "difficulty": "easy"}]"#;
        let missions = missions_from_json(json);
        assert!(!missions[0].id.is_empty());
    }
}
