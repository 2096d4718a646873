use crate::core::constants::{XP_REWARD_EASY, XP_REWARD_HARD, XP_REWARD_MEDIUM};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Mission difficulty tier. Determines the base XP reward and which
/// hero attribute grants a completion bonus.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn all() -> [Difficulty; 3] {
        [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }

    /// Base XP reward for a mission of this difficulty.
    pub fn xp_reward(&self) -> u32 {
        match self {
            Difficulty::Easy => XP_REWARD_EASY,
            Difficulty::Medium => XP_REWARD_MEDIUM,
            Difficulty::Hard => XP_REWARD_HARD,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// A single completable task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Mission {
    pub id: String,
    pub title: String,
    pub difficulty: Difficulty,
    /// Base XP value, fixed at creation time from the difficulty.
    pub xp_reward: u32,
    pub completed: bool,
}

impl Mission {
    /// Creates a new mission with a fresh unique id and a base reward
    /// derived from the difficulty.
    pub fn new(title: impl Into<String>, difficulty: Difficulty) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            difficulty,
            xp_reward: difficulty.xp_reward(),
            completed: false,
        }
    }
}

/// The seed missions used on first run, one per difficulty.
pub fn default_missions() -> Vec<Mission> {
    let seeds = [
        ("1", "Tidy your room", Difficulty::Easy),
        ("2", "Study for 30 minutes", Difficulty::Medium),
        ("3", "Exercise for 20 minutes", Difficulty::Hard),
    ];
    seeds
        .into_iter()
        .map(|(id, title, difficulty)| Mission {
            id: id.to_string(),
            title: title.to_string(),
            difficulty,
            xp_reward: difficulty.xp_reward(),
            completed: false,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xp_reward_by_difficulty() {
        assert_eq!(Difficulty::Easy.xp_reward(), 10);
        assert_eq!(Difficulty::Medium.xp_reward(), 25);
        assert_eq!(Difficulty::Hard.xp_reward(), 50);
    }

    #[test]
    fn test_new_mission_defaults() {
        let mission = Mission::new("Walk the dog", Difficulty::Easy);
        assert_eq!(mission.title, "Walk the dog");
        assert_eq!(mission.xp_reward, 10);
        assert!(!mission.completed);
        assert!(!mission.id.is_empty());
    }

    #[test]
    fn test_new_missions_get_unique_ids() {
        let a = Mission::new("a", Difficulty::Easy);
        let b = Mission::new("b", Difficulty::Easy);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_default_missions_cover_all_difficulties() {
        let missions = default_missions();
        assert_eq!(missions.len(), 3);
        for (mission, difficulty) in missions.iter().zip(Difficulty::all()) {
            assert_eq!(mission.difficulty, difficulty);
            assert_eq!(mission.xp_reward, difficulty.xp_reward());
            assert!(!mission.completed);
        }
    }

    #[test]
    fn test_difficulty_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Difficulty::Medium).unwrap(),
            "\"medium\""
        );
    }
}
