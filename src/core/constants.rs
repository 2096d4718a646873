// XP and leveling
pub const INITIAL_XP_TO_NEXT_LEVEL: u32 = 100;
pub const XP_THRESHOLD_GROWTH: f64 = 1.2;
pub const LEVEL_UP_ATTRIBUTE_POINTS: u32 = 3;

// Base XP rewards by mission difficulty
pub const XP_REWARD_EASY: u32 = 10;
pub const XP_REWARD_MEDIUM: u32 = 25;
pub const XP_REWARD_HARD: u32 = 50;

// Mission XP bonus per point in the matching attribute (+2% each)
pub const XP_BONUS_PER_ATTRIBUTE_POINT: f64 = 0.02;

// Hero attributes
pub const BASE_ATTRIBUTE_VALUE: u32 = 1;
pub const NUM_ATTRIBUTES: usize = 3;

// Persisted record keys (one JSON file per key in FileStore)
pub const HERO_KEY: &str = "hero";
pub const MISSIONS_KEY: &str = "missions";

// UI timing
pub const POLL_INTERVAL_MS: u64 = 50;
