//! Session state manager.
//!
//! Owns the in-memory hero and mission list for the running session,
//! applies the progression rules in response to user actions, and writes
//! snapshots through an injected [`KvStore`]. Persistence is best-effort:
//! a failed write is recorded for the UI and the in-memory state stays
//! authoritative for the rest of the session.

pub mod normalize;

use crate::core::constants::{HERO_KEY, MISSIONS_KEY};
use crate::core::hero::{Attribute, Hero};
use crate::core::mission::{default_missions, Difficulty, Mission};
use crate::core::rules::{allocate_point, effective_reward, gain_experience};
use crate::store::KvStore;

/// Lifecycle of a session: freshly constructed, reading the store, or
/// serving operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    Loading,
    Ready,
}

/// What completing a mission produced, for the UI status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionOutcome {
    pub xp_awarded: u32,
    pub levels_gained: u32,
}

pub struct Session<S: KvStore> {
    store: S,
    phase: Phase,
    hero: Hero,
    missions: Vec<Mission>,
    store_error: Option<String>,
}

impl<S: KvStore> Session<S> {
    /// Creates an unloaded session over the given store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            phase: Phase::Uninitialized,
            hero: Hero::default(),
            missions: Vec::new(),
            store_error: None,
        }
    }

    /// Loads both persisted records, normalizing whatever is found.
    ///
    /// An absent or unreadable hero record yields the default hero; an
    /// absent or unreadable mission record yields the seed missions.
    /// Read failures never abort the load.
    pub fn load(&mut self) {
        self.phase = Phase::Loading;

        self.hero = match self.read_record(HERO_KEY) {
            Some(raw) => normalize::hero_from_json(&raw),
            None => Hero::default(),
        };
        self.missions = match self.read_record(MISSIONS_KEY) {
            Some(raw) => normalize::missions_from_json(&raw),
            None => default_missions(),
        };

        self.phase = Phase::Ready;
    }

    fn read_record(&mut self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(e) => {
                self.store_error = Some(format!("Load failed for {}: {}", key, e));
                None
            }
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The injected store, for callers that need direct access.
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn hero(&self) -> &Hero {
        &self.hero
    }

    pub fn missions(&self) -> &[Mission] {
        &self.missions
    }

    /// Last persistence failure, if any. Durability is not guaranteed
    /// once this is set, but the session keeps running.
    pub fn last_store_error(&self) -> Option<&str> {
        self.store_error.as_deref()
    }

    /// Completes a mission: computes the bonus-adjusted reward from the
    /// current hero, applies the XP gain, and marks the mission done.
    ///
    /// The bonus is computed from the hero snapshot *before* the gain is
    /// applied; reversing that order would let the freshly-earned levels
    /// inflate their own reward. Unknown ids and already-completed
    /// missions are no-ops returning `None`.
    pub fn complete_mission(&mut self, id: &str) -> Option<CompletionOutcome> {
        let mission = self
            .missions
            .iter_mut()
            .find(|m| m.id == id)
            .filter(|m| !m.completed)?;

        let xp_awarded = effective_reward(&self.hero, mission);
        mission.completed = true;

        let before = self.hero;
        self.hero = gain_experience(&before, xp_awarded);

        self.persist_hero();
        self.persist_missions();

        Some(CompletionOutcome {
            xp_awarded,
            levels_gained: self.hero.level - before.level,
        })
    }

    /// Appends a new mission. Whitespace-only titles are rejected as a
    /// silent no-op; returns whether a mission was added.
    pub fn add_mission(&mut self, title: &str, difficulty: Difficulty) -> bool {
        let title = title.trim();
        if title.is_empty() {
            return false;
        }

        self.missions.push(Mission::new(title, difficulty));
        self.persist_missions();
        true
    }

    /// Removes every completed mission, preserving the order of the rest.
    pub fn clear_completed_missions(&mut self) {
        self.missions.retain(|m| !m.completed);
        self.persist_missions();
    }

    /// Spends one unspent point on the given attribute; a no-op with an
    /// empty pool.
    pub fn allocate_point(&mut self, attribute: Attribute) {
        self.hero = allocate_point(&self.hero, attribute);
        self.persist_hero();
    }

    /// Discards all persisted state and restores the defaults.
    pub fn reset(&mut self) {
        if let Err(e) = self.store.remove_many(&[HERO_KEY, MISSIONS_KEY]) {
            self.store_error = Some(format!("Reset failed: {}", e));
        }
        self.hero = Hero::default();
        self.missions = default_missions();
    }

    fn persist_hero(&mut self) {
        let hero = self.hero;
        self.persist(HERO_KEY, &hero);
    }

    fn persist_missions(&mut self) {
        let missions = self.missions.clone();
        self.persist(MISSIONS_KEY, &missions);
    }

    fn persist<T: serde::Serialize>(&mut self, key: &str, value: &T) {
        let json = match serde_json::to_string_pretty(value) {
            Ok(json) => json,
            Err(e) => {
                self.store_error = Some(format!("Save failed for {}: {}", key, e));
                return;
            }
        };
        if let Err(e) = self.store.set(key, &json) {
            self.store_error = Some(format!("Save failed for {}: {}", key, e));
        }
    }
}
