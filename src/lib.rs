//! LifeQuest - Gamified Task Tracker Library
//!
//! This module exposes the hero/mission progression core for testing and
//! external use. The terminal UI lives in the binary.

pub mod build_info;
pub mod core;
pub mod session;
pub mod store;

// Tightly coupled to the terminal; exposed only for the binary
pub mod ui;

pub use crate::core::hero::{Attribute, Hero};
pub use crate::core::mission::{Difficulty, Mission};
pub use crate::session::{CompletionOutcome, Phase, Session};
pub use crate::store::{FileStore, KvStore, MemoryStore};
