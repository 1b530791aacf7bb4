//! Voyage - a map-themed gamified task tracker for the terminal.
//!
//! Quests live on a sea chart. Completing one pays coins scaled by the
//! current weather, keeps a daily streak alive, and can unlock
//! achievements. This library holds the progression core and the ratatui
//! scenes; the binary wires them to the terminal.

pub mod achievements;
pub mod build_info;
pub mod constants;
pub mod engine;
pub mod errors;
pub mod events;
pub mod progress;
pub mod quests;
pub mod shop;
pub mod storage;
pub mod ui;
pub mod weather;

pub use achievements::{AchievementDef, AchievementId, ALL_ACHIEVEMENTS};
pub use engine::{CompletionResult, ProgressionEngine, RewardTable};
pub use errors::VoyageError;
pub use events::QuestEvent;
pub use progress::UserProgress;
pub use quests::{Difficulty, MapPosition, Quest, QuestId, QuestLedger, QuestStatus};
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use weather::{Weather, WeatherCycle};
