//! Domain events consumed by the presentation layer.
//!
//! The core never touches UI types; it queues these events and the binary
//! drains them into notifications and sound-free fanfare.

use crate::achievements::AchievementId;
use crate::quests::QuestId;
use crate::weather::Weather;

/// A single event produced by the progression core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestEvent {
    /// A quest was completed and coins were paid out.
    QuestCompleted { quest_id: QuestId, coins_earned: u64 },

    /// An achievement was unlocked for the first time.
    AchievementUnlocked { id: AchievementId },

    /// The weather advanced to a new phase.
    WeatherChanged { weather: Weather },
}
