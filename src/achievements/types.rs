//! Achievement identifiers and the static definition shape.

use serde::{Deserialize, Serialize};

/// Unique identifier for each achievement.
///
/// The wire form is the snake_case key (`first_quest`, `storm_master`, …)
/// used in save files.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum AchievementId {
    // Quest count milestones
    FirstQuest,
    TenQuests,
    FiftyQuests,
    // Streak milestones
    ThreeDayStreak,
    WeekStreak,
    // Coin milestones
    CoinCollector,
    TreasureHunter,
    // Weather mastery
    StormMaster,
    FogMaster,
    WeatherMaster,
}

impl AchievementId {
    /// All achievements in catalog order.
    pub const ALL: [AchievementId; 10] = [
        AchievementId::FirstQuest,
        AchievementId::TenQuests,
        AchievementId::FiftyQuests,
        AchievementId::ThreeDayStreak,
        AchievementId::WeekStreak,
        AchievementId::StormMaster,
        AchievementId::FogMaster,
        AchievementId::WeatherMaster,
        AchievementId::CoinCollector,
        AchievementId::TreasureHunter,
    ];

    /// Stable snake_case key, matching the serde wire form.
    pub fn key(self) -> &'static str {
        match self {
            AchievementId::FirstQuest => "first_quest",
            AchievementId::TenQuests => "ten_quests",
            AchievementId::FiftyQuests => "fifty_quests",
            AchievementId::ThreeDayStreak => "three_day_streak",
            AchievementId::WeekStreak => "week_streak",
            AchievementId::CoinCollector => "coin_collector",
            AchievementId::TreasureHunter => "treasure_hunter",
            AchievementId::StormMaster => "storm_master",
            AchievementId::FogMaster => "fog_master",
            AchievementId::WeatherMaster => "weather_master",
        }
    }
}

/// Static definition of an achievement.
#[derive(Debug, Clone, Copy)]
pub struct AchievementDef {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_matches_serde_form() {
        for id in AchievementId::ALL {
            let json = serde_json::to_string(&id).unwrap();
            assert_eq!(json, format!("\"{}\"", id.key()));
        }
    }

    #[test]
    fn test_all_contains_every_id_once() {
        for (i, a) in AchievementId::ALL.iter().enumerate() {
            for b in &AchievementId::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
