//! Static achievement definitions.

use super::types::{AchievementDef, AchievementId};

/// All achievement definitions in display order.
pub const ALL_ACHIEVEMENTS: &[AchievementDef] = &[
    AchievementDef {
        id: AchievementId::FirstQuest,
        name: "First Quest",
        description: "Complete your first quest",
        icon: "🏆",
    },
    AchievementDef {
        id: AchievementId::TenQuests,
        name: "Seasoned Sailor",
        description: "Complete 10 quests",
        icon: "⚓",
    },
    AchievementDef {
        id: AchievementId::FiftyQuests,
        name: "Master Navigator",
        description: "Complete 50 quests",
        icon: "🧭",
    },
    AchievementDef {
        id: AchievementId::ThreeDayStreak,
        name: "Steady Course",
        description: "Maintain a 3-day streak",
        icon: "📅",
    },
    AchievementDef {
        id: AchievementId::WeekStreak,
        name: "True Pirate",
        description: "Maintain a 7-day streak",
        icon: "🗓",
    },
    AchievementDef {
        id: AchievementId::StormMaster,
        name: "Storm Chaser",
        description: "Complete a quest during a storm",
        icon: "⛈",
    },
    AchievementDef {
        id: AchievementId::FogMaster,
        name: "Fog Walker",
        description: "Complete a quest in the fog",
        icon: "🌫",
    },
    AchievementDef {
        id: AchievementId::WeatherMaster,
        name: "Master of the Seas",
        description: "Complete quests in every weather",
        icon: "🌈",
    },
    AchievementDef {
        id: AchievementId::CoinCollector,
        name: "Treasure Hunter",
        description: "Collect 100 coins",
        icon: "💰",
    },
    AchievementDef {
        id: AchievementId::TreasureHunter,
        name: "Wealthy Buccaneer",
        description: "Collect 1000 coins",
        icon: "🏴",
    },
];

/// Look up the static definition for an achievement.
pub fn get_achievement_def(id: AchievementId) -> Option<&'static AchievementDef> {
    ALL_ACHIEVEMENTS.iter().find(|def| def.id == id)
}
