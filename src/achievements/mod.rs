//! Achievement system: identifiers, static catalog, and the unlock
//! evaluator.
//!
//! Evaluation is a pure function of the progress record, so calling it
//! twice with unchanged state returns nothing the second time. Recording
//! the unlocks belongs to the progression engine.

pub mod data;
pub mod types;

pub use data::{get_achievement_def, ALL_ACHIEVEMENTS};
pub use types::{AchievementDef, AchievementId};

use crate::progress::UserProgress;

/// Returns every achievement that qualifies now and is not already
/// unlocked, in catalog order.
pub fn evaluate(progress: &UserProgress) -> Vec<AchievementId> {
    AchievementId::ALL
        .iter()
        .copied()
        .filter(|id| qualifies(*id, progress) && !progress.is_unlocked(*id))
        .collect()
}

/// The rule table. Every rule is checked on every call and none depends
/// on another.
fn qualifies(id: AchievementId, progress: &UserProgress) -> bool {
    match id {
        AchievementId::FirstQuest => progress.total_quests_completed >= 1,
        AchievementId::TenQuests => progress.total_quests_completed >= 10,
        AchievementId::FiftyQuests => progress.total_quests_completed >= 50,
        AchievementId::ThreeDayStreak => progress.current_streak >= 3,
        AchievementId::WeekStreak => progress.current_streak >= 7,
        AchievementId::CoinCollector => progress.coins >= 100,
        AchievementId::TreasureHunter => progress.coins >= 1000,
        AchievementId::StormMaster => progress.weather_mastery.storm,
        AchievementId::FogMaster => progress.weather_mastery.fog,
        AchievementId::WeatherMaster => progress.weather_mastery.all(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::Weather;

    #[test]
    fn test_fresh_progress_qualifies_for_nothing() {
        assert!(evaluate(&UserProgress::default()).is_empty());
    }

    #[test]
    fn test_first_completion_unlocks_first_quest() {
        let mut progress = UserProgress::default();
        progress.total_quests_completed = 1;

        assert_eq!(evaluate(&progress), vec![AchievementId::FirstQuest]);
    }

    #[test]
    fn test_quest_count_milestones() {
        let mut progress = UserProgress::default();
        progress.total_quests_completed = 50;

        let unlocked = evaluate(&progress);
        assert!(unlocked.contains(&AchievementId::FirstQuest));
        assert!(unlocked.contains(&AchievementId::TenQuests));
        assert!(unlocked.contains(&AchievementId::FiftyQuests));
    }

    #[test]
    fn test_streak_milestones() {
        let mut progress = UserProgress::default();
        progress.current_streak = 3;
        assert_eq!(evaluate(&progress), vec![AchievementId::ThreeDayStreak]);

        progress.current_streak = 7;
        let unlocked = evaluate(&progress);
        assert!(unlocked.contains(&AchievementId::ThreeDayStreak));
        assert!(unlocked.contains(&AchievementId::WeekStreak));
    }

    #[test]
    fn test_coin_milestones_boundary() {
        let mut progress = UserProgress::default();
        progress.coins = 99;
        assert!(evaluate(&progress).is_empty());

        progress.coins = 100;
        assert_eq!(evaluate(&progress), vec![AchievementId::CoinCollector]);

        progress.coins = 1000;
        let unlocked = evaluate(&progress);
        assert!(unlocked.contains(&AchievementId::TreasureHunter));
    }

    #[test]
    fn test_weather_master_requires_all_three() {
        let mut progress = UserProgress::default();
        progress.weather_mastery.mark(Weather::Storm);
        progress.weather_mastery.mark(Weather::Fog);

        let unlocked = evaluate(&progress);
        assert!(unlocked.contains(&AchievementId::StormMaster));
        assert!(unlocked.contains(&AchievementId::FogMaster));
        assert!(!unlocked.contains(&AchievementId::WeatherMaster));

        progress.weather_mastery.mark(Weather::Clear);
        assert!(evaluate(&progress).contains(&AchievementId::WeatherMaster));
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let mut progress = UserProgress::default();
        progress.total_quests_completed = 12;
        progress.coins = 150;

        let first = evaluate(&progress);
        assert!(!first.is_empty());
        for id in first {
            progress.unlock(id, 0);
        }

        assert!(evaluate(&progress).is_empty());
    }

    #[test]
    fn test_already_unlocked_ids_are_excluded() {
        let mut progress = UserProgress::default();
        progress.total_quests_completed = 10;
        progress.unlock(AchievementId::FirstQuest, 0);

        let unlocked = evaluate(&progress);
        assert!(!unlocked.contains(&AchievementId::FirstQuest));
        assert!(unlocked.contains(&AchievementId::TenQuests));
    }
}
