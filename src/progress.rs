//! The singleton user progress record and the daily streak rules.

use crate::achievements::AchievementId;
use crate::quests::Difficulty;
use crate::weather::Weather;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Completed-quest counts per difficulty.
///
/// The counts only ever grow, and their sum always equals
/// `total_quests_completed` on the owning record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestDistribution {
    pub easy: u64,
    pub medium: u64,
    pub hard: u64,
}

impl QuestDistribution {
    pub fn bump(&mut self, difficulty: Difficulty) {
        match difficulty {
            Difficulty::Easy => self.easy += 1,
            Difficulty::Medium => self.medium += 1,
            Difficulty::Hard => self.hard += 1,
        }
    }

    pub fn count(&self, difficulty: Difficulty) -> u64 {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }

    pub fn total(&self) -> u64 {
        self.easy + self.medium + self.hard
    }
}

/// Which weather phases the user has completed a quest under.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherMastery {
    pub clear: bool,
    pub storm: bool,
    pub fog: bool,
}

impl WeatherMastery {
    pub fn mark(&mut self, weather: Weather) {
        match weather {
            Weather::Clear => self.clear = true,
            Weather::Storm => self.storm = true,
            Weather::Fog => self.fog = true,
        }
    }

    pub fn has(&self, weather: Weather) -> bool {
        match weather {
            Weather::Clear => self.clear,
            Weather::Storm => self.storm,
            Weather::Fog => self.fog,
        }
    }

    pub fn all(&self) -> bool {
        self.clear && self.storm && self.fog
    }
}

/// The one progress record per installation.
///
/// `Default` is the documented fresh-user record the storage gateway hands
/// out when no save exists. Fields deserialize leniently so older save
/// files keep loading as the shape grows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProgress {
    pub coins: u64,
    pub current_streak: u32,
    pub longest_streak: u32,
    /// Day of the last streak-counting completion, in the user's local
    /// calendar.
    pub last_active_date: Option<NaiveDate>,
    /// Counts quests ever completed, even ones deleted afterwards.
    pub total_quests_completed: u64,
    pub quest_distribution: QuestDistribution,
    pub weather_mastery: WeatherMastery,
    /// Achievement id → unlock instant (unix seconds). Append-only.
    pub unlocked_achievements: BTreeMap<AchievementId, i64>,
    /// Shop item ids in purchase order. Repeat purchases are allowed.
    pub inventory: Vec<String>,
}

impl UserProgress {
    /// Applies one day of activity to the streak.
    ///
    /// - same day as the last activity: nothing changes, so several
    ///   completions in one day never inflate the streak;
    /// - exactly the day after: the streak extends;
    /// - any other gap (two or more days, a clock jump backwards, or no
    ///   prior activity): the streak restarts at one.
    pub fn record_daily_activity(&mut self, today: NaiveDate) {
        match self.last_active_date {
            Some(last) if last == today => return,
            Some(last) if today.signed_duration_since(last).num_days() == 1 => {
                self.current_streak += 1;
            }
            _ => self.current_streak = 1,
        }
        self.longest_streak = self.longest_streak.max(self.current_streak);
        self.last_active_date = Some(today);
    }

    /// Records a completion in the totals and the per-difficulty counts.
    pub fn record_completion(&mut self, difficulty: Difficulty) {
        self.total_quests_completed += 1;
        self.quest_distribution.bump(difficulty);
    }

    pub fn is_unlocked(&self, id: AchievementId) -> bool {
        self.unlocked_achievements.contains_key(&id)
    }

    /// Unlocks an achievement. Returns true if newly unlocked; unlocking
    /// again is a no-op, not an error.
    pub fn unlock(&mut self, id: AchievementId, now: i64) -> bool {
        if self.is_unlocked(id) {
            return false;
        }
        self.unlocked_achievements.insert(id, now);
        true
    }

    pub fn unlocked_count(&self) -> usize {
        self.unlocked_achievements.len()
    }

    /// How many of a given shop item the user owns.
    pub fn owned_count(&self, item_id: &str) -> usize {
        self.inventory.iter().filter(|id| id == &item_id).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_first_activity_starts_streak_at_one() {
        let mut progress = UserProgress::default();
        progress.record_daily_activity(day("2024-03-01"));

        assert_eq!(progress.current_streak, 1);
        assert_eq!(progress.longest_streak, 1);
        assert_eq!(progress.last_active_date, Some(day("2024-03-01")));
    }

    #[test]
    fn test_same_day_does_not_inflate_streak() {
        let mut progress = UserProgress::default();
        progress.record_daily_activity(day("2024-03-01"));
        progress.record_daily_activity(day("2024-03-01"));
        progress.record_daily_activity(day("2024-03-01"));

        assert_eq!(progress.current_streak, 1);
    }

    #[test]
    fn test_consecutive_days_extend_streak() {
        let mut progress = UserProgress::default();
        progress.record_daily_activity(day("2024-03-01"));
        progress.record_daily_activity(day("2024-03-02"));
        progress.record_daily_activity(day("2024-03-03"));

        assert_eq!(progress.current_streak, 3);
        assert_eq!(progress.longest_streak, 3);
    }

    #[test]
    fn test_gap_resets_streak_to_one() {
        let mut progress = UserProgress::default();
        progress.record_daily_activity(day("2024-03-01"));
        progress.record_daily_activity(day("2024-03-02"));
        // Two-day gap
        progress.record_daily_activity(day("2024-03-05"));

        assert_eq!(progress.current_streak, 1);
        assert_eq!(progress.longest_streak, 2);
    }

    #[test]
    fn test_clock_jump_backwards_resets_streak() {
        let mut progress = UserProgress::default();
        progress.record_daily_activity(day("2024-03-10"));
        progress.record_daily_activity(day("2024-03-08"));

        assert_eq!(progress.current_streak, 1);
        assert_eq!(progress.last_active_date, Some(day("2024-03-08")));
    }

    #[test]
    fn test_longest_streak_never_below_current() {
        let mut progress = UserProgress::default();
        let days = [
            "2024-03-01",
            "2024-03-02",
            "2024-03-03",
            "2024-03-07",
            "2024-03-08",
        ];
        for d in days {
            progress.record_daily_activity(day(d));
            assert!(progress.longest_streak >= progress.current_streak);
        }
        assert_eq!(progress.current_streak, 2);
        assert_eq!(progress.longest_streak, 3);
    }

    #[test]
    fn test_distribution_sum_matches_total() {
        let mut progress = UserProgress::default();
        for difficulty in [
            Difficulty::Easy,
            Difficulty::Easy,
            Difficulty::Medium,
            Difficulty::Hard,
        ] {
            progress.record_completion(difficulty);
        }

        assert_eq!(progress.total_quests_completed, 4);
        assert_eq!(progress.quest_distribution.total(), 4);
        assert_eq!(progress.quest_distribution.easy, 2);
        assert_eq!(progress.quest_distribution.count(Difficulty::Hard), 1);
    }

    #[test]
    fn test_unlock_is_idempotent() {
        let mut progress = UserProgress::default();

        assert!(progress.unlock(AchievementId::FirstQuest, 100));
        assert!(!progress.unlock(AchievementId::FirstQuest, 200));
        assert_eq!(progress.unlocked_count(), 1);
        // The original unlock instant is kept
        assert_eq!(
            progress.unlocked_achievements[&AchievementId::FirstQuest],
            100
        );
    }

    #[test]
    fn test_weather_mastery_all() {
        let mut mastery = WeatherMastery::default();
        assert!(!mastery.all());

        mastery.mark(Weather::Storm);
        mastery.mark(Weather::Fog);
        assert!(!mastery.all());
        assert!(mastery.has(Weather::Storm));

        mastery.mark(Weather::Clear);
        assert!(mastery.all());
    }

    #[test]
    fn test_partial_save_file_loads_with_defaults() {
        // Simulates a save written before newer fields existed
        let progress: UserProgress =
            serde_json::from_str(r#"{"coins": 25, "currentStreak": 2}"#).unwrap();

        assert_eq!(progress.coins, 25);
        assert_eq!(progress.current_streak, 2);
        assert_eq!(progress.total_quests_completed, 0);
        assert!(progress.inventory.is_empty());
    }

    #[test]
    fn test_wire_format_round_trip() {
        let mut progress = UserProgress::default();
        progress.coins = 120;
        progress.record_daily_activity(day("2024-03-01"));
        progress.record_completion(Difficulty::Easy);
        progress.weather_mastery.mark(Weather::Storm);
        progress.unlock(AchievementId::CoinCollector, 1_700_000_000);
        progress.inventory.push("compass".to_string());

        let json = serde_json::to_string_pretty(&progress).unwrap();
        assert!(json.contains("\"lastActiveDate\": \"2024-03-01\""));
        assert!(json.contains("\"coin_collector\""));

        let back: UserProgress = serde_json::from_str(&json).unwrap();
        assert_eq!(back, progress);
    }
}
