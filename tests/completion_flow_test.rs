//! Integration test: the quest completion flow.
//!
//! Exercises the progression engine end to end: reward payout against the
//! weather multiplier, one-shot completion, deletion semantics, rollback
//! on storage failure, and the emitted domain events.

use chrono::NaiveDate;
use std::cell::Cell;
use std::io;
use voyage::{
    AchievementId, Difficulty, MemoryStorage, ProgressionEngine, Quest, QuestEvent, QuestStatus,
    RewardTable, Storage, UserProgress, VoyageError, Weather,
};

const NOW_MS: i64 = 1_700_000_000_000;
const NOW: i64 = 1_700_000_000;

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn engine() -> ProgressionEngine<MemoryStorage> {
    ProgressionEngine::load(MemoryStorage::new()).unwrap()
}

fn add_quest<S: Storage>(engine: &mut ProgressionEngine<S>, difficulty: Difficulty) -> i64 {
    let offset = engine.ledger().len() as i64;
    engine
        .create_quest("integration quest", difficulty, None, NOW_MS + offset)
        .unwrap()
        .id
}

/// Storage wrapper whose writes can be made to fail on demand.
struct FailingStorage {
    inner: MemoryStorage,
    fail_quest_saves: Cell<bool>,
    fail_progress_saves: Cell<bool>,
}

impl FailingStorage {
    fn new() -> Self {
        Self {
            inner: MemoryStorage::new(),
            fail_quest_saves: Cell::new(false),
            fail_progress_saves: Cell::new(false),
        }
    }
}

impl Storage for FailingStorage {
    fn load_quests(&self) -> io::Result<Vec<Quest>> {
        self.inner.load_quests()
    }

    fn save_quests(&self, quests: &[Quest]) -> io::Result<()> {
        if self.fail_quest_saves.get() {
            return Err(io::Error::new(io::ErrorKind::Other, "disk full"));
        }
        self.inner.save_quests(quests)
    }

    fn load_user_progress(&self) -> io::Result<UserProgress> {
        self.inner.load_user_progress()
    }

    fn save_user_progress(&self, progress: &UserProgress) -> io::Result<()> {
        if self.fail_progress_saves.get() {
            return Err(io::Error::new(io::ErrorKind::Other, "disk full"));
        }
        self.inner.save_user_progress(progress)
    }
}

// =============================================================================
// Reward payout
// =============================================================================

#[test]
fn test_fresh_state_easy_quest_scenario() {
    let mut engine = engine();
    let id = add_quest(&mut engine, Difficulty::Easy);

    let result = engine
        .complete_quest(id, Weather::Clear, day("2024-03-01"), NOW)
        .unwrap();

    assert_eq!(result.coins_earned, 10);
    assert_eq!(result.new_coin_total, 10);
    assert_eq!(engine.progress().total_quests_completed, 1);
    assert_eq!(engine.progress().current_streak, 1);
    assert!(engine.progress().is_unlocked(AchievementId::FirstQuest));
}

#[test]
fn test_reward_matches_table_times_multiplier() {
    let difficulties = [
        (Difficulty::Easy, 10u64),
        (Difficulty::Medium, 20),
        (Difficulty::Hard, 30),
    ];

    for (difficulty, base) in difficulties {
        for weather in Weather::CYCLE {
            let mut engine = engine();
            let id = add_quest(&mut engine, difficulty);

            let result = engine
                .complete_quest(id, weather, day("2024-03-01"), NOW)
                .unwrap();

            let expected = (base as f64 * weather.multiplier()).round() as u64;
            assert_eq!(
                result.coins_earned, expected,
                "{difficulty:?} under {weather:?}"
            );
        }
    }
}

#[test]
fn test_fog_reward_rounds_half_up() {
    // 10 × 1.25 = 12.5, which must pay 13, never 12
    let mut engine = engine();
    let id = add_quest(&mut engine, Difficulty::Easy);

    let result = engine
        .complete_quest(id, Weather::Fog, day("2024-03-01"), NOW)
        .unwrap();
    assert_eq!(result.coins_earned, 13);
}

#[test]
fn test_custom_reward_table_drives_payout() {
    let mut engine = engine().with_reward_table(RewardTable::new(2, 4, 8));
    let id = add_quest(&mut engine, Difficulty::Medium);

    let result = engine
        .complete_quest(id, Weather::Storm, day("2024-03-01"), NOW)
        .unwrap();
    assert_eq!(result.coins_earned, 6); // 4 × 1.5
}

// =============================================================================
// One-shot completion
// =============================================================================

#[test]
fn test_second_completion_fails_and_changes_nothing() {
    let mut engine = engine();
    let id = add_quest(&mut engine, Difficulty::Medium);

    engine
        .complete_quest(id, Weather::Clear, day("2024-03-01"), NOW)
        .unwrap();
    let snapshot = engine.progress().clone();

    let err = engine
        .complete_quest(id, Weather::Storm, day("2024-03-02"), NOW + 60)
        .unwrap_err();
    assert!(matches!(err, VoyageError::AlreadyCompleted(_)));

    // Coins, streak, and distribution untouched by the failed call
    assert_eq!(engine.progress(), &snapshot);
    assert_eq!(engine.ledger().get(id).unwrap().completed_at, Some(NOW));
}

#[test]
fn test_completion_is_only_reward_path() {
    let mut engine = engine();
    let id = add_quest(&mut engine, Difficulty::Hard);

    // Deleting an active quest never pays
    assert!(engine.delete_quest(id).unwrap());
    assert_eq!(engine.progress().coins, 0);
    assert_eq!(engine.progress().total_quests_completed, 0);
}

// =============================================================================
// Deletion
// =============================================================================

#[test]
fn test_delete_active_then_complete_fails_not_found() {
    let mut engine = engine();
    let id = add_quest(&mut engine, Difficulty::Easy);

    assert!(engine.delete_quest(id).unwrap());
    assert!(matches!(
        engine.complete_quest(id, Weather::Clear, day("2024-03-01"), NOW),
        Err(VoyageError::NotFound(_))
    ));
}

#[test]
fn test_delete_completed_quest_keeps_rewards_and_totals() {
    let mut engine = engine();
    let id = add_quest(&mut engine, Difficulty::Hard);
    engine
        .complete_quest(id, Weather::Clear, day("2024-03-01"), NOW)
        .unwrap();

    assert!(engine.delete_quest(id).unwrap());
    assert_eq!(engine.progress().coins, 30);
    // The completion still counts even though the quest is gone
    assert_eq!(engine.progress().total_quests_completed, 1);
    assert_eq!(engine.ledger().len(), 0);
}

#[test]
fn test_delete_missing_quest_reports_false() {
    let mut engine = engine();
    assert!(!engine.delete_quest(12345).unwrap());
}

// =============================================================================
// Rollback on storage failure
// =============================================================================

#[test]
fn test_failed_quest_write_rolls_back_completion() {
    let storage = FailingStorage::new();
    let mut engine = ProgressionEngine::load(storage).unwrap();
    let id = add_quest(&mut engine, Difficulty::Medium);

    // Fail the quest-file write mid-completion; nothing may stick
    engine.storage().fail_quest_saves.set(true);
    let err = engine
        .complete_quest(id, Weather::Storm, day("2024-03-01"), NOW)
        .unwrap_err();
    assert!(matches!(err, VoyageError::Persistence(_)));

    let quest = engine.ledger().get(id).unwrap();
    assert_eq!(quest.status, QuestStatus::Active);
    assert!(quest.completed_at.is_none());
    assert_eq!(engine.progress(), &UserProgress::default());

    // Clearing the fault lets the same completion succeed
    engine.storage().fail_quest_saves.set(false);
    let result = engine
        .complete_quest(id, Weather::Storm, day("2024-03-01"), NOW)
        .unwrap();
    assert_eq!(result.coins_earned, 30);
}

#[test]
fn test_failed_progress_write_rolls_back_completion() {
    let storage = FailingStorage::new();
    let mut engine = ProgressionEngine::load(storage).unwrap();
    let id = add_quest(&mut engine, Difficulty::Easy);

    engine.storage().fail_progress_saves.set(true);
    let err = engine
        .complete_quest(id, Weather::Clear, day("2024-03-01"), NOW)
        .unwrap_err();
    assert!(matches!(err, VoyageError::Persistence(_)));

    assert!(engine.ledger().get(id).unwrap().is_active());
    assert_eq!(engine.progress().coins, 0);
    assert_eq!(engine.progress().current_streak, 0);
    assert!(!engine.progress().is_unlocked(AchievementId::FirstQuest));
    // No events for a failed completion
    assert!(engine.take_events().is_empty());
}

#[test]
fn test_failed_create_does_not_grow_ledger() {
    let storage = FailingStorage::new();
    let mut engine = ProgressionEngine::load(storage).unwrap();

    engine.storage().fail_quest_saves.set(true);
    let err = engine
        .create_quest("doomed", Difficulty::Easy, None, NOW_MS)
        .unwrap_err();
    assert!(matches!(err, VoyageError::Persistence(_)));
    assert!(engine.ledger().is_empty());
}

#[test]
fn test_failed_purchase_keeps_balance() {
    let storage = FailingStorage::new();
    let mut engine = ProgressionEngine::load(storage).unwrap();
    let id = add_quest(&mut engine, Difficulty::Hard);
    engine
        .complete_quest(id, Weather::Storm, day("2024-03-01"), NOW)
        .unwrap();
    assert_eq!(engine.progress().coins, 45);

    engine.storage().fail_progress_saves.set(true);
    let err = engine.purchase("map").unwrap_err();
    assert!(matches!(err, VoyageError::Persistence(_)));
    assert_eq!(engine.progress().coins, 45);
    assert!(engine.progress().inventory.is_empty());
}

// =============================================================================
// Domain events
// =============================================================================

#[test]
fn test_completion_emits_quest_and_achievement_events() {
    let mut engine = engine();
    let id = add_quest(&mut engine, Difficulty::Easy);
    engine
        .complete_quest(id, Weather::Clear, day("2024-03-01"), NOW)
        .unwrap();

    let events = engine.take_events();
    assert_eq!(
        events[0],
        QuestEvent::QuestCompleted {
            quest_id: id,
            coins_earned: 10
        }
    );
    assert_eq!(
        events[1],
        QuestEvent::AchievementUnlocked {
            id: AchievementId::FirstQuest
        }
    );
    assert!(engine.take_events().is_empty());
}
