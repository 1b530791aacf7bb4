//! The progression engine: completion rewards, streaks, achievements, and
//! the shop, all over one owned state pair.
//!
//! The engine owns the quest ledger and the progress record and persists
//! both through the injected storage gateway after every successful
//! mutation. Completion is atomic from the caller's perspective: a failed
//! write rolls the in-memory state back to its pre-call values, so no
//! partial coin grant or orphaned streak increment is ever observable.

use crate::achievements::{self, AchievementId};
use crate::constants::{EASY_REWARD, HARD_REWARD, MEDIUM_REWARD};
use crate::errors::VoyageError;
use crate::events::QuestEvent;
use crate::progress::UserProgress;
use crate::quests::{Difficulty, MapPosition, Quest, QuestId, QuestLedger};
use crate::shop::{self, ShopItem};
use crate::storage::Storage;
use crate::weather::Weather;
use chrono::NaiveDate;
use log::warn;

/// Base coin payouts per difficulty. Injectable so tests can vary the
/// numbers without touching the rules.
#[derive(Debug, Clone)]
pub struct RewardTable {
    easy: u64,
    medium: u64,
    hard: u64,
}

impl RewardTable {
    pub fn new(easy: u64, medium: u64, hard: u64) -> Self {
        Self { easy, medium, hard }
    }

    pub fn base_reward(&self, difficulty: Difficulty) -> u64 {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }
}

impl Default for RewardTable {
    fn default() -> Self {
        Self::new(EASY_REWARD, MEDIUM_REWARD, HARD_REWARD)
    }
}

/// What a successful completion paid out.
#[derive(Debug, Clone)]
pub struct CompletionResult {
    /// The quest in its completed state.
    pub quest: Quest,
    pub coins_earned: u64,
    pub new_coin_total: u64,
    pub newly_unlocked: Vec<AchievementId>,
}

pub struct ProgressionEngine<S: Storage> {
    storage: S,
    ledger: QuestLedger,
    progress: UserProgress,
    reward_table: RewardTable,
    pending_events: Vec<QuestEvent>,
}

impl<S: Storage> ProgressionEngine<S> {
    /// Loads ledger and progress through the gateway. Missing records come
    /// back as the documented defaults.
    pub fn load(storage: S) -> Result<Self, VoyageError> {
        let quests = storage.load_quests()?;
        let progress = storage.load_user_progress()?;
        Ok(Self {
            storage,
            ledger: QuestLedger::new(quests),
            progress,
            reward_table: RewardTable::default(),
            pending_events: Vec::new(),
        })
    }

    pub fn with_reward_table(mut self, reward_table: RewardTable) -> Self {
        self.reward_table = reward_table;
        self
    }

    pub fn ledger(&self) -> &QuestLedger {
        &self.ledger
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn progress(&self) -> &UserProgress {
        &self.progress
    }

    /// Drains the queued domain events for the presentation layer.
    pub fn take_events(&mut self) -> Vec<QuestEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Creates a quest, scatters it onto the chart, and persists the
    /// ledger. The new quest is dropped again if the write fails.
    pub fn create_quest(
        &mut self,
        title: &str,
        difficulty: Difficulty,
        deadline: Option<NaiveDate>,
        now_ms: i64,
    ) -> Result<Quest, VoyageError> {
        let position = MapPosition::random(&mut rand::thread_rng());
        let quest = self
            .ledger
            .create(title, difficulty, deadline, now_ms, position)?;

        if let Err(e) = self.storage.save_quests(self.ledger.all()) {
            self.ledger.delete(quest.id);
            return Err(VoyageError::Persistence(e));
        }
        Ok(quest)
    }

    /// Completes a quest and applies the whole reward flow.
    ///
    /// `weather` is the phase active at completion time, `today` the
    /// caller's local calendar date (day boundary per the user's clock),
    /// `now` the completion instant in unix seconds.
    pub fn complete_quest(
        &mut self,
        id: QuestId,
        weather: Weather,
        today: NaiveDate,
        now: i64,
    ) -> Result<CompletionResult, VoyageError> {
        let Some(quest) = self.ledger.get_mut(id) else {
            return Err(VoyageError::NotFound(id));
        };
        if !quest.is_active() {
            return Err(VoyageError::AlreadyCompleted(id));
        }

        let quest_before = quest.clone();
        let progress_before = self.progress.clone();
        quest.complete(now);
        let completed = quest.clone();

        let base = self.reward_table.base_reward(completed.difficulty);
        // Round half-up; rewards are never fractional
        let coins_earned = (base as f64 * weather.multiplier()).round() as u64;
        self.progress.coins += coins_earned;
        self.progress.record_daily_activity(today);
        self.progress.record_completion(completed.difficulty);
        self.progress.weather_mastery.mark(weather);

        // Unlocks ride in the same durable write as the rest of the flow,
        // and roll back with it
        let newly_unlocked = achievements::evaluate(&self.progress);
        for achievement in &newly_unlocked {
            self.progress.unlock(*achievement, now);
        }

        if let Err(e) = self.storage.save_quests(self.ledger.all()) {
            self.rollback(id, quest_before, progress_before);
            return Err(VoyageError::Persistence(e));
        }
        if let Err(e) = self.storage.save_user_progress(&self.progress) {
            self.rollback(id, quest_before, progress_before);
            // The quest file already has the completed status; rewrite the
            // rolled-back ledger so disk and memory agree again
            if let Err(undo) = self.storage.save_quests(self.ledger.all()) {
                warn!("could not rewrite quests after failed progress save: {undo}");
            }
            return Err(VoyageError::Persistence(e));
        }

        self.pending_events.push(QuestEvent::QuestCompleted {
            quest_id: id,
            coins_earned,
        });
        for achievement in &newly_unlocked {
            self.pending_events
                .push(QuestEvent::AchievementUnlocked { id: *achievement });
        }

        Ok(CompletionResult {
            quest: completed,
            coins_earned,
            new_coin_total: self.progress.coins,
            newly_unlocked,
        })
    }

    /// Deletes a quest in any state and persists the ledger. Returns
    /// whether a quest was removed. No reward adjustment either way.
    pub fn delete_quest(&mut self, id: QuestId) -> Result<bool, VoyageError> {
        let Some((index, quest)) = self.ledger.take(id) else {
            return Ok(false);
        };
        if let Err(e) = self.storage.save_quests(self.ledger.all()) {
            self.ledger.restore(index, quest);
            return Err(VoyageError::Persistence(e));
        }
        Ok(true)
    }

    /// Re-pins a quest marker on the chart.
    pub fn set_quest_position(
        &mut self,
        id: QuestId,
        position: MapPosition,
    ) -> Result<(), VoyageError> {
        let Some(quest) = self.ledger.get_mut(id) else {
            return Err(VoyageError::NotFound(id));
        };
        let before = quest.position;
        quest.position = Some(position);

        if let Err(e) = self.storage.save_quests(self.ledger.all()) {
            if let Some(quest) = self.ledger.get_mut(id) {
                quest.position = before;
            }
            return Err(VoyageError::Persistence(e));
        }
        Ok(())
    }

    /// Buys a shop item, spending coins. The balance can never go
    /// negative; repeat purchases are allowed.
    pub fn purchase(&mut self, item_id: &str) -> Result<&'static ShopItem, VoyageError> {
        let Some(item) = shop::get_item(item_id) else {
            return Err(VoyageError::Validation(format!(
                "unknown shop item '{item_id}'"
            )));
        };
        if item.cost > self.progress.coins {
            return Err(VoyageError::InsufficientCoins {
                needed: item.cost,
                available: self.progress.coins,
            });
        }

        let progress_before = self.progress.clone();
        self.progress.coins -= item.cost;
        self.progress.inventory.push(item.id.to_string());

        if let Err(e) = self.storage.save_user_progress(&self.progress) {
            self.progress = progress_before;
            return Err(VoyageError::Persistence(e));
        }
        Ok(item)
    }

    fn rollback(&mut self, id: QuestId, quest_before: Quest, progress_before: UserProgress) {
        if let Some(quest) = self.ledger.get_mut(id) {
            *quest = quest_before;
        }
        self.progress = progress_before;
    }
}
