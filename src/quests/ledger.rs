//! The quest ledger: an in-memory, insertion-ordered collection of quests.
//!
//! The ledger validates and mutates; durability and rollback are owned by
//! the progression engine, which persists after every successful mutation.

use crate::errors::VoyageError;
use crate::quests::types::{Difficulty, MapPosition, Quest, QuestId, QuestStatus};
use chrono::NaiveDate;

#[derive(Debug, Clone, Default)]
pub struct QuestLedger {
    quests: Vec<Quest>,
}

impl QuestLedger {
    pub fn new(quests: Vec<Quest>) -> Self {
        Self { quests }
    }

    /// Creates a quest and appends it to the ledger.
    ///
    /// Fails with [`VoyageError::Validation`] when the title is empty or
    /// whitespace-only. The difficulty arrives already parsed; unknown
    /// values are rejected at the parse boundary.
    pub fn create(
        &mut self,
        title: &str,
        difficulty: Difficulty,
        deadline: Option<NaiveDate>,
        now_ms: i64,
        position: MapPosition,
    ) -> Result<Quest, VoyageError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(VoyageError::Validation(
                "quest title must not be empty".to_string(),
            ));
        }

        let quest = Quest {
            id: self.next_id(now_ms),
            title: title.to_string(),
            difficulty,
            status: QuestStatus::Active,
            deadline,
            created_at: now_ms / 1000,
            completed_at: None,
            position: Some(position),
        };
        self.quests.push(quest.clone());

        Ok(quest)
    }

    /// Lookup by identity; absence is not an error.
    pub fn get(&self, id: QuestId) -> Option<&Quest> {
        self.quests.iter().find(|q| q.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: QuestId) -> Option<&mut Quest> {
        self.quests.iter_mut().find(|q| q.id == id)
    }

    /// Active quests in insertion order.
    pub fn list_active(&self) -> impl Iterator<Item = &Quest> {
        self.quests.iter().filter(|q| q.is_active())
    }

    /// Every quest, active and completed, in insertion order.
    pub fn all(&self) -> &[Quest] {
        &self.quests
    }

    pub fn len(&self) -> usize {
        self.quests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quests.is_empty()
    }

    /// Removes a quest regardless of status. Returns whether one existed.
    /// Rewards from an already-completed quest are never clawed back.
    pub fn delete(&mut self, id: QuestId) -> bool {
        self.take(id).is_some()
    }

    /// Removes a quest, returning it with its slot so a failed persist can
    /// put it back in insertion order.
    pub(crate) fn take(&mut self, id: QuestId) -> Option<(usize, Quest)> {
        let index = self.quests.iter().position(|q| q.id == id)?;
        Some((index, self.quests.remove(index)))
    }

    pub(crate) fn restore(&mut self, index: usize, quest: Quest) {
        let index = index.min(self.quests.len());
        self.quests.insert(index, quest);
    }

    /// IDs derive from the creation instant; a same-millisecond collision
    /// bumps past the newest existing ID so ordering stays strict.
    fn next_id(&self, now_ms: i64) -> QuestId {
        match self.quests.iter().map(|q| q.id).max() {
            Some(max_id) => now_ms.max(max_id + 1),
            None => now_ms,
        }
    }
}
