//! Error taxonomy for ledger, progression, and storage operations.

use crate::quests::QuestId;
use std::io;
use thiserror::Error;

/// Errors surfaced by the quest ledger, progression engine, and storage
/// gateway.
///
/// Mutating operations either succeed completely or leave state untouched:
/// a [`VoyageError::Persistence`] failure rolls back any in-memory change
/// made earlier in the same operation.
#[derive(Debug, Error)]
pub enum VoyageError {
    /// Input rejected before any mutation (empty title, unknown difficulty
    /// or shop item).
    #[error("invalid input: {0}")]
    Validation(String),

    /// No quest with the given id exists.
    #[error("quest {0} not found")]
    NotFound(QuestId),

    /// The quest was already completed; completion happens at most once.
    #[error("quest {0} is already completed")]
    AlreadyCompleted(QuestId),

    /// A purchase would drive the coin balance negative.
    #[error("not enough coins: need {needed}, have {available}")]
    InsufficientCoins { needed: u64, available: u64 },

    /// The storage gateway failed to persist state.
    #[error("failed to persist state: {0}")]
    Persistence(#[from] io::Error),
}
