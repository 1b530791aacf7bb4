//! Quest entities and the ledger that owns them.

pub mod ledger;
pub mod types;

pub use ledger::QuestLedger;
pub use types::{Difficulty, MapPosition, Quest, QuestId, QuestStatus};
