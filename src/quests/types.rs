//! Quest value types and their wire shapes.

use crate::constants::MAP_MARGIN;
use crate::errors::VoyageError;
use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Unique quest identifier, derived from the creation instant in unix
/// milliseconds. Strictly increasing within one ledger.
pub type QuestId = i64;

/// Quest difficulty. Drives the base coin reward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All difficulties in ascending reward order.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = VoyageError;

    /// Parses the wire form. Anything outside the allowed set is rejected,
    /// never defaulted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(VoyageError::Validation(format!(
                "unknown difficulty '{other}'"
            ))),
        }
    }
}

/// Lifecycle state. The only transition is `Active → Completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestStatus {
    Active,
    Completed,
}

/// Fractional `(x, y)` position on the sea chart, both in `[0, 1]`.
/// Display-only; the reward rules never read it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapPosition {
    pub x: f64,
    pub y: f64,
}

impl MapPosition {
    /// Random position with a coastal margin so markers stay off the
    /// chart border.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            x: rng.gen_range(MAP_MARGIN..(1.0 - MAP_MARGIN)),
            y: rng.gen_range(MAP_MARGIN..(1.0 - MAP_MARGIN)),
        }
    }
}

/// A user-created task on the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quest {
    pub id: QuestId,
    pub title: String,
    pub difficulty: Difficulty,
    pub status: QuestStatus,
    /// Informational; an overdue deadline never blocks completion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
    /// Unix seconds, set once at creation.
    pub created_at: i64,
    /// Unix seconds, set once on the `Active → Completed` transition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<MapPosition>,
}

impl Quest {
    pub fn is_active(&self) -> bool {
        self.status == QuestStatus::Active
    }

    /// Marks the quest completed and stamps the instant. Callers check
    /// `is_active` first; the progression engine owns that guard.
    pub(crate) fn complete(&mut self, now: i64) {
        self.status = QuestStatus::Completed;
        self.completed_at = Some(now);
    }
}
