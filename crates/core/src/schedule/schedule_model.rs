//! Stepping-stone models, derived from a goal and never persisted.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Display status of a stone relative to the current milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoneStatus {
    Completed,
    Current,
    Locked,
}

/// A single milestone in a goal's schedule.
///
/// Recomputed from the owning goal on demand; completion state is
/// reconciled from the raw contribution history, not stored per stone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SteppingStone {
    pub index: usize,
    pub amount: Decimal,
    pub due_date: NaiveDate,
    pub completed: bool,
}

impl SteppingStone {
    pub fn status(&self, current_index: Option<usize>) -> StoneStatus {
        if self.completed {
            StoneStatus::Completed
        } else if current_index == Some(self.index) {
            StoneStatus::Current
        } else {
            StoneStatus::Locked
        }
    }
}
