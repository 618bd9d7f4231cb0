//! Goals domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Milestone cadence of a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
        }
    }
}

/// Domain model representing a savings goal.
///
/// `steps_completed` is the append-only contribution history; each entry
/// corresponds to one completed stepping stone. Entries are never removed
/// except by whole-goal deletion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub name: String,
    pub amount: Decimal,
    pub frequency: Frequency,
    pub start_date: NaiveDate,
    pub due_date: NaiveDate,
    pub steps_completed: Vec<Decimal>,
    pub completed: bool,
    /// One-time celebration marker, set when the completion celebration is
    /// first consumed. Cleared only by goal deletion. Absent in records
    /// written before this field existed.
    #[serde(default)]
    pub celebrated: bool,
}

impl Goal {
    /// Sum of all recorded contributions.
    pub fn total_saved(&self) -> Decimal {
        self.steps_completed.iter().copied().sum()
    }
}

/// Input model for creating a new goal.
///
/// `start_date` defaults to the clock's current date when omitted.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub name: String,
    pub amount: Decimal,
    pub frequency: Frequency,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    pub due_date: NaiveDate,
}

/// Patch model for editing a goal. Unset fields are left unchanged;
/// contribution history is never rewritten by an edit.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct GoalUpdate {
    pub name: Option<String>,
    pub amount: Option<Decimal>,
    pub frequency: Option<Frequency>,
    pub start_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
}
