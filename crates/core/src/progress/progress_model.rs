//! Progress view models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::goals::Goal;
use crate::rewards::{Badge, LevelInfo, Uniform};
use crate::schedule::SteppingStone;

/// Aggregate progress derived from a goal and its schedule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    pub total_saved: Decimal,
    /// Percentage of the target saved, clamped so overshoot never exceeds 100.
    pub progress_percent: Decimal,
    pub is_complete: bool,
    /// Index of the stone eligible for completion next; `None` once every
    /// stone is covered.
    pub current_index: Option<usize>,
}

/// Everything the UI needs to render one goal: the goal itself, its derived
/// schedule and progress, the reward state, and whether to run the one-time
/// completion celebration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalOverview {
    pub goal: Goal,
    pub schedule: Vec<SteppingStone>,
    pub progress: GoalProgress,
    pub badges: Vec<Badge>,
    pub level: LevelInfo,
    pub uniforms: Vec<Uniform>,
    pub celebrate: bool,
}
