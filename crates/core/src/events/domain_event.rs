//! Domain event types.

use serde::{Deserialize, Serialize};

/// Domain events emitted by the goal store after successful mutations.
///
/// These events represent facts about goal data changes. UI adapters
/// translate them into platform-specific actions (schedule re-render,
/// celebration animation, badge notification).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    /// Goals were created, updated, or deleted.
    GoalsChanged { goal_ids: Vec<String> },

    /// A stepping stone was marked complete.
    MilestoneCompleted { goal_id: String, index: usize },

    /// A goal crossed from incomplete into completed.
    GoalCompleted { goal_id: String },

    /// Creating a goal crossed a badge threshold.
    BadgeUnlocked { label: String, unlock_at: usize },

    /// A durable save failed; the engine continues in-memory only.
    StorageDegraded { reason: String },
}

impl DomainEvent {
    /// Creates a GoalsChanged event.
    pub fn goals_changed(goal_ids: Vec<String>) -> Self {
        Self::GoalsChanged { goal_ids }
    }

    /// Creates a MilestoneCompleted event.
    pub fn milestone_completed(goal_id: String, index: usize) -> Self {
        Self::MilestoneCompleted { goal_id, index }
    }

    /// Creates a GoalCompleted event.
    pub fn goal_completed(goal_id: String) -> Self {
        Self::GoalCompleted { goal_id }
    }

    /// Creates a BadgeUnlocked event.
    pub fn badge_unlocked(label: String, unlock_at: usize) -> Self {
        Self::BadgeUnlocked { label, unlock_at }
    }

    /// Creates a StorageDegraded event.
    pub fn storage_degraded(reason: String) -> Self {
        Self::StorageDegraded { reason }
    }
}
