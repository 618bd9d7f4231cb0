use std::sync::RwLock;

use crate::errors::Result;
use crate::goals::goals_model::{Goal, GoalUpdate, NewGoal};
use crate::progress::GoalOverview;

/// Persistence port for the goal collection.
///
/// The store calls `save_goals` after every mutating operation.
/// Implementations must tolerate missing or malformed stored data by
/// returning an empty collection from `load_goals` and logging the parse
/// failure, never erroring on it.
pub trait GoalRepositoryTrait: Send + Sync {
    fn load_goals(&self) -> Result<Vec<Goal>>;
    fn save_goals(&self, goals: &[Goal]) -> Result<()>;
}

/// Trait for goal store operations.
pub trait GoalServiceTrait: Send + Sync {
    fn get_goals(&self) -> Result<Vec<Goal>>;
    fn get_goal(&self, goal_id: &str) -> Result<Goal>;
    fn create_goal(&self, new_goal: NewGoal) -> Result<Goal>;
    fn edit_goal(&self, goal_id: &str, update: GoalUpdate) -> Result<Goal>;
    fn delete_goal(&self, goal_id: &str) -> Result<()>;
    fn complete_milestone(&self, goal_id: &str, milestone_index: usize) -> Result<Goal>;
    fn overview(&self, goal_id: &str) -> Result<GoalOverview>;
    fn take_celebration(&self, goal_id: &str) -> Result<bool>;
    fn select_goal(&self, goal_id: &str) -> Result<()>;
    fn active_goal_id(&self) -> Option<String>;
}

/// In-memory repository for tests and non-durable sessions.
#[derive(Default)]
pub struct MemoryGoalRepository {
    goals: RwLock<Vec<Goal>>,
}

impl MemoryGoalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the repository with an existing collection.
    pub fn with_goals(goals: Vec<Goal>) -> Self {
        Self {
            goals: RwLock::new(goals),
        }
    }
}

impl GoalRepositoryTrait for MemoryGoalRepository {
    fn load_goals(&self) -> Result<Vec<Goal>> {
        Ok(self.goals.read().unwrap().clone())
    }

    fn save_goals(&self, goals: &[Goal]) -> Result<()> {
        *self.goals.write().unwrap() = goals.to_vec();
        Ok(())
    }
}
