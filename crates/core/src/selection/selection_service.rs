//! Active-goal selection.
//!
//! A view-side pointer into the goal collection, independent of
//! persistence; it is recomputed at startup rather than stored.

use crate::goals::Goal;

#[derive(Debug, Default, Clone)]
pub struct GoalSelection {
    active_goal_id: Option<String>,
}

impl GoalSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_goal_id(&self) -> Option<&str> {
        self.active_goal_id.as_deref()
    }

    /// Points the selection at the given goal. Existence is the caller's
    /// concern; the store checks before calling.
    pub fn select(&mut self, goal_id: impl Into<String>) {
        self.active_goal_id = Some(goal_id.into());
    }

    /// Drops the selection if it points at the given goal.
    pub fn clear_if(&mut self, goal_id: &str) {
        if self.active_goal_id.as_deref() == Some(goal_id) {
            self.active_goal_id = None;
        }
    }

    /// Repairs the selection against the current collection: an unset or
    /// dangling pointer falls back to the first goal, or none when the
    /// collection is empty.
    pub fn reconcile(&mut self, goals: &[Goal]) {
        let valid = self
            .active_goal_id
            .as_deref()
            .map(|id| goals.iter().any(|g| g.id == id))
            .unwrap_or(false);
        if !valid {
            self.active_goal_id = goals.first().map(|g| g.id.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use crate::goals::Frequency;

    fn goal(id: &str) -> Goal {
        Goal {
            id: id.to_string(),
            name: format!("Goal {}", id),
            amount: dec!(100),
            frequency: Frequency::Weekly,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            due_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            steps_completed: vec![],
            completed: false,
            celebrated: false,
        }
    }

    #[test]
    fn test_reconcile_selects_first_goal_when_unset() {
        let goals = vec![goal("a"), goal("b")];
        let mut selection = GoalSelection::new();
        selection.reconcile(&goals);
        assert_eq!(selection.active_goal_id(), Some("a"));
    }

    #[test]
    fn test_reconcile_keeps_valid_selection() {
        let goals = vec![goal("a"), goal("b")];
        let mut selection = GoalSelection::new();
        selection.select("b");
        selection.reconcile(&goals);
        assert_eq!(selection.active_goal_id(), Some("b"));
    }

    #[test]
    fn test_reconcile_repairs_dangling_selection() {
        let goals = vec![goal("a")];
        let mut selection = GoalSelection::new();
        selection.select("gone");
        selection.reconcile(&goals);
        assert_eq!(selection.active_goal_id(), Some("a"));
    }

    #[test]
    fn test_reconcile_clears_selection_when_empty() {
        let mut selection = GoalSelection::new();
        selection.select("a");
        selection.reconcile(&[]);
        assert_eq!(selection.active_goal_id(), None);
    }

    #[test]
    fn test_clear_if_only_drops_matching_goal() {
        let mut selection = GoalSelection::new();
        selection.select("a");
        selection.clear_if("b");
        assert_eq!(selection.active_goal_id(), Some("a"));
        selection.clear_if("a");
        assert_eq!(selection.active_goal_id(), None);
    }
}
