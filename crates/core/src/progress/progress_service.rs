//! Progress derivation.

use rust_decimal::Decimal;

use crate::constants::PROGRESS_PERCENT_MAX;
use crate::goals::Goal;
use crate::schedule::SteppingStone;

use super::progress_model::GoalProgress;

/// Index of the first incomplete stone, or `None` when all are covered.
///
/// Stones complete strictly in order, one at a time, so this is also the
/// only index `complete_milestone` will accept.
pub fn current_index(schedule: &[SteppingStone]) -> Option<usize> {
    schedule.iter().find(|stone| !stone.completed).map(|s| s.index)
}

/// Reduces a goal and its schedule to aggregate progress figures.
pub fn progress(goal: &Goal, schedule: &[SteppingStone]) -> GoalProgress {
    let total_saved = goal.total_saved();
    let percent_max = Decimal::from(PROGRESS_PERCENT_MAX);
    let progress_percent = if goal.amount.is_zero() {
        Decimal::ZERO
    } else {
        (total_saved * percent_max / goal.amount).min(percent_max)
    };

    GoalProgress {
        total_saved,
        progress_percent,
        is_complete: total_saved >= goal.amount,
        current_index: current_index(schedule),
    }
}
