//! Schedule generation.
//!
//! Pure derivation from goal parameters to an ordered stone sequence.
//! Deterministic for identical goal state and safe to call repeatedly,
//! so the UI can regenerate the schedule on every render.

use chrono::{Duration, Months, NaiveDate};
use num_traits::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::MONEY_DECIMAL_PRECISION;
use crate::goals::{Frequency, Goal};
use crate::utils::time_utils::{calendar_months_between, days_between};

use super::schedule_model::SteppingStone;

/// Number of stones derivable from cadence and date range.
///
/// Clamped to at least one: a goal whose due date is not after its start
/// date becomes a single all-or-nothing milestone.
pub fn step_count(frequency: Frequency, start: NaiveDate, due: NaiveDate) -> usize {
    let raw = match frequency {
        Frequency::Daily => days_between(start, due),
        Frequency::Weekly => days_between(start, due) / 7,
        Frequency::Monthly => calendar_months_between(start, due),
    };
    raw.max(1) as usize
}

/// Per-stone target, rounded to monetary precision.
///
/// The sum of rounded stone amounts may drift from the goal amount by up
/// to a cent per stone; this slack is accepted, not corrected.
pub fn stone_amount(goal_amount: Decimal, count: usize) -> Decimal {
    (goal_amount / Decimal::from(count as u64))
        .round_dp_with_strategy(MONEY_DECIMAL_PRECISION, RoundingStrategy::MidpointAwayFromZero)
}

/// Calendar date the stone at `index` falls due: the start date advanced
/// by `index` cadence units. Month arithmetic clamps to month ends, so a
/// Jan 31 start yields Feb 28/29 for the next monthly stone.
pub fn stone_due_date(frequency: Frequency, start: NaiveDate, index: usize) -> NaiveDate {
    match frequency {
        Frequency::Daily => start + Duration::days(index as i64),
        Frequency::Weekly => start + Duration::weeks(index as i64),
        Frequency::Monthly => start + Months::new(index as u32),
    }
}

/// Completed-stone count reconciled from the raw contribution total.
///
/// Re-deriving from dollars saved (rather than trusting a stored per-stone
/// flag) keeps completion consistent when the schedule itself changes,
/// e.g. after a frequency edit.
pub fn saved_steps(total_saved: Decimal, stone_amount: Decimal) -> usize {
    if stone_amount <= Decimal::ZERO {
        return 0;
    }
    (total_saved / stone_amount)
        .floor()
        .to_usize()
        .unwrap_or(0)
}

/// Derives the ordered stone sequence for a goal.
pub fn generate_schedule(goal: &Goal) -> Vec<SteppingStone> {
    let count = step_count(goal.frequency, goal.start_date, goal.due_date);
    let amount = stone_amount(goal.amount, count);
    let saved = saved_steps(goal.total_saved(), amount);

    (0..count)
        .map(|index| SteppingStone {
            index,
            amount,
            due_date: stone_due_date(goal.frequency, goal.start_date, index),
            completed: index < saved,
        })
        .collect()
}
