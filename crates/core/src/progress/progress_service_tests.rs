//! Tests for progress derivation.

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use crate::goals::{Frequency, Goal};
    use crate::progress::{current_index, progress};
    use crate::schedule::generate_schedule;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn weekly_goal(steps: Vec<rust_decimal::Decimal>) -> Goal {
        Goal {
            id: "g1".to_string(),
            name: "Test goal".to_string(),
            amount: dec!(500),
            frequency: Frequency::Weekly,
            start_date: date(2024, 1, 1),
            due_date: date(2024, 1, 29),
            steps_completed: steps,
            completed: false,
            celebrated: false,
        }
    }

    #[test]
    fn test_fresh_goal_starts_at_zero() {
        let goal = weekly_goal(vec![]);
        let schedule = generate_schedule(&goal);
        let p = progress(&goal, &schedule);

        assert_eq!(p.total_saved, dec!(0));
        assert_eq!(p.progress_percent, dec!(0));
        assert!(!p.is_complete);
        assert_eq!(p.current_index, Some(0));
    }

    #[test]
    fn test_halfway_reference_scenario() {
        let goal = weekly_goal(vec![dec!(125), dec!(125)]);
        let schedule = generate_schedule(&goal);
        let p = progress(&goal, &schedule);

        assert_eq!(p.total_saved, dec!(250));
        assert_eq!(p.progress_percent, dec!(50));
        assert!(!p.is_complete);
        assert_eq!(p.current_index, Some(2));
    }

    #[test]
    fn test_complete_goal_has_no_current_index() {
        let goal = weekly_goal(vec![dec!(125); 4]);
        let schedule = generate_schedule(&goal);
        let p = progress(&goal, &schedule);

        assert_eq!(p.total_saved, dec!(500));
        assert!(p.is_complete);
        assert_eq!(p.current_index, None);
    }

    #[test]
    fn test_overshoot_is_clamped_to_hundred_percent() {
        let goal = weekly_goal(vec![dec!(300), dec!(300)]);
        let schedule = generate_schedule(&goal);
        let p = progress(&goal, &schedule);

        assert_eq!(p.progress_percent, dec!(100));
        assert!(p.is_complete);
    }

    #[test]
    fn test_exact_target_is_complete() {
        let goal = Goal {
            amount: dec!(250),
            ..weekly_goal(vec![dec!(125), dec!(125)])
        };
        let schedule = generate_schedule(&goal);
        let p = progress(&goal, &schedule);

        assert!(p.is_complete);
        assert_eq!(p.progress_percent, dec!(100));
    }

    #[test]
    fn test_current_index_is_first_incomplete_stone() {
        let goal = weekly_goal(vec![dec!(125)]);
        let schedule = generate_schedule(&goal);
        assert_eq!(current_index(&schedule), Some(1));
    }
}
