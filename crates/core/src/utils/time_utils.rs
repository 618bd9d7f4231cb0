use chrono::{DateTime, Datelike, NaiveDate, Utc};
use chrono_tz::Tz;

/// Default timezone for goal dates.
/// This is the canonical timezone used to convert UTC instants to domain
/// dates. For a US-focused savings tracker, America/New_York is a sensible
/// default.
pub const DEFAULT_GOAL_TZ: Tz = chrono_tz::America::New_York;

/// Converts a UTC instant to a goal date in the given timezone.
///
/// Use this whenever a "calendar date" must be derived from a timestamp,
/// e.g. the default start date of a newly created goal.
pub fn goal_date_from_utc(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// Number of whole days from `start` to `end` (negative when `end` is
/// before `start`).
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

/// Number of whole calendar months from `start` to `end`, ignoring the
/// day-of-month. `2024-01-31 -> 2024-02-01` counts as one month.
pub fn calendar_months_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end.year() as i64 - start.year() as i64) * 12 + (end.month() as i64 - start.month() as i64)
}

/// Trait supplying the current date. Injectable so services can be tested
/// against a fixed calendar.
pub trait ClockTrait: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Production clock, reading the system time in the default goal timezone.
#[derive(Clone, Default)]
pub struct SystemClock;

impl ClockTrait for SystemClock {
    fn today(&self) -> NaiveDate {
        goal_date_from_utc(Utc::now(), DEFAULT_GOAL_TZ)
    }
}

/// Test clock pinned to a single date.
#[derive(Clone)]
pub struct FixedClock(pub NaiveDate);

impl ClockTrait for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
