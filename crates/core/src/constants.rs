/// Decimal precision for per-stone amounts and displayed money values
pub const MONEY_DECIMAL_PRECISION: u32 = 2;

/// Upper bound for progress percentages; overshoot is clamped here
pub const PROGRESS_PERCENT_MAX: u32 = 100;
