/// Months in a simulated year; annual rates are divided by this to get
/// the monthly figure.
pub const MONTHS_PER_YEAR: u32 = 12;

/// Factor converting a decimal fraction into a percentage.
pub const PERCENT_FACTOR: u32 = 100;

/// Decimal precision for display and export
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
