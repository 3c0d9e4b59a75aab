use std::ops::RangeInclusive;

/// First lunar year covered by the year table (inclusive)
pub const MIN_YEAR: u16 = 1900;
/// Last lunar year covered by the year table (inclusive)
pub const MAX_YEAR: u16 = 2100;
/// Every year accepted by the converter
pub const SUPPORTED_YEARS: RangeInclusive<u16> = MIN_YEAR..=MAX_YEAR;
/// Number of entries in the year table
pub const YEAR_COUNT: usize = (MAX_YEAR - MIN_YEAR + 1) as usize;

/// Solar year of the epoch. Solar 1900-01-31 is lunar 1900-01-01.
pub const EPOCH_YEAR: u16 = 1900;
/// Solar month of the epoch
pub const EPOCH_MONTH: u8 = 1;
/// Solar day of the epoch
pub const EPOCH_DAY: u8 = 31;

/// Ordinary months in a lunar year, not counting a leap month
pub const MONTHS_PER_YEAR: u8 = 12;
/// Length of a short ("small") lunar month
pub const SHORT_MONTH_DAYS: u8 = 29;
/// Length of a long ("big") lunar month
pub const LONG_MONTH_DAYS: u8 = 30;
/// Marker for "this year has no leap month"
pub const NO_LEAP_MONTH: u8 = 0;

/// Largest Gregorian year a `SolarDate` can hold
pub const MAX_SOLAR_YEAR: u16 = 9999;
/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;
/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Prefix on the month component of a leap-month date, e.g. `2023-L02-01`
pub const LEAP_MONTH_MARKER: char = 'L';
