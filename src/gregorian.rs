//! Proleptic Gregorian day arithmetic anchored at [`SolarDate::EPOCH`].
//!
//! Dates are mapped to a running day number (the Julian day number) so that
//! offsets and stepping reduce to integer arithmetic.

use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_MONTH, MAX_SOLAR_YEAR,
};
use crate::types::SolarDate;

/// Day number of 0001-01-01
const MIN_DAY_NUMBER: i64 = 1_721_426;
/// Day number of 9999-12-31
const MAX_DAY_NUMBER: i64 = 5_373_484;

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Julian day number of `date`.
pub fn day_number(date: SolarDate) -> i64 {
    let y = i64::from(date.year());
    let m = i64::from(date.month());
    let d = i64::from(date.day());
    (1461 * (y + 4800 + (m - 14) / 12)) / 4 + (367 * (m - 2 - 12 * ((m - 14) / 12))) / 12
        - (3 * ((y + 4900 + (m - 14) / 12) / 100)) / 4
        + d
        - 32075
}

/// Inverse of [`day_number`].
///
/// Returns `None` if the day falls outside years `1..=MAX_SOLAR_YEAR`.
pub fn from_day_number(jdn: i64) -> Option<SolarDate> {
    if !(MIN_DAY_NUMBER..=MAX_DAY_NUMBER).contains(&jdn) {
        return None;
    }
    let f = jdn + 1401 + (((4 * jdn + 274_277) / 146_097) * 3) / 4 - 38;
    let e = 4 * f + 3;
    let g = (e % 1461) / 4;
    let h = 5 * g + 2;
    let day = (h % 153) / 5 + 1;
    let month = (h / 153 + 2) % 12 + 1;
    let year = e / 1461 - 4716 + (12 + 2 - month) / 12;

    let year = u16::try_from(year).ok().filter(|y| *y <= MAX_SOLAR_YEAR)?;
    let month = u8::try_from(month).ok()?;
    let day = u8::try_from(day).ok()?;
    Some(SolarDate::from_parts(year, month, day))
}

/// Whole-day difference between `date` and the epoch. Negative before the epoch.
pub fn solar_day_offset(date: SolarDate) -> i64 {
    day_number(date) - day_number(SolarDate::EPOCH)
}

/// Steps `n` days from `base`.
///
/// Returns `None` if the result falls outside years `1..=MAX_SOLAR_YEAR`.
pub fn add_days(base: SolarDate, n: i64) -> Option<SolarDate> {
    day_number(base).checked_add(n).and_then(from_day_number)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: u16, month: u8, day: u8) -> SolarDate {
        SolarDate::new(year, month, day).unwrap()
    }

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year: u16,
            is_leap: bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year: 2024,
                is_leap: true,
                description: "divisible by 4",
            },
            TestCase {
                year: 2023,
                is_leap: false,
                description: "not divisible by 4",
            },
            TestCase {
                year: 1900,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2100,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2000,
                is_leap: true,
                description: "divisible by 400",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({})",
                case.year,
                case.description
            );
        }
    }

    #[test]
    fn test_days_in_month_february() {
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2024, 4), 30);
        assert_eq!(days_in_month(2024, 12), 31);
    }

    #[test]
    fn test_day_number_known_values() {
        assert_eq!(day_number(date(2000, 1, 1)), 2_451_545);
        assert_eq!(day_number(date(1970, 1, 1)), 2_440_588);
        assert_eq!(day_number(SolarDate::EPOCH), 2_415_051);
    }

    #[test]
    fn test_from_day_number_known_values() {
        assert_eq!(from_day_number(2_451_545), Some(date(2000, 1, 1)));
        assert_eq!(from_day_number(2_415_051), Some(SolarDate::EPOCH));
        assert_eq!(from_day_number(2_459_466), Some(date(2021, 9, 8)));
    }

    #[test]
    fn test_from_day_number_out_of_range() {
        let first = day_number(date(1, 1, 1));
        let last = day_number(date(9999, 12, 31));
        assert_eq!(from_day_number(first), Some(date(1, 1, 1)));
        assert_eq!(from_day_number(first - 1), None);
        assert_eq!(from_day_number(last), Some(date(9999, 12, 31)));
        assert_eq!(from_day_number(last + 1), None);
    }

    #[test]
    fn test_solar_day_offset() {
        struct TestCase {
            date: (u16, u8, u8),
            offset: i64,
        }

        let cases = [
            TestCase { date: (1900, 1, 31), offset: 0 },
            TestCase { date: (1900, 1, 30), offset: -1 },
            TestCase { date: (1900, 3, 1), offset: 29 },
            TestCase { date: (1970, 1, 1), offset: 25_537 },
            TestCase { date: (2000, 1, 1), offset: 36_494 },
            TestCase { date: (2024, 2, 29), offset: 45_319 },
            TestCase { date: (2100, 12, 31), offset: 73_383 },
        ];

        for case in &cases {
            let (y, m, d) = case.date;
            assert_eq!(solar_day_offset(date(y, m, d)), case.offset, "{y:04}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn test_add_days() {
        assert_eq!(add_days(SolarDate::EPOCH, 0), Some(SolarDate::EPOCH));
        assert_eq!(add_days(SolarDate::EPOCH, 10_000), Some(date(1927, 6, 19)));
        assert_eq!(add_days(SolarDate::EPOCH, -31), Some(date(1899, 12, 31)));
        assert_eq!(add_days(date(2000, 2, 28), 2), Some(date(2000, 3, 1)));
        assert_eq!(add_days(date(1900, 2, 28), 1), Some(date(1900, 3, 1)));
        assert_eq!(add_days(date(9999, 12, 31), 1), None);
        assert_eq!(add_days(SolarDate::EPOCH, i64::MAX), None);
        assert_eq!(add_days(SolarDate::EPOCH, i64::MAX / 2), None);
        assert_eq!(add_days(SolarDate::EPOCH, i64::MIN / 2), None);
    }

    #[test]
    fn test_offset_and_add_days_agree() {
        let mut current = SolarDate::EPOCH;
        for n in 0..=solar_day_offset(date(2100, 12, 31)) {
            assert_eq!(solar_day_offset(current), n);
            assert_eq!(add_days(SolarDate::EPOCH, n), Some(current));
            current = add_days(current, 1).unwrap();
        }
    }
}
