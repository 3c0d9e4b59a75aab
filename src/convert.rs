//! Solar ⇄ lunar conversion over the year table.
//!
//! Both directions walk the table from the epoch year, so the month order used
//! here (a leap month directly after the ordinary month it doubles) is shared
//! by [`solar_to_lunar`] and [`lunar_to_solar`] through
//! [`YearRecord::months`](crate::table::YearRecord::months).

use std::ops::RangeInclusive;

use crate::consts::{MAX_YEAR, MIN_YEAR, SUPPORTED_YEARS};
use crate::gregorian::{add_days, solar_day_offset};
use crate::prelude::*;
use crate::table::{self, YearRecord};
use crate::types::{LunarDate, SolarDate};
use crate::ParseError;

/// Error type for conversions and lunar date validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// Year outside the supported window.
    #[error("Year {year} is outside the supported range {min}-{max}", min = MIN_YEAR, max = MAX_YEAR)]
    OutOfRange { year: u16 },

    /// Solar date earlier than 1900-01-31.
    #[error("Date {date} precedes the earliest convertible date {epoch}", epoch = SolarDate::EPOCH)]
    BeforeEpoch { date: SolarDate },

    /// Leap flag set on a month that is not the year's leap month.
    #[error("Month {month} of {year} is not a leap month (leap month: {leap_month})")]
    NotALeapMonth { year: u16, month: u8, leap_month: u8 },

    /// Day outside the length of the resolved month.
    #[error("Invalid day {day} for lunar {year}-{month:02}{suffix} (must be 1-{max_day})", suffix = leap_suffix(.is_leap_month))]
    DayOutOfRange {
        year: u16,
        month: u8,
        is_leap_month: bool,
        day: u8,
        max_day: u8,
    },

    /// Month number outside 1-12.
    #[error("Invalid lunar month: {month} (must be 1-12)")]
    InvalidMonth { month: u8 },

    /// Error parsing a date component.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

const fn leap_suffix(is_leap_month: &bool) -> &'static str {
    if *is_leap_month { " (leap)" } else { "" }
}

fn year_record(year: u16) -> Result<&'static YearRecord, ConversionError> {
    table::record(year).ok_or_else(|| {
        debug!(year, "lunar year outside the table");
        ConversionError::OutOfRange { year }
    })
}

/// Converts a Gregorian date to the lunar calendar.
///
/// # Errors
/// - `ConversionError::OutOfRange` if `date.year()` is outside 1900-2100
/// - `ConversionError::BeforeEpoch` if `date` is before 1900-01-31
pub fn solar_to_lunar(date: SolarDate) -> Result<LunarDate, ConversionError> {
    if !SUPPORTED_YEARS.contains(&date.year()) {
        debug!(%date, "solar year outside the supported range");
        return Err(ConversionError::OutOfRange { year: date.year() });
    }

    let offset = solar_day_offset(date);
    if offset < 0 {
        debug!(%date, offset, "solar date before the epoch");
        return Err(ConversionError::BeforeEpoch { date });
    }

    let mut remaining = offset;
    let mut year = MIN_YEAR;
    let mut record = year_record(year)?;
    while remaining >= i64::from(record.year_days()) {
        remaining -= i64::from(record.year_days());
        year += 1;
        record = year_record(year)?;
    }

    for (month, is_leap_month, days) in record.months() {
        if remaining < i64::from(days) {
            let day = u8::try_from(remaining + 1).map_err(|_| ConversionError::OutOfRange { year })?;
            let lunar = LunarDate::from_parts(year, month, day, is_leap_month);
            trace!(%date, %lunar, "solar to lunar");
            return Ok(lunar);
        }
        remaining -= i64::from(days);
    }

    // The year walk above leaves `remaining` below the year's length.
    Err(ConversionError::OutOfRange { year })
}

/// Converts a lunar date to the Gregorian calendar.
///
/// # Errors
/// - `ConversionError::OutOfRange` if `year` is outside 1900-2100
/// - `ConversionError::InvalidMonth` if `month` is outside 1-12
/// - `ConversionError::NotALeapMonth` if `is_leap_month` is set and `month`
///   is not that year's leap month
/// - `ConversionError::DayOutOfRange` if `day` is 0 or exceeds the month length
pub fn lunar_to_solar(
    year: u16,
    month: u8,
    day: u8,
    is_leap_month: bool,
) -> Result<SolarDate, ConversionError> {
    let lunar = LunarDate::new(year, month, day, is_leap_month)?;
    let record = year_record(year)?;

    let mut offset: i64 = (MIN_YEAR..year)
        .map(|y| year_record(y).map(|r| i64::from(r.year_days())))
        .sum::<Result<i64, _>>()?;

    offset += record
        .months()
        .take_while(|&(m, leap, _)| (m, leap) != (month, is_leap_month))
        .map(|(_, _, days)| i64::from(days))
        .sum::<i64>();
    offset += i64::from(day) - 1;

    // Every lunar date in the table lands well inside the representable solar range.
    let solar = add_days(SolarDate::EPOCH, offset).ok_or(ConversionError::OutOfRange { year })?;
    trace!(%lunar, %solar, "lunar to solar");
    Ok(solar)
}

/// Length of a lunar month, 29 or 30.
///
/// With `is_leap_month` set, returns the length of the year's leap month.
///
/// # Errors
/// - `ConversionError::OutOfRange` if `year` is outside 1900-2100
/// - `ConversionError::InvalidMonth` if `month` is outside 1-12
/// - `ConversionError::NotALeapMonth` if `is_leap_month` is set and `month`
///   is not that year's leap month
pub fn month_length(year: u16, month: u8, is_leap_month: bool) -> Result<u8, ConversionError> {
    let record = year_record(year)?;
    let days = record
        .month_days(month)
        .ok_or(ConversionError::InvalidMonth { month })?;

    if !is_leap_month {
        return Ok(days);
    }
    if record.leap_month() != month {
        debug!(year, month, leap_month = record.leap_month(), "leap flag on an ordinary month");
        return Err(ConversionError::NotALeapMonth {
            year,
            month,
            leap_month: record.leap_month(),
        });
    }
    Ok(record.leap_month_days())
}

/// Ordinal month doubled by `year`'s leap month, or 0 if the year has none.
///
/// # Errors
/// Returns `ConversionError::OutOfRange` if `year` is outside 1900-2100.
pub fn leap_month_of(year: u16) -> Result<u8, ConversionError> {
    year_record(year).map(YearRecord::leap_month)
}

/// Total days in lunar `year`, leap month included.
///
/// # Errors
/// Returns `ConversionError::OutOfRange` if `year` is outside 1900-2100.
pub fn year_length(year: u16) -> Result<u16, ConversionError> {
    year_record(year).map(YearRecord::year_days)
}

/// Lunar years accepted by every conversion
pub const fn supported_years() -> RangeInclusive<u16> {
    SUPPORTED_YEARS
}
