use crate::consts::{
    DATE_SEPARATOR, EPOCH_DAY, EPOCH_MONTH, EPOCH_YEAR, LEAP_MONTH_MARKER, MAX_MONTH,
    MAX_SOLAR_YEAR, MIN_DAY,
};
use crate::convert::{self, ConversionError};
use crate::gregorian::{self, days_in_month};
use crate::prelude::*;
use crate::sexagenary::{Sexagenary, gan_zhi};
use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A valid date in the proleptic Gregorian calendar.
///
/// Fields are ordered so the derived `Ord` is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct SolarDate {
    year: u16,
    month: u8,
    day: u8,
}

impl SolarDate {
    /// Solar 1900-01-31, the day lunar 1900-01-01 begins.
    pub const EPOCH: Self = Self::from_parts(EPOCH_YEAR, EPOCH_MONTH, EPOCH_DAY);

    /// Creates a new date, validating it against the Gregorian calendar
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` for a year outside `1..=MAX_SOLAR_YEAR`,
    /// `ParseError::InvalidMonth` for a month outside `1..=12`, and
    /// `ParseError::InvalidDay` if the day does not exist in that month.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        if year == 0 || year > MAX_SOLAR_YEAR {
            return Err(ParseError::InvalidYear(year));
        }
        if month == 0 || month > MAX_MONTH {
            return Err(ParseError::InvalidMonth(month));
        }
        if day < MIN_DAY || day > days_in_month(year, month) {
            return Err(ParseError::InvalidDay { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Builds a date from components already known to be valid.
    pub(crate) const fn from_parts(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    #[inline]
    pub const fn year(&self) -> u16 {
        self.year
    }

    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Whole days from [`SolarDate::EPOCH`] to `self`; negative before the epoch
    pub fn day_offset(&self) -> i64 {
        gregorian::solar_day_offset(*self)
    }

    /// Steps `days` forward (or backward when negative).
    ///
    /// Returns `None` if the result falls outside years `1..=MAX_SOLAR_YEAR`.
    pub fn add_days(&self, days: i64) -> Option<Self> {
        gregorian::add_days(*self, days)
    }

    /// Converts to the lunar calendar.
    ///
    /// # Errors
    /// See [`solar_to_lunar`](crate::solar_to_lunar).
    pub fn to_lunar(&self) -> Result<LunarDate, ConversionError> {
        convert::solar_to_lunar(*self)
    }
}

impl FromStr for SolarDate {
    type Err = ParseError;

    /// Parses `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {} component(s): {trimmed}",
                parts.len()
            )));
        };

        Self::new(parse_u16(year)?, parse_u8(month)?, parse_u8(day)?)
    }
}

impl Serialize for SolarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for SolarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A date in the lunar calendar.
///
/// Values are always backed by the year table: `is_leap_month` is only set on
/// that year's leap month and `day` never exceeds the month's length. Fields
/// are ordered so the derived `Ord` is chronological (a leap month sorts
/// after the ordinary month it doubles).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LunarDate {
    year: u16,
    month: u8,
    is_leap_month: bool,
    day: u8,
}

impl LunarDate {
    /// Creates a lunar date, validating it against the year table.
    ///
    /// # Errors
    /// - `ConversionError::OutOfRange` if `year` is outside the table
    /// - `ConversionError::InvalidMonth` if `month` is outside `1..=12`
    /// - `ConversionError::NotALeapMonth` if `is_leap_month` is set on a month
    ///   that is not the year's leap month
    /// - `ConversionError::DayOutOfRange` if `day` is 0 or longer than the month
    pub fn new(year: u16, month: u8, day: u8, is_leap_month: bool) -> Result<Self, ConversionError> {
        let max_day = convert::month_length(year, month, is_leap_month)?;
        if day < MIN_DAY || day > max_day {
            return Err(ConversionError::DayOutOfRange {
                year,
                month,
                is_leap_month,
                day,
                max_day,
            });
        }
        Ok(Self::from_parts(year, month, day, is_leap_month))
    }

    pub(crate) const fn from_parts(year: u16, month: u8, day: u8, is_leap_month: bool) -> Self {
        Self {
            year,
            month,
            is_leap_month,
            day,
        }
    }

    #[inline]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Ordinal month 1..=12; for a leap month, the month it doubles
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    #[inline]
    pub const fn is_leap_month(&self) -> bool {
        self.is_leap_month
    }

    /// Converts back to the Gregorian calendar.
    ///
    /// # Errors
    /// Only fails if the date was not produced by this crate's validation,
    /// which cannot happen for values built through the public API.
    pub fn to_solar(&self) -> Result<SolarDate, ConversionError> {
        convert::lunar_to_solar(self.year, self.month, self.day, self.is_leap_month)
    }

    /// Stem, branch and zodiac of this date's lunar year
    pub fn gan_zhi(&self) -> Sexagenary {
        gan_zhi(i32::from(self.year))
    }
}

impl fmt::Display for LunarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}{DATE_SEPARATOR}", self.year)?;
        if self.is_leap_month {
            write!(f, "{LEAP_MONTH_MARKER}")?;
        }
        write!(f, "{:02}{DATE_SEPARATOR}{:02}", self.month, self.day)
    }
}

impl FromStr for LunarDate {
    type Err = ConversionError;

    /// Parses `YYYY-MM-DD`, or `YYYY-LMM-DD` for a leap month.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput.into());
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {} component(s): {trimmed}",
                parts.len()
            ))
            .into());
        };

        let (month, is_leap_month) = match month.strip_prefix(LEAP_MONTH_MARKER) {
            Some(rest) => (rest, true),
            None => (*month, false),
        };

        Self::new(parse_u16(year)?, parse_u8(month)?, parse_u8(day)?, is_leap_month)
    }
}

impl Serialize for LunarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for LunarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

fn parse_u16(s: &str) -> Result<u16, ParseError> {
    s.parse::<u16>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

fn parse_u8(s: &str) -> Result<u8, ParseError> {
    s.parse::<u8>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}
