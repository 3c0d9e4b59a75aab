//! Conversion between the Gregorian calendar and the East-Asian (Korean)
//! lunar calendar for lunar years 1900 through 2100.
//!
//! Conversions are driven by a compiled table of per-year month lengths and
//! leap ("intercalary") months, anchored at solar 1900-01-31 = lunar
//! 1900-01-01. Year names in the sexagenary cycle and zodiac animals are
//! derived from the lunar year alone.
//!
//! ```
//! use eumnyeok::{SolarDate, LunarDate, lunar_to_solar, solar_to_lunar};
//!
//! let solar = SolarDate::new(2024, 2, 10).unwrap();
//! let lunar = solar_to_lunar(solar).unwrap();
//! assert_eq!(lunar, LunarDate::new(2024, 1, 1, false).unwrap());
//! assert_eq!(lunar.gan_zhi().label(), "갑진");
//!
//! // 2023 has a leap second month
//! let solar = lunar_to_solar(2023, 2, 1, true).unwrap();
//! assert_eq!(solar.to_string(), "2023-03-22");
//! ```

mod consts;
mod convert;
mod gregorian;
mod prelude;
mod sexagenary;
mod table;
mod types;

pub use consts::*;
pub use convert::{
    ConversionError, leap_month_of, lunar_to_solar, month_length, solar_to_lunar, supported_years,
    year_length,
};
pub use gregorian::{days_in_month, is_leap_year};
pub use sexagenary::{CYCLE_YEARS, EarthlyBranch, HeavenlyStem, Sexagenary, Zodiac, gan_zhi};
pub use table::{YEAR_TABLE, YearRecord};
pub use types::{LunarDate, SolarDate};

use crate::prelude::*;

/// Error building or parsing a date value.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_SOLAR_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}
