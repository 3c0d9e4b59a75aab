//! The lunar year table for 1900-2100 and the per-year accessors.
//!
//! Each [`YearRecord`] spells out the length of every ordinary month, which
//! ordinal month (if any) is doubled by a leap month, and how long that leap
//! month is. The table is a compiled constant; nothing is initialized at
//! runtime.

use crate::consts::{MAX_YEAR, MIN_YEAR, MONTHS_PER_YEAR, NO_LEAP_MONTH, YEAR_COUNT};

/// Month layout of a single lunar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearRecord {
    leap_month: u8,
    month_days: [u8; MONTHS_PER_YEAR as usize],
    leap_month_days: u8,
}

impl YearRecord {
    /// Ordinal month doubled by this year's leap month, or 0 when there is none
    #[inline]
    pub const fn leap_month(&self) -> u8 {
        self.leap_month
    }

    /// Length of the leap month: 0 when the year has none, else 29 or 30
    #[inline]
    pub const fn leap_month_days(&self) -> u8 {
        self.leap_month_days
    }

    /// Returns `true` if this year contains a leap month
    #[inline]
    pub const fn has_leap_month(&self) -> bool {
        self.leap_month != NO_LEAP_MONTH
    }

    /// Length of ordinary month `month` (1..=12).
    ///
    /// Returns `None` for a month outside 1..=12.
    pub fn month_days(&self, month: u8) -> Option<u8> {
        let idx = usize::from(month).checked_sub(1)?;
        self.month_days.get(idx).copied()
    }

    /// Total days in the year, leap month included
    pub fn year_days(&self) -> u16 {
        let ordinary: u16 = self.month_days.iter().map(|&d| u16::from(d)).sum();
        ordinary + u16::from(self.leap_month_days)
    }

    /// Months of the year in calendar order as `(month, is_leap_month, days)`.
    ///
    /// The leap month comes directly after the ordinary month it doubles.
    pub fn months(&self) -> impl Iterator<Item = (u8, bool, u8)> + '_ {
        self.month_days.iter().zip(1..=MONTHS_PER_YEAR).flat_map(move |(&days, month)| {
            let leap = (month == self.leap_month).then_some((month, true, self.leap_month_days));
            std::iter::once((month, false, days)).chain(leap)
        })
    }
}

/// Looks up the record for lunar `year`.
///
/// Returns `None` outside `MIN_YEAR..=MAX_YEAR`.
pub fn record(year: u16) -> Option<&'static YearRecord> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return None;
    }
    YEAR_TABLE.get(usize::from(year - MIN_YEAR))
}

const fn record_of(leap_month: u8, month_days: [u8; 12], leap_month_days: u8) -> YearRecord {
    YearRecord {
        leap_month,
        month_days,
        leap_month_days,
    }
}

/// One record per lunar year, `MIN_YEAR` first.
#[rustfmt::skip]
pub static YEAR_TABLE: [YearRecord; YEAR_COUNT] = [
    record_of( 8, [29, 30, 29, 29, 30, 29, 30, 30, 30, 30, 29, 30], 29), // 1900
    record_of( 0, [29, 30, 29, 29, 30, 29, 30, 29, 30, 30, 30, 29],  0), // 1901
    record_of( 0, [30, 29, 30, 29, 29, 30, 29, 30, 29, 30, 30, 30],  0), // 1902
    record_of( 5, [29, 30, 29, 30, 29, 30, 29, 29, 30, 30, 29, 30], 29), // 1903
    record_of( 0, [30, 30, 29, 30, 29, 29, 30, 29, 29, 30, 30, 29],  0), // 1904
    record_of( 0, [30, 30, 29, 30, 30, 29, 29, 30, 29, 30, 29, 30],  0), // 1905
    record_of( 4, [29, 30, 30, 29, 29, 30, 29, 30, 29, 30, 29, 30], 30), // 1906
    record_of( 0, [29, 30, 29, 30, 29, 30, 30, 29, 30, 29, 30, 29],  0), // 1907
    record_of( 0, [30, 29, 29, 30, 30, 29, 30, 29, 30, 30, 29, 30],  0), // 1908
    record_of( 2, [29, 30, 29, 30, 29, 30, 29, 30, 30, 30, 29, 30], 29), // 1909
    record_of( 0, [29, 30, 29, 29, 30, 29, 30, 29, 30, 30, 30, 29],  0), // 1910
    record_of( 6, [30, 29, 30, 29, 29, 30, 29, 30, 30, 29, 30, 30], 29), // 1911
    record_of( 0, [30, 29, 30, 29, 29, 30, 29, 29, 30, 30, 29, 30],  0), // 1912
    record_of( 0, [30, 30, 29, 30, 29, 29, 30, 29, 29, 30, 29, 30],  0), // 1913
    record_of( 5, [30, 30, 29, 30, 29, 29, 30, 29, 29, 30, 29, 30], 30), // 1914
    record_of( 0, [30, 29, 30, 30, 29, 30, 29, 30, 29, 30, 29, 29],  0), // 1915
    record_of( 0, [30, 30, 29, 30, 29, 30, 30, 29, 30, 29, 30, 29],  0), // 1916
    record_of( 2, [30, 29, 30, 29, 30, 30, 29, 30, 30, 29, 30, 29], 29), // 1917
    record_of( 0, [30, 29, 29, 30, 29, 30, 29, 30, 30, 29, 30, 30],  0), // 1918
    record_of( 7, [29, 30, 29, 29, 30, 29, 29, 30, 29, 30, 30, 30], 30), // 1919
    record_of( 0, [29, 30, 29, 29, 30, 29, 29, 30, 29, 30, 30, 30],  0), // 1920
    record_of( 0, [30, 29, 30, 29, 29, 30, 29, 29, 30, 29, 30, 30],  0), // 1921
    record_of( 5, [30, 29, 30, 30, 29, 30, 29, 29, 30, 29, 30, 30], 29), // 1922
    record_of( 0, [29, 30, 30, 29, 30, 29, 30, 29, 29, 30, 29, 30],  0), // 1923
    record_of( 0, [29, 30, 30, 29, 30, 30, 29, 30, 29, 30, 29, 29],  0), // 1924
    record_of( 4, [30, 29, 30, 29, 30, 29, 30, 30, 29, 30, 29, 30], 30), // 1925
    record_of( 0, [29, 29, 30, 29, 30, 29, 30, 30, 29, 30, 30, 29],  0), // 1926
    record_of( 0, [30, 29, 29, 30, 29, 30, 29, 30, 29, 30, 30, 30],  0), // 1927
    record_of( 2, [29, 30, 29, 30, 29, 29, 30, 29, 30, 30, 30, 30], 29), // 1928
    record_of( 0, [29, 30, 29, 29, 30, 29, 29, 30, 29, 30, 30, 30],  0), // 1929
    record_of( 6, [29, 30, 30, 29, 29, 30, 29, 30, 29, 30, 30, 29], 29), // 1930
    record_of( 0, [30, 30, 29, 30, 29, 30, 29, 29, 30, 29, 30, 29],  0), // 1931
    record_of( 0, [30, 30, 30, 29, 30, 29, 30, 29, 29, 30, 29, 30],  0), // 1932
    record_of( 5, [29, 30, 30, 29, 30, 29, 30, 29, 30, 29, 29, 30], 30), // 1933
    record_of( 0, [29, 30, 29, 30, 30, 29, 30, 29, 30, 30, 29, 30],  0), // 1934
    record_of( 0, [29, 29, 30, 29, 30, 29, 30, 30, 29, 30, 30, 29],  0), // 1935
    record_of( 3, [30, 29, 29, 29, 29, 30, 30, 29, 30, 30, 30, 29], 30), // 1936
    record_of( 0, [30, 29, 29, 30, 29, 29, 30, 29, 30, 30, 30, 29],  0), // 1937
    record_of( 7, [30, 30, 29, 29, 30, 29, 29, 29, 30, 30, 29, 30], 30), // 1938
    record_of( 0, [30, 30, 29, 29, 30, 29, 29, 30, 29, 30, 29, 30],  0), // 1939
    record_of( 0, [30, 30, 29, 30, 29, 30, 29, 29, 30, 29, 30, 29],  0), // 1940
    record_of( 6, [30, 30, 29, 30, 30, 29, 29, 29, 30, 29, 30, 29], 30), // 1941
    record_of( 0, [30, 29, 30, 30, 29, 30, 29, 30, 29, 30, 29, 30],  0), // 1942
    record_of( 0, [29, 30, 29, 30, 29, 30, 30, 29, 30, 29, 30, 29],  0), // 1943
    record_of( 4, [30, 29, 30, 29, 29, 30, 29, 30, 30, 29, 30, 30], 30), // 1944
    record_of( 0, [29, 29, 30, 29, 29, 30, 29, 30, 30, 30, 29, 30],  0), // 1945
    record_of( 0, [30, 29, 29, 30, 29, 29, 30, 29, 30, 30, 29, 30],  0), // 1946
    record_of( 2, [30, 30, 29, 30, 29, 29, 30, 29, 30, 29, 30, 30], 29), // 1947
    record_of( 0, [30, 29, 30, 29, 30, 29, 29, 30, 29, 30, 29, 30],  0), // 1948
    record_of( 7, [30, 29, 30, 30, 29, 30, 29, 30, 29, 30, 29, 30], 29), // 1949
    record_of( 0, [29, 30, 30, 29, 30, 30, 29, 29, 30, 29, 30, 29],  0), // 1950
    record_of( 0, [30, 29, 30, 30, 29, 30, 29, 30, 29, 30, 29, 30],  0), // 1951
    record_of( 5, [29, 30, 29, 30, 29, 29, 30, 30, 29, 30, 29, 30], 30), // 1952
    record_of( 0, [29, 30, 29, 29, 30, 30, 29, 30, 30, 29, 30, 29],  0), // 1953
    record_of( 0, [30, 29, 30, 29, 29, 30, 29, 30, 30, 29, 30, 30],  0), // 1954
    record_of( 3, [29, 30, 29, 29, 29, 30, 29, 30, 29, 30, 30, 30], 30), // 1955
    record_of( 0, [29, 30, 29, 30, 29, 29, 30, 29, 30, 29, 30, 30],  0), // 1956
    record_of( 8, [30, 29, 30, 29, 30, 29, 29, 30, 30, 29, 30, 29], 29), // 1957
    record_of( 0, [30, 30, 30, 29, 30, 29, 29, 30, 29, 30, 29, 30],  0), // 1958
    record_of( 0, [29, 30, 30, 29, 30, 29, 30, 29, 30, 29, 30, 29],  0), // 1959
    record_of( 6, [30, 29, 30, 29, 30, 30, 30, 29, 30, 29, 30, 29], 29), // 1960
    record_of( 0, [30, 29, 30, 29, 30, 29, 30, 30, 29, 30, 29, 30],  0), // 1961
    record_of( 0, [29, 30, 29, 29, 30, 29, 30, 30, 29, 30, 30, 29],  0), // 1962
    record_of( 4, [30, 29, 30, 29, 30, 29, 30, 29, 30, 30, 30, 29], 29), // 1963
    record_of( 0, [30, 29, 30, 29, 29, 30, 29, 30, 29, 30, 30, 30],  0), // 1964
    record_of( 0, [29, 30, 29, 30, 29, 29, 30, 29, 29, 30, 30, 29],  0), // 1965
    record_of( 3, [30, 30, 30, 30, 29, 29, 30, 29, 29, 30, 30, 29], 29), // 1966
    record_of( 0, [30, 30, 29, 30, 30, 29, 29, 30, 29, 30, 29, 30],  0), // 1967
    record_of( 7, [29, 30, 29, 30, 30, 29, 30, 30, 29, 30, 29, 30], 29), // 1968
    record_of( 0, [29, 30, 29, 30, 29, 30, 30, 29, 30, 29, 30, 29],  0), // 1969
    record_of( 0, [30, 29, 29, 30, 29, 30, 30, 29, 30, 30, 29, 30],  0), // 1970
    record_of( 5, [29, 30, 29, 29, 30, 30, 29, 30, 30, 30, 29, 30], 29), // 1971
    record_of( 0, [29, 30, 29, 29, 30, 29, 30, 29, 30, 30, 29, 30],  0), // 1972
    record_of( 0, [30, 29, 30, 29, 29, 30, 29, 29, 30, 30, 29, 30],  0), // 1973
    record_of( 4, [30, 30, 29, 30, 29, 30, 29, 29, 30, 30, 29, 30], 29), // 1974
    record_of( 0, [30, 30, 29, 30, 29, 29, 30, 29, 29, 30, 29, 30],  0), // 1975
    record_of( 8, [30, 30, 29, 30, 29, 30, 29, 30, 29, 30, 29, 30], 29), // 1976
    record_of( 0, [30, 29, 30, 30, 29, 30, 29, 30, 29, 30, 29, 29],  0), // 1977
    record_of( 0, [30, 29, 30, 30, 29, 30, 30, 29, 30, 29, 30, 29],  0), // 1978
    record_of( 6, [30, 29, 29, 30, 29, 30, 29, 30, 30, 29, 30, 29], 30), // 1979
    record_of( 0, [30, 29, 29, 30, 29, 30, 29, 30, 30, 29, 30, 30],  0), // 1980
    record_of( 0, [29, 30, 29, 29, 30, 29, 29, 30, 30, 29, 30, 30],  0), // 1981
    record_of( 4, [30, 29, 30, 29, 30, 29, 29, 30, 29, 30, 30, 30], 29), // 1982
    record_of( 0, [30, 29, 30, 29, 29, 30, 29, 29, 30, 29, 30, 30],  0), // 1983
    record_of(10, [30, 29, 30, 30, 29, 29, 30, 29, 29, 30, 30, 30], 29), // 1984
    record_of( 0, [29, 30, 30, 29, 30, 29, 30, 29, 29, 30, 29, 30],  0), // 1985
    record_of( 0, [29, 30, 30, 29, 30, 30, 29, 30, 29, 30, 29, 29],  0), // 1986
    record_of( 6, [30, 29, 30, 29, 30, 30, 30, 30, 29, 30, 29, 29], 29), // 1987
    record_of( 0, [30, 29, 30, 29, 30, 29, 30, 30, 29, 30, 30, 29],  0), // 1988
    record_of( 0, [30, 29, 29, 30, 29, 30, 29, 30, 29, 30, 30, 30],  0), // 1989
    record_of( 5, [29, 30, 29, 29, 30, 29, 30, 29, 30, 30, 30, 30], 29), // 1990
    record_of( 0, [29, 30, 29, 29, 30, 29, 29, 30, 29, 30, 30, 30],  0), // 1991
    record_of( 0, [29, 30, 30, 29, 29, 30, 29, 29, 30, 29, 30, 30],  0), // 1992
    record_of( 3, [29, 30, 30, 30, 29, 30, 29, 29, 30, 29, 30, 29], 29), // 1993
    record_of( 0, [30, 30, 30, 29, 30, 29, 30, 29, 29, 30, 29, 30],  0), // 1994
    record_of( 8, [29, 30, 30, 29, 30, 29, 30, 30, 29, 30, 29, 30], 29), // 1995
    record_of( 0, [29, 30, 29, 30, 30, 29, 30, 29, 30, 30, 29, 29],  0), // 1996
    record_of( 0, [30, 29, 30, 29, 30, 29, 30, 30, 29, 30, 30, 29],  0), // 1997
    record_of( 5, [30, 29, 29, 30, 29, 30, 30, 29, 30, 30, 29, 30], 29), // 1998
    record_of( 0, [30, 29, 29, 30, 29, 29, 30, 29, 30, 30, 30, 29],  0), // 1999
    record_of( 0, [30, 30, 29, 29, 30, 29, 29, 30, 29, 30, 30, 29],  0), // 2000
    record_of( 4, [30, 30, 29, 30, 30, 29, 29, 30, 29, 30, 29, 30], 29), // 2001
    record_of( 0, [30, 30, 29, 30, 29, 30, 29, 29, 30, 29, 30, 29],  0), // 2002
    record_of( 0, [30, 30, 29, 30, 30, 29, 30, 29, 29, 30, 29, 30],  0), // 2003
    record_of( 2, [29, 30, 30, 30, 29, 30, 29, 30, 29, 30, 29, 30], 29), // 2004
    record_of( 0, [29, 30, 29, 30, 29, 30, 30, 29, 30, 29, 30, 29],  0), // 2005
    record_of( 7, [30, 29, 30, 29, 30, 29, 30, 30, 30, 29, 30, 30], 29), // 2006
    record_of( 0, [29, 29, 30, 29, 29, 30, 29, 30, 30, 30, 29, 30],  0), // 2007
    record_of( 0, [30, 29, 29, 30, 29, 29, 30, 29, 30, 30, 29, 30],  0), // 2008
    record_of( 5, [30, 30, 29, 29, 30, 29, 30, 29, 30, 29, 30, 30], 29), // 2009
    record_of( 0, [30, 29, 30, 29, 30, 29, 29, 30, 29, 30, 29, 30],  0), // 2010
    record_of( 0, [30, 29, 30, 30, 29, 30, 29, 29, 30, 29, 30, 29],  0), // 2011
    record_of( 4, [30, 29, 30, 30, 30, 29, 30, 29, 30, 29, 30, 29], 29), // 2012
    record_of( 0, [30, 29, 30, 29, 30, 30, 29, 30, 29, 30, 29, 30],  0), // 2013
    record_of( 9, [29, 30, 29, 30, 29, 30, 29, 30, 30, 30, 29, 30], 29), // 2014
    record_of( 0, [29, 30, 29, 29, 30, 29, 30, 30, 30, 29, 30, 29],  0), // 2015
    record_of( 0, [30, 29, 30, 29, 29, 30, 29, 30, 30, 29, 30, 30],  0), // 2016
    record_of( 6, [29, 30, 29, 30, 29, 29, 29, 30, 29, 30, 30, 30], 30), // 2017
    record_of( 0, [29, 30, 29, 30, 29, 29, 30, 29, 30, 29, 30, 30],  0), // 2018
    record_of( 0, [30, 29, 30, 29, 30, 29, 29, 30, 29, 29, 30, 30],  0), // 2019
    record_of( 4, [29, 30, 30, 30, 30, 29, 29, 30, 29, 30, 29, 30], 29), // 2020
    record_of( 0, [29, 30, 30, 29, 30, 29, 30, 29, 30, 29, 30, 29],  0), // 2021
    record_of( 0, [30, 29, 30, 29, 30, 30, 29, 30, 29, 30, 29, 30],  0), // 2022
    record_of( 2, [29, 30, 29, 30, 30, 29, 30, 30, 29, 30, 29, 30], 29), // 2023
    record_of( 0, [29, 30, 29, 29, 30, 29, 30, 30, 29, 30, 30, 29],  0), // 2024
    record_of( 6, [30, 29, 30, 29, 29, 30, 30, 29, 30, 30, 30, 29], 29), // 2025
    record_of( 0, [30, 29, 30, 29, 29, 30, 29, 29, 30, 30, 30, 29],  0), // 2026
    record_of( 0, [30, 30, 29, 30, 29, 29, 30, 29, 29, 30, 30, 29],  0), // 2027
    record_of( 5, [30, 30, 30, 29, 30, 29, 30, 29, 29, 30, 30, 29], 29), // 2028
    record_of( 0, [30, 30, 29, 30, 29, 30, 29, 30, 29, 29, 30, 30],  0), // 2029
    record_of( 0, [29, 30, 29, 30, 30, 29, 30, 29, 30, 29, 30, 29],  0), // 2030
    record_of( 3, [29, 30, 30, 30, 29, 30, 30, 29, 30, 29, 30, 29], 29), // 2031
    record_of( 0, [30, 29, 29, 30, 29, 30, 30, 29, 30, 30, 29, 30],  0), // 2032
    record_of(11, [29, 30, 29, 29, 30, 29, 30, 29, 30, 30, 30, 30], 29), // 2033
    record_of( 0, [29, 30, 29, 29, 30, 29, 30, 29, 30, 30, 29, 30],  0), // 2034
    record_of( 0, [30, 29, 30, 29, 29, 30, 29, 29, 30, 30, 29, 30],  0), // 2035
    record_of( 6, [30, 30, 29, 30, 29, 29, 29, 29, 30, 29, 30, 30], 30), // 2036
    record_of( 0, [30, 30, 29, 30, 29, 29, 30, 29, 29, 30, 29, 30],  0), // 2037
    record_of( 0, [30, 30, 29, 30, 29, 30, 29, 30, 29, 29, 30, 29],  0), // 2038
    record_of( 5, [30, 30, 29, 30, 30, 30, 29, 30, 29, 30, 29, 29], 29), // 2039
    record_of( 0, [30, 29, 30, 30, 29, 30, 29, 30, 30, 29, 30, 29],  0), // 2040
    record_of( 0, [29, 30, 29, 30, 29, 30, 30, 29, 30, 30, 29, 30],  0), // 2041
    record_of( 2, [29, 30, 29, 30, 29, 30, 29, 30, 30, 29, 30, 30], 29), // 2042
    record_of( 0, [29, 30, 29, 29, 30, 29, 29, 30, 30, 29, 30, 30],  0), // 2043
    record_of( 7, [30, 29, 30, 29, 29, 30, 29, 30, 29, 30, 30, 30], 29), // 2044
    record_of( 0, [30, 29, 30, 29, 29, 30, 29, 29, 30, 29, 30, 30],  0), // 2045
    record_of( 0, [30, 29, 30, 29, 30, 29, 30, 29, 29, 30, 29, 30],  0), // 2046
    record_of( 5, [30, 29, 30, 30, 29, 29, 30, 29, 29, 30, 29, 30], 30), // 2047
    record_of( 0, [29, 30, 30, 29, 30, 30, 29, 30, 29, 29, 30, 29],  0), // 2048
    record_of( 0, [30, 29, 30, 29, 30, 30, 29, 30, 30, 29, 30, 29],  0), // 2049
    record_of( 3, [29, 30, 29, 29, 30, 29, 30, 30, 29, 30, 30, 29], 30), // 2050
    record_of( 0, [30, 29, 29, 30, 29, 29, 30, 30, 29, 30, 30, 30],  0), // 2051
    record_of( 8, [29, 30, 29, 29, 30, 29, 29, 30, 30, 30, 30, 30], 29), // 2052
    record_of( 0, [29, 30, 29, 29, 30, 29, 29, 30, 29, 30, 30, 30],  0), // 2053
    record_of( 0, [29, 30, 30, 29, 29, 30, 29, 29, 30, 29, 30, 30],  0), // 2054
    record_of( 6, [29, 30, 30, 29, 30, 29, 29, 29, 30, 29, 30, 29], 30), // 2055
    record_of( 0, [30, 30, 30, 29, 30, 29, 30, 29, 29, 30, 29, 30],  0), // 2056
    record_of( 0, [29, 30, 30, 29, 30, 29, 30, 30, 29, 29, 30, 29],  0), // 2057
    record_of( 4, [30, 29, 30, 29, 29, 30, 30, 29, 30, 30, 29, 29], 30), // 2058
    record_of( 0, [30, 29, 30, 29, 30, 29, 30, 29, 30, 30, 30, 29],  0), // 2059
    record_of( 0, [30, 29, 29, 30, 29, 29, 30, 29, 30, 30, 30, 29],  0), // 2060
    record_of( 3, [30, 30, 29, 30, 29, 29, 30, 29, 30, 30, 30, 29], 29), // 2061
    record_of( 0, [30, 30, 29, 29, 30, 29, 29, 30, 29, 30, 30, 29],  0), // 2062
    record_of( 7, [30, 30, 29, 30, 29, 30, 29, 30, 29, 30, 29, 30], 29), // 2063
    record_of( 0, [30, 30, 29, 30, 29, 30, 29, 29, 30, 29, 30, 29],  0), // 2064
    record_of( 0, [30, 30, 29, 30, 30, 29, 30, 29, 29, 30, 29, 30],  0), // 2065
    record_of( 5, [29, 30, 29, 30, 30, 30, 29, 30, 29, 30, 29, 30], 29), // 2066
    record_of( 0, [29, 30, 29, 30, 29, 30, 30, 29, 30, 29, 30, 29],  0), // 2067
    record_of( 0, [30, 29, 30, 29, 29, 30, 30, 29, 30, 30, 29, 30],  0), // 2068
    record_of( 4, [29, 30, 29, 30, 29, 30, 29, 30, 30, 30, 29, 30], 29), // 2069
    record_of( 0, [29, 30, 29, 30, 29, 29, 30, 29, 30, 30, 29, 30],  0), // 2070
    record_of( 8, [30, 29, 30, 29, 30, 29, 29, 30, 30, 29, 30, 30], 29), // 2071
    record_of( 0, [30, 29, 30, 29, 30, 29, 29, 30, 29, 30, 29, 30],  0), // 2072
    record_of( 0, [30, 29, 30, 30, 29, 30, 29, 29, 30, 29, 30, 29],  0), // 2073
    record_of( 6, [30, 29, 30, 30, 29, 30, 30, 29, 30, 29, 30, 29], 29), // 2074
    record_of( 0, [30, 29, 30, 29, 30, 30, 29, 30, 29, 30, 29, 30],  0), // 2075
    record_of( 0, [29, 30, 29, 30, 29, 30, 29, 30, 30, 29, 30, 29],  0), // 2076
    record_of( 4, [30, 29, 30, 29, 30, 29, 30, 30, 30, 29, 30, 29], 29), // 2077
    record_of( 0, [30, 29, 30, 29, 29, 30, 29, 30, 30, 29, 30, 30],  0), // 2078
    record_of( 0, [29, 30, 29, 30, 29, 29, 30, 29, 30, 29, 30, 30],  0), // 2079
    record_of( 3, [30, 29, 30, 30, 29, 29, 30, 29, 29, 30, 30, 30], 29), // 2080
    record_of( 0, [29, 30, 30, 29, 30, 29, 29, 30, 29, 29, 30, 30],  0), // 2081
    record_of( 7, [29, 30, 30, 30, 29, 29, 30, 30, 29, 29, 30, 30], 29), // 2082
    record_of( 0, [29, 30, 30, 29, 30, 29, 30, 29, 30, 29, 30, 29],  0), // 2083
    record_of( 0, [30, 29, 30, 29, 30, 30, 29, 30, 29, 30, 29, 30],  0), // 2084
    record_of( 5, [29, 30, 29, 29, 30, 29, 30, 30, 29, 30, 29, 30], 30), // 2085
    record_of( 0, [29, 30, 29, 29, 30, 29, 30, 30, 29, 30, 30, 29],  0), // 2086
    record_of( 0, [30, 29, 30, 29, 29, 30, 29, 30, 29, 30, 30, 30],  0), // 2087
    record_of( 4, [29, 30, 29, 30, 29, 30, 29, 29, 30, 30, 30, 29], 29), // 2088
    record_of( 0, [30, 30, 29, 30, 29, 29, 29, 30, 29, 30, 30, 29],  0), // 2089
    record_of( 8, [30, 30, 30, 29, 30, 29, 29, 30, 29, 30, 30, 29], 29), // 2090
    record_of( 0, [30, 30, 29, 30, 29, 30, 29, 30, 29, 29, 30, 29],  0), // 2091
    record_of( 0, [30, 30, 29, 30, 30, 29, 30, 29, 30, 29, 30, 29],  0), // 2092
    record_of( 6, [29, 30, 30, 29, 30, 29, 30, 29, 30, 29, 30, 29], 30), // 2093
    record_of( 0, [29, 30, 29, 30, 29, 30, 30, 29, 30, 30, 29, 30],  0), // 2094
    record_of( 0, [29, 30, 29, 29, 30, 29, 30, 29, 30, 30, 30, 29],  0), // 2095
    record_of( 4, [30, 29, 30, 29, 30, 29, 29, 30, 30, 30, 29, 30], 29), // 2096
    record_of( 0, [30, 29, 30, 29, 29, 29, 30, 29, 30, 30, 29, 30],  0), // 2097
    record_of( 0, [30, 30, 29, 30, 29, 29, 29, 30, 29, 30, 29, 30],  0), // 2098
    record_of( 2, [30, 30, 30, 30, 29, 29, 30, 29, 29, 30, 29, 30], 29), // 2099
    record_of( 0, [30, 30, 29, 30, 29, 30, 29, 30, 29, 29, 30, 29],  0), // 2100
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{LONG_MONTH_DAYS, SHORT_MONTH_DAYS};

    #[test]
    fn test_record_bounds() {
        assert!(record(MIN_YEAR - 1).is_none());
        assert!(record(MIN_YEAR).is_some());
        assert!(record(MAX_YEAR).is_some());
        assert!(record(MAX_YEAR + 1).is_none());
        assert_eq!(YEAR_TABLE.len(), 201);
    }

    #[test]
    fn test_month_lengths_are_29_or_30() {
        for (year, rec) in (MIN_YEAR..).zip(YEAR_TABLE.iter()) {
            for month in 1..=MONTHS_PER_YEAR {
                let days = rec.month_days(month).unwrap();
                assert!(
                    days == SHORT_MONTH_DAYS || days == LONG_MONTH_DAYS,
                    "{year}-{month:02} has {days} days"
                );
            }
        }
    }

    #[test]
    fn test_leap_month_exclusivity() {
        for (year, rec) in (MIN_YEAR..).zip(YEAR_TABLE.iter()) {
            assert!(rec.leap_month() <= MONTHS_PER_YEAR, "{year}: leap month {}", rec.leap_month());
            if rec.has_leap_month() {
                assert!(
                    rec.leap_month_days() == SHORT_MONTH_DAYS || rec.leap_month_days() == LONG_MONTH_DAYS,
                    "{year}: leap month has {} days",
                    rec.leap_month_days()
                );
            } else {
                assert_eq!(rec.leap_month_days(), 0, "{year}: leap length without a leap month");
            }
            let leap_entries = rec.months().filter(|&(_, leap, _)| leap).count();
            assert!(leap_entries <= 1, "{year}: {leap_entries} leap months");
        }
    }

    #[test]
    fn test_year_days_range() {
        for (year, rec) in (MIN_YEAR..).zip(YEAR_TABLE.iter()) {
            let days = rec.year_days();
            if rec.has_leap_month() {
                assert!((383..=385).contains(&days), "{year}: {days} days");
            } else {
                assert!((353..=355).contains(&days), "{year}: {days} days");
            }
        }
    }

    #[test]
    fn test_month_days_out_of_range() {
        let rec = record(2000).unwrap();
        assert_eq!(rec.month_days(0), None);
        assert_eq!(rec.month_days(13), None);
        assert_eq!(rec.month_days(1), Some(30));
        assert_eq!(rec.month_days(3), Some(29));
    }

    #[test]
    fn test_known_years() {
        struct TestCase {
            year: u16,
            leap_month: u8,
            leap_month_days: u8,
            year_days: u16,
        }

        let cases = [
            TestCase { year: 1900, leap_month: 8, leap_month_days: 29, year_days: 384 },
            TestCase { year: 1984, leap_month: 10, leap_month_days: 29, year_days: 384 },
            TestCase { year: 2000, leap_month: 0, leap_month_days: 0, year_days: 354 },
            TestCase { year: 2017, leap_month: 6, leap_month_days: 30, year_days: 384 },
            TestCase { year: 2020, leap_month: 4, leap_month_days: 29, year_days: 384 },
            TestCase { year: 2023, leap_month: 2, leap_month_days: 29, year_days: 384 },
            TestCase { year: 2024, leap_month: 0, leap_month_days: 0, year_days: 354 },
            TestCase { year: 2025, leap_month: 6, leap_month_days: 29, year_days: 384 },
            TestCase { year: 2100, leap_month: 0, leap_month_days: 0, year_days: 354 },
        ];

        for case in &cases {
            let rec = record(case.year).unwrap();
            assert_eq!(rec.leap_month(), case.leap_month, "{} leap month", case.year);
            assert_eq!(rec.leap_month_days(), case.leap_month_days, "{} leap length", case.year);
            assert_eq!(rec.year_days(), case.year_days, "{} year length", case.year);
        }
    }

    // Traditions disagree on 2033's intercalary month; this table places it after month 11.
    #[test]
    fn test_2033_leap_month_pinned() {
        let rec = record(2033).unwrap();
        assert_eq!(rec.leap_month(), 11);
        assert_eq!(rec.leap_month_days(), 29);
    }

    #[test]
    fn test_months_order_puts_leap_after_ordinal() {
        let rec = record(2017).unwrap();
        let months: Vec<(u8, bool)> = rec.months().map(|(m, leap, _)| (m, leap)).collect();
        assert_eq!(months.len(), 13);
        assert_eq!(months[5], (6, false));
        assert_eq!(months[6], (6, true));
        assert_eq!(months[7], (7, false));

        let total: u16 = rec.months().map(|(_, _, d)| u16::from(d)).sum();
        assert_eq!(total, rec.year_days());

        assert_eq!(record(2000).unwrap().months().count(), 12);
    }
}
