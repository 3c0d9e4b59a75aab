//! Sexagenary (stem/branch) year names and zodiac animals.
//!
//! The cycle is keyed purely by the year number: the stem follows `year mod 10`
//! and the branch and zodiac follow `year mod 12`. Year 4 (and so 1984) opens
//! a cycle with 갑자 (甲子).

use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Length of the full stem/branch cycle
pub const CYCLE_YEARS: usize = 60;

/// Position of `year` within a cycle of `len`, where year 4 is position 0.
fn cycle_position(year: i32, len: usize) -> usize {
    let len = i64::try_from(len).unwrap_or(i64::MAX);
    let pos = (i64::from(year) - 4).rem_euclid(len);
    usize::try_from(pos).unwrap_or_default()
}

/// The ten heavenly stems (천간), in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeavenlyStem {
    Gap,
    Eul,
    Byeong,
    Jeong,
    Mu,
    Gi,
    Gyeong,
    Sin,
    Im,
    Gye,
}

impl HeavenlyStem {
    pub const ALL: [Self; 10] = [
        Self::Gap,
        Self::Eul,
        Self::Byeong,
        Self::Jeong,
        Self::Mu,
        Self::Gi,
        Self::Gyeong,
        Self::Sin,
        Self::Im,
        Self::Gye,
    ];

    /// Stem of the given year
    pub fn from_year(year: i32) -> Self {
        Self::ALL[cycle_position(year, Self::ALL.len())]
    }

    pub const fn hangul(self) -> &'static str {
        match self {
            Self::Gap => "갑",
            Self::Eul => "을",
            Self::Byeong => "병",
            Self::Jeong => "정",
            Self::Mu => "무",
            Self::Gi => "기",
            Self::Gyeong => "경",
            Self::Sin => "신",
            Self::Im => "임",
            Self::Gye => "계",
        }
    }

    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Gap => "甲",
            Self::Eul => "乙",
            Self::Byeong => "丙",
            Self::Jeong => "丁",
            Self::Mu => "戊",
            Self::Gi => "己",
            Self::Gyeong => "庚",
            Self::Sin => "辛",
            Self::Im => "壬",
            Self::Gye => "癸",
        }
    }
}

impl fmt::Display for HeavenlyStem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hangul())
    }
}

/// The twelve earthly branches (지지), in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EarthlyBranch {
    Ja,
    Chuk,
    In,
    Myo,
    Jin,
    Sa,
    O,
    Mi,
    Sin,
    Yu,
    Sul,
    Hae,
}

impl EarthlyBranch {
    pub const ALL: [Self; 12] = [
        Self::Ja,
        Self::Chuk,
        Self::In,
        Self::Myo,
        Self::Jin,
        Self::Sa,
        Self::O,
        Self::Mi,
        Self::Sin,
        Self::Yu,
        Self::Sul,
        Self::Hae,
    ];

    /// Branch of the given year
    pub fn from_year(year: i32) -> Self {
        Self::ALL[cycle_position(year, Self::ALL.len())]
    }

    pub const fn hangul(self) -> &'static str {
        match self {
            Self::Ja => "자",
            Self::Chuk => "축",
            Self::In => "인",
            Self::Myo => "묘",
            Self::Jin => "진",
            Self::Sa => "사",
            Self::O => "오",
            Self::Mi => "미",
            Self::Sin => "신",
            Self::Yu => "유",
            Self::Sul => "술",
            Self::Hae => "해",
        }
    }

    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Ja => "子",
            Self::Chuk => "丑",
            Self::In => "寅",
            Self::Myo => "卯",
            Self::Jin => "辰",
            Self::Sa => "巳",
            Self::O => "午",
            Self::Mi => "未",
            Self::Sin => "申",
            Self::Yu => "酉",
            Self::Sul => "戌",
            Self::Hae => "亥",
        }
    }

    /// Zodiac animal paired with this branch
    pub const fn zodiac(self) -> Zodiac {
        match self {
            Self::Ja => Zodiac::Rat,
            Self::Chuk => Zodiac::Ox,
            Self::In => Zodiac::Tiger,
            Self::Myo => Zodiac::Rabbit,
            Self::Jin => Zodiac::Dragon,
            Self::Sa => Zodiac::Snake,
            Self::O => Zodiac::Horse,
            Self::Mi => Zodiac::Goat,
            Self::Sin => Zodiac::Monkey,
            Self::Yu => Zodiac::Rooster,
            Self::Sul => Zodiac::Dog,
            Self::Hae => Zodiac::Pig,
        }
    }
}

impl fmt::Display for EarthlyBranch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hangul())
    }
}

/// The twelve zodiac animals (띠), in cycle order.
///
/// `key()` gives the lowercase English name used as a lookup key by
/// translation tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zodiac {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

impl Zodiac {
    pub const fn key(self) -> &'static str {
        match self {
            Self::Rat => "rat",
            Self::Ox => "ox",
            Self::Tiger => "tiger",
            Self::Rabbit => "rabbit",
            Self::Dragon => "dragon",
            Self::Snake => "snake",
            Self::Horse => "horse",
            Self::Goat => "goat",
            Self::Monkey => "monkey",
            Self::Rooster => "rooster",
            Self::Dog => "dog",
            Self::Pig => "pig",
        }
    }

    pub const fn hangul(self) -> &'static str {
        match self {
            Self::Rat => "쥐",
            Self::Ox => "소",
            Self::Tiger => "호랑이",
            Self::Rabbit => "토끼",
            Self::Dragon => "용",
            Self::Snake => "뱀",
            Self::Horse => "말",
            Self::Goat => "양",
            Self::Monkey => "원숭이",
            Self::Rooster => "닭",
            Self::Dog => "개",
            Self::Pig => "돼지",
        }
    }
}

impl fmt::Display for Zodiac {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Stem, branch and zodiac of a year.
///
/// Displays as the combined hangul label, e.g. `갑자`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{}{}", "stem.hangul()", "branch.hangul()")]
pub struct Sexagenary {
    pub stem: HeavenlyStem,
    pub branch: EarthlyBranch,
    pub zodiac: Zodiac,
}

impl Sexagenary {
    /// Combined hangul label, e.g. `갑자`
    pub fn label(&self) -> String {
        format!("{}{}", self.stem.hangul(), self.branch.hangul())
    }

    /// Combined hanja label, e.g. `甲子`
    pub fn hanja_label(&self) -> String {
        format!("{}{}", self.stem.hanja(), self.branch.hanja())
    }

    /// Position in the sixty-year cycle, `1` (갑자) through `60` (계해)
    pub fn cycle_index(&self) -> usize {
        // stem and branch pin down a unique slot modulo 60
        (0..CYCLE_YEARS)
            .find(|&n| {
                n % HeavenlyStem::ALL.len() == self.stem as usize
                    && n % EarthlyBranch::ALL.len() == self.branch as usize
            })
            .map_or(0, |n| n + 1)
    }
}

/// Stem, branch and zodiac for `year`.
///
/// Defined for every integer year; only years the converter accepts are
/// meaningful as lunar years.
pub fn gan_zhi(year: i32) -> Sexagenary {
    let branch = EarthlyBranch::from_year(year);
    Sexagenary {
        stem: HeavenlyStem::from_year(year),
        branch,
        zodiac: branch.zodiac(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_gan_zhi_1984() {
        let result = gan_zhi(1984);
        assert_eq!(result.stem, HeavenlyStem::Gap);
        assert_eq!(result.branch, EarthlyBranch::Ja);
        assert_eq!(result.zodiac, Zodiac::Rat);
        assert_eq!(result.label(), "갑자");
        assert_eq!(result.hanja_label(), "甲子");
        assert_eq!(result.to_string(), "갑자");
        assert_eq!(result.cycle_index(), 1);
    }

    #[test]
    fn test_gan_zhi_known_years() {
        struct TestCase {
            year: i32,
            label: &'static str,
            hanja: &'static str,
            zodiac: Zodiac,
            cycle_index: usize,
        }

        let cases = [
            TestCase {
                year: 1900,
                label: "경자",
                hanja: "庚子",
                zodiac: Zodiac::Rat,
                cycle_index: 37,
            },
            TestCase {
                year: 2000,
                label: "경진",
                hanja: "庚辰",
                zodiac: Zodiac::Dragon,
                cycle_index: 17,
            },
            TestCase {
                year: 2023,
                label: "계묘",
                hanja: "癸卯",
                zodiac: Zodiac::Rabbit,
                cycle_index: 40,
            },
            TestCase {
                year: 2024,
                label: "갑진",
                hanja: "甲辰",
                zodiac: Zodiac::Dragon,
                cycle_index: 41,
            },
            TestCase {
                year: 2025,
                label: "을사",
                hanja: "乙巳",
                zodiac: Zodiac::Snake,
                cycle_index: 42,
            },
            TestCase {
                year: 2043,
                label: "계해",
                hanja: "癸亥",
                zodiac: Zodiac::Pig,
                cycle_index: 60,
            },
        ];

        for case in &cases {
            let result = gan_zhi(case.year);
            assert_eq!(result.label(), case.label, "label for {}", case.year);
            assert_eq!(result.hanja_label(), case.hanja, "hanja for {}", case.year);
            assert_eq!(result.zodiac, case.zodiac, "zodiac for {}", case.year);
            assert_eq!(result.cycle_index(), case.cycle_index, "cycle index for {}", case.year);
        }
    }

    #[test]
    fn test_gan_zhi_negative_years() {
        assert_eq!(gan_zhi(-2696).cycle_index(), 1);
        assert_eq!(gan_zhi(-2697).cycle_index(), 60);
        assert_eq!(gan_zhi(4).label(), "갑자");
        assert_eq!(gan_zhi(3).label(), "계해");
    }

    #[test]
    fn test_cycle_repeats_every_sixty_years() {
        let labels: HashSet<String> = (1984..1984 + 60).map(|y| gan_zhi(y).label()).collect();
        assert_eq!(labels.len(), CYCLE_YEARS);

        for year in 1900..=2100 {
            assert_eq!(gan_zhi(year), gan_zhi(year + 60));
            assert_eq!(gan_zhi(year).zodiac, gan_zhi(year).branch.zodiac());
        }
    }

    #[test]
    fn test_zodiac_keys_and_serde() {
        assert_eq!(Zodiac::Rooster.key(), "rooster");
        assert_eq!(Zodiac::Tiger.hangul(), "호랑이");
        assert_eq!(Zodiac::Goat.to_string(), "goat");

        let json = serde_json::to_string(&gan_zhi(1984)).unwrap();
        assert_eq!(json, r#"{"stem":"gap","branch":"ja","zodiac":"rat"}"#);

        let parsed: Sexagenary = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, gan_zhi(1984));
    }
}
