//! Calendar months and the half-open date windows they cover.

use chrono::{Datelike, Months, NaiveDate};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use thiserror::Error;

/// A `YYYY-MM` string that does not name a calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid month '{0}': expected YYYY-MM")]
pub struct YearMonthParseError(pub String);

/// A calendar month, written `YYYY-MM`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, SerializeDisplay, DeserializeFromStr,
)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Creates a month, returning `None` unless `1 <= month <= 12` and the
    /// year has four digits.
    #[must_use]
    pub fn new(year: i32, month: u32) -> Option<Self> {
        ((1000..=9999).contains(&year) && (1..=12).contains(&month)).then_some(Self { year, month })
    }

    /// The month a date falls in.
    ///
    /// Unlike [`YearMonth::new`] this does not check the year, so a date
    /// outside years 1000-9999 yields a month whose `YYYY-MM` form will not
    /// parse back. Validated transactions never carry such dates.
    #[must_use]
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Calendar year.
    #[must_use]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Month number, 1-12.
    #[must_use]
    pub const fn month(self) -> u32 {
        self.month
    }

    /// First calendar day of the month.
    #[must_use]
    pub fn first_day(self) -> NaiveDate {
        // year/month are range-checked at construction
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// The following month; December rolls over into January.
    #[must_use]
    pub const fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// The preceding month; January rolls back into December.
    #[must_use]
    pub const fn previous(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Number of days in the month (28-31).
    #[must_use]
    pub fn days_in_month(self) -> u32 {
        let start = self.first_day();
        start
            .checked_add_months(Months::new(1))
            .and_then(|end| u32::try_from((end - start).num_days()).ok())
            .unwrap_or(31)
    }

    /// The half-open date window `[first day, first day of next month)`.
    #[must_use]
    pub fn window(self) -> MonthWindow {
        MonthWindow {
            start: self.first_day(),
            end: self.next().first_day(),
        }
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl std::str::FromStr for YearMonth {
    type Err = YearMonthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || YearMonthParseError(s.to_string());
        let (year, month) = s.split_once('-').ok_or_else(err)?;
        if year.len() != 4
            || month.len() != 2
            || !year.bytes().chain(month.bytes()).all(|b| b.is_ascii_digit())
        {
            return Err(err());
        }
        let year = year.parse().map_err(|_| err())?;
        let month = month.parse().map_err(|_| err())?;
        Self::new(year, month).ok_or_else(err)
    }
}

/// Half-open date interval `[start, end)` covering one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthWindow {
    /// First day of the month (inclusive).
    pub start: NaiveDate,
    /// First day of the following month (exclusive).
    pub end: NaiveDate,
}

impl MonthWindow {
    /// Returns true if the date falls within the window.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case("2024-01", 2024, 1)]
    #[case("1999-12", 1999, 12)]
    fn test_parse_valid(#[case] s: &str, #[case] year: i32, #[case] month: u32) {
        let ym: YearMonth = s.parse().unwrap();
        assert_eq!((ym.year(), ym.month()), (year, month));
        assert_eq!(ym.to_string(), s);
    }

    #[rstest]
    #[case("2024-13")]
    #[case("2024-00")]
    #[case("2024-1")]
    #[case("24-01")]
    #[case("2024/01")]
    #[case("2024-01-15")]
    #[case("+024-01")]
    #[case("")]
    fn test_parse_invalid(#[case] s: &str) {
        assert_eq!(s.parse::<YearMonth>(), Err(YearMonthParseError(s.to_string())));
    }

    #[test]
    fn test_december_rolls_over() {
        let dec = YearMonth::new(2023, 12).unwrap();
        assert_eq!(dec.next(), YearMonth::new(2024, 1).unwrap());
        assert_eq!(dec.next().previous(), dec);
    }

    #[test]
    fn test_january_rolls_back() {
        let jan = YearMonth::new(2024, 1).unwrap();
        assert_eq!(jan.previous(), YearMonth::new(2023, 12).unwrap());
    }

    #[rstest]
    #[case(2024, 2, 29)]
    #[case(2023, 2, 28)]
    #[case(2024, 4, 30)]
    #[case(2024, 12, 31)]
    fn test_days_in_month(#[case] year: i32, #[case] month: u32, #[case] days: u32) {
        assert_eq!(YearMonth::new(year, month).unwrap().days_in_month(), days);
    }

    #[test]
    fn test_window_is_half_open() {
        let window = YearMonth::new(2024, 3).unwrap().window();
        assert_eq!(window.start, date(2024, 3, 1));
        assert_eq!(window.end, date(2024, 4, 1));
        assert!(window.contains(date(2024, 3, 1)));
        assert!(window.contains(date(2024, 3, 31)));
        assert!(!window.contains(date(2024, 4, 1)));
        assert!(!window.contains(date(2024, 2, 29)));
    }

    #[test]
    fn test_december_window_ends_in_next_year() {
        let window = YearMonth::new(2023, 12).unwrap().window();
        assert_eq!(window.end, date(2024, 1, 1));
        assert!(window.contains(date(2023, 12, 31)));
        assert!(!window.contains(date(2024, 1, 1)));
    }

    #[test]
    fn test_serde_as_string() {
        let ym = YearMonth::new(2024, 7).unwrap();
        assert_eq!(serde_json::to_string(&ym).unwrap(), "\"2024-07\"");
        let back: YearMonth = serde_json::from_str("\"2024-07\"").unwrap();
        assert_eq!(back, ym);
    }

    #[test]
    fn test_of_date() {
        assert_eq!(
            YearMonth::of(date(2024, 2, 29)),
            YearMonth::new(2024, 2).unwrap()
        );
    }
}
