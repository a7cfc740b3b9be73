use std::fmt;

use chrono::NaiveDate;

use crate::domain::reports::errors::ReportPeriodError;

/// Report year value type
///
/// Four-digit calendar year; anything else does not address a real report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Year(i32);

impl Year {
    const MIN: i32 = 1000;
    const MAX: i32 = 9999;

    /// Parse a year from a path segment.
    ///
    /// # Errors
    /// * `InvalidYear` - Not an integer in the 1000..=9999 range
    pub fn parse(segment: &str) -> Result<Self, ReportPeriodError> {
        segment
            .parse::<i32>()
            .ok()
            .filter(|year| (Self::MIN..=Self::MAX).contains(year))
            .map(Year)
            .ok_or_else(|| ReportPeriodError::InvalidYear(segment.to_string()))
    }

    pub fn as_i32(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Report month value type, 1 through 12
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Month(u32);

impl Month {
    /// Parse a month from a path segment.
    ///
    /// # Errors
    /// * `InvalidMonth` - Not an integer in the 1..=12 range
    pub fn parse(segment: &str) -> Result<Self, ReportPeriodError> {
        segment
            .parse::<u32>()
            .ok()
            .filter(|month| (1..=12).contains(month))
            .map(Month)
            .ok_or_else(|| ReportPeriodError::InvalidMonth(segment.to_string()))
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Period a report request addresses: everything, one year, or one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportPeriod {
    pub year: Option<Year>,
    pub month: Option<Month>,
}

impl ReportPeriod {
    pub fn all() -> Self {
        Self {
            year: None,
            month: None,
        }
    }

    pub fn for_year(year: Year) -> Self {
        Self {
            year: Some(year),
            month: None,
        }
    }

    pub fn for_month(year: Year, month: Month) -> Self {
        Self {
            year: Some(year),
            month: Some(month),
        }
    }
}

/// Recorded income entry
#[derive(Debug, Clone, PartialEq)]
pub struct Income {
    pub id: i64,
    pub description: String,
    pub amount: f64,
    pub occurred_on: NaiveDate,
}

/// Recorded expense entry
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub id: i64,
    pub description: String,
    pub amount: f64,
    pub occurred_on: NaiveDate,
}

/// Income and expense collections for one user and period.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub incomes: Vec<Income>,
    pub expenses: Vec<Expense>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_parse_valid() {
        let year = Year::parse("2019").expect("Valid year");
        assert_eq!(year.as_i32(), 2019);
    }

    #[test]
    fn test_year_parse_rejects_non_numeric() {
        assert!(matches!(
            Year::parse("INVALID"),
            Err(ReportPeriodError::InvalidYear(_))
        ));
    }

    #[test]
    fn test_year_parse_rejects_out_of_range() {
        assert!(Year::parse("19").is_err());
        assert!(Year::parse("10000").is_err());
        assert!(Year::parse("-2019").is_err());
    }

    #[test]
    fn test_month_parse_valid_range() {
        assert_eq!(Month::parse("1").expect("Valid month").as_u32(), 1);
        assert_eq!(Month::parse("12").expect("Valid month").as_u32(), 12);
    }

    #[test]
    fn test_month_parse_rejects_invalid() {
        assert!(Month::parse("0").is_err());
        assert!(Month::parse("13").is_err());
        assert!(Month::parse("INVALID").is_err());
    }
}
