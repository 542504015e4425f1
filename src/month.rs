use crate::error::{IncidentError, Result};
use chrono::prelude::*;
use chrono::Months;

pub const MONTH_ABBREV: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Calendar month key, ordered by year and then month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Result<YearMonth> {
        if (1..=12).contains(&month) {
            Ok(YearMonth { year, month })
        } else {
            Err(IncidentError::InvalidMonth { year, month })
        }
    }

    pub fn from_date(date: NaiveDate) -> YearMonth {
        YearMonth {
            year: date.year(),
            month: date.month(),
        }
    }

    /// the month-start date
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .unwrap_or_else(|| panic!("{:?} is not a valid month", self))
    }

    pub fn succ(&self) -> YearMonth {
        if self.month == 12 {
            YearMonth {
                year: self.year + 1,
                month: 1,
            }
        } else {
            YearMonth {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// signed number of months from self to other
    pub fn months_until(&self, other: YearMonth) -> i64 {
        (other.year as i64 - self.year as i64) * 12 + (other.month as i64 - self.month as i64)
    }

    pub fn abbrev(&self) -> &'static str {
        MONTH_ABBREV[(self.month - 1) as usize]
    }

    /// "Jun-2021"
    pub fn label(&self) -> String {
        format!("{}-{}", self.abbrev(), self.year)
    }

    /// inverse of `label`
    pub fn from_label(label: &str) -> Result<YearMonth> {
        let invalid = || IncidentError::InvalidLabel(label.to_string());
        let mut l_split = label.trim().splitn(2, '-');
        let abbrev = l_split.next().ok_or_else(invalid)?;
        let year: i32 = l_split
            .next()
            .and_then(|y| y.parse().ok())
            .ok_or_else(invalid)?;
        let month = MONTH_ABBREV
            .iter()
            .position(|m| m.eq_ignore_ascii_case(abbrev))
            .ok_or_else(invalid)?;
        Ok(YearMonth {
            year,
            month: month as u32 + 1,
        })
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// produces the month-start dates from "start" to "end", both included,
/// stepping by one calendar month; empty if start > end
#[derive(Clone, Debug)]
pub struct MonthIterator {
    current: u32,
    current_back: u32,
    start: NaiveDate,
}

impl MonthIterator {
    pub fn new(start: YearMonth, end: YearMonth) -> Self {
        let steps = start.months_until(end) + 1;
        MonthIterator {
            current: 0,
            current_back: steps.max(0) as u32,
            start: start.first_day(),
        }
    }

    pub fn length(&self) -> u32 {
        self.current_back - self.current
    }

    fn at(&self, pos: u32) -> NaiveDate {
        self.start
            .checked_add_months(Months::new(pos))
            .expect("month beyond the supported date range")
    }
}

impl Iterator for MonthIterator {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current >= self.current_back {
            return None;
        }
        let result = self.at(self.current);
        self.current += 1;
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let l = self.length() as usize;
        (l, Some(l))
    }
}

impl DoubleEndedIterator for MonthIterator {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.current >= self.current_back {
            return None;
        }
        self.current_back -= 1;
        let result = self.at(self.current_back);
        Some(result)
    }
}

impl ExactSizeIterator for MonthIterator {}
