use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::DateKey;
use crate::errors::CalendarError;
use crate::time::Clock;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// The month currently shown by the calendar. `month` is 0-indexed
/// (0 = January, 11 = December).
///
/// Transitions return a new cursor; the owner decides when to replace it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "CursorFields")]
pub struct MonthCursor {
    year: i32,
    month: u32,
}

#[derive(Deserialize)]
struct CursorFields {
    year: i32,
    month: u32,
}

impl TryFrom<CursorFields> for MonthCursor {
    type Error = CalendarError;

    fn try_from(fields: CursorFields) -> Result<Self, Self::Error> {
        MonthCursor::new(fields.year, fields.month)
    }
}

impl MonthCursor {
    pub fn new(year: i32, month: u32) -> Result<Self, CalendarError> {
        if month > 11 {
            return Err(CalendarError::MonthOutOfRange(month));
        }
        if !(0..=9999).contains(&year) {
            return Err(CalendarError::YearOutOfRange(year));
        }
        Ok(Self { year, month })
    }

    /// Cursor for the month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year().clamp(0, 9999),
            month: date.month0(),
        }
    }

    pub fn today(clock: &dyn Clock) -> Self {
        Self::containing(clock.today())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// 0-indexed month.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// 1-based month number.
    pub fn month_number(&self) -> u32 {
        self.month + 1
    }

    pub fn prev_month(self) -> Self {
        if self.month == 0 {
            Self {
                year: self.year - 1,
                month: 11,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub fn next_month(self) -> Self {
        if self.month == 11 {
            Self {
                year: self.year + 1,
                month: 0,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Resets to the month containing `now`, whatever is currently shown.
    pub fn go_to_today(self, now: NaiveDate) -> Self {
        Self::containing(now)
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month_number(), 1)
            .unwrap_or(NaiveDate::MIN)
    }

    /// Weekday of the 1st, 0 = Sunday through 6 = Saturday.
    pub fn first_weekday(&self) -> u32 {
        self.first_day().weekday().num_days_from_sunday()
    }

    /// Day 0 of the following month, i.e. the last day of this one.
    pub fn days_in_month(&self) -> u32 {
        let next = self.next_month();
        next.first_day()
            .pred_opt()
            .map(|last| last.day())
            .unwrap_or(31)
    }

    pub fn date_key(&self, day: u32) -> Option<DateKey> {
        DateKey::from_ymd(self.year, self.month_number(), day)
    }

    pub fn contains(&self, key: &DateKey) -> bool {
        key.year() == self.year && key.month() == self.month_number()
    }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[self.month as usize]
    }

    /// Header label such as `February 2024`.
    pub fn label(&self) -> String {
        format!("{} {}", self.month_name(), self.year)
    }
}
