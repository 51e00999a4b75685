use rust_decimal::Decimal;
use serde::Serialize;

use super::bucket::DateBucketIndex;
use super::cursor::MonthCursor;
use crate::domain::CalendarEntry;

pub const DAYS_PER_WEEK: usize = 7;

/// One square of the month grid. Padding cells have no day number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CalendarCell {
    pub day: Option<u32>,
    pub entries: Vec<CalendarEntry>,
}

impl CalendarCell {
    pub fn padding() -> Self {
        Self::default()
    }

    pub fn is_padding(&self) -> bool {
        self.day.is_none()
    }

    pub fn total(&self) -> Decimal {
        self.entries.iter().map(|entry| entry.amount.value()).sum()
    }
}

/// Week-aligned cells for one month: leading padding up to the first
/// weekday, one cell per day, then trailing padding to complete the week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarGrid {
    pub cursor: MonthCursor,
    pub first_weekday: u32,
    pub days_in_month: u32,
    pub cells: Vec<CalendarCell>,
}

impl CalendarGrid {
    /// Rows of seven cells, Sunday first.
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarCell]> {
        self.cells.chunks(DAYS_PER_WEEK)
    }

    pub fn week_count(&self) -> usize {
        self.cells.len() / DAYS_PER_WEEK
    }

    pub fn cell_for_day(&self, day: u32) -> Option<&CalendarCell> {
        if day == 0 || day > self.days_in_month {
            return None;
        }
        self.cells
            .get(self.first_weekday as usize + day as usize - 1)
    }

    pub fn total(&self) -> Decimal {
        self.cells.iter().map(CalendarCell::total).sum()
    }

    pub fn entry_count(&self) -> usize {
        self.cells.iter().map(|cell| cell.entries.len()).sum()
    }
}

pub struct CalendarGridBuilder;

impl CalendarGridBuilder {
    pub fn build(cursor: MonthCursor, index: &DateBucketIndex) -> CalendarGrid {
        let first_weekday = cursor.first_weekday();
        let days_in_month = cursor.days_in_month();
        let leading = first_weekday as usize;
        let filled = leading + days_in_month as usize;
        let capacity = filled.div_ceil(DAYS_PER_WEEK) * DAYS_PER_WEEK;

        tracing::debug!(
            month = %cursor.label(),
            first_weekday,
            days_in_month,
            cells = capacity,
            "building calendar grid"
        );

        let mut cells = Vec::with_capacity(capacity);
        cells.resize_with(leading, CalendarCell::padding);
        for day in 1..=days_in_month {
            let entries = cursor
                .date_key(day)
                .map(|key| index.lookup(&key).to_vec())
                .unwrap_or_default();
            cells.push(CalendarCell {
                day: Some(day),
                entries,
            });
        }
        cells.resize_with(capacity, CalendarCell::padding);

        CalendarGrid {
            cursor,
            first_weekday,
            days_in_month,
            cells,
        }
    }
}

pub fn build_grid(cursor: MonthCursor, index: &DateBucketIndex) -> CalendarGrid {
    CalendarGridBuilder::build(cursor, index)
}
