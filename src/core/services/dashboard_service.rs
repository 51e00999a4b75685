use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::calendar::{
    build_grid, month_total, CalendarGrid, DateBucketIndex, MonthCursor, RejectedEntry,
};
use crate::classify::{
    classify_magnitude, classify_urgency, rank_by_urgency, MagnitudeTier, UrgencyBadge,
    UrgencyInput,
};
use crate::config::DashboardConfig;
use crate::domain::{BillDue, EntrySnapshot, RawCalendarEntry};
use crate::time::Clock;

use super::ServiceResult;

/// Everything the calendar view needs for one month.
#[derive(Debug, Clone, Serialize)]
pub struct MonthView {
    pub cursor: MonthCursor,
    pub grid: CalendarGrid,
    pub total: Decimal,
    pub rejected: Vec<RejectedEntry>,
}

impl MonthView {
    pub fn has_rejections(&self) -> bool {
        !self.rejected.is_empty()
    }
}

/// A bill decorated for the "due soon" widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BillBadge {
    pub bill: BillDue,
    pub urgency: UrgencyBadge,
    pub magnitude: MagnitudeTier,
}

pub struct DashboardService;

impl DashboardService {
    pub fn month_view(entries: &[RawCalendarEntry], cursor: MonthCursor) -> MonthView {
        let outcome = DateBucketIndex::build(entries);
        let grid = build_grid(cursor, &outcome.index);
        let total = month_total(cursor, grid.days_in_month, &outcome.index);

        tracing::info!(
            month = %cursor.label(),
            entries = outcome.index.len(),
            rejected = outcome.rejected.len(),
            %total,
            "built month view"
        );

        MonthView {
            cursor,
            grid,
            total,
            rejected: outcome.rejected,
        }
    }

    /// Like [`DashboardService::month_view`] for an unvalidated `(year, month)`
    /// pair coming from the host. `month` is 0-indexed.
    pub fn month_view_at(
        snapshot: &EntrySnapshot,
        year: i32,
        month: u32,
    ) -> ServiceResult<MonthView> {
        let cursor = MonthCursor::new(year, month)?;
        Ok(Self::month_view(&snapshot.entries, cursor))
    }

    pub fn needs_refresh(
        snapshot: &EntrySnapshot,
        config: &DashboardConfig,
        clock: &dyn Clock,
    ) -> bool {
        snapshot.needs_refresh(clock.now(), config.freshness())
    }

    /// Bills due from `today` through `today + horizon_days`, in date order.
    pub fn upcoming_bills(
        index: &DateBucketIndex,
        today: NaiveDate,
        horizon_days: u32,
    ) -> Vec<BillDue> {
        let last = today
            .checked_add_signed(Duration::days(i64::from(horizon_days)))
            .unwrap_or(NaiveDate::MAX);
        let mut keys: Vec<_> = index
            .keys()
            .filter(|key| (today..=last).contains(&key.date()))
            .copied()
            .collect();
        keys.sort();
        keys.iter()
            .flat_map(|key| index.lookup(key))
            .map(|entry| BillDue::new(entry.merchant_name.clone(), entry.date.date(), entry.amount))
            .collect()
    }

    /// Classifies `bills` against `today`, most urgent first.
    pub fn due_soon(bills: &[BillDue], today: NaiveDate, is_dark_mode: bool) -> Vec<BillBadge> {
        let mut badges: Vec<BillBadge> = bills
            .iter()
            .map(|bill| {
                let input = UrgencyInput::from_due_date(bill.due_date, today);
                BillBadge {
                    bill: bill.clone(),
                    urgency: classify_urgency(input, is_dark_mode),
                    magnitude: classify_magnitude(bill.amount),
                }
            })
            .collect();
        rank_by_urgency(&mut badges, |badge| {
            UrgencyInput::from_due_date(badge.bill.due_date, today)
        });
        badges
    }
}
