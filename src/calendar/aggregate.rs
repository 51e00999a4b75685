use rust_decimal::Decimal;

use super::bucket::DateBucketIndex;
use super::cursor::MonthCursor;

/// Sum of amounts over days `1..=days_in_month` of the cursor's month.
/// Days without entries contribute zero; entries outside the month are
/// ignored.
pub fn month_total(cursor: MonthCursor, days_in_month: u32, index: &DateBucketIndex) -> Decimal {
    (1..=days_in_month)
        .filter_map(|day| cursor.date_key(day))
        .map(|key| index.day_total(&key))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Amount, CalendarEntry, DateKey};

    fn entry(date: &str, cents: i64) -> CalendarEntry {
        CalendarEntry::new(
            DateKey::parse(date).unwrap(),
            "Merchant",
            Amount::new(Decimal::new(cents, 2)).unwrap(),
            "monthly",
        )
    }

    #[test]
    fn sums_only_days_within_the_month() {
        let index = DateBucketIndex::from_entries(vec![
            entry("2024-01-31", 10_000),
            entry("2024-02-01", 1_250),
            entry("2024-02-29", 4_999),
            entry("2024-02-29", 1),
            entry("2024-03-01", 20_000),
        ]);
        let cursor = MonthCursor::new(2024, 1).unwrap();

        assert_eq!(
            month_total(cursor, cursor.days_in_month(), &index),
            Decimal::new(6_250, 2)
        );
    }

    #[test]
    fn equals_sum_of_daily_buckets() {
        let index = DateBucketIndex::from_entries(
            (1..=30i64).map(|day| entry(&format!("2024-04-{day:02}"), day * 125)),
        );
        let cursor = MonthCursor::new(2024, 3).unwrap();
        let days = cursor.days_in_month();

        let expected: Decimal = (1..=days)
            .map(|day| index.day_total(&cursor.date_key(day).unwrap()))
            .sum();
        assert_eq!(month_total(cursor, days, &index), expected);
        assert_eq!(expected, Decimal::new(125 * 465, 2));
    }

    #[test]
    fn empty_index_totals_zero() {
        let cursor = MonthCursor::new(2024, 1).unwrap();
        assert_eq!(
            month_total(cursor, cursor.days_in_month(), &DateBucketIndex::new()),
            Decimal::ZERO
        );
    }
}
