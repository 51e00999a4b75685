use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::{CalendarEntry, DateKey, RawCalendarEntry};
use crate::errors::EntryError;

/// Mapping from [`DateKey`] to the entries occurring on that day.
///
/// Keys keep first-seen order and entries keep input order within a key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateBucketIndex {
    buckets: Vec<(DateKey, Vec<CalendarEntry>)>,
    positions: HashMap<DateKey, usize>,
    len: usize,
}

/// A raw record that failed validation, identified by its input position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedEntry {
    pub position: usize,
    pub date: String,
    pub merchant_name: String,
    #[serde(serialize_with = "serialize_error")]
    pub error: EntryError,
}

fn serialize_error<S>(error: &EntryError, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_str(error)
}

/// Result of bucketing raw records: the index of valid entries plus every
/// record that was skipped.
#[derive(Debug, Clone, Default)]
pub struct BucketOutcome {
    pub index: DateBucketIndex,
    pub rejected: Vec<RejectedEntry>,
}

impl BucketOutcome {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

impl DateBucketIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = CalendarEntry>,
    {
        let mut index = Self::new();
        for entry in entries {
            index.insert(entry);
        }
        index
    }

    /// Validates each raw record and buckets the valid ones. Invalid records
    /// are reported in [`BucketOutcome::rejected`] and never bucketed.
    pub fn build<'a, I>(raw_entries: I) -> BucketOutcome
    where
        I: IntoIterator<Item = &'a RawCalendarEntry>,
    {
        let mut outcome = BucketOutcome::default();
        for (position, raw) in raw_entries.into_iter().enumerate() {
            match CalendarEntry::try_from(raw.clone()) {
                Ok(entry) => outcome.index.insert(entry),
                Err(error) => {
                    tracing::warn!(
                        position,
                        date = %raw.date,
                        merchant = %raw.merchant_name,
                        %error,
                        "skipping invalid calendar entry"
                    );
                    outcome.rejected.push(RejectedEntry {
                        position,
                        date: raw.date.clone(),
                        merchant_name: raw.merchant_name.clone(),
                        error,
                    });
                }
            }
        }
        outcome
    }

    fn insert(&mut self, entry: CalendarEntry) {
        self.len += 1;
        match self.positions.get(&entry.date) {
            Some(&slot) => self.buckets[slot].1.push(entry),
            None => {
                self.positions.insert(entry.date, self.buckets.len());
                self.buckets.push((entry.date, vec![entry]));
            }
        }
    }

    /// Entries recorded for `key`; empty when the day has none.
    pub fn lookup(&self, key: &DateKey) -> &[CalendarEntry] {
        self.positions
            .get(key)
            .map(|&slot| self.buckets[slot].1.as_slice())
            .unwrap_or(&[])
    }

    pub fn day_total(&self, key: &DateKey) -> Decimal {
        self.lookup(key)
            .iter()
            .map(|entry| entry.amount.value())
            .sum()
    }

    /// Keys in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &DateKey> {
        self.buckets.iter().map(|(key, _)| key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&DateKey, &[CalendarEntry])> {
        self.buckets
            .iter()
            .map(|(key, entries)| (key, entries.as_slice()))
    }

    /// Total number of bucketed entries.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
