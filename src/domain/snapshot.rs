use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::entry::RawCalendarEntry;

pub const DEFAULT_WINDOW_DAYS: u32 = 365;
pub const DEFAULT_FRESHNESS_SECS: u64 = 5 * 60;

/// Read-only result of one host fetch cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntrySnapshot {
    pub entries: Vec<RawCalendarEntry>,
    pub fetched_at: DateTime<Utc>,
    #[serde(default = "EntrySnapshot::default_window_days")]
    pub window_days: u32,
}

impl EntrySnapshot {
    pub fn new(entries: Vec<RawCalendarEntry>, fetched_at: DateTime<Utc>) -> Self {
        Self {
            entries,
            fetched_at,
            window_days: DEFAULT_WINDOW_DAYS,
        }
    }

    pub fn default_window_days() -> u32 {
        DEFAULT_WINDOW_DAYS
    }

    pub fn with_window_days(mut self, window_days: u32) -> Self {
        self.window_days = window_days;
        self
    }

    /// A snapshot is fresh while `now` is within `freshness` of the fetch.
    /// Timestamps earlier than the fetch (clock skew) count as fresh.
    pub fn is_fresh(&self, now: DateTime<Utc>, freshness: Duration) -> bool {
        now.signed_duration_since(self.fetched_at) < freshness
    }

    pub fn needs_refresh(&self, now: DateTime<Utc>, freshness: Duration) -> bool {
        !self.is_fresh(now, freshness)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
