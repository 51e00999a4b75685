//! Validated data types exchanged with the hosting dashboard.

pub mod bill;
pub mod entry;
pub mod snapshot;

pub use bill::BillDue;
pub use entry::{Amount, CalendarEntry, DateKey, RawCalendarEntry};
pub use snapshot::{EntrySnapshot, DEFAULT_FRESHNESS_SECS, DEFAULT_WINDOW_DAYS};
