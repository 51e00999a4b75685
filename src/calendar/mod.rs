//! Month grid construction, date bucketing, navigation, and monthly totals.

pub mod aggregate;
pub mod bucket;
pub mod cursor;
pub mod grid;

pub use aggregate::month_total;
pub use bucket::{BucketOutcome, DateBucketIndex, RejectedEntry};
pub use cursor::MonthCursor;
pub use grid::{build_grid, CalendarCell, CalendarGrid, CalendarGridBuilder, DAYS_PER_WEEK};
