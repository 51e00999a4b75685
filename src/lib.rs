#![doc(test(attr(deny(warnings))))]

//! Bill Calendar derives the data behind a recurring-bill dashboard: padded
//! month grids, per-day buckets and monthly totals, plus urgency, magnitude,
//! and card-state classification with light/dark color pairs.

pub mod calendar;
pub mod classify;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod time;
pub mod utils;

pub use calendar::{build_grid, month_total, CalendarGrid, DateBucketIndex, MonthCursor};
pub use classify::{
    classify_magnitude, classify_urgency, resolve_card_state, CardVisualState, ColorPair,
    MagnitudeTier, UrgencyBadge, UrgencyInput, UrgencyTier,
};
pub use domain::{Amount, CalendarEntry, DateKey, RawCalendarEntry};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Bill Calendar tracing initialized.");
    });
}
