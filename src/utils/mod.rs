use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
///
/// Respects `RUST_LOG`; falls back to `bill_calendar=info` otherwise. Safe to
/// call more than once, and tolerant of a subscriber installed by the host.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("bill_calendar=info"));

        let _ = fmt().with_env_filter(filter).try_init();
    });
}
