#![allow(dead_code)]

use bill_calendar::domain::{Amount, CalendarEntry, DateKey, EntrySnapshot, RawCalendarEntry};
use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;

/// Raw record as the host would deliver it.
pub fn raw(date: &str, merchant: &str, amount: Decimal) -> RawCalendarEntry {
    RawCalendarEntry {
        date: date.to_string(),
        merchant_name: merchant.to_string(),
        amount,
        frequency: "monthly".to_string(),
    }
}

pub fn entry(date: &str, merchant: &str, amount: Decimal) -> CalendarEntry {
    CalendarEntry::new(
        DateKey::parse(date).expect("fixture date"),
        merchant,
        Amount::new(amount).expect("fixture amount"),
        "monthly",
    )
}

pub fn dollars(value: i64) -> Decimal {
    Decimal::from(value)
}

pub fn cents(value: i64) -> Decimal {
    Decimal::new(value, 2)
}

/// Snapshot payload mirroring a 365-day fetch around February 2024.
pub const SNAPSHOT_JSON: &str = r#"{
    "fetched_at": "2024-02-05T09:00:00Z",
    "window_days": 365,
    "entries": [
        {"date": "2024-01-28", "merchant_name": "Streaming", "amount": "12.99", "frequency": "monthly"},
        {"date": "2024-02-05", "merchant_name": "Power Co", "amount": "15", "frequency": "monthly"},
        {"date": "2024-02-05", "merchant_name": "Landlord", "amount": "1500", "frequency": "monthly"},
        {"date": "2024-02-14", "merchant_name": "Gym", "amount": "45.50", "frequency": "monthly"},
        {"date": "2024-02-30", "merchant_name": "Broken Feed", "amount": "9", "frequency": "monthly"},
        {"date": "2024-02-29", "merchant_name": "Insurance", "amount": "210", "frequency": "yearly"},
        {"date": "2024-03-01", "merchant_name": "Water", "amount": "33.10", "frequency": "monthly"}
    ]
}"#;

pub fn sample_snapshot() -> EntrySnapshot {
    serde_json::from_str(SNAPSHOT_JSON).expect("parse snapshot fixture")
}

pub fn fetched_at() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 2, 5, 9, 0, 0).unwrap()
}

/// Routes library logs through the crate's subscriber; honours `RUST_LOG`.
pub fn init_logging() {
    bill_calendar::init();
}
