use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use serde::{de::Deserializer, Deserialize, Serialize, Serializer};

use crate::errors::EntryError;

const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

static DATE_KEY_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("static date key pattern"));

/// Canonical `YYYY-MM-DD` key joining entries to calendar cells.
///
/// Ordering matches the lexical ordering of the string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(NaiveDate);

impl DateKey {
    /// Builds a key from calendar components. Returns `None` for dates that
    /// do not exist or years outside `0..=9999`.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        if !(0..=9999).contains(&year) {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn parse(value: &str) -> Result<Self, EntryError> {
        if !DATE_KEY_SHAPE.is_match(value) {
            return Err(EntryError::InvalidDateKey(value.to_string()));
        }
        NaiveDate::parse_from_str(value, DATE_KEY_FORMAT)
            .map(Self)
            .map_err(|_| EntryError::InvalidDateKey(value.to_string()))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// 1-based month number.
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl TryFrom<NaiveDate> for DateKey {
    type Error = EntryError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        Self::from_ymd(date.year(), date.month(), date.day())
            .ok_or_else(|| EntryError::InvalidDateKey(date.to_string()))
    }
}

impl FromStr for DateKey {
    type Err = EntryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            self.0.month(),
            self.0.day()
        )
    }
}

impl Serialize for DateKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateKey::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Non-negative currency amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    pub const ZERO: Amount = Amount(Decimal::ZERO);

    pub fn new(value: Decimal) -> Result<Self, EntryError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(EntryError::NegativeAmount(value));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = EntryError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Entry exactly as delivered by the host's fetch, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawCalendarEntry {
    pub date: String,
    pub merchant_name: String,
    pub amount: Decimal,
    pub frequency: String,
}

/// A validated, dated financial obligation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEntry {
    pub date: DateKey,
    pub merchant_name: String,
    pub amount: Amount,
    pub frequency: String,
}

impl CalendarEntry {
    pub fn new(
        date: DateKey,
        merchant_name: impl Into<String>,
        amount: Amount,
        frequency: impl Into<String>,
    ) -> Self {
        Self {
            date,
            merchant_name: merchant_name.into(),
            amount,
            frequency: frequency.into(),
        }
    }
}

impl TryFrom<RawCalendarEntry> for CalendarEntry {
    type Error = EntryError;

    fn try_from(raw: RawCalendarEntry) -> Result<Self, Self::Error> {
        let date = DateKey::parse(&raw.date)?;
        let amount = Amount::new(raw.amount)?;
        Ok(Self {
            date,
            merchant_name: raw.merchant_name,
            amount,
            frequency: raw.frequency,
        })
    }
}
