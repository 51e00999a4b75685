use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::Amount;

const MEDIUM_FLOOR: u32 = 50;
const HIGH_FLOOR: u32 = 200;

/// Severity of a bill by amount alone. Mode-invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MagnitudeTier {
    Low,
    Medium,
    High,
}

pub fn classify_magnitude(amount: Amount) -> MagnitudeTier {
    let value = amount.value();
    if value < Decimal::from(MEDIUM_FLOOR) {
        MagnitudeTier::Low
    } else if value < Decimal::from(HIGH_FLOOR) {
        MagnitudeTier::Medium
    } else {
        MagnitudeTier::High
    }
}
