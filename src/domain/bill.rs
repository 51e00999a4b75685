use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entry::Amount;

/// An upcoming obligation as shown in the "due soon" widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillDue {
    pub merchant_name: String,
    pub due_date: NaiveDate,
    pub amount: Amount,
}

impl BillDue {
    pub fn new(merchant_name: impl Into<String>, due_date: NaiveDate, amount: Amount) -> Self {
        Self {
            merchant_name: merchant_name.into(),
            due_date,
            amount,
        }
    }
}
