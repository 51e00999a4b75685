use std::cmp::Reverse;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::palette::{urgency_colors, ColorPair};

const CRITICAL_WINDOW_DAYS: i64 = 3;
const SOON_WINDOW_DAYS: i64 = 7;

/// Severity of a bill by due-date proximity. Ordered so that
/// `Overdue > Critical > Soon > Normal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum UrgencyTier {
    Normal,
    Soon,
    Critical,
    Overdue,
}

impl UrgencyTier {
    pub fn classify(input: UrgencyInput) -> Self {
        if input.is_overdue {
            UrgencyTier::Overdue
        } else if input.days_until_due <= CRITICAL_WINDOW_DAYS {
            UrgencyTier::Critical
        } else if input.days_until_due <= SOON_WINDOW_DAYS {
            UrgencyTier::Soon
        } else {
            UrgencyTier::Normal
        }
    }
}

impl fmt::Display for UrgencyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            UrgencyTier::Overdue => "Overdue",
            UrgencyTier::Critical => "Critical",
            UrgencyTier::Soon => "Soon",
            UrgencyTier::Normal => "Normal",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrgencyInput {
    pub is_overdue: bool,
    pub days_until_due: i64,
}

impl UrgencyInput {
    pub fn new(is_overdue: bool, days_until_due: i64) -> Self {
        Self {
            is_overdue,
            days_until_due,
        }
    }

    /// Derives the input from a due date; anything due before `today` is
    /// overdue.
    pub fn from_due_date(due: NaiveDate, today: NaiveDate) -> Self {
        Self {
            is_overdue: due < today,
            days_until_due: (due - today).num_days(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrgencyBadge {
    pub tier: UrgencyTier,
    pub label: String,
    pub colors: ColorPair,
}

pub fn classify_urgency(input: UrgencyInput, is_dark_mode: bool) -> UrgencyBadge {
    let tier = UrgencyTier::classify(input);
    let label = match tier {
        UrgencyTier::Overdue => "Overdue".to_string(),
        _ => format!("{}d", input.days_until_due),
    };
    UrgencyBadge {
        tier,
        label,
        colors: urgency_colors(tier, is_dark_mode),
    }
}

/// Orders items most severe first; within a tier, sooner due dates come
/// first and ties keep their input order.
pub fn rank_by_urgency<T, F>(items: &mut [T], input_of: F)
where
    F: Fn(&T) -> UrgencyInput,
{
    items.sort_by_key(|item| {
        let input = input_of(item);
        (Reverse(UrgencyTier::classify(input)), input.days_until_due)
    });
}
