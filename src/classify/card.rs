use std::fmt;

use serde::{Deserialize, Serialize};

use super::palette::{card, ColorToken};

/// Payoff strategies offered as selectable cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKey {
    Avalanche,
    Snowball,
    Minimum,
}

impl StrategyKey {
    pub const ALL: [StrategyKey; 3] = [
        StrategyKey::Avalanche,
        StrategyKey::Snowball,
        StrategyKey::Minimum,
    ];

    /// Label the recommendation engine uses for this strategy.
    pub fn recommended_label(self) -> &'static str {
        match self {
            StrategyKey::Avalanche => "HIGHEST_INTEREST_FIRST",
            StrategyKey::Snowball => "SMALLEST_BALANCE_FIRST",
            StrategyKey::Minimum => "MINIMUM_PAYMENTS",
        }
    }
}

impl fmt::Display for StrategyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StrategyKey::Avalanche => "avalanche",
            StrategyKey::Snowball => "snowball",
            StrategyKey::Minimum => "minimum",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CardVisualState {
    pub border_width: u8,
    pub border_color: ColorToken,
    pub background_override: Option<ColorToken>,
}

pub fn resolve_card_state(
    key: StrategyKey,
    selected_key: Option<StrategyKey>,
    recommended_label: Option<&str>,
) -> CardVisualState {
    let is_selected = selected_key == Some(key);
    let is_recommended = recommended_label == Some(key.recommended_label());

    let border_color = if is_selected {
        card::ACCENT_STRONG
    } else if is_recommended {
        card::ACCENT_WEAK
    } else {
        card::DEFAULT_BORDER
    };

    CardVisualState {
        border_width: if is_selected || is_recommended { 2 } else { 1 },
        border_color,
        background_override: is_selected.then_some(card::HIGHLIGHT),
    }
}
