//! Tier and color classification for bills and strategy cards.
//!
//! Every function takes the color mode as an explicit argument so results
//! depend only on their inputs.

pub mod card;
pub mod magnitude;
pub mod palette;
pub mod urgency;

pub use card::{resolve_card_state, CardVisualState, StrategyKey};
pub use magnitude::{classify_magnitude, MagnitudeTier};
pub use palette::{urgency_colors, ColorPair, ColorToken};
pub use urgency::{classify_urgency, rank_by_urgency, UrgencyBadge, UrgencyInput, UrgencyTier};
