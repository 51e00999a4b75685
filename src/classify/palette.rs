use std::fmt;

use serde::Serialize;

use super::urgency::UrgencyTier;

/// Opaque color identifier understood by the styling layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ColorToken(&'static str);

impl ColorToken {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ColorPair {
    pub foreground: ColorToken,
    pub background: ColorToken,
}

impl ColorPair {
    pub const fn new(foreground: &'static str, background: &'static str) -> Self {
        Self {
            foreground: ColorToken::new(foreground),
            background: ColorToken::new(background),
        }
    }
}

const OVERDUE_LIGHT: ColorPair = ColorPair::new("red.800", "red.100");
const OVERDUE_DARK: ColorPair = ColorPair::new("red.200", "red.900");
const CRITICAL_LIGHT: ColorPair = ColorPair::new("orange.800", "orange.100");
const CRITICAL_DARK: ColorPair = ColorPair::new("orange.200", "orange.900");
const SOON_LIGHT: ColorPair = ColorPair::new("yellow.800", "yellow.100");
const SOON_DARK: ColorPair = ColorPair::new("yellow.200", "yellow.900");
const NORMAL_SEMANTIC: ColorPair = ColorPair::new("fg.muted", "bg.subtle");

/// Badge colors for `tier`. Only `Normal` is shared across modes.
pub fn urgency_colors(tier: UrgencyTier, is_dark_mode: bool) -> ColorPair {
    match (tier, is_dark_mode) {
        (UrgencyTier::Overdue, false) => OVERDUE_LIGHT,
        (UrgencyTier::Overdue, true) => OVERDUE_DARK,
        (UrgencyTier::Critical, false) => CRITICAL_LIGHT,
        (UrgencyTier::Critical, true) => CRITICAL_DARK,
        (UrgencyTier::Soon, false) => SOON_LIGHT,
        (UrgencyTier::Soon, true) => SOON_DARK,
        (UrgencyTier::Normal, _) => NORMAL_SEMANTIC,
    }
}

pub mod card {
    use super::ColorToken;

    pub const ACCENT_STRONG: ColorToken = ColorToken::new("accent.solid");
    pub const ACCENT_WEAK: ColorToken = ColorToken::new("accent.muted");
    pub const DEFAULT_BORDER: ColorToken = ColorToken::new("border.default");
    pub const HIGHLIGHT: ColorToken = ColorToken::new("accent.subtle");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_specific_tiers_differ_between_modes() {
        for tier in [UrgencyTier::Overdue, UrgencyTier::Critical, UrgencyTier::Soon] {
            let light = urgency_colors(tier, false);
            let dark = urgency_colors(tier, true);
            assert_ne!(light, dark, "{tier:?}");
            assert_ne!(light.foreground, dark.foreground, "{tier:?}");
            assert_ne!(light.background, dark.background, "{tier:?}");
        }
    }

    #[test]
    fn normal_tier_is_mode_invariant() {
        assert_eq!(
            urgency_colors(UrgencyTier::Normal, false),
            urgency_colors(UrgencyTier::Normal, true)
        );
    }

    #[test]
    fn tiers_use_distinct_families() {
        assert!(urgency_colors(UrgencyTier::Overdue, false)
            .background
            .as_str()
            .starts_with("red"));
        assert!(urgency_colors(UrgencyTier::Critical, true)
            .foreground
            .as_str()
            .starts_with("orange"));
        assert!(urgency_colors(UrgencyTier::Soon, false)
            .foreground
            .as_str()
            .starts_with("yellow"));
    }
}
