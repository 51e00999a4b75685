mod common;

use bill_calendar::classify::{
    classify_magnitude, classify_urgency, palette::card, resolve_card_state, urgency_colors,
    MagnitudeTier, StrategyKey, UrgencyInput, UrgencyTier,
};
use bill_calendar::domain::Amount;
use common::cents;

fn tier_for(days: i64) -> UrgencyTier {
    classify_urgency(UrgencyInput::new(false, days), false).tier
}

fn magnitude(value: i64) -> MagnitudeTier {
    classify_magnitude(Amount::new(cents(value)).unwrap())
}

#[test]
fn urgency_boundaries() {
    assert_eq!(tier_for(3), UrgencyTier::Critical);
    assert_eq!(tier_for(4), UrgencyTier::Soon);
    assert_eq!(tier_for(7), UrgencyTier::Soon);
    assert_eq!(tier_for(8), UrgencyTier::Normal);
}

#[test]
fn every_day_count_maps_to_one_tier() {
    for days in -60..=60 {
        let tier = tier_for(days);
        let expected = if days <= 3 {
            UrgencyTier::Critical
        } else if days <= 7 {
            UrgencyTier::Soon
        } else {
            UrgencyTier::Normal
        };
        assert_eq!(tier, expected, "days = {days}");
    }
}

#[test]
fn overdue_always_wins() {
    for days in [i64::MIN, -400, -1, 0, 1, 3, 4, 7, 8, 400, i64::MAX] {
        for dark in [false, true] {
            let badge = classify_urgency(UrgencyInput::new(true, days), dark);
            assert_eq!(badge.tier, UrgencyTier::Overdue);
            assert_eq!(badge.label, "Overdue");
            assert_eq!(badge.colors, urgency_colors(UrgencyTier::Overdue, dark));
        }
    }
}

#[test]
fn badge_colors_follow_mode() {
    for days in [1, 5] {
        let light = classify_urgency(UrgencyInput::new(false, days), false);
        let dark = classify_urgency(UrgencyInput::new(false, days), true);
        assert_eq!(light.tier, dark.tier);
        assert_eq!(light.label, dark.label);
        assert_ne!(light.colors, dark.colors);
    }
    let light = classify_urgency(UrgencyInput::new(false, 30), false);
    let dark = classify_urgency(UrgencyInput::new(false, 30), true);
    assert_eq!(light.colors, dark.colors);
}

#[test]
fn magnitude_boundaries() {
    assert_eq!(magnitude(4999), MagnitudeTier::Low);
    assert_eq!(magnitude(5000), MagnitudeTier::Medium);
    assert_eq!(magnitude(19999), MagnitudeTier::Medium);
    assert_eq!(magnitude(20000), MagnitudeTier::High);
}

#[test]
fn card_states() {
    let selected = resolve_card_state(StrategyKey::Avalanche, Some(StrategyKey::Avalanche), None);
    assert_eq!(selected.border_width, 2);
    assert_eq!(selected.border_color, card::ACCENT_STRONG);
    assert!(selected.background_override.is_some());

    let recommended = resolve_card_state(
        StrategyKey::Snowball,
        Some(StrategyKey::Avalanche),
        Some(StrategyKey::Snowball.recommended_label()),
    );
    assert_eq!(recommended.border_width, 2);
    assert_eq!(recommended.border_color, card::ACCENT_WEAK);
    assert!(recommended.background_override.is_none());

    let neither = resolve_card_state(StrategyKey::Minimum, Some(StrategyKey::Avalanche), None);
    assert_eq!(neither.border_width, 1);
    assert_eq!(neither.border_color, card::DEFAULT_BORDER);
    assert!(neither.background_override.is_none());
}
