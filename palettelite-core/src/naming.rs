//! Heuristic human-readable color names.
//!
//! Rules are ordered tables evaluated top to bottom; the first match wins.

use crate::color_space::{hex_to_rgb, rgb_to_hsl};

/// Label for input that is not a valid hex color.
pub const UNKNOWN_COLOR: &str = "Unknown";

/// Saturation at or below this is treated as gray.
const GRAY_MAX_SATURATION: i32 = 12;

/// Saturation below this (but above gray) gets the "Muted" qualifier.
const MUTED_MAX_SATURATION: i32 = 35;

type Rule = (fn(i32) -> bool, &'static str);

/// Gray tiers by lightness.
const GRAY_TIERS: &[Rule] = &[
    (|l| l >= 85, "White-ish"),
    (|l| l <= 15, "Black-ish"),
    (|l| l >= 60, "Light Gray"),
    (|l| l >= 35, "Gray"),
    (|_| true, "Dark Gray"),
];

/// Hue buckets in degrees. Red wraps around 0.
const HUE_BUCKETS: &[Rule] = &[
    (|h| !(15..345).contains(&h), "Red"),
    (|h| h < 45, "Orange"),
    (|h| h < 70, "Yellow"),
    (|h| h < 160, "Green"),
    (|h| h < 200, "Cyan"),
    (|h| h < 255, "Blue"),
    (|h| h < 290, "Purple"),
    (|h| h < 345, "Pink"),
];

/// Lightness qualifiers.
const LIGHTNESS_PREFIXES: &[Rule] = &[(|l| l >= 72, "Light"), (|l| l <= 30, "Dark")];

fn first_match(rules: &[Rule], value: i32) -> Option<&'static str> {
    rules
        .iter()
        .find(|(matches, _)| matches(value))
        .map(|(_, label)| *label)
}

/// Guess a short name such as "Light Muted Blue" for a hex color.
pub fn guess_color_name(hex: &str) -> String {
    let Ok([r, g, b]) = hex_to_rgb(hex) else {
        return UNKNOWN_COLOR.to_string();
    };
    let (h, s, l) = rgb_to_hsl(r, g, b);
    classify(h, s, l)
}

/// Name an HSL triple (degrees, percent, percent).
fn classify(h: i32, s: i32, l: i32) -> String {
    let l = l.clamp(0, 100);

    if s <= GRAY_MAX_SATURATION {
        return first_match(GRAY_TIERS, l)
            .unwrap_or("Gray")
            .to_string();
    }

    let base = first_match(HUE_BUCKETS, h.rem_euclid(360)).unwrap_or("Color");

    let mut parts = Vec::with_capacity(3);
    if let Some(prefix) = first_match(LIGHTNESS_PREFIXES, l) {
        parts.push(prefix);
    }
    if s < MUTED_MAX_SATURATION {
        parts.push("Muted");
    }
    parts.push(base);
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color_space::hsl_to_hex;

    #[test]
    fn grays_by_lightness() {
        assert_eq!(guess_color_name("#FFFFFF"), "White-ish");
        assert_eq!(guess_color_name("#000000"), "Black-ish");
        assert_eq!(guess_color_name("#AAAAAA"), "Light Gray");
        assert_eq!(guess_color_name("#808080"), "Gray");
        assert_eq!(guess_color_name("#333333"), "Dark Gray");
    }

    #[test]
    fn primaries() {
        assert_eq!(guess_color_name("#FF0000"), "Red");
        assert_eq!(guess_color_name("#00FF00"), "Green");
        assert_eq!(guess_color_name("#0000FF"), "Blue");
    }

    #[test]
    fn red_wraps_around_zero() {
        assert_eq!(guess_color_name(&hsl_to_hex(350, 80, 50)), "Red");
        assert_eq!(guess_color_name(&hsl_to_hex(10, 80, 50)), "Red");
        assert_eq!(guess_color_name(&hsl_to_hex(340, 80, 50)), "Pink");
    }

    #[test]
    fn hue_bucket_boundaries() {
        let cases = [
            (20, "Orange"),
            (50, "Yellow"),
            (100, "Green"),
            (180, "Cyan"),
            (220, "Blue"),
            (270, "Purple"),
            (320, "Pink"),
        ];
        for (hue, expected) in cases {
            assert_eq!(guess_color_name(&hsl_to_hex(hue, 80, 50)), expected, "hue {hue}");
        }
    }

    #[test]
    fn hue_bucket_edges() {
        let edges = [
            (14, "Red", 15, "Orange"),
            (44, "Orange", 45, "Yellow"),
            (69, "Yellow", 70, "Green"),
            (159, "Green", 160, "Cyan"),
            (199, "Cyan", 200, "Blue"),
            (254, "Blue", 255, "Purple"),
            (289, "Purple", 290, "Pink"),
            (344, "Pink", 345, "Red"),
        ];
        for (below, below_name, at, at_name) in edges {
            assert_eq!(classify(below, 80, 50), below_name, "hue {below}");
            assert_eq!(classify(at, 80, 50), at_name, "hue {at}");
        }
        assert_eq!(classify(0, 80, 50), "Red");
        assert_eq!(classify(359, 80, 50), "Red");
    }

    #[test]
    fn lightness_qualifier_edges() {
        assert_eq!(classify(220, 80, 72), "Light Blue");
        assert_eq!(classify(220, 80, 71), "Blue");
        assert_eq!(classify(220, 80, 31), "Blue");
        assert_eq!(classify(220, 80, 30), "Dark Blue");
    }

    #[test]
    fn saturation_edges() {
        assert_eq!(classify(220, 35, 50), "Blue");
        assert_eq!(classify(220, 34, 50), "Muted Blue");
        assert_eq!(classify(220, 13, 50), "Muted Blue");
        assert_eq!(classify(220, 12, 50), "Gray");
    }

    #[test]
    fn gray_tier_edges() {
        assert_eq!(classify(0, 0, 85), "White-ish");
        assert_eq!(classify(0, 0, 84), "Light Gray");
        assert_eq!(classify(0, 0, 60), "Light Gray");
        assert_eq!(classify(0, 0, 59), "Gray");
        assert_eq!(classify(0, 0, 35), "Gray");
        assert_eq!(classify(0, 0, 34), "Dark Gray");
        assert_eq!(classify(0, 0, 16), "Dark Gray");
        assert_eq!(classify(0, 0, 15), "Black-ish");
    }

    #[test]
    fn lightness_and_muted_qualifiers() {
        assert_eq!(guess_color_name(&hsl_to_hex(220, 80, 80)), "Light Blue");
        assert_eq!(guess_color_name(&hsl_to_hex(220, 80, 20)), "Dark Blue");
        assert_eq!(guess_color_name(&hsl_to_hex(220, 25, 50)), "Muted Blue");
        assert_eq!(guess_color_name(&hsl_to_hex(220, 25, 80)), "Light Muted Blue");
    }

    #[test]
    fn invalid_hex_is_unknown() {
        assert_eq!(guess_color_name("not-a-color"), UNKNOWN_COLOR);
        assert_eq!(guess_color_name(""), UNKNOWN_COLOR);
    }
}
