//! Text tone selection for labels drawn on top of a swatch.

use crate::color_space::hex_to_rgb;

/// Luminance above which dark text is used.
pub const DEFAULT_LUMINANCE_THRESHOLD: f64 = 0.62;

/// Text color to draw over a background.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextTone {
    Dark,
    Light,
}

impl TextTone {
    /// CSS color for this tone.
    pub fn css_color(self) -> &'static str {
        match self {
            TextTone::Dark => "#0B1220",
            TextTone::Light => "#FFFFFF",
        }
    }

    pub fn is_dark(self) -> bool {
        self == TextTone::Dark
    }
}

/// Relative luminance `0.2126 R + 0.7152 G + 0.0722 B`, normalized to [0, 1].
pub fn luminance(rgb: [u8; 3]) -> f64 {
    let [r, g, b] = rgb;
    (0.2126 * r as f64 + 0.7152 * g as f64 + 0.0722 * b as f64) / 255.0
}

/// Pick a readable text tone for `hex` with the default threshold.
pub fn pick_text_color(hex: &str) -> TextTone {
    pick_text_color_with(hex, DEFAULT_LUMINANCE_THRESHOLD)
}

/// Pick a readable text tone for `hex`. Invalid hex falls back to light text.
pub fn pick_text_color_with(hex: &str, threshold: f64) -> TextTone {
    match hex_to_rgb(hex) {
        Ok(rgb) if luminance(rgb) > threshold => TextTone::Dark,
        _ => TextTone::Light,
    }
}
