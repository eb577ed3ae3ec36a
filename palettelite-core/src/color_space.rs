//! HSL/RGB/hex color conversions used to synthesize palette colors.
//!
//! HSL: hue in degrees, saturation and lightness as integer percentages.
//! Hex: canonical form is `#RRGGBB` in uppercase.

use crate::error::ColorError;

/// Round half toward positive infinity (`-30.5` becomes `-30`).
fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Convert HSL to sRGB [0-255].
///
/// Hue wraps modulo 360 (negative values wrap positive); saturation and
/// lightness are clamped to [0, 100].
pub fn hsl_to_rgb(h: i32, s: i32, l: i32) -> [u8; 3] {
    let h = h.rem_euclid(360) as f64;
    let s = s.clamp(0, 100) as f64 / 100.0;
    let l = l.clamp(0, 100) as f64 / 100.0;

    // Chroma, second-largest component, lightness offset
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r1, g1, b1) = match h {
        h if h < 60.0 => (c, x, 0.0),
        h if h < 120.0 => (x, c, 0.0),
        h if h < 180.0 => (0.0, c, x),
        h if h < 240.0 => (0.0, x, c),
        h if h < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    [
        ((r1 + m) * 255.0).round().clamp(0.0, 255.0) as u8,
        ((g1 + m) * 255.0).round().clamp(0.0, 255.0) as u8,
        ((b1 + m) * 255.0).round().clamp(0.0, 255.0) as u8,
    ]
}

/// Format RGB channels as `#RRGGBB`. Each channel is clamped to [0, 255].
pub fn rgb_to_hex(r: i32, g: i32, b: i32) -> String {
    format!(
        "#{:02X}{:02X}{:02X}",
        r.clamp(0, 255),
        g.clamp(0, 255),
        b.clamp(0, 255)
    )
}

/// Convert HSL straight to a canonical hex string.
pub fn hsl_to_hex(h: i32, s: i32, l: i32) -> String {
    let [r, g, b] = hsl_to_rgb(h, s, l);
    rgb_to_hex(r as i32, g as i32, b as i32)
}

/// Parse `RRGGBB` or `#RRGGBB` (any case, surrounding whitespace ignored).
pub fn hex_to_rgb(hex: &str) -> Result<[u8; 3], ColorError> {
    let trimmed = hex.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidHex(hex.to_string()));
    }

    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| ColorError::InvalidHex(hex.to_string()))
    };
    Ok([channel(0)?, channel(2)?, channel(4)?])
}

/// Canonicalize a hex string to `#RRGGBB` uppercase.
pub fn normalize_hex(hex: &str) -> Result<String, ColorError> {
    let [r, g, b] = hex_to_rgb(hex)?;
    Ok(rgb_to_hex(r as i32, g as i32, b as i32))
}

/// Uppercase hex digits without the leading `#`.
pub fn hex_without_hash(hex: &str) -> String {
    hex.trim().trim_start_matches('#').to_uppercase()
}

/// Convert sRGB [0-255] to HSL.
/// Returns (h, s, l) with h in [0, 360) and s, l as integer percentages.
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> (i32, i32, i32) {
    let r = r as f64 / 255.0;
    let g = g as f64 / 255.0;
    let b = b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let d = max - min;

    let sector = if d == 0.0 {
        0.0
    } else if max == r {
        ((g - b) / d) % 6.0
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    let h = (round_half_up(sector * 60.0) as i32).rem_euclid(360);

    let l = (max + min) / 2.0;
    let s = if d == 0.0 {
        0.0
    } else {
        d / (1.0 - (2.0 * l - 1.0).abs())
    };

    (h, (s * 100.0).round() as i32, (l * 100.0).round() as i32)
}
