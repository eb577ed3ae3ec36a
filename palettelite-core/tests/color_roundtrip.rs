use palettelite_core::{hex_to_rgb, hsl_to_rgb, rgb_to_hex, rgb_to_hsl};

fn hue_distance(a: i32, b: i32) -> i32 {
    let d = (a - b).rem_euclid(360);
    d.min(360 - d)
}

#[test]
fn hsl_rgb_hsl_within_rounding() {
    for h in (0..360).step_by(15) {
        for s in [30, 50, 75, 100] {
            for l in [25, 40, 50, 60, 75] {
                let [r, g, b] = hsl_to_rgb(h, s, l);
                let (h2, s2, l2) = rgb_to_hsl(r, g, b);
                assert!(
                    hue_distance(h, h2) <= 3,
                    "hue {h} -> {h2} (s={s}, l={l})"
                );
                assert!((s - s2).abs() <= 2, "sat {s} -> {s2} (h={h}, l={l})");
                assert!((l - l2).abs() <= 1, "light {l} -> {l2} (h={h}, s={s})");
            }
        }
    }
}

#[test]
fn every_grey_level_roundtrips_through_hex() {
    for v in 0..=255u8 {
        let hex = rgb_to_hex(v as i32, v as i32, v as i32);
        assert_eq!(hex_to_rgb(&hex), Ok([v, v, v]));
        assert_eq!(hex, hex.to_uppercase());
    }
}

#[test]
fn lowercase_input_canonicalizes_on_output() {
    let samples = ["#0a0b0c", "deadbe", "#FfFfFf", "#7f00ff"];
    for hex in samples {
        let [r, g, b] = hex_to_rgb(hex).unwrap();
        let canonical = rgb_to_hex(r as i32, g as i32, b as i32);
        let expected = format!("#{}", hex.trim_start_matches('#').to_uppercase());
        assert_eq!(canonical, expected);
    }
}

#[test]
fn achromatic_colors_have_zero_saturation() {
    for l in [0, 20, 50, 80, 100] {
        let [r, g, b] = hsl_to_rgb(123, 0, l);
        assert_eq!(r, g);
        assert_eq!(g, b);
        let (_, s, _) = rgb_to_hsl(r, g, b);
        assert_eq!(s, 0);
    }
}
