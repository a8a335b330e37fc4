//! Color utility functions for the animated page.

use ratatui::style::Color;

/// Scale an RGB color toward black by `factor` (0.0 = black, 1.0 = unchanged).
///
/// Terminal cells have no alpha channel, so opacity is approximated by
/// dimming against the dark page background. Non-RGB colors pass through.
pub fn dim(color: Color, factor: f32) -> Color {
    let factor = factor.clamp(0.0, 1.0);
    match color {
        Color::Rgb(r, g, b) => Color::Rgb(
            (r as f32 * factor) as u8,
            (g as f32 * factor) as u8,
            (b as f32 * factor) as u8,
        ),
        other => other,
    }
}

/// Linear blend between two RGB colors (`t` = 0.0 yields `from`, 1.0 `to`).
///
/// Used for fade-in: content is blended from the background color to its
/// final color as the reveal progresses. Non-RGB inputs snap at `t = 0.5`.
pub fn blend_toward(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r0, g0, b0), Color::Rgb(r1, g1, b1)) => Color::Rgb(
            (r0 as f32 + (r1 as f32 - r0 as f32) * t) as u8,
            (g0 as f32 + (g1 as f32 - g0 as f32) * t) as u8,
            (b0 as f32 + (b1 as f32 - b0 as f32) * t) as u8,
        ),
        _ => {
            if t < 0.5 {
                from
            } else {
                to
            }
        }
    }
}

/// Map a skill level (0-100) to a color from red through yellow to green.
pub fn level_to_color(level: u8) -> Color {
    let value = (level.min(100)) as f32 / 100.0;

    // Hue: 0 (red) -> 60 (yellow) -> 120 (green)
    let hue = value * 120.0;

    hsl_to_rgb(hue, 0.7, 0.45)
}

/// Convert HSL to RGB color.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Color {
    if s == 0.0 {
        let v = (l * 255.0) as u8;
        return Color::Rgb(v, v, v);
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    let h = h / 360.0;

    let r = hue_to_rgb(p, q, h + 1.0 / 3.0);
    let g = hue_to_rgb(p, q, h);
    let b = hue_to_rgb(p, q, h - 1.0 / 3.0);

    Color::Rgb((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}

fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dim_endpoints() {
        let c = Color::Rgb(0, 255, 65);
        assert_eq!(dim(c, 0.0), Color::Rgb(0, 0, 0));
        assert_eq!(dim(c, 1.0), c);
    }

    #[test]
    fn test_dim_passes_through_non_rgb() {
        assert_eq!(dim(Color::Green, 0.5), Color::Green);
    }

    #[test]
    fn test_blend_endpoints() {
        let from = Color::Rgb(0, 0, 0);
        let to = Color::Rgb(200, 100, 50);
        assert_eq!(blend_toward(from, to, 0.0), from);
        assert_eq!(blend_toward(from, to, 1.0), to);
    }

    #[test]
    fn test_level_to_color_ends() {
        // Low levels are red-dominant, high levels green-dominant.
        let low = level_to_color(0);
        let high = level_to_color(100);
        if let (Color::Rgb(r0, g0, _), Color::Rgb(r1, g1, _)) = (low, high) {
            assert!(r0 > g0);
            assert!(g1 > r1);
        } else {
            panic!("expected RGB colors");
        }
    }

    #[test]
    fn test_hsl_to_rgb_grayscale() {
        assert_eq!(hsl_to_rgb(0.0, 0.0, 0.5), Color::Rgb(127, 127, 127));
    }
}
