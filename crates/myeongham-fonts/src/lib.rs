//! ASCII art banner font for the myeongham portfolio app.

/// Height of every glyph in rows.
pub const GLYPH_HEIGHT: usize = 7;

/// Block letters A-Z (7 lines tall, mostly 6 chars wide).
pub const LETTERS: [[&str; 7]; 26] = [
    // A
    [
        " ████ ",
        "██  ██",
        "██  ██",
        "██████",
        "██  ██",
        "██  ██",
        "██  ██",
    ],
    // B
    [
        "█████ ",
        "██  ██",
        "██  ██",
        "█████ ",
        "██  ██",
        "██  ██",
        "█████ ",
    ],
    // C
    [
        " ████ ",
        "██  ██",
        "██    ",
        "██    ",
        "██    ",
        "██  ██",
        " ████ ",
    ],
    // D
    [
        "█████ ",
        "██  ██",
        "██  ██",
        "██  ██",
        "██  ██",
        "██  ██",
        "█████ ",
    ],
    // E
    [
        "██████",
        "██    ",
        "██    ",
        "█████ ",
        "██    ",
        "██    ",
        "██████",
    ],
    // F
    [
        "██████",
        "██    ",
        "██    ",
        "█████ ",
        "██    ",
        "██    ",
        "██    ",
    ],
    // G
    [
        " ████ ",
        "██  ██",
        "██    ",
        "██ ███",
        "██  ██",
        "██  ██",
        " ████ ",
    ],
    // H
    [
        "██  ██",
        "██  ██",
        "██  ██",
        "██████",
        "██  ██",
        "██  ██",
        "██  ██",
    ],
    // I
    [
        " ████ ",
        "  ██  ",
        "  ██  ",
        "  ██  ",
        "  ██  ",
        "  ██  ",
        " ████ ",
    ],
    // J
    [
        "  ████",
        "    ██",
        "    ██",
        "    ██",
        "██  ██",
        "██  ██",
        " ████ ",
    ],
    // K
    [
        "██  ██",
        "██ ██ ",
        "████  ",
        "███   ",
        "████  ",
        "██ ██ ",
        "██  ██",
    ],
    // L
    [
        "██    ",
        "██    ",
        "██    ",
        "██    ",
        "██    ",
        "██    ",
        "██████",
    ],
    // M
    [
        "██   ██",
        "███ ███",
        "███████",
        "██ █ ██",
        "██   ██",
        "██   ██",
        "██   ██",
    ],
    // N
    [
        "██  ██",
        "███ ██",
        "██████",
        "██ ███",
        "██  ██",
        "██  ██",
        "██  ██",
    ],
    // O
    [
        " ████ ",
        "██  ██",
        "██  ██",
        "██  ██",
        "██  ██",
        "██  ██",
        " ████ ",
    ],
    // P
    [
        "█████ ",
        "██  ██",
        "██  ██",
        "█████ ",
        "██    ",
        "██    ",
        "██    ",
    ],
    // Q
    [
        " ████ ",
        "██  ██",
        "██  ██",
        "██  ██",
        "██ ███",
        "██  ██",
        " █████",
    ],
    // R
    [
        "█████ ",
        "██  ██",
        "██  ██",
        "█████ ",
        "████  ",
        "██ ██ ",
        "██  ██",
    ],
    // S
    [
        " █████",
        "██    ",
        "██    ",
        " ████ ",
        "    ██",
        "    ██",
        "█████ ",
    ],
    // T
    [
        "██████",
        "  ██  ",
        "  ██  ",
        "  ██  ",
        "  ██  ",
        "  ██  ",
        "  ██  ",
    ],
    // U
    [
        "██  ██",
        "██  ██",
        "██  ██",
        "██  ██",
        "██  ██",
        "██  ██",
        " ████ ",
    ],
    // V
    [
        "██  ██",
        "██  ██",
        "██  ██",
        "██  ██",
        "██  ██",
        " ████ ",
        "  ██  ",
    ],
    // W
    [
        "██   ██",
        "██   ██",
        "██   ██",
        "██ █ ██",
        "███████",
        "███ ███",
        "██   ██",
    ],
    // X
    [
        "██  ██",
        "██  ██",
        " ████ ",
        "  ██  ",
        " ████ ",
        "██  ██",
        "██  ██",
    ],
    // Y
    [
        "██  ██",
        "██  ██",
        " ████ ",
        "  ██  ",
        "  ██  ",
        "  ██  ",
        "  ██  ",
    ],
    // Z
    [
        "██████",
        "    ██",
        "   ██ ",
        "  ██  ",
        " ██   ",
        "██    ",
        "██████",
    ],
];

/// Large 7-segment style digits (7 lines tall, 6 chars wide).
pub const DIGITS: [[&str; 7]; 10] = [
    // 0
    [
        " ████ ",
        "██  ██",
        "██  ██",
        "██  ██",
        "██  ██",
        "██  ██",
        " ████ ",
    ],
    // 1
    [
        "  ██  ",
        " ███  ",
        "  ██  ",
        "  ██  ",
        "  ██  ",
        "  ██  ",
        " ████ ",
    ],
    // 2
    [
        " ████ ",
        "██  ██",
        "    ██",
        "  ██  ",
        " ██   ",
        "██    ",
        "██████",
    ],
    // 3
    [
        " ████ ",
        "██  ██",
        "    ██",
        "  ███ ",
        "    ██",
        "██  ██",
        " ████ ",
    ],
    // 4
    [
        "██  ██",
        "██  ██",
        "██  ██",
        "██████",
        "    ██",
        "    ██",
        "    ██",
    ],
    // 5
    [
        "██████",
        "██    ",
        "██    ",
        "█████ ",
        "    ██",
        "██  ██",
        " ████ ",
    ],
    // 6
    [
        " ████ ",
        "██    ",
        "██    ",
        "█████ ",
        "██  ██",
        "██  ██",
        " ████ ",
    ],
    // 7
    [
        "██████",
        "    ██",
        "   ██ ",
        "  ██  ",
        "  ██  ",
        "  ██  ",
        "  ██  ",
    ],
    // 8
    [
        " ████ ",
        "██  ██",
        "██  ██",
        " ████ ",
        "██  ██",
        "██  ██",
        " ████ ",
    ],
    // 9
    [
        " ████ ",
        "██  ██",
        "██  ██",
        " █████",
        "    ██",
        "    ██",
        " ████ ",
    ],
];

/// Blank glyph used for spaces and unsupported characters.
pub const BLANK: [&str; 7] = [
    "    ",
    "    ",
    "    ",
    "    ",
    "    ",
    "    ",
    "    ",
];

/// Dash glyph.
pub const DASH: [&str; 7] = [
    "      ",
    "      ",
    "      ",
    " ████ ",
    "      ",
    "      ",
    "      ",
];

/// Look up the art rows for a single character.
///
/// Letters are case-folded; anything outside A-Z, 0-9, space, and dash
/// falls back to the blank glyph.
pub fn glyph(ch: char) -> &'static [&'static str; 7] {
    match ch.to_ascii_uppercase() {
        c @ 'A'..='Z' => &LETTERS[(c as u8 - b'A') as usize],
        c @ '0'..='9' => &DIGITS[(c as u8 - b'0') as usize],
        '-' => &DASH,
        _ => &BLANK,
    }
}

/// Build large ASCII art for arbitrary text.
///
/// # Returns
/// A vector of 7 strings, each representing one line of the ASCII art.
pub fn build_banner(text: &str) -> Vec<String> {
    let mut lines = Vec::with_capacity(GLYPH_HEIGHT);

    for row in 0..GLYPH_HEIGHT {
        let mut line = String::new();
        for (i, ch) in text.chars().enumerate() {
            if i > 0 {
                line.push(' ');
            }
            line.push_str(glyph(ch)[row]);
        }
        lines.push(line);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_rows_have_uniform_width() {
        for letter in LETTERS.iter() {
            let width = letter[0].chars().count();
            for row in letter.iter() {
                assert_eq!(row.chars().count(), width);
            }
        }
    }

    #[test]
    fn test_banner_height() {
        let banner = build_banner("Hiro");
        assert_eq!(banner.len(), GLYPH_HEIGHT);
    }

    #[test]
    fn test_banner_rows_have_uniform_width() {
        let banner = build_banner("myeongham");
        let width = banner[0].chars().count();
        for row in &banner {
            assert_eq!(row.chars().count(), width);
        }
    }

    #[test]
    fn test_digit_glyphs_render() {
        for d in '0'..='9' {
            let art = glyph(d);
            assert_ne!(art, &BLANK, "digit {d} should have a glyph");
            assert!(art.iter().any(|row| row.contains('█')));
        }
        assert_eq!(glyph('0'), &DIGITS[0]);
        assert_eq!(glyph('7'), &DIGITS[7]);
    }

    #[test]
    fn test_banner_with_digits() {
        let solo = build_banner("3");
        assert_eq!(solo, DIGITS[3].to_vec());

        let banner = build_banner("Web3 Dev");
        assert_eq!(banner.len(), GLYPH_HEIGHT);
        let width = banner[0].chars().count();
        for row in &banner {
            assert_eq!(row.chars().count(), width);
        }
    }

    #[test]
    fn test_digit_rows_have_uniform_width() {
        for digit in DIGITS.iter() {
            for row in digit.iter() {
                assert_eq!(row.chars().count(), 6);
            }
        }
    }

    #[test]
    fn test_unknown_char_falls_back_to_blank() {
        assert_eq!(glyph('?'), &BLANK);
        assert_eq!(glyph(' '), &BLANK);
    }

    #[test]
    fn test_case_folding() {
        assert_eq!(glyph('a'), glyph('A'));
    }
}
