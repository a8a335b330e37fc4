//! Secondary utility tools page: storage converter and password generator.
//!
//! Deliberately small client-side calculators; each exposes a plain function
//! contract and the page is just an input buffer plus rendered results.

use myeongham_effects::{Rng, dim};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use myeongham_core::ProfileTheme;

use crate::theme;

const LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()-_=+[]{};:,.<>?";

const TEXT_WHITE: Color = Color::Rgb(225, 225, 225);
const TEXT_GRAY: Color = Color::Rgb(140, 140, 140);

/// GB converted to decimal (×1000) and binary (×1024) megabytes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conversion {
    pub decimal_mb: f64,
    pub binary_mb: f64,
}

/// Convert gigabytes to megabytes; non-positive or unparsable input yields
/// no result, mirroring an empty result panel.
pub fn convert_gigabytes(input: &str) -> Option<Conversion> {
    let gb: f64 = input.trim().parse().ok()?;
    if !gb.is_finite() || gb <= 0.0 {
        return None;
    }
    Some(Conversion {
        decimal_mb: gb * 1000.0,
        binary_mb: gb * 1024.0,
    })
}

/// Character classes enabled for password generation.
#[derive(Debug, Clone, Copy)]
pub struct PasswordOptions {
    pub lower: bool,
    pub upper: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            lower: true,
            upper: true,
            digits: true,
            symbols: false,
        }
    }
}

impl PasswordOptions {
    fn charset(&self) -> Vec<char> {
        let mut set = Vec::new();
        if self.lower {
            set.extend(LOWER.chars());
        }
        if self.upper {
            set.extend(UPPER.chars());
        }
        if self.digits {
            set.extend(DIGITS.chars());
        }
        if self.symbols {
            set.extend(SYMBOLS.chars());
        }
        set
    }
}

/// Generate a password of `length` characters from the enabled classes.
///
/// With every class disabled there is nothing to draw from and the result is
/// empty.
pub fn generate_password(rng: &mut Rng, options: PasswordOptions, length: usize) -> String {
    let charset = options.charset();
    if charset.is_empty() {
        return String::new();
    }
    (0..length).map(|_| *rng.pick(&charset)).collect()
}

/// Interactive state of the tools page.
#[derive(Debug)]
pub struct ToolsPage {
    /// Digits typed into the converter field.
    input: String,
    options: PasswordOptions,
    password_length: usize,
    password: Option<String>,
    rng: Rng,
}

impl Default for ToolsPage {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolsPage {
    pub fn new() -> Self {
        Self {
            input: "512".to_string(),
            options: PasswordOptions::default(),
            password_length: 20,
            password: None,
            rng: Rng::from_entropy(),
        }
    }

    /// Feed a typed character into the converter input.
    pub fn on_char(&mut self, ch: char) {
        if (ch.is_ascii_digit() || ch == '.') && self.input.len() < 12 {
            self.input.push(ch);
        }
    }

    /// Delete the last typed character.
    pub fn on_backspace(&mut self) {
        self.input.pop();
    }

    /// Toggle a password character class by index (0-3).
    pub fn toggle_class(&mut self, index: usize) {
        match index {
            0 => self.options.lower = !self.options.lower,
            1 => self.options.upper = !self.options.upper,
            2 => self.options.digits = !self.options.digits,
            3 => self.options.symbols = !self.options.symbols,
            _ => {}
        }
    }

    /// Generate a fresh password with the current options.
    pub fn regenerate(&mut self) {
        let options = self.options;
        self.password = Some(generate_password(&mut self.rng, options, self.password_length));
    }

    /// Draw the tools page.
    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        profile_theme: ProfileTheme,
        accent: Color,
    ) {
        let block = theme::section_block(profile_theme, "tools", accent, 1.0);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.width < 4 || inner.height == 0 {
            return;
        }

        let label = Style::new().fg(TEXT_GRAY);
        let value = Style::new().fg(TEXT_WHITE);
        let accent_style = Style::new().fg(accent);

        let mut lines = vec![
            Line::styled("storage converter", accent_style),
            Line::raw(""),
            Line::from(vec![
                Span::styled("gigabytes  ", label),
                Span::styled(format!("{}_", self.input), value),
            ]),
        ];

        match convert_gigabytes(&self.input) {
            Some(result) => {
                lines.push(Line::from(vec![
                    Span::styled("decimal    ", label),
                    Span::styled(format!("{} MB  (x1000)", result.decimal_mb), value),
                ]));
                lines.push(Line::from(vec![
                    Span::styled("binary     ", label),
                    Span::styled(format!("{} MB  (x1024)", result.binary_mb), value),
                ]));
            }
            None => lines.push(Line::styled("enter a number of gigabytes", label)),
        }

        lines.push(Line::raw(""));
        lines.push(Line::styled("password generator", accent_style));
        lines.push(Line::raw(""));

        let class_line = |name: &str, on: bool| -> Span<'static> {
            let mark = if on { "[x]" } else { "[ ]" };
            Span::styled(
                format!("{mark} {name}   "),
                if on { value } else { Style::new().fg(dim(TEXT_GRAY, 0.6)) },
            )
        };
        lines.push(Line::from(vec![
            class_line("l lower", self.options.lower),
            class_line("u upper", self.options.upper),
            class_line("n digits", self.options.digits),
            class_line("s symbols", self.options.symbols),
        ]));
        lines.push(Line::from(vec![
            Span::styled("length     ", label),
            Span::styled(self.password_length.to_string(), value),
            Span::styled("   r regenerate", label),
        ]));
        match &self.password {
            Some(p) if !p.is_empty() => {
                lines.push(Line::from(vec![
                    Span::styled("password   ", label),
                    Span::styled(p.clone(), accent_style),
                ]));
            }
            Some(_) => lines.push(Line::styled("enable at least one class", label)),
            None => {}
        }

        let text_rect = Rect::new(
            inner.x + 2,
            inner.y + 1,
            inner.width.saturating_sub(4),
            inner.height.saturating_sub(1),
        );
        frame.render_widget(Paragraph::new(lines), text_rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_class_labels_show_toggle_keys() {
        let page = ToolsPage::new();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();

        terminal
            .draw(|frame| {
                let area = frame.area();
                page.render(frame, area, ProfileTheme::Terminal, Color::Green);
            })
            .unwrap();

        let rendered: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        for key in ["l lower", "u upper", "n digits", "s symbols"] {
            assert!(rendered.contains(key), "missing label {key:?}");
        }
        assert!(!rendered.contains("1 lower"));
    }

    #[test]
    fn test_convert_decimal_and_binary() {
        let result = convert_gigabytes("512").unwrap();
        assert_eq!(result.decimal_mb, 512_000.0);
        assert_eq!(result.binary_mb, 524_288.0);
    }

    #[test]
    fn test_convert_rejects_bad_input() {
        assert!(convert_gigabytes("").is_none());
        assert!(convert_gigabytes("abc").is_none());
        assert!(convert_gigabytes("-3").is_none());
        assert!(convert_gigabytes("0").is_none());
    }

    #[test]
    fn test_convert_fractional() {
        let result = convert_gigabytes("1.5").unwrap();
        assert_eq!(result.decimal_mb, 1_500.0);
        assert_eq!(result.binary_mb, 1_536.0);
    }

    #[test]
    fn test_password_length_and_charset() {
        let mut rng = Rng::seeded(11);
        let options = PasswordOptions {
            lower: true,
            upper: false,
            digits: true,
            symbols: false,
        };
        let password = generate_password(&mut rng, options, 32);
        assert_eq!(password.chars().count(), 32);
        assert!(
            password
                .chars()
                .all(|c| LOWER.contains(c) || DIGITS.contains(c))
        );
    }

    #[test]
    fn test_password_empty_charset_yields_empty() {
        let mut rng = Rng::seeded(5);
        let options = PasswordOptions {
            lower: false,
            upper: false,
            digits: false,
            symbols: false,
        };
        assert!(generate_password(&mut rng, options, 16).is_empty());
    }

    #[test]
    fn test_input_buffer_filters_characters() {
        let mut page = ToolsPage::new();
        page.input.clear();
        page.on_char('4');
        page.on_char('x');
        page.on_char('.');
        page.on_char('2');
        assert_eq!(page.input, "4.2");
        page.on_backspace();
        assert_eq!(page.input, "4.");
    }
}
