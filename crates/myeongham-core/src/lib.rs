//! Core types shared across the myeongham portfolio crates.

use ratatui::style::Color;

/// Named reveal transition variants for sections scrolling into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealKind {
    /// Translate up from below while fading in.
    #[default]
    SlideUp,
    /// Translate in from the right edge while fading in.
    SlideLeft,
    /// Translate in from the left edge while fading in.
    SlideRight,
    /// Fade in with no translation.
    Fade,
}

impl RevealKind {
    /// Parse a config string into a reveal kind, defaulting to slide-up.
    pub fn from_name(name: &str) -> Self {
        match name {
            "slide-left" => Self::SlideLeft,
            "slide-right" => Self::SlideRight,
            "fade" => Self::Fade,
            _ => Self::SlideUp,
        }
    }
}

/// Presentation theme for the portfolio page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileTheme {
    /// Terminal-emulator chrome with traffic-light header.
    #[default]
    Terminal,
    /// Discord-style profile card chrome.
    Card,
}

impl ProfileTheme {
    /// Toggle between the terminal and card themes.
    pub fn toggle(self) -> Self {
        match self {
            Self::Terminal => Self::Card,
            Self::Card => Self::Terminal,
        }
    }
}

/// Accent color themes, cycled at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorTheme {
    /// Classic terminal green.
    #[default]
    Green,
    Cyan,
    Magenta,
    Amber,
    White,
}

impl ColorTheme {
    /// The accent color for this theme.
    pub fn color(self) -> Color {
        match self {
            Self::Green => Color::Rgb(0, 255, 65),
            Self::Cyan => Color::Rgb(0, 200, 255),
            Self::Magenta => Color::Rgb(255, 80, 200),
            Self::Amber => Color::Rgb(255, 180, 0),
            Self::White => Color::Rgb(230, 230, 230),
        }
    }

    /// Cycle to the next accent theme.
    pub fn next(self) -> Self {
        match self {
            Self::Green => Self::Cyan,
            Self::Cyan => Self::Magenta,
            Self::Magenta => Self::Amber,
            Self::Amber => Self::White,
            Self::White => Self::Green,
        }
    }
}

/// Identifier for each portfolio section, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    Hero,
    About,
    Skills,
    Projects,
    Contact,
}

impl SectionId {
    /// All sections in page order.
    pub const ALL: [SectionId; 5] = [
        Self::Hero,
        Self::About,
        Self::Skills,
        Self::Projects,
        Self::Contact,
    ];

    /// Window title shown in the section's chrome.
    pub fn title(self) -> &'static str {
        match self {
            Self::Hero => "~",
            Self::About => "about.txt",
            Self::Skills => "skills.exe",
            Self::Projects => "projects.db",
            Self::Contact => "contact.sh",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_kind_from_name() {
        assert_eq!(RevealKind::from_name("slide-left"), RevealKind::SlideLeft);
        assert_eq!(RevealKind::from_name("fade"), RevealKind::Fade);
        assert_eq!(RevealKind::from_name("slide-up"), RevealKind::SlideUp);
        assert_eq!(RevealKind::from_name("bogus"), RevealKind::SlideUp);
    }

    #[test]
    fn test_profile_theme_toggle() {
        assert_eq!(ProfileTheme::Terminal.toggle(), ProfileTheme::Card);
        assert_eq!(ProfileTheme::Card.toggle(), ProfileTheme::Terminal);
    }

    #[test]
    fn test_color_theme_cycles_back() {
        let mut theme = ColorTheme::Green;
        for _ in 0..5 {
            theme = theme.next();
        }
        assert_eq!(theme, ColorTheme::Green);
    }
}
