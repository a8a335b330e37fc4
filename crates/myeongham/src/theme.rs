//! Section chrome for the two presentation themes.
//!
//! `Terminal` frames each section as a terminal window with a traffic-light
//! header; `Card` frames it as a softer rounded profile card. Both take the
//! section's reveal alpha so chrome fades in with its content.

use myeongham_core::ProfileTheme;
use myeongham_effects::dim;
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType},
};

/// Rows a section's chrome adds around its content.
pub const CHROME_ROWS: u16 = 2;

const LIGHT_RED: Color = Color::Rgb(255, 95, 86);
const LIGHT_YELLOW: Color = Color::Rgb(255, 189, 46);
const LIGHT_GREEN: Color = Color::Rgb(39, 201, 63);
const TITLE_GRAY: Color = Color::Rgb(150, 150, 150);
const CARD_BORDER: Color = Color::Rgb(210, 210, 215);

/// Build the window/card frame for one section.
pub fn section_block(
    theme: ProfileTheme,
    title: &str,
    accent: Color,
    alpha: f32,
) -> Block<'static> {
    let title_line = Line::from(Span::styled(
        format!(" {title} "),
        Style::new().fg(dim(TITLE_GRAY, alpha)),
    ))
    .centered();

    match theme {
        ProfileTheme::Terminal => {
            let lights = Line::from(vec![
                Span::styled("●", Style::new().fg(dim(LIGHT_RED, alpha))),
                Span::raw(" "),
                Span::styled("●", Style::new().fg(dim(LIGHT_YELLOW, alpha))),
                Span::raw(" "),
                Span::styled("●", Style::new().fg(dim(LIGHT_GREEN, alpha))),
            ])
            .left_aligned();

            Block::bordered()
                .border_style(Style::new().fg(dim(accent, 0.6 * alpha)))
                .title_top(lights)
                .title_top(title_line)
        }
        ProfileTheme::Card => Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::new().fg(dim(CARD_BORDER, 0.35 * alpha)))
            .title_top(title_line),
    }
}
