//! Page assembly: the section stack, scrolling, and reveal orchestration.
//!
//! The portfolio is one tall page of sections. Each frame the page lays the
//! sections out for the current width, qualifies their visibility against the
//! scroll position, feeds the reveal machines, and renders whatever intersects
//! the viewport with that section's transition offset and fade applied.

use chrono::Local;
use myeongham_config::PortfolioConfig;
use myeongham_core::{ProfileTheme, RevealKind, SectionId};
use myeongham_effects::{
    BOTTOM_MARGIN_ROWS, Reveal, Typing, VISIBILITY_THRESHOLD, dim, level_to_color,
    visible_fraction,
};
use myeongham_fonts::build_banner;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::theme::{self, CHROME_ROWS};

/// Blank rows between sections.
const SECTION_GAP: u16 = 1;

/// Columns of padding on each side of the section stack.
const SIDE_PAD: u16 = 2;

/// Columns of padding between a section border and its text.
const TEXT_PAD: u16 = 2;

const TEXT_WHITE: Color = Color::Rgb(225, 225, 225);
const TEXT_GRAY: Color = Color::Rgb(140, 140, 140);
const TEXT_DARK: Color = Color::Rgb(90, 90, 90);
const STATUS_GREEN: Color = Color::Rgb(60, 220, 120);
const STATUS_YELLOW: Color = Color::Rgb(230, 200, 60);
const BAR_TRACK: Color = Color::Rgb(50, 50, 50);

/// Transition and stagger for each section, in page order.
fn reveal_plan(id: SectionId) -> (RevealKind, u32) {
    match id {
        SectionId::Hero => (RevealKind::SlideUp, 0),
        SectionId::About => (RevealKind::SlideUp, 1),
        SectionId::Skills => (RevealKind::SlideLeft, 2),
        SectionId::Projects => (RevealKind::SlideRight, 2),
        SectionId::Contact => (RevealKind::Fade, 3),
    }
}

#[derive(Debug)]
struct Section {
    id: SectionId,
    reveal: Reveal,
    /// Page row of the section's first chrome row, set during layout.
    top: u16,
    /// Total rows including chrome, set during layout.
    height: u16,
}

/// The scrollable portfolio page.
#[derive(Debug)]
pub struct Page {
    sections: Vec<Section>,
    scroll: u16,
    total_height: u16,
    /// Viewport height seen by the last render, for paging keys.
    view_height: u16,
    typing: Typing,
}

impl Page {
    /// Build the page for a loaded config; every section starts hidden.
    pub fn new(config: &PortfolioConfig) -> Self {
        let sections = SectionId::ALL
            .iter()
            .map(|&id| {
                let (kind, delay_units) = reveal_plan(id);
                Section {
                    id,
                    reveal: Reveal::new(kind, delay_units),
                    top: 0,
                    height: 0,
                }
            })
            .collect();

        Self {
            sections,
            scroll: 0,
            total_height: 0,
            view_height: 0,
            typing: Typing::with_speed(
                config.personal.tagline.clone(),
                config.tuning.typing_speed_ms,
            ),
        }
    }

    /// Scroll by a signed number of rows, clamped to the page.
    pub fn scroll_by(&mut self, rows: i32) {
        let max = self.max_scroll();
        let next = (self.scroll as i32 + rows).clamp(0, max as i32);
        self.scroll = next as u16;
    }

    /// Scroll by one viewport height in the given direction.
    pub fn scroll_page(&mut self, down: bool) {
        let step = self.view_height.max(1) as i32;
        self.scroll_by(if down { step } else { -step });
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll = self.max_scroll();
    }

    fn max_scroll(&self) -> u16 {
        self.total_height.saturating_sub(self.view_height)
    }

    /// Lay out, update reveals, and draw the page into `area`.
    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        now_ms: u64,
        config: &PortfolioConfig,
        profile_theme: ProfileTheme,
        accent: Color,
    ) {
        self.view_height = area.height;

        // Without a usable viewport nothing can ever qualify as visible, so
        // fail open rather than leave the page hidden forever.
        if area.height <= BOTTOM_MARGIN_ROWS {
            for section in &mut self.sections {
                section.reveal.force_reveal();
            }
        }

        let section_width = area.width.saturating_sub(SIDE_PAD * 2);
        let text_width = section_width.saturating_sub(2 + TEXT_PAD * 2) as usize;
        if section_width < 8 {
            return;
        }

        // Layout pass: content is built first so heights reflect the current
        // width, then tops are assigned cumulatively.
        let mut contents: Vec<Vec<Line<'static>>> = Vec::with_capacity(self.sections.len());
        let mut top = 0u16;
        for section in &mut self.sections {
            let alpha = section.reveal.alpha(now_ms);
            let lines = section_lines(
                section.id,
                config,
                accent,
                alpha,
                now_ms,
                &self.typing,
                text_width,
            );
            section.top = top;
            section.height = lines.len() as u16 + CHROME_ROWS;
            top = top + section.height + SECTION_GAP;
            contents.push(lines);
        }
        self.total_height = top.saturating_sub(SECTION_GAP);
        self.scroll = self.scroll.min(self.max_scroll());

        // Visibility pass: the one-shot qualification drives each machine.
        for section in &mut self.sections {
            let fraction = visible_fraction(
                section.top,
                section.height,
                self.scroll,
                area.height,
                BOTTOM_MARGIN_ROWS,
            );
            if fraction >= VISIBILITY_THRESHOLD {
                section.reveal.notify_visible(now_ms);
            }
            section.reveal.tick(now_ms);
        }

        // Draw pass.
        for (section, lines) in self.sections.iter().zip(contents) {
            let alpha = section.reveal.alpha(now_ms);
            let (dx, dy) = section.reveal.offset(now_ms);

            let screen_top = section.top as i32 - self.scroll as i32 + dy;
            let screen_bottom = screen_top + section.height as i32;
            if screen_bottom <= 0 || screen_top >= area.height as i32 {
                continue;
            }

            // Rows of the section hidden above the viewport edge.
            let clip_top = (-screen_top).max(0) as u16;
            let y = area.y + screen_top.max(0) as u16;
            let height = (screen_bottom.min(area.height as i32) - screen_top.max(0)) as u16;

            let x_min = area.x as i32;
            let x_max = (area.x + area.width - section_width) as i32;
            let x = (area.x as i32 + SIDE_PAD as i32 + dx).clamp(x_min, x_max) as u16;

            let rect = Rect::new(x, y, section_width, height);
            let block = theme::section_block(profile_theme, section.id.title(), accent, alpha);
            let inner = block.inner(rect);
            frame.render_widget(block, rect);

            if inner.width > TEXT_PAD * 2 && inner.height > 0 {
                let text_rect = Rect::new(
                    inner.x + TEXT_PAD,
                    inner.y,
                    inner.width - TEXT_PAD * 2,
                    inner.height,
                );
                // Account for the border row already consumed when the
                // section's top is clipped off screen.
                let text_scroll = clip_top.saturating_sub(1);
                frame.render_widget(
                    Paragraph::new(lines).scroll((text_scroll, 0)),
                    text_rect,
                );
            }
        }
    }
}

/// Build one section's content lines for the current width and reveal alpha.
fn section_lines(
    id: SectionId,
    config: &PortfolioConfig,
    accent: Color,
    alpha: f32,
    now_ms: u64,
    typing: &Typing,
    width: usize,
) -> Vec<Line<'static>> {
    match id {
        SectionId::Hero => hero_lines(config, accent, alpha, now_ms, typing, width),
        SectionId::About => about_lines(config, accent, alpha, width),
        SectionId::Skills => skills_lines(config, accent, alpha),
        SectionId::Projects => projects_lines(config, accent, alpha, width),
        SectionId::Contact => contact_lines(config, accent, alpha, width),
    }
}

fn hero_lines(
    config: &PortfolioConfig,
    accent: Color,
    alpha: f32,
    now_ms: u64,
    typing: &Typing,
    width: usize,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let banner_style = Style::new().fg(dim(accent, alpha));
    for row in build_banner(&config.personal.name) {
        lines.push(Line::styled(row, banner_style));
    }

    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled(
            config.personal.title.clone(),
            Style::new().fg(dim(TEXT_WHITE, alpha)),
        ),
        Span::styled(
            format!("  ·  {}", config.personal.location),
            Style::new().fg(dim(TEXT_GRAY, alpha)),
        ),
    ]));
    lines.push(Line::raw(""));

    // Typewriter tagline; once complete the full text stays put.
    let typed: &str = if config.features.typing {
        typing.visible(now_ms)
    } else {
        &config.personal.tagline
    };
    let body_style = Style::new().fg(dim(TEXT_WHITE, alpha));
    let mut wrapped = wrap(typed, width);
    if wrapped.is_empty() {
        wrapped.push(String::new());
    }
    let last = wrapped.len() - 1;
    for (i, row) in wrapped.into_iter().enumerate() {
        if i == last && config.features.typing && Typing::cursor_on(now_ms) {
            lines.push(Line::from(vec![
                Span::styled(row, body_style),
                Span::styled("█", Style::new().fg(dim(accent, alpha))),
            ]));
        } else {
            lines.push(Line::styled(row, body_style));
        }
    }

    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("● ", Style::new().fg(dim(STATUS_GREEN, alpha))),
        Span::styled("online   ", Style::new().fg(dim(TEXT_GRAY, alpha))),
        Span::styled(
            config.personal.email.clone(),
            Style::new().fg(dim(accent, alpha)),
        ),
    ]));

    lines
}

fn about_lines(
    config: &PortfolioConfig,
    accent: Color,
    alpha: f32,
    width: usize,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let body_style = Style::new().fg(dim(TEXT_WHITE, alpha));

    for (i, paragraph) in config.content.about.paragraphs.iter().enumerate() {
        if i > 0 {
            lines.push(Line::raw(""));
        }
        for row in wrap(paragraph, width) {
            lines.push(Line::styled(row, body_style));
        }
    }

    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("▸ ", Style::new().fg(dim(accent, alpha))),
        Span::styled(
            config.content.about.availability.clone(),
            Style::new().fg(dim(accent, alpha)),
        ),
    ]));

    lines
}

fn skills_lines(config: &PortfolioConfig, accent: Color, alpha: f32) -> Vec<Line<'static>> {
    const BAR_WIDTH: usize = 20;

    let mut lines = Vec::new();
    for skill in &config.skills {
        let filled = (skill.level.min(100) as usize * BAR_WIDTH) / 100;
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<16}", skill.name),
                Style::new().fg(dim(TEXT_WHITE, alpha)),
            ),
            Span::styled(
                "█".repeat(filled),
                Style::new().fg(dim(level_to_color(skill.level), alpha)),
            ),
            Span::styled(
                "░".repeat(BAR_WIDTH - filled),
                Style::new().fg(dim(BAR_TRACK, alpha)),
            ),
            Span::styled(
                format!(" {:>3}%", skill.level),
                Style::new().fg(dim(accent, alpha)),
            ),
            Span::styled(
                format!("  {}", skill.category),
                Style::new().fg(dim(TEXT_GRAY, alpha)),
            ),
        ]));
    }

    lines.push(Line::raw(""));
    lines.push(Line::styled(
        "Always learning, always growing",
        Style::new().fg(dim(TEXT_DARK, alpha)),
    ));

    lines
}

fn projects_lines(
    config: &PortfolioConfig,
    accent: Color,
    alpha: f32,
    width: usize,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (i, project) in config.projects.iter().enumerate() {
        if i > 0 {
            lines.push(Line::raw(""));
        }

        let marker = if project.featured { "★ " } else { "▸ " };
        let status_color = if project.status == "production" {
            STATUS_GREEN
        } else {
            STATUS_YELLOW
        };
        lines.push(Line::from(vec![
            Span::styled(marker.to_string(), Style::new().fg(dim(accent, alpha))),
            Span::styled(
                project.name.clone(),
                Style::new().fg(dim(TEXT_WHITE, alpha)),
            ),
            Span::styled(
                format!(" ({})", project.year),
                Style::new().fg(dim(TEXT_GRAY, alpha)),
            ),
            Span::styled(
                format!("  [{}]", project.status),
                Style::new().fg(dim(status_color, alpha)),
            ),
        ]));

        let body_style = Style::new().fg(dim(TEXT_GRAY, alpha));
        for row in wrap(&project.description, width.saturating_sub(2)) {
            lines.push(Line::styled(format!("  {row}"), body_style));
        }

        if !project.tags.is_empty() {
            lines.push(Line::styled(
                format!("  {}", project.tags.join(" · ")),
                Style::new().fg(dim(TEXT_DARK, alpha)),
            ));
        }
        if !project.links.github.is_empty() {
            lines.push(Line::styled(
                format!("  {}", project.links.github),
                Style::new().fg(dim(TEXT_DARK, alpha)),
            ));
        }
    }

    lines
}

fn contact_lines(
    config: &PortfolioConfig,
    accent: Color,
    alpha: f32,
    width: usize,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let body_style = Style::new().fg(dim(TEXT_WHITE, alpha));
    let label_style = Style::new().fg(dim(TEXT_GRAY, alpha));
    let value_style = Style::new().fg(dim(accent, alpha));

    for row in wrap(&config.content.contact.description, width) {
        lines.push(Line::styled(row, body_style));
    }
    lines.push(Line::raw(""));

    let entries = [
        ("email", config.personal.email.clone()),
        ("github", config.social.github.clone()),
        ("linkedin", config.social.linkedin.clone()),
        ("twitter", config.social.twitter.clone()),
    ];
    for (label, value) in entries {
        lines.push(Line::from(vec![
            Span::styled(format!("{label:<10}"), label_style),
            Span::styled(value, value_style),
        ]));
    }

    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("local time".to_string(), label_style),
        Span::styled(
            Local::now().format("  %H:%M:%S").to_string(),
            Style::new().fg(dim(TEXT_WHITE, alpha)),
        ),
    ]));
    lines.push(Line::raw(""));
    lines.push(Line::styled(
        config.content.contact.cta.clone(),
        Style::new().fg(dim(accent, alpha)),
    ));

    lines
}

/// Greedy word wrap; words longer than the width get a row of their own.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            rows.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        rows.push(current);
    }

    rows
}
