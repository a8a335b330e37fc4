use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use myeongham_config::PortfolioConfig;
use myeongham_core::{ColorTheme, ProfileTheme};
use myeongham_effects::ParticleField;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    style::Stylize,
    text::Line,
};

mod page;
mod theme;
mod tools;
mod visitor;

use page::Page;
use tools::ToolsPage;
use visitor::{LogStatus, VisitorLogger};

/// Frame pacing for the animation loop (~30 fps).
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = PortfolioConfig::load()?;
    let terminal = ratatui::init();
    let result = App::new(config).run(terminal);
    ratatui::restore();
    result
}

/// Which top-level view is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum View {
    #[default]
    Portfolio,
    Tools,
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Animation clock origin.
    started: Instant,
    /// Elapsed milliseconds at the previous frame.
    last_frame_ms: u64,
    config: PortfolioConfig,
    profile_theme: ProfileTheme,
    color_theme: ColorTheme,
    view: View,
    page: Page,
    tools: ToolsPage,
    /// Whether the ambient particle field is drawn and ticked.
    particles_on: bool,
    particles: ParticleField,
    /// Viewport dimensions the field was built for.
    field_size: (u16, u16),
    /// Handle to the fire-and-forget visit logger, if enabled.
    visitor: Option<VisitorLogger>,
}

impl App {
    /// Construct the app for a loaded portfolio config.
    pub fn new(config: PortfolioConfig) -> Self {
        let page = Page::new(&config);
        let particles = ParticleField::with_area_per_particle(0, 0, config.tuning.area_per_particle);
        let visitor = config.features.visitor_log.then(VisitorLogger::spawn);
        let particles_on = config.features.particles;

        Self {
            running: false,
            started: Instant::now(),
            last_frame_ms: 0,
            config,
            profile_theme: ProfileTheme::default(),
            color_theme: ColorTheme::default(),
            view: View::default(),
            page,
            tools: ToolsPage::new(),
            particles_on,
            particles,
            field_size: (0, 0),
            visitor,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let now_ms = self.started.elapsed().as_millis() as u64;
        let delta_ms = now_ms.saturating_sub(self.last_frame_ms);
        self.last_frame_ms = now_ms;

        let area = frame.area();
        let accent = self.color_theme.color();

        // Ambient field behind everything, full viewport. A resize throws the
        // whole population away and rebuilds it for the new dimensions.
        if self.particles_on {
            let size = (area.width, area.height);
            if size != self.field_size {
                self.particles.resize(size.0, size.1);
                self.field_size = size;
            }
            self.particles.tick(delta_ms);
            self.particles.render(frame, accent);
        }

        let chunks = Layout::vertical([
            Constraint::Fill(1),   // Page content
            Constraint::Length(1), // Help text
        ])
        .split(area);

        match self.view {
            View::Portfolio => self.page.render(
                frame,
                chunks[0],
                now_ms,
                &self.config,
                self.profile_theme,
                accent,
            ),
            View::Tools => self.tools.render(frame, chunks[0], self.profile_theme, accent),
        }

        frame.render_widget(self.help_line(accent), chunks[1]);
    }

    /// Build the bottom help line for the active view.
    fn help_line(&self, accent: ratatui::style::Color) -> Line<'static> {
        let mut spans = match self.view {
            View::Portfolio => vec![
                "q".bold().fg(accent),
                " quit  ".dark_gray(),
                "j/k".bold().fg(accent),
                " scroll  ".dark_gray(),
                "t".bold().fg(accent),
                " theme  ".dark_gray(),
                "c".bold().fg(accent),
                " color  ".dark_gray(),
                "p".bold().fg(accent),
                " particles  ".dark_gray(),
                "x".bold().fg(accent),
                " tools".dark_gray(),
            ],
            View::Tools => vec![
                "Esc".bold().fg(accent),
                " back  ".dark_gray(),
                "l/u/n/s".bold().fg(accent),
                " classes  ".dark_gray(),
                "r".bold().fg(accent),
                " password  ".dark_gray(),
                "0-9".bold().fg(accent),
                " gigabytes".dark_gray(),
            ],
        };

        if let Some(logger) = &self.visitor {
            let note = match logger.status() {
                LogStatus::Pending => "",
                LogStatus::Logged => "  · visit logged",
                LogStatus::Failed => "  · visit log failed",
            };
            if !note.is_empty() {
                spans.push(note.to_string().dark_gray());
            }
        }

        Line::from(spans).centered()
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Uses polling with a frame-length timeout to keep animations moving.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(FRAME_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(_) => {}
                // The next render picks up the new dimensions and regenerates
                // the particle population.
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        if let (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) =
            (key.modifiers, key.code)
        {
            self.quit();
            return;
        }

        match self.view {
            View::Portfolio => self.on_portfolio_key(key),
            View::Tools => self.on_tools_key(key),
        }
    }

    fn on_portfolio_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.quit(),
            KeyCode::Char('j') | KeyCode::Down => self.page.scroll_by(1),
            KeyCode::Char('k') | KeyCode::Up => self.page.scroll_by(-1),
            KeyCode::PageDown => self.page.scroll_page(true),
            KeyCode::PageUp => self.page.scroll_page(false),
            KeyCode::Char('g') | KeyCode::Home => self.page.scroll_to_top(),
            KeyCode::Char('G') | KeyCode::End => self.page.scroll_to_bottom(),
            KeyCode::Char('t') => self.profile_theme = self.profile_theme.toggle(),
            KeyCode::Char('c') => self.color_theme = self.color_theme.next(),
            KeyCode::Char('p') => self.particles_on = !self.particles_on,
            KeyCode::Char('x') => {
                if self.config.features.tools {
                    self.view = View::Tools;
                }
            }
            _ => {}
        }
    }

    fn on_tools_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('x') => self.view = View::Portfolio,
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char('l') => self.tools.toggle_class(0),
            KeyCode::Char('u') => self.tools.toggle_class(1),
            KeyCode::Char('n') => self.tools.toggle_class(2),
            KeyCode::Char('s') => self.tools.toggle_class(3),
            KeyCode::Char('r') => self.tools.regenerate(),
            KeyCode::Backspace => self.tools.on_backspace(),
            KeyCode::Char(ch) if ch.is_ascii_digit() || ch == '.' => self.tools.on_char(ch),
            _ => {}
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
