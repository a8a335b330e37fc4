//! Ambient binary-glyph particle field (stateful).
//!
//! A sparse population of short binary tokens drifts slowly down the page
//! behind all content. The population is sized from the viewport area,
//! recycled at the edges instead of reallocated, and fully regenerated when
//! the terminal is resized.

use ratatui::{
    Frame,
    style::{Color, Style},
};

use crate::chars::BINARY_GLYPHS;
use crate::color::dim;
use crate::rng::Rng;

/// Default cells of viewport area per particle.
pub const DEFAULT_AREA_PER_PARTICLE: f32 = 48.0;

/// Rows above the top edge where recycled particles re-enter.
pub const RESPAWN_MARGIN: f32 = 20.0;

/// Overall dimming applied to the whole field, on top of per-particle opacity.
pub const FIELD_DIM: f32 = 0.4;

/// Nominal frame length used to scale velocities by real elapsed time.
const FRAME_MS: f32 = 16.7;

/// A single drifting glyph.
#[derive(Debug, Clone)]
pub struct Particle {
    /// Horizontal position in cells (continuous).
    pub x: f32,
    /// Vertical position in rows (continuous); negative while re-entering.
    pub y: f32,
    /// Horizontal drift per nominal frame.
    pub vx: f32,
    /// Fall speed per nominal frame.
    pub vy: f32,
    /// Binary token drawn at the position.
    pub glyph: &'static str,
    /// Per-particle opacity, fixed at creation.
    pub opacity: f32,
}

/// Full-viewport decorative particle field.
#[derive(Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f32,
    height: f32,
    area_per_particle: f32,
    rng: Rng,
}

impl ParticleField {
    /// Create a field sized for the given viewport with the default density.
    pub fn new(width: u16, height: u16) -> Self {
        Self::with_area_per_particle(width, height, DEFAULT_AREA_PER_PARTICLE)
    }

    /// Create a field with an explicit area-per-particle density.
    pub fn with_area_per_particle(width: u16, height: u16, area_per_particle: f32) -> Self {
        let mut field = Self {
            particles: Vec::new(),
            width: width as f32,
            height: height as f32,
            area_per_particle,
            rng: Rng::from_entropy(),
        };
        field.populate();
        field
    }

    /// Regenerate the whole population for new viewport dimensions.
    ///
    /// No particle survives a resize; count and positions are recomputed from
    /// scratch.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width as f32;
        self.height = height as f32;
        self.populate();
    }

    fn populate(&mut self) {
        let count = (self.width * self.height / self.area_per_particle) as usize;
        let (width, height) = (self.width, self.height);
        let rng = &mut self.rng;
        self.particles = (0..count)
            .map(|_| Particle {
                x: rng.range_f32(0.0, width),
                y: rng.range_f32(0.0, height),
                vx: (rng.next_f32() - 0.5) * 0.5,
                vy: rng.next_f32() * 0.5 + 0.1,
                glyph: *rng.pick(BINARY_GLYPHS),
                opacity: rng.next_f32() * 0.3 + 0.1,
            })
            .collect();
    }

    /// Advance every particle by the elapsed time and recycle edge leavers.
    ///
    /// After this returns, every particle satisfies
    /// `y in [-RESPAWN_MARGIN, height]` and `x in [0, width]`.
    pub fn tick(&mut self, delta_ms: u64) {
        let steps = delta_ms as f32 / FRAME_MS;

        for p in &mut self.particles {
            p.x += p.vx * steps;
            p.y += p.vy * steps;

            // Fell past the bottom: re-enter from above at a random column.
            if p.y > self.height {
                p.y = -RESPAWN_MARGIN;
                p.x = self.rng.range_f32(0.0, self.width);
            }
            // Drifted off the side: new random column, same row.
            if p.x < 0.0 || p.x > self.width {
                p.x = self.rng.range_f32(0.0, self.width);
            }
        }
    }

    /// Number of live particles.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether the field is empty (degenerate viewport).
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// The current population, for rendering and inspection.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Draw the field behind the page content.
    ///
    /// Each glyph is drawn dimmed by its own opacity times [`FIELD_DIM`].
    /// Particles above the top edge or past the last row are skipped, so a
    /// degenerate area renders nothing rather than failing.
    pub fn render(&self, frame: &mut Frame, accent: Color) {
        let area = frame.area();
        let buf = frame.buffer_mut();

        for p in &self.particles {
            if p.y < 0.0 {
                continue;
            }
            let col = p.x as u16;
            let row = p.y as u16;
            if row >= area.height || col >= area.width {
                continue;
            }

            let style = Style::new().fg(dim(accent, p.opacity * FIELD_DIM));
            let max_width = (area.width - col) as usize;
            buf.set_stringn(area.x + col, area.y + row, p.glyph, max_width, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_population_scales_with_area() {
        // The documented density contract at the original pixel scale.
        let field = ParticleField::with_area_per_particle(1500, 1000, 15_000.0);
        assert_eq!(field.len(), 100);
    }

    #[test]
    fn test_resize_regenerates_population() {
        let mut field = ParticleField::with_area_per_particle(1500, 1000, 15_000.0);
        assert_eq!(field.len(), 100);

        field.resize(300, 200);
        assert_eq!(field.len(), 4);
        for p in field.particles() {
            assert!((0.0..=300.0).contains(&p.x));
            assert!((0.0..=200.0).contains(&p.y));
        }
    }

    #[test]
    fn test_degenerate_viewport_is_empty() {
        let field = ParticleField::new(0, 0);
        assert!(field.is_empty());
    }

    #[test]
    fn test_creation_attribute_ranges() {
        let field = ParticleField::with_area_per_particle(200, 100, 50.0);
        for p in field.particles() {
            assert!((-0.25..=0.25).contains(&p.vx));
            assert!((0.1..=0.6).contains(&p.vy));
            assert!((0.1..=0.4).contains(&p.opacity));
            assert!(BINARY_GLYPHS.contains(&p.glyph));
        }
    }

    #[test]
    fn test_bounds_invariant_across_ticks() {
        let mut field = ParticleField::with_area_per_particle(120, 40, 48.0);
        for _ in 0..2_000 {
            field.tick(33);
            for p in field.particles() {
                assert!(p.y >= -RESPAWN_MARGIN && p.y <= 40.0, "y out of bounds: {}", p.y);
                assert!(p.x >= 0.0 && p.x <= 120.0, "x out of bounds: {}", p.x);
            }
        }
    }

    #[test]
    fn test_bottom_leavers_reenter_from_top() {
        let mut field = ParticleField::with_area_per_particle(100, 10, 100.0);
        assert!(!field.is_empty());

        // A large step pushes everything past the bottom exactly once.
        field.tick(60_000);
        for p in field.particles() {
            assert!(p.y <= 10.0);
        }
    }

    #[test]
    fn test_paused_field_does_not_move() {
        let mut field = ParticleField::with_area_per_particle(100, 50, 50.0);
        let before: Vec<(f32, f32)> = field.particles().iter().map(|p| (p.x, p.y)).collect();

        // No tick between observations: positions must be identical.
        let after: Vec<(f32, f32)> = field.particles().iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(before, after);

        field.tick(0);
        let zero_delta: Vec<(f32, f32)> = field.particles().iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(before, zero_delta);
    }
}
