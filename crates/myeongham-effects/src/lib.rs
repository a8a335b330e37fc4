//! Animation primitives for the myeongham portfolio.
//!
//! This crate provides the two animated building blocks of the page: the
//! one-shot reveal state machine that plays a section's entrance transition
//! the first time it scrolls into view, and the ambient binary-glyph particle
//! field drawn behind all content. Both are pure state machines driven by
//! caller-supplied elapsed time.

mod chars;
mod color;
mod particles;
mod reveal;
mod rng;
mod typing;

pub use chars::BINARY_GLYPHS;
pub use color::{blend_toward, dim, hsl_to_rgb, level_to_color};
pub use particles::{
    DEFAULT_AREA_PER_PARTICLE, FIELD_DIM, Particle, ParticleField, RESPAWN_MARGIN,
};
pub use reveal::{
    BOTTOM_MARGIN_ROWS, DELAY_UNIT_MS, Reveal, TRANSITION_MS, VISIBILITY_THRESHOLD,
    ease_out_cubic, visible_fraction,
};
pub use rng::Rng;
pub use typing::{TYPING_SPEED_MS, Typing};
