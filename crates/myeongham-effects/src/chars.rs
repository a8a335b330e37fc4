//! Character constants for the ambient animations.

/// Binary-noise tokens drawn by the particle field.
pub const BINARY_GLYPHS: &[&str] = &["0", "1", "01", "10", "11", "00", "1010", "0101"];
