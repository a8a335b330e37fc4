//! Typewriter effect for the hero tagline.

/// Milliseconds per typed character.
pub const TYPING_SPEED_MS: u64 = 50;

/// Cursor blink half-period in milliseconds.
const CURSOR_BLINK_MS: u64 = 500;

/// Reveals a string one character at a time as a pure function of elapsed
/// time since the effect started.
#[derive(Debug)]
pub struct Typing {
    text: String,
    speed_ms: u64,
}

impl Typing {
    /// Create a typewriter over `text` at the default speed.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_speed(text, TYPING_SPEED_MS)
    }

    /// Create a typewriter with an explicit per-character speed.
    pub fn with_speed(text: impl Into<String>, speed_ms: u64) -> Self {
        Self {
            text: text.into(),
            speed_ms: speed_ms.max(1),
        }
    }

    /// The prefix visible after `elapsed_ms` milliseconds.
    pub fn visible(&self, elapsed_ms: u64) -> &str {
        let chars = (elapsed_ms / self.speed_ms) as usize;
        match self.text.char_indices().nth(chars) {
            Some((idx, _)) => &self.text[..idx],
            None => &self.text,
        }
    }

    /// Whether the whole text is visible.
    pub fn is_complete(&self, elapsed_ms: u64) -> bool {
        self.visible(elapsed_ms).len() == self.text.len()
    }

    /// Whether the trailing cursor is in its lit blink phase.
    pub fn cursor_on(elapsed_ms: u64) -> bool {
        (elapsed_ms / CURSOR_BLINK_MS) % 2 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_grows_with_time() {
        let typing = Typing::with_speed("hello", 50);
        assert_eq!(typing.visible(0), "");
        assert_eq!(typing.visible(49), "");
        assert_eq!(typing.visible(50), "h");
        assert_eq!(typing.visible(120), "he");
        assert_eq!(typing.visible(250), "hello");
        assert_eq!(typing.visible(u64::MAX), "hello");
    }

    #[test]
    fn test_completion() {
        let typing = Typing::with_speed("abc", 100);
        assert!(!typing.is_complete(299));
        assert!(typing.is_complete(300));
    }

    #[test]
    fn test_multibyte_boundaries() {
        let typing = Typing::with_speed("héllo", 10);
        assert_eq!(typing.visible(10), "h");
        assert_eq!(typing.visible(20), "hé");
    }

    #[test]
    fn test_cursor_blinks() {
        assert!(Typing::cursor_on(0));
        assert!(!Typing::cursor_on(500));
        assert!(Typing::cursor_on(1_000));
    }
}
