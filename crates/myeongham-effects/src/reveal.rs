//! One-shot reveal transitions for sections scrolling into view.
//!
//! Each section owns a [`Reveal`]: it starts hidden, arms a delay timer the
//! first time the section qualifies as visible, plays its entrance transition
//! once, and then stays revealed for the rest of the instance's life. All
//! timing is caller-supplied milliseconds, so the machine never sleeps and is
//! fully deterministic under test.

use myeongham_core::RevealKind;

/// Milliseconds per delay unit.
pub const DELAY_UNIT_MS: u64 = 100;

/// Duration of the entrance transition in milliseconds.
pub const TRANSITION_MS: u64 = 700;

/// Fraction of a section's rows that must be on screen to qualify.
pub const VISIBILITY_THRESHOLD: f32 = 0.1;

/// Rows subtracted from the viewport's bottom edge when qualifying, so a
/// section barely peeking in from below does not count as visible.
pub const BOTTOM_MARGIN_ROWS: u16 = 2;

/// Rows of vertical travel for the slide-up transition.
const SLIDE_ROWS: f32 = 3.0;

/// Columns of horizontal travel for the slide-left/right transitions.
const SLIDE_COLS: f32 = 8.0;

/// Reveal lifecycle.
///
/// `Revealed` is absorbing: once reached, no input moves the machine again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Never been visible; content renders hidden.
    Hidden,
    /// Qualifying visibility seen; waiting out the configured delay.
    Pending { fire_at_ms: u64 },
    /// Transition playing.
    Animating { started_ms: u64 },
    /// Terminal state.
    Revealed,
}

/// One-shot reveal state machine for a single section.
#[derive(Debug)]
pub struct Reveal {
    kind: RevealKind,
    delay_units: u32,
    phase: Phase,
}

impl Reveal {
    /// Create a hidden reveal with the given transition and delay.
    pub fn new(kind: RevealKind, delay_units: u32) -> Self {
        Self {
            kind,
            delay_units,
            phase: Phase::Hidden,
        }
    }

    /// The transition variant this reveal plays.
    pub fn kind(&self) -> RevealKind {
        self.kind
    }

    /// Report a qualifying visibility event.
    ///
    /// Only the first report has any effect; the machine never re-arms, so
    /// repeated intersection events after the reveal are ignored.
    pub fn notify_visible(&mut self, now_ms: u64) {
        if self.phase == Phase::Hidden {
            self.phase = Phase::Pending {
                fire_at_ms: now_ms + self.delay_units as u64 * DELAY_UNIT_MS,
            };
        }
    }

    /// Advance the machine to the current time.
    pub fn tick(&mut self, now_ms: u64) {
        match self.phase {
            Phase::Pending { fire_at_ms } if now_ms >= fire_at_ms => {
                self.phase = Phase::Animating { started_ms: now_ms };
            }
            Phase::Animating { started_ms } if now_ms >= started_ms + TRANSITION_MS => {
                self.phase = Phase::Revealed;
            }
            _ => {}
        }
    }

    /// Jump straight to the terminal revealed state.
    ///
    /// Fail-open path: when no usable visibility input exists, content must
    /// still become visible rather than stay hidden forever.
    pub fn force_reveal(&mut self) {
        self.phase = Phase::Revealed;
    }

    /// Whether the transition has started (delay elapsed or forced).
    pub fn has_started(&self) -> bool {
        matches!(self.phase, Phase::Animating { .. } | Phase::Revealed)
    }

    /// Whether the machine has reached its terminal state.
    pub fn is_revealed(&self) -> bool {
        self.phase == Phase::Revealed
    }

    /// Eased transition progress in `[0, 1]` at the given time.
    pub fn progress(&self, now_ms: u64) -> f32 {
        match self.phase {
            Phase::Hidden | Phase::Pending { .. } => 0.0,
            Phase::Animating { started_ms } => {
                let elapsed = now_ms.saturating_sub(started_ms) as f32;
                ease_out_cubic((elapsed / TRANSITION_MS as f32).clamp(0.0, 1.0))
            }
            Phase::Revealed => 1.0,
        }
    }

    /// Remaining translation `(columns, rows)` applied to the content.
    ///
    /// Positive columns shift right, positive rows shift down; both shrink to
    /// zero as the transition completes. Fade never translates.
    pub fn offset(&self, now_ms: u64) -> (i32, i32) {
        let remaining = 1.0 - self.progress(now_ms);
        match self.kind {
            RevealKind::SlideUp => (0, (remaining * SLIDE_ROWS).round() as i32),
            RevealKind::SlideLeft => ((remaining * SLIDE_COLS).round() as i32, 0),
            RevealKind::SlideRight => (-(remaining * SLIDE_COLS).round() as i32, 0),
            RevealKind::Fade => (0, 0),
        }
    }

    /// Opacity in `[0, 1]` for color blending; every variant fades in.
    pub fn alpha(&self, now_ms: u64) -> f32 {
        self.progress(now_ms)
    }
}

/// Ease-out cubic: fast start, slow finish.
pub fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

/// Fraction of a section's rows inside the effective viewport.
///
/// The section occupies page rows `[top, top + height)`; the viewport shows
/// page rows `[scroll, scroll + view_height)` with `bottom_margin` rows
/// removed from its bottom edge. Returns 0.0 for an empty section.
pub fn visible_fraction(
    top: u16,
    height: u16,
    scroll: u16,
    view_height: u16,
    bottom_margin: u16,
) -> f32 {
    if height == 0 {
        return 0.0;
    }

    let view_end = scroll as i64 + view_height.saturating_sub(bottom_margin) as i64;
    let overlap_start = (top as i64).max(scroll as i64);
    let overlap_end = (top as i64 + height as i64).min(view_end);
    let overlap = (overlap_end - overlap_start).max(0);

    overlap as f32 / height as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_fires_only_once() {
        let mut reveal = Reveal::new(RevealKind::SlideUp, 2);
        reveal.notify_visible(1_000);
        assert_eq!(reveal.phase, Phase::Pending { fire_at_ms: 1_200 });

        // Later intersection events must not re-arm the timer.
        reveal.notify_visible(5_000);
        assert_eq!(reveal.phase, Phase::Pending { fire_at_ms: 1_200 });

        reveal.tick(1_200);
        reveal.tick(1_200 + TRANSITION_MS);
        assert!(reveal.is_revealed());

        reveal.notify_visible(10_000);
        reveal.tick(20_000);
        assert!(reveal.is_revealed());
        assert_eq!(reveal.progress(20_000), 1.0);
    }

    #[test]
    fn test_delay_is_honored() {
        let mut reveal = Reveal::new(RevealKind::SlideUp, 3);
        reveal.notify_visible(0);

        reveal.tick(299);
        assert!(!reveal.has_started());
        assert_eq!(reveal.progress(299), 0.0);

        reveal.tick(300);
        assert!(reveal.has_started());
    }

    #[test]
    fn test_zero_delay_starts_on_next_tick() {
        let mut reveal = Reveal::new(RevealKind::Fade, 0);
        reveal.notify_visible(500);
        reveal.tick(500);
        assert!(reveal.has_started());
        assert!(!reveal.is_revealed());

        reveal.tick(500 + TRANSITION_MS);
        assert!(reveal.is_revealed());
    }

    #[test]
    fn test_no_transition_without_visibility() {
        let mut reveal = Reveal::new(RevealKind::SlideLeft, 0);
        for now in (0..10_000).step_by(100) {
            reveal.tick(now);
        }
        assert!(!reveal.has_started());
        assert_eq!(reveal.progress(10_000), 0.0);
    }

    #[test]
    fn test_progress_is_monotonic_and_eased() {
        let mut reveal = Reveal::new(RevealKind::SlideUp, 0);
        reveal.notify_visible(0);
        reveal.tick(0);

        let mut last = -1.0;
        for now in (0..=TRANSITION_MS).step_by(50) {
            let p = reveal.progress(now);
            assert!(p >= last);
            last = p;
        }
        assert_eq!(reveal.progress(TRANSITION_MS), 1.0);

        // Ease-out: the first half covers more than half the distance.
        let mut mid = Reveal::new(RevealKind::SlideUp, 0);
        mid.notify_visible(0);
        mid.tick(0);
        assert!(mid.progress(TRANSITION_MS / 2) > 0.5);
    }

    #[test]
    fn test_offsets_per_kind() {
        for (kind, expect_hidden) in [
            (RevealKind::SlideUp, (0, 3)),
            (RevealKind::SlideLeft, (8, 0)),
            (RevealKind::SlideRight, (-8, 0)),
            (RevealKind::Fade, (0, 0)),
        ] {
            let reveal = Reveal::new(kind, 0);
            assert_eq!(reveal.offset(0), expect_hidden);

            let mut done = Reveal::new(kind, 0);
            done.force_reveal();
            assert_eq!(done.offset(0), (0, 0));
        }
    }

    #[test]
    fn test_force_reveal_is_terminal() {
        let mut reveal = Reveal::new(RevealKind::SlideRight, 5);
        reveal.force_reveal();
        assert!(reveal.is_revealed());
        assert_eq!(reveal.alpha(0), 1.0);

        reveal.notify_visible(100);
        reveal.tick(200);
        assert!(reveal.is_revealed());
    }

    #[test]
    fn test_visible_fraction_threshold() {
        // 10-row section fully below a 20-row viewport.
        assert_eq!(visible_fraction(30, 10, 0, 20, BOTTOM_MARGIN_ROWS), 0.0);

        // One row inside the effective viewport (bottom margin applied):
        // effective view end is row 18, section rows 17..27.
        let f = visible_fraction(17, 10, 0, 20, BOTTOM_MARGIN_ROWS);
        assert!((f - 0.1).abs() < f32::EPSILON);
        assert!(f >= VISIBILITY_THRESHOLD);

        // Barely peeking past the margin does not qualify.
        let peek = visible_fraction(17, 20, 0, 20, BOTTOM_MARGIN_ROWS);
        assert!(peek < VISIBILITY_THRESHOLD);

        // Fully visible.
        assert_eq!(visible_fraction(2, 10, 0, 20, BOTTOM_MARGIN_ROWS), 1.0);

        // Scrolled past: section above the viewport contributes nothing.
        assert_eq!(visible_fraction(0, 10, 30, 20, BOTTOM_MARGIN_ROWS), 0.0);
    }

    #[test]
    fn test_visible_fraction_empty_section() {
        assert_eq!(visible_fraction(5, 0, 0, 20, BOTTOM_MARGIN_ROWS), 0.0);
    }

    #[test]
    fn test_ease_out_cubic_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
    }
}
