//! Reveal-on-scroll state
//!
//! Tracks whether the section has scrolled far enough into view to play
//! its entrance transition.

use std::time::Duration;

use serde::Deserialize;

/// Default share of the section that must intersect the viewport
pub const DEFAULT_THRESHOLD: f64 = 0.3;

/// Default per-card transition delay step
pub const DEFAULT_STAGGER: Duration = Duration::from_millis(100);

/// How visibility reacts once the section leaves the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealMode {
    /// One-way: once visible, stays visible
    #[default]
    Latch,
    /// Hidden <-> Visible, replaying the entrance on every return
    Toggle,
}

/// Visibility flag fed by intersection-ratio observations
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityTracker {
    threshold: f64,
    mode: RevealMode,
    visible: bool,
}

impl VisibilityTracker {
    /// Latching tracker with the given threshold
    pub fn new(threshold: f64) -> Self {
        Self::with_mode(threshold, RevealMode::Latch)
    }

    pub fn with_mode(threshold: f64, mode: RevealMode) -> Self {
        Self {
            threshold,
            mode,
            visible: false,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn mode(&self) -> RevealMode {
        self.mode
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feed one observation and return the resulting visibility.
    ///
    /// NaN ratios are ignored.
    pub fn observe(&mut self, ratio: f64) -> bool {
        if ratio.is_nan() {
            return self.visible;
        }

        let crossed = ratio >= self.threshold;
        match self.mode {
            RevealMode::Latch => {
                if crossed && !self.visible {
                    tracing::debug!(ratio, "Section revealed");
                    self.visible = true;
                }
            }
            RevealMode::Toggle => {
                if crossed != self.visible {
                    tracing::debug!(ratio, visible = crossed, "Section visibility changed");
                }
                self.visible = crossed;
            }
        }
        self.visible
    }
}

impl Default for VisibilityTracker {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

/// Position of the section relative to the viewport, in CSS pixels
///
/// Mirrors what the page reports from `getBoundingClientRect()` plus the
/// window's inner height.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SectionGeometry {
    /// Distance from the viewport top to the section top (negative once scrolled past)
    pub top: f64,
    /// Rendered height of the section
    pub height: f64,
    /// Inner height of the viewport
    pub viewport: f64,
}

impl SectionGeometry {
    /// Share of the section's height inside the viewport, in `0.0..=1.0`.
    ///
    /// A section with no height never counts as visible.
    pub fn visible_ratio(&self) -> f64 {
        let degenerate = |v: f64| v.is_nan() || v <= 0.0;
        if degenerate(self.height) || degenerate(self.viewport) {
            return 0.0;
        }
        let bottom = self.top + self.height;
        let shown = bottom.min(self.viewport) - self.top.max(0.0);
        (shown / self.height).clamp(0.0, 1.0)
    }
}

/// Direction an element slides in from while hidden
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOffset {
    /// Starts above its resting place (section header)
    Up,
    /// Starts below its resting place (cards)
    Down,
}

impl RevealOffset {
    /// CSS class for the current visibility
    pub fn class(&self, visible: bool) -> &'static str {
        match (visible, self) {
            (true, _) => "reveal reveal--shown",
            (false, RevealOffset::Up) => "reveal reveal--from-above",
            (false, RevealOffset::Down) => "reveal reveal--from-below",
        }
    }
}

/// Transition delay for the card at `index`
pub fn stagger_delay(index: usize, step: Duration) -> Duration {
    step.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))
}
