//! Section configuration

use std::time::Duration;

use crate::error::{GuideError, GuideResult};
use crate::list::GuideList;
use crate::reveal::{RevealMode, VisibilityTracker, DEFAULT_STAGGER, DEFAULT_THRESHOLD};

/// Tunables for one Guides section
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionConfig {
    /// Intersection ratio that reveals the section
    pub reveal_threshold: f64,
    /// Whether the entrance replays after scrolling away
    pub reveal_mode: RevealMode,
    /// Start with the built-in guides
    pub seed: bool,
    /// Per-card transition delay step
    pub stagger: Duration,
}

impl Default for SectionConfig {
    fn default() -> Self {
        Self {
            reveal_threshold: DEFAULT_THRESHOLD,
            reveal_mode: RevealMode::Latch,
            seed: true,
            stagger: DEFAULT_STAGGER,
        }
    }
}

impl SectionConfig {
    /// Check that the threshold is a finite ratio in `0.0..=1.0`
    pub fn validate(self) -> GuideResult<Self> {
        let t = self.reveal_threshold;
        if !t.is_finite() || !(0.0..=1.0).contains(&t) {
            return Err(GuideError::InvalidThreshold(t));
        }
        Ok(self)
    }

    /// Fresh tracker for this configuration
    pub fn tracker(&self) -> VisibilityTracker {
        VisibilityTracker::with_mode(self.reveal_threshold, self.reveal_mode)
    }

    /// Initial list for this configuration
    pub fn initial_list(&self) -> GuideList {
        if self.seed {
            GuideList::seeded()
        } else {
            GuideList::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SectionConfig::default();
        assert_eq!(config.reveal_threshold, 0.3);
        assert_eq!(config.reveal_mode, RevealMode::Latch);
        assert!(config.seed);
        assert_eq!(config.stagger, Duration::from_millis(100));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_out_of_range_threshold() {
        for bad in [-0.1, 1.01, f64::NAN, f64::INFINITY] {
            let config = SectionConfig {
                reveal_threshold: bad,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(GuideError::InvalidThreshold(_))
            ));
        }
    }

    #[test]
    fn test_bounds_are_valid() {
        for ok in [0.0, 1.0] {
            let config = SectionConfig {
                reveal_threshold: ok,
                ..Default::default()
            };
            assert!(config.validate().is_ok());
        }
    }

    #[test]
    fn test_initial_list_respects_seed() {
        assert_eq!(SectionConfig::default().initial_list().len(), 3);
        let unseeded = SectionConfig {
            seed: false,
            ..Default::default()
        };
        assert!(unseeded.initial_list().is_empty());
    }

    #[test]
    fn test_tracker_uses_config() {
        let config = SectionConfig {
            reveal_threshold: 0.5,
            reveal_mode: RevealMode::Toggle,
            ..Default::default()
        };
        let tracker = config.tracker();
        assert_eq!(tracker.threshold(), 0.5);
        assert_eq!(tracker.mode(), RevealMode::Toggle);
    }
}
