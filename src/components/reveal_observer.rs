//! Reveal observer - feeds the section's visibility tracker from the page.
//!
//! The webview registers an `IntersectionObserver` on the section with the
//! configured threshold, and reports the section's geometry on every
//! crossing and on window resize. Ratios are computed in core.

use dioxus::prelude::*;
use guides_core::{SectionConfig, SectionGeometry, VisibilityTracker};

/// Build the page script that observes `element_id`.
///
/// Thresholds `0`, `threshold` and `1` are all registered so entering,
/// crossing and fully showing each produce a report.
pub fn observer_script(element_id: &str, threshold: f64) -> String {
    format!(
        r#"
const el = document.getElementById("{element_id}");
if (el) {{
  const report = () => {{
    const rect = el.getBoundingClientRect();
    dioxus.send({{ top: rect.top, height: rect.height, viewport: window.innerHeight }});
  }};
  new IntersectionObserver(report, {{ threshold: [0, {threshold}, 1] }}).observe(el);
  window.addEventListener("resize", report);
  report();
}}
"#
    )
}

/// Hook returning a tracker signal kept current from the page.
///
/// The signal is only written when visibility actually changes.
pub fn use_reveal(element_id: &'static str, config: SectionConfig) -> Signal<VisibilityTracker> {
    let mut tracker = use_signal(|| config.tracker());

    use_effect(move || {
        spawn(async move {
            let script = observer_script(element_id, config.reveal_threshold);
            let mut observer = document::eval(&script);
            loop {
                match observer.recv::<SectionGeometry>().await {
                    Ok(geometry) => {
                        let mut next = *tracker.peek();
                        let was_visible = next.is_visible();
                        if next.observe(geometry.visible_ratio()) != was_visible {
                            tracker.set(next);
                        }
                    }
                    Err(e) => {
                        tracing::debug!("Reveal observer closed: {:?}", e);
                        break;
                    }
                }
            }
        });
    });

    tracker
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_targets_element_and_threshold() {
        let script = observer_script("guides", 0.3);
        assert!(script.contains(r#"document.getElementById("guides")"#));
        assert!(script.contains("threshold: [0, 0.3, 1]"));
        assert!(script.contains("dioxus.send"));
    }

    #[test]
    fn script_uses_configured_threshold() {
        let script = observer_script("guides", 0.75);
        assert!(script.contains("threshold: [0, 0.75, 1]"));
        assert!(!script.contains("0.3"));
    }

    #[test]
    fn script_reports_fields_geometry_expects() {
        let script = observer_script("guides", 0.3);
        for field in ["top:", "height:", "viewport:"] {
            assert!(script.contains(field), "missing {}", field);
        }
    }
}
