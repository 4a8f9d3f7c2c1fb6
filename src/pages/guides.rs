//! Guides page - hosts the Guides section.

use dioxus::prelude::*;

use crate::components::GuidesSection;

/// Guides page component.
#[component]
pub fn Guides() -> Element {
    rsx! {
        main { class: "guides-page",
            GuidesSection {}
        }
    }
}
