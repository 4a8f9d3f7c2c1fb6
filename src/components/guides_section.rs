//! Guides Section - header, creation dialog and the guide grid.
//!
//! The header and cards slide in once the section crosses the configured
//! share of the viewport.

use dioxus::prelude::*;
use guides_core::{DraftForm, GuideError, RevealOffset};
use guides_ui::{Button, ButtonSize, Icon, IconName};

use super::{use_reveal, GuideCard, GuideCreator};
use crate::context::{use_guides, use_section_config};

/// Element id the reveal observer attaches to
const SECTION_ID: &str = "guides";

/// Guides section component.
#[component]
pub fn GuidesSection() -> Element {
    let config = use_section_config();
    let mut guides = use_guides();

    // Local UI state
    let mut form: Signal<DraftForm> = use_signal(DraftForm::new);
    let tracker = use_reveal(SECTION_ID, config);

    let on_publish = move |_: ()| {
        let result = form.write().submit(&mut guides.write());
        match result {
            Ok(guide) => {
                tracing::info!(id = %guide.id, "Guide published");
            }
            Err(GuideError::MissingFields(_)) => {
                // Fields are flagged in the form; nothing else to do
            }
            Err(e) => {
                tracing::error!("Failed to publish guide: {}", e);
            }
        }
    };

    let visible = tracker.read().is_visible();
    let header_class = RevealOffset::Up.class(visible);
    let list = guides.read();

    rsx! {
        section {
            id: SECTION_ID,
            class: "guides-section",

            div { class: "guides-inner",
                div { class: "guides-header {header_class}",
                    div {
                        h2 { class: "guides-title", "Гайды" }
                        p { class: "guides-subtitle", "/ Полезные советы и стратегии" }
                    }

                    Button {
                        size: ButtonSize::Large,
                        onclick: move |_| form.write().open(),
                        Icon { name: IconName::Plus, size: 20 }
                        "Создать гайд"
                    }
                }

                GuideCreator { form, on_publish }

                if list.is_empty() {
                    p { class: "guides-empty", "Пока нет ни одного гайда" }
                }

                div { class: "guides-grid",
                    for (index, guide) in list.iter().enumerate() {
                        GuideCard {
                            key: "{guide.id}",
                            guide: guide.clone(),
                            index,
                            visible,
                            stagger: config.stagger,
                        }
                    }
                }
            }
        }
    }
}
