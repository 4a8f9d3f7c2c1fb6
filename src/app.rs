use dioxus::prelude::*;
use guides_core::GuideList;

use crate::context::get_section_config;
use crate::pages::Guides;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - The Guides section
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Guides {},
}

/// Root application component.
///
/// Provides global styles, section configuration, the guide list, and routing.
#[component]
pub fn App() -> Element {
    let config = get_section_config();
    let guides: Signal<GuideList> = use_signal(|| config.initial_list());

    // Provide config and list to all child components
    use_context_provider(|| config);
    use_context_provider(|| guides);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
