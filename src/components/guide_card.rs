//! Guide Card - one published guide in the grid.

use std::time::Duration;

use dioxus::prelude::*;
use guides_core::{stagger_delay, Guide, RevealOffset};
use guides_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, Icon,
    IconName,
};

/// Props for GuideCard component
#[derive(Props, Clone, PartialEq)]
pub struct GuideCardProps {
    pub guide: Guide,
    /// Position in the grid, drives the transition delay
    pub index: usize,
    /// Whether the section has been revealed
    pub visible: bool,
    /// Delay step between consecutive cards
    pub stagger: Duration,
}

/// Card showing author, date, title, description and an excerpt.
#[component]
pub fn GuideCard(props: GuideCardProps) -> Element {
    let guide = &props.guide;
    let class = RevealOffset::Down.class(props.visible);
    let delay = stagger_delay(props.index, props.stagger).as_millis();
    let date = guide.date_string();

    rsx! {
        Card {
            class: class.to_string(),
            style: format!("transition-delay: {delay}ms;"),

            CardHeader {
                div { class: "card-meta",
                    Icon { name: IconName::User, size: 14 }
                    span { "{guide.author}" }
                    span { "\u{2022}" }
                    span { "{date}" }
                }
                CardTitle { "{guide.title}" }
                CardDescription { "{guide.description}" }
            }
            CardContent {
                p { class: "card-excerpt", "{guide.content}" }
                Button {
                    variant: ButtonVariant::Link,
                    "Читать далее"
                    Icon { name: IconName::ArrowRight, size: 16 }
                }
            }
        }
    }
}
