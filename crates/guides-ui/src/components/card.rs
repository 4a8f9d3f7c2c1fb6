//! Card Components
//!
//! Container with header, title, description and body slots.

use dioxus::prelude::*;

use super::button::join_classes;

#[derive(Clone, PartialEq, Props)]
pub struct CardProps {
    pub children: Element,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
    /// Optional inline style (transition delays and the like)
    #[props(default)]
    pub style: Option<String>,
}

/// Bordered content card
#[component]
pub fn Card(props: CardProps) -> Element {
    let class = join_classes(&["card", props.class.as_deref().unwrap_or("")]);
    let style = props.style.clone().unwrap_or_default();

    rsx! {
        article { class: "{class}", style: "{style}", {props.children} }
    }
}

#[component]
pub fn CardHeader(children: Element) -> Element {
    rsx! {
        header { class: "card-header", {children} }
    }
}

#[component]
pub fn CardTitle(children: Element) -> Element {
    rsx! {
        h3 { class: "card-title", {children} }
    }
}

#[component]
pub fn CardDescription(children: Element) -> Element {
    rsx! {
        p { class: "card-description", {children} }
    }
}

#[component]
pub fn CardContent(children: Element) -> Element {
    rsx! {
        div { class: "card-content", {children} }
    }
}
