//! Modal Dialog
//!
//! Overlay + panel. The host owns the open flag; the dialog only reports
//! dismissal gestures (overlay click, Escape, close button).

use dioxus::prelude::*;

use super::{IconButton, IconName};

/// Keys that close the dialog while it has focus
pub fn is_dismiss_key(key: &Key) -> bool {
    matches!(key, Key::Escape)
}

/// Properties for the Dialog component
#[derive(Clone, PartialEq, Props)]
pub struct DialogProps {
    /// Whether the dialog is rendered
    pub open: bool,
    /// Heading text
    pub title: String,
    /// Optional line under the heading
    #[props(default)]
    pub description: Option<String>,
    /// Called on any dismissal gesture
    pub on_dismiss: EventHandler<()>,
    /// Dialog body
    pub children: Element,
    /// Action row rendered under the body
    pub footer: Element,
}

/// Modal dialog with header, body and footer
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Dialog {
///         open: form.read().is_open(),
///         title: "Создать новый гайд".to_string(),
///         on_dismiss: move |_| form.write().dismiss(),
///         footer: rsx! { Button { "Опубликовать" } },
///         // fields...
///     }
/// }
/// ```
#[component]
pub fn Dialog(props: DialogProps) -> Element {
    if !props.open {
        return rsx! {};
    }

    let on_dismiss = props.on_dismiss;
    let close_glyph = IconName::Close.glyph();

    rsx! {
        div {
            class: "dialog-overlay",
            onclick: move |_| on_dismiss.call(()),

            div {
                class: "dialog",
                role: "dialog",
                "aria-modal": "true",
                tabindex: "-1",
                // Take focus on open so Escape works before any field is clicked
                onmounted: move |evt: MountedEvent| async move {
                    if let Err(e) = evt.set_focus(true).await {
                        tracing::debug!("Dialog focus failed: {:?}", e);
                    }
                },
                onclick: move |e| e.stop_propagation(),
                onkeydown: move |evt: KeyboardEvent| {
                    if is_dismiss_key(&evt.key()) {
                        on_dismiss.call(());
                    }
                },

                div { class: "dialog-header",
                    h2 { class: "dialog-title", "{props.title}" }
                    if let Some(description) = &props.description {
                        p { class: "dialog-description", "{description}" }
                    }
                    IconButton {
                        onclick: move |_| on_dismiss.call(()),
                        aria_label: "Close".to_string(),
                        class: "dialog-close".to_string(),
                        "{close_glyph}"
                    }
                }

                div { class: "dialog-body", {props.children} }

                div { class: "dialog-footer", {props.footer} }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_dismisses() {
        assert!(is_dismiss_key(&Key::Escape));
    }

    #[test]
    fn other_keys_do_not_dismiss() {
        assert!(!is_dismiss_key(&Key::Enter));
        assert!(!is_dismiss_key(&Key::Tab));
        assert!(!is_dismiss_key(&Key::Character("q".to_string())));
    }
}
