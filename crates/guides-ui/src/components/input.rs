//! Input Field Components
//!
//! Labeled single-line input and multi-line textarea. Both mark themselves
//! `aria-invalid` when the owner flags them.

use dioxus::prelude::*;

use super::button::join_classes;

/// CSS class for an input in the given validity state
pub fn field_class(base: &str, invalid: bool) -> String {
    join_classes(&[base, if invalid { "input-invalid" } else { "" }])
}

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Element id, also used for the label's `for`
    pub id: String,
    /// Label text
    pub label: String,
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Marks the field as failing validation
    #[props(default = false)]
    pub invalid: bool,
}

/// Labeled text input
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Input {
///         id: "title".to_string(),
///         label: "Название гайда".to_string(),
///         value: form.read().draft().title.clone(),
///         oninput: move |s| form.write().set_field(GuideField::Title, s),
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let class = field_class("input-field", props.invalid);

    rsx! {
        div { class: "form-field",
            label { class: "input-label", r#for: "{props.id}", "{props.label}" }
            input {
                id: "{props.id}",
                class: "{class}",
                r#type: "text",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                "aria-invalid": if props.invalid { "true" } else { "false" },
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    /// Element id, also used for the label's `for`
    pub id: String,
    /// Label text
    pub label: String,
    /// Current textarea value
    pub value: String,
    /// Handler called when textarea changes
    pub oninput: EventHandler<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Number of visible rows
    #[props(default = 8)]
    pub rows: u32,
    /// Marks the field as failing validation
    #[props(default = false)]
    pub invalid: bool,
}

/// Labeled multi-line text input
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let class = field_class("input-field textarea", props.invalid);

    rsx! {
        div { class: "form-field",
            label { class: "input-label", r#for: "{props.id}", "{props.label}" }
            textarea {
                id: "{props.id}",
                class: "{class}",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                value: "{props.value}",
                "aria-invalid": if props.invalid { "true" } else { "false" },
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}
