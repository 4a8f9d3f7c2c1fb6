//! Guide Creator - modal form for publishing a new guide
//!
//! Reads and edits the section's [`DraftForm`]; publishing is delegated to
//! the section so the list stays owned there.

use dioxus::prelude::*;
use guides_core::{DraftForm, GuideField};
use guides_ui::{Button, ButtonVariant, Dialog, Input, TextArea};

/// Props for GuideCreator component
#[derive(Props, Clone, PartialEq)]
pub struct GuideCreatorProps {
    /// Draft and dialog state
    pub form: Signal<DraftForm>,
    /// Handler for the publish button
    pub on_publish: EventHandler<()>,
}

/// Guide Creator Component
///
/// Four fields, all required:
/// - Title
/// - Description (one line)
/// - Content (multi-line)
/// - Author
///
/// Esc or a click outside the panel dismisses without clearing the draft.
#[component]
pub fn GuideCreator(props: GuideCreatorProps) -> Element {
    let mut form = props.form;
    let on_publish = props.on_publish;
    let open = form.read().is_open();

    rsx! {
        Dialog {
            open,
            title: "Создать новый гайд".to_string(),
            description: "Поделитесь своими знаниями и опытом с другими игроками".to_string(),
            on_dismiss: move |_| form.write().dismiss(),
            footer: rsx! {
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| form.write().cancel(),
                    "Отмена"
                }
                Button {
                    onclick: move |_| on_publish.call(()),
                    "Опубликовать"
                }
            },

            for field in GuideField::ALL {
                if field.is_multiline() {
                    TextArea {
                        id: field.as_str().to_string(),
                        label: field.label().to_string(),
                        value: form.read().draft().get(field).to_string(),
                        placeholder: field.placeholder().to_string(),
                        invalid: form.read().is_missing(field),
                        oninput: move |s: String| form.write().set_field(field, s),
                    }
                } else {
                    Input {
                        id: field.as_str().to_string(),
                        label: field.label().to_string(),
                        value: form.read().draft().get(field).to_string(),
                        placeholder: field.placeholder().to_string(),
                        invalid: form.read().is_missing(field),
                        oninput: move |s: String| form.write().set_field(field, s),
                    }
                }
            }
        }
    }
}
