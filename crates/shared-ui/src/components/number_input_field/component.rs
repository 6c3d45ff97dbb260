use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCircleExclamation, FaCircleInfo};
use dioxus_free_icons::Icon;
use shared_types::NumericConstraints;

use crate::components::number_input::{InputSize, NumberInput};

/// Labelled number input with an optional info tip, hint and error line.
///
/// When `error` is set the hint is hidden, the input is marked invalid and
/// the message is announced with `role="alert"`.
#[component]
pub fn NumberInputField(
    id: String,
    label: String,
    #[props(default)] value: Option<f64>,
    #[props(default)] on_change: EventHandler<Option<f64>>,
    #[props(default)] constraints: NumericConstraints,
    #[props(default)] error: Option<String>,
    #[props(default)] hint: Option<String>,
    #[props(default)] info_tooltip: Option<String>,
    #[props(default = false)] required: bool,
    #[props(default)] size: InputSize,
    #[props(default = false)] disabled: bool,
    #[props(default)] placeholder: String,
) -> Element {
    let error = error.filter(|e| !e.is_empty());
    let hint = hint.filter(|h| !h.is_empty());
    let has_error = error.is_some();

    let error_id = format!("{id}-error");
    let hint_id = format!("{id}-hint");
    let described_by = if has_error {
        Some(error_id.clone())
    } else if hint.is_some() {
        Some(hint_id.clone())
    } else {
        None
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "number-field",
            div { class: "number-field-header",
                label { class: "number-field-label", r#for: "{id}",
                    "{label}"
                    if required {
                        span { class: "number-field-required", aria_label: "required", "*" }
                    }
                }
                if let Some(tip) = info_tooltip {
                    span { class: "number-field-info", title: "{tip}",
                        Icon::<FaCircleInfo> { icon: FaCircleInfo, width: 14, height: 14 }
                    }
                }
            }
            NumberInput {
                id: "{id}",
                value: value,
                on_change: on_change,
                constraints: constraints,
                has_error: has_error,
                size: size,
                disabled: disabled,
                placeholder: placeholder,
                aria_invalid: if has_error { "true" } else { "false" },
                aria_describedby: described_by,
            }
            if let Some(message) = error {
                p { id: "{error_id}", class: "number-field-error", role: "alert",
                    Icon::<FaCircleExclamation> { icon: FaCircleExclamation, width: 14, height: 14 }
                    "{message}"
                }
            } else if let Some(message) = hint {
                p { id: "{hint_id}", class: "number-field-hint", "{message}" }
            }
        }
    }
}
