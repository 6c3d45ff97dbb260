use dioxus::prelude::*;
use shared_types::{FieldState, NumericConstraints};

/// Padding scale for number inputs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl InputSize {
    fn class(&self) -> &'static str {
        match self {
            InputSize::Sm => "sm",
            InputSize::Md => "md",
            InputSize::Lg => "lg",
        }
    }
}

/// A text input that only accepts numeric entry.
///
/// Keystrokes go through [`FieldState::on_edit`]; edits that break the
/// literal grammar are dropped. On blur the text is rounded to
/// `constraints.decimal_places`, unless it is out of range, in which case
/// it stays as typed and the owner decides how to report it.
///
/// `on_change` receives `None` when the field is cleared.
#[component]
pub fn NumberInput(
    #[props(default)] value: Option<f64>,
    #[props(default)] on_change: EventHandler<Option<f64>>,
    #[props(default)] constraints: NumericConstraints,
    #[props(default = false)] has_error: bool,
    #[props(default)] size: InputSize,
    #[props(default = false)] disabled: bool,
    #[props(default)] placeholder: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let mut field = use_signal(|| FieldState::new(value, constraints));

    // Re-seed only for values that did not come from our own emissions,
    // so an owner storing "16.7" as 17 does not rewrite the text mid-typing.
    use_effect(use_reactive!(|value| {
        if !field.peek().is_echo(value) {
            field.write().sync_external(value);
        }
    }));

    let text = field.read().raw_text().to_string();

    let base = vec![
        Attribute::new("class", "number-input", None, false),
        Attribute::new("inputmode", "decimal", None, false),
        Attribute::new("data-size", size.class(), None, false),
        Attribute::new(
            "data-error",
            if has_error { "true" } else { "false" },
            None,
            false,
        ),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        input {
            r#type: "text",
            value: text,
            placeholder: placeholder,
            disabled: disabled,
            oninput: move |evt: FormEvent| {
                let result = field.write().on_edit(&evt.value());
                if let Some(next) = result.outcome.emission() {
                    on_change.call(next);
                }
            },
            onblur: move |_| {
                let outcome = field.write().finalize();
                if let Some(next) = outcome.emission() {
                    on_change.call(next);
                }
            },
            ..merged,
        }
    }
}
