use dioxus::prelude::*;

/// A text input. Pass `invalid` to flag the field for assistive tech.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = "on".to_string())] autocomplete: String,
    #[props(default = false)] disabled: bool,
    #[props(default = false)] invalid: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "input-wrapper",
            input {
                r#type: "{input_type}",
                value: value,
                placeholder: placeholder,
                autocomplete: "{autocomplete}",
                disabled: disabled,
                "aria-invalid": if invalid { "true" } else { "false" },
                oninput: move |evt| on_input.call(evt),
                ..merged,
            }
        }
    }
}

/// Input type, toggle text and toggle accessible name for a reveal state.
fn reveal_state(revealed: bool) -> (&'static str, &'static str, &'static str) {
    if revealed {
        ("text", "Hide", "Hide password")
    } else {
        ("password", "Show", "Show password")
    }
}

/// Password field with a Show/Hide toggle. Starts masked; the toggle only
/// changes how the value is displayed.
#[component]
pub fn PasswordInput(
    id: String,
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default = "new-password".to_string())] autocomplete: String,
    #[props(default = false)] disabled: bool,
    #[props(default = false)] invalid: bool,
) -> Element {
    let mut revealed = use_signal(|| false);
    let (input_type, toggle_text, toggle_label) = reveal_state(revealed());

    rsx! {
        div { class: "password-input",
            Input {
                id: "{id}",
                input_type: input_type.to_string(),
                value,
                placeholder,
                autocomplete,
                disabled,
                invalid,
                on_input: move |evt| on_input.call(evt),
            }
            button {
                r#type: "button",
                class: "password-toggle",
                "aria-controls": "{id}",
                "aria-pressed": if revealed() { "true" } else { "false" },
                "aria-label": toggle_label,
                onclick: move |_| revealed.set(!revealed()),
                "{toggle_text}"
            }
        }
    }
}
