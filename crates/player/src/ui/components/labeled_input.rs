//! Text input with a label above and an inline error below

use dioxus::prelude::*;

/// Props for the LabeledInput component
#[derive(Props, Clone, PartialEq)]
pub struct LabeledInputProps {
    pub label: String,
    pub value: String,
    /// Shown under the input and highlights it when present
    pub error: Option<String>,
    /// Ask for a numeric keyboard on touch devices
    #[props(default = false)]
    pub numeric: bool,
    pub on_input: EventHandler<String>,
}

#[component]
pub fn LabeledInput(props: LabeledInputProps) -> Element {
    let on_input = props.on_input;
    let input_class = if props.error.is_some() {
        "field-input field-input-error"
    } else {
        "field-input"
    };
    let input_mode = if props.numeric { "numeric" } else { "text" };

    rsx! {
        div {
            class: "field",
            label { class: "field-label", "{props.label}" }
            input {
                r#type: "text",
                class: input_class,
                value: "{props.value}",
                "inputmode": input_mode,
                "autocapitalize": "none",
                oninput: move |e| on_input.call(e.value()),
            }
            if let Some(error) = props.error.as_ref() {
                span { class: "field-error", "{error}" }
            }
        }
    }
}
