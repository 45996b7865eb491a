//! Styled text input wrapper

use dioxus::prelude::*;

const BASE_CLASS: &str = "px-3 py-2 rounded-md border bg-gray-800 border-gray-700 \
     placeholder-gray-500 focus:outline-none focus:border-indigo-500 focus:ring \
     focus:ring-indigo-500 focus:ring-opacity-50";

/// Props for TextInput. Deliberately enumerated rather than an open
/// attribute bag, so the component's contract stays auditable.
#[derive(Props, Clone, PartialEq)]
pub struct TextInputProps {
    pub value: String,
    pub placeholder: String,
    /// Called with the raw new text on every keystroke.
    pub oninput: EventHandler<String>,
    /// Extra classes appended after the base styling.
    #[props(default)]
    pub class: Option<String>,
    #[props(default)]
    pub disabled: bool,
}

/// Text input with the page's fixed styling. No validation, no formatting;
/// it only forwards what the visitor typed.
#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    let TextInputProps {
        value,
        placeholder,
        oninput,
        class,
        disabled,
    } = props;
    let extra = class.unwrap_or_default();

    rsx! {
        input {
            r#type: "text",
            class: "{BASE_CLASS} {extra}",
            value: "{value}",
            placeholder: "{placeholder}",
            disabled: disabled,
            oninput: move |event: FormEvent| oninput.call(event.value()),
        }
    }
}
