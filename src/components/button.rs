//! Styled button wrapper

use dioxus::prelude::*;

const BASE_CLASS: &str = "px-4 py-2 rounded-md bg-indigo-600 hover:bg-indigo-700 \
     text-white font-medium transition disabled:opacity-50";

/// Props for Button. Enumerated contract, same rationale as
/// [`TextInputProps`](super::TextInputProps).
#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    pub children: Element,
    pub onclick: EventHandler<MouseEvent>,
    #[props(default)]
    pub disabled: bool,
    /// Extra classes appended after the base styling.
    #[props(default)]
    pub class: Option<String>,
}

/// Button with the page's fixed styling. Stateless; while disabled the
/// click handler is never invoked.
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let ButtonProps {
        children,
        onclick,
        disabled,
        class,
    } = props;
    let extra = class.unwrap_or_default();

    rsx! {
        button {
            class: "{BASE_CLASS} {extra}",
            disabled: disabled,
            onclick: move |event| {
                if !disabled {
                    onclick.call(event);
                }
            },
            {children}
        }
    }
}
