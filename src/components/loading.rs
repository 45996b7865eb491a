//! Loading indicator

use dioxus::prelude::*;

/// Inline bouncing-dots indicator shown while a search is in flight.
#[component]
pub fn LoadingDots() -> Element {
    rsx! {
        div {
            class: "inline-flex space-x-2",
            div { class: "w-3 h-3 bg-indigo-400 rounded-full animate-bounce" }
            div { class: "w-3 h-3 bg-indigo-400 rounded-full animate-bounce", style: "animation-delay: 0.1s" }
            div { class: "w-3 h-3 bg-indigo-400 rounded-full animate-bounce", style: "animation-delay: 0.2s" }
        }
    }
}
