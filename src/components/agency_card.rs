//! Agency result card

use dioxus::prelude::*;

use crate::types::{support_type_explanation, Agency, SupportStatus};

/// Props for AgencyCard
#[derive(Props, Clone, PartialEq)]
pub struct AgencyCardProps {
    pub agency: Agency,
}

/// Card for a single agency: name, state, raw support type, and a status
/// badge derived from it.
#[component]
pub fn AgencyCard(props: AgencyCardProps) -> Element {
    let agency = &props.agency;
    let styles = status_styles(agency.status());
    let explanation = support_type_explanation(&agency.support_type);

    rsx! {
        div {
            class: "bg-gray-800 border border-gray-700 rounded-xl p-4 text-white shadow-lg hover:shadow-xl transition",

            div {
                class: "flex items-center justify-between mb-2",
                p {
                    class: "text-lg font-semibold text-indigo-300",
                    "{agency.name}"
                }
                span {
                    class: "px-2 py-1 text-xs font-medium rounded-full {styles.badge}",
                    "{styles.label}"
                }
            }

            p { class: "text-sm text-gray-400", "{agency.state}" }
            p { class: "text-sm text-indigo-400", "Support Type: {agency.support_type}" }

            if let Some(explanation) = explanation {
                p {
                    class: "text-xs text-gray-500 mt-2",
                    "{explanation}"
                }
            }
        }
    }
}

struct StatusStyles {
    badge: &'static str,
    label: &'static str,
}

fn status_styles(status: SupportStatus) -> StatusStyles {
    match status {
        SupportStatus::Pending => StatusStyles {
            badge: "bg-yellow-500 text-black",
            label: "Pending",
        },
        SupportStatus::Participating => StatusStyles {
            badge: "bg-green-500 text-white",
            label: "Participating",
        },
    }
}
