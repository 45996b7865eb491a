//! Agency locator page

use dioxus::prelude::*;

use crate::components::{AgencyCard, Button, LoadingDots, TextInput};
use crate::share;
use crate::state::SearchState;
use crate::types::SearchCriteria;

/// Agency locator page - search participating agencies by ZIP or city/state
#[component]
pub fn Locator() -> Element {
    let mut zip = use_signal(String::new);
    let mut city = use_signal(String::new);
    let mut state_abbr = use_signal(String::new);
    let mut search = use_signal(SearchState::default);

    let is_loading = search.read().loading;
    let error = search.read().error.clone();
    let results = search.read().results.clone();

    let handle_search = move |_event: MouseEvent| {
        // Criteria are captured at the moment the search is triggered.
        let criteria = SearchCriteria {
            zip: zip(),
            city: city(),
            state: state_abbr(),
        };

        #[cfg(feature = "web")]
        spawn(async move {
            do_search(criteria, &mut search).await;
        });
        #[cfg(not(feature = "web"))]
        let _ = criteria;
    };

    rsx! {
        div {
            class: "bg-gray-950 text-white",

            // Header
            header {
                class: "border-b border-gray-800 shadow-md sticky top-0 z-50 bg-gray-900",
                div {
                    class: "max-w-5xl mx-auto px-4 py-3 flex items-center justify-between",
                    span {
                        class: "text-indigo-400 text-xl font-bold",
                        "ABOLISH ICE NOW"
                    }
                    nav {
                        class: "flex items-center gap-4 text-sm",
                        button {
                            class: "px-3 py-1 bg-indigo-600 hover:bg-indigo-700 rounded text-white text-sm transition",
                            onclick: move |_| share::share_page(share::SHARE_TITLE),
                            "Share"
                        }
                    }
                }
            }

            // Search form and results
            main {
                id: "search",
                class: "p-6 max-w-3xl mx-auto bg-gray-900 min-h-screen text-white",

                h1 {
                    class: "text-3xl font-bold mb-6 text-center text-indigo-300",
                    "Is my police department collaborating with ICE?"
                }

                div {
                    class: "grid gap-4 sm:grid-cols-2 mb-4",
                    TextInput {
                        value: zip(),
                        placeholder: "ZIP code",
                        oninput: move |value| zip.set(value),
                    }
                    div {
                        class: "grid grid-cols-2 gap-2",
                        TextInput {
                            value: city(),
                            placeholder: "City",
                            oninput: move |value| city.set(value),
                        }
                        TextInput {
                            value: state_abbr(),
                            placeholder: "State (e.g. NY)",
                            oninput: move |value| state_abbr.set(value),
                        }
                    }
                }

                Button {
                    class: "w-full",
                    disabled: is_loading,
                    onclick: handle_search,
                    if is_loading { "Searching..." } else { "Search" }
                }

                if is_loading {
                    div {
                        class: "mt-6 text-center",
                        LoadingDots {}
                    }
                }

                if let Some(error) = error {
                    p {
                        class: "text-indigo-400 mt-4 text-center font-medium",
                        "{error}"
                    }
                }

                div {
                    class: "mt-6 grid gap-4",
                    for agency in results {
                        AgencyCard { agency }
                    }
                }
            }
        }
    }
}

#[cfg(feature = "web")]
async fn do_search(criteria: SearchCriteria, search: &mut Signal<SearchState>) {
    use crate::api;
    use crate::state::SearchOutcome;

    let ticket = search.write().begin();

    let outcome = match api::fetch_nearby(&criteria).await {
        Ok(reply) => SearchOutcome::from(reply),
        Err(err) => {
            tracing::warn!(error = %err, "agency lookup failed");
            SearchOutcome::Failed
        }
    };

    search.write().resolve(ticket, outcome);
}
