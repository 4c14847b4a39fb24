use dioxus::prelude::*;

use crate::search_context::SearchContext;
use crate::trending_context::use_trending_store;

/// Controlled search input. Every keystroke updates the raw query signal;
/// the fetch fires only once the input has been quiet for the debounce
/// window.
#[component]
pub fn SearchBox() -> Element {
    let search_ctx = use_context::<SearchContext>();
    let store = use_trending_store();
    let mut input_ctx = search_ctx.clone();

    rsx! {
        div { class: "max-w-3xl mx-auto",
            input {
                class: "w-full p-3 bg-gray-800 border border-gray-600 rounded-lg text-lg text-white",
                r#type: "text",
                placeholder: "Search through thousands of movies",
                value: "{search_ctx.search_query}",
                oninput: move |event: FormEvent| {
                    let value = event.value();
                    input_ctx.search_query.set(value.clone());
                    input_ctx.debounce_search(value, store.peek().clone());
                },
            }
        }
    }
}
