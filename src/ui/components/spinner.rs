use dioxus::prelude::*;

/// Loading indicator shown while a fetch is in flight.
#[component]
pub fn Spinner() -> Element {
    rsx! {
        div { class: "text-center py-8",
            div { class: "animate-spin rounded-full h-10 w-10 border-b-2 border-indigo-500 mx-auto" }
            p { class: "text-gray-400 mt-3", "Loading..." }
        }
    }
}
