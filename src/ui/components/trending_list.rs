use dioxus::prelude::*;

use crate::models::TrendingEntry;

/// Ranked list of the most-searched terms. Rendered only when the loader
/// returned at least one entry.
#[component]
pub fn TrendingList(entries: Vec<TrendingEntry>) -> Element {
    rsx! {
        section { class: "mt-10",
            h2 { class: "text-2xl font-bold mb-4", "Trending Searches" }
            ul { class: "flex gap-6 overflow-x-auto pb-2",
                for (index, entry) in entries.iter().enumerate() {
                    li { key: "{entry.id}", class: "flex items-center gap-3 shrink-0",
                        p { class: "text-5xl font-bold text-gray-700",
                            {(index + 1).to_string()}
                        }
                        if let Some(poster) = &entry.poster_url {
                            img {
                                class: "w-16 h-24 object-cover rounded",
                                src: "{poster}",
                                alt: "{entry.term} poster"
                            }
                        } else {
                            div { class: "w-16 h-24 bg-gray-700 rounded" }
                        }
                        span { class: "text-gray-300", "{entry.term}" }
                    }
                }
            }
        }
    }
}
