use dioxus::prelude::*;
use tracing::warn;

use crate::search_context::SearchContext;
use crate::trending::TRENDING_LIMIT;
use crate::trending_context::use_trending_store;

use super::{MovieCard, SearchBox, Spinner, TrendingList};

/// Main search and discovery page.
#[component]
pub fn Home() -> Element {
    let search_ctx = use_context::<SearchContext>();
    let store = use_trending_store();

    // Popular titles on first render (empty committed term). No trending
    // record fires for an empty term, so the store handle is not needed.
    let mut mount_ctx = search_ctx.clone();
    use_effect(move || {
        mount_ctx.fetch_movies(String::new(), None);
    });

    let trending = use_resource(move || {
        let store = store();
        async move {
            match store {
                Some(store) => match store.top_searches(TRENDING_LIMIT).await {
                    Ok(entries) => entries,
                    Err(e) => {
                        warn!("Failed to load trending searches: {}", e);
                        Vec::new()
                    }
                },
                None => Vec::new(),
            }
        }
    });

    let showing_search = !search_ctx.search_query.read().trim().is_empty();

    rsx! {
        main { class: "container mx-auto p-6",
            header { class: "text-center py-10",
                h1 { class: "text-4xl font-bold mb-2",
                    span { class: "text-gradient", "Unwind Your Mind - Anytime, Anywhere" }
                }
                p { class: "text-gray-400",
                    "Find movies you'll enjoy without the hassle"
                }
            }

            SearchBox {}

            if let Some(entries) = trending.value().read().as_ref() {
                if !entries.is_empty() {
                    TrendingList { entries: entries.clone() }
                }
            }

            section { class: "mt-10",
                h2 { class: "text-2xl font-bold mb-4",
                    if showing_search {
                        "Search Results"
                    } else {
                        "Popular Movies"
                    }
                }

                if *search_ctx.is_loading.read() {
                    Spinner {}
                } else if let Some(error) = search_ctx.error_message.read().as_ref() {
                    div {
                        class: "bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-4",
                        "{error}"
                    }
                } else {
                    div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6",
                        for movie in search_ctx.movies.read().iter() {
                            MovieCard { key: "{movie.id}", movie: movie.clone() }
                        }
                    }
                }
            }
        }
    }
}
