use dioxus::prelude::*;

use crate::models::Movie;

/// Individual movie result card.
#[component]
pub fn MovieCard(movie: Movie) -> Element {
    let rating = movie
        .vote_average
        .map(|v| format!("{:.1}", v))
        .unwrap_or_else(|| "N/A".to_string());
    let year = movie.release_year().unwrap_or("-").to_string();
    let language = movie
        .original_language
        .clone()
        .unwrap_or_else(|| "-".to_string());

    rsx! {
        div { class: "bg-gray-800 rounded-lg shadow-md p-4 hover:shadow-lg transition-shadow",
            if let Some(poster) = movie.poster_url() {
                img {
                    class: "w-full h-64 object-cover rounded mb-3",
                    src: "{poster}",
                    alt: "{movie.title} poster"
                }
            } else {
                div { class: "w-full h-64 bg-gray-700 rounded mb-3 flex items-center justify-center",
                    span { class: "text-gray-400", "No Poster" }
                }
            }

            h3 { class: "font-bold text-lg mb-2 text-white", "{movie.title}" }

            div { class: "flex items-center gap-2 text-sm text-gray-400",
                span { "★ {rating}" }
                span { "•" }
                span { class: "uppercase", "{language}" }
                span { "•" }
                span { "{year}" }
            }
        }
    }
}
