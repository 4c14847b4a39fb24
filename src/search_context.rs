use std::time::Duration;

use dioxus::prelude::*;
use tracing::warn;

use crate::api_keys;
use crate::debounce::Debouncer;
use crate::models::Movie;
use crate::tmdb::TmdbClient;
use crate::trending::TrendingStore;

/// Quiet window between the last keystroke and the committed search term.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// Shared search state: the raw input, the current result list, and the
/// loading/error flags. Result list and error message are mutually exclusive
/// in display; loading suppresses both.
#[derive(Clone)]
pub struct SearchContext {
    pub search_query: Signal<String>,
    pub movies: Signal<Vec<Movie>>,
    pub is_loading: Signal<bool>,
    pub error_message: Signal<Option<String>>,
    debouncer: Debouncer,
    requests: Debouncer,
}

impl SearchContext {
    /// Stage a raw input value. Once the quiet window elapses with no newer
    /// keystroke, the value is committed and exactly one fetch fires.
    pub fn debounce_search(&mut self, raw: String, store: Option<TrendingStore>) {
        let token = self.debouncer.arm();
        let debouncer = self.debouncer.clone();
        let mut this = self.clone();
        spawn(async move {
            if debouncer.wait(token, SEARCH_DEBOUNCE).await {
                this.fetch_movies(raw, store);
            }
        });
    }

    /// Fetch movies for a committed term. An empty term lists popular titles
    /// from the discovery endpoint instead of searching.
    ///
    /// Completions that have been superseded by a newer fetch perform no
    /// state writes, so a slow response cannot overwrite a fresher one.
    pub fn fetch_movies(&mut self, term: String, store: Option<TrendingStore>) {
        let token = self.requests.arm();
        let requests = self.requests.clone();
        let mut movies = self.movies;
        let mut is_loading = self.is_loading;
        let mut error_message = self.error_message;

        spawn(async move {
            is_loading.set(true);
            error_message.set(None);

            let term = term.trim().to_string();

            let api_token = match api_keys::retrieve_api_token() {
                Ok(api_token) => api_token,
                Err(_) => {
                    error_message.set(Some(
                        "No TMDB API token configured. Please go to Settings to add one."
                            .to_string(),
                    ));
                    is_loading.set(false);
                    return;
                }
            };

            let client = TmdbClient::new(api_token);
            let result = if term.is_empty() {
                client.discover_popular().await
            } else {
                client.search_movies(&term).await
            };

            // A newer request owns the UI state now.
            if !requests.is_current(token) {
                return;
            }

            if let Ok(results) = &result {
                if !term.is_empty() {
                    if let (Some(store), Some(first)) = (store, results.first()) {
                        let first = first.clone();
                        let term = term.clone();
                        // Best-effort side effect: failures are logged,
                        // never surfaced to the user.
                        tokio::spawn(async move {
                            if let Err(e) = store.record_search(&term, &first).await {
                                warn!("Failed to record trending search '{}': {}", term, e);
                            }
                        });
                    }
                }
            }

            let (results, error) = completed_state(result);
            movies.set(results);
            error_message.set(error);
            is_loading.set(false);
        });
    }
}

/// State transition for a completed fetch: success replaces the result list
/// and clears the error; failure clears the list and sets the message. The
/// two are never populated together.
fn completed_state(
    result: Result<Vec<Movie>, crate::tmdb::TmdbError>,
) -> (Vec<Movie>, Option<String>) {
    match result {
        Ok(results) => (results, None),
        Err(e) => (Vec::new(), Some(format!("Search failed: {}", e))),
    }
}

/// Provider component to make search state available throughout the app
#[component]
pub fn SearchContextProvider(children: Element) -> Element {
    let search_ctx = SearchContext {
        search_query: use_signal(String::new),
        movies: use_signal(Vec::new),
        is_loading: use_signal(|| false),
        error_message: use_signal(|| None),
        debouncer: Debouncer::default(),
        requests: Debouncer::default(),
    };

    use_context_provider(move || search_ctx);

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tmdb::TmdbError;

    fn movie(id: u64, title: &str) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            poster_path: None,
            release_date: None,
            original_language: None,
            vote_average: None,
            overview: None,
        }
    }

    #[test]
    fn failed_fetch_clears_results_and_sets_error() {
        let (movies, error) = completed_state(Err(TmdbError::Api("Movie not found!".to_string())));
        assert!(movies.is_empty());
        assert_eq!(error.as_deref(), Some("Search failed: Movie not found!"));
    }

    #[test]
    fn successful_fetch_replaces_results_and_clears_error() {
        let (movies, error) = completed_state(Ok(vec![movie(1, "A"), movie(2, "B")]));
        assert_eq!(movies.len(), 2);
        assert_eq!(error, None);
    }
}
