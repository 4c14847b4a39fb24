use reqwest::{Client, Error as ReqwestError};
use serde::Deserialize;
use thiserror::Error;

use crate::models::Movie;

pub const TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

#[derive(Error, Debug)]
pub enum TmdbError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),
    #[error("API rate limit exceeded")]
    RateLimit,
    #[error("Invalid API token")]
    InvalidToken,
    #[error("{0}")]
    Api(String),
}

/// Movie list response wrapper. A 2xx payload either carries `results` or an
/// OMDB-style failure flag (`Response: "False"` plus an `Error` message).
#[derive(Debug, Deserialize)]
struct MovieListResponse {
    #[serde(rename = "Response")]
    response: Option<String>,
    #[serde(rename = "Error")]
    error: Option<String>,
    results: Option<Vec<Movie>>,
}

/// Build the request URL for a committed search term. An empty term means
/// "no query": list popular titles from the discovery endpoint instead.
pub fn request_url(base_url: &str, term: &str) -> String {
    if term.is_empty() {
        format!("{}/discover/movie?sort_by=popularity.desc", base_url)
    } else {
        format!(
            "{}/search/movie?query={}",
            base_url,
            urlencoding::encode(term)
        )
    }
}

/// Map a non-2xx status to the error taxonomy. Statuses without a specific
/// mapping fall through to the transport error.
fn status_error(status: reqwest::StatusCode) -> Option<TmdbError> {
    match status.as_u16() {
        429 => Some(TmdbError::RateLimit),
        401 => Some(TmdbError::InvalidToken),
        _ => None,
    }
}

fn parse_movie_list(payload: MovieListResponse) -> Result<Vec<Movie>, TmdbError> {
    if payload.response.as_deref() == Some("False") {
        return Err(TmdbError::Api(
            payload
                .error
                .unwrap_or_else(|| "Failed to fetch movies".to_string()),
        ));
    }
    Ok(payload.results.unwrap_or_default())
}

#[derive(Clone)]
pub struct TmdbClient {
    client: Client,
    token: String,
    base_url: String,
}

impl TmdbClient {
    pub fn new(token: String) -> Self {
        Self::with_base_url(token, TMDB_BASE_URL.to_string())
    }

    pub(crate) fn with_base_url(token: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            token,
            base_url,
        }
    }

    /// Search the catalog by title.
    pub async fn search_movies(&self, term: &str) -> Result<Vec<Movie>, TmdbError> {
        self.fetch(request_url(&self.base_url, term)).await
    }

    /// List popular titles, used when no search term is committed.
    pub async fn discover_popular(&self) -> Result<Vec<Movie>, TmdbError> {
        self.fetch(request_url(&self.base_url, "")).await
    }

    async fn fetch(&self, url: String) -> Result<Vec<Movie>, TmdbError> {
        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/json")
            .send()
            .await?;

        if response.status().is_success() {
            let payload: MovieListResponse = response.json().await?;
            parse_movie_list(payload)
        } else if let Some(e) = status_error(response.status()) {
            Err(e)
        } else {
            Err(TmdbError::Request(
                response.error_for_status().unwrap_err(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_term_uses_discovery_endpoint() {
        assert_eq!(
            request_url(TMDB_BASE_URL, ""),
            "https://api.themoviedb.org/3/discover/movie?sort_by=popularity.desc"
        );
    }

    #[test]
    fn non_empty_term_uses_search_endpoint_url_encoded() {
        assert_eq!(
            request_url(TMDB_BASE_URL, "the thing"),
            "https://api.themoviedb.org/3/search/movie?query=the%20thing"
        );
        assert_eq!(
            request_url(TMDB_BASE_URL, "alien & aliens"),
            "https://api.themoviedb.org/3/search/movie?query=alien%20%26%20aliens"
        );
    }

    #[test]
    fn success_payload_yields_result_list() {
        let payload: MovieListResponse = serde_json::from_str(
            r#"{"results": [{"id": 1, "title": "A", "poster_path": "/a.jpg"}]}"#,
        )
        .unwrap();
        let movies = parse_movie_list(payload).unwrap();
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].id, 1);
        assert_eq!(movies[0].title, "A");
    }

    #[test]
    fn missing_results_field_yields_empty_list() {
        let payload: MovieListResponse = serde_json::from_str("{}").unwrap();
        assert!(parse_movie_list(payload).unwrap().is_empty());
    }

    #[test]
    fn failure_flag_surfaces_payload_message() {
        let payload: MovieListResponse =
            serde_json::from_str(r#"{"Response": "False", "Error": "Movie not found!"}"#).unwrap();
        match parse_movie_list(payload) {
            Err(TmdbError::Api(message)) => assert_eq!(message, "Movie not found!"),
            other => panic!("expected Api error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn failure_flag_without_message_falls_back_to_generic() {
        let payload: MovieListResponse =
            serde_json::from_str(r#"{"Response": "False"}"#).unwrap();
        match parse_movie_list(payload) {
            Err(TmdbError::Api(message)) => assert_eq!(message, "Failed to fetch movies"),
            other => panic!("expected Api error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn status_mapping_covers_auth_and_rate_limit() {
        use reqwest::StatusCode;

        assert!(matches!(
            status_error(StatusCode::TOO_MANY_REQUESTS),
            Some(TmdbError::RateLimit)
        ));
        assert!(matches!(
            status_error(StatusCode::UNAUTHORIZED),
            Some(TmdbError::InvalidToken)
        ));
        // Everything else falls through to the transport error.
        assert!(status_error(StatusCode::INTERNAL_SERVER_ERROR).is_none());
        assert!(status_error(StatusCode::NOT_FOUND).is_none());
    }

    /// Serve a single canned HTTP response on an ephemeral local port.
    async fn serve_once(response: &'static str) -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 2048];
            let _ = socket.read(&mut request).await;
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn server_error_maps_to_transport_failure() {
        let base_url = serve_once(
            "HTTP/1.1 500 Internal Server Error\r\ncontent-length: 0\r\nconnection: close\r\n\r\n",
        )
        .await;
        let client = TmdbClient::with_base_url("token".to_string(), base_url);

        match client.discover_popular().await {
            Err(TmdbError::Request(_)) => {}
            other => panic!("expected transport error, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn unauthorized_maps_to_invalid_token() {
        let base_url = serve_once(
            "HTTP/1.1 401 Unauthorized\r\ncontent-length: 0\r\nconnection: close\r\n\r\n",
        )
        .await;
        let client = TmdbClient::with_base_url("bad-token".to_string(), base_url);

        assert!(matches!(
            client.search_movies("alien").await,
            Err(TmdbError::InvalidToken)
        ));
    }
}
