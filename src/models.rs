use serde::Deserialize;

use crate::tmdb::POSTER_BASE_URL;

/// A movie record as returned by the catalog API. Immutable once fetched;
/// the result list is replaced wholesale on each successful fetch.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    pub poster_path: Option<String>,
    pub release_date: Option<String>,
    pub original_language: Option<String>,
    pub vote_average: Option<f64>,
    pub overview: Option<String>,
}

impl Movie {
    /// Full poster image URL, if the record carries a poster path.
    pub fn poster_url(&self) -> Option<String> {
        self.poster_path
            .as_ref()
            .map(|path| format!("{}{}", POSTER_BASE_URL, path))
    }

    /// Release year extracted from the `YYYY-MM-DD` release date.
    pub fn release_year(&self) -> Option<&str> {
        self.release_date
            .as_deref()
            .and_then(|date| date.split('-').next())
            .filter(|year| !year.is_empty())
    }
}

/// Aggregate counter for a search term, mirrored read-only from the
/// trending store.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendingEntry {
    /// Document id derived from the term (trimmed, lowercased).
    pub id: String,
    pub term: String,
    pub count: i64,
    pub movie_id: u64,
    pub poster_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(poster_path: Option<&str>, release_date: Option<&str>) -> Movie {
        Movie {
            id: 1,
            title: "A".to_string(),
            poster_path: poster_path.map(str::to_string),
            release_date: release_date.map(str::to_string),
            original_language: None,
            vote_average: None,
            overview: None,
        }
    }

    #[test]
    fn poster_url_joins_base_and_path() {
        let m = movie(Some("/abc.jpg"), None);
        assert_eq!(
            m.poster_url().as_deref(),
            Some("https://image.tmdb.org/t/p/w500/abc.jpg")
        );
        assert_eq!(movie(None, None).poster_url(), None);
    }

    #[test]
    fn release_year_takes_leading_date_component() {
        assert_eq!(movie(None, Some("1979-05-25")).release_year(), Some("1979"));
        assert_eq!(movie(None, Some("")).release_year(), None);
        assert_eq!(movie(None, None).release_year(), None);
    }
}
