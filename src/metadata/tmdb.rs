//! TMDB (The Movie Database) client.
//!
//! Wraps the three TMDB v3 operations the pipeline consumes: movie search,
//! movie detail with credits, and poster download from the image CDN. One
//! long-lived [`reqwest::Client`] with a 30-second timeout backs all of
//! them. Search results are returned in the service's relevance order and
//! never re-sorted.

use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::config::TmdbConfig;
use crate::error::{Error, Result};
use crate::metadata::provider::{parse_year, MovieDetail, SearchResult};

const TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";
const TMDB_IMAGE_BASE: &str = "https://image.tmdb.org/t/p/original";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// ---------------------------------------------------------------------------
// TMDB API response types (private)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct TmdbSearchResponse {
    results: Vec<TmdbSearchResult>,
}

#[derive(Debug, Deserialize)]
struct TmdbSearchResult {
    id: u64,
    title: Option<String>,
    release_date: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TmdbMovieDetail {
    title: Option<String>,
    overview: Option<String>,
    release_date: Option<String>,
    genres: Option<Vec<TmdbGenre>>,
    poster_path: Option<String>,
    credits: Option<TmdbCredits>,
}

#[derive(Debug, Deserialize)]
struct TmdbGenre {
    name: String,
}

#[derive(Debug, Deserialize)]
struct TmdbCredits {
    cast: Vec<TmdbCastMember>,
}

#[derive(Debug, Deserialize)]
struct TmdbCastMember {
    name: String,
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// TMDB API client holding the key, locale, and adult-content flag from
/// configuration.
pub struct TmdbClient {
    client: reqwest::Client,
    api_key: String,
    language: String,
    include_adult: bool,
    base_url: String,
    image_base_url: String,
}

impl TmdbClient {
    /// Create a client against the real TMDB endpoints.
    pub fn new(config: &TmdbConfig) -> Self {
        Self::with_base_urls(config, TMDB_BASE_URL, TMDB_IMAGE_BASE)
    }

    /// Create a client against custom endpoints. Used by tests to point at
    /// a mock server.
    pub fn with_base_urls(config: &TmdbConfig, base_url: &str, image_base_url: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to build reqwest client");

        Self {
            client,
            api_key: config.api_key.clone(),
            language: config.language.clone(),
            include_adult: config.include_adult,
            base_url: base_url.trim_end_matches('/').to_string(),
            image_base_url: image_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Search movies by title, first page only.
    ///
    /// Returns candidates in the order TMDB ranked them; an empty list is a
    /// valid response, not an error.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        let url = format!("{}/search/movie", self.base_url);
        debug!(query, "TMDB search");

        let include_adult = self.include_adult.to_string();
        let resp = self
            .client
            .get(&url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("language", self.language.as_str()),
                ("query", query),
                ("include_adult", include_adult.as_str()),
                ("page", "1"),
            ])
            .send()
            .await
            .map_err(|e| Error::search(e.to_string()))?
            .error_for_status()
            .map_err(|e| Error::search(e.to_string()))?;

        let body: TmdbSearchResponse = resp
            .json()
            .await
            .map_err(|e| Error::search(format!("bad search response: {e}")))?;

        Ok(body
            .results
            .into_iter()
            .map(|r| SearchResult {
                id: r.id,
                title: r.title.unwrap_or_default(),
                year: parse_year(r.release_date.as_deref()),
            })
            .collect())
    }

    /// Fetch the full record for one movie, credits included.
    pub async fn movie_detail(&self, id: u64) -> Result<MovieDetail> {
        let url = format!("{}/movie/{id}", self.base_url);
        debug!(id, "TMDB movie detail");

        let resp = self
            .client
            .get(&url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("language", self.language.as_str()),
                ("append_to_response", "credits"),
            ])
            .send()
            .await
            .map_err(|e| Error::detail_fetch(e.to_string()))?
            .error_for_status()
            .map_err(|e| Error::detail_fetch(e.to_string()))?;

        let detail: TmdbMovieDetail = resp
            .json()
            .await
            .map_err(|e| Error::detail_fetch(format!("bad detail response: {e}")))?;

        Ok(MovieDetail {
            title: detail.title.unwrap_or_default(),
            overview: detail.overview.filter(|o| !o.is_empty()),
            release_date: detail.release_date.filter(|d| !d.is_empty()),
            genres: detail
                .genres
                .unwrap_or_default()
                .into_iter()
                .map(|g| g.name)
                .collect(),
            cast: detail
                .credits
                .map(|c| c.cast.into_iter().map(|m| m.name).collect())
                .unwrap_or_default(),
            poster_path: detail.poster_path.filter(|p| !p.is_empty()),
        })
    }

    /// Download a poster image from the CDN, returning the raw bytes.
    ///
    /// One plain GET, full body, no size cap or content-type validation.
    pub async fn fetch_poster(&self, poster_path: &str) -> Result<Vec<u8>> {
        let url = format!("{}{}", self.image_base_url, poster_path);
        debug!(url = %url, "fetching poster");

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::artwork_fetch(e.to_string()))?
            .error_for_status()
            .map_err(|e| Error::artwork_fetch(e.to_string()))?;

        let bytes = resp
            .bytes()
            .await
            .map_err(|e| Error::artwork_fetch(e.to_string()))?;

        Ok(bytes.to_vec())
    }
}
