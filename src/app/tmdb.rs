use reqwest::blocking::{Client, Request};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";
const LANGUAGE: &str = "en-US";

/// A single entry of a `/search/movie` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
}

impl Movie {
    pub fn poster_url(&self) -> Option<String> {
        self.poster_path.as_deref().map(poster_url)
    }
}

/// One page of search results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoviePage {
    pub results: Vec<Movie>,
    pub total_pages: u32,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub total_results: Option<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Credential {
    /// v3 key, sent as the `api_key` query parameter
    ApiKey(String),
    /// v4 read access token, sent as `Authorization: Bearer`
    BearerToken(String),
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("TMDB credential is missing. Set TMDB_API_KEY or TMDB_ACCESS_TOKEN.")]
    MissingCredential,

    #[error("TMDB request failed with status: {0}")]
    Status(reqwest::StatusCode),

    #[error("TMDB request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Anything that can answer a movie search. The app only talks to this.
pub trait MovieCatalog: Send + Sync {
    fn search_movies(&self, query: &str, page: u32) -> Result<MoviePage, CatalogError>;
}

pub fn poster_url(path: &str) -> String {
    format!("{}{}", IMAGE_BASE_URL, path)
}

pub struct TmdbClient {
    http: Client,
    base_url: String,
    credential: Option<Credential>,
}

impl TmdbClient {
    pub fn new(base_url: &str, credential: Option<Credential>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            credential,
        }
    }

    /// Builds the search request without sending it
    pub fn build_search_request(&self, query: &str, page: u32) -> Result<Request, CatalogError> {
        let credential = self
            .credential
            .as_ref()
            .ok_or(CatalogError::MissingCredential)?;

        let mut url = format!(
            "{}/search/movie?query={}&include_adult=false&language={}&page={}",
            self.base_url,
            urlencoding::encode(query),
            LANGUAGE,
            page
        );

        let request = match credential {
            Credential::ApiKey(key) => {
                url.push_str("&api_key=");
                url.push_str(&urlencoding::encode(key));
                self.http.get(&url)
            }
            Credential::BearerToken(token) => self.http.get(&url).bearer_auth(token),
        };

        Ok(request.header(reqwest::header::ACCEPT, "application/json").build()?)
    }
}

impl MovieCatalog for TmdbClient {
    fn search_movies(&self, query: &str, page: u32) -> Result<MoviePage, CatalogError> {
        let request = self.build_search_request(query, page)?;
        tracing::debug!(query, page, "searching TMDB");

        let response = self.http.execute(request)?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), query, page, "TMDB search failed");
            return Err(CatalogError::Status(response.status()));
        }

        let movie_page: MoviePage = response.json()?;
        tracing::info!(
            query,
            page,
            results = movie_page.results.len(),
            total_pages = movie_page.total_pages,
            "TMDB search complete"
        );

        Ok(movie_page)
    }
}

/// Downloads poster bytes. Decoding happens on the UI thread.
pub fn download_poster(poster_url: &str) -> Result<Vec<u8>, CatalogError> {
    let response = reqwest::blocking::get(poster_url)?;

    if !response.status().is_success() {
        return Err(CatalogError::Status(response.status()));
    }

    Ok(response.bytes()?.to_vec())
}
