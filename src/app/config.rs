use std::path::PathBuf;

use crate::app::tmdb::{Credential, DEFAULT_BASE_URL};

pub const APP_NAME: &str = "movie_search";

/// Settings read from the environment at startup
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub credential: Option<Credential>,
    pub base_url: String,
    pub log_filter: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// `TMDB_ACCESS_TOKEN` wins over `TMDB_API_KEY` when both are set.
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let credential = non_blank("TMDB_ACCESS_TOKEN")
            .map(Credential::BearerToken)
            .or_else(|| non_blank("TMDB_API_KEY").map(Credential::ApiKey));

        Self {
            credential,
            base_url: non_blank("TMDB_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            log_filter: non_blank("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        }
    }

    pub fn log_dir() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join(APP_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn no_credential_when_nothing_is_set() {
        let config = config_from(&[]);
        assert_eq!(config.credential, None);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn api_key_is_picked_up() {
        let config = config_from(&[("TMDB_API_KEY", "abc")]);
        assert_eq!(config.credential, Some(Credential::ApiKey("abc".into())));
    }

    #[test]
    fn access_token_takes_precedence() {
        let config = config_from(&[("TMDB_API_KEY", "abc"), ("TMDB_ACCESS_TOKEN", "xyz")]);
        assert_eq!(config.credential, Some(Credential::BearerToken("xyz".into())));
    }

    #[test]
    fn blank_values_are_ignored() {
        let config = config_from(&[("TMDB_ACCESS_TOKEN", "   "), ("TMDB_BASE_URL", "")]);
        assert_eq!(config.credential, None);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }
}
