//! Client configuration.

use std::env;

pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// The remote returns hundreds of comments; only the head is shown.
pub const DEFAULT_LIST_LIMIT: usize = 20;

const BASE_URL_VAR: &str = "COMMENTS_API_URL";
const LIST_LIMIT_VAR: &str = "COMMENTS_LIST_LIMIT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub list_limit: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            list_limit: DEFAULT_LIST_LIMIT,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            ..Self::default()
        }
    }

    /// Read `COMMENTS_API_URL` and `COMMENTS_LIST_LIMIT`, falling back to the
    /// defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(url) = lookup(BASE_URL_VAR).filter(|v| !v.trim().is_empty()) {
            config.base_url = url;
        }
        if let Some(raw) = lookup(LIST_LIMIT_VAR) {
            match raw.trim().parse::<usize>() {
                Ok(limit) => config.list_limit = limit,
                Err(e) => tracing::warn!(
                    "ignoring {LIST_LIMIT_VAR}={raw:?} ({e}), using {DEFAULT_LIST_LIMIT}"
                ),
            }
        }
        config
    }
}
