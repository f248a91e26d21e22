use reqwest::Url;

use crate::error::{ClientError, Result};

pub const DEFAULT_GOOGLE_BOOKS_ENDPOINT: &str = "https://www.googleapis.com/books/v1";

/// Where the library backend lives.
///
/// The backend serves everything under `{api_url}{api_path}/libraries/`.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_url: Url,
    pub api_path: String,
}

impl ClientConfig {
    pub fn new(api_url: Url, api_path: impl Into<String>) -> Self {
        Self {
            api_url,
            api_path: api_path.into(),
        }
    }

    /// The `libraries` collection url that every backend call is relative to.
    pub fn libraries_url(&self) -> Result<Url> {
        let mut url = self.api_url.clone();

        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ClientError::InvalidBaseUrl(self.api_url.to_string()))?;

            segments.pop_if_empty();
            segments.extend(self.api_path.split('/').filter(|s| !s.is_empty()));
            segments.push("libraries");
        }

        Ok(url)
    }
}

#[derive(Debug, Clone)]
pub struct GoogleBooksConfig {
    pub endpoint: Url,
    pub api_key: Option<String>,
}

impl GoogleBooksConfig {
    pub fn new(endpoint: Url, api_key: Option<String>) -> Self {
        Self { endpoint, api_key }
    }
}

impl Default for GoogleBooksConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_GOOGLE_BOOKS_ENDPOINT
                .parse()
                .expect("default Google Books endpoint is a valid url"),
            api_key: None,
        }
    }
}
