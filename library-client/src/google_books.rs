use std::sync::{Arc, OnceLock};

use library_common::{GoogleBooksMetadata, ImageLinks};
use regex::Regex;
use serde::Deserialize;
use tracing::{debug, info};

use crate::config::GoogleBooksConfig;
use crate::error::{ClientError, Result};
use crate::transport::{ApiRequest, ReqwestTransport, Transport};

/// Strips everything but digits, so `978-0-13-468599-1` becomes `9780134685991`.
pub fn normalize_isbn(isbn: &str) -> String {
    static NON_DIGITS: OnceLock<Regex> = OnceLock::new();

    NON_DIGITS
        .get_or_init(|| Regex::new(r"[^0-9]+").expect("static regex compiles"))
        .replace_all(isbn, "")
        .into_owned()
}

#[derive(Clone)]
pub struct GoogleBooks {
    transport: Arc<dyn Transport>,
    config: GoogleBooksConfig,
}

impl GoogleBooks {
    pub fn new(config: GoogleBooksConfig) -> Self {
        Self::with_transport(config, Arc::new(ReqwestTransport::new()))
    }

    pub fn with_transport(config: GoogleBooksConfig, transport: Arc<dyn Transport>) -> Self {
        Self { transport, config }
    }

    /// Looks the ISBN up and returns the metadata of the first matching volume.
    pub async fn metadata(&self, raw_isbn: &str) -> Result<GoogleBooksMetadata> {
        let isbn = normalize_isbn(raw_isbn);
        if isbn.is_empty() {
            return Err(ClientError::InvalidIsbn(raw_isbn.to_string()));
        }

        info!("Fetching Google Books metadata for isbn {}", isbn);

        let mut url = self.config.endpoint.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidBaseUrl(self.config.endpoint.to_string()))?
            .pop_if_empty()
            .push("volumes");

        {
            let mut query = url.query_pairs_mut();
            query.append_pair("q", &format!("isbn:{}", isbn));

            if let Some(key) = &self.config.api_key {
                query.append_pair("key", key);
            }
        }

        let raw = self.transport.send(ApiRequest::get(url)).await?;
        let response: VolumesResponse = serde_json::from_value(raw)?;

        debug!(
            "Google Books returned {} items for isbn {}",
            response.items.len(),
            isbn
        );

        let volume = response
            .items
            .into_iter()
            .next()
            .ok_or(ClientError::NoMetadata { isbn })?;

        Ok(volume.volume_info.into())
    }
}

#[derive(Debug, Deserialize)]
struct VolumesResponse {
    #[serde(default)]
    items: Vec<Volume>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Volume {
    volume_info: VolumeInfo,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VolumeInfo {
    description: Option<String>,
    #[serde(default)]
    authors: Vec<String>,
    image_links: Option<VolumeImageLinks>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VolumeImageLinks {
    thumbnail: Option<String>,
    small_thumbnail: Option<String>,
}

impl From<VolumeInfo> for GoogleBooksMetadata {
    fn from(info: VolumeInfo) -> Self {
        let image_links = info
            .image_links
            .map(|links| ImageLinks {
                thumbnail: links.thumbnail,
                small_thumbnail: links.small_thumbnail,
            })
            .unwrap_or_default();

        GoogleBooksMetadata {
            description: info.description,
            authors: info.authors,
            image_links,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strips_every_non_digit() {
        assert_eq!(normalize_isbn("978-0-13-468599-1"), "9780134685991");
        assert_eq!(normalize_isbn(" ISBN 0 13 468599 X "), "013468599");
        assert_eq!(normalize_isbn("9780134685991"), "9780134685991");
        assert_eq!(normalize_isbn("---"), "");
    }

    #[test]
    fn converts_first_volume_info() {
        let response: VolumesResponse = serde_json::from_value(json!({
            "totalItems": 1,
            "items": [{
                "volumeInfo": {
                    "title": "Refactoring",
                    "description": "Improving the design of existing code",
                    "authors": ["Martin Fowler", "Kent Beck"],
                    "imageLinks": {
                        "smallThumbnail": "http://books.google.com/small.jpg",
                        "thumbnail": "http://books.google.com/thumb.jpg"
                    }
                }
            }]
        }))
        .unwrap();

        let metadata: GoogleBooksMetadata = response
            .items
            .into_iter()
            .next()
            .unwrap()
            .volume_info
            .into();

        assert_eq!(
            metadata.description.as_deref(),
            Some("Improving the design of existing code")
        );
        assert_eq!(metadata.authors, vec!["Martin Fowler", "Kent Beck"]);
        assert_eq!(
            metadata.image_links.thumbnail.as_deref(),
            Some("http://books.google.com/thumb.jpg")
        );
        assert_eq!(
            metadata.image_links.small_thumbnail.as_deref(),
            Some("http://books.google.com/small.jpg")
        );
    }

    #[test]
    fn missing_items_decode_as_empty() {
        let response: VolumesResponse =
            serde_json::from_value(json!({ "kind": "books#volumes", "totalItems": 0 })).unwrap();

        assert!(response.items.is_empty());
    }
}
