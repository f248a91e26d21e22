use std::sync::Arc;

use library_common::{Book, BookId, LibraryBook, LibraryId, MemberId, SignedOutBook};
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::{debug, info};

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::transport::{ApiRequest, ReqwestTransport, Transport};

/// Client for the library backend's `/libraries` resource.
#[derive(Clone)]
pub struct LibraryClient {
    transport: Arc<dyn Transport>,
    libraries_url: Url,
}

impl LibraryClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Self::with_transport(config, Arc::new(ReqwestTransport::new()))
    }

    pub fn with_transport(config: &ClientConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        Ok(Self {
            transport,
            libraries_url: config.libraries_url()?,
        })
    }

    pub async fn books(&self, library_id: LibraryId) -> Result<Vec<Book>> {
        info!("Fetching books of library {}", library_id);
        self.get(self.url(library_id, &["books"])?).await
    }

    /// Same endpoint as [`LibraryClient::books`], read with per-library copy counts.
    pub async fn inventory(&self, library_id: LibraryId) -> Result<Vec<LibraryBook>> {
        info!("Fetching inventory of library {}", library_id);
        let inventory: Vec<LibraryBook> = self.get(self.url(library_id, &["books"])?).await?;
        debug!("Library {} holds {} titles", library_id, inventory.len());
        Ok(inventory)
    }

    pub async fn book(&self, library_id: LibraryId, book_id: BookId) -> Result<Book> {
        info!("Fetching book {} of library {}", book_id, library_id);
        self.get(self.url(library_id, &["books", &book_id.to_string()])?)
            .await
    }

    pub async fn available_books(&self, library_id: LibraryId) -> Result<Vec<Book>> {
        info!("Fetching available books of library {}", library_id);
        self.get(self.url(library_id, &["books", "available"])?)
            .await
    }

    pub async fn checked_out_books(&self, library_id: LibraryId) -> Result<Vec<Book>> {
        info!("Fetching checked out books of library {}", library_id);
        let books: Vec<Book> = self
            .get(self.url(library_id, &["books", "checkedout"])?)
            .await?;
        debug!("Library {} has {} books checked out", library_id, books.len());
        Ok(books)
    }

    pub async fn check_out_book(
        &self,
        library_id: LibraryId,
        book_id: BookId,
        member_id: MemberId,
    ) -> Result<SignedOutBook> {
        info!(
            "Checking out book {} from library {} for member {}",
            book_id, library_id, member_id
        );

        let url = self.url(
            library_id,
            &["books", &book_id.to_string(), "signout", &member_id.to_string()],
        )?;
        self.send(ApiRequest::post(url, json!({}))).await
    }

    pub async fn return_book(
        &self,
        library_id: LibraryId,
        book_id: BookId,
        member_id: MemberId,
    ) -> Result<SignedOutBook> {
        info!(
            "Returning book {} to library {} for member {}",
            book_id, library_id, member_id
        );

        let url = self.url(
            library_id,
            &["books", &book_id.to_string(), "return", &member_id.to_string()],
        )?;
        self.send(ApiRequest::put(url, json!({}))).await
    }

    fn url(&self, library_id: LibraryId, segments: &[&str]) -> Result<Url> {
        let mut url = self.libraries_url.clone();

        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidBaseUrl(self.libraries_url.to_string()))?
            .push(&library_id.to_string())
            .extend(segments);

        Ok(url)
    }

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        self.send(ApiRequest::get(url)).await
    }

    async fn send<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let raw = self.transport.send(request).await?;
        Ok(serde_json::from_value(raw)?)
    }
}
