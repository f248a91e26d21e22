use library_common::{BookId, LibraryId};
use reqwest::{StatusCode, Url};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Request error {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected response {status} from {url}")]
    UnexpectedStatus { status: StatusCode, url: Url },

    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid base url {0}, it cannot carry path segments")]
    InvalidBaseUrl(String),

    /// Copy counts were requested for a book the library does not hold.
    #[error("Book {book_id} is not in the inventory of library {library_id}")]
    BookNotInInventory {
        library_id: LibraryId,
        book_id: BookId,
    },

    #[error("No Google Books volume found for isbn {isbn}")]
    NoMetadata { isbn: String },

    #[error("Invalid isbn {0:?}, it contains no digits")]
    InvalidIsbn(String),
}

pub type Result<T> = std::result::Result<T, ClientError>;
