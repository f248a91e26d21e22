pub mod api;
pub mod config;
pub mod error;
pub mod google_books;
pub mod metrics;
pub mod transport;

pub use api::LibraryClient;
pub use config::{ClientConfig, GoogleBooksConfig};
pub use error::{ClientError, Result};
pub use google_books::{normalize_isbn, GoogleBooks};
pub use metrics::Availability;
pub use transport::{ApiRequest, ReqwestTransport, Transport};
