pub mod model;

// Re-export commonly used types
pub use model::{
    checked_out_copies_of, Book, GoogleBooksMetadata, ImageLinks, LibraryBook, SignedOutBook,
};

// Identifiers used by both the backend API and the CLI
pub type LibraryId = i64;
pub type BookId = i64;
pub type MemberId = i64;
