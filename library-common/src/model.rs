use chrono::{DateTime, Utc};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{BookId, LibraryId, MemberId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub book_id: BookId,
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub isbn: Option<String>,
    pub date_of_publication: Option<DateTime<Utc>>,
}

/// A book as held by one library, annotated with how many copies it bought.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryBook {
    pub library_id: Option<LibraryId>,
    pub book: Book,
    pub total_purchased_by_library: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedOutBook {
    pub signed_out_id: Option<i64>,
    pub book_id: BookId,
    pub library_id: LibraryId,
    pub member_id: MemberId,
    pub when_signed_out: Option<DateTime<Utc>>,
    pub when_returned: Option<DateTime<Utc>>,
}

impl SignedOutBook {
    pub fn is_returned(&self) -> bool {
        self.when_returned.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageLinks {
    pub thumbnail: Option<String>,
    pub small_thumbnail: Option<String>,
}

/// The subset of a Google Books volume the library front end displays.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleBooksMetadata {
    pub description: Option<String>,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub image_links: ImageLinks,
}

/// Entries of a checked-out listing that refer to `book_id`.
///
/// The backend reports one entry per outstanding copy, so the length of the
/// result is the number of copies currently out.
pub fn checked_out_copies_of(checked_out: &[Book], book_id: BookId) -> Vec<&Book> {
    checked_out
        .iter()
        .filter(|b| b.book_id == book_id)
        .collect_vec()
}
