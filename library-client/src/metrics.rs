use library_common::{checked_out_copies_of, Book, BookId, LibraryBook, LibraryId};
use serde::Serialize;
use tracing::{info, warn};

use crate::api::LibraryClient;
use crate::error::{ClientError, Result};

/// Copy counts of one book in one library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    pub library_id: LibraryId,
    pub book_id: BookId,
    pub total: i64,
    pub checked_out: i64,
    pub available: i64,
}

/// Purchased copy count of the first inventory entry for `book_id`.
pub fn total_copies_in(inventory: &[LibraryBook], book_id: BookId) -> Option<i64> {
    inventory
        .iter()
        .find(|entry| entry.book.book_id == book_id)
        .map(|entry| entry.total_purchased_by_library)
}

/// Number of entries in a checked-out listing that refer to `book_id`.
pub fn checked_out_count(checked_out: &[Book], book_id: BookId) -> i64 {
    checked_out_copies_of(checked_out, book_id).len() as i64
}

/// `total` minus the copies checked out, never below zero.
pub fn available_copies_from(total: i64, checked_out: i64) -> i64 {
    (total - checked_out).max(0)
}

impl LibraryClient {
    pub async fn total_copies(&self, library_id: LibraryId, book_id: BookId) -> Result<i64> {
        let inventory = self.inventory(library_id).await?;

        total_copies_in(&inventory, book_id).ok_or(ClientError::BookNotInInventory {
            library_id,
            book_id,
        })
    }

    pub async fn available_copies(&self, library_id: LibraryId, book_id: BookId) -> Result<i64> {
        Ok(self.availability(library_id, book_id).await?.available)
    }

    /// Fetches the checked-out listing and the total copy count concurrently
    /// and combines them once both have arrived.
    pub async fn availability(
        &self,
        library_id: LibraryId,
        book_id: BookId,
    ) -> Result<Availability> {
        info!(
            "Computing availability of book {} in library {}",
            book_id, library_id
        );

        let (checked_out_books, total) = futures::try_join!(
            self.checked_out_books(library_id),
            self.total_copies(library_id, book_id),
        )?;

        let checked_out = checked_out_count(&checked_out_books, book_id);
        if checked_out > total {
            warn!(
                "Library {} reports {} copies of book {} checked out but only owns {}",
                library_id, checked_out, book_id, total
            );
        }

        Ok(Availability {
            library_id,
            book_id,
            total,
            checked_out,
            available: available_copies_from(total, checked_out),
        })
    }
}
