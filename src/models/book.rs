//! Book (catalog entry) model.
//!
//! Identity fields are fixed at construction; only the availability flag
//! changes, through [`Book::borrow`] and [`Book::return_book`].

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{CatalogError, CatalogResult};

/// A catalog entry with an availability flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Book {
    id: u32,
    #[validate(length(min = 1, message = "Title must not be empty"))]
    title: String,
    #[validate(length(min = 1, message = "Author must not be empty"))]
    author: String,
    available: bool,
}

impl Book {
    /// Create a new, available book.
    pub fn new(title: impl Into<String>, author: impl Into<String>, id: u32) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            available: true,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Mark the book as borrowed.
    ///
    /// Returns `true` on the available-to-borrowed transition and `false`
    /// when the book is already out, without raising an error.
    pub fn borrow(&mut self) -> bool {
        if self.available {
            self.available = false;
            return true;
        }
        false
    }

    /// Mark the book as available again.
    ///
    /// Returning a book that is already on the shelf is a hard error.
    pub fn return_book(&mut self) -> CatalogResult<()> {
        if self.available {
            return Err(CatalogError::AlreadyReturned);
        }
        self.available = true;
        Ok(())
    }

    /// Stable human-readable description, as shown in listings.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(ID: {}) {} by {} - {}",
            self.id,
            self.title,
            self.author,
            if self.available {
                "Available"
            } else {
                "Not Available"
            }
        )
    }
}
