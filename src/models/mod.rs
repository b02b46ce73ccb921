//! Data models for the catalog core

pub mod book;
pub mod librarian;
pub mod member;

// Re-export commonly used types
pub use book::Book;
pub use librarian::Librarian;
pub use member::Member;

use crate::error::{CatalogError, CatalogResult};

/// Minimum accepted password length for members and librarians.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Shared password rule for the member and librarian setters.
pub(crate) fn check_password(new_password: &str) -> CatalogResult<()> {
    if new_password.chars().count() < MIN_PASSWORD_LEN {
        return Err(CatalogError::WeakPassword {
            min: MIN_PASSWORD_LEN,
        });
    }
    Ok(())
}
