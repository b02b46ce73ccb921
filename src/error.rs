//! Error and outcome types for the catalog core.
//!
//! Two failure policies coexist: hard failures abort an operation and are
//! returned as `Err(CatalogError)`; soft failures leave state unchanged and
//! are returned as `Ok(Outcome::Skipped(..))` so callers can observe them
//! without parsing log output.

use std::fmt;

use thiserror::Error;

/// Main application error type (hard failures only)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Invalid {entity}: {reason}")]
    InvalidEntity { entity: &'static str, reason: String },

    #[error("Book is already returned")]
    AlreadyReturned,

    #[error("{name} has reached the borrowing limit of {limit}")]
    BorrowLimitExceeded { name: String, limit: usize },

    #[error("'{title}' is not available")]
    BookUnavailable { title: String },

    #[error("Password must be at least {min} characters long")]
    WeakPassword { min: usize },
}

/// Result type alias for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Outcome of an operation that may no-op instead of failing.
///
/// Duplicate ids on add, unknown ids on remove and similar conditions are
/// deliberately non-fatal: the catalog reports them and continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// State was mutated.
    Applied,
    /// Nothing was mutated; the reason is reported.
    Skipped(Soft),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }
}

/// Soft-failure reasons, each with its user-visible informational message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Soft {
    DuplicateBook(u32),
    DuplicateMember(u32),
    DuplicateLibrarian(u32),
    BookNotFound(u32),
    MemberNotFound(u32),
    NotBorrowed(u32),
}

impl fmt::Display for Soft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Soft::DuplicateBook(_) => write!(f, "This book is already in the library."),
            Soft::DuplicateMember(_) => write!(f, "This member is already registered."),
            Soft::DuplicateLibrarian(_) => write!(f, "This librarian is already registered."),
            Soft::BookNotFound(_) => write!(f, "Book not found in the library."),
            Soft::MemberNotFound(_) => write!(f, "Member not found in the library."),
            Soft::NotBorrowed(_) => write!(f, "This book was not borrowed by this member."),
        }
    }
}

impl CatalogError {
    /// Wrap a validation failure for the named entity kind.
    pub(crate) fn invalid(entity: &'static str, errors: validator::ValidationErrors) -> Self {
        CatalogError::InvalidEntity {
            entity,
            reason: errors.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn soft_messages_are_stable() {
        assert_eq!(
            Soft::DuplicateBook(1).to_string(),
            "This book is already in the library."
        );
        assert_eq!(
            Soft::NotBorrowed(2).to_string(),
            "This book was not borrowed by this member."
        );
    }

    #[test]
    fn outcome_applied_flag() {
        assert!(Outcome::Applied.is_applied());
        assert!(!Outcome::Skipped(Soft::BookNotFound(9)).is_applied());
    }
}
