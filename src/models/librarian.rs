//! Librarian model: a privileged actor delegating catalog mutations.
//!
//! A librarian owns no collections of its own. Every catalog mutation is
//! delegated to the [`Catalog`] passed into the operation, never duplicated
//! here.

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::book::Book;
use crate::catalog::Catalog;
use crate::error::{CatalogResult, Outcome};

/// A privileged actor administering a catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Librarian {
    id: u32,
    #[validate(length(min = 1, message = "Name must not be empty"))]
    name: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters long"))]
    password: String,
}

impl Librarian {
    pub fn new(name: impl Into<String>, password: impl Into<String>, id: u32) -> Self {
        Self {
            id,
            name: name.into(),
            password: password.into(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Exact-match, case-sensitive credential check.
    pub fn verify_password(&self, supplied: &str) -> bool {
        self.password == supplied
    }

    /// Replace the password; same rule as [`Member::set_password`].
    ///
    /// [`Member::set_password`]: super::Member::set_password
    pub fn set_password(&mut self, new_password: &str) -> CatalogResult<()> {
        super::check_password(new_password)?;
        self.password = new_password.to_string();
        Ok(())
    }

    /// Add a book to the catalog and confirm.
    pub fn add_book(&self, catalog: &mut Catalog, book: Book) -> CatalogResult<Outcome> {
        let title = book.title().to_string();
        let outcome = catalog.add_book(book)?;
        if outcome.is_applied() {
            tracing::info!(librarian = %self.name, book = %title, "book added to the library");
        }
        Ok(outcome)
    }

    /// Remove a book from the catalog and confirm.
    pub fn remove_book(&self, catalog: &mut Catalog, book_id: u32) -> Outcome {
        let outcome = catalog.remove_book(book_id);
        if outcome.is_applied() {
            tracing::info!(librarian = %self.name, book_id, "book removed from the library");
        }
        outcome
    }

    /// All books in the catalog, one annotated line per book.
    pub fn list_books(&self, catalog: &Catalog) -> Vec<String> {
        catalog
            .list_books()
            .iter()
            .map(|(id, line)| format!("{line} (ID: {id})"))
            .collect()
    }

    /// All registered members, one annotated line per member.
    pub fn list_members(&self, catalog: &Catalog) -> Vec<String> {
        catalog
            .list_members()
            .iter()
            .map(|(id, name)| format!("{name} (ID: {id})"))
            .collect()
    }

    /// Stable human-readable description.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Librarian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (ID: {})", self.name, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CatalogError, Soft};

    fn charlie() -> Librarian {
        Librarian::new("Charlie", "admin123", 2001)
    }

    #[test]
    fn add_and_remove_delegate_to_the_catalog() {
        let mut catalog = Catalog::new();
        let librarian = charlie();

        let outcome = librarian
            .add_book(&mut catalog, Book::new("Sapiens", "Yuval Noah Harari", 7))
            .unwrap();
        assert_eq!(outcome, Outcome::Applied);
        assert!(catalog.find_book(7).is_some());

        assert_eq!(librarian.remove_book(&mut catalog, 7), Outcome::Applied);
        assert!(catalog.find_book(7).is_none());
    }

    #[test]
    fn removing_a_missing_book_reports_not_found() {
        let mut catalog = Catalog::new();
        let librarian = charlie();

        assert_eq!(
            librarian.remove_book(&mut catalog, 99),
            Outcome::Skipped(Soft::BookNotFound(99))
        );
        assert!(catalog.list_books().is_empty());
    }

    #[test]
    fn listings_carry_id_annotations() {
        let mut catalog = Catalog::new();
        let librarian = charlie();
        librarian
            .add_book(&mut catalog, Book::new("1984", "George Orwell", 2))
            .unwrap();

        assert_eq!(
            librarian.list_books(&catalog),
            vec!["(ID: 2) 1984 by George Orwell - Available (ID: 2)".to_string()]
        );
    }

    #[test]
    fn password_rule_matches_members() {
        let mut librarian = charlie();
        assert_eq!(
            librarian.set_password("short"),
            Err(CatalogError::WeakPassword { min: 6 })
        );
        assert!(librarian.verify_password("admin123"));
        librarian.set_password("longenough").unwrap();
        assert!(librarian.verify_password("longenough"));
    }
}
