//! Member (borrower) model and borrow/return rules.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::book::Book;
use crate::error::{CatalogError, CatalogResult, Outcome, Soft};

/// A borrower holding a bounded set of currently borrowed books.
///
/// The `borrowed` map keys are book ids; values are the titles, kept for
/// user-visible messages. The canonical `Book` records stay owned by the
/// catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Member {
    id: u32,
    #[validate(length(min = 1, message = "Name must not be empty"))]
    name: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters long"))]
    password: String,
    #[serde(default)]
    borrowed: IndexMap<u32, String>,
}

impl Member {
    /// Maximum number of concurrently borrowed books per member.
    pub const BORROW_LIMIT: usize = 3;

    pub fn new(name: impl Into<String>, password: impl Into<String>, id: u32) -> Self {
        Self {
            id,
            name: name.into(),
            password: password.into(),
            borrowed: IndexMap::new(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ids and titles of the books currently out with this member.
    pub fn borrowed(&self) -> &IndexMap<u32, String> {
        &self.borrowed
    }

    /// Exact-match, case-sensitive credential check.
    pub fn verify_password(&self, supplied: &str) -> bool {
        self.password == supplied
    }

    /// Replace the password; rejects anything shorter than six characters.
    pub fn set_password(&mut self, new_password: &str) -> CatalogResult<()> {
        super::check_password(new_password)?;
        self.password = new_password.to_string();
        Ok(())
    }

    /// Borrow a book, enforcing the per-member limit and availability.
    pub fn borrow_book(&mut self, book: &mut Book) -> CatalogResult<()> {
        if self.borrowed.len() >= Self::BORROW_LIMIT {
            return Err(CatalogError::BorrowLimitExceeded {
                name: self.name.clone(),
                limit: Self::BORROW_LIMIT,
            });
        }
        if !book.borrow() {
            return Err(CatalogError::BookUnavailable {
                title: book.title().to_string(),
            });
        }
        self.borrowed.insert(book.id(), book.title().to_string());
        tracing::info!(member = %self.name, book = %book.title(), "borrowed");
        Ok(())
    }

    /// Return a book. A book this member never borrowed is reported softly;
    /// an inconsistent already-available book propagates as a hard error.
    pub fn return_book(&mut self, book: &mut Book) -> CatalogResult<Outcome> {
        if !self.borrowed.contains_key(&book.id()) {
            let soft = Soft::NotBorrowed(book.id());
            tracing::warn!(member = %self.name, book_id = book.id(), "{}", soft);
            return Ok(Outcome::Skipped(soft));
        }
        book.return_book()?;
        self.borrowed.shift_remove(&book.id());
        tracing::info!(member = %self.name, book = %book.title(), "returned");
        Ok(Outcome::Applied)
    }

    /// Stable human-readable description.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (ID: {})", self.name, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member() -> Member {
        Member::new("Alice", "secure123", 1001)
    }

    #[test]
    fn borrow_limit_is_enforced() {
        let mut alice = member();
        let mut books: Vec<Book> = (1..=4)
            .map(|id| Book::new(format!("Book {id}"), "Author", id))
            .collect();

        for book in books.iter_mut().take(3) {
            alice.borrow_book(book).unwrap();
        }
        assert_eq!(alice.borrowed().len(), 3);

        let err = alice.borrow_book(&mut books[3]).unwrap_err();
        assert_eq!(
            err,
            CatalogError::BorrowLimitExceeded {
                name: "Alice".to_string(),
                limit: 3
            }
        );
        // The failed attempt must not touch the set or the book.
        assert_eq!(alice.borrowed().len(), 3);
        assert!(books[3].is_available());
    }

    #[test]
    fn borrowing_an_unavailable_book_is_a_hard_error() {
        let mut alice = member();
        let mut bob = Member::new("Bob", "password456", 1002);
        let mut book = Book::new("1984", "George Orwell", 2);

        bob.borrow_book(&mut book).unwrap();
        let err = alice.borrow_book(&mut book).unwrap_err();
        assert_eq!(
            err,
            CatalogError::BookUnavailable {
                title: "1984".to_string()
            }
        );
        assert!(alice.borrowed().is_empty());
    }

    #[test]
    fn borrow_return_round_trip() {
        let mut alice = member();
        let mut book = Book::new("1984", "George Orwell", 2);

        alice.borrow_book(&mut book).unwrap();
        assert!(!book.is_available());
        assert!(alice.borrowed().contains_key(&2));

        assert_eq!(alice.return_book(&mut book).unwrap(), Outcome::Applied);
        assert!(book.is_available());
        assert!(!alice.borrowed().contains_key(&2));

        // Returning again reports "not borrowed" without failing.
        assert_eq!(
            alice.return_book(&mut book).unwrap(),
            Outcome::Skipped(Soft::NotBorrowed(2))
        );
    }

    #[test]
    fn weak_password_is_rejected_and_old_one_kept() {
        let mut alice = member();
        assert_eq!(
            alice.set_password("abc"),
            Err(CatalogError::WeakPassword { min: 6 })
        );
        assert!(alice.verify_password("secure123"));

        alice.set_password("abcdef").unwrap();
        assert!(alice.verify_password("abcdef"));
        assert!(!alice.verify_password("secure123"));
    }

    #[test]
    fn describe_format() {
        assert_eq!(member().describe(), "Alice (ID: 1001)");
    }
}
