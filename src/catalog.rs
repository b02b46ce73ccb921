//! Catalog aggregate owning all book, member and librarian records.
//!
//! The catalog is the single owner of canonical state. Entities are created
//! by the caller and handed over through the `add_*` operations; duplicate
//! ids and unknown ids are reported as soft outcomes and never abort the
//! caller, while malformed entities are rejected hard before insertion.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{CatalogError, CatalogResult, Outcome, Soft};
use crate::models::{Book, Librarian, Member};

/// Role tag used by the external caller to dispatch authentication
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Member,
    Librarian,
}

/// Aggregate root; the three registries form the serialization unit
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    books: IndexMap<u32, Book>,
    members: IndexMap<u32, Member>,
    librarians: IndexMap<u32, Librarian>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a book. Malformed books are rejected hard; a duplicate id is
    /// a reported no-op.
    pub fn add_book(&mut self, book: Book) -> CatalogResult<Outcome> {
        book.validate()
            .map_err(|e| CatalogError::invalid("book", e))?;
        if self.books.contains_key(&book.id()) {
            let soft = Soft::DuplicateBook(book.id());
            tracing::warn!(book_id = book.id(), "{}", soft);
            return Ok(Outcome::Skipped(soft));
        }
        self.books.insert(book.id(), book);
        Ok(Outcome::Applied)
    }

    /// Remove a book by id; an unknown id is a reported no-op.
    pub fn remove_book(&mut self, book_id: u32) -> Outcome {
        if self.books.shift_remove(&book_id).is_some() {
            return Outcome::Applied;
        }
        let soft = Soft::BookNotFound(book_id);
        tracing::warn!(book_id, "{}", soft);
        Outcome::Skipped(soft)
    }

    /// Register a member; same duplicate policy as [`Catalog::add_book`].
    pub fn add_member(&mut self, member: Member) -> CatalogResult<Outcome> {
        member
            .validate()
            .map_err(|e| CatalogError::invalid("member", e))?;
        if self.members.contains_key(&member.id()) {
            let soft = Soft::DuplicateMember(member.id());
            tracing::warn!(member_id = member.id(), "{}", soft);
            return Ok(Outcome::Skipped(soft));
        }
        self.members.insert(member.id(), member);
        Ok(Outcome::Applied)
    }

    /// Deregister a member; an unknown id is a reported no-op.
    pub fn remove_member(&mut self, member_id: u32) -> Outcome {
        if self.members.shift_remove(&member_id).is_some() {
            return Outcome::Applied;
        }
        let soft = Soft::MemberNotFound(member_id);
        tracing::warn!(member_id, "{}", soft);
        Outcome::Skipped(soft)
    }

    /// Register a librarian; same duplicate policy as [`Catalog::add_book`].
    /// Librarian removal is not exposed.
    pub fn add_librarian(&mut self, librarian: Librarian) -> CatalogResult<Outcome> {
        librarian
            .validate()
            .map_err(|e| CatalogError::invalid("librarian", e))?;
        if self.librarians.contains_key(&librarian.id()) {
            let soft = Soft::DuplicateLibrarian(librarian.id());
            tracing::warn!(librarian_id = librarian.id(), "{}", soft);
            return Ok(Outcome::Skipped(soft));
        }
        self.librarians.insert(librarian.id(), librarian);
        Ok(Outcome::Applied)
    }

    /// Snapshot of all books, id to description, in insertion order.
    pub fn list_books(&self) -> IndexMap<u32, String> {
        self.books
            .iter()
            .map(|(id, book)| (*id, book.describe()))
            .collect()
    }

    /// Snapshot of all members, id to name, in insertion order.
    pub fn list_members(&self) -> IndexMap<u32, String> {
        self.members
            .iter()
            .map(|(id, member)| (*id, member.name().to_string()))
            .collect()
    }

    pub fn find_book(&self, book_id: u32) -> Option<&Book> {
        self.books.get(&book_id)
    }

    pub fn find_member(&self, member_id: u32) -> Option<&Member> {
        self.members.get(&member_id)
    }

    pub fn find_member_mut(&mut self, member_id: u32) -> Option<&mut Member> {
        self.members.get_mut(&member_id)
    }

    pub fn find_librarian(&self, librarian_id: u32) -> Option<&Librarian> {
        self.librarians.get(&librarian_id)
    }

    pub fn find_librarian_mut(&mut self, librarian_id: u32) -> Option<&mut Librarian> {
        self.librarians.get_mut(&librarian_id)
    }

    /// Borrow a catalog book on behalf of a registered member.
    ///
    /// Unknown member or book ids are reported softly; the borrow rules
    /// themselves (limit, availability) fail hard via the member operation.
    pub fn checkout(&mut self, member_id: u32, book_id: u32) -> CatalogResult<Outcome> {
        let Some(member) = self.members.get_mut(&member_id) else {
            let soft = Soft::MemberNotFound(member_id);
            tracing::warn!(member_id, "{}", soft);
            return Ok(Outcome::Skipped(soft));
        };
        let Some(book) = self.books.get_mut(&book_id) else {
            let soft = Soft::BookNotFound(book_id);
            tracing::warn!(book_id, "{}", soft);
            return Ok(Outcome::Skipped(soft));
        };
        member.borrow_book(book)?;
        Ok(Outcome::Applied)
    }

    /// Return a catalog book on behalf of a registered member.
    pub fn checkin(&mut self, member_id: u32, book_id: u32) -> CatalogResult<Outcome> {
        let Some(member) = self.members.get_mut(&member_id) else {
            let soft = Soft::MemberNotFound(member_id);
            tracing::warn!(member_id, "{}", soft);
            return Ok(Outcome::Skipped(soft));
        };
        let Some(book) = self.books.get_mut(&book_id) else {
            let soft = Soft::BookNotFound(book_id);
            tracing::warn!(book_id, "{}", soft);
            return Ok(Outcome::Skipped(soft));
        };
        member.return_book(book)
    }

    /// Exact-match credential check for the external caller.
    ///
    /// True only when an entity with the given role and id exists and the
    /// supplied password matches the stored one, case-sensitively. Passwords
    /// are compared in plain form by design; hashing is out of scope.
    pub fn authenticate(&self, role: Role, id: u32, password: &str) -> bool {
        match role {
            Role::Member => self
                .members
                .get(&id)
                .is_some_and(|m| m.verify_password(password)),
            Role::Librarian => self
                .librarians
                .get(&id)
                .is_some_and(|l| l.verify_password(password)),
        }
    }
}

/// A catalog pre-loaded with the demo data set: ten books, two members
/// (Alice, Bob) and one librarian (Charlie).
pub fn sample_catalog() -> CatalogResult<Catalog> {
    let mut catalog = Catalog::new();

    let books = [
        // Classics
        Book::new("The Great Gatsby", "F. Scott Fitzgerald", 1),
        Book::new("1984", "George Orwell", 2),
        Book::new("Brave New World", "Aldous Huxley", 3),
        Book::new("To Kill a Mockingbird", "Harper Lee", 4),
        // Popular moderns
        Book::new("The Hunger Games", "Suzanne Collins", 5),
        Book::new("Harry Potter and the Sorcerer's Stone", "J.K. Rowling", 6),
        // Non-fiction
        Book::new("Sapiens", "Yuval Noah Harari", 7),
        Book::new("Atomic Habits", "James Clear", 8),
        // Additional various
        Book::new("The Lord of the Rings", "J.R.R. Tolkien", 9),
        Book::new("The Martian", "Andy Weir", 10),
    ];
    for book in books {
        catalog.add_book(book)?;
    }

    catalog.add_member(Member::new("Alice", "secure123", 1001))?;
    catalog.add_member(Member::new("Bob", "password456", 1002))?;
    catalog.add_librarian(Librarian::new("Charlie", "admin123", 2001))?;

    Ok(catalog)
}
