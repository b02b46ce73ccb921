//! Bibliotek Library Catalog Core
//!
//! A single-process, in-memory library catalog: it tracks books, members and
//! librarians and enforces the borrowing rules (availability, per-member
//! borrow limit). Front-ends are external callers that drive the operations
//! exposed here and render their results; all state is process-lifetime only.

pub mod catalog;
pub mod error;
pub mod models;

pub use catalog::{Catalog, Role};
pub use error::{CatalogError, CatalogResult, Outcome, Soft};
pub use models::{Book, Librarian, Member};
