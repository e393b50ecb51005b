//! In-memory document repository: upsert, point lookup by id, and
//! multi-predicate search over a small collection of documents.
//!
//! The store is a plain owning type with no persistence, no indexing and no
//! internal locking; callers that need concurrent access must serialize it
//! externally. See [`DocumentStore`] for the three operations.

pub mod domain;
pub mod store;

pub use domain::{Author, Document, DocumentId};
pub use store::{DocumentStore, SearchRequest, StoreError};
