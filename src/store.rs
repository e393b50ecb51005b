use crate::domain::{Document, DocumentId};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::OffsetDateTime;
use tracing::{debug, instrument};

// --- Store Errors ---

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

// --- Search Request ---

/// All-optional filter specification for [`DocumentStore::search`].
///
/// Every field is independent and unconstrained when empty/absent; a
/// document must pass all four dimensions to be returned. List predicates
/// are satisfied by any one of their entries; both date bounds are
/// inclusive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Case-sensitive title prefixes; a document matches if its title
    /// starts with at least one of them.
    #[serde(default)]
    pub title_prefixes: Vec<String>,
    /// Case-sensitive content substrings; a document matches if its content
    /// contains at least one of them.
    #[serde(default)]
    pub contains_contents: Vec<String>,
    /// Exact author ids; a document matches if its author id is listed.
    #[serde(default)]
    pub author_ids: Vec<String>,
    /// Inclusive lower bound on the creation instant.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_from: Option<OffsetDateTime>,
    /// Inclusive upper bound on the creation instant.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_to: Option<OffsetDateTime>,
}

// --- Document Store ---

/// Authoritative in-memory collection of documents.
///
/// Owns a `Vec<Document>` because insertion order is part of the contract:
/// new documents are appended, updated documents keep their position, and
/// lookups/searches scan linearly (fine at the intended scale).
///
/// The store is single-threaded by contract. Callers needing concurrent
/// access must serialize externally (mutex-guarded handle or a
/// single-owner actor); the store itself takes `&mut self` for mutation
/// and never locks.
#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    documents: Vec<Document>,
}

impl DocumentStore {
    /// Creates a store with an empty backing collection.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Upserts a document.
    ///
    /// An absent document is rejected with [`StoreError::InvalidArgument`]
    /// and leaves the collection untouched. A blank id is replaced with a
    /// generated one before storing. If an entry with the same id already
    /// exists it is replaced in place, keeping its position and its
    /// original `created` instant; otherwise the document is appended.
    ///
    /// Returns the stored document, id assigned and `created` resolved.
    #[instrument(skip(self, document))]
    pub fn save(&mut self, document: Option<Document>) -> Result<Document, StoreError> {
        let mut document = document.ok_or_else(|| {
            StoreError::InvalidArgument("document must be present".to_string())
        })?;

        if document.id.is_blank() {
            document.id = DocumentId::random();
            debug!(doc_id = %document.id, "Assigned generated id to document");
        }

        match self
            .documents
            .iter()
            .position(|existing| existing.id == document.id)
        {
            Some(index) => {
                // Upsert of a known id never moves the entry and never
                // rewrites its creation instant.
                document.created = self.documents[index].created;
                debug!(doc_id = %document.id, index, "Replacing existing document in place");
                self.documents[index] = document.clone();
            }
            None => {
                debug!(doc_id = %document.id, "Appending new document");
                self.documents.push(document.clone());
            }
        }

        Ok(document)
    }

    /// Returns the first stored document with the given id, if any.
    #[instrument(skip(self))]
    pub fn find_by_id(&self, id: &str) -> Option<&Document> {
        self.documents.iter().find(|doc| doc.id.as_str() == id)
    }

    /// Returns every stored document matching the request, in storage order.
    ///
    /// An absent request yields an empty list even when documents exist;
    /// this is a deliberate short-circuit, not an error. Otherwise a
    /// document is returned only if it passes all four predicates.
    #[instrument(skip(self, request))]
    pub fn search(&self, request: Option<&SearchRequest>) -> Vec<Document> {
        let Some(request) = request else {
            debug!("Search called without a request; returning empty result");
            return Vec::new();
        };

        let matches: Vec<Document> = self
            .documents
            .iter()
            .filter(|doc| matches_title_prefixes(doc, &request.title_prefixes))
            .filter(|doc| matches_authors(doc, &request.author_ids))
            .filter(|doc| matches_contents(doc, &request.contains_contents))
            .filter(|doc| matches_created_range(doc, request.created_from, request.created_to))
            .cloned()
            .collect();

        debug!(
            total = self.documents.len(),
            matched = matches.len(),
            "Search finished"
        );
        matches
    }
}

// --- Predicate helpers ---

fn matches_title_prefixes(doc: &Document, prefixes: &[String]) -> bool {
    if prefixes.is_empty() {
        return true;
    }
    prefixes.iter().any(|prefix| doc.title.starts_with(prefix))
}

fn matches_authors(doc: &Document, author_ids: &[String]) -> bool {
    if author_ids.is_empty() {
        return true;
    }
    author_ids.iter().any(|id| doc.author.id == *id)
}

fn matches_contents(doc: &Document, substrings: &[String]) -> bool {
    if substrings.is_empty() {
        return true;
    }
    substrings.iter().any(|needle| doc.content.contains(needle))
}

fn matches_created_range(
    doc: &Document,
    from: Option<OffsetDateTime>,
    to: Option<OffsetDateTime>,
) -> bool {
    if let Some(from) = from {
        if doc.created < from {
            return false;
        }
    }
    if let Some(to) = to {
        if doc.created > to {
            return false;
        }
    }
    true
}
