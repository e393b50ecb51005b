use serde::{Deserialize, Serialize}; // For document fields
use std::fmt;
use time::OffsetDateTime;
use uuid::Uuid;

// --- Document ID ---

/// Identifier of a stored document.
///
/// A blank id (empty or whitespace-only) marks a document that has not been
/// stored yet; the store assigns a generated id on first save.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(id: String) -> Self {
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the id is empty or contains only whitespace.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Generates a fresh random id. Uniqueness is probabilistic (v4 UUID),
    /// not enforced by a secondary index.
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl From<String> for DocumentId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

impl From<&str> for DocumentId {
    fn from(id: &str) -> Self {
        Self::new(id.to_string())
    }
}

impl From<DocumentId> for String {
    fn from(doc_id: DocumentId) -> Self {
        doc_id.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// --- Author ---

/// Author of a document. The store enforces no uniqueness on authors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    pub name: String,
}

// --- Document ---

/// A stored record: identifier, title, content, author, creation instant.
///
/// Documents are plain exchange values constructed by the caller; validation
/// beyond identifier presence is out of scope. `created` is supplied by the
/// caller at first insertion and preserved by the store on later upserts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// May be blank on input; the store assigns a generated id before storing.
    #[serde(default)]
    pub id: DocumentId,
    pub title: String,
    pub content: String,
    pub author: Author,
    #[serde(with = "time::serde::rfc3339")]
    pub created: OffsetDateTime,
}
