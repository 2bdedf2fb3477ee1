//! Hierarchical document and collection paths.
//!
//! Paths are slash-joined segment strings mirroring the layout of a
//! hierarchical document database: collections contain documents, and
//! documents contain sub-collections. A collection path always has an odd
//! number of segments, a document path an even number (at least two).
//! Both types validate on construction, so a held value is always
//! well-formed.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{FiredocError, Result};
use crate::types::document::DocumentId;

/// Check that a single path segment is usable: non-empty and free of `/`.
fn valid_segment(segment: &str) -> bool {
    !segment.is_empty() && !segment.contains('/')
}

/// Path to a collection, e.g. `apps/myapp/Task`.
///
/// # Examples
///
/// ```rust
/// use firedoc_core::types::CollectionPath;
///
/// let path = CollectionPath::parse("apps/myapp/Task").unwrap();
/// assert_eq!(path.name(), "Task");
/// assert!(CollectionPath::parse("apps/myapp").is_err()); // document path
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CollectionPath(String);

impl CollectionPath {
    /// Parse and validate a collection path.
    ///
    /// # Errors
    ///
    /// Returns a validation error if any segment is empty or the segment
    /// count is even (which would address a document, not a collection).
    pub fn parse(path: impl Into<String>) -> Result<Self> {
        let path = path.into();
        let segments: Vec<&str> = path.split('/').collect();
        if segments.iter().any(|s| !valid_segment(s)) {
            return Err(FiredocError::validation(format!(
                "invalid path segment in '{path}'"
            )));
        }
        if segments.len() % 2 == 0 {
            return Err(FiredocError::validation(format!(
                "collection path '{path}' must have an odd number of segments"
            )));
        }
        Ok(Self(path))
    }

    /// The full path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterate over the path segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/')
    }

    /// The collection's own name (the final segment).
    pub fn name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }

    /// Path to the document with the given id inside this collection.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the id is not a usable path segment.
    pub fn doc(&self, id: &DocumentId) -> Result<DocumentPath> {
        if !valid_segment(id.as_str()) {
            return Err(FiredocError::validation(format!(
                "invalid document id '{id}'"
            )));
        }
        Ok(DocumentPath(format!("{}/{}", self.0, id)))
    }
}

impl fmt::Display for CollectionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for CollectionPath {
    type Error = FiredocError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(value)
    }
}

impl From<CollectionPath> for String {
    fn from(path: CollectionPath) -> Self {
        path.0
    }
}

/// Path to a single document, e.g. `apps/myapp/Task/42`.
///
/// The first two segments of every path the facade produces form its
/// path prefix (`<root-collection>/<objects-path>`), under which all
/// object collections live.
///
/// # Examples
///
/// ```rust
/// use firedoc_core::types::DocumentPath;
///
/// let path = DocumentPath::parse("apps/myapp/Task/42").unwrap();
/// assert_eq!(path.id().as_str(), "42");
/// assert_eq!(path.parent().as_str(), "apps/myapp/Task");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DocumentPath(String);

impl DocumentPath {
    /// Parse and validate a document path.
    ///
    /// # Errors
    ///
    /// Returns a validation error if any segment is empty or the segment
    /// count is odd (which would address a collection, not a document).
    pub fn parse(path: impl Into<String>) -> Result<Self> {
        let path = path.into();
        let segments: Vec<&str> = path.split('/').collect();
        if segments.iter().any(|s| !valid_segment(s)) {
            return Err(FiredocError::validation(format!(
                "invalid path segment in '{path}'"
            )));
        }
        if segments.len() < 2 || segments.len() % 2 != 0 {
            return Err(FiredocError::validation(format!(
                "document path '{path}' must have an even number of segments (at least two)"
            )));
        }
        Ok(Self(path))
    }

    /// The full path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterate over the path segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/')
    }

    /// The document id (the final segment).
    pub fn id(&self) -> DocumentId {
        DocumentId::new(self.0.rsplit('/').next().unwrap_or(&self.0))
    }

    /// The collection this document lives in.
    pub fn parent(&self) -> CollectionPath {
        let end = self.0.rfind('/').unwrap_or(0);
        CollectionPath(self.0[..end].to_string())
    }

    /// Path to a sub-collection directly under this document.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the name is not a usable path segment.
    pub fn collection(&self, name: &str) -> Result<CollectionPath> {
        if !valid_segment(name) {
            return Err(FiredocError::validation(format!(
                "invalid collection name '{name}'"
            )));
        }
        Ok(CollectionPath(format!("{}/{}", self.0, name)))
    }
}

impl fmt::Display for DocumentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for DocumentPath {
    type Error = FiredocError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(value)
    }
}

impl From<DocumentPath> for String {
    fn from(path: DocumentPath) -> Self {
        path.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_path_parse() {
        let path = CollectionPath::parse("apps/myapp/Task").unwrap();
        assert_eq!(path.as_str(), "apps/myapp/Task");
        assert_eq!(path.name(), "Task");
        assert_eq!(path.segments().count(), 3);

        // Root-level collections are a single segment.
        let root = CollectionPath::parse("apps").unwrap();
        assert_eq!(root.name(), "apps");
    }

    #[test]
    fn test_collection_path_rejects_document_shape() {
        assert!(CollectionPath::parse("apps/myapp").is_err());
        assert!(CollectionPath::parse("").is_err());
        assert!(CollectionPath::parse("apps//Task").is_err());
    }

    #[test]
    fn test_document_path_parse() {
        let path = DocumentPath::parse("apps/myapp/Task/42").unwrap();
        assert_eq!(path.id().as_str(), "42");
        assert_eq!(path.parent().as_str(), "apps/myapp/Task");
    }

    #[test]
    fn test_document_path_rejects_collection_shape() {
        assert!(DocumentPath::parse("apps/myapp/Task").is_err());
        assert!(DocumentPath::parse("apps").is_err());
        assert!(DocumentPath::parse("").is_err());
    }

    #[test]
    fn test_path_composition_round_trip() {
        let collection = CollectionPath::parse("apps/myapp/Task").unwrap();
        let doc = collection.doc(&DocumentId::new("42")).unwrap();
        assert_eq!(doc.as_str(), "apps/myapp/Task/42");
        assert_eq!(doc.parent(), collection);

        let sub = doc.collection("Comment").unwrap();
        assert_eq!(sub.as_str(), "apps/myapp/Task/42/Comment");
    }

    #[test]
    fn test_doc_rejects_bad_id() {
        let collection = CollectionPath::parse("apps/myapp/Task").unwrap();
        assert!(collection.doc(&DocumentId::new("a/b")).is_err());
        assert!(collection.doc(&DocumentId::new("")).is_err());
    }

    #[test]
    fn test_serde_validates() {
        let ok: CollectionPath = serde_json::from_str("\"apps/myapp/Task\"").unwrap();
        assert_eq!(ok.name(), "Task");

        let bad: std::result::Result<DocumentPath, _> =
            serde_json::from_str("\"apps/myapp/Task\"");
        assert!(bad.is_err());
    }
}
