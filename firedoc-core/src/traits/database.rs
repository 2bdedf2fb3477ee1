//! The document-database client seam.
//!
//! This module defines the trait every storage backend implements. The
//! facade is generic over it, so the same CRUD and query surface works
//! against Google Firestore, an in-memory store, or anything else that
//! can satisfy the contract.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::Result;
use crate::types::{
    CollectionPath, DocumentPath, DocumentSnapshot, EqualityFilter, Properties, WriteReceipt,
};

/// A hierarchical document database client.
///
/// Implementations must satisfy these invariants:
/// - Collections spring into existence when their first document is
///   written and need no explicit creation.
/// - `set_document` fully replaces prior content, never merges.
/// - `list_documents` and `query_equal` materialize every matching
///   document in the backend's default cursor order; an empty collection
///   yields an empty vector, never an error.
/// - All filters passed to `query_equal` apply conjunctively.
/// - Errors are typed: a missing document is `Ok(None)`/`NotFound`, never
///   conflated with transport or authentication failure.
#[async_trait]
pub trait DocumentDatabase: Send + Sync + std::fmt::Debug {
    /// Create a new document with a generated id under the collection.
    ///
    /// Returns the receipt carrying the generated id, the full path, and
    /// the write timestamp.
    async fn add_document(
        &self,
        collection: &CollectionPath,
        properties: &Properties,
    ) -> Result<WriteReceipt>;

    /// Write a document at an exact path, fully replacing prior content.
    ///
    /// Creates the document if it does not exist. Callers that require
    /// the document to already exist must check first.
    async fn set_document(
        &self,
        path: &DocumentPath,
        properties: &Properties,
    ) -> Result<WriteReceipt>;

    /// Fetch the document at the given path.
    ///
    /// Returns `Ok(None)` if no document exists there.
    async fn get_document(&self, path: &DocumentPath) -> Result<Option<DocumentSnapshot>>;

    /// Whether a document currently exists at the given path.
    ///
    /// Default implementation fetches the document; backends with a
    /// cheaper existence probe may override.
    async fn document_exists(&self, path: &DocumentPath) -> Result<bool> {
        Ok(self.get_document(path).await?.is_some())
    }

    /// Delete the document at the given path.
    ///
    /// Returns the deletion timestamp. Deleting a missing document is a
    /// `NotFound` error.
    async fn delete_document(&self, path: &DocumentPath) -> Result<DateTime<Utc>>;

    /// Materialize every document currently in the collection.
    async fn list_documents(&self, collection: &CollectionPath) -> Result<Vec<DocumentSnapshot>>;

    /// Materialize every document in the collection matching all equality
    /// filters.
    async fn query_equal(
        &self,
        collection: &CollectionPath,
        filters: &[EqualityFilter],
    ) -> Result<Vec<DocumentSnapshot>>;

    /// Check that the backend is reachable and usable.
    async fn health_check(&self) -> Result<()>;

    /// Release the client handle.
    ///
    /// Default is a no-op for backends with nothing to release.
    async fn close(&self) -> Result<()> {
        Ok(())
    }

    /// Get a human-readable name for this backend.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
