//! In-memory document database implementation.
//!
//! This module provides a simple in-memory backend that stores all
//! documents in a path-keyed map. It's suitable for development, testing,
//! and embedding; iteration order is deterministic (lexicographic by
//! path), standing in for a real backend's default cursor order.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use firedoc_core::{
    Result,
    traits::DocumentDatabase,
    types::{
        CollectionPath, DocumentId, DocumentPath, DocumentSnapshot, EqualityFilter, Properties,
        WriteReceipt,
    },
};
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};
use tracing::{debug, info};
use uuid::Uuid;

/// One stored document: its fields plus the last write time.
#[derive(Debug, Clone)]
struct StoredDocument {
    properties: Properties,
    updated_at: DateTime<Utc>,
}

/// In-memory document database.
///
/// Documents are kept in a `BTreeMap` keyed by full path, so collection
/// listings come back in lexicographic path order. Cloning the backend
/// clones the handle, not the data; clones share storage.
///
/// # Examples
///
/// ```rust
/// use firedoc_integrations::MemoryDatabase;
///
/// let db = MemoryDatabase::new();
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryDatabase {
    /// Storage for documents indexed by full path.
    documents: Arc<RwLock<BTreeMap<String, StoredDocument>>>,
}

impl MemoryDatabase {
    /// Create an empty in-memory database.
    pub fn new() -> Self {
        info!("Creating MemoryDatabase");
        Self::default()
    }

    /// Total number of documents currently stored, across all collections.
    pub fn len(&self) -> usize {
        self.documents.read().unwrap().len()
    }

    /// Whether the database holds no documents at all.
    pub fn is_empty(&self) -> bool {
        self.documents.read().unwrap().is_empty()
    }

    /// Collect the documents directly inside a collection.
    ///
    /// Documents in sub-collections of the collection's documents are not
    /// included; only paths whose remainder past the collection is a
    /// single segment qualify.
    fn collect_collection(&self, collection: &CollectionPath) -> Result<Vec<DocumentSnapshot>> {
        let storage = self.documents.read().unwrap();
        let prefix = format!("{}/", collection.as_str());

        let mut snapshots = Vec::new();
        for (path, stored) in storage.range(prefix.clone()..) {
            let Some(remainder) = path.strip_prefix(&prefix) else {
                break;
            };
            if remainder.contains('/') {
                continue;
            }
            snapshots.push(DocumentSnapshot::new(
                DocumentPath::parse(path.clone())?,
                stored.properties.clone(),
                Some(stored.updated_at),
            ));
        }
        Ok(snapshots)
    }
}

#[async_trait]
impl DocumentDatabase for MemoryDatabase {
    async fn add_document(
        &self,
        collection: &CollectionPath,
        properties: &Properties,
    ) -> Result<WriteReceipt> {
        let id = DocumentId::new(Uuid::new_v4().to_string());
        let path = collection.doc(&id)?;
        let now = Utc::now();

        debug!("Adding document {} to MemoryDatabase", path);

        let mut storage = self.documents.write().unwrap();
        storage.insert(
            path.as_str().to_string(),
            StoredDocument {
                properties: properties.clone(),
                updated_at: now,
            },
        );

        Ok(WriteReceipt {
            id,
            path,
            write_time: now,
        })
    }

    async fn set_document(
        &self,
        path: &DocumentPath,
        properties: &Properties,
    ) -> Result<WriteReceipt> {
        let now = Utc::now();

        debug!("Setting document {} in MemoryDatabase", path);

        let mut storage = self.documents.write().unwrap();
        storage.insert(
            path.as_str().to_string(),
            StoredDocument {
                properties: properties.clone(),
                updated_at: now,
            },
        );

        Ok(WriteReceipt {
            id: path.id(),
            path: path.clone(),
            write_time: now,
        })
    }

    async fn get_document(&self, path: &DocumentPath) -> Result<Option<DocumentSnapshot>> {
        let storage = self.documents.read().unwrap();
        Ok(storage.get(path.as_str()).map(|stored| {
            DocumentSnapshot::new(
                path.clone(),
                stored.properties.clone(),
                Some(stored.updated_at),
            )
        }))
    }

    async fn delete_document(&self, path: &DocumentPath) -> Result<DateTime<Utc>> {
        debug!("Deleting document {} from MemoryDatabase", path);

        let mut storage = self.documents.write().unwrap();
        match storage.remove(path.as_str()) {
            Some(_) => Ok(Utc::now()),
            None => Err(firedoc_core::FiredocError::not_found(path.as_str())),
        }
    }

    async fn list_documents(&self, collection: &CollectionPath) -> Result<Vec<DocumentSnapshot>> {
        let snapshots = self.collect_collection(collection)?;
        debug!(
            "Listed {} documents from collection '{}'",
            snapshots.len(),
            collection
        );
        Ok(snapshots)
    }

    async fn query_equal(
        &self,
        collection: &CollectionPath,
        filters: &[EqualityFilter],
    ) -> Result<Vec<DocumentSnapshot>> {
        let snapshots = self.collect_collection(collection)?;
        let matched: Vec<DocumentSnapshot> = snapshots
            .into_iter()
            .filter(|snapshot| filters.iter().all(|f| f.matches(&snapshot.properties)))
            .collect();

        debug!(
            "Query matched {} documents in collection '{}' with {} filters",
            matched.len(),
            collection,
            filters.len()
        );
        Ok(matched)
    }

    async fn health_check(&self) -> Result<()> {
        // For the in-memory store, health means the lock is usable.
        let _storage = self.documents.read().unwrap();
        debug!("MemoryDatabase health check passed");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "MemoryDatabase"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn props(pairs: &[(&str, serde_json::Value)]) -> Properties {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), v.clone()))
            .collect()
    }

    fn collection() -> CollectionPath {
        CollectionPath::parse("apps/myapp/Task").unwrap()
    }

    #[tokio::test]
    async fn test_add_and_get_document() {
        let db = MemoryDatabase::new();

        let receipt = db
            .add_document(&collection(), &props(&[("x", json!(100))]))
            .await
            .unwrap();
        assert_eq!(receipt.path.parent(), collection());
        assert_eq!(receipt.path.id(), receipt.id);

        let snapshot = db.get_document(&receipt.path).await.unwrap().unwrap();
        assert_eq!(snapshot.id, receipt.id);
        assert_eq!(snapshot.get("x"), Some(&json!(100)));
        assert_eq!(db.len(), 1);
    }

    #[tokio::test]
    async fn test_set_replaces_content() {
        let db = MemoryDatabase::new();

        let receipt = db
            .add_document(&collection(), &props(&[("x", json!(100)), ("title", json!("T"))]))
            .await
            .unwrap();

        db.set_document(&receipt.path, &props(&[("y", json!(300))]))
            .await
            .unwrap();

        let snapshot = db.get_document(&receipt.path).await.unwrap().unwrap();
        assert_eq!(snapshot.properties, props(&[("y", json!(300))]));
        assert_eq!(snapshot.get("x"), None);
    }

    #[tokio::test]
    async fn test_delete_document() {
        let db = MemoryDatabase::new();

        let receipt = db
            .add_document(&collection(), &props(&[("x", json!(1))]))
            .await
            .unwrap();
        assert!(db.document_exists(&receipt.path).await.unwrap());

        db.delete_document(&receipt.path).await.unwrap();
        assert!(!db.document_exists(&receipt.path).await.unwrap());

        // Deleting again is a not-found error.
        let err = db.delete_document(&receipt.path).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_list_documents_scopes_to_collection() {
        let db = MemoryDatabase::new();
        let other = CollectionPath::parse("apps/myapp/Project").unwrap();

        db.add_document(&collection(), &props(&[("x", json!(1))]))
            .await
            .unwrap();
        db.add_document(&collection(), &props(&[("x", json!(2))]))
            .await
            .unwrap();
        db.add_document(&other, &props(&[("x", json!(3))]))
            .await
            .unwrap();

        let listed = db.list_documents(&collection()).await.unwrap();
        assert_eq!(listed.len(), 2);

        let empty = db
            .list_documents(&CollectionPath::parse("apps/myapp/Nothing").unwrap())
            .await
            .unwrap();
        assert!(empty.is_empty());
    }

    #[tokio::test]
    async fn test_list_excludes_subcollection_documents() {
        let db = MemoryDatabase::new();

        let receipt = db
            .add_document(&collection(), &props(&[("x", json!(1))]))
            .await
            .unwrap();
        let sub = receipt.path.collection("Comment").unwrap();
        db.add_document(&sub, &props(&[("text", json!("hi"))]))
            .await
            .unwrap();

        let listed = db.list_documents(&collection()).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].path, receipt.path);
    }

    #[tokio::test]
    async fn test_query_equal_is_conjunctive() {
        let db = MemoryDatabase::new();

        db.add_document(&collection(), &props(&[("x", json!(1)), ("y", json!(3))]))
            .await
            .unwrap();
        db.add_document(&collection(), &props(&[("x", json!(1)), ("y", json!(4))]))
            .await
            .unwrap();
        db.add_document(&collection(), &props(&[("x", json!(2)), ("y", json!(3))]))
            .await
            .unwrap();

        let single = db
            .query_equal(&collection(), &[EqualityFilter::new("x", json!(1))])
            .await
            .unwrap();
        assert_eq!(single.len(), 2);

        let both = db
            .query_equal(
                &collection(),
                &[
                    EqualityFilter::new("x", json!(1)),
                    EqualityFilter::new("y", json!(3)),
                ],
            )
            .await
            .unwrap();
        assert_eq!(both.len(), 1);
        assert_eq!(both[0].get("y"), Some(&json!(3)));
    }

    #[tokio::test]
    async fn test_clones_share_storage() {
        let db = MemoryDatabase::new();
        let handle = db.clone();

        db.add_document(&collection(), &props(&[("x", json!(1))]))
            .await
            .unwrap();
        assert_eq!(handle.len(), 1);
    }

    #[tokio::test]
    async fn test_health_check() {
        let db = MemoryDatabase::new();
        db.health_check().await.unwrap();
        db.close().await.unwrap();
    }
}
