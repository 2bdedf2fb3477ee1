//! Document identities, snapshots, and operation receipts.
//!
//! Documents are arbitrary string-keyed JSON mappings identified by an id
//! and a full hierarchical path. Ids and paths are assigned by the backing
//! database, never by the facade. Receipts carry the database-reported
//! timestamps for mutating operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::path::DocumentPath;

/// Arbitrary string-keyed document contents.
///
/// The facade performs no schema validation; the type itself is the only
/// constraint ("is it a mapping").
pub type Properties = serde_json::Map<String, serde_json::Value>;

/// Identifier of a document within its collection.
///
/// Ids are opaque strings generated by the backing database.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    /// Create a document id from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for DocumentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for DocumentId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Point-in-time read of a stored document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSnapshot {
    /// The document's id within its collection.
    pub id: DocumentId,
    /// The document's full hierarchical path.
    pub path: DocumentPath,
    /// The stored field values at read time.
    pub properties: Properties,
    /// Last update time, when the backend reports one.
    pub update_time: Option<DateTime<Utc>>,
}

impl DocumentSnapshot {
    /// Create a snapshot; the id is derived from the path's final segment.
    pub fn new(
        path: DocumentPath,
        properties: Properties,
        update_time: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id: path.id(),
            path,
            properties,
            update_time,
        }
    }

    /// Look up a single field value.
    pub fn get(&self, field: &str) -> Option<&serde_json::Value> {
        self.properties.get(field)
    }
}

/// Receipt for a successful create or replace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WriteReceipt {
    /// Id of the written document.
    pub id: DocumentId,
    /// Full path of the written document.
    pub path: DocumentPath,
    /// Database-reported write timestamp.
    pub write_time: DateTime<Utc>,
}

/// Receipt for a successful delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteReceipt {
    /// Id of the deleted document.
    pub id: DocumentId,
    /// Full path the document occupied.
    pub path: DocumentPath,
    /// Timestamp of the deletion.
    pub delete_time: DateTime<Utc>,
}

/// Outcome of a collection-level bulk delete.
///
/// Bulk deletes are best-effort and never rolled back: documents already
/// removed stay removed even when some survive. `survivors` lists the
/// paths that were still present after their delete was attempted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PurgeOutcome {
    /// Number of documents confirmed deleted.
    pub deleted: usize,
    /// Paths of documents that survived their delete attempt.
    pub survivors: Vec<DocumentPath>,
}

impl PurgeOutcome {
    /// Whether every document in the collection was confirmed deleted.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.survivors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_snapshot_id_follows_path() {
        let path = DocumentPath::parse("apps/myapp/Task/42").unwrap();
        let mut properties = Properties::new();
        properties.insert("title".to_string(), json!("T"));

        let snapshot = DocumentSnapshot::new(path, properties, None);
        assert_eq!(snapshot.id.as_str(), "42");
        assert_eq!(snapshot.get("title"), Some(&json!("T")));
        assert_eq!(snapshot.get("missing"), None);
    }

    #[test]
    fn test_purge_outcome_completeness() {
        let complete = PurgeOutcome {
            deleted: 3,
            survivors: vec![],
        };
        assert!(complete.is_complete());

        let partial = PurgeOutcome {
            deleted: 2,
            survivors: vec![DocumentPath::parse("apps/myapp/Task/42").unwrap()],
        };
        assert!(!partial.is_complete());
    }
}
