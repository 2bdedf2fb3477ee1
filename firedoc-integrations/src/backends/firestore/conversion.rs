//! Data type conversions between firedoc and Firestore types.
//!
//! Firestore documents carry their fields in the wire format and their
//! identity as a full resource name
//! (`projects/<p>/databases/<db>/documents/<relative path>`). This module
//! converts them into the facade's path-addressed JSON snapshots.

use chrono::{DateTime, TimeZone, Utc};
use firestore::{FirestoreDocument, firestore_document_to_serializable};

use firedoc_core::{
    Result,
    types::{DocumentPath, DocumentSnapshot, Properties},
};

use super::error::map_firestore_error;

/// Extract the path relative to the database's documents root from a
/// Firestore resource name.
pub fn relative_path(resource_name: &str) -> Result<DocumentPath> {
    let relative = resource_name
        .split_once("/documents/")
        .map_or(resource_name, |(_, rest)| rest);
    DocumentPath::parse(relative)
}

/// Convert a protobuf timestamp into a UTC datetime.
pub fn timestamp_to_datetime(seconds: i64, nanos: i32) -> Option<DateTime<Utc>> {
    Utc.timestamp_opt(seconds, u32::try_from(nanos).unwrap_or(0)).single()
}

/// Convert a raw Firestore document into a facade snapshot.
///
/// # Errors
///
/// Returns an error if the resource name does not address a document or
/// the field values cannot be represented as a JSON mapping.
pub fn document_to_snapshot(document: &FirestoreDocument) -> Result<DocumentSnapshot> {
    let path = relative_path(&document.name)?;
    let properties: Properties =
        firestore_document_to_serializable(document).map_err(map_firestore_error)?;
    let update_time = document
        .update_time
        .as_ref()
        .and_then(|t| timestamp_to_datetime(t.seconds, t.nanos));

    Ok(DocumentSnapshot::new(path, properties, update_time))
}

/// The update timestamp of a raw document, when present.
pub fn document_update_time(document: &FirestoreDocument) -> Option<DateTime<Utc>> {
    document
        .update_time
        .as_ref()
        .and_then(|t| timestamp_to_datetime(t.seconds, t.nanos))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_path_strips_resource_prefix() {
        let path = relative_path(
            "projects/demo/databases/(default)/documents/apps/myapp/Task/42",
        )
        .unwrap();
        assert_eq!(path.as_str(), "apps/myapp/Task/42");
    }

    #[test]
    fn test_relative_path_accepts_already_relative() {
        let path = relative_path("apps/myapp/Task/42").unwrap();
        assert_eq!(path.as_str(), "apps/myapp/Task/42");
    }

    #[test]
    fn test_relative_path_rejects_collection_resource() {
        let result = relative_path("projects/demo/databases/(default)/documents/apps/myapp/Task");
        assert!(result.is_err());
    }

    #[test]
    fn test_timestamp_conversion() {
        let datetime = timestamp_to_datetime(0, 0).unwrap();
        assert_eq!(datetime.timestamp(), 0);

        let datetime = timestamp_to_datetime(1_700_000_000, 500_000_000).unwrap();
        assert_eq!(datetime.timestamp(), 1_700_000_000);
    }
}
