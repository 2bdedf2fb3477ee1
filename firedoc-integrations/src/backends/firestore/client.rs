//! Firestore client management and the `DocumentDatabase` implementation.
//!
//! This module wraps the `firestore` crate's `FirestoreDb` handle,
//! translating the facade's path-addressed operations into fluent client
//! calls: the final path segment selects the collection id, the leading
//! segments become the parent document path.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use firestore::{FirestoreDb, FirestoreDbOptions, FirestoreDocument, ParentPathBuilder};
use std::path::PathBuf;
use tracing::{debug, error, info};
use uuid::Uuid;

use firedoc_core::{
    FiredocError, Result, StoreConfig,
    traits::DocumentDatabase,
    types::{
        CollectionPath, DocumentId, DocumentPath, DocumentSnapshot, EqualityFilter, Properties,
        WriteReceipt,
    },
};

use super::conversion::{document_to_snapshot, document_update_time};
use super::error::map_firestore_error;

/// Google Firestore document database.
///
/// Holds one connected `FirestoreDb` handle. Document ids generated by
/// this backend are UUIDs minted at write time, which Firestore accepts
/// as caller-chosen ids; everything else (paths, timestamps) is reported
/// by the database.
pub struct FirestoreDatabase {
    /// The underlying Firestore client.
    db: FirestoreDb,
}

impl std::fmt::Debug for FirestoreDatabase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FirestoreDatabase").finish()
    }
}

impl FirestoreDatabase {
    /// Connect to Firestore for the given project.
    ///
    /// With `credentials_file` set, the service-account key file is used;
    /// otherwise ambient (application default) credentials apply.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be constructed or the
    /// credentials are unusable.
    pub async fn connect(
        project_id: impl Into<String>,
        credentials_file: Option<PathBuf>,
    ) -> Result<Self> {
        let project_id = project_id.into();
        info!("Connecting FirestoreDatabase for project '{}'", project_id);

        let options = FirestoreDbOptions::new(project_id);
        let db = match credentials_file {
            Some(path) => {
                debug!("Using service account key file '{}'", path.display());
                FirestoreDb::with_options_service_account_key_file(options, path).await
            }
            None => {
                debug!("Using ambient application default credentials");
                FirestoreDb::with_options(options).await
            }
        }
        .map_err(|e| {
            error!("Failed to create Firestore client: {}", e);
            map_firestore_error(e)
        })?;

        info!("FirestoreDatabase connected");
        Ok(Self { db })
    }

    /// Connect using the credentials named in a facade configuration.
    pub async fn connect_with_config(
        project_id: impl Into<String>,
        config: &StoreConfig,
    ) -> Result<Self> {
        Self::connect(project_id, config.credentials_file.clone()).await
    }

    /// Get the underlying Firestore client for operations not covered by
    /// the facade surface.
    pub fn db(&self) -> &FirestoreDb {
        &self.db
    }

    /// Split a collection path into its parent document path (if nested)
    /// and its own collection id.
    fn parent_and_leaf<'a>(
        &self,
        collection: &'a CollectionPath,
    ) -> Result<(Option<ParentPathBuilder>, &'a str)> {
        let segments: Vec<&str> = collection.segments().collect();
        let leaf = segments[segments.len() - 1];
        if segments.len() == 1 {
            return Ok((None, leaf));
        }

        let mut parent = self
            .db
            .parent_path(segments[0], segments[1])
            .map_err(map_firestore_error)?;
        for pair in segments[2..segments.len() - 1].chunks(2) {
            parent = parent.at(pair[0], pair[1]).map_err(map_firestore_error)?;
        }
        Ok((Some(parent), leaf))
    }

    /// Fetch the raw document at a path, `None` when absent.
    async fn fetch_raw(&self, path: &DocumentPath) -> Result<Option<FirestoreDocument>> {
        let collection = path.parent();
        let id = path.id();
        let (parent, leaf) = self.parent_and_leaf(&collection)?;

        let fetched = match parent {
            Some(parent) => {
                self.db
                    .fluent()
                    .select()
                    .by_id_in(leaf)
                    .parent(parent)
                    .one(id.as_str())
                    .await
            }
            None => self.db.fluent().select().by_id_in(leaf).one(id.as_str()).await,
        };

        fetched.map_err(|e| {
            error!("Failed to fetch document '{}': {}", path, e);
            map_firestore_error(e)
        })
    }

    /// Write a document at an exact collection/id location, replacing any
    /// prior content, and return the database-reported write time.
    ///
    /// The write time comes from a follow-up read of the raw document;
    /// if that read comes back empty the local clock stands in.
    async fn write_at(
        &self,
        collection: &CollectionPath,
        id: &DocumentId,
        properties: &Properties,
    ) -> Result<DateTime<Utc>> {
        let (parent, leaf) = self.parent_and_leaf(collection)?;

        match parent {
            Some(parent) => {
                self.db
                    .fluent()
                    .update()
                    .in_col(leaf)
                    .document_id(id.as_str())
                    .parent(parent)
                    .object(properties)
                    .execute::<Properties>()
                    .await
            }
            None => {
                self.db
                    .fluent()
                    .update()
                    .in_col(leaf)
                    .document_id(id.as_str())
                    .object(properties)
                    .execute::<Properties>()
                    .await
            }
        }
        .map_err(|e| {
            error!("Failed to write document '{}/{}': {}", collection, id, e);
            map_firestore_error(e)
        })?;

        let written = self.fetch_raw(&collection.doc(id)?).await?;
        Ok(written
            .as_ref()
            .and_then(document_update_time)
            .unwrap_or_else(Utc::now))
    }
}

#[async_trait]
impl DocumentDatabase for FirestoreDatabase {
    async fn add_document(
        &self,
        collection: &CollectionPath,
        properties: &Properties,
    ) -> Result<WriteReceipt> {
        debug!("Adding document to Firestore collection '{}'", collection);

        let id = DocumentId::new(Uuid::new_v4().to_string());
        let path = collection.doc(&id)?;
        let write_time = self.write_at(collection, &id, properties).await?;

        info!("Created Firestore document '{}'", path);
        Ok(WriteReceipt {
            id,
            path,
            write_time,
        })
    }

    async fn set_document(
        &self,
        path: &DocumentPath,
        properties: &Properties,
    ) -> Result<WriteReceipt> {
        debug!("Setting Firestore document '{}'", path);

        let collection = path.parent();
        let id = path.id();
        let write_time = self.write_at(&collection, &id, properties).await?;

        Ok(WriteReceipt {
            id,
            path: path.clone(),
            write_time,
        })
    }

    async fn get_document(&self, path: &DocumentPath) -> Result<Option<DocumentSnapshot>> {
        debug!("Getting Firestore document '{}'", path);

        match self.fetch_raw(path).await? {
            Some(document) => Ok(Some(document_to_snapshot(&document)?)),
            None => Ok(None),
        }
    }

    async fn delete_document(&self, path: &DocumentPath) -> Result<DateTime<Utc>> {
        debug!("Deleting Firestore document '{}'", path);

        if self.fetch_raw(path).await?.is_none() {
            return Err(FiredocError::not_found(path.as_str()));
        }

        let collection = path.parent();
        let id = path.id();
        let (parent, leaf) = self.parent_and_leaf(&collection)?;

        let deleted = match parent {
            Some(parent) => {
                self.db
                    .fluent()
                    .delete()
                    .from(leaf)
                    .parent(parent)
                    .document_id(id.as_str())
                    .execute()
                    .await
            }
            None => {
                self.db
                    .fluent()
                    .delete()
                    .from(leaf)
                    .document_id(id.as_str())
                    .execute()
                    .await
            }
        };

        deleted.map_err(|e| {
            error!("Failed to delete document '{}': {}", path, e);
            map_firestore_error(e)
        })?;

        // Firestore does not report a deletion timestamp through this
        // call path; the receipt carries the local confirmation time.
        Ok(Utc::now())
    }

    async fn list_documents(&self, collection: &CollectionPath) -> Result<Vec<DocumentSnapshot>> {
        debug!("Listing Firestore collection '{}'", collection);

        let (parent, leaf) = self.parent_and_leaf(collection)?;

        let documents: Vec<FirestoreDocument> = match parent {
            Some(parent) => {
                self.db
                    .fluent()
                    .select()
                    .from(leaf)
                    .parent(parent)
                    .query()
                    .await
            }
            None => self.db.fluent().select().from(leaf).query().await,
        }
        .map_err(|e| {
            error!("Failed to list collection '{}': {}", collection, e);
            map_firestore_error(e)
        })?;

        documents.iter().map(document_to_snapshot).collect()
    }

    async fn query_equal(
        &self,
        collection: &CollectionPath,
        filters: &[EqualityFilter],
    ) -> Result<Vec<DocumentSnapshot>> {
        debug!(
            "Querying Firestore collection '{}' with {} equality filters",
            collection,
            filters.len()
        );

        let (parent, leaf) = self.parent_and_leaf(collection)?;

        // Every supplied filter is applied conjunctively.
        let documents: Vec<FirestoreDocument> = match parent {
            Some(parent) => {
                self.db
                    .fluent()
                    .select()
                    .from(leaf)
                    .parent(parent)
                    .filter(|q| {
                        let conditions: Vec<_> = filters
                            .iter()
                            .map(|f| q.field(f.field.clone()).eq(f.value.clone()))
                            .collect();
                        q.for_all(conditions)
                    })
                    .query()
                    .await
            }
            None => {
                self.db
                    .fluent()
                    .select()
                    .from(leaf)
                    .filter(|q| {
                        let conditions: Vec<_> = filters
                            .iter()
                            .map(|f| q.field(f.field.clone()).eq(f.value.clone()))
                            .collect();
                        q.for_all(conditions)
                    })
                    .query()
                    .await
            }
        }
        .map_err(|e| {
            error!("Failed to query collection '{}': {}", collection, e);
            map_firestore_error(e)
        })?;

        documents.iter().map(document_to_snapshot).collect()
    }

    async fn health_check(&self) -> Result<()> {
        // Credential exchange happens during connect; a constructed
        // handle is usable until the process drops it.
        debug!("FirestoreDatabase health check passed");
        Ok(())
    }

    async fn close(&self) -> Result<()> {
        // The underlying channel is released when the handle drops.
        debug!("FirestoreDatabase closed");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "FirestoreDatabase"
    }
}
