//! The document store facade.
//!
//! `DocumentStore` binds one backend handle to one application's path
//! prefix and exposes the CRUD and equality-query surface the rest of the
//! application talks to. The facade itself holds no locks and performs no
//! retries; every operation is the backend round trips it is made of and
//! nothing more.

use tracing::{debug, error, info, warn};

use firedoc_core::{
    FiredocError, Result, StoreConfig,
    kind::CollectionTarget,
    traits::DocumentDatabase,
    types::{
        CollectionPath, DeleteReceipt, DocumentId, DocumentPath, DocumentSnapshot, EqualityFilter,
        Properties, PurgeOutcome, WriteReceipt,
    },
};

/// A document store scoped to one application's path prefix.
///
/// Created by [`DocumentStore::activate`], which validates the
/// configuration, checks the backend is usable, and ensures the
/// application record exists. A constructed store is always ready; there
/// is no separate unready state to probe for.
///
/// # Examples
///
/// ```rust,no_run
/// use firedoc_core::{StoreConfig, kind::CollectionTarget};
/// use firedoc_store::DocumentStore;
/// # use firedoc_core::types::Properties;
/// # async fn example(backend: impl firedoc_core::traits::DocumentDatabase) -> firedoc_core::Result<()> {
/// let config = StoreConfig::new("apps", "myapp")
///     .with_app_info_entry("version", "1.0");
/// let store = DocumentStore::activate(config, backend).await?;
///
/// let receipt = store
///     .store(&CollectionTarget::named("Task"), &Properties::new())
///     .await?;
/// println!("stored at {}", receipt.path);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct DocumentStore<D: DocumentDatabase> {
    db: D,
    config: StoreConfig,
    prefix: DocumentPath,
}

impl<D: DocumentDatabase> DocumentStore<D> {
    /// Activate a store: validate the configuration, health-check the
    /// backend, and ensure the application record exists at the prefix.
    ///
    /// The application record is written only when absent, so re-activation
    /// with the same configuration is idempotent and never overwrites an
    /// existing record.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an unusable configuration, or the
    /// backend's error if the health check or record write fails. On error
    /// no store is constructed.
    pub async fn activate(config: StoreConfig, db: D) -> Result<Self> {
        config.validate()?;
        let prefix = config.path_prefix()?;

        info!(
            "Activating document store at prefix '{}' on backend '{}'",
            prefix,
            db.name()
        );

        db.health_check().await?;

        if db.get_document(&prefix).await?.is_none() {
            db.set_document(&prefix, &config.app_info).await?;
            info!("Created application record at '{}'", prefix);
        } else {
            debug!("Application record already present at '{}'", prefix);
        }

        Ok(Self { db, config, prefix })
    }

    /// The path prefix all of this store's object collections live under.
    pub fn prefix(&self) -> &DocumentPath {
        &self.prefix
    }

    /// The configuration this store was activated with.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// The backend's human-readable name.
    pub fn backend_name(&self) -> &'static str {
        self.db.name()
    }

    /// Resolve a collection target against this store's prefix.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the target's collection name is not a
    /// usable path segment.
    pub fn resolve(&self, target: &CollectionTarget) -> Result<CollectionPath> {
        target.resolve(&self.prefix)
    }

    /// Build the full path of a document addressed by target and id.
    fn document_path(&self, target: &CollectionTarget, id: &DocumentId) -> Result<DocumentPath> {
        self.resolve(target)?.doc(id)
    }

    /// Store a new document in the targeted collection.
    ///
    /// The backend generates the id; the receipt reports it along with the
    /// full path and write timestamp.
    ///
    /// # Errors
    ///
    /// Returns the backend's error if the write fails.
    pub async fn store(
        &self,
        target: &CollectionTarget,
        properties: &Properties,
    ) -> Result<WriteReceipt> {
        let collection = self.resolve(target)?;
        debug!("Storing new document in '{}'", collection);

        let receipt = self.db.add_document(&collection, properties).await?;
        info!("Stored document '{}'", receipt.path);
        Ok(receipt)
    }

    /// Replace the content of an existing document.
    ///
    /// The new properties fully overwrite the old; fields absent from the
    /// new mapping are gone afterwards.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no document with this id exists in the
    /// targeted collection, or the backend's error if the write fails.
    pub async fn update(
        &self,
        id: &DocumentId,
        target: &CollectionTarget,
        properties: &Properties,
    ) -> Result<WriteReceipt> {
        let path = self.document_path(target, id)?;
        debug!("Updating document '{}'", path);

        if !self.db.document_exists(&path).await? {
            warn!("Update of missing document '{}'", path);
            return Err(FiredocError::not_found(path.as_str()));
        }

        self.db.set_document(&path, properties).await
    }

    /// Read the stored properties of a document.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no document with this id exists in the
    /// targeted collection.
    pub async fn properties(&self, id: &DocumentId, target: &CollectionTarget) -> Result<Properties> {
        let path = self.document_path(target, id)?;

        match self.db.get_document(&path).await? {
            Some(snapshot) => Ok(snapshot.properties),
            None => Err(FiredocError::not_found(path.as_str())),
        }
    }

    /// Whether a document currently exists at the given path.
    ///
    /// # Errors
    ///
    /// Returns the backend's error if the probe fails.
    pub async fn exists(&self, path: &DocumentPath) -> Result<bool> {
        self.db.document_exists(path).await
    }

    /// Delete the document at the given path.
    ///
    /// The supplied id must match the path's final segment; the mismatch
    /// is a validation error rather than a delete of the wrong document.
    /// After the backend confirms the delete, the facade re-checks that the
    /// document is gone.
    ///
    /// # Errors
    ///
    /// Returns `Validation` on an id/path mismatch, `NotFound` if the
    /// document does not exist, or `Internal` if the document is still
    /// present after a delete the backend reported as successful.
    pub async fn delete(&self, id: &DocumentId, path: &DocumentPath) -> Result<DeleteReceipt> {
        if path.id() != *id {
            return Err(FiredocError::validation(format!(
                "id '{}' does not match the final segment of path '{}'",
                id, path
            )));
        }

        debug!("Deleting document '{}'", path);

        if !self.db.document_exists(path).await? {
            return Err(FiredocError::not_found(path.as_str()));
        }

        let delete_time = self.db.delete_document(path).await?;

        if self.db.document_exists(path).await? {
            error!("Document '{}' still present after delete", path);
            return Err(FiredocError::internal(format!(
                "document '{path}' still present after delete"
            )));
        }

        info!("Deleted document '{}'", path);
        Ok(DeleteReceipt {
            id: id.clone(),
            path: path.clone(),
            delete_time,
        })
    }

    /// Find one document in the targeted collection by id.
    ///
    /// Returns `Ok(None)` when no such document exists; transport and
    /// authentication failures are errors, never silently `None`.
    ///
    /// # Errors
    ///
    /// Returns the backend's error if the read fails.
    pub async fn find_by_id(
        &self,
        id: &DocumentId,
        target: &CollectionTarget,
    ) -> Result<Option<DocumentSnapshot>> {
        let path = self.document_path(target, id)?;
        self.db.get_document(&path).await
    }

    /// Materialize every document currently in the targeted collection.
    ///
    /// Order is the backend's default cursor order. An empty collection is
    /// an empty vector.
    ///
    /// # Errors
    ///
    /// Returns the backend's error if the listing fails.
    pub async fn find_all(&self, target: &CollectionTarget) -> Result<Vec<DocumentSnapshot>> {
        let collection = self.resolve(target)?;
        let snapshots = self.db.list_documents(&collection).await?;
        debug!("Found {} documents in '{}'", snapshots.len(), collection);
        Ok(snapshots)
    }

    /// Materialize every document in the targeted collection whose fields
    /// match all of the given equality filters.
    ///
    /// Filters apply conjunctively; an empty filter set matches the whole
    /// collection.
    ///
    /// # Errors
    ///
    /// Returns the backend's error if the query fails.
    pub async fn find_by_properties(
        &self,
        target: &CollectionTarget,
        filters: &[EqualityFilter],
    ) -> Result<Vec<DocumentSnapshot>> {
        let collection = self.resolve(target)?;
        self.db.query_equal(&collection, filters).await
    }

    /// Delete every document in the targeted collection, best effort.
    ///
    /// Documents are deleted sequentially and each deletion is verified.
    /// A document whose delete fails or that is still present afterwards
    /// is recorded as a survivor; deletions already performed are never
    /// rolled back.
    ///
    /// # Errors
    ///
    /// Returns the backend's error if the initial listing fails. Per-
    /// document failures are not errors; they appear in the outcome's
    /// `survivors` list.
    pub async fn purge_collection(&self, target: &CollectionTarget) -> Result<PurgeOutcome> {
        let collection = self.resolve(target)?;
        let snapshots = self.db.list_documents(&collection).await?;

        info!(
            "Purging {} documents from '{}'",
            snapshots.len(),
            collection
        );

        let mut outcome = PurgeOutcome::default();
        for snapshot in snapshots {
            match self.db.delete_document(&snapshot.path).await {
                Ok(_) => match self.db.document_exists(&snapshot.path).await {
                    Ok(false) => outcome.deleted += 1,
                    Ok(true) => {
                        warn!("Document '{}' survived its delete", snapshot.path);
                        outcome.survivors.push(snapshot.path);
                    }
                    Err(e) => {
                        warn!(
                            "Could not confirm deletion of '{}': {}",
                            snapshot.path, e
                        );
                        outcome.survivors.push(snapshot.path);
                    }
                },
                Err(e) if e.is_not_found() => {
                    // Gone between listing and delete; counts as deleted.
                    outcome.deleted += 1;
                }
                Err(e) => {
                    warn!("Failed to delete '{}': {}", snapshot.path, e);
                    outcome.survivors.push(snapshot.path);
                }
            }
        }

        if outcome.is_complete() {
            info!("Purged '{}' completely ({} deleted)", collection, outcome.deleted);
        } else {
            warn!(
                "Purge of '{}' incomplete: {} deleted, {} survivors",
                collection,
                outcome.deleted,
                outcome.survivors.len()
            );
        }
        Ok(outcome)
    }

    /// Check that the backend is reachable and usable.
    ///
    /// # Errors
    ///
    /// Returns the backend's error when it is not.
    pub async fn health_check(&self) -> Result<()> {
        self.db.health_check().await
    }

    /// Release the backend handle.
    ///
    /// # Errors
    ///
    /// Returns the backend's error if release fails.
    pub async fn close(self) -> Result<()> {
        debug!("Closing document store at '{}'", self.prefix);
        self.db.close().await
    }
}
