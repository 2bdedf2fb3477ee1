//! Facade activation configuration.
//!
//! One `StoreConfig` is supplied per facade instance at activation time.
//! It names the application's root collection and objects sub-path (which
//! together form the path prefix), points at a credentials file (or not,
//! for ambient credentials), and carries the descriptive mapping persisted
//! once as the application record.

use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;

use crate::error::{FiredocError, Result};
use crate::types::{DocumentPath, Properties};

/// Configuration for activating a document store facade.
///
/// All four fields are required when deserializing from an application's
/// configuration mapping; an empty credentials string means "use ambient
/// credentials" and maps to `None`.
///
/// # Examples
///
/// ```rust
/// use firedoc_core::config::StoreConfig;
///
/// let config = StoreConfig::new("apps", "myapp")
///     .with_app_info_entry("version", "1.0")
///     .with_app_info_entry("stage", "alpha");
///
/// config.validate().unwrap();
/// assert_eq!(config.path_prefix().unwrap().as_str(), "apps/myapp");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Top-level collection holding per-application records. Multiple
    /// applications can share one database under different records.
    pub root_collection: String,
    /// Path segment under the root where this application's object
    /// collections live.
    pub objects_path: String,
    /// Service-account credentials file; `None` means ambient credentials.
    #[serde(deserialize_with = "deserialize_credentials")]
    pub credentials_file: Option<PathBuf>,
    /// Descriptive key/values (owner, versioning, stage) persisted once as
    /// the application record.
    pub app_info: Properties,
}

/// Accept `null` or an empty string as "use ambient credentials".
fn deserialize_credentials<'de, D>(deserializer: D) -> std::result::Result<Option<PathBuf>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.is_empty()).map(PathBuf::from))
}

impl StoreConfig {
    /// Create a configuration with ambient credentials and empty app info.
    pub fn new(root_collection: impl Into<String>, objects_path: impl Into<String>) -> Self {
        Self {
            root_collection: root_collection.into(),
            objects_path: objects_path.into(),
            credentials_file: None,
            app_info: Properties::new(),
        }
    }

    /// Set the service-account credentials file.
    #[must_use]
    pub fn with_credentials_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.credentials_file = Some(path.into());
        self
    }

    /// Replace the application info mapping.
    #[must_use]
    pub fn with_app_info(mut self, app_info: Properties) -> Self {
        self.app_info = app_info;
        self
    }

    /// Add one entry to the application info mapping.
    #[must_use]
    pub fn with_app_info_entry(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.app_info.insert(key.into(), value.into());
        self
    }

    /// Validate the configuration.
    ///
    /// Checks that both path segments are usable and that a supplied
    /// credentials file exists on the local filesystem. The existence
    /// check is time-of-check only; nothing prevents the file changing
    /// between validation and client construction.
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("root_collection", &self.root_collection),
            ("objects_path", &self.objects_path),
        ] {
            if value.is_empty() || value.contains('/') {
                return Err(FiredocError::configuration(format!(
                    "{field} must be a non-empty path segment, got '{value}'"
                )));
            }
        }
        if let Some(path) = &self.credentials_file {
            if !path.is_file() {
                return Err(FiredocError::configuration(format!(
                    "credentials file '{}' does not exist",
                    path.display()
                )));
            }
        }
        Ok(())
    }

    /// Derive the path prefix `<root-collection>/<objects-path>` under
    /// which all of this application's object collections live.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the segments do not form a document
    /// path; `validate()` catches the same conditions earlier.
    pub fn path_prefix(&self) -> Result<DocumentPath> {
        DocumentPath::parse(format!("{}/{}", self.root_collection, self.objects_path))
    }
}
