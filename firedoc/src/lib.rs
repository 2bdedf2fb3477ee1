//! # Firedoc - Typed document-store facade
//!
//! Firedoc maps an application's in-memory objects onto documents in a
//! hierarchical cloud document database, providing create, read, update,
//! delete, and equality-filter query operations scoped under a
//! per-application path prefix.
//!
//! ## Quick Start
//!
//! ```rust
//! use firedoc::prelude::*;
//!
//! struct Task;
//! impl DocumentKind for Task {
//!     const COLLECTION: &'static str = "Task";
//! }
//!
//! # async fn example() -> Result<()> {
//! let config = StoreConfig::new("apps", "myapp")
//!     .with_app_info_entry("version", "1.0");
//! let store = DocumentStore::activate(config, MemoryDatabase::new()).await?;
//!
//! let receipt = store
//!     .store(&CollectionTarget::of::<Task>(), &Properties::new())
//!     .await?;
//! println!("stored at {}", receipt.path);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! The workspace is organized into several crates:
//!
//! - **firedoc-core**: Types, traits, errors, and configuration
//! - **firedoc-store**: The document store facade
//! - **firedoc-integrations**: Storage backends (in-memory; Firestore
//!   behind the `firestore` feature)

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Re-export all public APIs from sub-crates
pub use firedoc_core as core;
pub use firedoc_integrations as integrations;
pub use firedoc_store as store;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and traits
/// from all firedoc crates.
pub mod prelude {
    // Re-export core prelude
    pub use firedoc_core::prelude::*;

    pub use firedoc_integrations::MemoryDatabase;
    pub use firedoc_store::DocumentStore;

    #[cfg(feature = "firestore")]
    pub use firedoc_integrations::FirestoreDatabase;
}

/// Version information for the firedoc workspace.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
