//! # Firedoc Core
//!
//! Core traits, types, and interfaces for the firedoc document-store facade.
//!
//! This crate provides the foundational building blocks shared by the
//! facade and its storage backends:
//!
//! - **Data structures**: validated [`types::CollectionPath`] /
//!   [`types::DocumentPath`] paths, [`types::DocumentSnapshot`] reads, and
//!   operation receipts
//! - **Core traits**: the [`traits::DocumentDatabase`] client seam and the
//!   [`kind::DocumentKind`] collection-naming tag
//! - **Configuration**: [`config::StoreConfig`] with validation
//! - **Error handling**: the [`error::FiredocError`] taxonomy that keeps
//!   not-found, transport, and input failures distinguishable
//!
//! ## Quick Start
//!
//! ```rust
//! use firedoc_core::prelude::*;
//!
//! let config = StoreConfig::new("apps", "myapp")
//!     .with_app_info_entry("version", "1.0");
//!
//! assert_eq!(config.path_prefix().unwrap().as_str(), "apps/myapp");
//! ```

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Re-export commonly used types and traits
pub mod prelude;

// Core modules
pub mod config;
pub mod error;
pub mod kind;
pub mod traits;
pub mod types;

// Re-export key types at crate root for convenience
pub use config::StoreConfig;
pub use error::{FiredocError, Result};
pub use kind::{CollectionTarget, DocumentKind};
pub use traits::DocumentDatabase;
pub use types::{
    CollectionPath, DeleteReceipt, DocumentId, DocumentPath, DocumentSnapshot, EqualityFilter,
    Properties, PurgeOutcome, WriteReceipt,
};

/// Version information for the firedoc core library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the firedoc core library.
pub const NAME: &str = env!("CARGO_PKG_NAME");
