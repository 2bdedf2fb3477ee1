//! Google Firestore backend for the document-store facade.
//!
//! This module is organized into focused sub-modules:
//! - `client`: connection management and the `DocumentDatabase` impl
//! - `conversion`: resource names and timestamps to facade types
//! - `error`: error mapping from the Firestore client
//!
//! # Examples
//!
//! ```rust,no_run
//! use firedoc_integrations::FirestoreDatabase;
//!
//! # async fn example() -> firedoc_core::Result<()> {
//! let db = FirestoreDatabase::connect("my-project", None).await?;
//! # Ok(())
//! # }
//! ```

mod client;
mod conversion;
mod error;

pub use client::FirestoreDatabase;
pub use error::{is_not_found_error, map_firestore_error};
