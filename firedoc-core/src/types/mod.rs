//! Core data types for the firedoc facade.
//!
//! This module defines the vocabulary shared by the facade and every
//! backend: validated hierarchical paths, document snapshots and receipts,
//! and equality filters.

pub mod document;
pub mod filter;
pub mod path;

pub use document::{
    DeleteReceipt, DocumentId, DocumentSnapshot, Properties, PurgeOutcome, WriteReceipt,
};
pub use filter::{EqualityFilter, filters_from_properties};
pub use path::{CollectionPath, DocumentPath};
