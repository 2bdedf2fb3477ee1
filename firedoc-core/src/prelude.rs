//! Prelude module for convenient imports.
//!
//! Re-exports the types and traits most callers need to work with the
//! facade.

pub use crate::config::StoreConfig;
pub use crate::error::{FiredocError, Result};
pub use crate::kind::{CollectionTarget, DocumentKind};
pub use crate::traits::DocumentDatabase;
pub use crate::types::{
    CollectionPath, DeleteReceipt, DocumentId, DocumentPath, DocumentSnapshot, EqualityFilter,
    Properties, PurgeOutcome, WriteReceipt, filters_from_properties,
};
