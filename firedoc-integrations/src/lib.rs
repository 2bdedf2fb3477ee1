//! Storage backends for the firedoc document-store facade.
//!
//! This crate provides `DocumentDatabase` implementations: an in-memory
//! backend for development and testing, and a Google Firestore backend
//! behind the `firestore` feature.

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod backends;

// Re-export commonly used types
pub use backends::MemoryDatabase;

#[cfg(feature = "firestore")]
pub use backends::FirestoreDatabase;
