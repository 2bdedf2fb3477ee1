//! Document database backends.
//!
//! The in-memory backend is always available; the Firestore backend is
//! compiled behind the `firestore` feature.

pub mod memory;

#[cfg(feature = "firestore")]
pub mod firestore;

pub use memory::MemoryDatabase;

#[cfg(feature = "firestore")]
pub use firestore::FirestoreDatabase;
