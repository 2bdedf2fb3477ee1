//! Document-store facade for the firedoc workspace.
//!
//! This crate provides [`DocumentStore`], the user-facing surface that
//! binds a [`DocumentDatabase`](firedoc_core::traits::DocumentDatabase)
//! backend to one application's path prefix and exposes CRUD and
//! equality-filter queries over it.

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod store;

// Re-export commonly used types
pub use store::DocumentStore;
