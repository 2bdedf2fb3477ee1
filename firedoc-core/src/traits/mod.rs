//! Core traits for the firedoc facade.

pub mod database;

pub use database::DocumentDatabase;
