//! Error handling and mapping utilities for the Firestore backend.
//!
//! This module converts Firestore client errors into the unified
//! `FiredocError` type used throughout the facade, classifying by the
//! client's error message.

use firestore::errors::FirestoreError;

use firedoc_core::FiredocError;

/// Convert a `FirestoreError` to a `FiredocError`.
///
/// Not-found, authentication, permission, and timeout conditions map to
/// their dedicated variants so callers can branch on them; everything
/// else collapses into a backend error carrying the client's message.
pub fn map_firestore_error(error: FirestoreError) -> FiredocError {
    let message = error.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("not found") || lowered.contains("not_found") {
        FiredocError::not_found(message)
    } else if lowered.contains("unauthenticated")
        || lowered.contains("unauthorized")
        || lowered.contains("credential")
    {
        FiredocError::Authentication
    } else if lowered.contains("permission denied") || lowered.contains("permission_denied") {
        FiredocError::Permission
    } else if lowered.contains("deadline") || lowered.contains("timeout") {
        FiredocError::timeout(message)
    } else {
        FiredocError::backend(message)
    }
}

/// Check if a `FirestoreError` indicates a "not found" condition.
///
/// Utility to probe for a missing resource without converting the error.
pub fn is_not_found_error(error: &FirestoreError) -> bool {
    let lowered = error.to_string().to_lowercase();
    lowered.contains("not found") || lowered.contains("not_found")
}
