//! Integration tests for FirestoreDatabase
//!
//! These tests exercise the Firestore backend against a real Google Cloud
//! project, covering writes, reads, queries, and deletes.
//!
//! **Note**: These tests require the `firestore` feature and live
//! credentials. Set `FIREDOC_TEST_PROJECT` (and optionally
//! `GOOGLE_APPLICATION_CREDENTIALS`), then run with:
//! `cargo test --features firestore -- --ignored`

#![cfg(feature = "firestore")]

use firedoc_core::types::{CollectionPath, EqualityFilter, Properties};
use firedoc_core::traits::DocumentDatabase;
use firedoc_integrations::FirestoreDatabase;
use serde_json::json;

fn test_project() -> String {
    std::env::var("FIREDOC_TEST_PROJECT").expect("FIREDOC_TEST_PROJECT must be set")
}

fn test_collection() -> CollectionPath {
    CollectionPath::parse("apps/firedoc-it/Task").expect("valid collection path")
}

fn props(pairs: &[(&str, serde_json::Value)]) -> Properties {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), v.clone()))
        .collect()
}

#[tokio::test]
#[ignore] // Requires a Google Cloud project and credentials
async fn test_firestore_connect() {
    let db = FirestoreDatabase::connect(test_project(), None).await;
    assert!(db.is_ok(), "Failed to connect: {:?}", db.err());

    let db = db.unwrap();
    db.health_check().await.expect("health check failed");
}

#[tokio::test]
#[ignore] // Requires a Google Cloud project and credentials
async fn test_firestore_write_read_delete_cycle() {
    let db = FirestoreDatabase::connect(test_project(), None)
        .await
        .expect("Failed to connect");

    let receipt = db
        .add_document(&test_collection(), &props(&[("x", json!(100))]))
        .await
        .expect("add failed");

    let snapshot = db
        .get_document(&receipt.path)
        .await
        .expect("get failed")
        .expect("document missing after write");
    assert_eq!(snapshot.get("x"), Some(&json!(100)));

    db.set_document(&receipt.path, &props(&[("y", json!(300))]))
        .await
        .expect("set failed");
    let snapshot = db
        .get_document(&receipt.path)
        .await
        .expect("get failed")
        .expect("document missing after replace");
    assert_eq!(snapshot.get("x"), None);
    assert_eq!(snapshot.get("y"), Some(&json!(300)));

    db.delete_document(&receipt.path).await.expect("delete failed");
    let gone = db.get_document(&receipt.path).await.expect("get failed");
    assert!(gone.is_none());
}

#[tokio::test]
#[ignore] // Requires a Google Cloud project and credentials
async fn test_firestore_conjunctive_query() {
    let db = FirestoreDatabase::connect(test_project(), None)
        .await
        .expect("Failed to connect");
    let collection = test_collection();

    let a = db
        .add_document(&collection, &props(&[("x", json!(1)), ("y", json!(3))]))
        .await
        .expect("add failed");
    let b = db
        .add_document(&collection, &props(&[("x", json!(1)), ("y", json!(4))]))
        .await
        .expect("add failed");

    let matched = db
        .query_equal(
            &collection,
            &[
                EqualityFilter::new("x", json!(1)),
                EqualityFilter::new("y", json!(3)),
            ],
        )
        .await
        .expect("query failed");
    assert!(matched.iter().any(|s| s.path == a.path));
    assert!(matched.iter().all(|s| s.path != b.path));

    db.delete_document(&a.path).await.expect("cleanup failed");
    db.delete_document(&b.path).await.expect("cleanup failed");
}
