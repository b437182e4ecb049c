//! End-to-end session lifecycle against a real file-backed vault.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use marquee_core::config::SessionConfig;
use marquee_core::session::{DEMO_EMAIL, DEMO_PASSWORD, SessionStore};
use marquee_model::AuthPhase;
use tempfile::TempDir;

fn store_in(dir: &TempDir) -> (SessionStore<marquee_core::FileVault>, PathBuf) {
    let path = dir.path().join("session.json");
    let config = SessionConfig {
        storage_path: path.clone(),
        simulated_latency: Duration::ZERO,
    };
    (SessionStore::from_config(&config), path)
}

#[tokio::test]
async fn fresh_start_lands_anonymous() {
    let dir = TempDir::new().unwrap();
    let (mut store, path) = store_in(&dir);

    store.initialize();
    assert_eq!(store.state().phase(), AuthPhase::Anonymous);
    assert!(!store.state().is_loading());
    assert!(!path.exists());
}

#[tokio::test]
async fn login_survives_a_restart() {
    let dir = TempDir::new().unwrap();
    let (mut store, path) = store_in(&dir);

    assert!(store.login(DEMO_EMAIL, DEMO_PASSWORD).await);
    assert!(path.exists());

    // A second store over the same file plays the part of a fresh process.
    let (mut rehydrated, _) = store_in(&dir);
    rehydrated.initialize();
    assert!(rehydrated.state().is_authenticated());
    assert_eq!(
        rehydrated.state().session().unwrap().email,
        DEMO_EMAIL
    );
}

#[tokio::test]
async fn malformed_persisted_data_is_cleared_not_fatal() {
    let dir = TempDir::new().unwrap();
    let (mut store, path) = store_in(&dir);

    for garbage in ["{{{", "42", "{\"email\":\"x@y.z\"}", ""] {
        fs::write(&path, garbage).unwrap();
        store.initialize();
        assert_eq!(store.state().phase(), AuthPhase::Anonymous, "input: {garbage}");
        assert!(!path.exists(), "slot not cleared for input: {garbage}");
    }
}

#[tokio::test]
async fn externally_cleared_storage_demotes_silently() {
    let dir = TempDir::new().unwrap();
    let (mut store, path) = store_in(&dir);

    assert!(store.login(DEMO_EMAIL, DEMO_PASSWORD).await);
    fs::remove_file(&path).unwrap();

    let (mut rehydrated, _) = store_in(&dir);
    rehydrated.initialize();
    assert_eq!(rehydrated.state().phase(), AuthPhase::Anonymous);
}

#[tokio::test]
async fn signup_then_logout_leaves_no_trace() {
    let dir = TempDir::new().unwrap();
    let (mut store, path) = store_in(&dir);

    assert!(store.signup("new@example.com", "pw", "Newcomer").await);
    let session = store.state().session().unwrap().clone();
    assert_eq!(session.display_name.as_deref(), Some("Newcomer"));
    assert!(path.exists());

    store.logout();
    assert_eq!(store.state().phase(), AuthPhase::Anonymous);
    assert!(!path.exists());

    // Again from anonymous; still fine.
    store.logout();
    assert_eq!(store.state().phase(), AuthPhase::Anonymous);
}

#[tokio::test]
async fn signup_sessions_are_distinct() {
    let dir = TempDir::new().unwrap();
    let (mut store, _) = store_in(&dir);

    assert!(store.signup("one@example.com", "pw", "One").await);
    let first = store.state().session().unwrap().id.clone();
    assert!(store.signup("two@example.com", "pw", "Two").await);
    let second = store.state().session().unwrap().id.clone();
    assert_ne!(first, second);
}
