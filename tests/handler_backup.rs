mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use hashly::api::handlers::backup_handler;
use hashly::domain::{UrlRecord, UrlStore};
use hashly::infrastructure::persistence;
use hashly::state::AppState;

fn maintenance_app(state: AppState) -> Router {
    Router::new()
        .route("/backup", get(backup_handler))
        .with_state(state)
}

#[tokio::test]
async fn test_backup_writes_all_records() {
    let (state, _dir) = common::create_test_state();
    {
        let mut store = state.store.write().await;
        let mut origin = UrlRecord::new("abc", "https://example.com/a");
        origin.collision_chain.push("xyz".to_string());
        store.insert(origin);
        store.insert(UrlRecord::new("xyz", "https://example.com/b"));
    }

    let server = TestServer::new(maintenance_app(state.clone())).unwrap();

    let response = server.get("/backup").await;
    response.assert_status_ok();

    let contents = std::fs::read_to_string(&state.store_path).unwrap();
    let mut lines: Vec<&str> = contents.lines().collect();
    lines.sort_unstable();
    assert_eq!(
        lines,
        vec!["abc[xyz]:https://example.com/a", "xyz[]:https://example.com/b"]
    );
}

#[tokio::test]
async fn test_backup_then_load_round_trips_through_handler() {
    let (state, _dir) = common::create_test_state();
    {
        let mut store = state.store.write().await;
        let mut origin = UrlRecord::new("abc", "https://example.com/a");
        origin.collision_chain = vec!["xyz".to_string(), "qrs".to_string()];
        store.insert(origin);
        store.insert(UrlRecord::new("xyz", "https://example.com/b"));
        store.insert(UrlRecord::new("qrs", "https://example.com/c"));
    }

    let server = TestServer::new(maintenance_app(state.clone())).unwrap();
    server.get("/backup").await.assert_status_ok();

    let loaded = persistence::load(&state.store_path).unwrap();
    assert_eq!(loaded.len(), 3);
    assert_eq!(
        loaded.get("abc").unwrap().collision_chain,
        vec!["xyz", "qrs"]
    );
}

#[tokio::test]
async fn test_backup_io_failure_is_surfaced_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    // A directory is not a writable file target, so the write must fail.
    let state = AppState::new(UrlStore::new(), dir.path().to_path_buf(), 16);

    let server = TestServer::new(maintenance_app(state)).unwrap();

    let response = server.get("/backup").await;

    response.assert_status(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "internal_error");
}
