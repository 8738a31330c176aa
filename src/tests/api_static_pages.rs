use crate::build_app;
use crate::config::AppConfig;
use crate::tests::api_locations_router::MockRepository;
use crate::AppState;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use std::fs;
use std::sync::Arc;
use tower::ServiceExt;

// build an app whose pages directory is a throwaway temp dir
fn state_with_pages(pages: &std::path::Path) -> AppState {
    AppState {
        repo: Arc::new(MockRepository::new()),
        config: Arc::new(AppConfig {
            mongo_uri: "".into(),
            port: 0,
            pages_path: pages.to_path_buf(),
        }),
    }
}

async fn get(app: axum::Router, uri: &str) -> axum::response::Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

// the three named routes serve their page files
#[tokio::test]
async fn test_named_routes_serve_pages() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("index.html"), "<h1>Share</h1>").unwrap();
    fs::write(dir.path().join("list.html"), "<h1>Log</h1>").unwrap();
    fs::write(dir.path().join("about.html"), "<h1>About</h1>").unwrap();

    let app = build_app(state_with_pages(dir.path()));

    for (uri, marker) in [("/", "Share"), ("/list", "Log"), ("/about", "About")] {
        let response = get(app.clone(), uri).await;
        assert_eq!(response.status(), StatusCode::OK, "route {uri}");

        let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .unwrap();
        assert!(String::from_utf8_lossy(&body).contains(marker), "route {uri}");
    }
}

// other files in the pages directory are reachable directly, like the
// original static mount
#[tokio::test]
async fn test_extra_page_assets_are_served() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("style.css"), "body { margin: 0 }").unwrap();

    let app = build_app(state_with_pages(dir.path()));

    let response = get(app, "/style.css").await;
    assert_eq!(response.status(), StatusCode::OK);
}

// pages only answer GET; a POST to a page route is an unmatched route, same
// as the original's method-scoped routing
#[tokio::test]
async fn test_post_to_page_route_returns_404() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("list.html"), "<h1>Log</h1>").unwrap();

    let app = build_app(state_with_pages(dir.path()));

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/list")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    assert_eq!(&body[..], b"Not found");
}

// a named route whose backing file is missing is a 404, not a crash
#[tokio::test]
async fn test_missing_page_file_is_404() {
    let dir = tempfile::tempdir().unwrap();

    let app = build_app(state_with_pages(dir.path()));

    let response = get(app, "/list").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
