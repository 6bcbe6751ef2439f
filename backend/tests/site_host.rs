use axum::{body, body::Body, http::Request, http::StatusCode, Router};
use tempfile::TempDir;
use tower::ServiceExt;

use ume_backend::{build_router, SiteConfig};

const INDEX: &str = "<!DOCTYPE html><html><body>UMe</body></html>";

fn site() -> (TempDir, Router) {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("index.html"), INDEX).expect("index");
    std::fs::write(dir.path().join("app.js"), "console.log('ume');").expect("script");
    let config = SiteConfig {
        site_dir: dir.path().to_path_buf(),
        port: 0,
        environment: "test".to_string(),
    };
    let app = build_router(&config);
    (dir, app)
}

async fn get(app: Router, uri: &str) -> axum::response::Response {
    let request = Request::get(uri).body(Body::empty()).expect("request");
    app.oneshot(request).await.expect("response")
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    String::from_utf8(bytes.to_vec()).expect("utf8")
}

#[tokio::test]
async fn health_reports_ok() {
    let (_dir, app) = site();
    let response = get(app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body_text(response).await).expect("json");
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn serves_root_and_static_files() {
    let (_dir, app) = site();
    let response = get(app.clone(), "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, INDEX);

    let response = get(app, "/app.js").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "console.log('ume');");
}

#[tokio::test]
async fn unknown_paths_fall_back_to_the_page() {
    let (_dir, app) = site();
    let response = get(app, "/waitlist/thanks").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, INDEX);
}

#[tokio::test]
async fn responses_carry_security_headers() {
    let (_dir, app) = site();
    let response = get(app, "/").await;
    let headers = response.headers();
    assert_eq!(headers["x-content-type-options"], "nosniff");
    assert_eq!(headers["referrer-policy"], "strict-origin-when-cross-origin");
}
