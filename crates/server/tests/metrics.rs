//! Prometheus exposition. Kept in its own test binary because the recorder
//! is process-wide and can only be installed once.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use docmatch::{MatchOrchestrator, TemplateSet};
use http_body_util::BodyExt;
use server::telemetry::{install_prometheus, FacadeMatchMetrics};
use server::{build_router, ServerConfig, ServerState};
use tower::ServiceExt;

#[tokio::test]
async fn matches_show_up_in_metrics() {
    let handle = install_prometheus().expect("first install succeeds");
    let orchestrator = MatchOrchestrator::new(TemplateSet::new().with_text("Signed in Oslo"))
        .with_metrics(Arc::new(FacadeMatchMetrics));
    let app = build_router(Arc::new(ServerState::with_orchestrator(
        ServerConfig::default(),
        orchestrator,
        Some(handle),
    )));

    let body = "--b\r\nContent-Disposition: form-data; name=\"file\"; filename=\"a.txt\"\r\n\r\nSigned in Oslo\r\n--b--\r\n";
    let request = Request::builder()
        .method("POST")
        .uri("/api/match")
        .header(header::CONTENT_TYPE, "multipart/form-data; boundary=b")
        .body(Body::from(body))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let request = Request::builder()
        .uri("/metrics")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let text = response.into_body().collect().await.unwrap().to_bytes();
    let text = String::from_utf8(text.to_vec()).unwrap();
    assert!(text.contains("docmatch_matches_total"), "{text}");
    assert!(text.contains(r#"outcome="ok""#), "{text}");
}
