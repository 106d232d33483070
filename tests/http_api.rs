//! In-process tests of the HTTP surface.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use chat_shell::http::handlers::{HealthStatus, ResolvedRoute, RouteSummary};
use chat_shell::http::{HttpServer, X_REQUEST_ID};
use serde::de::DeserializeOwned;
use tower::ServiceExt;

mod common;

async fn get(uri: &str) -> Response {
    let app = HttpServer::new(common::test_settings()).router();
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn json<T: DeserializeOwned>(res: Response) -> T {
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_reports_environment() {
    let res = get("/health").await;
    assert_eq!(res.status(), StatusCode::OK);

    let health: HealthStatus = json(res).await;
    assert_eq!(health.status, "ok");
    assert_eq!(health.environment, "test");
    assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_list_routes_in_dispatch_order() {
    let res = get("/api/routes").await;
    assert_eq!(res.status(), StatusCode::OK);

    let routes: Vec<RouteSummary> = json(res).await;
    let patterns: Vec<_> = routes.iter().map(|r| r.pattern.as_str()).collect();
    assert_eq!(
        patterns,
        vec!["/dashboard/chats/:id", "/dashboard", "/sign-in/*", "/sign-up/*", "/"]
    );

    let chat = &routes[0];
    assert_eq!(chat.component, "ChatPage");
    assert_eq!(chat.params, vec!["id"]);
    assert_eq!(chat.layouts, vec!["RootLayout", "DashboardLayout"]);
}

#[tokio::test]
async fn test_resolve_chat_route() {
    let res = get("/api/routes/resolve?path=/dashboard/chats/42").await;
    assert_eq!(res.status(), StatusCode::OK);

    let resolved: ResolvedRoute = json(res).await;
    assert_eq!(resolved.path, "/dashboard/chats/42");
    assert_eq!(resolved.component, "ChatPage");
    assert_eq!(resolved.layouts, vec!["RootLayout", "DashboardLayout"]);
    assert_eq!(resolved.params.get("id").map(String::as_str), Some("42"));
    assert_eq!(resolved.rest, None);
}

#[tokio::test]
async fn test_resolve_sign_in_wildcard() {
    let res = get("/api/routes/resolve?path=/sign-in/factor-two").await;
    assert_eq!(res.status(), StatusCode::OK);

    let resolved: ResolvedRoute = json(res).await;
    assert_eq!(resolved.component, "SignInPage");
    assert_eq!(resolved.layouts, vec!["RootLayout"]);
    assert_eq!(resolved.rest.as_deref(), Some("factor-two"));
    assert!(resolved.params.is_empty());
}

#[tokio::test]
async fn test_resolve_unknown_is_not_found() {
    let res = get("/api/routes/resolve?path=/unknown").await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = json(res).await;
    assert_eq!(body["error"], "not_found");
    assert_eq!(body["message"], "No route matches /unknown");
}

#[tokio::test]
async fn test_resolve_rejects_bad_input() {
    let missing = get("/api/routes/resolve").await;
    assert_eq!(missing.status(), StatusCode::BAD_REQUEST);

    let relative = get("/api/routes/resolve?path=dashboard").await;
    assert_eq!(relative.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_endpoint_is_json_404() {
    let res = get("/nope").await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = json(res).await;
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn test_request_id_assigned_and_propagated() {
    let generated = get("/health").await;
    assert!(generated.headers().contains_key(X_REQUEST_ID));

    let app = HttpServer::new(common::test_settings()).router();
    let res = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .header(X_REQUEST_ID, "client-supplied-id")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.headers()[X_REQUEST_ID], "client-supplied-id");
}
