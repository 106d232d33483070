//! Route table and status handlers.

use std::collections::BTreeMap;

use axum::{
    extract::{Query, State},
    http::Uri,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::http::error::ApiError;
use crate::http::server::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub environment: String,
}

/// One compiled route, in dispatch order.
#[derive(Debug, Serialize, Deserialize)]
pub struct RouteSummary {
    pub pattern: String,
    pub params: Vec<String>,
    pub layouts: Vec<String>,
    pub component: String,
    pub specificity: i32,
}

/// Result of resolving a path against the route table.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ResolvedRoute {
    pub path: String,
    pub component: String,
    pub layouts: Vec<String>,
    pub params: BTreeMap<String, String>,
    pub rest: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ResolveQuery {
    pub path: Option<String>,
}

pub async fn get_health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: state.settings.environment().to_string(),
    })
}

pub async fn list_routes(State(state): State<AppState>) -> Json<Vec<RouteSummary>> {
    let routes = state
        .routes
        .routes()
        .iter()
        .map(|route| RouteSummary {
            pattern: route.pattern().to_string(),
            params: route
                .pattern()
                .param_names()
                .into_iter()
                .map(String::from)
                .collect(),
            layouts: route.layouts().iter().map(|c| c.name().to_string()).collect(),
            component: route.handler().name().to_string(),
            specificity: route.pattern().specificity(),
        })
        .collect();

    Json(routes)
}

pub async fn resolve_route(
    State(state): State<AppState>,
    Query(query): Query<ResolveQuery>,
) -> Result<Json<ResolvedRoute>, ApiError> {
    let path = query
        .path
        .ok_or_else(|| ApiError::BadRequest("missing 'path' query parameter".to_string()))?;

    if !path.starts_with('/') {
        return Err(ApiError::BadRequest(format!(
            "path must start with '/': {:?}",
            path
        )));
    }

    let matched = state
        .routes
        .resolve(&path)
        .ok_or_else(|| ApiError::NotFound(path.clone()))?;

    tracing::debug!(
        path = %path,
        component = matched.handler().name(),
        "Route resolved"
    );

    Ok(Json(ResolvedRoute {
        component: matched.handler().name().to_string(),
        layouts: matched.layouts().iter().map(|c| c.name().to_string()).collect(),
        params: matched.params().iter().cloned().collect(),
        rest: matched.rest().map(String::from),
        path,
    }))
}

pub async fn fallback(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}
