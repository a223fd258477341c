use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::handlers::validate_url;
use crate::state::AppState;

pub const PAGESPEED_API_URL: &str =
    "https://www.googleapis.com/pagespeedonline/v5/runPagespeed";

#[derive(Deserialize)]
pub struct PagespeedQuery {
    pub url: String,
}

/// GET /pagespeed?url=<encoded-url>
///
/// Proxies to the Google PageSpeed Insights API and returns its JSON body
/// unchanged. Upstream error statuses are forwarded to the caller.
pub async fn check_pagespeed(
    State(state): State<AppState>,
    Query(params): Query<PagespeedQuery>,
) -> AppResult<Json<serde_json::Value>> {
    validate_url(&params.url)?;

    let request_url = format!(
        "{}?url={}&key={}",
        PAGESPEED_API_URL,
        urlencoding::encode(&params.url),
        urlencoding::encode(&state.pagespeed_api_key),
    );

    let response = state.http_client.get(&request_url).send().await.map_err(|e| {
        tracing::error!(error = ?e, "Failed to contact PageSpeed API");
        AppError::Internal
    })?;

    let upstream_status = response.status();
    if !upstream_status.is_success() {
        let detail = response.text().await.unwrap_or_default();
        // reqwest and axum sit on different http crate versions; carry the
        // code across by value.
        let status = StatusCode::from_u16(upstream_status.as_u16())
            .unwrap_or(StatusCode::BAD_GATEWAY);
        return Err(AppError::Upstream {
            status,
            body: format!("PageSpeed API error: {detail}"),
        });
    }

    let body: serde_json::Value = response.json().await.map_err(|e| {
        tracing::error!(error = ?e, "Failed to parse PageSpeed API response");
        AppError::Internal
    })?;

    Ok(Json(body))
}
