// Each integration test file is a separate binary; helpers not used in every
// binary would otherwise trigger dead_code warnings from clippy.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::{
    async_trait,
    body::Body,
    http::{Request, StatusCode},
    routing::get,
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use url::Url;

use metascope::ai::SeoModel;
use metascope::error::{AppError, AppResult};
use metascope::handlers;
use metascope::models::RawTag;
use metascope::renderer::{PageRenderer, RenderedPage};
use metascope::state::AppState;

/// A model response with prose around the JSON, exercising extraction.
pub const STUB_ANALYSIS: &str = concat!(
    "Here is the requested analysis:\n",
    r#"{"performance_score": 72, "weaknesses": ["title too short"], "#,
    r#""improvements": {"title": "A better title", "standard": [], "opengraph": []}}"#,
);

/// Renderer stub returning a canned page; counts invocations so tests can
/// assert that validation failures never reach the external capability.
pub struct StubRenderer {
    pub page: RenderedPage,
    pub fail: bool,
    pub calls: Arc<AtomicUsize>,
}

#[async_trait]
impl PageRenderer for StubRenderer {
    async fn render(&self, _url: &Url) -> AppResult<RenderedPage> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(AppError::Render("navigation timeout".into()));
        }
        Ok(self.page.clone())
    }
}

/// Model stub returning a fixed completion text.
pub struct StubModel {
    pub response: String,
    pub calls: Arc<AtomicUsize>,
}

#[async_trait]
impl SeoModel for StubModel {
    async fn critique(&self, _prompt: &str) -> AppResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.response.clone())
    }
}

/// A realistic scrape: standard, og, twitter, other, and one all-empty tag
/// that the validator must drop.
pub fn sample_page() -> RenderedPage {
    let tag = |name: Option<&str>, property: Option<&str>, content: Option<&str>| RawTag {
        name: name.map(Into::into),
        property: property.map(Into::into),
        content: content.map(Into::into),
        charset: None,
        http_equiv: None,
    };
    RenderedPage {
        title: "Example Domain".into(),
        raw_tags: vec![
            tag(Some("description"), None, Some("A test page")),
            tag(Some("viewport"), None, Some("width=device-width")),
            tag(None, Some("og:title"), Some("Hello")),
            tag(None, Some("og:title"), Some("Shadowed duplicate")),
            tag(Some("twitter:title"), None, Some("Hi")),
            tag(Some("generator"), None, Some("hugo")),
            RawTag::default(),
        ],
    }
}

/// Build the app router wired to stub capabilities. Returns the router plus
/// the renderer/model call counters.
pub fn create_test_app(
    renderer: StubRenderer,
    model: StubModel,
) -> (Router, Arc<AtomicUsize>, Arc<AtomicUsize>) {
    let renderer_calls = renderer.calls.clone();
    let model_calls = model.calls.clone();
    let state = AppState {
        http_client: reqwest::Client::new(),
        renderer: Arc::new(renderer),
        model: Arc::new(model),
        pagespeed_api_key: Arc::from("test-key"),
    };
    let app = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/analyze", get(handlers::analyze::analyze_seo))
        .route("/pagespeed", get(handlers::pagespeed::check_pagespeed))
        .with_state(state);
    (app, renderer_calls, model_calls)
}

/// App with the default sample page and stub analysis.
pub fn default_test_app() -> (Router, Arc<AtomicUsize>, Arc<AtomicUsize>) {
    create_test_app(
        StubRenderer {
            page: sample_page(),
            fail: false,
            calls: Arc::new(AtomicUsize::new(0)),
        },
        StubModel {
            response: STUB_ANALYSIS.into(),
            calls: Arc::new(AtomicUsize::new(0)),
        },
    )
}

/// Issue a GET and return (status, parsed-or-raw body).
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
    (status, body)
}
