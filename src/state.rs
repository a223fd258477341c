use std::sync::Arc;

use crate::ai::SeoModel;
use crate::renderer::PageRenderer;

/// Shared application state passed to all handlers.
///
/// Everything here is immutable after startup; the external capabilities sit
/// behind trait objects so tests can substitute stubs.
#[derive(Clone)]
pub struct AppState {
    pub http_client: reqwest::Client,
    pub renderer: Arc<dyn PageRenderer>,
    pub model: Arc<dyn SeoModel>,
    pub pagespeed_api_key: Arc<str>,
}
