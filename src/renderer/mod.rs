use std::time::Duration;

use axum::async_trait;
use scraper::{Html, Selector};
use url::Url;

use crate::error::{AppError, AppResult};
use crate::models::RawTag;

pub const FETCH_TIMEOUT: Duration = Duration::from_secs(15);
pub const USER_AGENT: &str = "Mozilla/5.0 (compatible; MetascopeBot/1.0)";

/// Page title plus every `<meta>` element's raw attributes, in document order.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub title: String,
    pub raw_tags: Vec<RawTag>,
}

/// External page-render capability. The shipped implementation fetches over
/// plain HTTP; a headless-browser implementation would plug in here.
#[async_trait]
pub trait PageRenderer: Send + Sync {
    async fn render(&self, url: &Url) -> AppResult<RenderedPage>;
}

/// Fetches the page with reqwest and parses it with scraper. The client and
/// parsed document are dropped on every exit path, so the page resources are
/// released even when the fetch or parse fails.
pub struct HttpRenderer {
    client: reqwest::Client,
}

impl HttpRenderer {
    pub fn new() -> reqwest::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(HttpRenderer { client })
    }
}

#[async_trait]
impl PageRenderer for HttpRenderer {
    async fn render(&self, url: &Url) -> AppResult<RenderedPage> {
        let response = self.client.get(url.as_str()).send().await.map_err(|e| {
            tracing::warn!(error = ?e, url = %url, "Failed to fetch page");
            AppError::Render(format!("could not fetch {url}: {e}"))
        })?;

        let html = response
            .text()
            .await
            .map_err(|e| AppError::Render(format!("could not read response body: {e}")))?;

        Ok(parse_page(&html))
    }
}

/// Extract `<title>` text and all `<meta>` attributes from raw HTML.
///
/// Synchronous on purpose: `scraper::Html` is not `Send`, so it must not be
/// held across an await point.
pub fn parse_page(html: &str) -> RenderedPage {
    let document = Html::parse_document(html);

    let title = Selector::parse("title")
        .ok()
        .and_then(|sel| {
            document
                .select(&sel)
                .next()
                .map(|el| el.text().collect::<String>().trim().to_string())
        })
        .unwrap_or_default();

    let raw_tags = Selector::parse("meta")
        .ok()
        .map(|sel| {
            document
                .select(&sel)
                .map(|el| {
                    let attr = |key: &str| el.value().attr(key).map(str::to_string);
                    RawTag {
                        name: attr("name"),
                        property: attr("property"),
                        content: attr("content"),
                        charset: attr("charset"),
                        http_equiv: attr("http-equiv"),
                    }
                })
                .collect()
        })
        .unwrap_or_default();

    RenderedPage { title, raw_tags }
}
