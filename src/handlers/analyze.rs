use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::ai::{build_prompt, extract_json};
use crate::error::AppResult;
use crate::handlers::validate_url;
use crate::meta::{classify, synthesize_preview};
use crate::models::{AnalyzeResponse, CurrentData, TagRecord};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct AnalyzeQuery {
    pub url: String,
}

/// GET /analyze?url=<encoded-url>
///
/// Renders the page, classifies its meta tags, synthesizes the share preview,
/// and returns the model's SEO critique alongside the current page data.
/// All-or-nothing: the caller gets the full payload or an error, never a mix.
pub async fn analyze_seo(
    State(state): State<AppState>,
    Query(params): Query<AnalyzeQuery>,
) -> AppResult<Json<AnalyzeResponse>> {
    let url = validate_url(&params.url)?;

    let page = state.renderer.render(&url).await?;

    let tags: Vec<TagRecord> = page
        .raw_tags
        .into_iter()
        .filter_map(TagRecord::from_raw)
        .collect();

    let categorized = classify(tags);
    let preview_data = synthesize_preview(&params.url, &page.title, &categorized);

    let prompt = build_prompt(&params.url, &page.title, &categorized);
    let completion = state.model.critique(&prompt).await?;
    let analysis = extract_json(&completion)?;

    tracing::info!(url = %params.url, tags = categorized.len(), "SEO analysis complete");

    Ok(Json(AnalyzeResponse {
        url: params.url,
        current_data: CurrentData {
            title: page.title,
            meta_tags: categorized,
            preview_data,
        },
        analysis,
    }))
}
