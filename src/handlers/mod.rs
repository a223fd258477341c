pub mod analyze;
pub mod pagespeed;

use axum::{http::StatusCode, Json};
use serde_json::{json, Value};

pub async fn health_check() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "service": "metascope",
            "version": env!("CARGO_PKG_VERSION"),
        })),
    )
}

/// Shared URL validation for both endpoints: parseable, http/https scheme,
/// non-empty host. Failures are 400s and no external call is made.
pub fn validate_url(raw: &str) -> Result<url::Url, crate::error::AppError> {
    use crate::error::AppError;

    let invalid =
        || AppError::Validation("Invalid URL format. Include http:// or https://".into());

    let parsed = url::Url::parse(raw).map_err(|_| invalid())?;
    match parsed.scheme() {
        "http" | "https" => {}
        _ => return Err(invalid()),
    }
    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(invalid());
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_and_https() {
        assert!(validate_url("http://example.com").is_ok());
        assert!(validate_url("https://example.com/page?a=1").is_ok());
    }

    #[test]
    fn rejects_missing_scheme() {
        assert!(validate_url("example.com").is_err());
        assert!(validate_url("not-a-url").is_err());
    }

    #[test]
    fn rejects_other_schemes() {
        assert!(validate_url("ftp://example.com").is_err());
        assert!(validate_url("file:///etc/passwd").is_err());
    }

    #[test]
    fn rejects_empty_host() {
        assert!(validate_url("http://").is_err());
    }

    #[test]
    fn error_mentions_url_format() {
        let err = validate_url("not-a-url").unwrap_err();
        assert!(err.to_string().contains("Invalid URL format"));
    }
}
