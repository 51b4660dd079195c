use engine_logging::{engine_debug, engine_info};
use url::Url;

use crate::document::PageDocument;
use crate::image::normalize_image_url;
use crate::platforms::run_registry;
use crate::resolve::resolve_metadata;
use crate::{ExtractionResult, FetchError, Fetcher};

const TRUNCATED_MARKER: &str = "...";
pub const PREVIEW_SNIPPET_CHARS: usize = 500;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PreviewError {
    #[error("invalid url {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("no title or description found")]
    Insufficient,
}

/// Accepts absolute http(s) URLs with a host; checked before any network call.
pub fn validate_target_url(url: &str) -> Result<Url, PreviewError> {
    let invalid = |reason: String| PreviewError::InvalidUrl {
        url: url.to_string(),
        reason,
    };
    let parsed = Url::parse(url).map_err(|err| invalid(err.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {}", parsed.scheme())));
    }
    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(invalid("missing host".to_string()));
    }
    Ok(parsed)
}

/// Platform handler, generic fallbacks, image normalisation, then the
/// title-or-description guard. Pure: the same HTML always gives the same result.
pub fn extract_preview(html: &str, url: &str) -> Result<ExtractionResult, PreviewError> {
    let doc = PageDocument::parse(html);
    let platform_fields = run_registry(url, &doc);
    let mut result = resolve_metadata(url, &doc, platform_fields);
    result.image = normalize_image_url(&result.image, url);

    if result.title.is_empty() && result.description.is_empty() {
        return Err(PreviewError::Insufficient);
    }
    Ok(result)
}

pub async fn fetch_preview(
    fetcher: &dyn Fetcher,
    url: &str,
) -> Result<ExtractionResult, PreviewError> {
    validate_target_url(url)?;
    let output = fetcher.fetch(url).await?;
    let html = output.into_html()?;
    let result = extract_preview(&html, url)?;
    engine_info!("preview resolved for {url}: {:?}", result.title);
    Ok(result)
}

/// First `limit` characters of `content` followed by `...`.
pub fn preview_snippet(content: &str, limit: usize) -> String {
    let mut snippet: String = content.chars().take(limit).collect();
    if snippet.len() < content.len() {
        engine_debug!("snippet truncated to {limit} chars");
    }
    snippet.push_str(TRUNCATED_MARKER);
    snippet
}
