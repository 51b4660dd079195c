use axum::extract::{RawQuery, State};
use axum::Json;
use bookmark_core::{extract_domain, is_valid_url};
use bookmark_engine::{fetch_preview, ExtractionResult, PreviewError};
use engine_logging::{engine_debug, engine_info, log_failure};
use url::form_urlencoded;

use crate::error::{ApiError, INVALID_URL, MISSING_URL, NO_PREVIEW};
use crate::state::AppState;

/// First `url` pair of the query string; repeats are ignored.
fn url_param(query: Option<&str>) -> Option<String> {
    form_urlencoded::parse(query?.as_bytes())
        .find(|(key, _)| key == "url")
        .map(|(_, value)| value.trim().to_string())
        .filter(|url| !url.is_empty())
}

/// `GET /api/bookmarks/preview?url=...`
pub async fn preview(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Json<ExtractionResult>, ApiError> {
    let Some(url) = url_param(query.as_deref()) else {
        return Err(ApiError::BadRequest(MISSING_URL));
    };
    if !is_valid_url(&url) {
        return Err(ApiError::BadRequest(INVALID_URL));
    }

    match fetch_preview(state.fetcher.as_ref(), &url).await {
        Ok(result) => {
            engine_info!("preview served for {}", extract_domain(&url));
            Ok(Json(result))
        }
        Err(PreviewError::InvalidUrl { url, reason }) => {
            engine_debug!("rejecting preview url {url:?}: {reason}");
            Err(ApiError::BadRequest(INVALID_URL))
        }
        Err(PreviewError::Insufficient) => {
            engine_debug!("nothing previewable at {url}");
            Err(ApiError::BadRequest(NO_PREVIEW))
        }
        Err(err) => {
            log_failure(&format!("preview of {url} failed"), &err);
            Err(ApiError::internal(state.mode, &err))
        }
    }
}
