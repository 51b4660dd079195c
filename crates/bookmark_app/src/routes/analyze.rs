use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::Json;
use bookmark_engine::{AnalyzeError, AnalyzeErrorKind};
use engine_logging::{engine_error, engine_info, engine_warn};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, EMPTY_CONTENT, MISSING_FIELDS};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub question: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub answer: String,
    pub url_content: String,
}

/// `POST /api/ai/analyze-url` with `{"url": ..., "question": ...}`.
///
/// The body is read as JSON whatever its declared content type.
///
/// Apart from input and configuration problems, failures reach the caller only as
/// the generic retry message; the cause is logged with its kind.
pub async fn analyze_url(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let parsed = body.map_err(|rejection| rejection.to_string()).and_then(|bytes| {
        serde_json::from_slice::<AnalyzeRequest>(&bytes).map_err(|err| err.to_string())
    });
    let request = match parsed {
        Ok(request) => request,
        Err(reason) => {
            engine_warn!("unreadable analyze-url body: {reason}");
            return Err(ApiError::BadRequest(MISSING_FIELDS));
        }
    };
    let (Some(url), Some(question)) = (non_blank(request.url), non_blank(request.question)) else {
        return Err(ApiError::BadRequest(MISSING_FIELDS));
    };

    let Some(analyzer) = state.analyzer.as_ref() else {
        engine_error!("analyze-url called but no completion credential is configured");
        return Err(ApiError::missing_credential());
    };

    match analyzer.analyze(&url, &question).await {
        Ok(analysis) => {
            engine_info!("answered question about {url}");
            Ok(Json(AnalyzeResponse {
                answer: analysis.answer,
                url_content: analysis.url_content,
            }))
        }
        Err(AnalyzeError::EmptyContent) => {
            engine_warn!("no readable text at {url}");
            Err(ApiError::BadRequest(EMPTY_CONTENT))
        }
        Err(err) => {
            let kind: AnalyzeErrorKind = err.kind();
            engine_error!(
                "analyze-url failed for {url} [{kind:?}]: {}",
                engine_logging::error_chain(&err)
            );
            Err(ApiError::generic())
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
