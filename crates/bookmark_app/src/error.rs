use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::config::RunMode;

pub const MISSING_URL: &str = "URLパラメータが必要です";
pub const INVALID_URL: &str = "有効なURLを入力してください";
pub const NO_PREVIEW: &str = "プレビュー可能な情報を取得できませんでした";
pub const MISSING_FIELDS: &str = "URLと質問は必須です";
pub const EMPTY_CONTENT: &str = "URLから有効な内容を取得できませんでした";
pub const MISSING_CREDENTIAL: &str =
    "OpenAI APIキーが設定されていません。.env.localファイルにOPENAI_API_KEYを設定してください。";
pub const MISSING_CREDENTIAL_DETAILS: &str =
    "OpenAI APIキーは https://platform.openai.com/api-keys から取得できます。";
pub const GENERIC_FAILURE: &str = "エラーが発生しました。もう一度お試しください。";

/// Every failure an endpoint reports. Logging happens before one of these is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Caller input was missing, malformed, or led to nothing usable.
    BadRequest(&'static str),
    /// The server lacks something only an operator can provide.
    Configuration {
        message: &'static str,
        details: &'static str,
    },
    /// Anything else; `details` is only filled outside production.
    Internal { details: Option<String> },
}

impl ApiError {
    pub fn missing_credential() -> Self {
        ApiError::Configuration {
            message: MISSING_CREDENTIAL,
            details: MISSING_CREDENTIAL_DETAILS,
        }
    }

    pub fn generic() -> Self {
        ApiError::Internal { details: None }
    }

    pub fn internal(mode: RunMode, err: &(dyn std::error::Error + 'static)) -> Self {
        ApiError::Internal {
            details: mode
                .exposes_error_details()
                .then(|| engine_logging::error_chain(err)),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Configuration { .. } | ApiError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::BadRequest(message) => ErrorBody {
                error: message.to_string(),
                details: None,
            },
            ApiError::Configuration { message, details } => ErrorBody {
                error: message.to_string(),
                details: Some(details.to_string()),
            },
            ApiError::Internal { details } => ErrorBody {
                error: GENERIC_FAILURE.to_string(),
                details,
            },
        };
        (status, Json(body)).into_response()
    }
}
