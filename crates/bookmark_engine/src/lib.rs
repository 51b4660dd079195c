//! Bookmark engine: page fetching, metadata extraction for previews, and
//! question answering over page text.
mod analyze;
mod completion;
mod decode;
mod document;
mod extract;
mod fetch;
mod image;
mod platforms;
mod preview;
mod resolve;
mod types;

pub use analyze::{
    build_request, Analysis, AnalyzeError, AnalyzeErrorKind, UrlAnalyzer, ANALYSIS_MAX_TOKENS,
    ANALYSIS_TEMPERATURE, FALLBACK_ANSWER,
};
pub use completion::{
    ChatMessage, CompletionClient, CompletionError, CompletionRequest, CompletionSettings,
    OpenAiCompletionClient, Role, DEFAULT_MODEL, OPENAI_API_BASE,
};
pub use decode::{decode_html, DecodeError, DecodedHtml};
pub use document::{ExtractError, FieldChain, Lookup, PageDocument};
pub use extract::{ContentExtractor, MainTextExtractor, PageContent, MAX_PAGE_CONTENT_CHARS};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher, BROWSER_USER_AGENT};
pub use image::normalize_image_url;
pub use platforms::{dedupe_tags, run_registry, Platform, PlatformFields};
pub use preview::{
    extract_preview, fetch_preview, preview_snippet, validate_target_url, PreviewError,
    PREVIEW_SNIPPET_CHARS,
};
pub use resolve::resolve_metadata;
pub use types::{ExtractionResult, FailureKind, FetchError, FetchMetadata, FetchOutput};
