//! Question answering over a single fetched page.
//!
//! fetch -> decode -> main text (<= 4000 chars) -> two-message prompt -> completion.
//! Every step runs once, in order; nothing is retried.

use std::sync::Arc;

use engine_logging::engine_info;

use crate::completion::{ChatMessage, CompletionClient, CompletionError, CompletionRequest};
use crate::document::ExtractError;
use crate::extract::{ContentExtractor, PageContent};
use crate::preview::{preview_snippet, PREVIEW_SNIPPET_CHARS};
use crate::{FetchError, Fetcher};

pub const ANALYSIS_TEMPERATURE: f32 = 0.7;
pub const ANALYSIS_MAX_TOKENS: u32 = 1000;
pub const FALLBACK_ANSWER: &str = "回答を生成できませんでした";

const SYSTEM_PROMPT: &str = "あなたは親切で知識豊富なアシスタントです。与えられたWebページの内容に基づいて、ユーザーの質問に日本語で回答してください。";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub answer: String,
    /// Short excerpt of the page text for display next to the answer.
    pub url_content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyzeErrorKind {
    Fetch,
    Extract,
    EmptyContent,
    Completion,
}

#[derive(Debug, thiserror::Error)]
pub enum AnalyzeError {
    #[error("failed to fetch page: {0}")]
    Fetch(#[from] FetchError),
    #[error("failed to read page text: {0}")]
    Extract(#[from] ExtractError),
    #[error("page has no readable text")]
    EmptyContent,
    #[error("completion failed: {0}")]
    Completion(#[from] CompletionError),
}

impl AnalyzeError {
    /// Internal classification; callers outside the server only ever see a generic message.
    pub fn kind(&self) -> AnalyzeErrorKind {
        match self {
            AnalyzeError::Fetch(_) => AnalyzeErrorKind::Fetch,
            AnalyzeError::Extract(_) => AnalyzeErrorKind::Extract,
            AnalyzeError::EmptyContent => AnalyzeErrorKind::EmptyContent,
            AnalyzeError::Completion(_) => AnalyzeErrorKind::Completion,
        }
    }
}

pub struct UrlAnalyzer {
    fetcher: Arc<dyn Fetcher>,
    extractor: Arc<dyn ContentExtractor>,
    completion: Arc<dyn CompletionClient>,
}

impl UrlAnalyzer {
    pub fn new(
        fetcher: Arc<dyn Fetcher>,
        extractor: Arc<dyn ContentExtractor>,
        completion: Arc<dyn CompletionClient>,
    ) -> Self {
        Self {
            fetcher,
            extractor,
            completion,
        }
    }

    pub fn model_name(&self) -> &str {
        self.completion.model_name()
    }

    /// Fetches `url` and returns its main text, failing when there is none.
    pub async fn read_page(&self, url: &str) -> Result<PageContent, AnalyzeError> {
        let html = self.fetcher.fetch(url).await?.into_html()?;
        let content = self.extractor.extract(&html)?;
        if content.is_empty() {
            return Err(AnalyzeError::EmptyContent);
        }
        Ok(content)
    }

    pub async fn analyze(&self, url: &str, question: &str) -> Result<Analysis, AnalyzeError> {
        let content = self.read_page(url).await?;
        engine_info!(
            "asking {} about {url} ({} chars from {:?}{})",
            self.model_name(),
            content.text.chars().count(),
            content.source,
            if content.truncated { ", truncated" } else { "" }
        );

        let request = build_request(&content.text, question);
        let completion = self.completion.complete(request).await?;
        let answer = if completion.trim().is_empty() {
            FALLBACK_ANSWER.to_string()
        } else {
            completion
        };

        Ok(Analysis {
            answer,
            url_content: preview_snippet(&content.text, PREVIEW_SNIPPET_CHARS),
        })
    }
}

pub fn build_request(content: &str, question: &str) -> CompletionRequest {
    let user = format!(
        "以下のWebページの内容について質問があります。\n\nWebページの内容:\n{content}\n\n質問: {question}\n\n上記の内容に基づいて、質問に回答してください。"
    );
    CompletionRequest {
        messages: vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(user)],
        temperature: ANALYSIS_TEMPERATURE,
        max_tokens: ANALYSIS_MAX_TOKENS,
    }
}

#[cfg(test)]
mod tests {
    use super::{build_request, AnalyzeError, AnalyzeErrorKind, ANALYSIS_MAX_TOKENS};
    use crate::completion::Role;

    #[test]
    fn prompt_embeds_content_then_question() {
        let request = build_request("PAGE TEXT", "What is it?");
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, Role::System);
        assert!(request.messages[0].content.contains("日本語"));

        let user = &request.messages[1].content;
        let content_at = user.find("PAGE TEXT").unwrap();
        let question_at = user.find("質問: What is it?").unwrap();
        assert!(content_at < question_at);
        assert_eq!(request.max_tokens, ANALYSIS_MAX_TOKENS);
    }

    #[test]
    fn kinds_are_preserved_for_logging() {
        assert_eq!(AnalyzeError::EmptyContent.kind(), AnalyzeErrorKind::EmptyContent);
    }
}
