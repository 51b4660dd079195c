use std::sync::Arc;

use bookmark_engine::{
    Fetcher, MainTextExtractor, OpenAiCompletionClient, ReqwestFetcher, UrlAnalyzer,
};
use engine_logging::{engine_error, engine_info};

use crate::config::{AppConfig, RunMode};

/// Shared by every request; built once at startup and never mutated.
#[derive(Clone)]
pub struct AppState {
    pub fetcher: Arc<dyn Fetcher>,
    /// `None` when no completion credential was configured.
    pub analyzer: Option<Arc<UrlAnalyzer>>,
    pub mode: RunMode,
}

impl AppState {
    pub fn new(
        fetcher: Arc<dyn Fetcher>,
        analyzer: Option<Arc<UrlAnalyzer>>,
        mode: RunMode,
    ) -> Self {
        Self {
            fetcher,
            analyzer,
            mode,
        }
    }

    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let fetcher: Arc<dyn Fetcher> = Arc::new(ReqwestFetcher::new(config.fetch_settings()));

        let analyzer = match config.completion_settings() {
            Some(settings) => {
                let client = OpenAiCompletionClient::new(settings)?;
                engine_info!("analyze-url enabled with model {}", config.openai_model);
                Some(Arc::new(UrlAnalyzer::new(
                    fetcher.clone(),
                    Arc::new(MainTextExtractor::default()),
                    Arc::new(client),
                )))
            }
            None => {
                engine_error!(
                    "OPENAI_API_KEY is not set; every analyze-url request will fail until it is configured"
                );
                None
            }
        };

        Ok(Self::new(fetcher, analyzer, config.mode))
    }
}
