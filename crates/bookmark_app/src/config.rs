//! Process configuration: command-line flags with environment fallbacks.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use bookmark_engine::{CompletionSettings, FetchSettings, DEFAULT_MODEL, OPENAI_API_BASE};
use clap::{Parser, ValueEnum};
use log::LevelFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RunMode {
    Production,
    Development,
}

impl RunMode {
    /// Development responses carry the underlying error text for diagnostics.
    pub fn exposes_error_details(self) -> bool {
        self == RunMode::Development
    }
}

#[derive(Clone, Parser)]
#[command(name = "bookmark-server", about = "Bookmark preview and page Q&A API")]
pub struct AppConfig {
    /// Address the HTTP server listens on.
    #[arg(long, env = "BOOKMARK_BIND", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    #[arg(long, env = "BOOKMARK_MODE", value_enum, default_value_t = RunMode::Production)]
    pub mode: RunMode,

    /// Credential for the completion service; without it analyze-url always fails.
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: Option<String>,

    #[arg(long, env = "OPENAI_BASE_URL", default_value = OPENAI_API_BASE)]
    pub openai_base_url: String,

    #[arg(long, env = "OPENAI_MODEL", default_value = DEFAULT_MODEL)]
    pub openai_model: String,

    #[arg(long, env = "BOOKMARK_FETCH_TIMEOUT_SECS", default_value_t = 30)]
    pub fetch_timeout_secs: u64,

    #[arg(long, env = "BOOKMARK_COMPLETION_TIMEOUT_SECS", default_value_t = 60)]
    pub completion_timeout_secs: u64,

    #[arg(long, env = "BOOKMARK_LOG_LEVEL", default_value = "info", value_parser = parse_level_arg)]
    pub log_level: LevelFilter,

    /// Also write logs to this file.
    #[arg(long, env = "BOOKMARK_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

impl AppConfig {
    /// The completion credential, if one was supplied and is not blank.
    pub fn credential(&self) -> Option<&str> {
        self.openai_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            request_timeout: Duration::from_secs(self.fetch_timeout_secs),
            ..FetchSettings::default()
        }
    }

    pub fn completion_settings(&self) -> Option<CompletionSettings> {
        let key = self.credential()?;
        Some(CompletionSettings {
            model: self.openai_model.clone(),
            base_url: self.openai_base_url.clone(),
            timeout: Duration::from_secs(self.completion_timeout_secs),
            ..CompletionSettings::new(key)
        })
    }
}

fn parse_level_arg(value: &str) -> Result<LevelFilter, String> {
    engine_logging::parse_level(value).ok_or_else(|| format!("unknown log level `{value}`"))
}
