use crate::processing::SummaryOptions;
use std::env;
use std::sync::OnceLock;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_SUMMARIZATION_MODEL: &str = "llama3.2";
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Errors encountered while loading configuration from environment variables.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Environment variable contained a value that could not be parsed.
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

/// Runtime configuration for the summarization pipeline.
#[derive(Debug, Clone)]
pub struct Config {
    /// Hard cap on the final summary length, in characters.
    pub summary_max_chars: usize,
    /// Lower length hint passed to the model during convergence passes.
    pub summary_model_min_len: usize,
    /// Optional override for the computed maximum model output length.
    pub summary_model_max_len: Option<usize>,
    /// Desired per-chunk compression ratio.
    pub summary_target_ratio: f64,
    /// Chunk size, in characters, used when feeding the model.
    pub summary_chunk_size: usize,
    /// Provider used for abstractive summaries.
    pub summarization_provider: SummarizationProvider,
    /// Model identifier passed to the provider.
    pub summarization_model: String,
    /// Optional Ollama base URL override.
    pub ollama_url: Option<String>,
    /// Deadline applied to each summarization tier; `None` disables it.
    pub summarization_timeout: Option<Duration>,
}

/// Supported abstractive summarization backends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SummarizationProvider {
    /// Abstractive summaries disabled; the pipeline starts at the extractive tier.
    None,
    /// Local Ollama runtime.
    Ollama,
}

impl Config {
    /// Load configuration from environment variables, performing validation along the way.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// Blank values are treated as unset so `.env` templates with empty entries keep defaults.
    pub fn from_source<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let load = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = SummaryOptions::default();

        let summary_model_max_len = parse_optional::<usize>(&load, "SUMMARY_MODEL_MAX_LEN")?;
        if summary_model_max_len == Some(0) {
            return Err(ConfigError::InvalidValue("SUMMARY_MODEL_MAX_LEN".into()));
        }

        let summary_target_ratio = parse_optional::<f64>(&load, "SUMMARY_TARGET_RATIO")?
            .unwrap_or(defaults.target_ratio);
        if !summary_target_ratio.is_finite() || summary_target_ratio <= 0.0 {
            return Err(ConfigError::InvalidValue("SUMMARY_TARGET_RATIO".into()));
        }

        let summary_chunk_size =
            parse_optional::<usize>(&load, "SUMMARY_CHUNK_SIZE")?.unwrap_or(defaults.chunk_size);
        if summary_chunk_size == 0 {
            return Err(ConfigError::InvalidValue("SUMMARY_CHUNK_SIZE".into()));
        }

        let summarization_provider = match load("SUMMARIZATION_PROVIDER") {
            Some(value) => value
                .parse()
                .map_err(|()| ConfigError::InvalidValue("SUMMARIZATION_PROVIDER".into()))?,
            None => SummarizationProvider::Ollama,
        };

        let timeout_secs = parse_optional::<u64>(&load, "SUMMARIZATION_TIMEOUT_SECS")?
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            summary_max_chars: parse_optional(&load, "SUMMARY_MAX_CHARS")?
                .unwrap_or(defaults.max_chars),
            summary_model_min_len: parse_optional(&load, "SUMMARY_MODEL_MIN_LEN")?
                .unwrap_or(defaults.model_min_len),
            summary_model_max_len,
            summary_target_ratio,
            summary_chunk_size,
            summarization_provider,
            summarization_model: load("SUMMARIZATION_MODEL")
                .map(|value| value.trim().to_string())
                .unwrap_or_else(|| DEFAULT_SUMMARIZATION_MODEL.to_string()),
            ollama_url: load("OLLAMA_URL"),
            summarization_timeout: (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs)),
        })
    }

    /// Summary bounds derived from this configuration.
    pub fn summary_options(&self) -> SummaryOptions {
        SummaryOptions {
            max_chars: self.summary_max_chars,
            model_min_len: self.summary_model_min_len,
            model_max_len: self.summary_model_max_len,
            target_ratio: self.summary_target_ratio,
            chunk_size: self.summary_chunk_size,
        }
    }
}

fn parse_optional<T>(
    load: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
{
    load(key)
        .map(|value| {
            value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue(key.to_string()))
        })
        .transpose()
}

impl std::str::FromStr for SummarizationProvider {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" | "off" => Ok(Self::None),
            "ollama" => Ok(Self::Ollama),
            _ => Err(()),
        }
    }
}

/// Global configuration cache populated during process start.
pub static CONFIG: OnceLock<Config> = OnceLock::new();

/// Load configuration from the environment and install it in the global cache.
///
/// Repeated calls return the configuration installed by the first successful call.
pub fn init_config() -> Result<&'static Config, ConfigError> {
    dotenvy::dotenv().ok();
    if let Some(existing) = CONFIG.get() {
        return Ok(existing);
    }
    let config = Config::from_env()?;
    tracing::debug!(
        provider = ?config.summarization_provider,
        model = %config.summarization_model,
        max_chars = config.summary_max_chars,
        chunk_size = config.summary_chunk_size,
        "Loaded configuration"
    );
    Ok(CONFIG.get_or_init(|| config))
}
