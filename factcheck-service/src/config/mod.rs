use secrecy::Secret;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Completion API host used when `OPENAI_API_BASE` is not set.
pub const DEFAULT_OPENAI_API_BASE: &str = "https://api.openai.com";

/// Model used for the analysis when `FACTCHECK_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "gpt-4-turbo";

#[derive(Debug, Clone)]
pub struct FactCheckConfig {
    pub common: core_config::Config,
    pub openai: OpenAiSettings,
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone)]
pub struct OpenAiSettings {
    /// Missing keys are not a startup failure: the handler reports them
    /// on every request instead.
    pub api_key: Option<Secret<String>>,
    pub base_url: String,
    pub model: String,
}

#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    pub log_level: String,
    pub otlp_endpoint: Option<String>,
}

impl FactCheckConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;

        Ok(FactCheckConfig {
            common,
            openai: OpenAiSettings {
                api_key: optional_env("OPENAI_API_KEY").map(Secret::new),
                base_url: optional_env("OPENAI_API_BASE")
                    .unwrap_or_else(|| DEFAULT_OPENAI_API_BASE.to_string()),
                model: optional_env("FACTCHECK_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            },
            observability: ObservabilityConfig::from_env(),
        })
    }
}

impl ObservabilityConfig {
    /// Readable before the rest of the configuration so logging is up
    /// while configuration errors are reported.
    pub fn from_env() -> Self {
        ObservabilityConfig {
            log_level: optional_env("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            otlp_endpoint: optional_env("OTLP_ENDPOINT"),
        }
    }
}

/// Read an environment variable, treating blank values as unset.
fn optional_env(key: &str) -> Option<String> {
    non_blank(env::var(key).ok())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_values_count_as_unset() {
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some(String::new())), None);
        assert_eq!(non_blank(Some("   ".to_string())), None);
        assert_eq!(non_blank(Some("sk-test".to_string())), Some("sk-test".to_string()));
    }
}
