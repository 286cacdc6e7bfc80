use serde::{Deserialize, Serialize};

/// Main configuration structure loaded from ukgc_regulatory.toml and environment variables
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub system: SystemConfig,
    /// Runtime configuration loaded from environment variables
    #[serde(skip)]
    pub runtime: RuntimeConfig,
}

/// System-level configuration for the document store and the answering service
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SystemConfig {
    pub documents_path: String,
    pub answer_provider: String,
    pub answer_model: String,
    pub answer_max_tokens: u32,
    pub answer_retries: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            documents_path: "JSON Files".to_string(),
            answer_provider: "anthropic".to_string(),
            answer_model: "claude-3-5-sonnet-20241022".to_string(),
            answer_max_tokens: 2048,
            answer_retries: 1,
        }
    }
}

/// Answering-service configuration snapshot for use across components
#[derive(Debug, Clone)]
pub struct AnswerConfig {
    pub provider: String,
    pub model: String,
    pub max_tokens: u32,
    pub retries: u32,
}

/// Runtime configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub anthropic_api_key: Option<String>,
    pub answer_strict: bool,
    pub request_timeout_ms: u64,
    pub retry_delay_ms: u64,
    pub log_level: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            anthropic_api_key: None,
            answer_strict: false,
            request_timeout_ms: 30_000,
            retry_delay_ms: 500,
            log_level: "ukgc_regulatory_mcp=info,rmcp=info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file and environment variables
    /// Uses UKGC_REGULATORY_CONFIG environment variable or defaults to "ukgc_regulatory.toml"
    pub fn load() -> anyhow::Result<Self> {
        // .env resolution order: UKGC_ENV_FILE, ./.env, then ../.env when the
        // core variables still are not set (running from a subdirectory)
        if let Ok(env_path) = std::env::var("UKGC_ENV_FILE") {
            let _ = dotenvy::from_path(env_path);
        } else {
            let _ = dotenvy::from_path(".env");
            let core_present = std::env::var("UKGC_DOCS_PATH").is_ok()
                || std::env::var("ANTHROPIC_API_KEY").is_ok();
            if !core_present {
                let _ = dotenvy::from_path("../.env");
            }
        }

        let config_path = std::env::var("UKGC_REGULATORY_CONFIG")
            .unwrap_or_else(|_| "ukgc_regulatory.toml".to_string());

        let mut config: Config = if let Ok(content) = std::fs::read_to_string(&config_path) {
            toml::from_str(&content)?
        } else {
            tracing::warn!("Config file {} not found, using defaults", config_path);
            Self::default()
        };

        // Apply env overrides for the document tree and answering service (env-first)
        if let Ok(path) = std::env::var("UKGC_DOCS_PATH") {
            config.system.documents_path = path;
        }
        if let Ok(provider) = std::env::var("UKGC_ANSWER_PROVIDER") {
            config.system.answer_provider = provider;
        }
        if let Ok(model) = std::env::var("UKGC_ANSWER_MODEL") {
            config.system.answer_model = model;
        }
        if let Some(max_tokens) = std::env::var("UKGC_ANSWER_MAX_TOKENS")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
        {
            config.system.answer_max_tokens = max_tokens;
        }

        // Load runtime configuration from environment variables
        config.runtime = RuntimeConfig::load_from_env();

        // Validate configuration

        if config.system.documents_path.trim().is_empty() {
            tracing::warn!("documents_path is empty, falling back to 'JSON Files'");
            config.system.documents_path = "JSON Files".to_string();
        }

        if config.system.answer_max_tokens == 0 {
            config.system.answer_max_tokens = 2048;
        } else if config.system.answer_max_tokens > 8192 {
            tracing::warn!(
                "answer_max_tokens {} exceeds max 8192, clamping to 8192",
                config.system.answer_max_tokens
            );
            config.system.answer_max_tokens = 8192;
        }

        // A single bounded retry is the intent; anything above a handful is a misconfiguration
        if config.system.answer_retries > 5 {
            tracing::warn!(
                "answer_retries {} exceeds max 5, clamping to 5",
                config.system.answer_retries
            );
            config.system.answer_retries = 5;
        }

        match config.system.answer_provider.as_str() {
            "anthropic" | "canned" => {}
            other => tracing::warn!(
                "Unknown answer provider '{}', client creation will fall back",
                other
            ),
        }

        Ok(config)
    }

    /// Convenience: snapshot answering-service configuration
    pub fn answer(&self) -> AnswerConfig {
        AnswerConfig {
            provider: self.system.answer_provider.clone(),
            model: self.system.answer_model.clone(),
            max_tokens: self.system.answer_max_tokens,
            retries: self.system.answer_retries,
        }
    }
}

impl RuntimeConfig {
    /// Load runtime configuration from environment variables
    pub fn load_from_env() -> Self {
        Self {
            anthropic_api_key: std::env::var("ANTHROPIC_API_KEY").ok(),
            answer_strict: std::env::var("UKGC_ANSWER_STRICT")
                .ok()
                .is_some_and(|v| v == "true" || v == "1"),
            request_timeout_ms: std::env::var("UKGC_REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30_000),
            retry_delay_ms: std::env::var("UKGC_RETRY_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(500),
            log_level: std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "ukgc_regulatory_mcp=info,rmcp=info".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.system.documents_path, "JSON Files");
        assert_eq!(config.system.answer_model, "claude-3-5-sonnet-20241022");
        assert_eq!(config.system.answer_max_tokens, 2048);
        assert_eq!(config.system.answer_retries, 1);
        assert_eq!(config.runtime.request_timeout_ms, 30_000);
    }

    #[test]
    fn test_partial_toml() {
        let config: Config = toml::from_str(
            r#"
            [system]
            documents_path = "fixtures/docs"
            "#,
        )
        .expect("partial toml should deserialize");
        assert_eq!(config.system.documents_path, "fixtures/docs");
        // Unspecified fields keep their defaults
        assert_eq!(config.system.answer_provider, "anthropic");
        assert_eq!(config.system.answer_max_tokens, 2048);
    }

    #[test]
    fn test_answer_snapshot() {
        let config = Config::default();
        let answer = config.answer();
        assert_eq!(answer.provider, "anthropic");
        assert_eq!(answer.max_tokens, 2048);
    }
}
