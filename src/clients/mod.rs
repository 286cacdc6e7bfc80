pub mod anthropic;
pub mod canned;
pub mod traits;

pub use anthropic::AnthropicClient;
pub use canned::CannedAnswerer;
pub use traits::{AnswerClient, AnswerError, AnswerRequest};

use crate::config::Config;
use anyhow::Result;
use std::sync::Arc;
use tracing::info;

/// Create the answering client named by configuration.
///
/// Provider selection order:
/// 1) Respect system.answer_provider ("anthropic" or "canned")
/// 2) For anthropic, require a usable ANTHROPIC_API_KEY
/// 3) Without one, strict mode fails and non-strict mode falls back to the
///    deterministic offline client
pub fn create_answer_client(config: &Config) -> Result<Arc<dyn AnswerClient>> {
    let is_placeholder = |s: &str| {
        let t = s.trim();
        t.is_empty()
            || t.contains("${")
            || t.eq_ignore_ascii_case("your-api-key-here")
            || t.eq_ignore_ascii_case("changeme")
    };

    let answer = config.answer();
    match answer.provider.as_str() {
        "canned" => {
            info!("Using canned offline answering client");
            Ok(Arc::new(CannedAnswerer::new()))
        }
        "anthropic" => {
            let key = config.runtime.anthropic_api_key.clone().unwrap_or_default();
            if is_placeholder(&key) {
                if config.runtime.answer_strict {
                    anyhow::bail!(
                        "answer_provider=anthropic but ANTHROPIC_API_KEY is not set"
                    );
                }
                info!("ANTHROPIC_API_KEY not set, using canned offline answering client");
                return Ok(Arc::new(CannedAnswerer::new()));
            }
            info!("Using Anthropic answering service (model={})", answer.model);
            Ok(Arc::new(AnthropicClient::new(key, &answer, &config.runtime)?))
        }
        other => {
            if config.runtime.answer_strict {
                anyhow::bail!("unknown answer provider '{}'", other);
            }
            info!(
                "Unknown answer provider '{}', using canned offline answering client",
                other
            );
            Ok(Arc::new(CannedAnswerer::new()))
        }
    }
}
