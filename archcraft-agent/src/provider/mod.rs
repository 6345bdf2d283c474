//! # Agent Invocation Service
//!
//! `AgentRunner` is the narrow contract the session calls: one agent
//! definition plus one query in, one `RunResult` (or an `Error`) out.
//! Reasoning and tool execution happen behind it.

pub mod openai;

pub use openai::OpenAIRunner;

use crate::agent::AgentDefinition;
use crate::result::RunResult;
use archcraft_error::Result;

/// Runs an agent on a query and waits for the complete answer
#[allow(async_fn_in_trait)]
pub trait AgentRunner: Send + Sync {
    /// Service name (e.g., "openai")
    fn name(&self) -> &str;

    /// Run `agent` on `query` to completion
    async fn run(&self, agent: &AgentDefinition, query: &str) -> Result<RunResult>;
}

/// Connection settings for a runner
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub api_key: String,
    pub base_url: String,
    /// Whole-request timeout; `None` waits for the service as long as it takes
    pub timeout_secs: Option<u64>,
}

impl ProviderConfig {
    pub fn openai(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: "https://api.openai.com/v1".into(),
            timeout_secs: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_config() {
        let config = ProviderConfig::openai("sk-test");
        assert_eq!(config.base_url, "https://api.openai.com/v1");
        assert_eq!(config.timeout_secs, None);

        let config = config
            .with_base_url("http://localhost:9000/v1")
            .with_timeout(15);
        assert_eq!(config.api_key, "sk-test");
        assert_eq!(config.base_url, "http://localhost:9000/v1");
        assert_eq!(config.timeout_secs, Some(15));
    }
}
