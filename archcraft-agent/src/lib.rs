//! # archcraft Agent
//!
//! Everything the session needs to talk to the remote agent:
//! 1. `AgentDefinition` - fixed instructions, hosted toolset and model
//! 2. `EnvConfig` - credential and endpoint settings loaded once at startup
//! 3. `AgentRunner` - the invocation contract, implemented by `OpenAIRunner`
//! 4. `RunResult` - the response, with its final output and textual fallback
//!
//! The agent reasons and calls its tools on the service side; this crate only
//! ships one query and decodes one answer.

mod agent;
mod config;
mod instructions;
pub mod provider;
mod result;

pub use agent::{AgentDefinition, ContainerConfig, HostedTool, DEFAULT_AGENT_NAME, DEFAULT_MODEL};
pub use config::{program_dir, EnvConfig, API_KEY_VAR, ENV_FILE_NAME, PLACEHOLDER_API_KEY, TRANSCRIPT_FILE_NAME};
pub use instructions::ARCHITECT_INSTRUCTIONS;
pub use provider::{AgentRunner, OpenAIRunner, ProviderConfig};
pub use result::{OutputItem, RunResult, Usage, UsageTracker};
