//! Startup configuration loaded from `Env.env` and the process environment

use crate::provider::ProviderConfig;
use archcraft_error::{Error, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const BASE_URL_VAR: &str = "OPENAI_BASE_URL";
pub const TIMEOUT_VAR: &str = "ARCHCRAFT_TIMEOUT_SECS";

/// Value shipped in the sample env file; treated the same as an unset key
pub const PLACEHOLDER_API_KEY: &str = "your_openai_api_key_here";

pub const ENV_FILE_NAME: &str = "Env.env";
pub const TRANSCRIPT_FILE_NAME: &str = "Results.md";

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Directory containing the running executable
pub fn program_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe()
        .map_err(|e| Error::from(e).with_operation("config::program_dir"))?;
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| {
            Error::unexpected(format!("executable has no parent directory: {}", exe.display()))
                .with_operation("config::program_dir")
        })
}

/// Settings the session needs before it may start.
///
/// Constructed once; the credential is validated here so that a missing key
/// stops the process before the first prompt.
#[derive(Clone)]
pub struct EnvConfig {
    api_key: String,
    pub base_url: String,
    /// Set only when `ARCHCRAFT_TIMEOUT_SECS` is given
    pub timeout_secs: Option<u64>,
    /// The env file that was loaded, if any
    pub env_file: Option<PathBuf>,
    pub transcript_path: PathBuf,
}

impl EnvConfig {
    /// Load `Env.env` (if present) into the environment and read settings.
    ///
    /// The env file is looked up next to the executable, then one directory
    /// up, then in the working directory. Variables already set in the
    /// process environment win over the file.
    pub fn load() -> Result<Self> {
        let dir = program_dir()?;

        let mut candidates = vec![dir.join(ENV_FILE_NAME)];
        if let Some(parent) = dir.parent() {
            candidates.push(parent.join(ENV_FILE_NAME));
        }
        if let Ok(cwd) = std::env::current_dir() {
            candidates.push(cwd.join(ENV_FILE_NAME));
        }

        let env_file = find_env_file(&candidates);
        if let Some(path) = &env_file {
            dotenvy::from_path(path).map_err(|e| {
                Error::config_invalid(ENV_FILE_NAME, format!("failed to read {}: {}", path.display(), e))
                    .with_operation("config::load")
            })?;
            debug!(path = %path.display(), "loaded environment file");
        }

        Self::from_lookup(
            |key| std::env::var(key).ok(),
            env_file,
            dir.join(TRANSCRIPT_FILE_NAME),
        )
    }

    /// Build from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F, env_file: Option<PathBuf>, transcript_path: PathBuf) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty() && v != PLACEHOLDER_API_KEY)
            .ok_or_else(|| {
                Error::credential_missing(
                    API_KEY_VAR,
                    format!(
                        "{} not set in {} or is still a placeholder. Please configure your API key.",
                        API_KEY_VAR, ENV_FILE_NAME
                    ),
                )
                .with_operation("config::load")
            })?;

        let base_url = lookup(BASE_URL_VAR)
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout_secs = lookup(TIMEOUT_VAR)
            .map(|raw| {
                raw.trim().parse::<u64>().map_err(|_| {
                    Error::config_invalid(TIMEOUT_VAR, format!("expected whole seconds, got '{}'", raw))
                        .with_operation("config::load")
                })
            })
            .transpose()?;

        Ok(Self {
            api_key,
            base_url,
            timeout_secs,
            env_file,
            transcript_path,
        })
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Provider settings for the OpenAI runner
    pub fn provider_config(&self) -> ProviderConfig {
        let config = ProviderConfig::openai(self.api_key.clone()).with_base_url(self.base_url.clone());
        match self.timeout_secs {
            Some(secs) => config.with_timeout(secs),
            None => config,
        }
    }
}

impl fmt::Debug for EnvConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("env_file", &self.env_file)
            .field("transcript_path", &self.transcript_path)
            .finish()
    }
}

fn find_env_file(candidates: &[PathBuf]) -> Option<PathBuf> {
    candidates.iter().find(|p| p.is_file()).cloned()
}
