//! OpenAI Responses API runner
//!
//! One `POST /responses` per query. Web search and code interpreter are
//! hosted tools, so the service finishes the whole agent turn before it
//! answers and no client-side tool loop is needed.

use super::*;
use crate::agent::{AgentDefinition, HostedTool};
use crate::result::{OutputItem, RunResult, Usage};
use archcraft_error::{Error, ErrorKind, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::debug;

/// Runner backed by the OpenAI Responses API
pub struct OpenAIRunner {
    client: Client,
    config: ProviderConfig,
}

impl OpenAIRunner {
    pub fn new(config: ProviderConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| {
                Error::new(ErrorKind::Unexpected, "failed to create HTTP client")
                    .with_operation("openai::new")
                    .set_source(e)
            })?;

        Ok(Self { client, config })
    }

    fn base_url(&self) -> &str {
        self.config.base_url.trim_end_matches('/')
    }
}

impl AgentRunner for OpenAIRunner {
    fn name(&self) -> &str {
        "openai"
    }

    async fn run(&self, agent: &AgentDefinition, query: &str) -> Result<RunResult> {
        let body = ResponsesRequest {
            model: &agent.model,
            instructions: &agent.instructions,
            input: query,
            tools: &agent.tools,
        };

        let mut req = self
            .client
            .post(format!("{}/responses", self.base_url()))
            .json(&body);

        if !self.config.api_key.is_empty() {
            req = req.bearer_auth(&self.config.api_key);
        }

        debug!(agent = %agent.name, model = %agent.model, tools = ?agent.tool_names(), "running agent");
        let started = Instant::now();

        let response = req.send().await.map_err(|e| {
            let message = match self.config.timeout_secs {
                Some(secs) if e.is_timeout() => format!("request timed out after {}s", secs),
                _ => e.to_string(),
            };
            Error::network_failed(message)
                .with_operation("openai::run")
                .set_source(e)
        })?;

        let status = response.status();
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let text = response.text().await.map_err(|e| {
            Error::network_failed(format!("failed to read response body: {}", e))
                .with_operation("openai::run")
                .set_source(e)
        })?;

        if !status.is_success() {
            return Err(status_error(status.as_u16(), &text, retry_after));
        }

        let result = decode_response(&agent.name, &text)?;
        debug!(
            response_id = %result.response_id,
            elapsed_ms = started.elapsed().as_millis() as u64,
            total_tokens = result.usage.total_tokens,
            "agent run finished"
        );
        Ok(result)
    }
}

/// Map a non-2xx reply to an error kind
fn status_error(status: u16, body: &str, retry_after: Option<String>) -> Error {
    let message = api_error_message(body);
    let err = match status {
        401 => Error::new(ErrorKind::AuthenticationFailed, message),
        429 => {
            let err = Error::new(ErrorKind::RateLimited, message);
            match retry_after {
                Some(secs) => err.with_context("retry_after", secs),
                None => err,
            }
        }
        500..=599 => Error::new(ErrorKind::ProviderUnavailable, message),
        _ => Error::inference_failed(message),
    };
    err.with_operation("openai::run")
        .with_context("status", status.to_string())
}

/// Pull `error.message` out of an error body, falling back to the raw text
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .map(|e| e.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                "empty response body".to_string()
            } else {
                trimmed.to_string()
            }
        })
}

/// Decode a successful response body into a `RunResult`
fn decode_response(agent_name: &str, body: &str) -> Result<RunResult> {
    let api: ResponsesResponse = serde_json::from_str(body).map_err(|e| {
        Error::parse_failed(format!("malformed response: {}", e))
            .with_operation("openai::decode")
            .set_source(e)
    })?;

    if let Some(err) = api.error {
        return Err(Error::inference_failed(err.message)
            .with_operation("openai::decode")
            .with_context("response_id", api.id));
    }
    if api.status.as_deref() == Some("failed") {
        return Err(Error::inference_failed("agent run failed without an error message")
            .with_operation("openai::decode")
            .with_context("response_id", api.id));
    }

    let items = api.output.into_iter().map(OutputItem::from).collect();
    let usage = api
        .usage
        .map(|u| Usage {
            input_tokens: u.input_tokens,
            output_tokens: u.output_tokens,
            total_tokens: u.total_tokens,
        })
        .unwrap_or_default();

    Ok(RunResult {
        agent_name: agent_name.to_string(),
        response_id: api.id,
        model: api.model,
        status: api.status,
        items,
        usage,
        incomplete_reason: api.incomplete_details.and_then(|d| d.reason),
    })
}

// ============================================================================
// Responses API Types
// ============================================================================

#[derive(Debug, Serialize)]
struct ResponsesRequest<'a> {
    model: &'a str,
    instructions: &'a str,
    input: &'a str,
    tools: &'a [HostedTool],
}

#[derive(Debug, Deserialize)]
struct ResponsesResponse {
    id: String,
    #[serde(default)]
    model: String,
    status: Option<String>,
    #[serde(default)]
    output: Vec<ApiOutputItem>,
    usage: Option<ApiUsage>,
    error: Option<ApiError>,
    incomplete_details: Option<ApiIncompleteDetails>,
}

#[derive(Debug, Deserialize)]
struct ApiOutputItem {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    content: Vec<ApiContent>,
    status: Option<String>,
    code: Option<String>,
    action: Option<ApiSearchAction>,
}

impl From<ApiOutputItem> for OutputItem {
    fn from(item: ApiOutputItem) -> Self {
        match item.kind.as_str() {
            "message" => OutputItem::Message {
                text: item
                    .content
                    .into_iter()
                    .filter(|c| c.kind == "output_text")
                    .filter_map(|c| c.text)
                    .collect::<Vec<_>>()
                    .join(""),
            },
            "web_search_call" => OutputItem::WebSearchCall {
                status: item.status,
                query: item.action.and_then(|a| a.query),
            },
            "code_interpreter_call" => OutputItem::CodeInterpreterCall {
                status: item.status,
                code: item.code,
            },
            _ => OutputItem::Other { kind: item.kind.clone() },
        }
    }
}

#[derive(Debug, Deserialize)]
struct ApiContent {
    #[serde(rename = "type")]
    kind: String,
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiSearchAction {
    query: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiUsage {
    #[serde(default)]
    input_tokens: usize,
    #[serde(default)]
    output_tokens: usize,
    #[serde(default)]
    total_tokens: usize,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ApiIncompleteDetails {
    reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMPLETED: &str = r#"{
        "id": "resp_abc",
        "object": "response",
        "model": "gpt-5.2-2025-12-11",
        "status": "completed",
        "error": null,
        "incomplete_details": null,
        "output": [
            {"type": "reasoning", "id": "rs_1", "summary": []},
            {"type": "web_search_call", "id": "ws_1", "status": "completed",
             "action": {"type": "search", "query": "fastest comparison sort"}},
            {"type": "code_interpreter_call", "id": "ci_1", "status": "completed",
             "code": "sorted([3, 1, 2])", "container_id": "cntr_1", "outputs": null},
            {"type": "message", "id": "msg_1", "role": "assistant", "status": "completed",
             "content": [
                {"type": "output_text", "text": "Use quicksort", "annotations": []},
                {"type": "output_text", "text": "...", "annotations": []}
             ]}
        ],
        "usage": {"input_tokens": 120, "output_tokens": 80, "total_tokens": 200}
    }"#;

    #[test]
    fn test_runner_name() {
        let runner = OpenAIRunner::new(ProviderConfig::openai("sk-test")).unwrap();
        assert_eq!(runner.name(), "openai");
        assert_eq!(runner.base_url(), "https://api.openai.com/v1");
        assert_eq!(runner.config.timeout_secs, None);

        let runner = OpenAIRunner::new(ProviderConfig::openai("sk-test").with_timeout(30)).unwrap();
        assert_eq!(runner.config.timeout_secs, Some(30));
    }

    #[test]
    fn test_request_body() {
        let agent = AgentDefinition::architect();
        let body = ResponsesRequest {
            model: &agent.model,
            instructions: &agent.instructions,
            input: "optimize a sort",
            tools: &agent.tools,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "gpt-5.2-2025-12-11");
        assert_eq!(json["input"], "optimize a sort");
        assert_eq!(json["tools"][0]["type"], "web_search");
        assert_eq!(json["tools"][1]["container"]["type"], "auto");
    }

    #[test]
    fn test_decode_completed() {
        let result = decode_response("Agent", COMPLETED).unwrap();
        assert_eq!(result.response_id, "resp_abc");
        assert_eq!(result.status.as_deref(), Some("completed"));
        assert_eq!(result.items.len(), 4);
        assert_eq!(result.items[0].kind(), "reasoning");
        assert_eq!(
            result.items[1],
            OutputItem::WebSearchCall {
                status: Some("completed".into()),
                query: Some("fastest comparison sort".into()),
            }
        );
        assert_eq!(result.final_output(), Some("Use quicksort..."));
        assert_eq!(result.usage.total_tokens, 200);
    }

    #[test]
    fn test_decode_without_message_falls_back() {
        let body = r#"{"id": "resp_x", "model": "m", "status": "incomplete",
                       "incomplete_details": {"reason": "max_output_tokens"},
                       "output": [{"type": "web_search_call", "status": "completed"}]}"#;
        let result = decode_response("Agent", body).unwrap();
        assert_eq!(result.final_output(), None);
        assert_eq!(result.incomplete_reason.as_deref(), Some("max_output_tokens"));
        assert!(result.display_text().contains("resp_x"));
    }

    #[test]
    fn test_decode_failed_run() {
        let body = r#"{"id": "resp_f", "model": "m", "status": "failed",
                       "error": {"code": "server_error", "message": "container crashed"},
                       "output": []}"#;
        let err = decode_response("Agent", body).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InferenceFailed);
        assert!(err.to_string().contains("container crashed"));
    }

    #[test]
    fn test_decode_malformed() {
        let err = decode_response("Agent", "<html>bad gateway</html>").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ParseFailed);
        assert!(err.source_ref().is_some());
    }

    #[test]
    fn test_status_errors() {
        let body = r#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}}"#;
        let err = status_error(401, body, None);
        assert_eq!(err.kind(), ErrorKind::AuthenticationFailed);
        assert_eq!(err.message(), "Incorrect API key provided");

        let err = status_error(429, "{}", Some("20".into()));
        assert_eq!(err.kind(), ErrorKind::RateLimited);
        assert!(err.is_retryable());
        assert!(err.context().contains(&("retry_after", "20".to_string())));
        assert_eq!(err.message(), "{}");

        let err = status_error(503, "", None);
        assert_eq!(err.kind(), ErrorKind::ProviderUnavailable);
        assert_eq!(err.message(), "empty response body");

        let err = status_error(400, "bad tool config", None);
        assert_eq!(err.kind(), ErrorKind::InferenceFailed);
        assert!(err.context().contains(&("status", "400".to_string())));
    }
}
