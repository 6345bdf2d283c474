//! Agent definition - who the agent is and what it may use

use crate::instructions::ARCHITECT_INSTRUCTIONS;
use serde::Serialize;

pub const DEFAULT_AGENT_NAME: &str = "Agent";
pub const DEFAULT_MODEL: &str = "gpt-5.2-2025-12-11";

/// A tool hosted and executed by the agent service itself
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostedTool {
    /// Search the web
    WebSearch,
    /// Execute code in a sandbox
    CodeInterpreter { container: ContainerConfig },
}

impl HostedTool {
    pub fn code_interpreter() -> Self {
        Self::CodeInterpreter {
            container: ContainerConfig::Auto,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::WebSearch => "web_search",
            Self::CodeInterpreter { .. } => "code_interpreter",
        }
    }
}

/// Sandbox container selection for the code interpreter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContainerConfig {
    /// Let the service provision a container
    Auto,
}

/// The fixed identity of the agent for a whole session.
///
/// Built once at startup and handed to the session by reference; nothing
/// mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentDefinition {
    pub name: String,
    pub instructions: String,
    pub tools: Vec<HostedTool>,
    pub model: String,
}

impl AgentDefinition {
    pub fn new(name: impl Into<String>, instructions: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            instructions: instructions.into(),
            tools: Vec::new(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// The software architect agent with web search and code execution
    pub fn architect() -> Self {
        Self::new(DEFAULT_AGENT_NAME, ARCHITECT_INSTRUCTIONS)
            .with_tool(HostedTool::WebSearch)
            .with_tool(HostedTool::code_interpreter())
    }

    pub fn with_tool(mut self, tool: HostedTool) -> Self {
        self.tools.push(tool);
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn tool_names(&self) -> Vec<&'static str> {
        self.tools.iter().map(HostedTool::name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_architect_definition() {
        let agent = AgentDefinition::architect();
        assert_eq!(agent.name, "Agent");
        assert_eq!(agent.model, "gpt-5.2-2025-12-11");
        assert_eq!(agent.tool_names(), vec!["web_search", "code_interpreter"]);
        assert!(agent.instructions.contains("Big-O time and space complexity"));
    }

    #[test]
    fn test_tool_serialization() {
        let json = serde_json::to_value(HostedTool::WebSearch).unwrap();
        assert_eq!(json, serde_json::json!({"type": "web_search"}));

        let json = serde_json::to_value(HostedTool::code_interpreter()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "code_interpreter", "container": {"type": "auto"}})
        );
    }

    #[test]
    fn test_with_model() {
        let agent = AgentDefinition::new("Reviewer", "Review things").with_model("gpt-4o");
        assert_eq!(agent.model, "gpt-4o");
        assert!(agent.tools.is_empty());
    }
}
