//! Agent definition loading with schema validation.
//!
//! An agent is a title, a description, an instruction prompt and a set of
//! selectable tools. Only the prompt feeds the analyzer.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use jsonschema::Draft;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

const AGENT_SCHEMA: &str = include_str!("../../schemas/agent/v1.schema.json");

/// Tool ids offered by the built-in catalog.
pub const KNOWN_TOOLS: &[&str] = &[
    "parallel_search",
    "exa_search",
    "exa_crawl",
    "exa_find_similar",
    "web_search",
    "webpage_understanding",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AgentDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub prompt: String,
    pub tools: Vec<String>,
}

impl AgentDefinition {
    /// Tool ids not present in [`KNOWN_TOOLS`], in declaration order.
    pub fn unknown_tools(&self) -> Vec<&str> {
        self.tools
            .iter()
            .map(String::as_str)
            .filter(|tool| !KNOWN_TOOLS.contains(tool))
            .collect()
    }
}

/// Load an agent definition from JSON and validate it against the v1 schema.
///
/// Unknown tool ids are logged, not rejected.
pub fn load_agent(path: &Path) -> Result<AgentDefinition> {
    let raw = fs::read_to_string(path).with_context(|| format!("read agent {}", path.display()))?;
    let agent = parse_agent(&raw).with_context(|| format!("load agent {}", path.display()))?;
    for tool in agent.unknown_tools() {
        warn!(tool, agent = %agent.title, "unknown tool id");
    }
    Ok(agent)
}

/// Parse and validate an agent definition from a JSON string.
pub fn parse_agent(raw: &str) -> Result<AgentDefinition> {
    let instance: Value = serde_json::from_str(raw).context("parse agent json")?;
    let schema: Value = serde_json::from_str(AGENT_SCHEMA).context("parse agent schema")?;
    let compiled = jsonschema::options()
        .with_draft(Draft::Draft202012)
        .build(&schema)
        .context("compile agent schema")?;
    let messages: Vec<String> = compiled
        .iter_errors(&instance)
        .map(|err| err.to_string())
        .collect();
    if !messages.is_empty() {
        bail!("agent schema validation failed:\n- {}", messages.join("\n- "));
    }
    serde_json::from_value(instance).context("deserialize agent")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestDir;

    const RESEARCHER: &str = r#"{
        "id": "42",
        "title": "Researcher",
        "description": "Finds sources",
        "prompt": "You are a research assistant.",
        "tools": ["exa_search", "web_search"]
    }"#;

    #[test]
    fn parses_valid_agent() {
        let agent = parse_agent(RESEARCHER).expect("parse");
        assert_eq!(agent.id.as_deref(), Some("42"));
        assert_eq!(agent.title, "Researcher");
        assert_eq!(agent.tools, vec!["exa_search", "web_search"]);
        assert!(agent.unknown_tools().is_empty());
    }

    #[test]
    fn id_is_optional() {
        let raw = r#"{"title":"T","description":"","prompt":"P","tools":[]}"#;
        assert_eq!(parse_agent(raw).expect("parse").id, None);
    }

    #[test]
    fn rejects_missing_prompt() {
        let raw = r#"{"title":"T","description":"D","tools":[]}"#;
        let err = parse_agent(raw).unwrap_err();
        assert!(err.to_string().contains("schema validation failed"));
    }

    #[test]
    fn rejects_duplicate_tools() {
        let raw = r#"{"title":"T","description":"D","prompt":"P","tools":["web_search","web_search"]}"#;
        assert!(parse_agent(raw).is_err());
    }

    #[test]
    fn reports_unknown_tools() {
        let raw = r#"{"title":"T","description":"D","prompt":"P","tools":["web_search","fax"]}"#;
        let agent = parse_agent(raw).expect("parse");
        assert_eq!(agent.unknown_tools(), vec!["fax"]);
    }

    #[test]
    fn load_agent_includes_path_in_errors() {
        let dir = TestDir::new().expect("tempdir");
        let path = dir.write("agent.json", "{").expect("write");
        let err = load_agent(&path).unwrap_err();
        assert!(format!("{err:#}").contains("agent.json"));
    }
}
