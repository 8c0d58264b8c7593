//! Tools the agent can call during its reasoning loop.
//!
//! Each tool implements the [`Tool`] trait and registers itself with a
//! [`ToolRegistry`], which hands the OpenAI function schemas to the LLM
//! and dispatches execution by name.

mod arxiv;
mod think;

pub use arxiv::ArxivSearch;
pub use think::ThinkTool;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

/// A callable capability exposed to the agent.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Unique tool name, as presented to the LLM.
    fn name(&self) -> &str;

    /// Human-readable description for the LLM and the system prompt.
    fn description(&self) -> &str;

    /// JSON schema of the tool's arguments.
    fn parameters_schema(&self) -> Value;

    /// Execute the tool with the given arguments.
    async fn execute(&self, args: Value) -> anyhow::Result<String>;
}

/// Name and description of a registered tool.
pub struct ToolInfo {
    pub name: String,
    pub description: String,
}

/// Registry of available tools.
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Create a registry with the research toolset: think and arXiv search.
    pub fn research_tools(arxiv_max_docs: usize) -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(ThinkTool));
        registry.register(Arc::new(ArxivSearch::new(arxiv_max_docs)));
        registry
    }

    /// Register a tool under its own name.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    /// List registered tools (name and description), sorted by name.
    pub fn list_tools(&self) -> Vec<ToolInfo> {
        let mut infos: Vec<ToolInfo> = self
            .tools
            .values()
            .map(|t| ToolInfo {
                name: t.name().to_string(),
                description: t.description().to_string(),
            })
            .collect();
        infos.sort_by(|a, b| a.name.cmp(&b.name));
        infos
    }

    /// OpenAI function schemas for all registered tools, sorted by name.
    pub fn get_tool_schemas(&self) -> Vec<Value> {
        let mut tools: Vec<&Arc<dyn Tool>> = self.tools.values().collect();
        tools.sort_by_key(|t| t.name().to_string());
        tools
            .into_iter()
            .map(|t| {
                json!({
                    "type": "function",
                    "function": {
                        "name": t.name(),
                        "description": t.description(),
                        "parameters": t.parameters_schema(),
                    }
                })
            })
            .collect()
    }

    /// Execute a tool by name.
    pub async fn execute(&self, name: &str, args: Value) -> anyhow::Result<String> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| anyhow::anyhow!("Unknown tool: {}", name))?;
        tool.execute(args).await
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
