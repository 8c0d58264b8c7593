//! Scratchpad tool for the agent's intermediate reasoning.

use async_trait::async_trait;
use serde_json::{json, Value};

use super::Tool;

/// Restate the query before searching. Performs no real computation;
/// the system prompt directs the agent to call it before the search
/// tool so the model commits to an interpretation of the question.
pub struct ThinkTool;

#[async_trait]
impl Tool for ThinkTool {
    fn name(&self) -> &str {
        "think"
    }

    fn description(&self) -> &str {
        "Think about the query before searching. Use this first to restate what the user is asking."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "The query to think about"
                }
            },
            "required": ["query"]
        })
    }

    async fn execute(&self, args: Value) -> anyhow::Result<String> {
        let query = args["query"]
            .as_str()
            .ok_or_else(|| anyhow::anyhow!("Missing 'query' argument"))?;

        Ok(format!("Thinking about {}", query))
    }
}
