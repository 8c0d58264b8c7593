//! Core agent loop implementation.

use std::sync::Arc;

use crate::config::Config;
use crate::llm::{ChatMessage, GroqClient, LlmClient, ToolCall};
use crate::tools::ToolRegistry;

use super::checkpoint::{CheckpointStore, InMemoryCheckpointStore};
use super::prompt::build_system_prompt;

/// The research assistant agent.
pub struct Agent {
    config: Config,
    llm: Arc<dyn LlmClient>,
    tools: ToolRegistry,
    checkpoints: Arc<dyn CheckpointStore>,
}

impl Agent {
    /// Create a new agent with the given configuration.
    pub fn new(config: Config) -> Self {
        let llm = Arc::new(GroqClient::new(config.api_key.clone()));
        Self::with_client(config, llm)
    }

    /// Create an agent with a custom LLM client (useful for testing).
    pub fn with_client(config: Config, llm: Arc<dyn LlmClient>) -> Self {
        let tools = ToolRegistry::research_tools(config.arxiv_max_docs);
        let checkpoints = Arc::new(InMemoryCheckpointStore::new());

        Self {
            config,
            llm,
            tools,
            checkpoints,
        }
    }

    /// Run one chat turn for a session and return the final response.
    ///
    /// Prior turns of the session are loaded from the checkpoint store,
    /// and the full exchange (including tool traffic) is checkpointed
    /// once the model produces a final answer.
    pub async fn run_chat(&self, session: &str, user_message: &str) -> anyhow::Result<String> {
        // Rebuild context: fresh system prompt, then the saved turns
        let system_prompt = build_system_prompt(&self.tools);
        let mut messages = vec![ChatMessage::system(system_prompt)];
        messages.extend(self.checkpoints.load(session).await);
        messages.push(ChatMessage::user(user_message));

        // Get tool schemas for LLM
        let tool_schemas = self.tools.get_tool_schemas();

        // Agent loop
        for iteration in 0..self.config.max_iterations {
            tracing::debug!("Agent iteration {} (session {})", iteration + 1, session);

            // Call LLM
            let response = self
                .llm
                .chat_completion(&self.config.default_model, &messages, Some(&tool_schemas))
                .await?;

            // Check for tool calls
            if let Some(tool_calls) = &response.tool_calls {
                if !tool_calls.is_empty() {
                    // Add assistant message with tool calls
                    messages.push(ChatMessage::assistant_tool_calls(
                        response.content.clone(),
                        tool_calls.clone(),
                    ));

                    // Execute each tool call
                    for tool_call in tool_calls {
                        tracing::debug!(
                            "Calling tool: {} with args: {}",
                            tool_call.function.name,
                            tool_call.function.arguments
                        );

                        let result = self.execute_tool_call(tool_call).await;

                        let result_str = match result {
                            Ok(output) => output,
                            Err(e) => format!("Error: {}", e),
                        };

                        // Add tool result message
                        messages.push(ChatMessage::tool_result(result_str, tool_call.id.clone()));
                    }

                    continue;
                }
            }

            // No tool calls - this is the final response
            if let Some(content) = response.content {
                messages.push(ChatMessage::assistant(content.clone()));

                // Checkpoint everything after the system prompt
                self.checkpoints
                    .save(session, messages.split_off(1))
                    .await;

                return Ok(content);
            }

            // Empty response - shouldn't happen but handle gracefully
            return Err(anyhow::anyhow!("LLM returned empty response"));
        }

        Err(anyhow::anyhow!(
            "Max iterations ({}) reached without completion",
            self.config.max_iterations
        ))
    }

    /// Execute a single tool call.
    async fn execute_tool_call(&self, tool_call: &ToolCall) -> anyhow::Result<String> {
        let args: serde_json::Value = serde_json::from_str(&tool_call.function.arguments)
            .unwrap_or(serde_json::Value::Null);

        self.tools.execute(&tool_call.function.name, args).await
    }
}
