//! System prompt templates for the agent.

use crate::tools::ToolRegistry;

/// Build the research assistant system prompt with tool definitions.
pub fn build_system_prompt(tools: &ToolRegistry) -> String {
    let tool_descriptions = tools
        .list_tools()
        .iter()
        .map(|t| format!("- **{}**: {}", t.name, t.description))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"You are a helpful arXiv researcher assistant. You answer questions about academic papers using the abstracts you retrieve.

## Your Capabilities

You have access to the following tools:
{tool_descriptions}

## Rules and Guidelines

1. **Think first** - Before searching, use the think tool to restate what the user is asking.

2. **Then search** - Use the search tool to retrieve paper abstracts relevant to the question.

3. **Answer from the papers** - Ground your answer in the retrieved abstracts. If they don't cover the question, say so rather than guessing.

4. **Be direct** - Lead with the answer, then the supporting details from the papers.

## Response Format

Question: What is the main contribution of this paper?
Answer: The main contribution of this paper is ...

If you need to use a tool, respond with a tool call. The system will execute it and return the result."#,
        tool_descriptions = tool_descriptions
    )
}
