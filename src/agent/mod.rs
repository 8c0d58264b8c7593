//! Agent module - the research assistant's reasoning loop.
//!
//! The agent follows a "tools in a loop" pattern:
//! 1. Build context with system prompt, checkpointed turns, and the new message
//! 2. Call LLM with available tools
//! 3. If LLM requests tool calls, execute them and feed results back
//! 4. Repeat until LLM produces final response or max iterations reached
//!
//! Conversation turns are checkpointed per session so a follow-up
//! request continues the same conversation.

mod agent_loop;
mod checkpoint;
mod prompt;

pub use agent_loop::Agent;
pub use checkpoint::{CheckpointStore, InMemoryCheckpointStore};
pub use prompt::build_system_prompt;
