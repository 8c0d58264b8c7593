//! # arXiv Scout
//!
//! A research assistant agent for academic papers, exposed over HTTP.
//!
//! This library provides:
//! - An HTTP API with a single chat endpoint
//! - A tool-based agent loop specialized for arXiv research
//! - Integration with Groq for LLM access
//!
//! ## Architecture
//!
//! The agent follows the "tools in a loop" pattern:
//! 1. Receive a chat message via the API
//! 2. Build context with system prompt, prior turns, and available tools
//! 3. Call LLM, parse response, execute any tool calls
//! 4. Feed results back to LLM, repeat until a final answer is produced
//!
//! Conversation state lives in an in-memory checkpoint store keyed by a
//! session identifier, so follow-up questions see earlier turns.
//!
//! ## Example
//!
//! ```rust,ignore
//! use arxiv_scout::{config::Config, agent::Agent};
//!
//! let config = Config::from_env()?;
//! let agent = Agent::new(config);
//! let reply = agent.run_chat("default", "What is retrieval-augmented generation?").await?;
//! ```

pub mod agent;
pub mod api;
pub mod config;
pub mod llm;
pub mod tools;

pub use config::Config;
