//! Conversation checkpointing keyed by session identifier.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::llm::ChatMessage;

/// Persists conversation turns across agent invocations.
#[async_trait]
pub trait CheckpointStore: Send + Sync {
    /// Load the saved turns for a session. Unknown sessions are empty.
    async fn load(&self, session: &str) -> Vec<ChatMessage>;

    /// Replace the saved turns for a session.
    async fn save(&self, session: &str, turns: Vec<ChatMessage>);
}

/// In-memory checkpoint store (non-persistent).
#[derive(Clone, Default)]
pub struct InMemoryCheckpointStore {
    sessions: Arc<RwLock<HashMap<String, Vec<ChatMessage>>>>,
}

impl InMemoryCheckpointStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CheckpointStore for InMemoryCheckpointStore {
    async fn load(&self, session: &str) -> Vec<ChatMessage> {
        self.sessions
            .read()
            .await
            .get(session)
            .cloned()
            .unwrap_or_default()
    }

    async fn save(&self, session: &str, turns: Vec<ChatMessage>) {
        self.sessions
            .write()
            .await
            .insert(session.to_string(), turns);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unknown_session_is_empty() {
        let store = InMemoryCheckpointStore::new();
        assert!(store.load("nobody").await.is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load_roundtrip() {
        let store = InMemoryCheckpointStore::new();
        store
            .save(
                "alice",
                vec![ChatMessage::user("hello"), ChatMessage::user("again")],
            )
            .await;

        let turns = store.load("alice").await;
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].content.as_deref(), Some("hello"));
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let store = InMemoryCheckpointStore::new();
        store.save("alice", vec![ChatMessage::user("hi")]).await;

        assert!(store.load("bob").await.is_empty());
        assert_eq!(store.load("alice").await.len(), 1);
    }

    #[tokio::test]
    async fn test_save_replaces_previous_turns() {
        let store = InMemoryCheckpointStore::new();
        store.save("alice", vec![ChatMessage::user("one")]).await;
        store
            .save(
                "alice",
                vec![ChatMessage::user("one"), ChatMessage::user("two")],
            )
            .await;

        assert_eq!(store.load("alice").await.len(), 2);
    }
}
