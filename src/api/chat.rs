//! Chat and health handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use super::routes::AppState;
use super::types::{ApiError, ChatRequest, ChatResponse, HealthResponse};

/// Session id used when the caller does not supply one. All such
/// callers share a single conversation thread.
const DEFAULT_SESSION: &str = "default";

/// `POST /chat` - forward the last user message to the agent.
pub(super) async fn chat(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let last = req.messages.last().ok_or(ApiError::EmptyMessages)?;
    let session = req.session.as_deref().unwrap_or(DEFAULT_SESSION);

    let message = state.agent.run_chat(session, &last.content).await?;

    Ok(Json(ChatResponse { message }))
}

/// `GET /health` - liveness probe.
pub(super) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::Agent;
    use crate::config::Config;
    use crate::llm::{ChatMessage, LlmClient};
    use crate::api::types::IncomingMessage;
    use async_trait::async_trait;
    use serde_json::Value;
    use std::collections::VecDeque;
    use tokio::sync::Mutex;

    /// LLM client that answers from a script and records the message
    /// histories it was invoked with.
    struct ScriptedClient {
        replies: Mutex<VecDeque<String>>,
        seen: Mutex<Vec<Vec<ChatMessage>>>,
    }

    impl ScriptedClient {
        fn new(replies: &[&str]) -> Arc<Self> {
            Arc::new(Self {
                replies: Mutex::new(replies.iter().map(|s| s.to_string()).collect()),
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl LlmClient for ScriptedClient {
        async fn chat_completion(
            &self,
            _model: &str,
            messages: &[ChatMessage],
            _tools: Option<&[Value]>,
        ) -> anyhow::Result<ChatMessage> {
            self.seen.lock().await.push(messages.to_vec());
            let reply = self
                .replies
                .lock()
                .await
                .pop_front()
                .ok_or_else(|| anyhow::anyhow!("script exhausted"))?;
            Ok(ChatMessage::assistant(reply))
        }
    }

    fn test_state(client: Arc<ScriptedClient>) -> Arc<AppState> {
        let config = Config::new("test-key".to_string(), "test-model".to_string());
        Arc::new(AppState {
            agent: Agent::with_client(config, client),
        })
    }

    fn request(contents: &[&str], session: Option<&str>) -> ChatRequest {
        ChatRequest {
            messages: contents
                .iter()
                .map(|c| IncomingMessage {
                    role: "user".to_string(),
                    content: c.to_string(),
                })
                .collect(),
            session: session.map(|s| s.to_string()),
        }
    }

    #[tokio::test]
    async fn test_chat_forwards_last_message_content() {
        let client = ScriptedClient::new(&["the answer"]);
        let state = test_state(client.clone());

        let response = chat(
            State(state),
            Json(request(&["first", "middle", "the real question"], None)),
        )
        .await
        .unwrap();
        assert_eq!(response.0.message, "the answer");

        // Only the last element's content reaches the agent, verbatim
        let seen = client.seen.lock().await;
        let user_contents: Vec<&str> = seen[0]
            .iter()
            .filter(|m| m.role == crate::llm::Role::User)
            .filter_map(|m| m.content.as_deref())
            .collect();
        assert_eq!(user_contents, vec!["the real question"]);
    }

    #[tokio::test]
    async fn test_chat_rejects_empty_message_list() {
        let client = ScriptedClient::new(&[]);
        let state = test_state(client);

        let err = chat(State(state), Json(request(&[], None)))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::EmptyMessages));
    }

    #[tokio::test]
    async fn test_sequential_requests_share_default_session() {
        let client = ScriptedClient::new(&["answer one", "answer two"]);
        let state = test_state(client.clone());

        chat(State(state.clone()), Json(request(&["question one"], None)))
            .await
            .unwrap();
        chat(State(state), Json(request(&["question two"], None)))
            .await
            .unwrap();

        // The second invocation sees the first request's turns
        let seen = client.seen.lock().await;
        let contents: Vec<&str> = seen[1].iter().filter_map(|m| m.content.as_deref()).collect();
        assert!(contents.contains(&"question one"));
        assert!(contents.contains(&"answer one"));
    }

    #[tokio::test]
    async fn test_explicit_session_isolates_conversation() {
        let client = ScriptedClient::new(&["a", "b"]);
        let state = test_state(client.clone());

        chat(State(state.clone()), Json(request(&["shared question"], None)))
            .await
            .unwrap();
        chat(State(state), Json(request(&["private question"], Some("alice"))))
            .await
            .unwrap();

        let seen = client.seen.lock().await;
        let contents: Vec<&str> = seen[1].iter().filter_map(|m| m.content.as_deref()).collect();
        assert!(!contents.contains(&"shared question"));
    }

    #[tokio::test]
    async fn test_llm_failure_surfaces_as_agent_error() {
        let client = ScriptedClient::new(&[]);
        let state = test_state(client);

        let err = chat(State(state), Json(request(&["hi"], None)))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Agent(_)));
    }

    #[tokio::test]
    async fn test_health_reports_ok() {
        let response = health().await;
        assert_eq!(response.0.status, "ok");
        assert_eq!(response.0.version, env!("CARGO_PKG_VERSION"));
    }
}
