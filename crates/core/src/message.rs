//! Message and chat-turn domain types.
//!
//! These are the value objects that flow through the pipeline:
//! the UI submits a question → the orchestrator produces an answer →
//! the pair is appended to the chat history as a `ChatTurn`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The role of a message sender in a chat-completion payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The end user
    User,
    /// The AI assistant
    Assistant,
    /// System instructions (grounding sources, answer rules)
    System,
}

/// A single message in a chat-completion payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Unique message ID
    pub id: String,

    /// Who sent this message
    pub role: Role,

    /// The text content
    pub content: String,

    /// Timestamp
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Create a new user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role: Role::User,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    /// Create a new assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role: Role::Assistant,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    /// Create a new system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role: Role::System,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

/// One completed user turn: the question and the bot's answer.
///
/// `bot` is `None` when no answer is available — either the completion
/// call failed or the model returned an empty choice. The UI renders a
/// placeholder for that case.
///
/// An ordered `Vec<ChatTurn>` forms the chat history. The history is
/// owned by the UI layer, passed by value into the orchestrator, and
/// append-only within a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    /// The user's message text.
    pub user: String,

    /// The bot's answer, or `None` if no answer is available.
    pub bot: Option<String>,
}

impl ChatTurn {
    pub fn new(user: impl Into<String>, bot: Option<String>) -> Self {
        Self {
            user: user.into(),
            bot,
        }
    }
}
