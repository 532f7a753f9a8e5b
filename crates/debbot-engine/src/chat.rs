//! Conversation types for the chat panel.
//!
//! A transcript is the ordered list of messages exchanged in the panel.
//! It only ever grows: messages are appended in chronological order and
//! never edited, removed, or reordered.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Greeting seeded into every fresh transcript.
pub const WELCOME_MESSAGE: &str =
    "Hello! I'm Deb's AI Assistant. Ask me anything about his skills in Python, AI, or Design.";

/// Author of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The visitor typing into the panel.
    User,
    /// The assistant answering on Deb's behalf.
    Assistant,
}

/// A single turn in the conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Who authored the message.
    pub role: Role,
    /// Message text.
    pub content: String,
    /// When the message was committed to the transcript.
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    /// Create a new user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    /// Create a new assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

/// The ordered list of exchanged messages shown in the chat panel.
///
/// Starts with the assistant's welcome message. Mutation is append-only
/// and goes through [`crate::panel::Panel`]; readers get a slice.
#[derive(Debug, Clone)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    /// Create a transcript seeded with the welcome message.
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::assistant(WELCOME_MESSAGE)],
        }
    }

    pub(crate) fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// All messages, oldest first.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Number of messages, including the welcome message.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Always false in practice: the welcome message is present from creation.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// The most recent message.
    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_constructors() {
        let user_msg = ChatMessage::user("Hello");
        assert_eq!(user_msg.role, Role::User);
        assert_eq!(user_msg.content, "Hello");

        let assistant_msg = ChatMessage::assistant("Hi there!");
        assert_eq!(assistant_msg.role, Role::Assistant);
    }

    #[test]
    fn test_transcript_seeded_with_welcome() {
        let transcript = Transcript::new();
        assert_eq!(transcript.len(), 1);

        let seed = transcript.last().unwrap();
        assert_eq!(seed.role, Role::Assistant);
        assert_eq!(seed.content, WELCOME_MESSAGE);
    }

    #[test]
    fn test_transcript_appends_in_order() {
        let mut transcript = Transcript::new();
        transcript.push(ChatMessage::user("first"));
        transcript.push(ChatMessage::assistant("second"));

        let contents: Vec<&str> = transcript
            .messages()
            .iter()
            .map(|m| m.content.as_str())
            .collect();
        assert_eq!(contents, vec![WELCOME_MESSAGE, "first", "second"]);
    }

    #[test]
    fn test_message_serialization_roundtrip() {
        let msg = ChatMessage::user("What do you build?");
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"role\":\"user\""));

        let parsed: ChatMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.role, msg.role);
        assert_eq!(parsed.content, msg.content);
    }
}
