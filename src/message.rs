//! Chat message and conversation value types.
//!
//! Messages carry an [`Emotion`] instead of a reaction; text is optional.

use crate::emotion::Emotion;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub sender_id: String,
    pub receiver_id: String,
    pub emotion: Emotion,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub text_content: Option<String>,
    /// Milliseconds since the Unix epoch
    pub timestamp: u64,
    pub is_read: bool,
}

impl Message {
    /// Create an unread message stamped with the current time.
    pub fn new(
        sender_id: impl Into<String>,
        receiver_id: impl Into<String>,
        emotion: Emotion,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            sender_id: sender_id.into(),
            receiver_id: receiver_id.into(),
            emotion,
            text_content: None,
            timestamp: now_ms(),
            is_read: false,
        }
    }

    /// Attach an optional text body
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text_content = Some(text.into());
        self
    }

    /// Mark the message as read
    pub fn mark_read(&mut self) {
        self.is_read = true;
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub emoji_avatar: Option<String>,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            emoji_avatar: None,
        }
    }

    /// Set the emoji used in place of an avatar image
    pub fn emoji_avatar(mut self, emoji: impl Into<String>) -> Self {
        self.emoji_avatar = Some(emoji.into());
        self
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: String,
    pub participants: Vec<User>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub last_message: Option<Message>,
    pub unread_count: u32,
}

impl Conversation {
    pub fn new(id: impl Into<String>, participants: Vec<User>) -> Self {
        Self {
            id: id.into(),
            participants,
            last_message: None,
            unread_count: 0,
        }
    }

    /// Record a newly received message as the latest in this conversation.
    pub fn push_message(&mut self, message: Message) {
        if !message.is_read {
            self.unread_count += 1;
        }
        self.last_message = Some(message);
    }

    /// Clear the unread counter, marking the latest message read.
    pub fn mark_all_read(&mut self) {
        self.unread_count = 0;
        if let Some(message) = &mut self.last_message {
            message.mark_read();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emotion::catalog;

    fn joy() -> Emotion {
        catalog::emotion_by_id("joy").unwrap()
    }

    #[test]
    fn test_new_message_defaults() {
        let message = Message::new("alice", "bob", joy());
        assert!(!message.is_read);
        assert!(message.text_content.is_none());
        assert!(message.timestamp > 0);
        assert_eq!(message.sender_id, "alice");
    }

    #[test]
    fn test_message_ids_are_distinct() {
        let a = Message::new("alice", "bob", joy());
        let b = Message::new("alice", "bob", joy());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_conversation_unread_tracking() {
        let users = vec![User::new("alice", "Alice"), User::new("bob", "Bob")];
        let mut conversation = Conversation::new("alice-bob", users);

        conversation.push_message(Message::new("bob", "alice", joy()).text("hey"));
        conversation.push_message(Message::new("bob", "alice", joy()));
        assert_eq!(conversation.unread_count, 2);

        conversation.mark_all_read();
        assert_eq!(conversation.unread_count, 0);
        assert!(conversation.last_message.as_ref().unwrap().is_read);
    }

    #[test]
    fn test_message_serde_roundtrip() {
        let message = Message::new("alice", "bob", joy()).text("hello");
        let json = serde_json::to_string(&message).unwrap();
        assert!(json.contains("\"senderId\""));
        assert!(json.contains("\"textContent\""));

        let back: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(back, message);
    }
}
