use chrono::Utc;

use super::types::{ChatMessage, CoachApi, Sender};
use crate::speech::TextToSpeech;

pub const WELCOME_SUFFIX: &str =
    "I'm your AI fitness coach and I have access to your personal fitness data. How can I help you today?";
pub const LOGIN_UNREACHABLE: &str =
    "Failed to connect to the server. Please make sure the backend is running.";
pub const CHAT_FALLBACK: &str = "Sorry, I'm having trouble connecting to the server. Please make sure the backend is running and try again.";

/// Canned prompts offered before the user types anything
pub const QUICK_SUGGESTIONS: [&str; 6] = [
    "How's my progress this week?",
    "Suggest a quick workout",
    "What should I eat for lunch?",
    "I'm feeling unmotivated",
    "Plan my rest day",
    "Review my nutrition goals",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Blank user id, no request sent
    Skipped,
    LoggedIn,
    /// Server said no; carries its message
    Rejected(String),
    Unreachable(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// Blank input or logged out, nothing appended
    Ignored,
    Replied,
    /// Request failed and the fallback message was appended
    Fallback,
}

/// One user's conversation with the coach.
///
/// Methods take `&mut self`, so only one request is ever in flight.
pub struct ChatSession<A: CoachApi> {
    api: A,
    user_id: Option<String>,
    user_data: Option<serde_json::Value>,
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl<A: CoachApi> ChatSession<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            user_id: None,
            user_data: None,
            messages: Vec::new(),
            next_id: 1,
        }
    }

    pub async fn login(&mut self, user_id: &str) -> LoginOutcome {
        let user_id = user_id.trim();
        if user_id.is_empty() {
            return LoginOutcome::Skipped;
        }

        match self.api.login(user_id).await {
            Ok(resp) if resp.success => {
                tracing::info!(user_id, "logged in");
                self.user_id = Some(user_id.to_string());
                self.user_data = resp.user_data;
                self.messages.clear();
                let welcome = format!("{} {}", resp.message, WELCOME_SUFFIX);
                self.push(welcome, Sender::Coach, Utc::now());
                LoginOutcome::LoggedIn
            }
            Ok(resp) => {
                tracing::info!(user_id, message = %resp.message, "login rejected");
                LoginOutcome::Rejected(resp.message)
            }
            Err(e) => {
                tracing::warn!(error = %e, "login request failed");
                LoginOutcome::Unreachable(LOGIN_UNREACHABLE.to_string())
            }
        }
    }

    /// Appends trimmed `content` and the coach's answer. Failures never
    /// surface as errors; they leave the fallback message in the log instead.
    pub async fn send(&mut self, content: &str) -> SendOutcome {
        let content = content.trim();
        if content.is_empty() {
            return SendOutcome::Ignored;
        }
        let Some(user_id) = self.user_id.clone() else {
            return SendOutcome::Ignored;
        };

        self.push(content.to_string(), Sender::User, Utc::now());

        match self.api.chat(content, &user_id).await {
            Ok(reply) => {
                self.push(reply.response, Sender::Coach, reply.timestamp);
                SendOutcome::Replied
            }
            Err(e) => {
                tracing::warn!(error = %e, "chat request failed");
                self.push(CHAT_FALLBACK.to_string(), Sender::Coach, Utc::now());
                SendOutcome::Fallback
            }
        }
    }

    /// Sends the quick suggestion at `index`; out of range is ignored
    pub async fn send_suggestion(&mut self, index: usize) -> SendOutcome {
        match QUICK_SUGGESTIONS.get(index) {
            Some(text) => self.send(text).await,
            None => SendOutcome::Ignored,
        }
    }

    /// Speaks message `id`, interrupting anything already playing.
    /// Returns false when no such message exists.
    pub fn read_aloud(&self, id: u64, tts: &mut dyn TextToSpeech) -> bool {
        let Some(message) = self.messages.iter().find(|m| m.id == id) else {
            return false;
        };
        if tts.is_speaking() {
            tts.cancel();
        }
        tts.speak(&message.content);
        true
    }

    pub fn logout(&mut self) {
        self.user_id = None;
        self.user_data = None;
        self.messages.clear();
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_logged_in(&self) -> bool {
        self.user_id.is_some()
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn user_data(&self) -> Option<&serde_json::Value> {
        self.user_data.as_ref()
    }

    fn push(&mut self, content: String, sender: Sender, timestamp: chrono::DateTime<Utc>) {
        self.messages.push(ChatMessage {
            id: self.next_id,
            content,
            sender,
            timestamp,
        });
        self.next_id += 1;
    }
}
