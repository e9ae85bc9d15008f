//! Chat with the remote coaching backend.

pub mod client;
pub mod session;
pub mod types;

pub use client::HttpCoachClient;
pub use session::{
    ChatSession, LoginOutcome, SendOutcome, CHAT_FALLBACK, LOGIN_UNREACHABLE, QUICK_SUGGESTIONS,
};
pub use types::{
    parse_timestamp, ChatMessage, ChatReply, CoachApi, CoachError, HealthStatus, LoginResponse,
    Sender,
};
