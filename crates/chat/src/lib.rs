//! `fullstack-chat`
//!
//! **Responsibility:** single-turn proxy to an external chat-completion provider.
//!
//! - It keeps no conversation state: callers resend history on every call.
//! - It never retries; one inbound call is one outbound call.
//! - The credential is looked up through a [`CredentialProvider`] on every call.

pub mod client;
pub mod credentials;
pub mod error;
pub mod message;
pub mod proxy;

pub use client::{ChatConfig, CompletionClient, CompletionRequest, OpenAiCompatibleClient};
pub use credentials::{CredentialProvider, EnvCredentials, StaticCredentials};
pub use error::ChatError;
pub use message::{build_messages, ChatMessage, HistoryEntry};
pub use proxy::ChatProxy;
