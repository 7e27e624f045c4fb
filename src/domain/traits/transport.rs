use async_trait::async_trait;

use crate::application::errors::BotError;
use crate::domain::entities::{ChannelMessage, Member};

/// ChatTransport trait - abstraction for the messaging platform
///
/// One method per outbound call the bot makes. Implemented by the Slack
/// adapter in production and by an in-memory fake in tests.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Post a message to a channel, returning its timestamp (the thread id
    /// if replies are posted under it)
    async fn post_message(&self, channel: &str, text: &str) -> Result<String, BotError>;

    /// Post a reply inside an existing thread
    async fn post_thread_reply(
        &self,
        channel: &str,
        thread_ts: &str,
        text: &str,
    ) -> Result<String, BotError>;

    /// Member ids of a channel
    async fn channel_members(&self, channel: &str) -> Result<Vec<String>, BotError>;

    /// The full workspace user directory
    async fn list_users(&self) -> Result<Vec<Member>, BotError>;

    /// Channel messages between `oldest` and `latest` (epoch seconds),
    /// newest first
    async fn channel_history(
        &self,
        channel: &str,
        oldest: i64,
        latest: i64,
    ) -> Result<Vec<ChannelMessage>, BotError>;

    /// All replies under a thread, including the root message
    async fn thread_replies(
        &self,
        channel: &str,
        thread_ts: &str,
    ) -> Result<Vec<ChannelMessage>, BotError>;
}
