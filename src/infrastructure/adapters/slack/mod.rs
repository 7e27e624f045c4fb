//! Slack adapter
//!
//! Talks to the Slack Web API with a bot token. Required scopes:
//! `chat:write`, `users:read`, plus `channels:history`/`channels:read`
//! for public channels or `groups:history`/`groups:read` for private
//! ones.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::errors::BotError;
use crate::domain::entities::{ChannelMessage, Member};
use crate::domain::traits::ChatTransport;

/// Slack Web API base URL
const API_BASE: &str = "https://slack.com/api";

/// Slack message as it appears in history and thread responses
#[derive(Debug, Clone, Deserialize)]
struct SlackMessage {
    ts: String,
    user: Option<String>,
    #[serde(default)]
    text: String,
}

impl From<SlackMessage> for ChannelMessage {
    fn from(msg: SlackMessage) -> Self {
        ChannelMessage {
            ts: msg.ts,
            user: msg.user,
            text: msg.text,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct SlackUser {
    id: String,
    is_bot: bool,
    profile: SlackProfile,
}

#[derive(Debug, Clone, Deserialize)]
struct SlackProfile {
    #[serde(default)]
    real_name_normalized: String,
}

#[derive(Debug, Clone, Deserialize)]
struct ResponseMetadata {
    next_cursor: Option<String>,
}

/// Slack Web API adapter
pub struct SlackAdapter {
    token: String,
    client: Client,
}

impl SlackAdapter {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            client: Client::new(),
        }
    }

    /// Get the API URL for a method
    fn api_url(&self, method: &str) -> String {
        format!("{}/{}", API_BASE, method)
    }

    /// Map Slack's `ok`/`error` envelope to a typed failure
    fn ensure_ok(method: &str, ok: bool, error: Option<String>) -> Result<(), BotError> {
        if ok {
            Ok(())
        } else {
            Err(BotError::Api(format!(
                "{}: {}",
                method,
                error.unwrap_or_else(|| "unknown error".to_string())
            )))
        }
    }

    async fn post_chat_message(
        &self,
        channel: &str,
        thread_ts: Option<&str>,
        text: &str,
    ) -> Result<String, BotError> {
        #[derive(Serialize)]
        struct PostMessageRequest {
            channel: String,
            text: String,
            #[serde(skip_serializing_if = "Option::is_none")]
            thread_ts: Option<String>,
        }

        #[derive(Deserialize)]
        struct Response {
            ok: bool,
            error: Option<String>,
            ts: Option<String>,
        }

        let url = self.api_url("chat.postMessage");
        let request = PostMessageRequest {
            channel: channel.to_string(),
            text: text.to_string(),
            thread_ts: thread_ts.map(|s| s.to_string()),
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(&request)
            .send()
            .await
            .map_err(|e| BotError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(BotError::Network(format!(
                "Slack API error: {}",
                response.status()
            )));
        }

        let data: Response = response
            .json()
            .await
            .map_err(|e| BotError::Parse(e.to_string()))?;
        Self::ensure_ok("chat.postMessage", data.ok, data.error)?;

        data.ts
            .ok_or_else(|| BotError::Parse("chat.postMessage returned no ts".to_string()))
    }

    /// GET a read method with query parameters
    async fn get_json<R: for<'de> Deserialize<'de>>(
        &self,
        method: &str,
        query: &[(&str, String)],
    ) -> Result<R, BotError> {
        let url = self.api_url(method);
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .query(query)
            .send()
            .await
            .map_err(|e| BotError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(BotError::Network(format!(
                "Slack API error: {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| BotError::Parse(e.to_string()))
    }
}

#[async_trait]
impl ChatTransport for SlackAdapter {
    async fn post_message(&self, channel: &str, text: &str) -> Result<String, BotError> {
        tracing::debug!("Posting to {}: {}", channel, text);
        self.post_chat_message(channel, None, text).await
    }

    async fn post_thread_reply(
        &self,
        channel: &str,
        thread_ts: &str,
        text: &str,
    ) -> Result<String, BotError> {
        tracing::debug!("Replying in thread {}: {}", thread_ts, text);
        self.post_chat_message(channel, Some(thread_ts), text).await
    }

    async fn channel_members(&self, channel: &str) -> Result<Vec<String>, BotError> {
        #[derive(Deserialize)]
        struct Response {
            ok: bool,
            error: Option<String>,
            #[serde(default)]
            members: Vec<String>,
            response_metadata: Option<ResponseMetadata>,
        }

        let mut members = Vec::new();
        let mut cursor: Option<String> = None;
        loop {
            let mut query = vec![("channel", channel.to_string())];
            if let Some(ref c) = cursor {
                query.push(("cursor", c.clone()));
            }

            let data: Response = self.get_json("conversations.members", &query).await?;
            Self::ensure_ok("conversations.members", data.ok, data.error)?;
            members.extend(data.members);

            cursor = data
                .response_metadata
                .and_then(|m| m.next_cursor)
                .filter(|c| !c.is_empty());
            if cursor.is_none() {
                break;
            }
        }
        Ok(members)
    }

    async fn list_users(&self) -> Result<Vec<Member>, BotError> {
        #[derive(Deserialize)]
        struct Response {
            ok: bool,
            error: Option<String>,
            #[serde(default)]
            members: Vec<SlackUser>,
            response_metadata: Option<ResponseMetadata>,
        }

        let mut users = Vec::new();
        let mut cursor: Option<String> = None;
        loop {
            let mut query = Vec::new();
            if let Some(ref c) = cursor {
                query.push(("cursor", c.clone()));
            }

            let data: Response = self.get_json("users.list", &query).await?;
            Self::ensure_ok("users.list", data.ok, data.error)?;
            users.extend(data.members.into_iter().map(|u| Member {
                id: u.id,
                real_name: u.profile.real_name_normalized,
                is_bot: u.is_bot,
            }));

            cursor = data
                .response_metadata
                .and_then(|m| m.next_cursor)
                .filter(|c| !c.is_empty());
            if cursor.is_none() {
                break;
            }
        }
        Ok(users)
    }

    async fn channel_history(
        &self,
        channel: &str,
        oldest: i64,
        latest: i64,
    ) -> Result<Vec<ChannelMessage>, BotError> {
        #[derive(Deserialize)]
        struct Response {
            ok: bool,
            error: Option<String>,
            #[serde(default)]
            messages: Vec<SlackMessage>,
        }

        let query = vec![
            ("channel", channel.to_string()),
            ("oldest", oldest.to_string()),
            ("latest", latest.to_string()),
        ];
        let data: Response = self.get_json("conversations.history", &query).await?;
        Self::ensure_ok("conversations.history", data.ok, data.error)?;
        Ok(data.messages.into_iter().map(Into::into).collect())
    }

    async fn thread_replies(
        &self,
        channel: &str,
        thread_ts: &str,
    ) -> Result<Vec<ChannelMessage>, BotError> {
        #[derive(Deserialize)]
        struct Response {
            ok: bool,
            error: Option<String>,
            #[serde(default)]
            messages: Vec<SlackMessage>,
        }

        let query = vec![
            ("channel", channel.to_string()),
            ("ts", thread_ts.to_string()),
        ];
        let data: Response = self.get_json("conversations.replies", &query).await?;
        Self::ensure_ok("conversations.replies", data.ok, data.error)?;
        Ok(data.messages.into_iter().map(Into::into).collect())
    }
}
