//! In-memory transport fake for tests

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::errors::BotError;
use crate::domain::entities::{ChannelMessage, Member};
use crate::domain::traits::ChatTransport;

/// Scripted stand-in for the Slack adapter
///
/// Posted prompts are echoed into the fake channel history (unless
/// suppressed) so the thread locator finds them. Thread replies are
/// scripted per round; once the script runs out the last round's replies
/// keep being served.
pub struct FakeTransport {
    members: Vec<String>,
    users: Vec<Member>,
    echo_history: bool,
    fail_with: Option<String>,
    history: Mutex<Vec<ChannelMessage>>,
    reply_rounds: Mutex<VecDeque<Vec<ChannelMessage>>>,
    current_replies: Mutex<Vec<ChannelMessage>>,
    channel_posts: Mutex<Vec<(String, String)>>,
    thread_posts: Mutex<Vec<(String, String)>>,
    next_ts: Mutex<u64>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
            users: Vec::new(),
            echo_history: true,
            fail_with: None,
            history: Mutex::new(Vec::new()),
            reply_rounds: Mutex::new(VecDeque::new()),
            current_replies: Mutex::new(Vec::new()),
            channel_posts: Mutex::new(Vec::new()),
            thread_posts: Mutex::new(Vec::new()),
            next_ts: Mutex::new(100),
        }
    }

    pub fn with_channel_members(mut self, ids: Vec<&str>) -> Self {
        self.members = ids.into_iter().map(String::from).collect();
        self
    }

    pub fn with_users(mut self, users: Vec<Member>) -> Self {
        self.users = users;
        self
    }

    /// One entry per poll round; each entry is the full reply set visible
    /// that round
    pub fn with_reply_rounds(self, rounds: Vec<Vec<ChannelMessage>>) -> Self {
        *self.reply_rounds.lock().unwrap() = rounds.into();
        self
    }

    /// Posted messages will not appear in channel history
    pub fn without_history_echo(mut self) -> Self {
        self.echo_history = false;
        self
    }

    /// Every call fails with the given API error
    pub fn failing(mut self, error: &str) -> Self {
        self.fail_with = Some(error.to_string());
        self
    }

    /// (channel, text) pairs posted to the channel itself
    pub fn channel_posts(&self) -> Vec<(String, String)> {
        self.channel_posts.lock().unwrap().clone()
    }

    /// (thread_ts, text) pairs posted into threads
    pub fn thread_posts(&self) -> Vec<(String, String)> {
        self.thread_posts.lock().unwrap().clone()
    }

    fn check_fail(&self) -> Result<(), BotError> {
        match &self.fail_with {
            Some(error) => Err(BotError::Api(error.clone())),
            None => Ok(()),
        }
    }

    fn alloc_ts(&self) -> String {
        let mut next = self.next_ts.lock().unwrap();
        *next += 1;
        format!("{}.000000", *next)
    }
}

#[async_trait]
impl ChatTransport for FakeTransport {
    async fn post_message(&self, channel: &str, text: &str) -> Result<String, BotError> {
        self.check_fail()?;
        let ts = self.alloc_ts();
        self.channel_posts
            .lock()
            .unwrap()
            .push((channel.to_string(), text.to_string()));
        if self.echo_history {
            // newest first, like conversations.history
            self.history
                .lock()
                .unwrap()
                .insert(0, ChannelMessage::new(ts.clone(), text));
        }
        Ok(ts)
    }

    async fn post_thread_reply(
        &self,
        _channel: &str,
        thread_ts: &str,
        text: &str,
    ) -> Result<String, BotError> {
        self.check_fail()?;
        self.thread_posts
            .lock()
            .unwrap()
            .push((thread_ts.to_string(), text.to_string()));
        Ok(self.alloc_ts())
    }

    async fn channel_members(&self, _channel: &str) -> Result<Vec<String>, BotError> {
        self.check_fail()?;
        Ok(self.members.clone())
    }

    async fn list_users(&self) -> Result<Vec<Member>, BotError> {
        self.check_fail()?;
        Ok(self.users.clone())
    }

    async fn channel_history(
        &self,
        _channel: &str,
        _oldest: i64,
        _latest: i64,
    ) -> Result<Vec<ChannelMessage>, BotError> {
        self.check_fail()?;
        Ok(self.history.lock().unwrap().clone())
    }

    async fn thread_replies(
        &self,
        _channel: &str,
        _thread_ts: &str,
    ) -> Result<Vec<ChannelMessage>, BotError> {
        self.check_fail()?;
        if let Some(round) = self.reply_rounds.lock().unwrap().pop_front() {
            *self.current_replies.lock().unwrap() = round;
        }
        Ok(self.current_replies.lock().unwrap().clone())
    }
}
