//! Poll loop - one bounded scan-and-notify run

use std::time::Duration;

use chrono::{NaiveDate, Utc};
use tracing::info;

use crate::application::errors::BotError;
use crate::application::scrum::{notifier, prompt, roster, scanner, thread};
use crate::domain::entities::StatusTable;
use crate::domain::traits::ChatTransport;

/// Tuning knobs for the poll loop
///
/// Defaults match the classic behavior: three rounds, ten seconds apart,
/// with a one second settle delay after posting the prompt and a one hour
/// history window for finding the thread root.
#[derive(Debug, Clone)]
pub struct PollSettings {
    pub rounds: u32,
    pub interval: Duration,
    pub settle_delay: Duration,
    pub lookback: Duration,
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            rounds: 3,
            interval: Duration::from_secs(10),
            settle_delay: Duration::from_secs(1),
            lookback: Duration::from_secs(3600),
        }
    }
}

/// Drives one full scrum run against a channel
pub struct ScrumRunner<T: ChatTransport> {
    transport: T,
    channel: String,
    settings: PollSettings,
}

impl<T: ChatTransport> ScrumRunner<T> {
    pub fn new(transport: T, channel: impl Into<String>, settings: PollSettings) -> Self {
        Self {
            transport,
            channel: channel.into(),
            settings,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Run the whole sequence for the given date, returning how many
    /// members never posted a qualifying update
    ///
    /// Any remote failure aborts the run; a posted prompt that cannot be
    /// found in channel history afterwards is a `NotFound` error rather
    /// than a silent no-op.
    pub async fn run(&self, date: NaiveDate) -> Result<usize, BotError> {
        let prompt_text = prompt::prompt_text(date);

        info!("Posting prompt to {}: {}", self.channel, prompt_text);
        self.transport
            .post_message(&self.channel, &prompt_text)
            .await?;

        // The platform backend needs a moment before the message shows up
        // in history
        tokio::time::sleep(self.settings.settle_delay).await;

        let roster = roster::build(&self.transport, &self.channel).await?;

        let latest = Utc::now().timestamp();
        let oldest = latest - self.settings.lookback.as_secs() as i64;
        let history = self
            .transport
            .channel_history(&self.channel, oldest, latest)
            .await?;
        let thread_ts = thread::locate(&history, &prompt_text).ok_or_else(|| {
            BotError::NotFound(format!("prompt not found in channel history: {}", prompt_text))
        })?;

        let mut statuses = StatusTable::from_roster(&roster);
        let mut remaining = statuses.len();
        let mut rounds_left = self.settings.rounds;

        while rounds_left > 0 && remaining > 0 {
            tokio::time::sleep(self.settings.interval).await;
            info!("Checking for unreplied ({} round(s) left)", rounds_left);

            let replies = self
                .transport
                .thread_replies(&self.channel, &thread_ts)
                .await?;
            scanner::scan_replies(&replies, &mut statuses);
            remaining =
                notifier::follow_up(&self.transport, &self.channel, &thread_ts, &statuses).await?;
            rounds_left -= 1;
        }

        if remaining == 0 {
            info!("All {} member(s) replied", statuses.len());
        } else {
            info!("Giving up with {} member(s) unreplied", remaining);
        }
        Ok(remaining)
    }
}
