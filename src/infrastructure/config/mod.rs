//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::application::errors::ConfigError;
use crate::application::scrum::PollSettings;

/// Bot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub bot: BotConfig,
    pub slack: SlackConfig,
    pub poll: PollConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct BotConfig {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct SlackConfig {
    pub token: Option<String>,
    pub channel: Option<String>,
}

/// Poll loop tuning
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct PollConfig {
    pub rounds: u32,
    pub interval_seconds: u64,
    pub settle_seconds: u64,
    pub lookback_hours: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bot: BotConfig {
                name: "scrumbot".to_string(),
            },
            slack: SlackConfig {
                token: None,
                channel: None,
            },
            poll: PollConfig {
                rounds: 3,
                interval_seconds: 10,
                settle_seconds: 1,
                lookback_hours: 1,
            },
        }
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read config: {}", e)))?;

        serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))
    }

    /// Defaults with token and channel taken from the environment
    pub fn load_env() -> Self {
        let mut config = Config::default();
        config.apply_env();
        config
    }

    /// Fill unset token/channel from `SLACK_BOT_TOKEN` / `CHANNEL_ID`
    pub fn apply_env(&mut self) {
        if self.slack.token.is_none() {
            if let Ok(token) = std::env::var("SLACK_BOT_TOKEN") {
                self.slack.token = Some(token);
            }
        }
        if self.slack.channel.is_none() {
            if let Ok(channel) = std::env::var("CHANNEL_ID") {
                self.slack.channel = Some(channel);
            }
        }
    }

    pub fn poll_settings(&self) -> PollSettings {
        PollSettings {
            rounds: self.poll.rounds,
            interval: Duration::from_secs(self.poll.interval_seconds),
            settle_delay: Duration::from_secs(self.poll.settle_seconds),
            lookback: Duration::from_secs(self.poll.lookback_hours * 3600),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_poll_settings_match_classic_behavior() {
        let settings = Config::default().poll_settings();
        assert_eq!(settings.rounds, 3);
        assert_eq!(settings.interval, Duration::from_secs(10));
        assert_eq!(settings.settle_delay, Duration::from_secs(1));
        assert_eq!(settings.lookback, Duration::from_secs(3600));
    }

    #[test]
    fn test_parse_yaml_config() {
        let yaml = r#"
bot:
  name: standup-bot
slack:
  token: xoxb-test
  channel: C028PJHLT42
poll:
  rounds: 5
  interval-seconds: 30
  settle-seconds: 2
  lookback-hours: 2
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.bot.name, "standup-bot");
        assert_eq!(config.slack.channel.as_deref(), Some("C028PJHLT42"));
        assert_eq!(config.poll.rounds, 5);
        assert_eq!(config.poll_settings().lookback, Duration::from_secs(7200));
    }
}
