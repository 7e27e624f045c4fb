use clap::Parser;
use tracing_subscriber;

mod application;
mod domain;
mod infrastructure;
#[cfg(test)]
mod test_support;

use application::scrum::ScrumRunner;
use infrastructure::adapters::slack::SlackAdapter;
use infrastructure::config::Config;

#[derive(Parser)]
#[command(name = "scrumbot")]
#[command(version)]
#[command(about = "Posts the daily scrum prompt and chases missing updates", long_about = None)]
struct Cli {
    /// Slack bot token
    #[arg(short, long)]
    token: Option<String>,

    /// Channel id to post to
    #[arg(short, long)]
    channel: Option<String>,

    /// Config file path
    #[arg(long, default_value = "scrumbot.yaml")]
    config: String,

    /// Number of poll rounds before giving up
    #[arg(long)]
    rounds: Option<u32>,

    /// Seconds to wait between poll rounds
    #[arg(long)]
    interval_secs: Option<u64>,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Help output and argument errors both print and leave with
        // status 0
        Err(err) => {
            let _ = err.print();
            std::process::exit(0);
        }
    };

    std::process::exit(run_scrum(cli));
}

/// Resolve token and channel: flag wins over environment wins over config
/// file
fn resolve_identity(
    flag_token: Option<String>,
    flag_channel: Option<String>,
    env_token: Option<String>,
    env_channel: Option<String>,
    config: &Config,
) -> (Option<String>, Option<String>) {
    let token = flag_token.or(env_token).or_else(|| config.slack.token.clone());
    let channel = flag_channel
        .or(env_channel)
        .or_else(|| config.slack.channel.clone());
    (token, channel)
}

fn run_scrum(cli: Cli) -> i32 {
    // Load config
    let mut config = if std::path::Path::new(&cli.config).exists() {
        Config::load(&cli.config).unwrap_or_else(|e| {
            tracing::warn!("Failed to load config: {}, using defaults", e);
            Config::load_env()
        })
    } else {
        Config::load_env()
    };

    if let Some(rounds) = cli.rounds {
        config.poll.rounds = rounds;
    }
    if let Some(secs) = cli.interval_secs {
        config.poll.interval_seconds = secs;
    }

    let (token, channel) = resolve_identity(
        cli.token,
        cli.channel,
        std::env::var("SLACK_BOT_TOKEN").ok(),
        std::env::var("CHANNEL_ID").ok(),
        &config,
    );
    let (Some(token), Some(channel)) = (token, channel) else {
        tracing::error!(
            "channel id and slack bot token must be set either through env variable, config file, or as command line argument"
        );
        return 1;
    };

    tracing::info!("Starting {}", config.bot.name);

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("Failed to start runtime: {}", e);
            return 1;
        }
    };

    rt.block_on(async {
        let adapter = SlackAdapter::new(token);
        let runner = ScrumRunner::new(adapter, channel, config.poll_settings());
        match runner.run(chrono::Local::now().date_naive()).await {
            Ok(remaining) => {
                if remaining > 0 {
                    tracing::warn!("{} member(s) never posted an update", remaining);
                }
                0
            }
            Err(e) => {
                tracing::error!("Scrum run failed: {}", e);
                1
            }
        }
    })
}
