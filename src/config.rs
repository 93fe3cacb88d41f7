use std::time::Duration;

use clap::Parser;
use reqwest::Url;
use thiserror::Error;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Discord webhook for the development channel (pull requests)
    #[arg(long, env = "DISCORD_DEV_WEBHOOK_URL")]
    pub dev_webhook_url: String,

    /// Discord webhook for the testing channel (workflow runs)
    #[arg(long, env = "DISCORD_TEST_WEBHOOK_URL")]
    pub test_webhook_url: String,

    #[arg(short, long, env = "PORT", default_value = "8088")]
    pub port: u16,

    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Upper bound on a single Discord delivery
    #[arg(long, env = "DISCORD_TIMEOUT_SECS", default_value = "10")]
    pub discord_timeout_secs: u64,
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    MissingWebhookUrl(&'static str),

    #[error("{name} is not a valid http(s) URL: {value}")]
    InvalidWebhookUrl { name: &'static str, value: String },

    #[error("discord timeout must be greater than zero")]
    ZeroTimeout,
}

/// Discord channel a notification is posted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Development,
    Testing,
}

/// Startup configuration. Immutable once built.
#[derive(Debug, Clone)]
pub struct Config {
    pub dev_webhook_url: Url,
    pub test_webhook_url: Url,
    pub host: String,
    pub port: u16,
    pub discord_timeout: Duration,
}

impl Config {
    pub fn webhook_url(&self, channel: Channel) -> &Url {
        match channel {
            Channel::Development => &self.dev_webhook_url,
            Channel::Testing => &self.test_webhook_url,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl TryFrom<Args> for Config {
    type Error = ConfigError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        if args.discord_timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(Config {
            dev_webhook_url: parse_webhook_url("DISCORD_DEV_WEBHOOK_URL", &args.dev_webhook_url)?,
            test_webhook_url: parse_webhook_url("DISCORD_TEST_WEBHOOK_URL", &args.test_webhook_url)?,
            host: args.host,
            port: args.port,
            discord_timeout: Duration::from_secs(args.discord_timeout_secs),
        })
    }
}

fn parse_webhook_url(name: &'static str, value: &str) -> Result<Url, ConfigError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ConfigError::MissingWebhookUrl(name));
    }

    let invalid = || ConfigError::InvalidWebhookUrl {
        name,
        value: value.to_string(),
    };
    let url = Url::parse(value).map_err(|_| invalid())?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(invalid()),
    }
}
