//! Relays GitHub webhook events to Discord channel webhooks.
//!
//! Pull request activity goes to the development channel, finished workflow
//! runs go to the testing channel. Everything else is acknowledged and dropped.

pub mod config;
pub mod discord;
pub mod github;
pub mod handlers;
pub mod notifier;
pub mod server;
