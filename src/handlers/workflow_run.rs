use tracing::info;

use crate::discord::{Embed, EmbedField, Message, embed_url, link};
use crate::github::GitHubEvent;

pub const COLOR_SUCCESS: u32 = 0x2ECC71;
pub const COLOR_FAILURE: u32 = 0xE74C3C;
pub const COLOR_CANCELLED: u32 = 0xF39C12;
pub const COLOR_SKIPPED: u32 = 0x95A5A6;
pub const COLOR_UNKNOWN: u32 = 0xE6E6E6;

pub fn conclusion_color(conclusion: &str) -> u32 {
    match conclusion {
        "success" => COLOR_SUCCESS,
        "failure" => COLOR_FAILURE,
        "cancelled" => COLOR_CANCELLED,
        "skipped" => COLOR_SKIPPED,
        _ => COLOR_UNKNOWN,
    }
}

/// Builds the testing channel message for a `workflow_run` event.
///
/// Only finished runs are reported; `requested` and `in_progress` are dropped.
pub fn workflow_run_notification(event: &GitHubEvent) -> Option<Message> {
    let run = &event.workflow_run;
    info!("Processing workflow run event: {}", event.action);

    if event.action != "completed" {
        info!("Ignoring workflow run action: {}", event.action);
        return None;
    }

    Some(Message::with_embed(Embed {
        title: format!("Workflow Run {}", run.conclusion),
        description: format!("Workflow **{}** {}", run.name, run.conclusion),
        color: conclusion_color(&run.conclusion),
        url: embed_url(&run.html_url),
        fields: vec![
            EmbedField::inline(
                "Repository",
                link(&event.repository.full_name, &event.repository.html_url),
            ),
            EmbedField::inline(
                "Triggered by",
                link(&event.sender.login, &event.sender.html_url),
            ),
        ],
    }))
}
