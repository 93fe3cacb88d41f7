use tracing::info;

use crate::discord::{Embed, EmbedField, Message, embed_url, link};
use crate::github::GitHubEvent;

pub const COLOR_OPEN: u32 = 0x1D82F7;
pub const COLOR_MERGED: u32 = 0x6E48CD;

const NOTIFY_ACTIONS: &[&str] = &["opened", "reopened", "ready_for_review", "closed"];

/// Builds the development channel message for a `pull_request` event.
///
/// Returns `None` for actions nobody needs to hear about, including a pull
/// request closed without being merged.
pub fn pull_request_notification(event: &GitHubEvent) -> Option<Message> {
    let action = event.action.as_str();
    let pr = &event.pull_request;
    info!("Processing pull request event: {}", action);

    if !NOTIFY_ACTIONS.contains(&action) {
        info!("Ignoring PR action: {}", action);
        return None;
    }

    let merged = action == "closed" && pr.merged;
    if action == "closed" && !merged {
        info!(
            "PR #{} was closed without merging, not sending notification",
            pr.number
        );
        return None;
    }

    let (label, color) = if merged {
        ("merged", COLOR_MERGED)
    } else {
        (action, COLOR_OPEN)
    };

    Some(Message::with_embed(Embed {
        title: format!("Pull Request {}", label),
        description: format!(
            "**{}** {} {}",
            event.sender.login,
            label,
            link(format!("#{}: {}", pr.number, pr.title), &pr.html_url)
        ),
        color,
        url: embed_url(&pr.html_url),
        fields: vec![
            EmbedField::inline(
                "Repository",
                link(&event.repository.full_name, &event.repository.html_url),
            ),
            EmbedField::inline("PR Status", pr.state.as_str()),
        ],
    }))
}
