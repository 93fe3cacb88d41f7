//! Discord webhook message types.
//!
//! Only the parts of the execute-webhook body the relay fills in. Empty
//! optional parts are left out of the JSON entirely.

use serde::Serialize;

/// Body of a Discord execute-webhook request.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Message {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub embeds: Vec<Embed>,
}

impl Message {
    pub fn with_embed(embed: Embed) -> Self {
        Message {
            content: None,
            embeds: vec![embed],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Embed {
    pub title: String,
    pub description: String,
    /// `0xRRGGBB`
    pub color: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<EmbedField>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub inline: bool,
}

impl EmbedField {
    pub fn inline(name: impl Into<String>, value: impl Into<String>) -> Self {
        EmbedField {
            name: name.into(),
            value: value.into(),
            inline: true,
        }
    }
}

/// Renders `[text](url)`.
pub fn link(text: impl std::fmt::Display, url: &str) -> String {
    format!("[{}]({})", text, url)
}

/// Discord rejects an empty `url`, so an empty link is treated as no link.
pub fn embed_url(url: &str) -> Option<String> {
    (!url.is_empty()).then(|| url.to_string())
}
