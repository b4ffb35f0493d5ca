use crate::Result;
use crate::discord::Message;
use chrono::{DateTime, Local, Utc};
use serde::Serialize;

/// Flattened display form of a message, as written to the JSON report.
#[derive(Debug, Clone, Serialize)]
pub struct DisplayRecord {
    pub id: String,
    pub author: String,
    pub content: String,
    pub timestamp: String,
    pub edited: Option<String>,
}

impl From<&Message> for DisplayRecord {
    fn from(message: &Message) -> Self {
        Self {
            id: message.id.clone(),
            author: format!(
                "{}#{}",
                message.author.username, message.author.discriminator
            ),
            content: message.content.clone(),
            timestamp: local_timestamp(message.timestamp),
            edited: message.edited_timestamp.map(local_timestamp),
        }
    }
}

/// Pretty-printed JSON array of display records, in input order.
pub fn to_json(messages: &[Message]) -> Result<String> {
    let records: Vec<DisplayRecord> = messages.iter().map(DisplayRecord::from).collect();
    Ok(serde_json::to_string_pretty(&records)?)
}

/// One `[timestamp] author: content` line per message, in input order.
pub fn to_text(messages: &[Message]) -> String {
    messages
        .iter()
        .map(|m| {
            format!(
                "[{}] {}: {}",
                local_timestamp(m.timestamp),
                m.author.username,
                m.content
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn local_timestamp(instant: DateTime<Utc>) -> String {
    instant
        .with_timezone(&Local)
        .format("%Y/%m/%d %H:%M:%S")
        .to_string()
}
