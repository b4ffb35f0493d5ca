use chrono::{DateTime, Duration, Utc};
use chronicle_rust::discord::{Author, Message};

pub fn instant(s: &str) -> DateTime<Utc> {
    s.parse().unwrap()
}

pub fn message(id: &str, timestamp: DateTime<Utc>) -> Message {
    Message {
        id: id.to_string(),
        content: format!("message {}", id),
        author: Author {
            id: "42".to_string(),
            username: "tester".to_string(),
            discriminator: "0001".to_string(),
        },
        timestamp,
        edited_timestamp: None,
    }
}

/// Newest-first page of `count` messages: ids count down from `newest_id`,
/// timestamps step back one second per message from `newest_ts`.
pub fn descending_page(newest_id: u32, count: u32, newest_ts: DateTime<Utc>) -> Vec<Message> {
    (0..count)
        .map(|i| {
            message(
                &(newest_id - i).to_string(),
                newest_ts - Duration::seconds(i64::from(i)),
            )
        })
        .collect()
}

pub fn ids(messages: &[Message]) -> Vec<&str> {
    messages.iter().map(|m| m.id.as_str()).collect()
}
