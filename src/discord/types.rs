use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Channel {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl Channel {
    /// The human-readable channel name; the API omits it for channel kinds
    /// this tool does not archive, which is treated as an error.
    pub fn require_name(&self) -> Result<&str> {
        self.name.as_deref().ok_or_else(|| Error::ChannelNameMissing {
            channel_id: self.id.clone(),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub discriminator: String,
}

/// One unit of channel history as returned by the messages endpoint.
///
/// `id` is an opaque snowflake used only as a pagination cursor and for
/// equality; ordering comes from the position in the API response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    #[serde(default)]
    pub content: String,
    pub author: Author,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub edited_timestamp: Option<DateTime<Utc>>,
}
