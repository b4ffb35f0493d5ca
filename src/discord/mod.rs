mod client;
mod types;

pub use client::{ChannelApi, DiscordClient};
pub use types::{Author, Channel, Message};
