use super::types::{Channel, Message};
use crate::{Error, Result, config::DiscordConfig};
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use tracing::debug;

/// The authenticated REST collaborator the fetcher pages against.
#[async_trait]
pub trait ChannelApi: Send + Sync {
    async fn channel(&self, channel_id: &str) -> Result<Channel>;

    /// One page of history, newest first. `before` is an exclusive upper
    /// bound taken verbatim from a previously returned message id.
    async fn messages(
        &self,
        channel_id: &str,
        limit: u8,
        before: Option<&str>,
    ) -> Result<Vec<Message>>;
}

pub struct DiscordClient {
    http: reqwest::Client,
    api_base: String,
    bot_token: String,
}

impl DiscordClient {
    pub fn new(config: DiscordConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
            bot_token: config.bot_token,
        }
    }

    fn authorization(&self) -> String {
        format!("Bot {}", self.bot_token)
    }
}

#[async_trait]
impl ChannelApi for DiscordClient {
    async fn channel(&self, channel_id: &str) -> Result<Channel> {
        let url = format!("{}/channels/{}", self.api_base, channel_id);
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .header(AUTHORIZATION, self.authorization())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::api(format!(
                "GET /channels/{} returned {}",
                channel_id, status
            )));
        }

        Ok(response.json().await?)
    }

    async fn messages(
        &self,
        channel_id: &str,
        limit: u8,
        before: Option<&str>,
    ) -> Result<Vec<Message>> {
        let url = format!("{}/channels/{}/messages", self.api_base, channel_id);

        let mut query: Vec<(&str, String)> = vec![("limit", limit.to_string())];
        if let Some(before) = before {
            query.push(("before", before.to_string()));
        }

        debug!("GET {} limit={} before={:?}", url, limit, before);

        let response = self
            .http
            .get(&url)
            .query(&query)
            .header(AUTHORIZATION, self.authorization())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::api(format!(
                "GET /channels/{}/messages returned {}",
                channel_id, status
            )));
        }

        Ok(response.json().await?)
    }
}
