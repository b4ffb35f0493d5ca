use async_trait::async_trait;
use chronicle_rust::{
    Error, Result,
    discord::{Channel, ChannelApi, Message},
};
use std::sync::{Arc, Mutex};

/// Recorded arguments of one messages-endpoint call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: u8,
    pub before: Option<String>,
}

/// Mock channel API serving a scripted sequence of pages. Once the script is
/// exhausted it keeps returning empty pages; every call is recorded.
#[derive(Debug, Default)]
pub struct MockChannelApi {
    pub channel: Option<Channel>,
    pub pages: Arc<Mutex<Vec<Vec<Message>>>>,
    pub requests: Arc<Mutex<Vec<PageRequest>>>,
    /// Fail the messages call once this many calls have succeeded.
    pub error_after: Option<usize>,
}

impl MockChannelApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pages(self, pages: Vec<Vec<Message>>) -> Self {
        *self.pages.lock().unwrap() = pages;
        self
    }

    pub fn with_channel(mut self, channel: Channel) -> Self {
        self.channel = Some(channel);
        self
    }

    pub fn with_error_after(mut self, successful_calls: usize) -> Self {
        self.error_after = Some(successful_calls);
        self
    }

    /// Handle onto the recorded requests, usable after the mock is boxed.
    pub fn requests(&self) -> Arc<Mutex<Vec<PageRequest>>> {
        Arc::clone(&self.requests)
    }
}

#[async_trait]
impl ChannelApi for MockChannelApi {
    async fn channel(&self, channel_id: &str) -> Result<Channel> {
        self.channel
            .clone()
            .ok_or_else(|| Error::api(format!("No mock channel for {}", channel_id)))
    }

    async fn messages(
        &self,
        _channel_id: &str,
        limit: u8,
        before: Option<&str>,
    ) -> Result<Vec<Message>> {
        let mut requests = self.requests.lock().unwrap();

        if let Some(successful_calls) = self.error_after {
            if requests.len() >= successful_calls {
                return Err(Error::api("Scripted transport failure"));
            }
        }

        requests.push(PageRequest {
            limit,
            before: before.map(str::to_string),
        });
        drop(requests);

        let mut pages = self.pages.lock().unwrap();
        if pages.is_empty() {
            Ok(Vec::new())
        } else {
            Ok(pages.remove(0))
        }
    }
}
