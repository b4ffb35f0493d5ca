mod window;

pub use window::Window;

use crate::Result;
use crate::discord::{ChannelApi, Message};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info};

/// Hard page-size cap imposed by the platform.
pub const PAGE_LIMIT: u8 = 100;

/// Walks a channel's history backward through the cursor-paginated messages
/// endpoint, one page at a time.
///
/// Paging is inherently sequential: each request's `before` cursor comes from
/// the previous page's result, so there is never any request fan-out. Each
/// call owns its accumulator and cursor for its whole duration, and any API
/// failure aborts the call with no partial result.
pub struct HistoryFetcher {
    api: Box<dyn ChannelApi>,
    page_delay: Duration,
}

impl HistoryFetcher {
    pub fn new(api: Box<dyn ChannelApi>, page_delay: Duration) -> Self {
        Self { api, page_delay }
    }

    /// Fetch a single raw page, newest first. `limit` is clamped to the
    /// platform cap; an empty result means the history is exhausted.
    pub async fn fetch_page(
        &self,
        channel_id: &str,
        limit: u8,
        before: Option<&str>,
    ) -> Result<Vec<Message>> {
        let limit = limit.min(PAGE_LIMIT);
        self.api.messages(channel_id, limit, before).await
    }

    /// Accumulate pages until the history runs out or at least `max_total`
    /// messages have been collected, then truncate to exactly `max_total`.
    /// Overshoot from the final page is discarded, never earlier data.
    pub async fn fetch_capped(&self, channel_id: &str, max_total: usize) -> Result<Vec<Message>> {
        let mut accumulated: Vec<Message> = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let page = self
                .fetch_page(channel_id, PAGE_LIMIT, cursor.as_deref())
                .await?;

            let Some(tail) = page.last() else {
                debug!("Empty page, history exhausted");
                break;
            };

            cursor = Some(tail.id.clone());
            accumulated.extend(page);
            debug!("Accumulated {} messages", accumulated.len());

            // Rate-limit etiquette: pace after every page, including the one
            // that satisfies the cap.
            sleep(self.page_delay).await;

            if accumulated.len() >= max_total {
                break;
            }
        }

        accumulated.truncate(max_total);
        info!(
            "Fetched {} messages (cap {}) from channel {}",
            accumulated.len(),
            max_total,
            channel_id
        );
        Ok(accumulated)
    }

    /// Walk backward collecting every message whose timestamp falls inside
    /// `window`, stopping once a page's raw tail provably predates it.
    ///
    /// The stop decision and the cursor advance are both taken from the raw
    /// page tail; filtering only affects what is appended. Pages arrive
    /// newest first, so once a whole page's tail is older than the window
    /// start, every later page is older still.
    pub async fn fetch_within_window(
        &self,
        channel_id: &str,
        window: &Window,
    ) -> Result<Vec<Message>> {
        let mut accumulated: Vec<Message> = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let page = self
                .fetch_page(channel_id, PAGE_LIMIT, cursor.as_deref())
                .await?;

            let Some(tail) = page.last() else {
                debug!("Empty page, history exhausted");
                break;
            };
            let tail_id = tail.id.clone();
            let tail_timestamp = tail.timestamp;

            accumulated.extend(page.into_iter().filter(|m| window.contains(m.timestamp)));
            debug!("Accumulated {} messages in window", accumulated.len());

            if tail_timestamp < window.start {
                debug!(
                    "Page tail at {} predates window start {}, stopping",
                    tail_timestamp, window.start
                );
                break;
            }

            cursor = Some(tail_id);
            sleep(self.page_delay).await;
        }

        info!(
            "Fetched {} messages within window from channel {}",
            accumulated.len(),
            channel_id
        );
        Ok(accumulated)
    }
}
