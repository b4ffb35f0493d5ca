use crate::config::{Config, FetchMode};
use crate::discord::{ChannelApi, DiscordClient};
use crate::fetch::{HistoryFetcher, Window};
use crate::report::Report;
use crate::summary::{self, OpenAiSummarizer, Summarizer};
use crate::{Error, Result, render};
use std::time::Duration;
use tracing::info;

/// One archiving run: resolve the channel, fetch per the configured policy,
/// write both report formats, optionally summarize.
pub async fn run(config: Config) -> Result<()> {
    let channel_id = config.discord.channel_id.clone();
    let api = DiscordClient::new(config.discord.clone());

    let channel = api.channel(&channel_id).await?;
    let channel_name = channel.require_name()?.to_string();
    info!("Archiving #{} ({})", channel_name, channel_id);

    let report = Report::create(&config.output.dir).await?;

    let fetcher = HistoryFetcher::new(
        Box::new(api),
        Duration::from_millis(config.fetch.page_delay_ms),
    );

    let messages = match config.fetch.mode {
        FetchMode::Today => {
            fetcher
                .fetch_within_window(&channel_id, &Window::today()?)
                .await?
        }
        FetchMode::Date => {
            let date = config.fetch.date.ok_or_else(|| {
                Error::config("fetch.date is required when fetch.mode is 'date'")
            })?;
            fetcher
                .fetch_within_window(&channel_id, &Window::for_date(date)?)
                .await?
        }
        FetchMode::Recent => {
            fetcher
                .fetch_capped(&channel_id, config.fetch.max_total)
                .await?
        }
    };

    info!("Fetched {} messages from #{}", messages.len(), channel_name);

    let json = render::to_json(&messages)?;
    let text = render::to_text(&messages);
    report.write("messages.json", &json).await?;
    report.write("messages.txt", &text).await?;
    info!("Saved report to {}", report.dir().display());

    if config.summary.enabled {
        let prompt = summary::build_prompt(&messages, config.summary.instruction.as_deref());
        report.write("prompt.txt", &prompt).await?;

        let summarizer = OpenAiSummarizer::new(config.summary.clone());
        let summary_text = summarizer.summarize(&prompt).await?;
        report.write("summary.txt", &summary_text).await?;
        info!("Summary:\n{}", summary_text);
    }

    Ok(())
}
