use crate::{Error, Result, config::SummaryConfig};
use async_openai::{Client, config::OpenAIConfig, types as openai_types};
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, prompt: &str) -> Result<String>;
}

/// Summarizer backed by any OpenAI-compatible chat-completion endpoint.
pub struct OpenAiSummarizer {
    client: Client<OpenAIConfig>,
    model: String,
    max_tokens: u16,
}

impl OpenAiSummarizer {
    pub fn new(config: SummaryConfig) -> Self {
        let mut openai_config = OpenAIConfig::new().with_api_key(config.api_key);

        if !config.base_url.is_empty() {
            openai_config = openai_config.with_api_base(config.base_url);
        }

        let client = Client::with_config(openai_config);

        Self {
            client,
            model: config.model,
            max_tokens: config.max_tokens,
        }
    }
}

#[async_trait]
impl Summarizer for OpenAiSummarizer {
    async fn summarize(&self, prompt: &str) -> Result<String> {
        debug!("Requesting summary for a {} char prompt", prompt.len());

        let message = openai_types::ChatCompletionRequestUserMessageArgs::default()
            .content(openai_types::ChatCompletionRequestUserMessageContent::Text(
                prompt.to_string(),
            ))
            .build()
            .map_err(|e| Error::summary(format!("Failed to build prompt message: {}", e)))?;

        let messages: Vec<openai_types::ChatCompletionRequestMessage> = vec![message.into()];

        let request = openai_types::CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .max_tokens(self.max_tokens as u32)
            .build()?;

        let response = self.client.chat().create(request).await?;

        debug!(
            "Received summary response with {} choices",
            response.choices.len()
        );

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| Error::summary("Model returned no choices"))?;

        Ok(choice.message.content.unwrap_or_default().trim().to_string())
    }
}
