mod client;
mod prompt;

pub use client::{OpenAiSummarizer, Summarizer};
pub use prompt::{DEFAULT_INSTRUCTION, build_prompt};
