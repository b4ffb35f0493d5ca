use crate::discord::Message;

pub const DEFAULT_INSTRUCTION: &str = "Summarize the following conversation:";

/// Build the summarization prompt: the instruction, the conversation as
/// `author: content` lines, and a trailing completion marker.
pub fn build_prompt(messages: &[Message], instruction: Option<&str>) -> String {
    let instruction = instruction
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_INSTRUCTION);

    let conversation = messages
        .iter()
        .map(|m| format!("{}: {}", m.author.username, m.content))
        .collect::<Vec<_>>()
        .join("\n");

    format!("{}\n\n{}\n\nSummary:\n", instruction, conversation)
}
