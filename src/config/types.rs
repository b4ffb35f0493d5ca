use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub discord: DiscordConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logs: LogsConfig,
    #[serde(default)]
    pub summary: SummaryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscordConfig {
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default)]
    pub bot_token: String,
    pub channel_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    #[serde(default)]
    pub mode: FetchMode,
    /// Calendar day to archive when `mode` is `date`.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Total message cap when `mode` is `recent`.
    #[serde(default = "default_max_total")]
    pub max_total: usize,
    #[serde(default = "default_page_delay_ms")]
    pub page_delay_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchMode {
    Today,
    Date,
    Recent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_summary_model")]
    pub model: String,
    /// Instruction placed above the conversation in the prompt; a built-in
    /// default is used when absent.
    #[serde(default)]
    pub instruction: Option<String>,
    #[serde(default = "default_summary_max_tokens")]
    pub max_tokens: u16,
}

impl Default for FetchMode {
    fn default() -> Self {
        Self::Today
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            mode: FetchMode::default(),
            date: None,
            max_total: default_max_total(),
            page_delay_ms: default_page_delay_ms(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            base_url: String::new(),
            api_key: String::new(),
            model: default_summary_model(),
            instruction: None,
            max_tokens: default_summary_max_tokens(),
        }
    }
}

fn default_api_base() -> String {
    "https://discord.com/api/v10".to_string()
}

fn default_max_total() -> usize {
    500
}

fn default_page_delay_ms() -> u64 {
    1000
}

fn default_output_dir() -> String {
    "reports".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_summary_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_summary_max_tokens() -> u16 {
    500
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_minimal_config_defaults() {
        let yaml = r#"
discord:
  bot_token: "token"
  channel_id: "1234567890"
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.discord.api_base, "https://discord.com/api/v10");
        assert_eq!(config.fetch.mode, FetchMode::Today);
        assert_eq!(config.fetch.max_total, 500);
        assert_eq!(config.fetch.page_delay_ms, 1000);
        assert_eq!(config.output.dir, "reports");
        assert_eq!(config.logs.level, "info");
        assert!(!config.summary.enabled);
        assert_eq!(config.summary.max_tokens, 500);
    }

    #[test]
    fn test_date_mode_config() {
        let yaml = r#"
discord:
  bot_token: "token"
  channel_id: "1234567890"
fetch:
  mode: date
  date: 2026-08-05
  page_delay_ms: 250
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.fetch.mode, FetchMode::Date);
        assert_eq!(
            config.fetch.date,
            NaiveDate::from_ymd_opt(2026, 8, 5)
        );
        assert_eq!(config.fetch.page_delay_ms, 250);
    }

    #[test]
    fn test_recent_mode_config() {
        let yaml = r#"
discord:
  bot_token: "token"
  channel_id: "1234567890"
fetch:
  mode: recent
  max_total: 250
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.fetch.mode, FetchMode::Recent);
        assert_eq!(config.fetch.max_total, 250);
    }

    #[test]
    fn test_summary_config() {
        let yaml = r#"
discord:
  bot_token: "token"
  channel_id: "1234567890"
summary:
  enabled: true
  base_url: "http://localhost:11434/v1"
  api_key: "key"
  model: "llama3"
  instruction: "Summarize in Japanese:"
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();

        assert!(config.summary.enabled);
        assert_eq!(config.summary.base_url, "http://localhost:11434/v1");
        assert_eq!(config.summary.model, "llama3");
        assert_eq!(
            config.summary.instruction.as_deref(),
            Some("Summarize in Japanese:")
        );
    }
}
