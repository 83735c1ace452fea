use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_WIDGET_BASE_URL: &str = "https://your-bot.lovable.app";
const DEFAULT_MOBILE_BREAKPOINT_PX: u32 = 768;
const MIN_MOBILE_BREAKPOINT_PX: u32 = 320;
const DEFAULT_TOAST_MS: u64 = 3_000;
const MIN_TOAST_MS: u64 = 500;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown log level `{0}`")]
    UnknownLogLevel(String),
    #[error("`{key}` is not a valid number: `{value}`")]
    InvalidNumber { key: &'static str, value: String },
    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    #[error("failed to load .env: {0}")]
    Dotenv(String),
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppProfile {
    Dev,
    Prod,
}

impl AppProfile {
    pub fn from_env(value: Option<String>) -> Self {
        match value.as_deref() {
            Some("prod") | Some("production") => Self::Prod,
            _ => Self::Dev,
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(ConfigError::UnknownLogLevel(raw.to_string())),
        }
    }

    pub fn as_tracing(self) -> tracing::Level {
        match self {
            Self::Trace => tracing::Level::TRACE,
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Error => tracing::Level::ERROR,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppConfig {
    pub profile: AppProfile,
    pub log_level: LogLevel,
    pub mobile_breakpoint_px: u32,
    pub widget_base_url: String,
    pub toast_duration: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            profile: AppProfile::Dev,
            log_level: LogLevel::Info,
            mobile_breakpoint_px: DEFAULT_MOBILE_BREAKPOINT_PX,
            widget_base_url: DEFAULT_WIDGET_BASE_URL.to_string(),
            toast_duration: Duration::from_millis(DEFAULT_TOAST_MS),
        }
    }
}

impl AppConfig {
    /// Reads the environment. Values that fail to parse keep their default and
    /// come back as errors so they can be reported once logging is up.
    pub fn from_env() -> (Self, Vec<ConfigError>) {
        let dotenv = load_dotenv().err();
        let (config, errors) = Self::from_lookup(read_env);
        (config, dotenv.into_iter().chain(errors).collect())
    }

    /// Builds a config from an arbitrary key lookup. Invalid values are
    /// returned next to the config and the default is kept.
    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<ConfigError>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let mut errors = Vec::new();

        config.profile = AppProfile::from_env(lookup("CHATBOT_HUB_PROFILE"));

        if let Some(raw) = lookup("CHATBOT_HUB_LOG_LEVEL") {
            match LogLevel::parse(&raw) {
                Ok(level) => config.log_level = level,
                Err(err) => errors.push(err),
            }
        } else if config.profile == AppProfile::Prod {
            config.log_level = LogLevel::Warn;
        }

        match parse_number("CHATBOT_HUB_MOBILE_BREAKPOINT", lookup("CHATBOT_HUB_MOBILE_BREAKPOINT")) {
            Ok(Some(px)) => {
                config.mobile_breakpoint_px = u32::try_from(px)
                    .unwrap_or(u32::MAX)
                    .max(MIN_MOBILE_BREAKPOINT_PX);
            }
            Ok(None) => {}
            Err(err) => errors.push(err),
        }

        if let Some(url) = lookup("CHATBOT_HUB_WIDGET_BASE_URL") {
            let trimmed = url.trim().trim_end_matches('/');
            if !trimmed.is_empty() {
                config.widget_base_url = trimmed.to_string();
            }
        }

        match parse_number("CHATBOT_HUB_TOAST_MS", lookup("CHATBOT_HUB_TOAST_MS")) {
            Ok(Some(ms)) => config.toast_duration = Duration::from_millis(ms.max(MIN_TOAST_MS)),
            Ok(None) => {}
            Err(err) => errors.push(err),
        }

        (config, errors)
    }

    /// Media query matching viewports narrower than the mobile breakpoint.
    pub fn mobile_media_query(&self) -> String {
        format!("(max-width: {}px)", self.mobile_breakpoint_px - 1)
    }

    pub fn webhook_url(&self) -> String {
        format!("{}/webhook", self.widget_base_url)
    }

    pub fn widget_snippet(&self, bot_id: &str) -> String {
        format!(
            "<script src=\"{base}/widget.js\"></script>\n<div id=\"chatbot-widget\" data-bot-id=\"{bot_id}\"></div>",
            base = self.widget_base_url
        )
    }
}

/// Config installed at startup, or the defaults when running before bootstrap
/// (tests, prerender).
pub fn current() -> AppConfig {
    crate::APP_CONFIG.get().cloned().unwrap_or_default()
}

fn parse_number(key: &'static str, raw: Option<String>) -> Result<Option<u64>, ConfigError> {
    match raw {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber { key, value }),
    }
}

fn read_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .or_else(|| option_env_from_build(key).map(|s| s.to_string()))
}

fn option_env_from_build(key: &str) -> Option<&'static str> {
    match key {
        "CHATBOT_HUB_PROFILE" => option_env!("CHATBOT_HUB_PROFILE"),
        "CHATBOT_HUB_LOG_LEVEL" => option_env!("CHATBOT_HUB_LOG_LEVEL"),
        "CHATBOT_HUB_MOBILE_BREAKPOINT" => option_env!("CHATBOT_HUB_MOBILE_BREAKPOINT"),
        "CHATBOT_HUB_WIDGET_BASE_URL" => option_env!("CHATBOT_HUB_WIDGET_BASE_URL"),
        "CHATBOT_HUB_TOAST_MS" => option_env!("CHATBOT_HUB_TOAST_MS"),
        _ => None,
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_dotenv() -> Result<(), ConfigError> {
    match dotenvy::dotenv() {
        Ok(_) => Ok(()),
        Err(dotenvy::Error::Io(ref io_err)) if io_err.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(ConfigError::Dotenv(err.to_string())),
    }
}

#[cfg(target_arch = "wasm32")]
#[inline]
pub fn load_dotenv() -> Result<(), ConfigError> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = AppConfig::from_lookup(|_| None).0;
        assert_eq!(config.profile, AppProfile::Dev);
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.mobile_breakpoint_px, 768);
        assert_eq!(config.mobile_media_query(), "(max-width: 767px)");
        assert_eq!(config.webhook_url(), "https://your-bot.lovable.app/webhook");
    }

    #[test]
    fn prod_profile_lowers_default_verbosity() {
        let (config, _) = AppConfig::from_lookup(lookup_from(&[("CHATBOT_HUB_PROFILE", "production")]));
        assert_eq!(config.profile, AppProfile::Prod);
        assert_eq!(config.log_level, LogLevel::Warn);
    }

    #[test]
    fn explicit_values_override_defaults() {
        let (config, errors) = AppConfig::from_lookup(lookup_from(&[
            ("CHATBOT_HUB_LOG_LEVEL", "DEBUG"),
            ("CHATBOT_HUB_MOBILE_BREAKPOINT", "1024"),
            ("CHATBOT_HUB_WIDGET_BASE_URL", "https://bots.example.com/"),
            ("CHATBOT_HUB_TOAST_MS", "100"),
        ]));
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.mobile_breakpoint_px, 1024);
        assert_eq!(config.webhook_url(), "https://bots.example.com/webhook");
        assert_eq!(config.toast_duration, Duration::from_millis(500));
        assert!(errors.is_empty());
    }

    #[test]
    fn invalid_values_keep_defaults() {
        let (config, _) = AppConfig::from_lookup(lookup_from(&[
            ("CHATBOT_HUB_LOG_LEVEL", "loud"),
            ("CHATBOT_HUB_MOBILE_BREAKPOINT", "wide"),
            ("CHATBOT_HUB_MOBILE_BREAKPOINT_UNUSED", "1"),
        ]));
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.mobile_breakpoint_px, 768);
    }

    #[test]
    fn rejected_values_are_handed_back_for_reporting() {
        let (_, errors) = AppConfig::from_lookup(lookup_from(&[
            ("CHATBOT_HUB_LOG_LEVEL", "loud"),
            ("CHATBOT_HUB_MOBILE_BREAKPOINT", "wide"),
            ("CHATBOT_HUB_TOAST_MS", "-1"),
        ]));
        assert_eq!(
            errors,
            vec![
                ConfigError::UnknownLogLevel("loud".into()),
                ConfigError::InvalidNumber {
                    key: "CHATBOT_HUB_MOBILE_BREAKPOINT",
                    value: "wide".into(),
                },
                ConfigError::InvalidNumber {
                    key: "CHATBOT_HUB_TOAST_MS",
                    value: "-1".into(),
                },
            ]
        );
    }

    #[test]
    fn breakpoint_has_a_floor() {
        let (config, _) =
            AppConfig::from_lookup(lookup_from(&[("CHATBOT_HUB_MOBILE_BREAKPOINT", "10")]));
        assert_eq!(config.mobile_breakpoint_px, 320);
    }

    #[test]
    fn log_level_parse_reports_unknown_values() {
        assert_eq!(
            LogLevel::parse("chatty"),
            Err(ConfigError::UnknownLogLevel("chatty".into()))
        );
        assert_eq!(LogLevel::parse(" warning "), Ok(LogLevel::Warn));
    }

    #[test]
    fn widget_snippet_embeds_bot_id() {
        let snippet = AppConfig::default().widget_snippet("bot-42");
        assert!(snippet.contains("https://your-bot.lovable.app/widget.js"));
        assert!(snippet.contains("data-bot-id=\"bot-42\""));
    }
}
