//! Demo configuration from environment variables.

use anyhow::Context;

use bookstore_observability::LogFormat;

pub const DEFAULT_OUTDATED_BEFORE: i32 = 2000;
pub const DEFAULT_SHIP_TO: &str = "Cairo, Egypt";
pub const DEFAULT_EMAIL: &str = "user@mail.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// `BOOKSTORE_LOG_FORMAT`: `text` or `json`.
    pub log_format: LogFormat,
    /// `BOOKSTORE_OUTDATED_BEFORE`: books published before this year are swept.
    pub outdated_before: i32,
    /// `BOOKSTORE_SHIP_TO`: address used for the paper book purchase.
    pub ship_to: String,
    /// `BOOKSTORE_EMAIL`: email used for every purchase.
    pub email: String,
    /// Fallbacks taken while reading the environment. Logged once tracing is up.
    pub warnings: Vec<String>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            log_format: LogFormat::default(),
            outdated_before: DEFAULT_OUTDATED_BEFORE,
            ship_to: DEFAULT_SHIP_TO.to_string(),
            email: DEFAULT_EMAIL.to_string(),
            warnings: Vec::new(),
        }
    }
}

impl DemoConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup.
    ///
    /// An unknown log format falls back to text and is recorded in
    /// `warnings`; a malformed year is an error.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("BOOKSTORE_LOG_FORMAT") {
            match raw.parse::<LogFormat>() {
                Ok(format) => config.log_format = format,
                Err(err) => {
                    config.log_format = LogFormat::Text;
                    config
                        .warnings
                        .push(format!("BOOKSTORE_LOG_FORMAT invalid ({err}); using text"));
                }
            }
        }

        if let Some(raw) = lookup("BOOKSTORE_OUTDATED_BEFORE") {
            config.outdated_before = raw
                .trim()
                .parse::<i32>()
                .with_context(|| format!("BOOKSTORE_OUTDATED_BEFORE is not a year: {raw:?}"))?;
        }

        if let Some(ship_to) = lookup("BOOKSTORE_SHIP_TO") {
            config.ship_to = ship_to;
        }
        if let Some(email) = lookup("BOOKSTORE_EMAIL") {
            config.email = email;
        }

        Ok(config)
    }
}
