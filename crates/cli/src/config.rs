//! Demo configuration, read from the environment.
//!
//! | variable                | values                 | default  |
//! |-------------------------|------------------------|----------|
//! | `STOREFRONT_LOG_FORMAT` | `json`, `pretty`       | `pretty` |
//! | `STOREFRONT_OUTPUT`     | `text`, `json`         | `text`   |
//! | `STOREFRONT_PAY_LINKS`  | `uuid`, `sequential`   | `uuid`   |
//!
//! Log verbosity itself is controlled by `RUST_LOG`.

use anyhow::{Context, anyhow};
use storefront_observability::LogFormat;

pub const LOG_FORMAT_VAR: &str = "STOREFRONT_LOG_FORMAT";
pub const OUTPUT_VAR: &str = "STOREFRONT_OUTPUT";
pub const PAY_LINKS_VAR: &str = "STOREFRONT_PAY_LINKS";

/// How order receipts are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `"<name> - <count>"` lines.
    #[default]
    Text,
    /// The receipt as one JSON document.
    Json,
}

/// Which pay link generator orders draw from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PayLinkSource {
    #[default]
    Uuid,
    Sequential,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DemoConfig {
    pub log_format: LogFormat,
    pub output: OutputFormat,
    pub pay_links: PayLinkSource,
}

impl DemoConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup(LOG_FORMAT_VAR) {
            config.log_format = raw
                .parse()
                .map_err(|e: String| anyhow!(e))
                .with_context(|| format!("invalid {LOG_FORMAT_VAR}"))?;
        }

        if let Some(raw) = lookup(OUTPUT_VAR) {
            config.output = match raw.trim().to_ascii_lowercase().as_str() {
                "text" => OutputFormat::Text,
                "json" => OutputFormat::Json,
                other => return Err(anyhow!("invalid {OUTPUT_VAR}: {other:?} (expected text or json)")),
            };
        }

        if let Some(raw) = lookup(PAY_LINKS_VAR) {
            config.pay_links = match raw.trim().to_ascii_lowercase().as_str() {
                "uuid" => PayLinkSource::Uuid,
                "sequential" => PayLinkSource::Sequential,
                other => {
                    return Err(anyhow!(
                        "invalid {PAY_LINKS_VAR}: {other:?} (expected uuid or sequential)"
                    ));
                }
            };
        }

        Ok(config)
    }
}
