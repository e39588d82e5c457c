#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, validate_url, Validate};
use std::time::Duration;

pub const DEFAULT_HOST: &str = "http://0.0.0.0:8001";
pub const MAX_TIMEOUT_SECONDS: u64 = 300;

/// 合併旗標與設定檔之後的最終設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteSettings {
    pub base_url: String,
    pub timeout_seconds: Option<u64>,
}

impl Default for RemoteSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_HOST.to_string(),
            timeout_seconds: None,
        }
    }
}

impl RemoteSettings {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_seconds: None,
        }
    }

    pub fn with_timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout_seconds = Some(seconds);
        self
    }
}

impl ConfigProvider for RemoteSettings {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

impl Validate for RemoteSettings {
    fn validate(&self) -> Result<()> {
        validate_url("host", &self.base_url)?;
        if let Some(seconds) = self.timeout_seconds {
            validate_range("timeout_seconds", seconds, 1, MAX_TIMEOUT_SECONDS)?;
        }
        Ok(())
    }
}
