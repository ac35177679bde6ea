// Configuration type definitions

use std::time::Duration;

use serde::Deserialize;

use crate::dispatch::DEFAULT_QUIET_PERIOD_MS;

pub const DEFAULT_TRIGGER_PERCENTAGE: f64 = 70.0;
pub const DEFAULT_PAGE_SIZE: usize = 40;

/// Dispatch configuration section
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DispatchConfig {
    /// Quiet period the funnel waits after the last notification
    #[serde(default = "default_quiet_period_ms")]
    pub quiet_period_ms: u64,
    /// Trigger percentage handed to components that don't pick their own
    #[serde(default = "default_trigger_percentage")]
    pub trigger_percentage: f64,
}

fn default_quiet_period_ms() -> u64 {
    DEFAULT_QUIET_PERIOD_MS
}

fn default_trigger_percentage() -> f64 {
    DEFAULT_TRIGGER_PERCENTAGE
}

impl DispatchConfig {
    pub fn quiet_period(&self) -> Duration {
        Duration::from_millis(self.quiet_period_ms)
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        DispatchConfig {
            quiet_period_ms: DEFAULT_QUIET_PERIOD_MS,
            trigger_percentage: DEFAULT_TRIGGER_PERCENTAGE,
        }
    }
}

/// Demo feed configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FeedConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_initial_pages")]
    pub initial_pages: usize,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_initial_pages() -> usize {
    1
}

impl Default for FeedConfig {
    fn default() -> Self {
        FeedConfig {
            page_size: DEFAULT_PAGE_SIZE,
            initial_pages: 1,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub dispatch: DispatchConfig,
    #[serde(default)]
    pub feed: FeedConfig,
}
