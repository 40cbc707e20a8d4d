use crate::error::Result;
use crate::filter::derive_scope_root;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Configuration for one documentation traversal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlConfig {
    /// URL to start crawling from
    pub start_url: String,

    /// URL prefix that discovered links must match to stay in scope.
    /// Derived from the start URL (scheme + host) when not set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope_root: Option<String>,

    /// Render only the start page, skipping link discovery
    #[serde(default)]
    pub single_page: bool,

    /// Maximum number of pages to render
    #[serde(default = "default_max_pages")]
    pub max_pages: usize,

    /// Maximum link depth from the start URL
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Wall-clock budget for the whole traversal, in minutes
    #[serde(default = "default_time_limit_minutes")]
    pub time_limit_minutes: u64,

    /// URL for the WebDriver instance
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// User agent announced by the rendering session
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Default value for max_pages
fn default_max_pages() -> usize {
    1000
}

/// Default value for max_depth
fn default_max_depth() -> usize {
    10
}

/// Default value for time_limit_minutes
fn default_time_limit_minutes() -> u64 {
    60
}

/// Default value for webdriver_url
fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

/// Default value for user_agent
fn default_user_agent() -> String {
    "DocumentationBundler/1.0 (+https://github.com/docbundle/docbundle)".to_string()
}

impl CrawlConfig {
    /// Create a new configuration with default values
    pub fn new(start_url: &str) -> Self {
        Self {
            start_url: start_url.to_string(),
            scope_root: None,
            single_page: false,
            max_pages: default_max_pages(),
            max_depth: default_max_depth(),
            time_limit_minutes: default_time_limit_minutes(),
            webdriver_url: default_webdriver_url(),
            user_agent: default_user_agent(),
        }
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// The effective scope root: the configured prefix, or the start URL's
    /// scheme and host.
    pub fn scope_root(&self) -> String {
        self.scope_root
            .clone()
            .unwrap_or_else(|| derive_scope_root(&self.start_url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CrawlConfig::new("https://docs.example.com/intro");
        assert!(!config.single_page);
        assert_eq!(config.max_pages, 1000);
        assert_eq!(config.max_depth, 10);
        assert_eq!(config.time_limit_minutes, 60);
        assert_eq!(config.webdriver_url, "http://localhost:4444");
    }

    #[test]
    fn test_scope_root_derived_from_start_url() {
        let config = CrawlConfig::new("https://docs.example.com/intro/getting-started");
        assert_eq!(config.scope_root(), "https://docs.example.com");
    }

    #[test]
    fn test_scope_root_override() {
        let mut config = CrawlConfig::new("https://docs.example.com/intro");
        config.scope_root = Some("https://docs.example.com/intro".to_string());
        assert_eq!(config.scope_root(), "https://docs.example.com/intro");
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: CrawlConfig =
            serde_json::from_str(r#"{"start_url": "https://docs.example.com/"}"#).unwrap();
        assert_eq!(config.start_url, "https://docs.example.com/");
        assert_eq!(config.max_pages, 1000);
        assert!(!config.single_page);
    }
}
