use clap::Parser;
use docbundle::config::CrawlConfig;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "docbundle")]
#[command(about = "Crawls a documentation site and bundles it into PDF, Markdown, and JSON")]
#[command(version)]
pub struct Args {
    /// URL of the documentation to crawl
    pub url: String,

    /// Render only this single page, skipping link discovery
    #[arg(long)]
    pub single_page: bool,

    /// Maximum number of pages to render (ignored with --single-page)
    #[arg(long, default_value_t = 1000, value_parser = clap::value_parser!(u64).range(1..=5000))]
    pub max_pages: u64,

    /// Maximum link depth from the start URL (ignored with --single-page)
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..=20))]
    pub max_depth: u64,

    /// Time limit for the traversal, in minutes (ignored with --single-page)
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u64).range(1..=120))]
    pub time_limit: u64,

    /// Directory the export artifacts are written to
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// URL for the WebDriver instance
    #[arg(long, default_value = "http://localhost:4444")]
    pub webdriver_url: String,
}

impl Args {
    /// Build the traversal configuration from the parsed arguments.
    pub fn to_config(&self) -> CrawlConfig {
        let mut config = CrawlConfig::new(&self.url);
        config.single_page = self.single_page;
        config.max_pages = self.max_pages as usize;
        config.max_depth = self.max_depth as usize;
        config.time_limit_minutes = self.time_limit;
        config.webdriver_url = self.webdriver_url.clone();
        config
    }
}
