use crate::config::CrawlConfig;
use crate::crawlers::renderer::{PageRenderer, WebDriverRenderer};
use crate::error::{RenderError, Result};
use crate::filter::{self, LinkFilter};
use crate::parsers;
use crate::results::{CrawlOutcome, PageRecord, StopReason};
use std::collections::{HashSet, VecDeque};
use tokio::time::{Duration, Instant, sleep};
use url::Url;

/// Fixed delay after each successfully processed page, bounding request rate.
const PAGE_COOLDOWN: Duration = Duration::from_secs(1);

/// A not-yet-visited URL awaiting traversal, with its distance from the seed.
#[derive(Debug, Clone)]
struct FrontierEntry {
    url: String,
    depth: usize,
}

/// Crawl a documentation site with the session described by `config`.
///
/// Acquires one WebDriver session, runs the traversal with it, and tears the
/// session down on every exit path.
pub async fn crawl(config: &CrawlConfig) -> Result<CrawlOutcome> {
    let mut webdriver_url = config.webdriver_url.clone();
    if let Ok(env_url) = std::env::var("WEBDRIVER_URL") {
        if !env_url.is_empty() {
            webdriver_url = env_url;
        }
    }

    let mut renderer = WebDriverRenderer::connect(&webdriver_url, &config.user_agent).await?;
    let outcome = traverse(&mut renderer, config).await;
    renderer.close().await;
    outcome
}

/// Breadth-first traversal from the configured seed URL.
///
/// Maintains a FIFO frontier and a visited set, renders each in-scope page
/// through `renderer`, and stops at whichever budget trips first: frontier
/// drained, page cap spent, or wall-clock deadline passed. A single page's
/// failure skips only that page.
pub async fn traverse<R>(renderer: &mut R, config: &CrawlConfig) -> Result<CrawlOutcome>
where
    R: PageRenderer,
{
    let link_filter = LinkFilter::new(config.scope_root());

    // Single-page mode ignores the configured budget; the cap collapses to one.
    let max_pages = if config.single_page {
        1
    } else {
        config.max_pages
    };
    let deadline = Instant::now() + Duration::from_secs(config.time_limit_minutes * 60);

    let mut frontier: VecDeque<FrontierEntry> = VecDeque::new();
    frontier.push_back(FrontierEntry {
        url: config.start_url.clone(),
        depth: 0,
    });

    let mut visited: HashSet<String> = HashSet::new();
    let mut pages: Vec<PageRecord> = Vec::new();

    while !frontier.is_empty() && visited.len() < max_pages && Instant::now() < deadline {
        let Some(entry) = frontier.pop_front() else {
            break;
        };

        // Duplicates and over-deep entries are discarded without counting
        // against the page budget.
        if visited.contains(&entry.url)
            || (!config.single_page && entry.depth > config.max_depth)
        {
            continue;
        }

        ::log::info!("rendering: {}", entry.url);

        let page = match renderer.render(&entry.url).await {
            Ok(page) => page,
            Err(RenderError::Timeout { url }) => {
                // Timed-out URLs stay out of the visited set
                ::log::warn!("timeout while loading {}, skipping", url);
                continue;
            }
            Err(e) => {
                ::log::warn!("{}, skipping", e);
                continue;
            }
        };

        let html_content = parsers::html::extract_main(&page.html);
        let markdown_content = parsers::markdown::to_markdown(&html_content);

        pages.push(PageRecord {
            url: entry.url.clone(),
            title: page.title,
            html_content,
            markdown_content,
            css: page.style_text,
        });
        visited.insert(entry.url.clone());

        if config.single_page {
            break;
        }

        if entry.depth < config.max_depth {
            enqueue_links(&page.html, &entry, &link_filter, &visited, &mut frontier);
        }

        sleep(PAGE_COOLDOWN).await;
    }

    let stop_reason = if Instant::now() >= deadline {
        StopReason::TimeLimit
    } else if visited.len() >= max_pages {
        StopReason::PageLimit
    } else {
        StopReason::FrontierExhausted
    };

    ::log::info!(
        "traversal stopped ({}) after {} pages",
        stop_reason.describe(),
        pages.len()
    );

    Ok(CrawlOutcome { pages, stop_reason })
}

/// Screen a page's outbound links and append the in-scope survivors to the
/// frontier tail at depth + 1.
fn enqueue_links(
    page_html: &str,
    entry: &FrontierEntry,
    link_filter: &LinkFilter,
    visited: &HashSet<String>,
    frontier: &mut VecDeque<FrontierEntry>,
) {
    let base = match Url::parse(&entry.url) {
        Ok(base) => base,
        Err(e) => {
            ::log::debug!("cannot resolve links against {}: {}", entry.url, e);
            return;
        }
    };

    for link in parsers::html::extract_links(page_html) {
        // Hrefs come raw from the markup; unresolvable ones are skipped the
        // same way anchors without an href are.
        let Ok(resolved) = base.join(&link) else {
            continue;
        };
        let normalized = filter::normalize_url(&resolved).to_string();

        if !link_filter.is_in_scope(&normalized) {
            ::log::debug!("filter rejected: {}", normalized);
            continue;
        }

        if visited.contains(&normalized) {
            continue;
        }

        frontier.push_back(FrontierEntry {
            url: normalized,
            depth: entry.depth + 1,
        });
    }
}
