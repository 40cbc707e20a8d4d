use serde::{Deserialize, Serialize};

/// A successfully rendered and extracted documentation page.
///
/// Created once per page and immutable afterwards; the traversal owns the
/// output list. Field names match the keys of the JSON export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageRecord {
    /// URL of the page
    pub url: String,

    /// Title of the page (empty if the document has none)
    pub title: String,

    /// Raw markup of the main content region
    pub html_content: String,

    /// Readable Markdown rendering of the main content
    pub markdown_content: String,

    /// Concatenated text of the page's inline style elements
    pub css: String,
}

/// Why a traversal stopped. Exactly one reason is surfaced per traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// No more in-scope links to visit
    FrontierExhausted,
    /// The page budget was reached
    PageLimit,
    /// The wall-clock deadline passed
    TimeLimit,
}

impl StopReason {
    /// Human-readable description for logs and the crawl summary.
    pub fn describe(&self) -> &'static str {
        match self {
            StopReason::FrontierExhausted => "frontier exhausted",
            StopReason::PageLimit => "page limit reached",
            StopReason::TimeLimit => "time limit reached",
        }
    }
}

/// The result of one traversal: the accumulated pages in visit order and
/// the reason the traversal ended.
#[derive(Debug)]
pub struct CrawlOutcome {
    pub pages: Vec<PageRecord>,
    pub stop_reason: StopReason,
}
