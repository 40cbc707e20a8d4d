use scraper::{Html, Selector};

/// Selectors tried in priority order when locating the main content region.
/// First structural match wins.
const MAIN_SELECTORS: [&str; 6] = [
    "main",
    "article",
    ".content",
    "#content",
    ".documentation",
    "#documentation",
];

/// Select the page's main content region and return its markup.
///
/// Falls back to the entire page body when no selector matches, and to the
/// whole document when even `body` is absent.
pub fn extract_main(html: &str) -> String {
    let doc = Html::parse_document(html);

    for selector_str in MAIN_SELECTORS {
        let selector = Selector::parse(selector_str).unwrap();
        if let Some(element) = doc.select(&selector).next() {
            return element.html();
        }
    }

    let body_selector = Selector::parse("body").unwrap();
    match doc.select(&body_selector).next() {
        Some(element) => element.html(),
        None => doc.root_element().html(),
    }
}

/// Collect the literal text of every inline `<style>` element, concatenated
/// in document order and newline-separated.
pub fn collect_styles(html: &str) -> String {
    let doc = Html::parse_document(html);

    let style_selector = Selector::parse("style").unwrap();
    doc.select(&style_selector)
        .map(|element| element.text().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Extract all anchor targets on the page, in document order.
///
/// Anchors without an href attribute are silently dropped.
pub fn extract_links(html: &str) -> Vec<String> {
    let doc = Html::parse_document(html);

    let link_selector = Selector::parse("a").unwrap();
    let links = doc
        .select(&link_selector)
        .filter_map(|e| e.value().attr("href"))
        .map(|s| s.to_string())
        .collect::<Vec<String>>();

    ::log::debug!("found {} links", links.len());

    links
}

/// The text of the document's `<title>`, or an empty string.
pub fn page_title(html: &str) -> String {
    let doc = Html::parse_document(html);

    let title_selector = Selector::parse("title").unwrap();
    doc.select(&title_selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}
