use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};
use regex::Regex;
use std::collections::{HashMap, VecDeque};

/// Stylesheet substituted whenever normalization cannot produce parseable CSS.
pub const FALLBACK_STYLESHEET: &str = "body { font-family: sans-serif; }";

/// How many normalizations to memoize.
const CACHE_CAPACITY: usize = 100;

/// Rewrites page CSS into a form the PDF engine's parser accepts.
///
/// The engine's CSS parser chokes on pseudo-selectors, so any text between a
/// colon and the following opening brace is collapsed down to a bare brace.
/// This is a leniency pass, not a CSS parser. Results are memoized by exact
/// input text in a bounded least-recently-used cache.
pub struct CssNormalizer {
    qualifier: Regex,
    cache: LruCache,
}

impl CssNormalizer {
    pub fn new() -> Self {
        Self {
            qualifier: Regex::new(r":[^{]+\{").unwrap(),
            cache: LruCache::new(CACHE_CAPACITY),
        }
    }

    /// Normalize raw page CSS.
    ///
    /// Strips selector qualifiers, balances unclosed braces (excess close
    /// braces are left for the downstream parser's own tolerance), and
    /// revalidates the result. Any parse failure yields the fixed fallback
    /// stylesheet instead of an error.
    pub fn normalize(&mut self, raw: &str) -> String {
        if let Some(hit) = self.cache.get(raw) {
            return hit;
        }

        let normalized = self.normalize_uncached(raw);
        self.cache.insert(raw.to_string(), normalized.clone());
        normalized
    }

    fn normalize_uncached(&self, raw: &str) -> String {
        let mut css = self.qualifier.replace_all(raw, "{").into_owned();

        let open = css.matches('{').count();
        let close = css.matches('}').count();
        if open > close {
            css.push_str(&"}".repeat(open - close));
        }

        validate(&css)
    }
}

impl Default for CssNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the stylesheet through the CSS validator and reserialize it.
fn validate(css: &str) -> String {
    match StyleSheet::parse(css, ParserOptions::default()) {
        Ok(sheet) => match sheet.to_css(PrinterOptions::default()) {
            Ok(out) => out.code,
            Err(e) => {
                ::log::debug!("CSS serialization failed: {}", e);
                FALLBACK_STYLESHEET.to_string()
            }
        },
        Err(e) => {
            ::log::debug!("CSS parse failed: {}", e);
            FALLBACK_STYLESHEET.to_string()
        }
    }
}

/// Fixed-capacity memo keyed by exact input text. The least recently used
/// entry is evicted when full.
struct LruCache {
    capacity: usize,
    entries: HashMap<String, String>,
    // Most recently used at the back
    order: VecDeque<String>,
}

impl LruCache {
    fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: HashMap::new(),
            order: VecDeque::new(),
        }
    }

    fn get(&mut self, key: &str) -> Option<String> {
        let value = self.entries.get(key)?.clone();
        self.touch(key);
        Some(value)
    }

    fn insert(&mut self, key: String, value: String) {
        if self.entries.contains_key(&key) {
            self.entries.insert(key.clone(), value);
            self.touch(&key);
            return;
        }

        if self.entries.len() >= self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.entries.remove(&oldest);
            }
        }

        self.order.push_back(key.clone());
        self.entries.insert(key, value);
    }

    fn touch(&mut self, key: &str) {
        if let Some(pos) = self.order.iter().position(|k| k == key) {
            if let Some(key) = self.order.remove(pos) {
                self.order.push_back(key);
            }
        }
    }
}
