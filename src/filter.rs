use url::Url;

/// Path substrings that mark a URL as irrelevant for documentation crawling.
const DENYLIST: [&str; 4] = ["/blog/", "/archive/", "/old-versions/", "/deprecated/"];

/// File extensions that never resolve to crawlable documentation pages.
const SKIP_EXTENSIONS: [&str; 6] = [".pdf", ".zip", ".png", ".jpg", ".jpeg", ".gif"];

/// Decides whether discovered links are eligible for further traversal.
///
/// Scope is a literal string-prefix match against the scope root
/// (scheme + host + optional leading path), not a structural same-origin
/// check.
#[derive(Debug, Clone)]
pub struct LinkFilter {
    scope_root: String,
}

impl LinkFilter {
    /// Create a filter rooted at the given URL prefix.
    pub fn new(scope_root: impl Into<String>) -> Self {
        Self {
            scope_root: scope_root.into(),
        }
    }

    /// The URL prefix defining which links are eligible for crawling.
    pub fn scope_root(&self) -> &str {
        &self.scope_root
    }

    /// Determine if a candidate URL should be crawled.
    ///
    /// Accepts only URLs that start with the scope root, whose path
    /// (case-insensitive) contains no denylisted substring and does not end
    /// in a non-document extension. Unparseable URLs are rejected.
    pub fn is_in_scope(&self, candidate: &str) -> bool {
        if !candidate.starts_with(&self.scope_root) {
            return false;
        }

        let path = match Url::parse(candidate) {
            Ok(url) => url.path().to_lowercase(),
            Err(_) => return false,
        };

        if DENYLIST.iter().any(|pattern| path.contains(pattern)) {
            return false;
        }

        !SKIP_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
    }
}

/// Create a normalized version of the URL (e.g., removing fragments)
pub fn normalize_url(url: &Url) -> Url {
    let mut normalized = url.clone();
    normalized.set_fragment(None);
    normalized
}

/// Derive the scope root from a seed URL: scheme, the authority separator,
/// and the host. Everything up to the third `/`.
pub fn derive_scope_root(seed: &str) -> String {
    seed.splitn(4, '/').take(3).collect::<Vec<_>>().join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_match() {
        let filter = LinkFilter::new("https://docs.example.com");

        assert!(filter.is_in_scope("https://docs.example.com/guide"));
        assert!(filter.is_in_scope("https://docs.example.com/api/reference"));

        // Different host is a prefix mismatch
        assert!(!filter.is_in_scope("https://other.com/x"));

        // Same host, different scheme
        assert!(!filter.is_in_scope("http://docs.example.com/guide"));
    }

    #[test]
    fn test_prefix_is_literal_not_structural() {
        // A scope root with a leading path restricts to that subtree
        let filter = LinkFilter::new("https://example.com/docs");
        assert!(filter.is_in_scope("https://example.com/docs/intro"));
        assert!(!filter.is_in_scope("https://example.com/about"));
    }

    #[test]
    fn test_denylisted_paths() {
        let filter = LinkFilter::new("https://docs.example.com");

        assert!(!filter.is_in_scope("https://docs.example.com/blog/2020"));
        assert!(!filter.is_in_scope("https://docs.example.com/archive/v1"));
        assert!(!filter.is_in_scope("https://docs.example.com/old-versions/2.0"));
        assert!(!filter.is_in_scope("https://docs.example.com/deprecated/api"));

        // Denylist matching is case-insensitive on the path
        assert!(!filter.is_in_scope("https://docs.example.com/Blog/2020"));
    }

    #[test]
    fn test_skipped_extensions() {
        let filter = LinkFilter::new("https://docs.example.com");

        for ext in ["pdf", "zip", "png", "jpg", "jpeg", "gif"] {
            let url = format!("https://docs.example.com/asset.{}", ext);
            assert!(!filter.is_in_scope(&url), "{} should be rejected", url);
        }

        assert!(!filter.is_in_scope("https://docs.example.com/manual.PDF"));
        assert!(filter.is_in_scope("https://docs.example.com/page.html"));
    }

    #[test]
    fn test_unparseable_rejected() {
        let filter = LinkFilter::new("not a url");
        assert!(!filter.is_in_scope("not a url at all"));
    }

    #[test]
    fn test_normalize_url_strips_fragment() {
        let url = Url::parse("https://docs.example.com/guide#section-2").unwrap();
        let normalized = normalize_url(&url);
        assert_eq!(normalized.as_str(), "https://docs.example.com/guide");
    }

    #[test]
    fn test_derive_scope_root() {
        assert_eq!(
            derive_scope_root("https://docs.example.com/intro"),
            "https://docs.example.com"
        );
        assert_eq!(
            derive_scope_root("https://docs.example.com/a/b/c"),
            "https://docs.example.com"
        );
        assert_eq!(
            derive_scope_root("http://localhost:8000/docs/"),
            "http://localhost:8000"
        );
        // No path at all
        assert_eq!(
            derive_scope_root("https://docs.example.com"),
            "https://docs.example.com"
        );
    }
}
