/// Convert a markup fragment to a readable Markdown rendering.
///
/// Hyperlink targets are preserved inline (`[text](href)`), never stripped
/// down to bare text.
pub fn to_markdown(fragment: &str) -> String {
    html2md::parse_html(fragment)
}
