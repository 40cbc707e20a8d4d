use crate::error::ExportError;
use crate::results::PageRecord;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Format the page sequence as one Markdown document: a level-1 heading with
/// the title, a `URL:` line, the readable body, and a horizontal rule per
/// page.
pub fn format_markdown(pages: &[PageRecord]) -> String {
    let mut md = String::new();

    for page in pages {
        md.push_str(&format!("# {}\n\n", page.title));
        md.push_str(&format!("URL: {}\n\n", page.url));
        md.push_str(&page.markdown_content);
        md.push_str("\n\n---\n\n");
    }

    md
}

/// Write the Markdown bundle to `path`.
pub fn write_markdown(pages: &[PageRecord], path: &Path) -> Result<(), ExportError> {
    let mut file = File::create(path)?;
    file.write_all(format_markdown(pages).as_bytes())?;
    Ok(())
}
