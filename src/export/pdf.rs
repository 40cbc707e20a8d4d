use crate::error::ExportError;
use crate::export::css::CssNormalizer;
use crate::results::PageRecord;
use headless_chrome::types::PrintToPdfOptions;
use headless_chrome::{Browser, LaunchOptions};
use std::io::Write;
use std::path::Path;

/// Base stylesheet for the combined document.
const DOCUMENT_STYLE: &str = "\
body { font-family: Arial, sans-serif; }
pre { background-color: #f0f0f0; padding: 10px; border-radius: 5px; white-space: pre-wrap; word-wrap: break-word; }
code { font-family: Courier, monospace; }";

/// Assemble the combined HTML document fed to the PDF engine: per page a
/// heading, an emphasized URL line, the raw main-content markup, the page's
/// normalized style block, and a forced page break.
pub fn build_document(pages: &[PageRecord], normalizer: &mut CssNormalizer) -> String {
    let mut html = String::new();
    html.push_str("<html>\n<head>\n<style>\n");
    html.push_str(DOCUMENT_STYLE);
    html.push_str("\n</style>\n</head>\n<body>\n");

    for page in pages {
        html.push_str(&format!("<h1>{}</h1>", page.title));
        html.push_str(&format!("<p><em>{}</em></p>", page.url));
        html.push_str(&page.html_content);
        if page.css.is_empty() {
            ::log::debug!("no inline styles collected for {}", page.url);
        } else {
            let cleaned = normalizer.normalize(&page.css);
            html.push_str(&format!("<style>{}</style>", cleaned));
        }
        html.push_str("<div style='page-break-after: always;'></div>");
    }

    html.push_str("</body>\n</html>");
    html
}

/// Render the combined document to PDF bytes through headless Chrome.
///
/// Any engine failure (launch, navigation, print) aborts the export; no
/// partial PDF is produced.
pub fn render_pdf(document: &str) -> Result<Vec<u8>, ExportError> {
    let mut page_file = tempfile::Builder::new()
        .prefix("docbundle")
        .suffix(".html")
        .tempfile()?;
    page_file.write_all(document.as_bytes())?;

    let file_url = format!("file://{}", page_file.path().display());

    let launch_options = LaunchOptions::default_builder()
        .headless(true)
        .build()
        .map_err(anyhow::Error::msg)?;
    let browser = Browser::new(launch_options)?;
    let tab = browser.new_tab()?;
    tab.navigate_to(&file_url)?.wait_until_navigated()?;

    let options = PrintToPdfOptions {
        print_background: Some(true),
        ..Default::default()
    };
    let bytes = tab.print_to_pdf(Some(options))?;

    Ok(bytes)
}

/// Assemble and render the page sequence, writing the PDF to `path`.
pub fn write_pdf(pages: &[PageRecord], path: &Path) -> Result<(), ExportError> {
    let mut normalizer = CssNormalizer::new();
    let document = build_document(pages, &mut normalizer);
    let bytes = render_pdf(&document)?;
    std::fs::write(path, bytes)?;
    Ok(())
}
