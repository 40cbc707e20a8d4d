use crate::error::ExportError;
use crate::results::PageRecord;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Serialize the full page sequence verbatim: 2-space indentation, UTF-8,
/// non-ASCII characters preserved literally rather than escaped.
pub fn format_json(pages: &[PageRecord]) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(pages)?)
}

/// Write the JSON bundle to `path`.
pub fn write_json(pages: &[PageRecord], path: &Path) -> Result<(), ExportError> {
    let mut file = File::create(path)?;
    file.write_all(format_json(pages)?.as_bytes())?;
    Ok(())
}
