//! Reading and normalizing the candidate URL list.

use crate::error::ValidateError;
use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Normalize a single input line.
///
/// Surrounding whitespace is trimmed and trailing slashes are stripped, so
/// `repo/` and `repo` dedupe to the same URL. Blank lines yield `None`.
pub fn normalize_line(line: &str) -> Option<String> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.trim_end_matches('/').to_string())
}

/// Normalize lines and drop exact duplicates, keeping first-seen order.
pub fn normalize_urls<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut urls = Vec::new();

    for line in lines {
        if let Some(url) = normalize_line(line.as_ref())
            && seen.insert(url.clone())
        {
            urls.push(url);
        }
    }

    urls
}

/// Load the deduplicated URL set from a newline-delimited file.
///
/// A missing file maps to [`ValidateError::SourceNotFound`] so the caller
/// can decide whether that is fatal; the pipeline treats it as an empty
/// input set.
pub fn load_url_set(path: &Path) -> Result<Vec<String>, ValidateError> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            ValidateError::SourceNotFound(path.to_path_buf())
        } else {
            ValidateError::Io(e)
        }
    })?;

    let urls = normalize_urls(content.lines());
    debug!("Loaded {} unique URLs from {}", urls.len(), path.display());
    Ok(urls)
}
