//! Writing the surviving URL list to disk.

use crate::error::ValidateError;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Write the valid URLs to `path`, one per line, replacing prior contents.
///
/// The file is created even when `urls` is empty. Failure here is fatal to
/// the run, unlike per-URL network errors.
pub fn write_valid_list(path: &Path, urls: &[String]) -> Result<(), ValidateError> {
    let mut file = File::create(path)?;

    for url in urls {
        writeln!(file, "{}", url)?;
    }

    info!("Wrote {} URLs to {}", urls.len(), path.display());
    Ok(())
}
