//! Pipeline orchestration: load the URL set, run the bounded check, write
//! the surviving list.

use crate::error::ValidateError;
use crate::input::load_url_set;
use crate::output::write_valid_list;
use indicatif::{ProgressBar, ProgressStyle};
use linkvet_scanner::checker::{Checker, ResultCallback};
use linkvet_scanner::result::CheckResult;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;
use tracing::warn;

/// Options for configuring a validation run.
///
/// The defaults mirror the classic single-purpose script this tool grew out
/// of: read `README.txt`, write `valid_repos.txt`, 20 workers, 5 second
/// per-request timeout.
pub struct ValidateOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub threads: usize,
    pub timeout_secs: u64,
    pub show_progress_bar: bool,
}

impl Default for ValidateOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from("README.txt"),
            output: PathBuf::from("valid_repos.txt"),
            threads: 20,
            timeout_secs: 5,
            show_progress_bar: true,
        }
    }
}

/// Callback for reporting validation progress messages
pub type ValidateProgressCallback = Arc<dyn Fn(String) + Send + Sync>;

/// Outcome of a completed validation run.
pub struct ValidateSummary {
    /// Size of the deduplicated input set.
    pub unique_urls: usize,
    /// Reachable URLs, in input order. Already written to the output file.
    pub valid: Vec<String>,
    /// Every per-URL result, in input order.
    pub results: Vec<CheckResult>,
    pub elapsed_seconds: f64,
}

/// Execute a validation run with the given options.
///
/// A missing input file is reported through the callback and the run
/// continues with an empty set, still producing an (empty) output file.
/// Failure to write the output file is the only fatal error class.
pub async fn execute_validation(
    options: ValidateOptions,
    progress_callback: Option<ValidateProgressCallback>,
) -> Result<ValidateSummary, ValidateError> {
    let ValidateOptions {
        input,
        output,
        threads,
        timeout_secs,
        show_progress_bar,
    } = options;

    let started = Instant::now();

    let urls = match load_url_set(&input) {
        Ok(urls) => urls,
        Err(ValidateError::SourceNotFound(path)) => {
            warn!("Input file {} not found", path.display());
            if let Some(ref callback) = progress_callback {
                callback(format!("[-] Input file {} not found", path.display()));
            }
            Vec::new()
        }
        Err(e) => return Err(e),
    };

    let unique_urls = urls.len();
    if let Some(ref callback) = progress_callback {
        callback(format!(
            "[*] Found {} unique URLs after cleaning duplicates",
            unique_urls
        ));
    }

    let progress_bar = if show_progress_bar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        pb.set_message("Starting validation...");
        Some(Arc::new(pb))
    } else {
        None
    };

    // Counter for tracking checked URLs
    let checked_count = Arc::new(AtomicUsize::new(0));

    let result_cb: ResultCallback = {
        let pb_clone = progress_bar.clone();
        let count_clone = checked_count.clone();
        let callback = progress_callback.clone();
        Arc::new(move |result: &CheckResult| {
            let checked = count_clone.fetch_add(1, Ordering::Relaxed) + 1;
            if let Some(ref pb) = pb_clone {
                pb.set_message(format!("Checking... {}/{} URLs", checked, unique_urls));
                pb.tick();
            }
            if result.is_reachable()
                && let Some(ref callback) = callback
            {
                callback(format!("[+] Found valid: {}", result.url));
            }
        })
    };

    let checker = Checker::with_timeout(timeout_secs)?.with_result_callback(result_cb);
    let results = checker.check_all(urls, threads).await?;

    let valid: Vec<String> = results
        .iter()
        .filter(|r| r.is_reachable())
        .map(|r| r.url.clone())
        .collect();

    write_valid_list(&output, &valid)?;

    if let Some(ref pb) = progress_bar {
        pb.finish_with_message(format!(
            "Validation complete: {} of {} URLs valid",
            valid.len(),
            unique_urls
        ));
    }

    Ok(ValidateSummary {
        unique_urls,
        valid,
        results,
        elapsed_seconds: started.elapsed().as_secs_f64(),
    })
}
