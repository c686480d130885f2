use anyhow::{Context, Result};
use clap::ArgMatches;
use colored::Colorize;
use linkvet_core::report::{ReportFormat, generate_report};
use linkvet_core::validate::{ValidateOptions, ValidateProgressCallback, execute_validation};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// Expand a leading tilde in a user-supplied path.
pub fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    PathBuf::from(shellexpand::tilde(raw.as_ref()).as_ref())
}

/// Write a report to `dest`, or print it when `dest` is `-`.
pub fn deliver_report(report: &str, dest: &Path, quiet: bool) -> Result<()> {
    if dest.as_os_str() == "-" {
        print!("{}", report);
        return Ok(());
    }

    let dest = expand_path(dest);
    fs::write(&dest, report)
        .with_context(|| format!("failed to write report to {}", dest.display()))?;
    if !quiet {
        println!(
            "{} Report saved to {}",
            "✓".green().bold(),
            dest.display().to_string().bright_white()
        );
    }
    Ok(())
}

pub async fn handle_check(sub_matches: &ArgMatches, quiet: bool) -> Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let input = expand_path(sub_matches.get_one::<PathBuf>("input").expect("has default"));
    let output = expand_path(
        sub_matches
            .get_one::<PathBuf>("output")
            .expect("has default"),
    );
    let threads = *sub_matches.get_one::<usize>("threads").unwrap_or(&20);
    let timeout_secs = *sub_matches.get_one::<u64>("timeout").unwrap_or(&5);
    let report_dest = sub_matches.get_one::<PathBuf>("report").cloned();
    let format = sub_matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("text");
    let no_progress = sub_matches.get_flag("no-progress");

    info!(
        "Validating {} -> {} with {} workers, {}s timeout",
        input.display(),
        output.display(),
        threads,
        timeout_secs
    );

    if !quiet {
        println!("[*] Reading and cleaning URLs from {}", input.display());
        println!("Workers: {}", threads);
        println!("Timeout: {}s\n", timeout_secs);
    }

    let options = ValidateOptions {
        input,
        output: output.clone(),
        threads,
        timeout_secs,
        show_progress_bar: !no_progress && !quiet,
    };

    let progress_callback: Option<ValidateProgressCallback> = if quiet {
        None
    } else {
        Some(Arc::new(|msg: String| {
            println!("{}", msg);
        }))
    };

    let summary = execute_validation(options, progress_callback)
        .await
        .context("validation run failed")?;

    if let Some(dest) = report_dest {
        let format = ReportFormat::from_str(format).unwrap_or(ReportFormat::Text);
        let report = generate_report(&summary.results, &format);
        deliver_report(&report, &dest, quiet)?;
    }

    println!(
        "\n{} Done! Saved {} valid link{} to {} in {:.1}s",
        "✓".green().bold(),
        summary.valid.len().to_string().bright_white(),
        if summary.valid.len() == 1 { "" } else { "s" },
        output.display().to_string().bright_white(),
        summary.elapsed_seconds
    );

    Ok(())
}
