//! Summary report generation from check results.

use chrono::Utc;
use linkvet_scanner::result::{CheckOutcome, CheckResult, UnreachableReason};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use url::Url;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ReportFormat {
    Text,
    Json,
}

impl ReportFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" => Some(ReportFormat::Text),
            "json" => Some(ReportFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportData {
    pub generated_at: String,
    pub checked: usize,
    pub reachable: usize,
    pub unreachable: usize,
    pub timeouts: usize,
    pub connection_failures: usize,
    pub non_success_statuses: usize,
    pub valid_urls: Vec<String>,
}

pub fn gather_report_data(results: &[CheckResult]) -> ReportData {
    let mut data = ReportData {
        generated_at: Utc::now().to_rfc3339(),
        checked: results.len(),
        reachable: 0,
        unreachable: 0,
        timeouts: 0,
        connection_failures: 0,
        non_success_statuses: 0,
        valid_urls: Vec::new(),
    };

    for result in results {
        match &result.outcome {
            CheckOutcome::Reachable { .. } => {
                data.reachable += 1;
                data.valid_urls.push(result.url.clone());
            }
            CheckOutcome::Unreachable { reason } => {
                data.unreachable += 1;
                match reason {
                    UnreachableReason::Timeout => data.timeouts += 1,
                    UnreachableReason::Connect(_) => data.connection_failures += 1,
                    UnreachableReason::Status(_) => data.non_success_statuses += 1,
                }
            }
        }
    }

    data
}

/// Generate a report of a validation run in the requested format.
pub fn generate_report(results: &[CheckResult], format: &ReportFormat) -> String {
    let data = gather_report_data(results);
    match format {
        ReportFormat::Json => {
            serde_json::to_string_pretty(&data).unwrap_or_else(|_| String::from("{}"))
        }
        ReportFormat::Text => render_text_report(&data),
    }
}

fn host_of(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_else(|| "unknown".to_string())
}

fn render_text_report(data: &ReportData) -> String {
    let mut report = String::new();
    report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");
    report.push_str("# Summary:\n");
    report.push_str(&format!("  URLs checked: {}\n", data.checked));
    report.push_str(&format!("  Valid: {}\n", data.reachable));
    report.push_str(&format!("  Dead: {}\n", data.unreachable));
    report.push_str(&format!("    timed out: {}\n", data.timeouts));
    report.push_str(&format!(
        "    connection failed: {}\n",
        data.connection_failures
    ));
    report.push_str(&format!(
        "    non-success status: {}\n",
        data.non_success_statuses
    ));
    report.push_str(&format!("  Generated: {}\n", data.generated_at));

    report.push_str("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");

    // Group valid URLs by host
    let mut by_host: HashMap<String, Vec<&String>> = HashMap::new();
    for url in &data.valid_urls {
        by_host.entry(host_of(url)).or_default().push(url);
    }

    for (host, urls) in by_host.iter() {
        report.push_str(&format!("## {}\n", host));
        report.push_str(&format!("  {} valid\n\n", urls.len()));
        for url in urls {
            report.push_str(&format!("  {}\n", url));
        }
        report.push('\n');
    }

    report
}
