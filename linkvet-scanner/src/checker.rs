use crate::error::Result;
use crate::result::{CheckResult, UnreachableReason};
use reqwest::{Client, StatusCode};
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, info};

pub type ProgressCallback = Arc<dyn Fn(usize, String) + Send + Sync>;
pub type ResultCallback = Arc<dyn Fn(&CheckResult) + Send + Sync>;

/// Probes URLs over HTTP and classifies each as reachable or not.
///
/// A URL counts as reachable when a GET request, after following redirects,
/// comes back with status 200 within the configured timeout. Every other
/// outcome (non-success status, refused connection, DNS failure, timeout) is
/// folded into [`CheckResult`] data; probing never raises an error.
pub struct Checker {
    client: Client,
    progress_callback: Option<ProgressCallback>,
    result_callback: Option<ResultCallback>,
}

impl Checker {
    pub fn new() -> Result<Self> {
        Self::with_timeout(5)
    }

    pub fn with_timeout(timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("linkvet/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs((timeout_secs / 2).max(1)))
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;

        Ok(Self {
            client,
            progress_callback: None,
            result_callback: None,
        })
    }

    pub fn with_progress_callback(mut self, callback: ProgressCallback) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    pub fn with_result_callback(mut self, callback: ResultCallback) -> Self {
        self.result_callback = Some(callback);
        self
    }

    /// Probe a single URL.
    pub async fn probe(&self, url: &str) -> CheckResult {
        Self::probe_static(&self.client, url).await
    }

    /// Check every URL with at most `workers` probes in flight.
    ///
    /// Workers draw from a shared queue, so a worker picks up the next URL
    /// as soon as its current probe finishes. Each URL is probed exactly
    /// once and results come back in input order regardless of which worker
    /// finished first.
    pub async fn check_all(&self, urls: Vec<String>, workers: usize) -> Result<Vec<CheckResult>> {
        if urls.is_empty() {
            return Ok(Vec::new());
        }

        let total = urls.len();
        let workers = workers.clamp(1, total);
        info!("Checking {} URLs with {} workers", total, workers);

        let queue: Arc<Mutex<VecDeque<(usize, String)>>> =
            Arc::new(Mutex::new(urls.into_iter().enumerate().collect()));
        let results: Arc<Mutex<Vec<(usize, CheckResult)>>> =
            Arc::new(Mutex::new(Vec::with_capacity(total)));

        let mut worker_handles = Vec::new();

        for worker_id in 0..workers {
            let client = self.client.clone();
            let queue = queue.clone();
            let results = results.clone();
            let progress_cb = self.progress_callback.clone();
            let result_cb = self.result_callback.clone();

            let handle = tokio::spawn(async move {
                debug!("Worker {} started", worker_id);

                loop {
                    // The queue only drains (no worker enqueues new URLs),
                    // so an empty pop means this worker is done.
                    let work_item = { queue.lock().await.pop_front() };
                    let Some((index, url)) = work_item else {
                        break;
                    };

                    if let Some(ref callback) = progress_cb {
                        callback(worker_id, url.clone());
                    }

                    let result = Self::probe_static(&client, &url).await;

                    if let Some(ref callback) = result_cb {
                        callback(&result);
                    }

                    results.lock().await.push((index, result));
                }

                debug!("Worker {} finished", worker_id);
            });

            worker_handles.push(handle);
        }

        for outcome in futures::future::join_all(worker_handles).await {
            outcome?;
        }

        let mut collected = std::mem::take(&mut *results.lock().await);
        collected.sort_by_key(|(index, _)| *index);

        let results: Vec<CheckResult> = collected.into_iter().map(|(_, result)| result).collect();
        info!(
            "Check complete: {} of {} URLs reachable",
            results.iter().filter(|r| r.is_reachable()).count(),
            results.len()
        );

        Ok(results)
    }

    /// Static version of `probe` for use in spawned worker tasks.
    async fn probe_static(client: &Client, url: &str) -> CheckResult {
        debug!("Probing {}", url);

        match client.get(url).send().await {
            Ok(response) => {
                let status = response.status();
                if status == StatusCode::OK {
                    CheckResult::reachable(url.to_string(), status.as_u16())
                } else {
                    debug!("{} answered with status {}", url, status);
                    CheckResult::unreachable(
                        url.to_string(),
                        UnreachableReason::Status(status.as_u16()),
                    )
                }
            }
            Err(e) => {
                let reason = if e.is_timeout() {
                    UnreachableReason::Timeout
                } else {
                    UnreachableReason::Connect(e.to_string())
                };
                debug!("{} is unreachable: {}", url, reason);
                CheckResult::unreachable(url.to_string(), reason)
            }
        }
    }
}
