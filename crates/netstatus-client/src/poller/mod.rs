// Copyright 2025 Chris Custine
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Periodic status polling.
//!
//! A [`StatusPoller`] owns a repeating timer task. Every tick spawns an
//! independent poll cycle (fetch, then apply), so a slow fetch never delays the
//! next tick and overlapping cycles write in whatever order they complete.
//! Failed cycles are logged and counted; the next tick is the retry.

mod apply;

pub use apply::{apply_document, ApplyReport};

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use chrono::{DateTime, Utc};
use log::{info, warn};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::fetch::{FetchError, StatusFetcher};
use crate::labels::LocalizedLabels;
use crate::page::{Page, NETWORK_STATUS_ID};

/// Configuration for [`StatusPoller`].
#[derive(Debug, Clone)]
pub struct PollerConfig {
    /// Period between poll cycles.
    pub interval: Duration,
    /// Element whose presence activates polling.
    pub container_id: String,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(1000),
            container_id: NETWORK_STATUS_ID.to_string(),
        }
    }
}

/// Poller lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollerState {
    /// Constructed, `start()` not called yet.
    Idle,
    /// The page has no container element; polling never starts.
    Inactive,
    /// Timer running.
    Active,
    /// Timer stopped by `stop()`; cannot be restarted.
    Stopped,
}

/// Cycle counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PollerStats {
    /// Poll cycles begun (one per fetch issued).
    pub cycles_started: u64,
    /// Cycles whose fetch or decode failed.
    pub cycles_failed: u64,
    /// Documents written to the page.
    pub documents_applied: u64,
    /// When the most recent document was written.
    pub last_applied_at: Option<DateTime<Utc>>,
}

struct Shared<F, P> {
    fetcher: F,
    page: Arc<P>,
    stats: Mutex<PollerStats>,
}

impl<F, P> Shared<F, P> {
    fn record(&self, update: impl FnOnce(&mut PollerStats)) {
        let mut stats = self.stats.lock().unwrap_or_else(PoisonError::into_inner);
        update(&mut *stats);
    }
}

/// Fetches status documents on a fixed interval and writes them into a page.
pub struct StatusPoller<F, P> {
    shared: Arc<Shared<F, P>>,
    config: PollerConfig,
    labels: Option<Arc<LocalizedLabels>>,
    state: PollerState,
    cancel_token: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl<F, P> std::fmt::Debug for StatusPoller<F, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatusPoller")
            .field("config", &self.config)
            .field("labels", &self.labels)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<F, P> StatusPoller<F, P>
where
    F: StatusFetcher,
    P: Page + 'static,
{
    /// Create a poller. Nothing runs until [`start`](Self::start).
    #[must_use]
    pub fn new(fetcher: F, page: Arc<P>, config: PollerConfig) -> Self {
        Self {
            shared: Arc::new(Shared {
                fetcher,
                page,
                stats: Mutex::new(PollerStats::default()),
            }),
            config,
            labels: None,
            state: PollerState::Idle,
            cancel_token: CancellationToken::new(),
            task: None,
        }
    }

    /// Use these labels instead of reading them from the page.
    #[must_use]
    pub fn with_labels(mut self, labels: LocalizedLabels) -> Self {
        self.labels = Some(Arc::new(labels));
        self
    }

    /// Activate polling if the page has the container element.
    ///
    /// Must be called from within a tokio runtime. Only the first call has an
    /// effect; later calls return the current state.
    pub fn start(&mut self) -> PollerState {
        if self.state != PollerState::Idle {
            return self.state;
        }

        if !self.shared.page.contains(&self.config.container_id) {
            info!(
                "No #{} element on page, network status polling inactive",
                self.config.container_id
            );
            self.state = PollerState::Inactive;
            return self.state;
        }

        let labels = self.labels();
        let shared = Arc::clone(&self.shared);
        let cancel_token = self.cancel_token.clone();
        // tokio intervals reject a zero period
        let period = self.config.interval.max(Duration::from_millis(1));

        info!("Starting network status polling every {} ms", period.as_millis());

        self.task = Some(tokio::spawn(async move {
            poll_loop(shared, labels, period, cancel_token).await;
        }));
        self.state = PollerState::Active;
        self.state
    }

    /// Stop the timer. Cycles already in flight still complete.
    pub fn stop(&mut self) {
        if self.state == PollerState::Active {
            info!("Stopping network status polling");
        }
        self.cancel_token.cancel();
        if let Some(task) = self.task.take() {
            task.abort();
        }
        self.state = PollerState::Stopped;
    }

    /// Run one fetch-and-apply cycle now, independent of the timer and of the
    /// container check.
    pub async fn run_cycle(&mut self) -> Result<ApplyReport, FetchError> {
        let labels = self.labels();
        run_cycle(&self.shared, &labels).await
    }

    #[must_use]
    pub fn state(&self) -> PollerState {
        self.state
    }

    #[must_use]
    pub fn stats(&self) -> PollerStats {
        self.shared
            .stats
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn page(&self) -> &Arc<P> {
        &self.shared.page
    }

    fn labels(&mut self) -> Arc<LocalizedLabels> {
        let page = &self.shared.page;
        Arc::clone(
            self.labels
                .get_or_insert_with(|| Arc::new(LocalizedLabels::from_page(page.as_ref()))),
        )
    }
}

impl<F, P> Drop for StatusPoller<F, P> {
    fn drop(&mut self) {
        self.cancel_token.cancel();
    }
}

async fn poll_loop<F, P>(
    shared: Arc<Shared<F, P>>,
    labels: Arc<LocalizedLabels>,
    period: Duration,
    cancel_token: CancellationToken,
) where
    F: StatusFetcher,
    P: Page + 'static,
{
    // First cycle runs one period after start
    let mut interval = tokio::time::interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = interval.tick() => {
                let shared = Arc::clone(&shared);
                let labels = Arc::clone(&labels);
                tokio::spawn(async move {
                    if let Err(e) = run_cycle(&shared, &labels).await {
                        warn!("Network status poll failed: {}", e);
                    }
                });
            }
            () = cancel_token.cancelled() => {
                info!("Network status timer cancelled");
                return;
            }
        }
    }
}

async fn run_cycle<F, P>(shared: &Shared<F, P>, labels: &LocalizedLabels) -> Result<ApplyReport, FetchError>
where
    F: StatusFetcher,
    P: Page,
{
    shared.record(|s| s.cycles_started += 1);

    match shared.fetcher.fetch().await {
        Ok(document) => {
            let report = apply_document(shared.page.as_ref(), labels, &document);
            shared.record(|s| {
                s.documents_applied += 1;
                s.last_applied_at = Some(Utc::now());
            });
            Ok(report)
        }
        Err(e) => {
            shared.record(|s| s.cycles_failed += 1);
            Err(e)
        }
    }
}
