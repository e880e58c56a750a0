//! Poll driver: fetch, filter, persist and notify once per tick

use feedwatch_core::NewnessCache;
use std::future::Future;
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tracing::{info, warn};

use crate::error::PollError;
use crate::notify::Notifier;
use crate::source::RecordSource;

/// Counts for one completed cycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleReport {
    pub fetched: usize,
    pub fresh: usize,
    pub delivered: usize,
    pub failed: usize,
}

pub struct Poller {
    source: Box<dyn RecordSource>,
    notifier: Box<dyn Notifier>,
    cache: NewnessCache,
    interval: Duration,
}

impl Poller {
    pub fn new(
        source: Box<dyn RecordSource>,
        notifier: Box<dyn Notifier>,
        cache: NewnessCache,
        interval: Duration,
    ) -> Self {
        Self {
            source,
            notifier,
            cache,
            interval,
        }
    }

    pub fn cache(&self) -> &NewnessCache {
        &self.cache
    }

    /// Run one cycle to completion.
    ///
    /// A fetch failure returns before the cache is touched. New records are
    /// persisted before any is delivered; a failed delivery is logged and the
    /// remaining records are still sent.
    pub async fn run_cycle(&mut self) -> Result<CycleReport, PollError> {
        let batch = self.source.fetch().await?;
        let fetched = batch.len();

        let fresh = self.cache.filter(batch)?;

        let mut report = CycleReport {
            fetched,
            fresh: fresh.len(),
            ..Default::default()
        };
        for record in &fresh {
            let delivered = self.notifier.notify(record).await;
            match delivered {
                Ok(()) => report.delivered += 1,
                Err(e) => {
                    report.failed += 1;
                    warn!(
                        notifier = self.notifier.name(),
                        id = %record.id,
                        error = %e,
                        "failed to deliver notification"
                    );
                }
            }
        }

        info!(
            source = self.source.name(),
            fetched = report.fetched,
            fresh = report.fresh,
            delivered = report.delivered,
            "cycle complete"
        );
        Ok(report)
    }

    /// Poll until `shutdown` resolves or the store fails.
    ///
    /// The first cycle starts immediately. Cycles never overlap; a cycle that
    /// overruns the interval delays the next tick instead of bunching ticks
    /// up. Shutdown is only observed between cycles.
    pub async fn run<F>(&mut self, shutdown: F) -> Result<(), PollError>
    where
        F: Future<Output = ()>,
    {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(shutdown);

        info!(interval_secs = self.interval.as_secs(), "poller started");
        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    info!("shutdown requested, poller stopping");
                    return Ok(());
                }
                _ = ticker.tick() => {}
            }

            match self.run_cycle().await {
                Ok(_) => {}
                Err(e) if !e.is_fatal() => {
                    warn!(error = %e, "cycle aborted, retrying next tick");
                }
                Err(e) => return Err(e),
            }
        }
    }
}
