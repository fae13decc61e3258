//! Poll loop driving the supply tracker.

use std::time::Duration;

use alloy::primitives::Address;
use async_trait::async_trait;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};
use tracing::{error, info, warn};

use crate::clients::{AlertSink, SupplySource};
use crate::config::PollSchedulerConfig;
use crate::tracker::SupplyTracker;
use crate::types::PassReport;

/// Source of the "start next pass" signal.
#[async_trait]
pub trait Ticker: Send {
    /// Waits for the next tick. Returns `false` once the ticker is exhausted.
    async fn tick(&mut self) -> bool;
}

/// Wall-clock ticker firing every `period`, measured from the scheduled start
/// of the previous pass.
///
/// The first tick is one period after construction; the scheduler runs its
/// initial pass without waiting. A pass that overruns the period is followed
/// immediately by the next one and the cadence restarts from there.
pub struct IntervalTicker {
    interval: Interval,
}

impl IntervalTicker {
    /// # Panics
    /// Panics if `period` is zero.
    pub fn new(period: Duration) -> Self {
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { interval }
    }

    pub fn period(&self) -> Duration {
        self.interval.period()
    }
}

#[async_trait]
impl Ticker for IntervalTicker {
    async fn tick(&mut self) -> bool {
        self.interval.tick().await;
        true
    }
}

/// Periodically reads the LP supply of every monitored pair and alerts on burns.
pub struct PollScheduler<S, A> {
    /// Pair contracts in check order
    pairs: Vec<Address>,
    /// Last known supply per pair
    tracker: SupplyTracker,
    /// Contract-read collaborator
    source: S,
    /// Notification collaborator
    sink: A,
}

impl<S: SupplySource, A: AlertSink> PollScheduler<S, A> {
    /// Creates a new `PollScheduler` instance
    ///
    /// # Arguments
    /// * `config` - Monitored pairs and alert threshold
    /// * `source` - Reads pair supplies
    /// * `sink` - Receives burn alerts
    pub fn new(config: PollSchedulerConfig, source: S, sink: A) -> Self {
        Self {
            pairs: config.pairs,
            tracker: SupplyTracker::new(config.threshold),
            source,
            sink,
        }
    }

    pub fn pairs(&self) -> &[Address] {
        &self.pairs
    }

    pub fn tracker(&self) -> &SupplyTracker {
        &self.tracker
    }

    /// Runs one pass right away, then one pass per tick.
    ///
    /// Never returns with a wall-clock ticker; returns once `ticker` is exhausted.
    pub async fn run<T: Ticker + ?Sized>(&mut self, ticker: &mut T) {
        info!(
            pairs = self.pairs.len(),
            threshold = %self.tracker.threshold(),
            "starting lp burn monitor"
        );
        loop {
            self.run_pass().await;
            if !ticker.tick().await {
                info!("ticker exhausted, stopping lp burn monitor");
                return;
            }
        }
    }

    /// Reads every pair once, in order, and dispatches alerts for qualifying burns.
    ///
    /// Read and delivery failures are logged and never stop the pass.
    pub async fn run_pass(&mut self) -> PassReport {
        info!("starting monitoring pass");

        // every read of the pass is pinned to this block
        let block_number = match self.source.latest_block().await {
            Ok(number) => Some(number),
            Err(err) => {
                warn!(?err, "failed to read latest block, reading pairs at latest");
                None
            }
        };

        let mut report = PassReport {
            block_number,
            ..PassReport::default()
        };

        for pair in &self.pairs {
            let supply = match self.source.total_supply(*pair, block_number).await {
                Ok(supply) => supply,
                Err(err) => {
                    error!(pair = %pair, ?err, "failed to read lp supply");
                    report.read_failures += 1;
                    continue;
                }
            };
            report.checked += 1;

            let Some(event) = self.tracker.observe_at(*pair, supply, block_number) else {
                continue;
            };
            report.alerts += 1;
            warn!(
                pair = %pair,
                previous = %event.previous,
                current = %event.current,
                burned = %event.burned,
                percent = event.percent,
                "lp burn detected"
            );

            if let Err(err) = self.sink.send_alert(&event).await {
                error!(pair = %pair, ?err, "failed to deliver burn alert");
                report.delivery_failures += 1;
            }
        }

        info!(
            block_number = ?report.block_number,
            checked = report.checked,
            read_failures = report.read_failures,
            alerts = report.alerts,
            delivery_failures = report.delivery_failures,
            "monitoring pass finished"
        );
        report
    }
}
