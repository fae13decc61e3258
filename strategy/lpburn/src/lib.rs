//! LP burn monitoring crate.
//!
//! Watches the LP token supply of Uniswap V2-style pairs and raises an alert
//! when a single drop between two polls reaches a configured share of the supply.

mod clients;
pub mod config;
mod scheduler;
mod tracker;
mod types;

pub use clients::{AlertSink, SupplySource};
pub use config::{BurnThreshold, PollSchedulerConfig, ThresholdError};
pub use scheduler::{IntervalTicker, PollScheduler, Ticker};
pub use tracker::SupplyTracker;
pub use types::{BurnEvent, PassReport, LP_TOKEN_DECIMALS};
