//! Shared types for the LP burn monitor.

use alloy::primitives::{Address, U256};
use serde::Serialize;

use crate::config::BurnThreshold;

/// Uniswap V2 LP tokens always carry 18 decimals.
pub const LP_TOKEN_DECIMALS: u8 = 18;

/// A drop in LP supply large enough to cross the configured threshold
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BurnEvent {
    /// Pair contract whose supply dropped
    pub pair: Address,
    /// Supply recorded on the previous successful read
    pub previous: U256,
    /// Supply just read
    pub current: U256,
    /// `previous - current`
    pub burned: U256,
    /// Burned share of `previous`, in percent, floored to six decimals
    pub percent: f64,
    /// Threshold that was crossed
    pub threshold: BurnThreshold,
    /// Block the reading was taken at, if the pass could pin one
    pub block_number: Option<u64>,
}

impl BurnEvent {
    /// Renders the alert text pushed to the operator.
    pub fn to_message(&self) -> String {
        let block = self
            .block_number
            .map(|n| format!(" (block {})", n))
            .unwrap_or_default();
        format!(
            "🚨 RugRadar Alert 🚨\n\
             Pair {} burned {} LP tokens ({:.2}% of total supply).\n\
             Supply: {} -> {}{}\n\
             Threshold: {}%",
            self.pair,
            utils::format_amount(self.burned, LP_TOKEN_DECIMALS),
            self.percent,
            utils::format_amount(self.previous, LP_TOKEN_DECIMALS),
            utils::format_amount(self.current, LP_TOKEN_DECIMALS),
            block,
            self.threshold,
        )
    }
}

/// Outcome counters of a single pass over the monitored pairs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PassReport {
    /// Block every read of the pass was pinned to; `None` means reads hit `latest`
    pub block_number: Option<u64>,
    /// Pairs whose supply was read successfully
    pub checked: usize,
    /// Pairs whose supply could not be read
    pub read_failures: usize,
    /// Burn events raised
    pub alerts: usize,
    /// Burn events the sink failed to deliver
    pub delivery_failures: usize,
}
