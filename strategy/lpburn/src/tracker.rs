//! Per-pair memory of the last LP supply reading and the burn decision.

use std::collections::HashMap;

use alloy::primitives::{Address, U256};

use crate::config::{BurnThreshold, MICROS_PER_PERCENT};
use crate::types::BurnEvent;

/// `burned / previous` is scaled by this to get millionths of a percent.
const PERCENT_SCALE: u64 = 100 * MICROS_PER_PERCENT;

/// Remembers the last total supply seen for every pair and flags drops that
/// reach the configured threshold.
#[derive(Debug, Clone)]
pub struct SupplyTracker {
    threshold: BurnThreshold,
    previous: HashMap<Address, U256>,
}

impl SupplyTracker {
    pub fn new(threshold: BurnThreshold) -> Self {
        Self {
            threshold,
            previous: HashMap::new(),
        }
    }

    pub fn threshold(&self) -> BurnThreshold {
        self.threshold
    }

    /// Last supply recorded for `pair`, if it was ever read.
    pub fn previous(&self, pair: &Address) -> Option<U256> {
        self.previous.get(pair).copied()
    }

    /// Number of pairs with a recorded baseline.
    pub fn tracked(&self) -> usize {
        self.previous.len()
    }

    /// Records `current` as the latest supply of `pair` and returns a burn event
    /// when the drop from the previous reading reaches the threshold.
    ///
    /// The first reading of a pair only seeds the baseline.
    pub fn observe(&mut self, pair: Address, current: U256) -> Option<BurnEvent> {
        self.observe_at(pair, current, None)
    }

    /// Same as [`SupplyTracker::observe`], tagging the event with the block the reading came from.
    pub fn observe_at(
        &mut self,
        pair: Address,
        current: U256,
        block_number: Option<u64>,
    ) -> Option<BurnEvent> {
        let previous = self.previous.insert(pair, current).unwrap_or(current);
        if current >= previous {
            return None;
        }

        let burned = previous - current;
        let scale = U256::from(PERCENT_SCALE);
        // burned / previous * 100 >= threshold, cross-multiplied
        if !utils::mul_ge(burned, scale, U256::from(self.threshold.micros()), previous) {
            return None;
        }

        // burned < previous, so this is at most PERCENT_SCALE
        let percent_micros = utils::mul_div_floor(burned, scale, previous)?;
        let percent = percent_micros.to::<u64>() as f64 / MICROS_PER_PERCENT as f64;

        Some(BurnEvent {
            pair,
            previous,
            current,
            burned,
            percent,
            threshold: self.threshold,
            block_number,
        })
    }
}
