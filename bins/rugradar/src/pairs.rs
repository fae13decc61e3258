//! Pair contracts watched by this deployment.

use std::str::FromStr;

use alloy::primitives::Address;
use anyhow::{Context, Result};
use tracing::warn;

/// Uniswap V2 pairs to watch, checked in this order.
pub const PAIR_ADDRESSES: &[&str] = &[
    "0xB4e16d0168e52d35CaCD2c6185b44281Ec28C9Dc", // USDC-WETH
];

pub fn monitored_pairs() -> Result<Vec<Address>> {
    parse_pairs(PAIR_ADDRESSES)
}

/// Parses pair addresses in order. Any hex casing is accepted; repeated entries are dropped.
fn parse_pairs(raw: &[&str]) -> Result<Vec<Address>> {
    let mut pairs: Vec<Address> = Vec::with_capacity(raw.len());
    for entry in raw {
        let pair = Address::from_str(entry.trim())
            .with_context(|| format!("invalid pair address {:?}", entry))?;
        if pairs.contains(&pair) {
            warn!(pair = %pair, "pair listed more than once, ignoring repeat");
            continue;
        }
        pairs.push(pair);
    }
    Ok(pairs)
}
