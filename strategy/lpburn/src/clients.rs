//! Seams between the poll scheduler and the outside world.
//!
//! The scheduler only sees these traits; the workspace clients implement them
//! here so tests can swap in in-memory fakes.

use std::sync::Arc;

use alloy::primitives::{Address, U256};
use anyhow::Result;
use async_trait::async_trait;

use clients_telegrambot::TelegramBot;
use clients_uniswapv2::UniswapV2PairReader;

use crate::types::BurnEvent;

/// Reads the current LP supply of pair contracts.
#[async_trait]
pub trait SupplySource: Send + Sync {
    /// Latest block number known to the node.
    async fn latest_block(&self) -> Result<u64>;

    /// Total supply of `pair`, read at `block_number` or at the latest block.
    async fn total_supply(&self, pair: Address, block_number: Option<u64>) -> Result<U256>;
}

/// Delivers burn alerts to the operator.
#[async_trait]
pub trait AlertSink: Send + Sync {
    async fn send_alert(&self, event: &BurnEvent) -> Result<()>;
}

#[async_trait]
impl SupplySource for UniswapV2PairReader {
    async fn latest_block(&self) -> Result<u64> {
        self.get_block_number().await
    }

    async fn total_supply(&self, pair: Address, block_number: Option<u64>) -> Result<U256> {
        UniswapV2PairReader::total_supply(self, pair, block_number).await
    }
}

#[async_trait]
impl AlertSink for TelegramBot {
    async fn send_alert(&self, event: &BurnEvent) -> Result<()> {
        self.push_message(&event.to_message()).await
    }
}

#[async_trait]
impl<T: SupplySource + ?Sized> SupplySource for Arc<T> {
    async fn latest_block(&self) -> Result<u64> {
        (**self).latest_block().await
    }

    async fn total_supply(&self, pair: Address, block_number: Option<u64>) -> Result<U256> {
        (**self).total_supply(pair, block_number).await
    }
}

#[async_trait]
impl<T: AlertSink + ?Sized> AlertSink for Arc<T> {
    async fn send_alert(&self, event: &BurnEvent) -> Result<()> {
        (**self).send_alert(event).await
    }
}
