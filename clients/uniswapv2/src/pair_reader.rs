//! Read-only client for Uniswap V2-style pair contracts.

use alloy::eips::BlockId;
use alloy::primitives::{Address, U256};
use alloy::providers::{DynProvider, Provider};
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::debug;

use crate::contracts::IUniswapV2Pair;

/// UniswapV2PairReader reads LP token state from pair contracts over a shared provider
#[derive(Clone)]
pub struct UniswapV2PairReader {
    /// Provider instance for making RPC calls to the blockchain
    provider: Arc<DynProvider>,
}

impl UniswapV2PairReader {
    /// Creates a new `UniswapV2PairReader` on top of an already connected provider.
    pub fn new(provider: Arc<DynProvider>) -> Self {
        Self { provider }
    }

    /// Returns the chain id reported by the node.
    ///
    /// Used as a connectivity probe: a node that cannot answer this cannot serve reads either.
    pub async fn chain_id(&self) -> Result<u64> {
        self.provider
            .get_chain_id()
            .await
            .context("failed to read chain id")
    }

    /// Gets the current block number from the blockchain provider
    pub async fn get_block_number(&self) -> Result<u64> {
        self.provider
            .get_block_number()
            .await
            .context("failed to read latest block number")
    }

    /// Reads `totalSupply()` of the pair's LP token.
    ///
    /// # Arguments
    /// * `pair` - Address of the pair contract
    /// * `block_number` - Block to read at, or `None` for the latest block
    pub async fn total_supply(&self, pair: Address, block_number: Option<u64>) -> Result<U256> {
        let block_id = block_number.map_or_else(BlockId::latest, BlockId::number);
        let contract = IUniswapV2Pair::new(pair, Arc::clone(&self.provider));
        let supply = contract
            .totalSupply()
            .block(block_id)
            .call()
            .await
            .with_context(|| format!("totalSupply() call failed for {}", pair))?;
        debug!(pair = %pair, ?block_number, %supply, "read total supply");
        Ok(supply)
    }
}
