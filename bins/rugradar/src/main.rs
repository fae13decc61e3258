//! RugRadar: poll the LP supply of Uniswap V2 pairs and push a Telegram alert
//! when a single drop burns at least `THRESHOLD_PERCENT` of it.
//!
//! Configuration is read from the environment, or from a `.env` file in the working directory:
//! `ETH_NODE_URL`, `TELEGRAM_BOT_TOKEN`, `TELEGRAM_CHAT_ID` (required),
//! `THRESHOLD_PERCENT` (50), `CHECK_INTERVAL_SECONDS` (60), `TELEGRAM_API_URL`, `RUST_LOG`.
//!
//! Pairs are fixed at build time, see `pairs.rs`.

mod config;
mod log;
mod pairs;

use std::sync::Arc;
use std::time::Duration;

use alloy::network::Ethereum;
use alloy::providers::{Provider, RootProvider};
use anyhow::{Context, Result};
use clients_telegrambot::TelegramBot;
use clients_uniswapv2::UniswapV2PairReader;
use lpburn::{IntervalTicker, PollScheduler, PollSchedulerConfig};
use tracing::{error, info, warn};

use crate::config::AppConfig;

const TELEGRAM_TIMEOUT: Duration = Duration::from_secs(30);

#[tokio::main]
async fn main() {
    let dotenv = dotenvy::dotenv();
    log::init();
    let loaded = match config::env_file_loaded(dotenv) {
        Ok(loaded) => loaded,
        Err(err) => {
            error!("{:#}", err);
            std::process::exit(1);
        }
    };
    if let Some(path) = loaded {
        info!(path = %path.display(), "loaded environment file");
    }

    if let Err(err) = run().await {
        error!("{:#}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let settings = AppConfig::from_env()?.validate()?;
    let pairs = pairs::monitored_pairs()?;
    if pairs.is_empty() {
        warn!("no pairs configured, passes will have nothing to check");
    }

    let node_host = settings.rpc_url.host_str().unwrap_or_default().to_string();
    let provider = Arc::new(RootProvider::<Ethereum>::new_http(settings.rpc_url).erased());
    let reader = UniswapV2PairReader::new(provider);
    let chain_id = reader
        .chain_id()
        .await
        .with_context(|| format!("failed to connect to ethereum node at {}", node_host))?;
    info!(node = %node_host, chain_id, "connected to ethereum node");

    let client = reqwest::Client::builder()
        .timeout(TELEGRAM_TIMEOUT)
        .build()?;
    let telegram = TelegramBot::with_api_base(
        client,
        settings.telegram_api_url.to_string(),
        settings.telegram_bot_token,
        settings.telegram_chat_id,
    );
    info!(chat_id = telegram.chat_id(), "alerts go to telegram");

    let config = PollSchedulerConfig {
        pairs,
        threshold: settings.threshold,
    };
    let mut scheduler = PollScheduler::new(config, reader, telegram);
    let mut ticker = IntervalTicker::new(settings.check_interval);
    info!(
        interval_secs = ticker.period().as_secs(),
        "polling pairs at a fixed cadence"
    );

    scheduler.run(&mut ticker).await;
    Ok(())
}
