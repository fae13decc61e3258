//! Environment configuration for the rugradar daemon.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use lpburn::BurnThreshold;
use serde::Deserialize;
use url::Url;

/// Accepts a missing `.env` file; any other load failure is fatal, since dotenvy
/// stops at the first bad line and later variables would silently take defaults.
pub fn env_file_loaded(result: dotenvy::Result<PathBuf>) -> Result<Option<PathBuf>> {
    match result {
        Ok(path) => Ok(Some(path)),
        Err(err) if err.not_found() => Ok(None),
        Err(err) => Err(err).context("failed to load .env file"),
    }
}

/// Raw settings as read from the environment, field names upper-cased.
#[derive(Deserialize)]
pub struct AppConfig {
    pub eth_node_url: String,
    pub telegram_bot_token: String,
    pub telegram_chat_id: String,
    #[serde(default = "default_threshold_percent")]
    pub threshold_percent: f64,
    #[serde(default = "default_check_interval_seconds")]
    pub check_interval_seconds: u64,
    #[serde(default = "default_telegram_api_url")]
    pub telegram_api_url: String,
}

fn default_threshold_percent() -> f64 {
    lpburn::config::DEFAULT_THRESHOLD_PERCENT
}

fn default_check_interval_seconds() -> u64 {
    60
}

fn default_telegram_api_url() -> String {
    clients_telegrambot::TELEGRAM_API_BASE.to_string()
}

/// Validated settings the daemon is wired from.
pub struct Settings {
    pub rpc_url: Url,
    pub telegram_api_url: Url,
    pub telegram_bot_token: String,
    pub telegram_chat_id: String,
    pub threshold: BurnThreshold,
    pub check_interval: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        envy::from_env::<Self>().context("failed to parse config")
    }

    #[cfg(test)]
    fn from_vars(vars: &[(&str, &str)]) -> Result<Self> {
        let vars = vars.iter().map(|(k, v)| (k.to_string(), v.to_string()));
        envy::from_iter::<_, Self>(vars).context("failed to parse config")
    }

    pub fn validate(self) -> Result<Settings> {
        let eth_node_url = required("ETH_NODE_URL", self.eth_node_url)?;
        let telegram_bot_token = required("TELEGRAM_BOT_TOKEN", self.telegram_bot_token)?;
        let telegram_chat_id = required("TELEGRAM_CHAT_ID", self.telegram_chat_id)?;

        let rpc_url = Url::parse(&eth_node_url).context("ETH_NODE_URL is not a valid url")?;
        let telegram_api_url =
            Url::parse(&self.telegram_api_url).context("TELEGRAM_API_URL is not a valid url")?;
        let threshold = BurnThreshold::from_percent(self.threshold_percent)
            .context("invalid THRESHOLD_PERCENT")?;
        if self.check_interval_seconds == 0 {
            bail!("CHECK_INTERVAL_SECONDS must be greater than zero");
        }

        Ok(Settings {
            rpc_url,
            telegram_api_url,
            telegram_bot_token,
            telegram_chat_id,
            threshold,
            check_interval: Duration::from_secs(self.check_interval_seconds),
        })
    }
}

fn required(name: &str, value: String) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        bail!("{} must not be empty", name);
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const REQUIRED: [(&str, &str); 3] = [
        ("ETH_NODE_URL", "https://eth.llamarpc.com"),
        ("TELEGRAM_BOT_TOKEN", "123:abc"),
        ("TELEGRAM_CHAT_ID", "-1001234"),
    ];

    fn with(extra: &[(&'static str, &'static str)]) -> Vec<(&'static str, &'static str)> {
        let mut vars = REQUIRED.to_vec();
        vars.extend_from_slice(extra);
        vars
    }

    #[test]
    fn defaults_apply_when_optional_vars_are_missing() {
        let settings = AppConfig::from_vars(&REQUIRED).unwrap().validate().unwrap();

        assert_eq!(settings.rpc_url.as_str(), "https://eth.llamarpc.com/");
        assert_eq!(settings.telegram_api_url.as_str(), "https://api.telegram.org/");
        assert_eq!(settings.telegram_bot_token, "123:abc");
        assert_eq!(settings.telegram_chat_id, "-1001234");
        assert_eq!(settings.threshold, BurnThreshold::default());
        assert_eq!(settings.check_interval, Duration::from_secs(60));
    }

    #[test]
    fn optional_vars_override_defaults() {
        let vars = with(&[
            ("THRESHOLD_PERCENT", "12.5"),
            ("CHECK_INTERVAL_SECONDS", "15"),
            ("TELEGRAM_API_URL", "http://localhost:8081"),
        ]);

        let settings = AppConfig::from_vars(&vars).unwrap().validate().unwrap();

        assert_eq!(settings.threshold.micros(), 12_500_000);
        assert_eq!(settings.check_interval, Duration::from_secs(15));
        assert_eq!(settings.telegram_api_url.as_str(), "http://localhost:8081/");
    }

    #[test]
    fn missing_required_var_is_an_error() {
        let vars = [REQUIRED[0], REQUIRED[1]];

        let err = AppConfig::from_vars(&vars).err().unwrap();

        assert!(format!("{:#}", err).contains("telegram_chat_id"));
    }

    #[test]
    fn blank_required_var_is_an_error() {
        let vars = [REQUIRED[0], REQUIRED[1], ("TELEGRAM_CHAT_ID", "  ")];

        let err = AppConfig::from_vars(&vars).unwrap().validate().err().unwrap();

        assert_eq!(err.to_string(), "TELEGRAM_CHAT_ID must not be empty");
    }

    #[test]
    fn invalid_values_are_rejected() {
        let cases: [(&str, &str); 5] = [
            ("THRESHOLD_PERCENT", "150"),
            ("THRESHOLD_PERCENT", "50.0000004"),
            ("THRESHOLD_PERCENT", "-3"),
            ("CHECK_INTERVAL_SECONDS", "0"),
            ("TELEGRAM_API_URL", "not a url"),
        ];
        for case in cases {
            let config = AppConfig::from_vars(&with(&[case])).unwrap();
            assert!(config.validate().is_err(), "{:?} should be rejected", case);
        }

        let vars = [("ETH_NODE_URL", "localhost"), REQUIRED[1], REQUIRED[2]];
        let err = AppConfig::from_vars(&vars).unwrap().validate().err().unwrap();
        assert_eq!(err.to_string(), "ETH_NODE_URL is not a valid url");
    }

    #[test]
    fn missing_env_file_is_ignored() {
        let result = dotenvy::from_filename("rugradar-missing-test.env");

        assert_eq!(env_file_loaded(result).unwrap(), None);
    }

    #[test]
    fn malformed_env_file_is_an_error() {
        let path = std::env::temp_dir().join(format!("rugradar-{}.env", std::process::id()));
        std::fs::write(&path, "BAD LINE\nRUGRADAR_TEST_AFTER_BAD_LINE=10\n").unwrap();

        let result = env_file_loaded(dotenvy::from_path(&path).map(|_| path.clone()));
        std::fs::remove_file(&path).unwrap();

        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "failed to load .env file");
        assert!(std::env::var("RUGRADAR_TEST_AFTER_BAD_LINE").is_err());
    }
}
