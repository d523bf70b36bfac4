use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Ticker feed settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Ticker list URL handed to the [`TickerSource`](super::TickerSource).
    pub endpoint: String,
    /// Market category query parameter.
    pub category: String,
    /// Quote currency suffix a symbol must end with to be kept.
    pub quote_suffix: String,
    /// Number of coins kept after sorting by volume.
    pub top_n: usize,
    /// Seconds between polls.
    pub poll_interval_secs: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.bybit.com/v5/market/tickers".to_owned(),
            category: "spot".to_owned(),
            quote_suffix: "USDT".to_owned(),
            top_n: 50,
            poll_interval_secs: 30,
        }
    }
}

impl FeedConfig {
    /// Poll interval as a duration.
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    /// Full request URL with the category query.
    #[must_use]
    pub fn request_url(&self) -> String {
        format!("{}?category={}", self.endpoint, self.category)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = FeedConfig::default();
        assert_eq!(cfg.poll_interval(), Duration::from_secs(30));
        assert_eq!(
            cfg.request_url(),
            "https://api.bybit.com/v5/market/tickers?category=spot"
        );
        assert_eq!(cfg.top_n, 50);
    }

    #[test]
    fn partial_json() {
        let cfg: FeedConfig =
            serde_json::from_str(r#"{"quote_suffix": "USDC", "top_n": 20}"#).unwrap();
        assert_eq!(cfg.quote_suffix, "USDC");
        assert_eq!(cfg.top_n, 20);
        assert_eq!(cfg.category, "spot");
    }
}
