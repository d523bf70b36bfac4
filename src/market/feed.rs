use std::time::Instant;

use rand::Rng;
use tracing::{debug, info, warn};

use crate::error::{MarketError, Result};

use super::{parse_envelope, process_tickers, synthetic_coins, Coin, FeedConfig};

/// Transport that fetches the raw ticker response body.
///
/// The host implements this over whatever HTTP client it has. Timeouts are
/// the implementation's business.
pub trait TickerSource {
    /// Fetches one response body for `config`.
    ///
    /// # Errors
    ///
    /// Any transport failure, typically as [`MarketError::Transport`].
    fn fetch(&mut self, config: &FeedConfig) -> Result<String>;
}

/// Where the currently served coins came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedStatus {
    /// Nothing polled yet.
    Pending,
    /// The last poll succeeded.
    Live,
    /// The last poll failed; serving the last live dataset.
    Stale,
    /// No poll has ever succeeded; serving placeholders.
    Synthetic,
}

/// Polled market data with fallback.
///
/// Owns the transport, the cached coins and the poll schedule. `poll` takes
/// `&mut self`, so at most one fetch is in flight per feed.
pub struct MarketFeed<S> {
    source: S,
    config: FeedConfig,
    coins: Vec<Coin>,
    status: FeedStatus,
    last_poll: Option<Instant>,
    last_success: Option<Instant>,
}

impl<S: TickerSource> MarketFeed<S> {
    /// Creates a feed that has not polled yet.
    #[must_use]
    pub fn new(source: S, config: FeedConfig) -> Self {
        Self {
            source,
            config,
            coins: Vec::new(),
            status: FeedStatus::Pending,
            last_poll: None,
            last_success: None,
        }
    }

    /// Returns the feed configuration.
    #[must_use]
    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    /// Returns the coins currently served.
    #[must_use]
    pub fn coins(&self) -> &[Coin] {
        &self.coins
    }

    /// Returns where the served coins came from.
    #[must_use]
    pub fn status(&self) -> FeedStatus {
        self.status
    }

    /// Returns when the last successful poll happened.
    #[must_use]
    pub fn last_success(&self) -> Option<Instant> {
        self.last_success
    }

    /// Returns whether a poll is due at `now`.
    ///
    /// The first poll is always due; after that one is due every
    /// `poll_interval`, measured from the start of the previous poll.
    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        self.last_poll.is_none_or(|last| {
            now.saturating_duration_since(last) >= self.config.poll_interval()
        })
    }

    /// Polls once and returns the coins now served.
    ///
    /// On success the cache is replaced. On any failure, including a response
    /// with no usable records, the previous cache is kept and marked stale,
    /// or placeholders are generated if nothing was ever cached.
    pub fn poll<R: Rng>(&mut self, now: Instant, rng: &mut R) -> &[Coin] {
        self.last_poll = Some(now);

        match self.fetch_coins(rng) {
            Ok(coins) => {
                info!(count = coins.len(), "market data refreshed");
                self.coins = coins;
                self.status = FeedStatus::Live;
                self.last_success = Some(now);
            }
            Err(err) if self.coins.is_empty() => {
                warn!(error = %err, "market data unavailable, using placeholders");
                self.coins = synthetic_coins(rng);
                self.status = FeedStatus::Synthetic;
            }
            Err(err) => {
                warn!(
                    error = %err,
                    cached = self.coins.len(),
                    "market data unavailable, serving cache"
                );
                if self.status != FeedStatus::Synthetic {
                    self.status = FeedStatus::Stale;
                }
            }
        }

        &self.coins
    }

    /// Polls only if one is due. Returns whether a poll ran.
    pub fn poll_if_due<R: Rng>(&mut self, now: Instant, rng: &mut R) -> bool {
        if !self.is_due(now) {
            return false;
        }
        self.poll(now, rng);
        true
    }

    fn fetch_coins<R: Rng>(&mut self, rng: &mut R) -> Result<Vec<Coin>> {
        let body = self.source.fetch(&self.config)?;
        let raw = parse_envelope(&body)?;
        debug!(records = raw.len(), "decoded ticker envelope");

        let coins = process_tickers(&raw, &self.config, rng);
        if coins.is_empty() {
            return Err(MarketError::NoUsableRecords.into());
        }
        Ok(coins)
    }
}
