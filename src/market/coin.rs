use std::f64::consts::TAU;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::operations::RibbonConfig;

use super::{FeedConfig, RawTicker};

/// Per-coin ribbon appearance, drawn once when the coin is created.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BubbleStyle {
    pub radius: f64,
    pub twists: f64,
    pub width: f64,
    pub segments: usize,
    /// Initial spin angle in radians.
    pub rotation: f64,
    /// Spin per frame in radians.
    pub rotation_speed: f64,
}

impl BubbleStyle {
    /// Draws a style: radius 80–120, twists 1.5–3.5, width 25–45,
    /// 24 segments, any initial angle and a spin of at most ±0.01 rad/frame.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            radius: rng.random_range(80.0..120.0),
            twists: rng.random_range(1.5..3.5),
            width: rng.random_range(25.0..45.0),
            segments: 24,
            rotation: rng.random_range(0.0..TAU),
            rotation_speed: rng.random_range(-0.01..0.01),
        }
    }

    /// Ribbon parameters for drawing this bubble centered at `(x, y)`.
    #[must_use]
    pub fn ribbon_config(&self, x: f64, y: f64) -> RibbonConfig {
        RibbonConfig {
            radius: self.radius,
            twist: self.twists,
            width: self.width,
            segments: self.segments,
            ..RibbonConfig::default()
        }
        .centered_at(x, y)
    }
}

/// One tradeable pair, ready to be drawn as a bubble.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    /// Base asset, e.g. `BTC`.
    pub symbol: String,
    /// Exchange pair, e.g. `BTCUSDT`.
    pub full_symbol: String,
    pub price: f64,
    /// 24h change in percent.
    pub change_24h: f64,
    pub volume_24h: f64,
    pub turnover_24h: f64,
    pub high_24h: f64,
    pub low_24h: f64,
    /// Bubble scale factor.
    pub size: f64,
    pub style: BubbleStyle,
}

/// Scale factor for a 24h volume: `0.6 + min(log10(v + 1) / 9, 1) * 0.8`.
///
/// Runs from 0.6 for no volume to 1.4 at a billion units and above.
#[must_use]
pub fn bubble_size(volume: f64) -> f64 {
    let log_vol = (volume.max(0.0) + 1.0).log10();
    0.6 + (log_vol / 9.0).min(1.0) * 0.8
}

fn parse_number(field: Option<&str>) -> Option<f64> {
    field
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Turns raw ticker records into bubbles.
///
/// Keeps pairs quoted in `config.quote_suffix`, drops records whose price is
/// missing or not positive and records whose change is not a number, then
/// keeps the `config.top_n` largest by 24h volume. Missing volume, turnover
/// and range fields count as zero.
pub fn process_tickers<R: Rng>(
    raw: &[RawTicker],
    config: &FeedConfig,
    rng: &mut R,
) -> Vec<Coin> {
    let mut coins: Vec<Coin> = raw
        .iter()
        .filter_map(|t| {
            let symbol = t.symbol.strip_suffix(config.quote_suffix.as_str())?;
            if symbol.is_empty() {
                return None;
            }
            let price = parse_number(t.last_price.as_deref()).filter(|p| *p > 0.0)?;
            let change_24h = parse_number(t.price_24h_pcnt.as_deref())? * 100.0;
            let volume_24h = parse_number(t.volume_24h.as_deref()).unwrap_or(0.0);

            Some(Coin {
                symbol: symbol.to_owned(),
                full_symbol: t.symbol.clone(),
                price,
                change_24h,
                volume_24h,
                turnover_24h: parse_number(t.turnover_24h.as_deref()).unwrap_or(0.0),
                high_24h: parse_number(t.high_price_24h.as_deref()).unwrap_or(0.0),
                low_24h: parse_number(t.low_price_24h.as_deref()).unwrap_or(0.0),
                size: bubble_size(volume_24h),
                style: BubbleStyle::random(rng),
            })
        })
        .collect();

    coins.sort_by(|a, b| b.volume_24h.total_cmp(&a.volume_24h));
    coins.truncate(config.top_n);
    coins
}
