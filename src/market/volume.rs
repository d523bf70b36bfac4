use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::info;

use super::Coin;

/// Spike detection settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumeMonitorConfig {
    /// Volume over baseline at which a symbol counts as spiking.
    pub spike_threshold: f64,
    /// Minimum seconds between two alerts for the same symbol.
    pub cooldown_secs: u64,
    /// Seconds of history the baseline is taken over.
    pub baseline_window_secs: u64,
    /// Samples needed before the median replaces the first reading.
    pub min_samples: usize,
}

impl Default for VolumeMonitorConfig {
    fn default() -> Self {
        Self {
            spike_threshold: 3.0,
            cooldown_secs: 30 * 60,
            baseline_window_secs: 24 * 60 * 60,
            min_samples: 3,
        }
    }
}

/// An alert-worthy jump in dollar volume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeSpike {
    pub symbol: String,
    pub volume: f64,
    pub baseline: f64,
    /// `volume / baseline`.
    pub multiplier: f64,
}

#[derive(Debug, Clone)]
struct History {
    samples: VecDeque<(Instant, f64)>,
    baseline: f64,
}

/// Tracks a rolling volume baseline per symbol and reports spikes.
///
/// The baseline starts at the first reading and becomes the median of the
/// window once `min_samples` readings are in. Each symbol alerts at most
/// once per cooldown.
#[derive(Debug, Clone, Default)]
pub struct VolumeMonitor {
    config: VolumeMonitorConfig,
    history: HashMap<String, History>,
    last_alert: HashMap<String, Instant>,
}

impl VolumeMonitor {
    #[must_use]
    pub fn new(config: VolumeMonitorConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn config(&self) -> &VolumeMonitorConfig {
        &self.config
    }

    /// Current baseline of `symbol`, if it has been seen.
    #[must_use]
    pub fn baseline(&self, symbol: &str) -> Option<f64> {
        self.history.get(symbol).map(|h| h.baseline)
    }

    /// Records `volume` for `symbol` at `now` and returns a spike if the
    /// volume is at least `spike_threshold` times the baseline and the
    /// symbol is out of its cooldown.
    pub fn observe(&mut self, symbol: &str, volume: f64, now: Instant) -> Option<VolumeSpike> {
        let baseline = self.update_baseline(symbol, volume, now);
        if baseline <= 0.0 {
            return None;
        }

        let multiplier = volume / baseline;
        if multiplier < self.config.spike_threshold || !self.cooled_down(symbol, now) {
            return None;
        }

        self.last_alert.insert(symbol.to_owned(), now);
        info!(symbol, multiplier, volume, baseline, "volume spike");
        Some(VolumeSpike {
            symbol: symbol.to_owned(),
            volume,
            baseline,
            multiplier,
        })
    }

    /// Observes the dollar volume (`volume_24h * price`) of every coin.
    pub fn observe_coins(&mut self, coins: &[Coin], now: Instant) -> Vec<VolumeSpike> {
        coins
            .iter()
            .filter_map(|c| self.observe(&c.symbol, c.volume_24h * c.price, now))
            .collect()
    }

    fn update_baseline(&mut self, symbol: &str, volume: f64, now: Instant) -> f64 {
        let window = Duration::from_secs(self.config.baseline_window_secs);
        let history = self
            .history
            .entry(symbol.to_owned())
            .or_insert_with(|| History {
                samples: VecDeque::new(),
                baseline: volume,
            });

        history.samples.push_back((now, volume));
        while history
            .samples
            .front()
            .is_some_and(|(at, _)| now.saturating_duration_since(*at) >= window)
        {
            history.samples.pop_front();
        }

        if history.samples.len() >= self.config.min_samples {
            let mut volumes: Vec<f64> = history.samples.iter().map(|(_, v)| *v).collect();
            history.baseline = median(&mut volumes);
        }
        history.baseline
    }

    fn cooled_down(&self, symbol: &str, now: Instant) -> bool {
        let cooldown = Duration::from_secs(self.config.cooldown_secs);
        self.last_alert
            .get(symbol)
            .is_none_or(|at| now.saturating_duration_since(*at) > cooldown)
    }
}

fn median(values: &mut [f64]) -> f64 {
    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    match values.len() {
        0 => 0.0,
        n if n % 2 == 1 => values[mid],
        _ => (values[mid - 1] + values[mid]) / 2.0,
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn mins(n: u64) -> Duration {
        Duration::from_secs(n * 60)
    }

    fn warmed_up(t0: Instant) -> VolumeMonitor {
        let mut monitor = VolumeMonitor::new(VolumeMonitorConfig::default());
        for (i, v) in [100.0, 110.0, 90.0].into_iter().enumerate() {
            let at = t0 + mins(u64::try_from(i).unwrap_or(0));
            assert!(monitor.observe("BTC", v, at).is_none());
        }
        monitor
    }

    #[test]
    fn baseline_is_first_reading_then_median() {
        let t0 = Instant::now();
        let mut monitor = VolumeMonitor::new(VolumeMonitorConfig::default());
        monitor.observe("ETH", 50.0, t0);
        monitor.observe("ETH", 70.0, t0 + mins(1));
        assert_abs_diff_eq!(monitor.baseline("ETH").unwrap_or_default(), 50.0);
        monitor.observe("ETH", 60.0, t0 + mins(2));
        assert_abs_diff_eq!(monitor.baseline("ETH").unwrap_or_default(), 60.0);
        monitor.observe("ETH", 80.0, t0 + mins(3));
        assert_abs_diff_eq!(monitor.baseline("ETH").unwrap_or_default(), 65.0);
        assert!(monitor.baseline("SOL").is_none());
    }

    #[test]
    fn tripled_volume_is_a_spike() {
        let t0 = Instant::now();
        let mut monitor = warmed_up(t0);
        // Median of 90, 100, 110, 400 is 105.
        let spike = monitor.observe("BTC", 400.0, t0 + mins(3));
        let spike = spike.unwrap_or_else(|| panic!("expected a spike"));
        assert_eq!(spike.symbol, "BTC");
        assert_abs_diff_eq!(spike.baseline, 105.0);
        assert_abs_diff_eq!(spike.multiplier, 400.0 / 105.0);
    }

    #[test]
    fn below_threshold_is_quiet() {
        let t0 = Instant::now();
        let mut monitor = warmed_up(t0);
        assert!(monitor.observe("BTC", 250.0, t0 + mins(3)).is_none());
    }

    #[test]
    fn cooldown_suppresses_repeat_alerts() {
        let t0 = Instant::now();
        let mut monitor = warmed_up(t0);
        assert!(monitor.observe("BTC", 1000.0, t0 + mins(3)).is_some());
        assert!(monitor.observe("BTC", 5000.0, t0 + mins(10)).is_none());
        assert!(monitor.observe("BTC", 50_000.0, t0 + mins(33)).is_none());
        assert!(monitor.observe("BTC", 500_000.0, t0 + mins(34)).is_some());
    }

    #[test]
    fn old_samples_leave_the_window() {
        let t0 = Instant::now();
        let config = VolumeMonitorConfig {
            baseline_window_secs: 600,
            ..VolumeMonitorConfig::default()
        };
        let mut monitor = VolumeMonitor::new(config);
        for i in 0..3 {
            monitor.observe("XRP", 10.0, t0 + mins(i));
        }
        for i in 20..23 {
            monitor.observe("XRP", 40.0, t0 + mins(i));
        }
        assert_abs_diff_eq!(monitor.baseline("XRP").unwrap_or_default(), 40.0);
    }

    #[test]
    fn zero_baseline_never_spikes() {
        let t0 = Instant::now();
        let mut monitor = VolumeMonitor::new(VolumeMonitorConfig::default());
        assert!(monitor.observe("NEW", 0.0, t0).is_none());
        assert!(monitor.observe("NEW", 1e9, t0 + mins(1)).is_none());
    }
}
