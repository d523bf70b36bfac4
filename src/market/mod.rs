mod coin;
mod config;
mod feed;
mod format;
mod sparkline;
mod synthetic;
mod ticker;
mod volume;

pub use coin::{bubble_size, process_tickers, BubbleStyle, Coin};
pub use config::FeedConfig;
pub use feed::{FeedStatus, MarketFeed, TickerSource};
pub use format::{format_currency, format_price};
pub use sparkline::{
    generate_sparkline, sparkline_paths, SparklinePaths, SPARKLINE_FLOOR, SPARKLINE_POINTS,
    SPARKLINE_WIDTH,
};
pub use synthetic::{synthetic_coins, SYNTHETIC_SYMBOLS};
pub use ticker::{parse_envelope, RawTicker};
pub use volume::{VolumeMonitor, VolumeMonitorConfig, VolumeSpike};
