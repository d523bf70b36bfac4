//! Ribbon burst demo: writes an SVG document to stdout.
//!
//! Usage:
//! ```text
//! cargo run --example burst                    # five ribbons
//! cargo run --example burst -- 8               # eight ribbons
//! cargo run --example burst -- --bubbles       # offline feed as a bubble grid
//! ```

use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use ribbon_bubbles::error::MarketError;
use ribbon_bubbles::layout::{optimal_grid, resolve_collisions, Disc, GridLayout};
use ribbon_bubbles::market::{FeedConfig, MarketFeed, TickerSource};
use ribbon_bubbles::operations::{create_burst, MakeRibbon, RibbonConfig};
use ribbon_bubbles::render::{burst_svg, path_element};
use ribbon_bubbles::shading::{bubble_colors, Theme};
use ribbon_bubbles::Result;

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 600.0;

/// Page size for `--bubbles`.
const PAGE: (f64, f64) = (1280.0, 800.0);

/// Source with no network, so the feed falls back to placeholders.
struct Offline;

impl TickerSource for Offline {
    fn fetch(&mut self, config: &FeedConfig) -> Result<String> {
        Err(MarketError::Transport(format!("offline: {}", config.request_url())).into())
    }
}

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for the library.
    // Override with RUST_LOG env var (e.g. RUST_LOG=ribbon_bubbles=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("ribbon_bubbles=info".parse().unwrap_or_default());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let arg = std::env::args().nth(1);
    let svg = if arg.as_deref() == Some("--bubbles") {
        bubble_grid()?
    } else {
        let count = arg.and_then(|a| a.parse().ok()).unwrap_or(5);
        let base = RibbonConfig::burst().centered_at(WIDTH / 2.0, HEIGHT / 2.0);
        burst_svg(WIDTH, HEIGHT, &create_burst(count, base)?)
    };

    println!("{svg}");
    Ok(())
}

fn bubble_grid() -> Result<String> {
    let mut rng = StdRng::seed_from_u64(7);
    let mut feed = MarketFeed::new(Offline, FeedConfig::default());
    feed.poll(Instant::now(), &mut rng);
    tracing::info!(status = ?feed.status(), "feed polled");

    let theme = Theme::default();
    let coins = feed.coins();
    let grid = optimal_grid(coins.len(), PAGE.0, PAGE.1, &GridLayout::default());

    // Size each ribbon inside its cell, then nudge apart whatever still touches.
    let configs: Vec<_> = coins
        .iter()
        .zip(grid.positions(coins.len()))
        .map(|(coin, at)| {
            let mut config = coin.style.ribbon_config(at.x, at.y);
            let scale = grid.bubble_radius * coin.size / 1.4 / (config.radius + config.width / 2.0);
            config.radius *= scale;
            config.width *= scale;
            config
        })
        .collect();
    let mut discs: Vec<Disc> = configs
        .iter()
        .map(|c| Disc::new(c.center(), c.radius + c.width / 2.0))
        .collect();
    if !resolve_collisions(&mut discs, 10.0) {
        tracing::warn!("bubbles still overlap after collision passes");
    }

    let (width, height) = PAGE;
    let mut svg = format!(
        "<svg width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\" xmlns=\"http://www.w3.org/2000/svg\">\n  <rect width=\"100%\" height=\"100%\" fill=\"{}\" />\n",
        theme.background()
    );
    for ((coin, config), disc) in coins.iter().zip(configs).zip(&discs) {
        let ribbon = MakeRibbon::new(config.centered_at(disc.center.x, disc.center.y)).execute()?;
        let colors = bubble_colors(coin.change_24h, theme);
        let attrs = [
            ("fill", colors.primary.as_str()),
            ("stroke", colors.dark.as_str()),
            ("stroke-width", "1"),
        ];
        svg.push_str("  ");
        svg.push_str(&path_element(&ribbon.combined, &attrs));
        svg.push('\n');
    }
    svg.push_str("</svg>");
    Ok(svg)
}
