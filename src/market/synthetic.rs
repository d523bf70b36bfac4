use rand::Rng;

use super::{BubbleStyle, Coin};

/// Placeholder majors shown when no live data has ever been received.
pub const SYNTHETIC_SYMBOLS: [&str; 10] = [
    "BTC", "ETH", "SOL", "XRP", "ADA", "DOGE", "DOT", "AVAX", "LINK", "MATIC",
];

/// Generates placeholder coins with random prices, moves and volumes.
///
/// Prices fall in 10–50010, moves in ±10%, volumes below 1e9 and sizes in
/// 0.8–1.2. The range fields are zero.
pub fn synthetic_coins<R: Rng>(rng: &mut R) -> Vec<Coin> {
    SYNTHETIC_SYMBOLS
        .iter()
        .map(|symbol| Coin {
            symbol: (*symbol).to_owned(),
            full_symbol: format!("{symbol}USDT"),
            price: rng.random_range(10.0..50_010.0),
            change_24h: rng.random_range(-10.0..10.0),
            volume_24h: rng.random_range(0.0..1e9),
            turnover_24h: rng.random_range(0.0..5e7),
            high_24h: 0.0,
            low_24h: 0.0,
            size: rng.random_range(0.8..1.2),
            style: BubbleStyle::random(rng),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn ten_placeholder_majors() {
        let mut rng = StdRng::seed_from_u64(11);
        let coins = synthetic_coins(&mut rng);
        assert_eq!(coins.len(), 10);
        assert_eq!(coins[0].full_symbol, "BTCUSDT");
        assert_eq!(coins[9].symbol, "MATIC");
        for c in &coins {
            assert!(c.price >= 10.0);
            assert!(c.change_24h.abs() <= 10.0);
            assert!((0.8..1.2).contains(&c.size));
        }
    }
}
