use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::{MarketError, Result};

/// One ticker record as the exchange sends it.
///
/// Numbers usually arrive as strings; bare JSON numbers are accepted too and
/// anything else (null, objects, arrays) reads as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTicker {
    #[serde(default, deserialize_with = "lenient_symbol")]
    pub symbol: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub last_price: Option<String>,
    /// Fractional 24h change, `"0.0123"` for +1.23%.
    #[serde(default, deserialize_with = "lenient_text")]
    pub price_24h_pcnt: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub volume_24h: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub turnover_24h: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub high_price_24h: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub low_price_24h: Option<String>,
}

fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

fn lenient_symbol<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_text(deserializer).map(Option::unwrap_or_default)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Envelope {
    ret_code: i64,
    #[serde(default)]
    ret_msg: String,
    result: Option<TickerList>,
}

#[derive(Debug, Deserialize)]
struct TickerList {
    #[serde(default)]
    list: Vec<Value>,
}

/// Decodes a ticker response body.
///
/// Records that are not JSON objects are skipped; the rest of the batch is
/// kept. A missing `result` or `list` yields an empty vector.
///
/// # Errors
///
/// Returns [`MarketError::Decode`] for a malformed envelope and
/// [`MarketError::Api`] when `retCode` is non-zero.
pub fn parse_envelope(body: &str) -> Result<Vec<RawTicker>> {
    let envelope: Envelope = serde_json::from_str(body).map_err(MarketError::from)?;
    if envelope.ret_code != 0 {
        return Err(MarketError::Api {
            code: envelope.ret_code,
            message: envelope.ret_msg,
        }
        .into());
    }

    let records = envelope.result.map(|r| r.list).unwrap_or_default();
    let total = records.len();
    let tickers: Vec<RawTicker> = records
        .into_iter()
        .filter_map(|record| serde_json::from_value(record).ok())
        .collect();
    if tickers.len() < total {
        debug!(skipped = total - tickers.len(), "skipped malformed ticker records");
    }
    Ok(tickers)
}
