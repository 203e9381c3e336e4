//! Response types for the price and news endpoints.
//!
//! IEX reports instants as epoch milliseconds; those fields deserialize into
//! [`DateTime<Utc>`] via `serde_with`. Prices are [`Decimal`] to avoid float
//! rounding. Anything the API may omit or null is an `Option`.

use bon::Builder;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_with::{TimestampMilliSeconds, serde_as};

/// Response from `stock/{symbol}/quote`.
#[serde_as]
#[derive(Debug, Clone, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Quote {
    pub symbol: String,
    pub company_name: Option<String>,
    pub primary_exchange: Option<String>,
    pub latest_price: Option<Decimal>,
    /// Source of [`Self::latest_price`], e.g. "IEX real time price" or "Close".
    pub latest_source: Option<String>,
    /// Human-readable time of the latest price, e.g. "3:59:58 PM".
    pub latest_time: Option<String>,
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    #[serde(default)]
    pub latest_update: Option<DateTime<Utc>>,
    pub latest_volume: Option<i64>,
    pub iex_realtime_price: Option<Decimal>,
    pub open: Option<Decimal>,
    pub close: Option<Decimal>,
    pub high: Option<Decimal>,
    pub low: Option<Decimal>,
    pub previous_close: Option<Decimal>,
    pub previous_volume: Option<i64>,
    pub change: Option<Decimal>,
    /// Change as a ratio, e.g. `-0.0094` for -0.94%.
    pub change_percent: Option<Decimal>,
    pub avg_total_volume: Option<i64>,
    pub market_cap: Option<i64>,
    pub pe_ratio: Option<Decimal>,
    pub week52_high: Option<Decimal>,
    pub week52_low: Option<Decimal>,
    pub ytd_change: Option<Decimal>,
    #[serde(rename = "isUSMarketOpen")]
    pub is_us_market_open: Option<bool>,
}

/// Response from `stock/{symbol}/previous`.
#[derive(Debug, Clone, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct PreviousDayPrice {
    pub symbol: String,
    pub date: Option<NaiveDate>,
    pub open: Option<Decimal>,
    pub close: Option<Decimal>,
    pub high: Option<Decimal>,
    pub low: Option<Decimal>,
    pub volume: Option<i64>,
    pub unadjusted_volume: Option<i64>,
    pub change: Option<Decimal>,
    pub change_percent: Option<Decimal>,
}

/// One side of the [`Ohlc`] response: an official price and the time it was
/// published.
#[serde_as]
#[derive(Debug, Clone, Deserialize, Builder)]
#[non_exhaustive]
pub struct OhlcPoint {
    pub price: Option<Decimal>,
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    #[serde(default)]
    pub time: Option<DateTime<Utc>>,
}

/// Response from `stock/{symbol}/ohlc`.
#[derive(Debug, Clone, Deserialize, Builder)]
#[non_exhaustive]
pub struct Ohlc {
    pub open: Option<OhlcPoint>,
    pub close: Option<OhlcPoint>,
    pub high: Option<Decimal>,
    pub low: Option<Decimal>,
}

/// One entry from `stock/{symbol}/largest-trades`.
#[serde_as]
#[derive(Debug, Clone, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct LargestTrade {
    pub price: Option<Decimal>,
    pub size: Option<i64>,
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    #[serde(default)]
    pub time: Option<DateTime<Utc>>,
    pub time_label: Option<String>,
    pub venue: Option<String>,
    pub venue_name: Option<String>,
}

/// One entry from `stock/{symbol}/news/last/{last}`.
#[serde_as]
#[derive(Debug, Clone, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct News {
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    #[serde(default)]
    pub datetime: Option<DateTime<Utc>>,
    pub headline: Option<String>,
    pub source: Option<String>,
    pub url: Option<String>,
    pub summary: Option<String>,
    /// Comma-separated related symbols.
    pub related: Option<String>,
    pub image: Option<String>,
    pub lang: Option<String>,
    pub has_paywall: Option<bool>,
}
