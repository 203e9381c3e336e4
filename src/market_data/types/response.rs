//! Response types for the Investors Exchange market data endpoints.

use bon::Builder;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_with::{TimestampMilliSeconds, serde_as};

/// One entry from `tops`.
#[serde_as]
#[derive(Debug, Clone, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct TopsEntry {
    pub symbol: String,
    pub bid_size: Option<i64>,
    pub bid_price: Option<Decimal>,
    pub ask_size: Option<i64>,
    pub ask_price: Option<Decimal>,
    /// Shares traded on IEX during the day.
    pub volume: Option<i64>,
    pub last_sale_price: Option<Decimal>,
    pub last_sale_size: Option<i64>,
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    #[serde(default)]
    pub last_sale_time: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
    pub sector: Option<String>,
    pub security_type: Option<String>,
}

/// One entry from `tops/last`.
#[serde_as]
#[derive(Debug, Clone, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct LastTrade {
    pub symbol: String,
    pub price: Option<Decimal>,
    pub size: Option<i64>,
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    #[serde(default)]
    pub time: Option<DateTime<Utc>>,
}
