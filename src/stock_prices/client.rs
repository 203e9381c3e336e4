use super::types::response::{LargestTrade, News, Ohlc, PreviousDayPrice, Quote};
use crate::Result;
use crate::executor::{Config, Executor};

/// Client for the price and news endpoints.
#[derive(Clone, Debug)]
pub struct Client {
    executor: Executor,
}

impl Client {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            executor: Executor::new(config)?,
        })
    }

    /// Latest quote for a symbol.
    pub async fn quote(&self, symbol: &str) -> Result<Quote> {
        self.executor
            .symbol_execute("stock/[symbol]/quote", symbol)
            .await
    }

    /// Official open, high, low and close of the current trading day.
    pub async fn ohlc(&self, symbol: &str) -> Result<Ohlc> {
        self.executor
            .symbol_execute("stock/[symbol]/ohlc", symbol)
            .await
    }

    /// Adjusted and unadjusted price data of the previous trading day.
    pub async fn previous_day_price(&self, symbol: &str) -> Result<PreviousDayPrice> {
        self.executor
            .symbol_execute("stock/[symbol]/previous", symbol)
            .await
    }

    /// Largest trades of the day, descending by size.
    pub async fn largest_trades(&self, symbol: &str) -> Result<Vec<LargestTrade>> {
        self.executor
            .symbol_execute("stock/[symbol]/largest-trades", symbol)
            .await
    }

    /// The `last` most recent news items for a symbol, newest first.
    pub async fn news(&self, symbol: &str, last: u32) -> Result<Vec<News>> {
        self.executor
            .symbol_last_execute("stock/[symbol]/news/last/[last]", symbol, last)
            .await
    }

    /// A single field of the news payload, returned as the raw response body
    /// rather than a decoded shape.
    pub async fn news_field(&self, symbol: &str, last: u32, field: &str) -> Result<String> {
        self.executor
            .symbol_last_field_execute("stock/[symbol]/news/last/[last]/[field]", symbol, last, field)
            .await
    }
}
