use super::types::response::{LastTrade, TopsEntry};
use crate::Result;
use crate::executor::{Config, Executor};

/// Client for the Investors Exchange market data endpoints.
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

    /// IEX's aggregated best quoted bid and offer for the given symbols.
    pub async fn tops(&self, symbols: &[&str]) -> Result<Vec<TopsEntry>> {
        self.executor.symbols_execute("tops", symbols).await
    }

    /// Last trade price and size for the given symbols.
    pub async fn last(&self, symbols: &[&str]) -> Result<Vec<LastTrade>> {
        self.executor.symbols_execute("tops/last", symbols).await
    }
}
