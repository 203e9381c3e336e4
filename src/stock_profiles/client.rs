use super::types::response::{
    Company, InsiderRoster, InsiderSummary, InsiderTransaction, Logo,
};
use crate::Result;
use crate::executor::{Config, Executor};

/// Client for the company profile endpoints.
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

    /// Company details: name, exchange, industry, description, officers.
    pub async fn company(&self, symbol: &str) -> Result<Company> {
        self.executor
            .symbol_execute("stock/[symbol]/company", symbol)
            .await
    }

    /// Top 10 insiders, with the most recent reported holdings.
    pub async fn insider_roster(&self, symbol: &str) -> Result<Vec<InsiderRoster>> {
        self.executor
            .symbol_execute("stock/[symbol]/insider-roster", symbol)
            .await
    }

    /// Aggregated insider activity over the last 6 months.
    pub async fn insider_summary(&self, symbol: &str) -> Result<Vec<InsiderSummary>> {
        self.executor
            .symbol_execute("stock/[symbol]/insider-summary", symbol)
            .await
    }

    /// Individual insider transactions from the last 12 months.
    pub async fn insider_transactions(&self, symbol: &str) -> Result<Vec<InsiderTransaction>> {
        self.executor
            .symbol_execute("stock/[symbol]/insider-transactions", symbol)
            .await
    }

    /// Company logo URL.
    pub async fn logo(&self, symbol: &str) -> Result<Logo> {
        self.executor
            .symbol_execute("stock/[symbol]/logo", symbol)
            .await
    }

    /// Peer group symbols.
    pub async fn peers(&self, symbol: &str) -> Result<Vec<String>> {
        self.executor
            .symbol_execute("stock/[symbol]/peers", symbol)
            .await
    }
}
