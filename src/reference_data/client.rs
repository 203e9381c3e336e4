use super::types::response::SymbolInfo;
use crate::Result;
use crate::executor::{Config, Executor};

/// Client for the reference data endpoints.
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

    /// All symbols IEX supports for API calls, as of the current trading day.
    pub async fn symbols(&self) -> Result<Vec<SymbolInfo>> {
        self.executor.no_param_execute("ref-data/symbols").await
    }
}
