//! Response types for the reference data endpoints.

use bon::Builder;
use chrono::NaiveDate;
use serde::Deserialize;

/// One entry from `ref-data/symbols`.
#[derive(Debug, Clone, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct SymbolInfo {
    pub symbol: String,
    pub name: Option<String>,
    pub exchange: Option<String>,
    /// Date the symbol reference data was generated.
    pub date: Option<NaiveDate>,
    pub is_enabled: Option<bool>,
    /// Issue type code, e.g. "cs" for common stock, "et" for ETF.
    #[serde(rename = "type")]
    pub issue_type: Option<String>,
    pub region: Option<String>,
    pub currency: Option<String>,
    /// Unique identifier assigned by IEX, stable across symbol changes.
    pub iex_id: Option<String>,
    pub figi: Option<String>,
    pub cik: Option<String>,
}
