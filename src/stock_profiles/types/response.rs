//! Response types for the company profile endpoints.

use bon::Builder;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_with::{TimestampMilliSeconds, serde_as};

/// Response from `stock/{symbol}/company`.
///
/// Every field other than the symbol may be absent or null; IEX omits fields
/// it has no data for.
#[derive(Debug, Clone, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Company {
    pub symbol: String,
    pub company_name: Option<String>,
    pub exchange: Option<String>,
    pub industry: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "CEO")]
    pub ceo: Option<String>,
    /// Name of the security, e.g. "Apple Inc.".
    pub security_name: Option<String>,
    /// Issue type code, e.g. "cs" for common stock, "ad" for ADR.
    pub issue_type: Option<String>,
    pub sector: Option<String>,
    pub primary_sic_code: Option<i64>,
    pub employees: Option<i64>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub address: Option<String>,
    pub address2: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub zip: Option<String>,
    pub country: Option<String>,
    pub phone: Option<String>,
}

/// One entry from `stock/{symbol}/insider-roster`.
#[serde_as]
#[derive(Debug, Clone, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct InsiderRoster {
    /// Name of the insider entity.
    pub entity_name: Option<String>,
    /// Number of shares held, reported as of [`Self::report_date`].
    pub position: Option<i64>,
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    #[serde(default)]
    pub report_date: Option<DateTime<Utc>>,
}

/// One entry from `stock/{symbol}/insider-summary`.
#[derive(Debug, Clone, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct InsiderSummary {
    pub full_name: Option<String>,
    /// Net shares transacted over the window.
    pub net_transacted: Option<i64>,
    /// Title reported in the filing, e.g. "Chief Executive Officer".
    pub reported_title: Option<String>,
    pub total_bought: Option<i64>,
    pub total_sold: Option<i64>,
}

/// One entry from `stock/{symbol}/insider-transactions`.
#[serde_as]
#[derive(Debug, Clone, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct InsiderTransaction {
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    #[serde(default)]
    pub effective_date: Option<DateTime<Utc>>,
    pub full_name: Option<String>,
    pub reported_title: Option<String>,
    /// Price per share of the transaction; absent for non-market dispositions.
    pub tran_price: Option<Decimal>,
    /// Number of shares transacted; negative values are dispositions.
    pub tran_shares: Option<i64>,
    /// Total value of the transaction.
    pub tran_value: Option<Decimal>,
}

/// Response from `stock/{symbol}/logo`.
#[derive(Debug, Clone, Deserialize, Builder)]
#[non_exhaustive]
pub struct Logo {
    pub url: Option<String>,
}
