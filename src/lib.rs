#![cfg_attr(doc, doc = include_str!("../README.md"))]

pub mod auth;
pub mod error;
pub mod executor;
pub mod market_data;
pub mod query;
pub mod reference_data;
pub(crate) mod serde_helpers;
pub mod stock_prices;
pub mod stock_profiles;

use crate::error::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Base URL for the IEX Cloud production API.
pub const CLOUD_HOST: &str = "https://cloud.iexapis.com/stable/";

/// Base URL for the IEX Cloud sandbox, which serves scrambled test data
/// against sandbox credentials.
pub const SANDBOX_HOST: &str = "https://sandbox.iexapis.com/stable/";

/// Timestamp in milliseconds since [`std::time::UNIX_EPOCH`], the `x-iex-date`
/// value carried by signed requests.
pub(crate) type Timestamp = i64;
