//! Investors Exchange market data endpoints (TOPS and Last).
//!
//! ## Available Endpoints
//!
//! | Endpoint | Description |
//! |----------|-------------|
//! | `tops` | IEX's aggregated best bid and offer |
//! | `tops/last` | Last trade price and size |
//!
//! Both take the requested symbols as a single comma-joined `symbols` query
//! parameter.

pub mod client;
pub mod types;

pub use client::Client;
