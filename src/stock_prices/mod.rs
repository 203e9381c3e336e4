//! Price and news endpoints of the IEX Cloud Stocks API.
//!
//! ## Available Endpoints
//!
//! | Endpoint | Description |
//! |----------|-------------|
//! | `stock/{symbol}/quote` | Latest quote |
//! | `stock/{symbol}/ohlc` | Official open/high/low/close |
//! | `stock/{symbol}/previous` | Previous trading day's price data |
//! | `stock/{symbol}/largest-trades` | Largest trades of the day |
//! | `stock/{symbol}/news/last/{last}` | Most recent news items |
//! | `stock/{symbol}/news/last/{last}/{field}` | A single field of the news payload, raw |
//!
//! # Example
//!
//! ```no_run
//! use iex_client_sdk::auth::Credentials;
//! use iex_client_sdk::executor::Config;
//! use iex_client_sdk::stock_prices::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::builder()
//!     .credentials(Credentials::new("pk_123", "sk_456"))
//!     .build();
//! let client = Client::new(&config)?;
//!
//! let quote = client.quote("aapl").await?;
//! println!("{:?}", quote.latest_price);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod types;

pub use client::Client;
