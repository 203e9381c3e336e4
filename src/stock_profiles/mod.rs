//! Company profile endpoints of the IEX Cloud Stocks API.
//!
//! ## Available Endpoints
//!
//! | Endpoint | Description |
//! |----------|-------------|
//! | `stock/{symbol}/company` | Company details |
//! | `stock/{symbol}/insider-roster` | Top 10 insiders by position size |
//! | `stock/{symbol}/insider-summary` | Aggregated insider activity |
//! | `stock/{symbol}/insider-transactions` | Individual insider transactions |
//! | `stock/{symbol}/logo` | Company logo URL |
//! | `stock/{symbol}/peers` | Peer group symbols |
//!
//! # Example
//!
//! ```no_run
//! use iex_client_sdk::auth::Credentials;
//! use iex_client_sdk::executor::Config;
//! use iex_client_sdk::stock_profiles::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::builder()
//!     .credentials(Credentials::new("pk_123", "sk_456"))
//!     .build();
//! let client = Client::new(&config)?;
//!
//! let company = client.company("aapl").await?;
//! println!("{:?}", company.company_name);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod types;

pub use client::Client;
