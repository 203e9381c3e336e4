//! Reference data endpoints of the IEX Cloud API.
//!
//! ## Available Endpoints
//!
//! | Endpoint | Description |
//! |----------|-------------|
//! | `ref-data/symbols` | All symbols IEX supports for API calls |

pub mod client;
pub mod types;

pub use client::Client;
