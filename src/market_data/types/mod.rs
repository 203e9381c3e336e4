//! Types for the Investors Exchange market data endpoints.

pub mod response;
