//! Types for the price and news endpoints. GET-only, symbol in the path, so
//! responses only.

pub mod response;
