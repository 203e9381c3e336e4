//! Types for the reference data endpoints.

pub mod response;
