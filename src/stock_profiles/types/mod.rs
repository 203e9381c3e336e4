//! Types for the company profile endpoints.
//!
//! All endpoints here are GET-only with the symbol in the path, so there are
//! no request types; responses live in [`response`].

pub mod response;
