//! Response-body decoding.
//!
//! Decode failures always carry the raw body, because IEX error responses are
//! JSON objects with a different shape than success responses and callers need
//! to see what actually came back. When the `tracing` feature is enabled,
//! unknown response fields are logged as warnings to help detect API changes,
//! and decode failures are logged with the failing path.

use serde::de::DeserializeOwned;

use crate::Result;
use crate::error::Error;

#[cfg(feature = "tracing")]
pub(crate) fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    use std::any::type_name;

    let mut unknown_paths: Vec<String> = Vec::new();

    let jd = &mut serde_json::Deserializer::from_str(body);
    let result: std::result::Result<T, _> = serde_ignored::deserialize(jd, |path| {
        unknown_paths.push(path.to_string());
    });

    match result {
        Ok(value) => {
            for path in unknown_paths {
                tracing::warn!(
                    type_name = %type_name::<T>(),
                    field = %path,
                    "unknown field in API response"
                );
            }
            Ok(value)
        }
        Err(source) => {
            // Re-deserialize with serde_path_to_error to report the error path
            let jd = &mut serde_json::Deserializer::from_str(body);
            let path_result: std::result::Result<T, _> = serde_path_to_error::deserialize(jd);
            if let Err(path_err) = path_result {
                tracing::error!(
                    type_name = %type_name::<T>(),
                    path = %path_err.path().to_string(),
                    error = %path_err.inner(),
                    "deserialization failed"
                );
            }

            Err(Error::deserialization(body, source))
        }
    }
}

/// Pass-through deserialization when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub(crate) fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|source| Error::deserialization(body, source))
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::decode;
    use crate::error::{Deserialization, Kind};

    #[derive(Debug, Deserialize, PartialEq)]
    #[serde(rename_all = "camelCase")]
    struct TestShape {
        symbol: String,
        #[serde(default)]
        latest_price: Option<f64>,
    }

    #[test]
    fn decode_known_fields() {
        let body = r#"{"symbol": "AAPL", "latestPrice": 120.5}"#;

        let result: TestShape = decode(body).expect("decoding failed");
        assert_eq!(result.symbol, "AAPL");
        assert_eq!(result.latest_price, Some(120.5));
    }

    #[test]
    fn unknown_fields_are_tolerated() {
        let body = r#"{"symbol": "AAPL", "brandNewField": true}"#;

        let result: TestShape = decode(body).expect("decoding failed");
        assert_eq!(result.symbol, "AAPL");
        assert_eq!(result.latest_price, None);
    }

    #[test]
    fn null_optional_fields_are_absent() {
        let body = r#"{"symbol": "AAPL", "latestPrice": null}"#;

        let result: TestShape = decode(body).expect("decoding failed");
        assert_eq!(result.latest_price, None);
    }

    #[test]
    fn invalid_body_fails_with_raw_context() {
        let result: crate::Result<TestShape> = decode("not json");

        let error = result.unwrap_err();
        assert_eq!(error.kind(), Kind::Deserialization);
        let inner = error
            .downcast_ref::<Deserialization>()
            .expect("should downcast to Deserialization");
        assert_eq!(inner.body, "not json");
    }
}
