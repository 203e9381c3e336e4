//! Ordered query-string assembly.
//!
//! IEX endpoints take their parameters as a flat query string. The builder
//! keeps pairs in insertion order and renders them on demand, so the string
//! that is signed is byte-identical to the string that is sent.

use url::form_urlencoded;

/// Accumulates key/value pairs and renders them as `?k=v&k2=v2`.
///
/// Duplicate keys are preserved in order; array-style parameters are repeated
/// keys on the wire. Rendering never fails and never consumes the builder.
#[derive(Clone, Debug, Default)]
pub struct QueryBuilder {
    params: Vec<(String, String)>,
}

impl QueryBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a pair. No deduplication is performed.
    pub fn add<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) -> &mut Self {
        self.params.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Renders the accumulated pairs, percent-encoded, with a leading `?`.
    /// Returns `""` when nothing has been added. Pure function of the
    /// accumulated state, so repeated calls yield identical output.
    #[must_use]
    pub fn build(&self) -> String {
        if self.params.is_empty() {
            return String::new();
        }

        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.params {
            serializer.append_pair(key, value);
        }
        format!("?{}", serializer.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_builder_renders_empty_string() {
        let query = QueryBuilder::new();
        assert!(query.is_empty());
        assert_eq!(query.build(), "");
    }

    #[test]
    fn pairs_render_in_insertion_order() {
        let mut query = QueryBuilder::new();
        query.add("a", "1").add("b", "2");
        assert_eq!(query.build(), "?a=1&b=2");
    }

    #[test]
    fn duplicate_keys_are_preserved() {
        let mut query = QueryBuilder::new();
        query.add("symbols", "AAPL").add("symbols", "MSFT");
        assert_eq!(query.build(), "?symbols=AAPL&symbols=MSFT");
    }

    #[test]
    fn build_is_idempotent() {
        let mut query = QueryBuilder::new();
        query.add("token", "pk_123");
        assert_eq!(query.build(), query.build());
    }

    #[test]
    fn values_are_percent_encoded() {
        let mut query = QueryBuilder::new();
        query.add("symbols", "AAPL,MSFT");
        assert_eq!(query.build(), "?symbols=AAPL%2CMSFT");
    }
}
