//! Query-string construction for list endpoints.
//!
//! Every list page builds its URL from typed filter state. The builder keeps
//! insertion order (so tests can assert exact strings), drops empty values
//! instead of sending `key=`, and percent-encodes everything else.

/// Ordered `?key=value` accumulator.
///
/// A cleared filter must disappear from the request entirely, never linger as
/// an empty parameter — the backend treats `status=` as a real filter value.
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    pairs: Vec<(String, String)>,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a string parameter; empty or whitespace-only values are omitted.
    pub fn param(mut self, key: &str, value: &str) -> Self {
        let value = value.trim();
        if !value.is_empty() {
            self.pairs
                .push((key.to_string(), urlencoding::encode(value).into_owned()));
        }
        self
    }

    /// Append an optional string parameter; `None` and `""` are omitted.
    pub fn opt(self, key: &str, value: Option<&str>) -> Self {
        match value {
            Some(v) => self.param(key, v),
            None => self,
        }
    }

    pub fn num(mut self, key: &str, value: usize) -> Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    pub fn opt_num(mut self, key: &str, value: Option<i64>) -> Self {
        if let Some(v) = value {
            self.pairs.push((key.to_string(), v.to_string()));
        }
        self
    }

    pub fn flag(mut self, key: &str, value: bool) -> Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    /// Append a `_t=<millis>` pair to defeat intermediary caches.
    ///
    /// The timestamp is supplied by the caller (`js_sys::Date::now()` in page
    /// code) so the builder itself stays deterministic.
    pub fn cache_bust(mut self, now_ms: u64) -> Self {
        self.pairs.push(("_t".to_string(), now_ms.to_string()));
        self
    }

    /// `""` when nothing qualified, otherwise `"?k=v&k2=v2"`, ready to be
    /// concatenated onto a path.
    pub fn build(&self) -> String {
        if self.pairs.is_empty() {
            return String::new();
        }
        let joined = self
            .pairs
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&");
        format!("?{}", joined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_missing_values_are_omitted() {
        let qs = QueryBuilder::new()
            .num("page", 1)
            .opt("q", None)
            .param("status", "")
            .build();
        assert_eq!(qs, "?page=1");
    }

    #[test]
    fn no_qualifying_pairs_yields_empty_string() {
        let qs = QueryBuilder::new().opt("q", None).param("status", " ").build();
        assert_eq!(qs, "");
    }

    #[test]
    fn insertion_order_is_preserved() {
        let qs = QueryBuilder::new()
            .num("page", 2)
            .num("pageSize", 10)
            .param("q", "an")
            .param("department", "Kế toán")
            .build();
        assert_eq!(qs, "?page=2&pageSize=10&q=an&department=K%E1%BA%BF%20to%C3%A1n");
    }

    #[test]
    fn values_are_percent_encoded() {
        let qs = QueryBuilder::new().param("q", "a&b=c").build();
        assert_eq!(qs, "?q=a%26b%3Dc");
    }

    #[test]
    fn booleans_and_numbers_are_stringified() {
        let qs = QueryBuilder::new()
            .flag("minimal", true)
            .opt_num("employeeId", Some(12))
            .opt_num("userId", None)
            .build();
        assert_eq!(qs, "?minimal=true&employeeId=12");
    }

    #[test]
    fn cache_bust_appends_last() {
        let qs = QueryBuilder::new().num("page", 1).cache_bust(1724660000000).build();
        assert_eq!(qs, "?page=1&_t=1724660000000");
    }
}
