use std::fmt::Display;

/// Ordered parameter bag for endpoint calls.
///
/// Insertion order is preserved exactly as supplied by each endpoint; the
/// bag is never sorted. The same bag feeds both the outgoing URL query
/// string and the bag-form signature base string, so the two always agree.
///
/// Values are inserted verbatim: no percent-encoding, numbers in their
/// decimal string form, `Decimal` in its canonical string form.
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    #[must_use]
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Append a parameter. `Display` covers strings, integers and
    /// `rust_decimal::Decimal` uniformly.
    pub fn push(&mut self, key: &str, value: impl Display) {
        self.pairs.push((key.to_string(), value.to_string()));
    }

    /// Builder-style variant of [`push`](Self::push).
    #[must_use]
    pub fn with(mut self, key: &str, value: impl Display) -> Self {
        self.push(key, value);
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Serialize the bag in insertion order: `key=value` pairs joined by a
    /// single `&`, no trailing separator, empty bag yields the empty string.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Serialize a list of pre-formatted `key=value` strings by sorting them
/// lexicographically ascending and joining with `&`.
///
/// This is the list-form canonicalization: reordering the input never
/// changes the output. It exists only for signature computation at call
/// sites that hold a raw string list instead of a bag; note the ordering
/// difference versus [`QueryParams::to_query_string`].
#[must_use]
pub fn sorted_query_string(items: &[String]) -> String {
    let mut sorted: Vec<&str> = items.iter().map(String::as_str).collect();
    sorted.sort_unstable();
    sorted.join("&")
}

/// Compose `base + endpoint`, appending the bag's insertion-order query
/// string when non-empty. No percent-encoding is performed.
#[must_use]
pub fn build_url(base: &str, endpoint: &str, params: &QueryParams) -> String {
    if params.is_empty() {
        format!("{}{}", base, endpoint)
    } else {
        format!("{}{}?{}", base, endpoint, params.to_query_string())
    }
}

/// List-form URL builder. Uses the sorted canonicalization internally, so
/// the produced query string is lexicographically ordered - unlike
/// [`build_url`], which preserves insertion order. Callers matching
/// server-side signing expectations must pick one form deliberately.
#[must_use]
pub fn build_url_sorted(base: &str, endpoint: &str, items: &[String]) -> String {
    if items.is_empty() {
        format!("{}{}", base, endpoint)
    } else {
        format!("{}{}?{}", base, endpoint, sorted_query_string(items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn bag_preserves_insertion_order() {
        let params = QueryParams::new()
            .with("zebra", "1")
            .with("alpha", "2")
            .with("mango", "3");
        assert_eq!(params.to_query_string(), "zebra=1&alpha=2&mango=3");
    }

    #[test]
    fn bag_join_has_no_trailing_separator() {
        let params = QueryParams::new().with("a", "1");
        assert_eq!(params.to_query_string(), "a=1");
        assert_eq!(QueryParams::new().to_query_string(), "");
    }

    #[test]
    fn bag_formats_numbers_and_decimals() {
        let params = QueryParams::new()
            .with("limit", 100u32)
            .with("amount", Decimal::from_str("1.50").unwrap());
        assert_eq!(params.to_query_string(), "limit=100&amount=1.50");
    }

    #[test]
    fn sorted_join_ignores_input_order() {
        let forward = vec!["b=2".to_string(), "a=1".to_string(), "c=3".to_string()];
        let backward = vec!["c=3".to_string(), "b=2".to_string(), "a=1".to_string()];
        assert_eq!(sorted_query_string(&forward), "a=1&b=2&c=3");
        assert_eq!(sorted_query_string(&forward), sorted_query_string(&backward));
        assert_eq!(sorted_query_string(&[]), "");
    }

    #[test]
    fn url_with_empty_bag_has_no_question_mark() {
        let url = build_url("https://api.coinex.com/v1", "/market/list", &QueryParams::new());
        assert_eq!(url, "https://api.coinex.com/v1/market/list");
    }

    #[test]
    fn url_appends_insertion_order_query() {
        let params = QueryParams::new().with("market", "BTCUSDT").with("limit", 10);
        let url = build_url("https://api.coinex.com/v1", "/market/depth", &params);
        assert_eq!(
            url,
            "https://api.coinex.com/v1/market/depth?market=BTCUSDT&limit=10"
        );
    }

    #[test]
    fn sorted_url_reorders_query() {
        let items = vec!["market=BTCUSDT".to_string(), "limit=10".to_string()];
        let url = build_url_sorted("https://api.coinex.com/v1", "/market/depth", &items);
        assert_eq!(
            url,
            "https://api.coinex.com/v1/market/depth?limit=10&market=BTCUSDT"
        );
    }
}
