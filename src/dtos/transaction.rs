// src/dtos/transaction.rs
use std::collections::HashMap;

use serde::Serialize;

use crate::models::product::Product;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PER_PAGE: i64 = 10;

/// Listing parameters after defaulting. Malformed or non-positive numbers fall back silently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionQuery {
    pub page: i64,
    pub per_page: i64,
    pub search: String,
    pub month: Option<String>,
}

impl TransactionQuery {
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        Self {
            page: positive_or(params.get("page"), DEFAULT_PAGE),
            per_page: positive_or(params.get("perPage"), DEFAULT_PER_PAGE),
            search: params
                .get("search")
                .map(|s| s.to_lowercase())
                .unwrap_or_default(),
            month: params.get("month").cloned(),
        }
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.per_page)
    }
}

fn positive_or(raw: Option<&String>, default: i64) -> i64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(default)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPage {
    pub page: i64,
    pub per_page: i64,
    pub transactions: Vec<Product>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn missing_params_use_defaults() {
        let query = TransactionQuery::from_params(&params(&[]));
        assert_eq!(query.page, 1);
        assert_eq!(query.per_page, 10);
        assert_eq!(query.search, "");
        assert_eq!(query.month, None);
        assert_eq!(query.offset(), 0);
    }

    #[test]
    fn malformed_and_non_positive_numbers_use_defaults() {
        let query = TransactionQuery::from_params(&params(&[("page", "abc"), ("perPage", "0")]));
        assert_eq!((query.page, query.per_page), (1, 10));

        let query = TransactionQuery::from_params(&params(&[("page", "-3"), ("perPage", "-1")]));
        assert_eq!((query.page, query.per_page), (1, 10));

        // Whole-value parse: no numeric prefix is salvaged.
        let query = TransactionQuery::from_params(&params(&[("page", "2abc"), ("perPage", "3.7")]));
        assert_eq!((query.page, query.per_page), (1, 10));
    }

    #[test]
    fn search_is_lowercased_and_offset_follows_page() {
        let query = TransactionQuery::from_params(&params(&[
            ("page", "3"),
            ("perPage", "5"),
            ("search", "Cotton SHIRT"),
            ("month", "June"),
        ]));
        assert_eq!(query.search, "cotton shirt");
        assert_eq!(query.month.as_deref(), Some("June"));
        assert_eq!(query.offset(), 10);
    }
}
