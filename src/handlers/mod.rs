pub mod chart;
pub mod statistics;
pub mod transaction;

/// SQL predicate restricting rows to the month bound as parameter `?1`.
/// `dateOfSale` is ISO 8601, so the month is always characters 6-7.
pub(crate) const MONTH_FILTER: &str = "substr(dateOfSale, 6, 2) = ?1";
