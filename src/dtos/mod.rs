pub mod chart;
pub mod statistics;
pub mod transaction;
