//! Core domain types and the aggregation engine.

pub mod trade;
pub mod fund;
pub mod aggregate;
pub mod error;
