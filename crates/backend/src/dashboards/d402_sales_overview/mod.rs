//! D402 Sales overview: filter -> aggregate -> assemble over the loaded CSV.

pub mod aggregator;
pub mod filter;
pub mod report;
pub mod service;

pub use service::SalesSession;

#[cfg(test)]
pub(crate) mod fixtures;
