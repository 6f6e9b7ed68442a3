//! Query wrappers for the catalogue.
//!
//! Each module provides a query struct that borrows from a
//! [`Catalogue`](crate::Catalogue) and exposes typed results.

pub mod records;
pub mod stats;

pub use records::RecordQuery;
pub use stats::StatsQuery;
