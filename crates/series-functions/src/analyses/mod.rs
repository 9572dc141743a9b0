//! Analyses that need more than the first series.
//!
//! These functions report [`needs_subquery`](crate::traits::Analysis::needs_subquery)
//! as `true`: the host runs the returned query against its own store and
//! passes the result as the second series to `execute`. The core itself
//! never issues a query.

pub mod dtw;

pub use dtw::Dtw;
