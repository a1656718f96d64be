//! Automatic threshold selection by between-class variance maximization
//! (Otsu's method), applied independently per color channel.
//!
//! The optimizer consumes the PMF/CDF rows produced by
//! `channel-thresh-core` and returns one intensity level per channel. It is
//! total over well-formed statistics: degenerate channels and boundary
//! levels are handled by value substitution, never by an error path.

mod optimizer;

pub use optimizer::{otsu_level, otsu_thresholds};
