//! Descriptive statistics of a discretized one-dimensional probability density.
//!
//! Input is a sequence of `<x> <density>` rows with non-decreasing x and
//! non-negative, not necessarily normalized, densities. The pipeline reads and
//! validates the rows ([`parsing`]), normalizes them ([`sample`]), computes
//! moments ([`moments`]) and quartiles/mode ([`quantiles`]), and renders the
//! result as fixed-width tables ([`formatting`]).

pub mod error;
pub mod formatting;
pub mod moments;
pub mod parsing;
pub mod quantiles;
pub mod sample;
pub mod stats;

pub use error::{AnalyzeError, ErrorKind, Result};
pub use stats::{StatisticsReport, analyze};
