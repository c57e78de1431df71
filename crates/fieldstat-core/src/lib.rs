//! fieldstat-core: assumption-checked hypothesis-test workflow
//!
//! Pure functions for the four-stage analysis taught in introductory
//! biostatistics: run a t-test (one-sample, two-sample pooled or Welch,
//! paired), derive residuals, check their normality (QQ pairs and the
//! Shapiro-Wilk test), and summarize group means with standard errors
//! for plotting. No I/O; every result is recomputed from its inputs.

pub mod describe;
pub mod diagnostics;
pub mod errors;
pub mod summary;
pub mod tests;
pub mod types;

pub use errors::{StatsError, StatsResult};
pub use types::*;
