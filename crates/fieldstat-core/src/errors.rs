use thiserror::Error;

/// Errors that can occur during statistical computations
#[derive(Error, Debug)]
pub enum StatsError {
    // Input validation errors
    #[error("Insufficient data: {0}")]
    InsufficientDataMsg(String),

    #[error("Empty input: {field} cannot be empty")]
    EmptyInput { field: &'static str },

    #[error("Dimension mismatch: {0}")]
    DimensionMismatchMsg(String),

    #[error("Paired samples have mismatched lengths: {n_a} vs {n_b}")]
    PairedLengthMismatch { n_a: usize, n_b: usize },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid confidence level: {0} (must be in (0, 1))")]
    InvalidConfidenceLevel(f64),

    // Degenerate-data conditions, distinct from valid extreme results
    #[error("Zero variance in {context}: test statistic is undefined")]
    ZeroVariance { context: &'static str },

    #[error("Sample too large for {test}: n = {n} exceeds {max}")]
    SampleTooLarge {
        test: &'static str,
        n: usize,
        max: usize,
    },
}

/// Result type for statistical operations
pub type StatsResult<T> = Result<T, StatsError>;
