//! Error types shared by every calculation in the crate

use thiserror::Error;

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, IeError>;

/// Failures raised by the engineering economy and decision routines
#[derive(Debug, Error)]
pub enum IeError {
    /// A formula divided by a zero-valued argument
    #[error("division by zero: {what} must be non-zero")]
    DivisionByZero { what: &'static str },

    /// A cash-flow series with no entries at all
    #[error("cash flow series '{key}' is empty")]
    EmptySeries { key: String },

    /// A cash-flow series holding only the initial investment
    #[error("cash flow series '{key}' has a horizon of zero periods")]
    ZeroHorizon { key: String },

    /// Integer arithmetic exceeded the platform word size
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Newton-Raphson did not reach the NPV threshold
    #[error("IRR failed to converge after {iterations} iterations (last rate {last_rate})")]
    ConvergenceFailed { iterations: u32, last_rate: f64 },

    /// Benefit or cost rate given without its counterpart
    #[error("both benefit and cost rates must be given: missing {0}")]
    MissingRate(&'static str),

    /// Requested decision criterion does not exist
    #[error("unknown decision criterion '{0}'")]
    UnknownCriterion(String),

    /// Payoff matrix is malformed
    #[error("invalid payoff matrix: {0}")]
    InvalidPayoff(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
