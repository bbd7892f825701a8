//! IE Tools - Industrial engineering formulas
//!
//! This library provides:
//! - Effective interest rate conversion
//! - Engineering economy equivalence factors (P/F, A/P, P/G, ...)
//! - Worth measures and IRR for investment alternatives
//! - LCM normalization of cash flows for alternatives with unequal lives
//! - Benefit-cost ratios
//! - Decision making under uncertainty (maximax, maximin, regret, ...)

pub mod error;
pub mod config;
pub mod econ;
pub mod decision;

// Re-export commonly used types
pub use error::{IeError, Result};
pub use config::AnalysisConfig;
pub use econ::{
    effective_rate, normalize_cash_flows, Alternative, CashFlowSet, Convention, Equivalence,
    RateFormat,
};
pub use decision::{Criterion, DecisionMaker, PayoffMatrix};
