//! Side-by-side worth measures for normalized alternatives

use log::warn;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::alternative::{Alternative, IrrOptions};
use super::equivalence::Equivalence;
use super::normalize::CashFlowSet;

/// Worth measures for one alternative
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub name: String,
    pub periods: usize,
    pub npv: f64,
    pub euaw: f64,
    pub nfw: f64,
    /// None when the IRR iteration failed; the failure is logged
    pub irr: Option<f64>,
}

/// Evaluate every alternative in parallel, in key order
pub fn compare_alternatives(
    cash_flows: CashFlowSet,
    equivalence: Equivalence,
    interest: f64,
    irr_options: &IrrOptions,
) -> Vec<Comparison> {
    cash_flows
        .into_par_iter()
        .map(|(name, series)| {
            let alt = Alternative::new(series, equivalence);
            let irr = match alt.irr(irr_options) {
                Ok(rate) => Some(rate),
                Err(err) => {
                    warn!("No IRR for {}: {}", name, err);
                    None
                }
            };
            Comparison {
                periods: alt.horizon(),
                npv: alt.npv(interest),
                euaw: alt.euaw(interest),
                nfw: alt.nfw(interest),
                irr,
                name,
            }
        })
        .collect()
}
