//! Worth and rate-of-return measures for a single investment alternative

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::equivalence::Equivalence;
use crate::error::{IeError, Result};

/// Newton-Raphson settings for the internal rate of return
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IrrOptions {
    /// Starting rate in the alternative's rate format.
    /// When absent: |cf0| / sum(cf1..cfn)
    pub guess: Option<f64>,
    pub max_iterations: u32,
    /// Iteration stops once |NPV| falls to this value
    pub threshold: f64,
}

impl Default for IrrOptions {
    fn default() -> Self {
        Self {
            guess: None,
            max_iterations: 10_000,
            threshold: 1e-5,
        }
    }
}

/// One alternative's net cash flows, period 0 first
#[derive(Debug, Clone, PartialEq)]
pub struct Alternative {
    cash_flows: Vec<f64>,
    equivalence: Equivalence,
}

impl Alternative {
    pub fn new(cash_flows: Vec<f64>, equivalence: Equivalence) -> Self {
        Self { cash_flows, equivalence }
    }

    pub fn cash_flows(&self) -> &[f64] {
        &self.cash_flows
    }

    /// Periods after the initial investment
    pub fn horizon(&self) -> usize {
        self.cash_flows.len().saturating_sub(1)
    }

    /// Net present worth at `interest`
    pub fn npv(&self, interest: f64) -> f64 {
        self.cash_flows
            .iter()
            .enumerate()
            .map(|(t, &cf)| cf * self.equivalence.p_given_f(interest, t as f64))
            .sum()
    }

    /// Equivalent uniform annual worth over the horizon.
    ///
    /// Spreads over `len - 1` periods, not `len`; tables built with the
    /// `len`-period convention (18.94 rather than 22.65 for
    /// `[-1000, 200, 300, 400, 500]` at 10%) will not match.
    pub fn euaw(&self, interest: f64) -> f64 {
        self.npv(interest) * self.equivalence.a_given_p(interest, self.horizon() as f64)
    }

    /// Net future worth at the end of the horizon (`len - 1` periods, see `euaw`)
    pub fn nfw(&self, interest: f64) -> f64 {
        self.npv(interest) * self.equivalence.f_given_p(interest, self.horizon() as f64)
    }

    /// Internal rate of return by Newton-Raphson on the NPV.
    ///
    /// The result is expressed in the alternative's rate format, so 10% comes
    /// back as 10.0 under `RateFormat::Percent`.
    ///
    /// # Errors
    /// `EmptySeries` when there are no cash flows, `ConvergenceFailed` when
    /// the iteration limit is hit or the NPV slope vanishes.
    pub fn irr(&self, options: &IrrOptions) -> Result<f64> {
        let first = match self.cash_flows.first() {
            Some(&cf) => cf,
            None => return Err(IeError::EmptySeries { key: "alternative".to_string() }),
        };

        let format = self.equivalence.format;
        let mut rate = match options.guess {
            Some(guess) => format.to_fraction(guess),
            None => {
                let returns: f64 = self.cash_flows[1..].iter().sum();
                let guess = first.abs() / returns;
                if guess.is_finite() { guess } else { 0.1 }
            }
        };

        let mut iterations = 0;
        loop {
            let (npv, dnpv) = self.npv_and_derivative(rate);
            if npv.abs() <= options.threshold {
                debug!("IRR converged after {} iterations", iterations);
                return Ok(rate * format.scale());
            }

            iterations += 1;
            if iterations > options.max_iterations || dnpv == 0.0 || !dnpv.is_finite() {
                return Err(IeError::ConvergenceFailed {
                    iterations,
                    last_rate: rate * format.scale(),
                });
            }

            rate -= npv / dnpv;
            trace!("Iteration {}: IRR = {}", iterations, rate);
        }
    }

    /// NPV and its slope at a fractional rate
    fn npv_and_derivative(&self, rate: f64) -> (f64, f64) {
        let convention = self.equivalence.convention;
        let mut npv = 0.0;
        let mut dnpv = 0.0;

        for (t, &cf) in self.cash_flows.iter().enumerate() {
            let exponent = convention.periods(t as f64);
            npv += cf * (1.0 + rate).powf(-exponent);
            dnpv -= exponent * cf * (1.0 + rate).powf(-exponent - 1.0);
        }

        (npv, dnpv)
    }
}
