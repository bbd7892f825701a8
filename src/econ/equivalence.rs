//! Engineering economy equivalence factors
//!
//! Factors follow the usual (X/Y, i, n) notation: `p_given_f(i, n)` is
//! (P/F, i, n), the present equivalent of a single future amount of 1.
//! They apply to a single amount, so `1000.0 * eq.p_given_f(0.10, 5.0)` is
//! the present worth of 1000 received five periods from now.
//!
//! Zero rates are not special-cased; factors with `i` in a denominator
//! produce the IEEE infinity or NaN the formula implies.

use serde::{Deserialize, Serialize};

use super::rates::RateFormat;

/// When cash flows within a period are assumed to occur
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Convention {
    /// End of period
    #[default]
    End,
    /// Middle of period (exponent shifted by half a period)
    Mid,
}

impl Convention {
    /// Effective number of periods for the compounding exponent
    pub(crate) fn periods(self, n: f64) -> f64 {
        match self {
            Convention::End => n,
            Convention::Mid => n - 0.5,
        }
    }
}

/// Factor calculator for a fixed timing convention and rate format
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Equivalence {
    pub convention: Convention,
    pub format: RateFormat,
}

impl Equivalence {
    pub fn new(convention: Convention, format: RateFormat) -> Self {
        Self { convention, format }
    }

    fn rate(&self, i: f64) -> f64 {
        self.format.to_fraction(i)
    }

    /// (P/F, i, n)
    pub fn p_given_f(&self, i: f64, n: f64) -> f64 {
        (1.0 + self.rate(i)).powf(-self.convention.periods(n))
    }

    /// (F/P, i, n)
    pub fn f_given_p(&self, i: f64, n: f64) -> f64 {
        1.0 / self.p_given_f(i, n)
    }

    /// (A/F, i, n), the sinking fund factor
    pub fn a_given_f(&self, i: f64, n: f64) -> f64 {
        let i = self.rate(i);
        i / ((1.0 + i).powf(self.convention.periods(n)) - 1.0)
    }

    /// (F/A, i, n)
    pub fn f_given_a(&self, i: f64, n: f64) -> f64 {
        1.0 / self.a_given_f(i, n)
    }

    /// (A/P, i, n), the capital recovery factor
    pub fn a_given_p(&self, i: f64, n: f64) -> f64 {
        (1.0 + self.rate(i)).powf(n) * self.a_given_f(i, n)
    }

    /// (P/A, i, n)
    pub fn p_given_a(&self, i: f64, n: f64) -> f64 {
        1.0 / self.a_given_p(i, n)
    }

    /// (P/G, i, n) for an arithmetic gradient whose first-period value is zero.
    /// Combine with `p_given_a` for a series with a non-zero base amount.
    pub fn p_given_g(&self, i: f64, n: f64) -> f64 {
        let i = self.rate(i);
        let n = self.convention.periods(n);
        let growth = (1.0 + i).powf(n);
        (growth - 1.0) / (i * i * growth) - n / (i * growth)
    }

    /// (A/G, i, n)
    pub fn a_given_g(&self, i: f64, n: f64) -> f64 {
        let i = self.rate(i);
        let n = self.convention.periods(n);
        1.0 / i - n / ((1.0 + i).powf(n) - 1.0)
    }

    /// (F/G, i, n)
    pub fn f_given_g(&self, i: f64, n: f64) -> f64 {
        (1.0 + self.rate(i)).powf(n) * self.p_given_g(i, n)
    }

    /// (P/A1, g, i, n): present worth of a geometric series growing at `g`
    /// per period (negative `g` for a declining series). `g` uses the same
    /// rate format as `i`.
    pub fn p_given_geometric(&self, i: f64, g: f64, n: f64) -> f64 {
        let i = self.rate(i);
        let g = self.rate(g);
        let n = self.convention.periods(n);

        if i == g {
            n / (1.0 + i)
        } else {
            (1.0 - (1.0 + g).powf(n) * (1.0 + i).powf(-n)) / (i - g)
        }
    }
}
