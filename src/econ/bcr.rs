//! Benefit-cost ratio analysis

use log::warn;

use super::alternative::Alternative;
use super::equivalence::Equivalence;
use crate::error::{IeError, Result};

/// Discount rates applied to the benefit and cost streams
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BcrRates {
    /// One rate for both streams
    Single(f64),
    /// Separate rates for benefits and costs
    Split { benefit: f64, cost: f64 },
}

impl BcrRates {
    /// Resolve rates given as loose optional arguments.
    ///
    /// A single `rate` takes precedence over split rates; passing both is
    /// allowed but logged. Split rates must be given together.
    pub fn from_options(
        rate: Option<f64>,
        benefit_rate: Option<f64>,
        cost_rate: Option<f64>,
    ) -> Result<Self> {
        if let Some(rate) = rate {
            if benefit_rate.is_some() || cost_rate.is_some() {
                warn!(
                    "A single rate and benefit/cost rates were both given; using {} for both streams",
                    rate
                );
            }
            return Ok(BcrRates::Single(rate));
        }

        match (benefit_rate, cost_rate) {
            (Some(benefit), Some(cost)) => Ok(BcrRates::Split { benefit, cost }),
            (Some(_), None) => Err(IeError::MissingRate("cost rate")),
            (None, Some(_)) => Err(IeError::MissingRate("benefit rate")),
            (None, None) => Err(IeError::MissingRate("benefit and cost rates")),
        }
    }

    pub fn benefit(&self) -> f64 {
        match *self {
            BcrRates::Single(rate) => rate,
            BcrRates::Split { benefit, .. } => benefit,
        }
    }

    pub fn cost(&self) -> f64 {
        match *self {
            BcrRates::Single(rate) => rate,
            BcrRates::Split { cost, .. } => cost,
        }
    }
}

/// Benefit and cost streams, both entered as positive amounts per period
#[derive(Debug, Clone)]
pub struct BenefitCostRatio {
    benefits: Alternative,
    costs: Alternative,
    rates: BcrRates,
}

impl BenefitCostRatio {
    pub fn new(benefit: Vec<f64>, cost: Vec<f64>, rates: BcrRates, equivalence: Equivalence) -> Self {
        Self {
            benefits: Alternative::new(benefit, equivalence),
            costs: Alternative::new(cost, equivalence),
            rates,
        }
    }

    pub fn rates(&self) -> BcrRates {
        self.rates
    }

    /// Present worth of benefits over present worth of costs
    pub fn bcr(&self) -> f64 {
        self.benefits.npv(self.rates.benefit()) / self.costs.npv(self.rates.cost())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_single_rate() {
        let ratio = BenefitCostRatio::new(
            vec![0.0, 200.0, 500.0, 700.0, 800.0],
            vec![2000.0, 0.0, 0.0, 0.0, 500.0],
            BcrRates::Single(0.1),
            Equivalence::default(),
        );
        assert_abs_diff_eq!(ratio.bcr(), 0.7121, epsilon = 0.00005);
    }

    #[test]
    fn test_split_rates() {
        let rates = BcrRates::from_options(None, Some(0.1), Some(0.15)).unwrap();
        let ratio = BenefitCostRatio::new(
            vec![0.0, 2000.0, 2100.0, 2300.0, 2500.0],
            vec![6000.0, 100.0, 110.0, 120.0, 200.0],
            rates,
            Equivalence::default(),
        );
        assert_abs_diff_eq!(ratio.bcr(), 1.0984, epsilon = 0.00005);
    }

    #[test]
    fn test_single_rate_wins() {
        let rates = BcrRates::from_options(Some(0.08), Some(0.1), Some(0.15)).unwrap();
        assert_eq!(rates, BcrRates::Single(0.08));
        assert_eq!(rates.benefit(), 0.08);
        assert_eq!(rates.cost(), 0.08);
    }

    #[test]
    fn test_missing_partner_rate() {
        assert!(matches!(
            BcrRates::from_options(None, Some(0.1), None),
            Err(IeError::MissingRate("cost rate"))
        ));
        assert!(matches!(
            BcrRates::from_options(None, None, Some(0.1)),
            Err(IeError::MissingRate("benefit rate"))
        ));
        assert!(BcrRates::from_options(None, None, None).is_err());
    }
}
