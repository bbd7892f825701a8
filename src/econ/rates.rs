//! Interest rate formats and effective rate conversion

use serde::{Deserialize, Serialize};

use crate::error::{IeError, Result};

/// How a rate argument is expressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateFormat {
    /// 0.10 means 10%
    #[default]
    Fraction,
    /// 10 means 10%
    Percent,
}

impl RateFormat {
    /// Divisor that turns a rate in this format into a fraction
    pub fn scale(self) -> f64 {
        match self {
            RateFormat::Fraction => 1.0,
            RateFormat::Percent => 100.0,
        }
    }

    /// Convert a rate in this format to its fractional value
    pub fn to_fraction(self, rate: f64) -> f64 {
        rate / self.scale()
    }
}

/// Effective rate of a nominal rate `r` compounded `m` times:
/// `(1 + r/(scale*m))^m - 1`.
///
/// `m` is usually a whole number of compounding periods but fractional
/// values are accepted. Negative inputs go through the formula untouched.
///
/// # Errors
/// `IeError::DivisionByZero` when `m` is zero.
pub fn effective_rate(r: f64, m: f64, format: RateFormat) -> Result<f64> {
    if m == 0.0 {
        return Err(IeError::DivisionByZero { what: "compounding periods" });
    }

    Ok((1.0 + r / (format.scale() * m)).powf(m) - 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_monthly_compounding() {
        // 12% nominal compounded monthly
        let eff = effective_rate(0.12, 12.0, RateFormat::Fraction).unwrap();
        assert_relative_eq!(eff, 0.126825030131969, epsilon = 1e-12);
    }

    #[test]
    fn test_quarterly_compounding() {
        let eff = effective_rate(0.10, 4.0, RateFormat::Fraction).unwrap();
        assert_relative_eq!(eff, 0.103812890625, epsilon = 1e-12);
    }

    #[test]
    fn test_percent_matches_fraction() {
        for &(r, m) in &[(10.0, 4.0), (7.5, 12.0), (3.0, 2.5)] {
            let pct = effective_rate(r, m, RateFormat::Percent).unwrap();
            let frac = effective_rate(r / 100.0, m, RateFormat::Fraction).unwrap();
            assert_relative_eq!(pct, frac, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_zero_rate() {
        for &m in &[1.0, 4.0, 12.0, 365.0] {
            assert_eq!(effective_rate(0.0, m, RateFormat::Fraction).unwrap(), 0.0);
        }
    }

    #[test]
    fn test_zero_periods_fails() {
        let err = effective_rate(0.1, 0.0, RateFormat::Fraction).unwrap_err();
        assert!(matches!(err, IeError::DivisionByZero { .. }));
    }

    #[test]
    fn test_negative_rate_passes_through() {
        let eff = effective_rate(-0.12, 12.0, RateFormat::Fraction).unwrap();
        assert_relative_eq!(eff, 0.99_f64.powi(12) - 1.0, epsilon = 1e-12);
    }
}
