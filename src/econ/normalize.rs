//! Least-common-multiple normalization of cash flows
//!
//! Alternatives with unequal lives are compared over a common study period:
//! the LCM of their horizons. Each series is repeated until it spans that
//! period, with the terminal cash flow of one cycle netted against the
//! reinvestment at the start of the next. The salvage value of the last cycle
//! is kept as-is since nothing follows it.

use std::collections::BTreeMap;

use log::debug;

use crate::error::{IeError, Result};

/// Cash flows for several alternatives keyed by name.
/// Index 0 of each series is the initial investment.
pub type CashFlowSet = BTreeMap<String, Vec<f64>>;

/// Number of periods after the initial investment for each series,
/// in the set's iteration order
pub fn horizons(cash_flows: &CashFlowSet) -> Vec<usize> {
    cash_flows
        .values()
        .map(|series| series.len().saturating_sub(1))
        .collect()
}

fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Least common multiple of all values, reduced pairwise from 1.
/// An empty slice yields 1; any zero yields 0.
///
/// # Errors
/// `Overflow` when the multiple does not fit in `usize`.
pub fn lcm_of(values: &[usize]) -> Result<usize> {
    values.iter().try_fold(1usize, |acc, &n| {
        if n == 0 {
            return Ok(0);
        }
        (acc / gcd(acc, n))
            .checked_mul(n)
            .ok_or(IeError::Overflow("least common multiple of horizons"))
    })
}

/// Broadcast every series onto the LCM of all horizons.
///
/// The input set is consumed; the returned set has the same keys and each
/// series has length `LCM + 1`. For `{"cf1": [-1000, 300, 400, 500]}` paired
/// with a 4-period alternative, `cf1` is repeated four times with `-500`
/// (salvage 500 less the 1000 reinvestment) at periods 3, 6 and 9, and the
/// true salvage of 500 at period 12.
///
/// Running this again on its own output gives the same output: every series
/// then spans a single cycle, so the fold is undone by the salvage restore.
///
/// # Errors
/// `EmptySeries` for a series with no entries, `ZeroHorizon` for a series
/// holding only an initial investment, `Overflow` when the common period
/// count does not fit in `usize`.
pub fn normalize_cash_flows(cash_flows: CashFlowSet) -> Result<CashFlowSet> {
    for (key, series) in &cash_flows {
        match series.len() {
            0 => return Err(IeError::EmptySeries { key: key.clone() }),
            1 => return Err(IeError::ZeroHorizon { key: key.clone() }),
            _ => {}
        }
    }

    let lcm = lcm_of(&horizons(&cash_flows))?;
    debug!("Normalizing {} alternatives over {} periods", cash_flows.len(), lcm);

    Ok(cash_flows
        .into_iter()
        .map(|(key, series)| {
            let broadcast = broadcast_series(series, lcm);
            (key, broadcast)
        })
        .collect())
}

/// Repeat one series (horizon > 0) until it covers `periods`
fn broadcast_series(mut series: Vec<f64>, periods: usize) -> Vec<f64> {
    let horizon = series.len() - 1;
    let first = series[0];
    let salvage = series[horizon];

    // Terminal flow of each cycle absorbs the next cycle's investment
    series[horizon] = first + salvage;

    let repeats = periods / horizon;
    let mut out = Vec::with_capacity(periods + 1);
    out.extend_from_slice(&series);
    for _ in 1..repeats {
        out.extend_from_slice(&series[1..]);
    }

    if let Some(last) = out.last_mut() {
        *last = salvage;
    }
    out
}
