//! Decision criteria: maximax, maximin, minimax regret, maximum likelihood
//! and expected value

use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use super::payoff::PayoffMatrix;
use crate::error::{IeError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Criterion {
    /// Best of the best payoffs
    MaxMax,
    /// Best of the worst payoffs
    MaxMin,
    /// Smallest maximum opportunity loss
    Regret,
    /// Best payoff under the most probable state
    #[serde(rename = "maxlik")]
    MaxLikelihood,
    /// Highest probability-weighted payoff
    #[serde(rename = "ev")]
    ExpectedValue,
}

impl Criterion {
    pub const ALL: [Criterion; 5] = [
        Criterion::MaxMax,
        Criterion::MaxMin,
        Criterion::Regret,
        Criterion::MaxLikelihood,
        Criterion::ExpectedValue,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Criterion::MaxMax => "maxmax",
            Criterion::MaxMin => "maxmin",
            Criterion::Regret => "regret",
            Criterion::MaxLikelihood => "maxlik",
            Criterion::ExpectedValue => "ev",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Criterion {
    type Err = IeError;

    fn from_str(s: &str) -> Result<Self> {
        Criterion::ALL
            .iter()
            .copied()
            .find(|c| c.name() == s)
            .ok_or_else(|| IeError::UnknownCriterion(s.to_string()))
    }
}

/// Chosen alternative and the payoff that justified it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub alternative: String,
    pub payoff: f64,
}

/// Results of every requested criterion, in request order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DecisionReport {
    pub outcomes: Vec<(Criterion, Outcome)>,
    /// Opportunity-loss matrix, present when `Regret` was requested
    pub regret: Option<Vec<Vec<f64>>>,
}

impl DecisionReport {
    pub fn get(&self, criterion: Criterion) -> Option<&Outcome> {
        self.outcomes
            .iter()
            .find(|(c, _)| *c == criterion)
            .map(|(_, outcome)| outcome)
    }
}

/// Index and value of the first maximum
fn argmax(values: &[f64]) -> (usize, f64) {
    values
        .iter()
        .copied()
        .enumerate()
        .fold((0, f64::NEG_INFINITY), |best, (i, v)| if v > best.1 { (i, v) } else { best })
}

/// Index and value of the first minimum
fn argmin(values: &[f64]) -> (usize, f64) {
    values
        .iter()
        .copied()
        .enumerate()
        .fold((0, f64::INFINITY), |best, (i, v)| if v < best.1 { (i, v) } else { best })
}

fn row_max(row: &[f64]) -> f64 {
    row.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

fn row_min(row: &[f64]) -> f64 {
    row.iter().copied().fold(f64::INFINITY, f64::min)
}

/// Applies a set of criteria to one payoff matrix
#[derive(Debug, Clone)]
pub struct DecisionMaker {
    matrix: PayoffMatrix,
    criteria: Vec<Criterion>,
}

impl DecisionMaker {
    pub fn new(matrix: PayoffMatrix, criteria: Vec<Criterion>) -> Self {
        Self { matrix, criteria }
    }

    /// Evaluate with every criterion
    pub fn with_all_criteria(matrix: PayoffMatrix) -> Self {
        Self::new(matrix, Criterion::ALL.to_vec())
    }

    pub fn matrix(&self) -> &PayoffMatrix {
        &self.matrix
    }

    pub fn fit(&self) -> DecisionReport {
        let mut report = DecisionReport::default();

        for &criterion in &self.criteria {
            let (index, payoff) = match criterion {
                Criterion::MaxMax => argmax(&self.row_summary(row_max)),
                Criterion::MaxMin => argmax(&self.row_summary(row_min)),
                Criterion::Regret => {
                    let regret = self.regret_matrix();
                    let worst: Vec<f64> = regret.iter().map(|row| row_max(row)).collect();
                    report.regret = Some(regret);
                    argmin(&worst)
                }
                Criterion::MaxLikelihood => {
                    let (state, _) = argmax(self.matrix.probabilities());
                    let column: Vec<f64> =
                        self.matrix.payoffs().iter().map(|row| row[state]).collect();
                    argmax(&column)
                }
                Criterion::ExpectedValue => argmax(&self.expected_values()),
            };

            let alternative = self.matrix.alternatives()[index].clone();
            debug!("{}: {} ({})", criterion, alternative, payoff);
            report.outcomes.push((criterion, Outcome { alternative, payoff }));
        }

        report
    }

    fn row_summary(&self, summarize: fn(&[f64]) -> f64) -> Vec<f64> {
        self.matrix.payoffs().iter().map(|row| summarize(row)).collect()
    }

    /// Column maximum less each payoff
    pub fn regret_matrix(&self) -> Vec<Vec<f64>> {
        let payoffs = self.matrix.payoffs();
        let column_max: Vec<f64> = (0..self.matrix.states().len())
            .map(|j| payoffs.iter().map(|row| row[j]).fold(f64::NEG_INFINITY, f64::max))
            .collect();

        payoffs
            .iter()
            .map(|row| row.iter().zip(&column_max).map(|(p, best)| best - p).collect())
            .collect()
    }

    /// Probability-weighted payoff of each alternative
    pub fn expected_values(&self) -> Vec<f64> {
        let probabilities = self.matrix.probabilities();
        self.matrix
            .payoffs()
            .iter()
            .map(|row| row.iter().zip(probabilities).map(|(p, q)| p * q).sum())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decision::payoff::load_payoff_from_reader;
    use approx::assert_relative_eq;

    const ORDERS: &str = "\
Order,Demand 6,Demand 7,Demand 8
$5,125,175,225
$6,200,300,400
$7,225,375,525
$8,200,400,600
$9,125,375,625
Prob,0.35,0.25,0.4
";

    fn check(report: &DecisionReport, criterion: Criterion, alternative: &str, payoff: f64) {
        let outcome = report.get(criterion).unwrap();
        assert_eq!(outcome.alternative, alternative, "{}", criterion);
        assert_relative_eq!(outcome.payoff, payoff, epsilon = 1e-9);
    }

    #[test]
    fn test_all_criteria_labeled() {
        let matrix = load_payoff_from_reader(ORDERS.as_bytes()).unwrap();
        let report = DecisionMaker::with_all_criteria(matrix).fit();

        check(&report, Criterion::MaxMax, "$9", 625.0);
        check(&report, Criterion::MaxMin, "$7", 225.0);
        check(&report, Criterion::Regret, "$8", 25.0);
        check(&report, Criterion::MaxLikelihood, "$9", 625.0);
        check(&report, Criterion::ExpectedValue, "$8", 410.0);
        assert_eq!(report.outcomes.len(), 5);
    }

    #[test]
    fn test_all_criteria_unlabeled() {
        let matrix = PayoffMatrix::from_rows(
            vec![
                vec![125.0, 175.0, 225.0],
                vec![200.0, 300.0, 400.0],
                vec![225.0, 375.0, 525.0],
                vec![200.0, 400.0, 600.0],
                vec![125.0, 375.0, 625.0],
            ],
            vec![0.35, 0.25, 0.4],
        )
        .unwrap();
        let report = DecisionMaker::with_all_criteria(matrix).fit();

        check(&report, Criterion::MaxMax, "4", 625.0);
        check(&report, Criterion::MaxMin, "2", 225.0);
        check(&report, Criterion::Regret, "3", 25.0);
        check(&report, Criterion::MaxLikelihood, "4", 625.0);
        check(&report, Criterion::ExpectedValue, "3", 410.0);
    }

    #[test]
    fn test_regret_matrix() {
        let matrix = load_payoff_from_reader(ORDERS.as_bytes()).unwrap();
        let report = DecisionMaker::new(matrix, vec![Criterion::Regret]).fit();

        let regret = report.regret.unwrap();
        assert_eq!(regret[0], vec![100.0, 225.0, 400.0]);
        assert_eq!(regret[3], vec![25.0, 0.0, 25.0]);
    }

    #[test]
    fn test_selected_criteria_only() {
        let matrix = load_payoff_from_reader(ORDERS.as_bytes()).unwrap();
        let report = DecisionMaker::new(matrix, vec![Criterion::MaxMin]).fit();

        assert_eq!(report.outcomes.len(), 1);
        assert!(report.get(Criterion::MaxMax).is_none());
        assert!(report.regret.is_none());
    }

    #[test]
    fn test_ties_pick_first() {
        let matrix = PayoffMatrix::from_rows(vec![vec![5.0, 1.0], vec![5.0, 2.0]], vec![0.5, 0.5])
            .unwrap();
        let report = DecisionMaker::new(matrix, vec![Criterion::MaxMax]).fit();
        assert_eq!(report.get(Criterion::MaxMax).unwrap().alternative, "0");
    }

    #[test]
    fn test_parse_criterion() {
        assert_eq!("maxlik".parse::<Criterion>().unwrap(), Criterion::MaxLikelihood);
        assert_eq!("ev".parse::<Criterion>().unwrap(), Criterion::ExpectedValue);
        assert!(matches!(
            "minmin".parse::<Criterion>(),
            Err(IeError::UnknownCriterion(ref s)) if s == "minmin"
        ));
    }
}
