//! Payoff matrices for decisions under uncertainty
//!
//! CSV layout, with probabilities in the last row:
//!
//! ```text
//! Order,Demand 6,Demand 7,Demand 8
//! $5,125,175,225
//! $6,200,300,400
//! Prob,0.35,0.25,0.4
//! ```

use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::{Deserialize, Serialize};

use crate::error::{IeError, Result};

/// Payoffs of each alternative (rows) under each state (columns)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPayoffMatrix")]
pub struct PayoffMatrix {
    alternatives: Vec<String>,
    states: Vec<String>,
    payoffs: Vec<Vec<f64>>,
    probabilities: Vec<f64>,
}

/// Unchecked serde form; shape is validated on conversion
#[derive(Deserialize)]
struct RawPayoffMatrix {
    alternatives: Vec<String>,
    states: Vec<String>,
    payoffs: Vec<Vec<f64>>,
    probabilities: Vec<f64>,
}

impl TryFrom<RawPayoffMatrix> for PayoffMatrix {
    type Error = IeError;

    fn try_from(raw: RawPayoffMatrix) -> Result<Self> {
        Self::from_labeled(raw.alternatives, raw.states, raw.payoffs, raw.probabilities)
    }
}

impl PayoffMatrix {
    /// Build from named alternatives and states
    pub fn from_labeled(
        alternatives: Vec<String>,
        states: Vec<String>,
        payoffs: Vec<Vec<f64>>,
        probabilities: Vec<f64>,
    ) -> Result<Self> {
        if alternatives.is_empty() || states.is_empty() {
            return Err(IeError::InvalidPayoff(
                "at least one alternative and one state are required".to_string(),
            ));
        }
        if payoffs.len() != alternatives.len() {
            return Err(IeError::InvalidPayoff(format!(
                "{} payoff rows for {} alternatives",
                payoffs.len(),
                alternatives.len()
            )));
        }
        if probabilities.len() != states.len() {
            return Err(IeError::InvalidPayoff(format!(
                "{} probabilities for {} states",
                probabilities.len(),
                states.len()
            )));
        }
        if let Some((row, values)) = payoffs
            .iter()
            .enumerate()
            .find(|(_, values)| values.len() != states.len())
        {
            return Err(IeError::InvalidPayoff(format!(
                "row {} has {} payoffs, expected {}",
                row,
                values.len(),
                states.len()
            )));
        }

        Ok(Self { alternatives, states, payoffs, probabilities })
    }

    /// Build from bare numbers; alternatives and states are labelled by index
    pub fn from_rows(payoffs: Vec<Vec<f64>>, probabilities: Vec<f64>) -> Result<Self> {
        let alternatives = (0..payoffs.len()).map(|i| i.to_string()).collect();
        let states = (0..probabilities.len()).map(|j| j.to_string()).collect();
        Self::from_labeled(alternatives, states, payoffs, probabilities)
    }

    pub fn alternatives(&self) -> &[String] {
        &self.alternatives
    }

    pub fn states(&self) -> &[String] {
        &self.states
    }

    pub fn payoffs(&self) -> &[Vec<f64>] {
        &self.payoffs
    }

    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }
}

fn parse_values(record: &StringRecord, line: usize) -> Result<Vec<f64>> {
    record
        .iter()
        .skip(1)
        .map(|field| {
            field.parse::<f64>().map_err(|_| {
                IeError::InvalidPayoff(format!("non-numeric value '{}' on line {}", field, line))
            })
        })
        .collect()
}

/// Load a payoff matrix from any reader
pub fn load_payoff_from_reader<R: Read>(reader: R) -> Result<PayoffMatrix> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    let states: Vec<String> = csv_reader.headers()?.iter().skip(1).map(String::from).collect();

    let mut labels = Vec::new();
    let mut rows = Vec::new();
    for (idx, result) in csv_reader.records().enumerate() {
        let record = result?;
        labels.push(record.get(0).unwrap_or_default().to_string());
        rows.push(parse_values(&record, idx + 2)?);
    }

    let probabilities = match rows.pop() {
        Some(probabilities) => probabilities,
        None => return Err(IeError::InvalidPayoff("no probability row".to_string())),
    };
    labels.pop();

    PayoffMatrix::from_labeled(labels, states, rows, probabilities)
}

/// Load a payoff matrix from a CSV file
pub fn load_payoff<P: AsRef<Path>>(path: P) -> Result<PayoffMatrix> {
    let file = std::fs::File::open(path)?;
    load_payoff_from_reader(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYOFF_CSV: &str = "\
Order,Demand 6,Demand 7,Demand 8
$5,125,175,225
$6,200,300,400
Prob,0.35,0.25,0.4
";

    #[test]
    fn test_load_from_reader() {
        let matrix = load_payoff_from_reader(PAYOFF_CSV.as_bytes()).unwrap();

        assert_eq!(matrix.alternatives(), &["$5".to_string(), "$6".to_string()]);
        assert_eq!(matrix.states().len(), 3);
        assert_eq!(matrix.states()[2], "Demand 8");
        assert_eq!(matrix.payoffs()[1], vec![200.0, 300.0, 400.0]);
        assert_eq!(matrix.probabilities(), &[0.35, 0.25, 0.4]);
    }

    #[test]
    fn test_load_fixture_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/payoff.csv");
        let matrix = load_payoff(path).unwrap();
        assert_eq!(matrix.alternatives().len(), 5);
        assert_eq!(matrix.states().len(), 3);
    }

    #[test]
    fn test_non_numeric_payoff() {
        let csv = "Order,A,B\nx,1,oops\nProb,0.5,0.5\n";
        let err = load_payoff_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, IeError::InvalidPayoff(_)));
    }

    #[test]
    fn test_probability_row_only() {
        let csv = "Order,A,B\nProb,0.5,0.5\n";
        assert!(load_payoff_from_reader(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_from_rows_labels() {
        let matrix = PayoffMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]], vec![0.5, 0.5])
            .unwrap();
        assert_eq!(matrix.alternatives(), &["0".to_string(), "1".to_string()]);
        assert_eq!(matrix.states(), &["0".to_string(), "1".to_string()]);
    }

    #[test]
    fn test_json_round_trip_keeps_shape() {
        let matrix = load_payoff_from_reader(PAYOFF_CSV.as_bytes()).unwrap();
        let json = serde_json::to_string(&matrix).unwrap();
        let parsed: PayoffMatrix = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, matrix);
    }

    #[test]
    fn test_json_without_alternatives_rejected() {
        let json = r#"{"alternatives":[],"states":["a"],"payoffs":[[1.0]],"probabilities":[1.0]}"#;
        assert!(serde_json::from_str::<PayoffMatrix>(json).is_err());
    }

    #[test]
    fn test_json_short_row_rejected() {
        let json = r#"{"alternatives":["x","y"],"states":["a","b"],"payoffs":[[1.0,2.0],[3.0]],"probabilities":[0.5,0.5]}"#;
        assert!(serde_json::from_str::<PayoffMatrix>(json).is_err());
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = PayoffMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]], vec![0.5, 0.5])
            .unwrap_err();
        assert!(matches!(err, IeError::InvalidPayoff(_)));
    }
}
