//! Analysis settings shared by the CLI commands
//!
//! Loaded from JSON; every field is optional:
//!
//! ```json
//! { "interest": 0.1, "convention": "mid", "rate_format": "fraction",
//!   "irr": { "threshold": 1e-6 } }
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::econ::{Convention, Equivalence, IrrOptions, RateFormat};
use crate::error::Result;

/// Interest rate used when none is configured
pub const DEFAULT_INTEREST: f64 = 0.10;

fn default_interest() -> f64 {
    DEFAULT_INTEREST
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Discount rate for worth measures, in `rate_format`
    #[serde(default = "default_interest")]
    pub interest: f64,

    #[serde(default)]
    pub convention: Convention,

    #[serde(default)]
    pub rate_format: RateFormat,

    #[serde(default)]
    pub irr: IrrOptions,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            interest: DEFAULT_INTEREST,
            convention: Convention::default(),
            rate_format: RateFormat::default(),
            irr: IrrOptions::default(),
        }
    }
}

impl AnalysisConfig {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn equivalence(&self) -> Equivalence {
        Equivalence::new(self.convention, self.rate_format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = AnalysisConfig::from_reader("{}".as_bytes()).unwrap();
        assert_eq!(config, AnalysisConfig::default());
        assert_eq!(config.interest, 0.10);
    }

    #[test]
    fn test_partial_config() {
        let json = r#"{"convention": "mid", "rate_format": "percent", "interest": 8, "irr": {"threshold": 1e-8}}"#;
        let config = AnalysisConfig::from_reader(json.as_bytes()).unwrap();

        assert_eq!(config.convention, Convention::Mid);
        assert_eq!(config.rate_format, RateFormat::Percent);
        assert_eq!(config.interest, 8.0);
        assert_eq!(config.irr.threshold, 1e-8);
        assert_eq!(config.irr.max_iterations, IrrOptions::default().max_iterations);
        assert!(config.irr.guess.is_none());
    }

    #[test]
    fn test_unknown_convention_rejected() {
        let json = r#"{"convention": "beginning"}"#;
        assert!(AnalysisConfig::from_reader(json.as_bytes()).is_err());
    }
}
