//! JSON loading of cash-flow sets
//!
//! Expected layout: `{"cf1": [-1000, 300, 400, 500], "cf2": [...]}`

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use super::normalize::CashFlowSet;
use crate::error::Result;

/// Load a cash-flow set from a JSON file
pub fn load_cash_flows<P: AsRef<Path>>(path: P) -> Result<CashFlowSet> {
    let file = File::open(path)?;
    load_cash_flows_from_reader(BufReader::new(file))
}

/// Load a cash-flow set from any reader
pub fn load_cash_flows_from_reader<R: Read>(reader: R) -> Result<CashFlowSet> {
    Ok(serde_json::from_reader(reader)?)
}
