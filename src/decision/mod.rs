//! Decision making under uncertainty

mod criteria;
pub mod payoff;

pub use criteria::{Criterion, DecisionMaker, DecisionReport, Outcome};
pub use payoff::{load_payoff, load_payoff_from_reader, PayoffMatrix};
