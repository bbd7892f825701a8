//! Engineering economy: interest rates, equivalence factors, alternative
//! comparison and LCM cash-flow normalization

mod rates;
mod equivalence;
mod alternative;
mod bcr;
mod normalize;
mod comparison;
pub mod loader;

pub use rates::{effective_rate, RateFormat};
pub use equivalence::{Convention, Equivalence};
pub use alternative::{Alternative, IrrOptions};
pub use bcr::{BcrRates, BenefitCostRatio};
pub use normalize::{horizons, lcm_of, normalize_cash_flows, CashFlowSet};
pub use comparison::{compare_alternatives, Comparison};
pub use loader::{load_cash_flows, load_cash_flows_from_reader};
