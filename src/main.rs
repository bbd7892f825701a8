//! IE Tools CLI
//!
//! Command-line front end for the engineering economy and decision routines

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use ietools::decision::{load_payoff, Criterion, DecisionMaker};
use ietools::econ::{
    compare_alternatives, effective_rate, load_cash_flows, normalize_cash_flows, BcrRates,
    BenefitCostRatio, RateFormat,
};
use ietools::AnalysisConfig;
use log::info;
use serde::Serialize;

#[derive(Parser)]
#[command(name = "ietools")]
#[command(author, version, about = "Industrial engineering formulas", long_about = None)]
struct Cli {
    /// JSON analysis config (interest, convention, rate format, IRR settings)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Effective rate of a nominal rate compounded m times
    Effective {
        #[arg(short, long, allow_hyphen_values = true)]
        rate: f64,

        /// Compounding periods
        #[arg(short = 'm', long, allow_hyphen_values = true)]
        periods: f64,

        /// Rate is a whole-number percentage (10 for 10%)
        #[arg(long)]
        percent: bool,
    },

    /// Broadcast a JSON cash-flow set onto the LCM of its horizons
    Normalize {
        file: PathBuf,
    },

    /// Normalize a cash-flow set and compute NPV, EUAW, NFW and IRR per alternative
    Compare {
        file: PathBuf,

        /// Overrides the configured interest rate
        #[arg(short, long)]
        interest: Option<f64>,
    },

    /// Benefit-cost ratio of two streams
    Bcr {
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
        benefit: Vec<f64>,

        #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
        cost: Vec<f64>,

        /// Rate for both streams
        #[arg(long)]
        rate: Option<f64>,

        #[arg(long)]
        benefit_rate: Option<f64>,

        #[arg(long)]
        cost_rate: Option<f64>,
    },

    /// Apply decision criteria to a payoff matrix CSV
    Decide {
        file: PathBuf,

        /// Criteria to apply (maxmax, maxmin, regret, maxlik, ev)
        #[arg(long, value_delimiter = ',')]
        criteria: Vec<Criterion>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

fn load_config(path: Option<&Path>) -> Result<AnalysisConfig> {
    match path {
        Some(path) => AnalysisConfig::from_path(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(AnalysisConfig::default()),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    let format = cli.format;

    match cli.command {
        Commands::Effective { rate, periods, percent } => {
            let rate_format = if percent { RateFormat::Percent } else { config.rate_format };
            let effective = effective_rate(rate, periods, rate_format)?;
            match format {
                OutputFormat::Table => println!("Effective rate: {:.6}", effective),
                OutputFormat::Json => print_json(&effective)?,
            }
        }

        Commands::Normalize { file } => {
            let cash_flows = load_cash_flows(&file)
                .with_context(|| format!("Failed to load cash flows from {}", file.display()))?;
            let normalized = normalize_cash_flows(cash_flows)?;
            match format {
                OutputFormat::Table => {
                    for (name, series) in &normalized {
                        let flows: Vec<String> = series.iter().map(|cf| format!("{:.2}", cf)).collect();
                        println!("{:<12} {}", name, flows.join(", "));
                    }
                }
                OutputFormat::Json => print_json(&normalized)?,
            }
        }

        Commands::Compare { file, interest } => {
            let interest = interest.unwrap_or(config.interest);
            let cash_flows = load_cash_flows(&file)
                .with_context(|| format!("Failed to load cash flows from {}", file.display()))?;
            let normalized = normalize_cash_flows(cash_flows)?;
            info!("Comparing {} alternatives at {}", normalized.len(), interest);

            let rows = compare_alternatives(normalized, config.equivalence(), interest, &config.irr);

            match format {
                OutputFormat::Table => {
                    println!("{:<12} {:>7} {:>14} {:>14} {:>14} {:>10}",
                        "Alternative", "Periods", "NPV", "EUAW", "NFW", "IRR");
                    println!("{}", "-".repeat(76));
                    for row in &rows {
                        let irr = row.irr.map_or_else(|| "n/a".to_string(), |r| format!("{:.4}", r));
                        println!("{:<12} {:>7} {:>14.2} {:>14.2} {:>14.2} {:>10}",
                            row.name, row.periods, row.npv, row.euaw, row.nfw, irr);
                    }
                }
                OutputFormat::Json => print_json(&rows)?,
            }
        }

        Commands::Bcr { benefit, cost, rate, benefit_rate, cost_rate } => {
            // Fall back to the configured interest when no rate is given
            let rates = if rate.is_none() && benefit_rate.is_none() && cost_rate.is_none() {
                BcrRates::Single(config.interest)
            } else {
                BcrRates::from_options(rate, benefit_rate, cost_rate)?
            };
            let ratio = BenefitCostRatio::new(benefit, cost, rates, config.equivalence()).bcr();
            match format {
                OutputFormat::Table => println!("Benefit-cost ratio: {:.4}", ratio),
                OutputFormat::Json => print_json(&ratio)?,
            }
        }

        Commands::Decide { file, criteria } => {
            let matrix = load_payoff(&file)
                .with_context(|| format!("Failed to load payoff matrix from {}", file.display()))?;
            let maker = if criteria.is_empty() {
                DecisionMaker::with_all_criteria(matrix)
            } else {
                DecisionMaker::new(matrix, criteria)
            };
            let report = maker.fit();

            match format {
                OutputFormat::Table => {
                    println!("{:<10} {:<16} {:>12}", "Criterion", "Decision", "Payoff");
                    println!("{}", "-".repeat(40));
                    for (criterion, outcome) in &report.outcomes {
                        println!("{:<10} {:<16} {:>12.2}", criterion.name(), outcome.alternative, outcome.payoff);
                    }
                    if let Some(regret) = &report.regret {
                        println!("\nRegret matrix:");
                        for (name, row) in maker.matrix().alternatives().iter().zip(regret) {
                            let cells: Vec<String> = row.iter().map(|r| format!("{:>10.2}", r)).collect();
                            println!("{:<16} {}", name, cells.join(""));
                        }
                    }
                }
                OutputFormat::Json => print_json(&report)?,
            }
        }
    }

    Ok(())
}
