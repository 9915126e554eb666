//! Command-line interface definitions and argument parsing

use crate::config::Thresholds;
use crate::data::LoadOptions;
use crate::error::MiningResult;
use clap::Parser;

/// Destination value that sends the report to stdout
pub const STDOUT_DESTINATION: &str = "-";

/// Frequent itemset and association rule mining CLI using Apriori
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input CSV file
    pub input: String,

    /// Minimum support, between 0 and 1
    #[arg(allow_negative_numbers = true)]
    pub min_support: f64,

    /// Minimum confidence, between 0 and 1
    #[arg(allow_negative_numbers = true)]
    pub min_confidence: f64,

    /// Output path for the report ("-" for stdout)
    #[arg(short, long, default_value = "example-run.txt")]
    pub output: String,

    /// Treat the first row as data and use raw cell values as items
    #[arg(long)]
    pub no_header: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Validate the threshold arguments
    pub fn thresholds(&self) -> MiningResult<Thresholds> {
        Thresholds::new(self.min_support, self.min_confidence)
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            labeled: !self.no_header,
        }
    }

    pub fn writes_to_stdout(&self) -> bool {
        self.output == STDOUT_DESTINATION
    }
}
