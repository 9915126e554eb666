//! RuleForge: frequent itemset and association rule mining CLI
//!
//! This is the main entrypoint that orchestrates threshold validation, data
//! loading, itemset mining, rule derivation and report writing.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use ruleforge::{derive, load_transactions, mine, report, require_transactions, Args, Thresholds};
use std::process;
use std::time::Instant;
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();
    init_logging(args.verbose);

    let thresholds = match args.thresholds() {
        Ok(thresholds) => thresholds,
        Err(err) => {
            eprintln!("{err}");
            eprintln!("{}", Args::command().render_usage());
            process::exit(2);
        }
    };

    if args.verbose {
        println!("RuleForge - Association Rule Mining using Apriori");
        println!("=================================================\n");
    }

    run_pipeline(&args, &thresholds)
}

/// Install the tracing subscriber; `RUST_LOG` overrides the verbosity flag
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("ruleforge={default_level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Run the full mining pipeline
fn run_pipeline(args: &Args, thresholds: &Thresholds) -> Result<()> {
    let start_time = Instant::now();

    // Step 1: Load transactions
    if args.verbose {
        println!("Step 1: Loading transactions");
        println!("  Input file: {}", args.input);
    }

    let data_start = Instant::now();
    let data = load_transactions(&args.input, args.load_options())?;
    require_transactions(&data.transactions)?;
    let data_time = data_start.elapsed();

    if args.verbose {
        println!("✓ Data loaded: {} transactions", data.len());
        println!("  Distinct items: {}", data.distinct_items());
        println!("  Processing time: {:.2}s", data_time.as_secs_f64());
    }

    // Step 2: Mine frequent itemsets
    if args.verbose {
        println!("\nStep 2: Mining frequent itemsets");
        println!("  Minimum support: {}", thresholds.min_support());
    }
    if thresholds.min_support() == 0.0 {
        warn!("min_sup is 0; every co-occurring item combination will be enumerated");
    }

    let mine_start = Instant::now();
    let frequent = mine(&data.transactions, thresholds.min_support());
    let mine_time = mine_start.elapsed();

    if args.verbose {
        println!("✓ Frequent itemsets: {}", frequent.len());
        println!("  Largest itemset: {} items", frequent.max_size());
        println!("  Mining time: {:.2}s", mine_time.as_secs_f64());
    }

    // Step 3: Derive association rules
    if args.verbose {
        println!("\nStep 3: Deriving association rules");
        println!("  Minimum confidence: {}", thresholds.min_confidence());
    }

    let rules_start = Instant::now();
    let rules = derive(&frequent, thresholds.min_confidence())?;
    let rules_time = rules_start.elapsed();

    if args.verbose {
        println!("✓ Rules: {}", rules.len());
        println!("  Derivation time: {:.2}s", rules_time.as_secs_f64());
        println!("\nStep 4: Writing report");
        println!("  Output: {}", args.output);
    }

    // Step 4: Write report
    report::save_report(&args.output, &frequent, &rules, thresholds)?;

    if !args.writes_to_stdout() {
        let total_time = start_time.elapsed();
        println!("\n=== Mining Complete ===");
        println!("Frequent itemsets: {}", frequent.len());
        println!("Association rules: {}", rules.len());
        println!("Total processing time: {:.2}s", total_time.as_secs_f64());
        println!("Report saved to: {}", args.output);
    }

    Ok(())
}
