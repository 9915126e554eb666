//! RuleForge: frequent itemset mining and association rule discovery
//!
//! This library implements the level-wise Apriori search over transaction
//! data, derives high-confidence association rules from the frequent
//! itemsets it finds, and ships the CSV loading and report writing used by
//! the `ruleforge` binary.

pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod itemset;
pub mod miner;
pub mod report;
pub mod rules;

// Re-export public items for easier access
pub use cli::Args;
pub use config::Thresholds;
pub use data::{load_transactions, parse_transactions, LoadOptions, TransactionSet};
pub use error::MiningError;
pub use itemset::{transaction, Item, Itemset, Transaction};
pub use miner::{mine, require_transactions, FrequentItemsets};
pub use report::{save_report, write_report};
pub use rules::{derive, Rule};

/// Common result type used throughout the application
pub type Result<T> = anyhow::Result<T>;
