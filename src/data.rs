//! Transaction loading from CSV files

use crate::error::MiningError;
use crate::itemset::{Item, Transaction};
use anyhow::Context;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// How CSV rows become transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// First row holds column names; items are labeled `column=value`
    pub labeled: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { labeled: true }
    }
}

/// Transactions read from one CSV source
#[derive(Debug, Clone)]
pub struct TransactionSet {
    /// One transaction per non-empty row
    pub transactions: Vec<Transaction>,
    /// Column names, when the source had a header row
    pub headers: Option<Vec<String>>,
}

impl TransactionSet {
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Number of distinct items across all transactions
    pub fn distinct_items(&self) -> usize {
        self.transactions
            .iter()
            .flatten()
            .collect::<BTreeSet<_>>()
            .len()
    }
}

/// Load transactions from a CSV file
///
/// # Arguments
/// * `file_path` - Path to the CSV file
/// * `options` - Whether the first row is a header
///
/// # Returns
/// * `TransactionSet` with one transaction per row that has a non-empty cell
pub fn load_transactions<P: AsRef<Path>>(
    file_path: P,
    options: LoadOptions,
) -> crate::Result<TransactionSet> {
    let path = file_path.as_ref();
    let file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    parse_transactions(file, options)
        .with_context(|| format!("failed to load transactions from {}", path.display()))
}

/// Parse CSV content into transactions
///
/// Cells are trimmed and blank cells skipped. Rows left without any item are
/// dropped; if no row survives the result is [`MiningError::EmptyDataset`].
pub fn parse_transactions<R: Read>(reader: R, options: LoadOptions) -> crate::Result<TransactionSet> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(options.labeled)
        .flexible(true)
        .from_reader(reader);

    let headers = if options.labeled {
        let record = reader.headers().context("failed to read header row")?;
        Some(record.iter().map(|h| h.trim().to_string()).collect::<Vec<_>>())
    } else {
        None
    };

    let mut transactions = Vec::new();
    let mut skipped = 0usize;
    for (row, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("malformed CSV record at data row {}", row + 1))?;
        let transaction = build_transaction(&record, headers.as_deref());

        if transaction.is_empty() {
            skipped += 1;
        } else {
            transactions.push(transaction);
        }
    }

    debug!(rows = transactions.len(), skipped, "parsed transactions");

    if transactions.is_empty() {
        return Err(MiningError::EmptyDataset.into());
    }

    Ok(TransactionSet {
        transactions,
        headers,
    })
}

fn build_transaction(record: &csv::StringRecord, headers: Option<&[String]>) -> Transaction {
    record
        .iter()
        .enumerate()
        .filter_map(|(index, cell)| {
            let value = cell.trim();
            if value.is_empty() {
                return None;
            }
            Some(match headers {
                Some(headers) => label_item(headers, index, value),
                None => value.to_string(),
            })
        })
        .collect()
}

/// `column=value`, falling back to `col_<index>` for unnamed columns
fn label_item(headers: &[String], index: usize, value: &str) -> Item {
    match headers.get(index).filter(|name| !name.is_empty()) {
        Some(name) => format!("{name}={value}"),
        None => format!("col_{index}={value}"),
    }
}
