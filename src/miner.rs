//! Level-wise Apriori search for frequent itemsets
//!
//! Each level k is built from the frequent level k-1 in four steps:
//! [`join`] pairs of frequent itemsets into size-k candidates, [`prune`]
//! candidates with an infrequent (k-1)-subset, [`count`] the survivors over
//! all transactions and keep those meeting the minimum support. The search
//! stops at the first empty level.

use crate::error::{MiningError, MiningResult};
use crate::itemset::{Itemset, Transaction};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Occurrence counts for the itemsets of one level
pub type LevelCounts = BTreeMap<Itemset, usize>;

/// Every frequent itemset found, mapped to its support
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequentItemsets {
    supports: BTreeMap<Itemset, f64>,
}

impl FrequentItemsets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `itemset` with the given support, replacing any previous value
    pub fn insert(&mut self, itemset: Itemset, support: f64) {
        self.supports.insert(itemset, support);
    }

    /// Support of `itemset`, if it is frequent
    pub fn support(&self, itemset: &Itemset) -> Option<f64> {
        self.supports.get(itemset).copied()
    }

    pub fn contains(&self, itemset: &Itemset) -> bool {
        self.supports.contains_key(itemset)
    }

    pub fn len(&self) -> usize {
        self.supports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.supports.is_empty()
    }

    /// Itemsets with their supports, in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (&Itemset, f64)> + '_ {
        self.supports.iter().map(|(itemset, &support)| (itemset, support))
    }

    /// Frequent itemsets of exactly `size` items
    pub fn level(&self, size: usize) -> impl Iterator<Item = &Itemset> + '_ {
        self.supports.keys().filter(move |itemset| itemset.len() == size)
    }

    /// Size of the largest frequent itemset, 0 when empty
    pub fn max_size(&self) -> usize {
        self.supports.keys().map(Itemset::len).max().unwrap_or(0)
    }
}

impl FromIterator<(Itemset, f64)> for FrequentItemsets {
    fn from_iter<I: IntoIterator<Item = (Itemset, f64)>>(iter: I) -> Self {
        Self {
            supports: iter.into_iter().collect(),
        }
    }
}

/// Reject an empty transaction set before it reaches [`mine`]
pub fn require_transactions(transactions: &[Transaction]) -> MiningResult<()> {
    if transactions.is_empty() {
        return Err(MiningError::EmptyDataset);
    }
    Ok(())
}

/// Find every itemset whose support is at least `min_support`.
///
/// # Arguments
/// * `transactions` - Non-empty transaction set (see [`require_transactions`])
/// * `min_support` - Minimum support in `[0, 1]`
///
/// # Returns
/// * All frequent itemsets of every size, with their supports
///
/// Only itemsets that occur in at least one transaction are ever reported,
/// so a `min_support` of 0 yields every co-occurring combination rather than
/// the full power set of items.
pub fn mine(transactions: &[Transaction], min_support: f64) -> FrequentItemsets {
    let n_transactions = transactions.len();
    let mut frequent = FrequentItemsets::new();

    let mut level = frequent_singletons(transactions, min_support);
    let mut size = 1;
    debug!(size, frequent = level.len(), "mined singleton level");

    while !level.is_empty() {
        for (itemset, &count) in &level {
            frequent.insert(itemset.clone(), count as f64 / n_transactions as f64);
        }

        let previous: BTreeSet<Itemset> = level.into_keys().collect();
        size += 1;

        let joined = join(&previous, size);
        let joined_count = joined.len();
        let candidates = prune(joined, &previous);
        level = filter_by_support(count(&candidates, transactions), n_transactions, min_support);

        debug!(
            size,
            joined = joined_count,
            candidates = candidates.len(),
            frequent = level.len(),
            "mined level"
        );
    }

    frequent
}

/// Frequent size-1 itemsets with their occurrence counts
pub fn frequent_singletons(transactions: &[Transaction], min_support: f64) -> LevelCounts {
    let mut item_counts: BTreeMap<&str, usize> = BTreeMap::new();
    for transaction in transactions {
        for item in transaction {
            *item_counts.entry(item.as_str()).or_insert(0) += 1;
        }
    }

    let counts = item_counts
        .into_iter()
        .map(|(item, count)| (Itemset::singleton(item), count))
        .collect();
    filter_by_support(counts, transactions.len(), min_support)
}

/// Union every pair of itemsets in `previous`, keeping unions of exactly `size` items
pub fn join(previous: &BTreeSet<Itemset>, size: usize) -> BTreeSet<Itemset> {
    let itemsets: Vec<&Itemset> = previous.iter().collect();
    let mut candidates = BTreeSet::new();

    for (i, left) in itemsets.iter().enumerate() {
        for right in &itemsets[i + 1..] {
            let union = left.union(right);
            if union.len() == size {
                candidates.insert(union);
            }
        }
    }

    candidates
}

/// Drop candidates that have a subset one item smaller missing from `previous`
pub fn prune(candidates: BTreeSet<Itemset>, previous: &BTreeSet<Itemset>) -> BTreeSet<Itemset> {
    candidates
        .into_iter()
        .filter(|candidate| {
            candidate
                .immediate_subsets()
                .all(|subset| previous.contains(&subset))
        })
        .collect()
}

/// Count the transactions containing each candidate.
///
/// Candidates that occur in no transaction are left out of the result.
pub fn count(candidates: &BTreeSet<Itemset>, transactions: &[Transaction]) -> LevelCounts {
    let mut counts = LevelCounts::new();
    for transaction in transactions {
        for candidate in candidates {
            if candidate.is_contained_in(transaction) {
                *counts.entry(candidate.clone()).or_insert(0) += 1;
            }
        }
    }
    counts
}

/// Fraction of `transactions` containing `itemset`, 0 for no transactions
pub fn support_of(itemset: &Itemset, transactions: &[Transaction]) -> f64 {
    if transactions.is_empty() {
        return 0.0;
    }

    let hits = transactions
        .iter()
        .filter(|transaction| itemset.is_contained_in(transaction))
        .count();
    hits as f64 / transactions.len() as f64
}

fn filter_by_support(counts: LevelCounts, n_transactions: usize, min_support: f64) -> LevelCounts {
    counts
        .into_iter()
        .filter(|&(_, count)| count as f64 / n_transactions as f64 >= min_support)
        .collect()
}
