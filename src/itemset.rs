//! Items, transactions and canonical itemsets

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

/// An opaque item token, e.g. `"AGE_GROUP=25-44"`
pub type Item = String;

/// One observed record: only presence or absence of an item matters
pub type Transaction = BTreeSet<Item>;

/// Build a transaction from any collection of item tokens
pub fn transaction<I, S>(items: I) -> Transaction
where
    I: IntoIterator<Item = S>,
    S: Into<Item>,
{
    items.into_iter().map(Into::into).collect()
}

/// A set of distinct items in canonical (sorted, deduplicated) form.
///
/// Two itemsets built from the same items in any order compare equal and
/// hash identically, so an `Itemset` can key a map directly. The derived
/// ordering is lexicographic over the sorted items.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Itemset(Vec<Item>);

impl Itemset {
    /// Build an itemset from items in any order, dropping duplicates
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Item>,
    {
        let mut items: Vec<Item> = items.into_iter().map(Into::into).collect();
        items.sort_unstable();
        items.dedup();
        Self(items)
    }

    /// Itemset holding a single item
    pub fn singleton(item: impl Into<Item>) -> Self {
        Self(vec![item.into()])
    }

    /// Wrap items already known to be sorted and distinct
    fn from_sorted(items: Vec<Item>) -> Self {
        debug_assert!(items.windows(2).all(|w| w[0] < w[1]));
        Self(items)
    }

    /// Items in canonical order
    pub fn items(&self) -> &[Item] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.0.binary_search_by(|probe| probe.as_str().cmp(item)).is_ok()
    }

    /// True when every item of `self` is present in the transaction
    pub fn is_contained_in(&self, transaction: &Transaction) -> bool {
        self.0.len() <= transaction.len() && self.0.iter().all(|item| transaction.contains(item))
    }

    pub fn is_subset_of(&self, other: &Itemset) -> bool {
        self.0.iter().all(|item| other.contains(item))
    }

    pub fn is_disjoint(&self, other: &Itemset) -> bool {
        !self.0.iter().any(|item| other.contains(item))
    }

    /// Set union, computed as a merge of the two sorted sequences
    pub fn union(&self, other: &Itemset) -> Itemset {
        let (left, right) = (&self.0, &other.0);
        let mut merged = Vec::with_capacity(left.len() + right.len());
        let (mut i, mut j) = (0, 0);

        while i < left.len() && j < right.len() {
            match left[i].cmp(&right[j]) {
                Ordering::Less => {
                    merged.push(left[i].clone());
                    i += 1;
                }
                Ordering::Greater => {
                    merged.push(right[j].clone());
                    j += 1;
                }
                Ordering::Equal => {
                    merged.push(left[i].clone());
                    i += 1;
                    j += 1;
                }
            }
        }
        merged.extend_from_slice(&left[i..]);
        merged.extend_from_slice(&right[j..]);

        Self::from_sorted(merged)
    }

    /// Items of `self` that are not in `other`
    pub fn difference(&self, other: &Itemset) -> Itemset {
        Self::from_sorted(
            self.0
                .iter()
                .filter(|item| !other.contains(item))
                .cloned()
                .collect(),
        )
    }

    /// All subsets with exactly one item removed
    pub fn immediate_subsets(&self) -> impl Iterator<Item = Itemset> + '_ {
        (0..self.0.len()).map(move |skip| {
            Self::from_sorted(
                self.0
                    .iter()
                    .enumerate()
                    .filter(|&(i, _)| i != skip)
                    .map(|(_, item)| item.clone())
                    .collect(),
            )
        })
    }

    /// All subsets of exactly `size` items, in lexicographic order
    pub fn subsets(&self, size: usize) -> Vec<Itemset> {
        let n = self.0.len();
        if size == 0 || size > n {
            return Vec::new();
        }

        let mut subsets = Vec::new();
        let mut indices: Vec<usize> = (0..size).collect();
        loop {
            subsets.push(Self::from_sorted(
                indices.iter().map(|&i| self.0[i].clone()).collect(),
            ));

            // Advance the rightmost index that still has room to move
            let Some(pos) = (0..size).rev().find(|&i| indices[i] < n - size + i) else {
                break;
            };
            indices[pos] += 1;
            for j in (pos + 1)..size {
                indices[j] = indices[j - 1] + 1;
            }
        }

        subsets
    }
}

impl fmt::Display for Itemset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}

impl<S: Into<Item>> FromIterator<S> for Itemset {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
