//! Association rule derivation from frequent itemsets

use crate::error::{MiningError, MiningResult};
use crate::itemset::Itemset;
use crate::miner::FrequentItemsets;

/// Association rule: antecedent => consequent
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    /// Items on the left side
    pub antecedent: Itemset,
    /// Items on the right side, disjoint from the antecedent
    pub consequent: Itemset,
    /// Support of antecedent ∪ consequent
    pub support: f64,
    /// support / support(antecedent)
    pub confidence: f64,
}

impl Rule {
    /// The frequent itemset this rule was split from
    pub fn itemset(&self) -> Itemset {
        self.antecedent.union(&self.consequent)
    }
}

/// Derive every rule whose confidence is at least `min_confidence`.
///
/// Each frequent itemset of two or more items is split into every
/// non-empty antecedent and the remaining consequent. The antecedent's
/// support must already be present in `frequent`; a missing entry means the
/// mapping is not downward closed and is reported as
/// [`MiningError::InvariantViolation`].
///
/// The returned rules are in no particular order.
pub fn derive(frequent: &FrequentItemsets, min_confidence: f64) -> MiningResult<Vec<Rule>> {
    let mut rules = Vec::new();

    for (itemset, support) in frequent.iter() {
        if itemset.len() < 2 {
            continue;
        }

        for antecedent_size in 1..itemset.len() {
            for antecedent in itemset.subsets(antecedent_size) {
                let antecedent_support = frequent.support(&antecedent).ok_or_else(|| {
                    MiningError::InvariantViolation(format!(
                        "no support recorded for {antecedent}, a subset of frequent itemset {itemset}"
                    ))
                })?;

                let confidence = support / antecedent_support;
                if confidence >= min_confidence {
                    let consequent = itemset.difference(&antecedent);
                    rules.push(Rule {
                        antecedent,
                        consequent,
                        support,
                        confidence,
                    });
                }
            }
        }
    }

    Ok(rules)
}
