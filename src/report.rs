//! Plain-text rendering of mining results

use crate::cli::STDOUT_DESTINATION;
use crate::config::Thresholds;
use crate::itemset::Itemset;
use crate::miner::FrequentItemsets;
use crate::rules::Rule;
use anyhow::Context;
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Frequent itemsets by descending support, ties broken by itemset
pub fn sorted_itemsets(frequent: &FrequentItemsets) -> Vec<(&Itemset, f64)> {
    let mut itemsets: Vec<_> = frequent.iter().collect();
    itemsets.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    itemsets
}

/// Rules by descending confidence, ties broken by antecedent then consequent
pub fn sorted_rules(rules: &[Rule]) -> Vec<&Rule> {
    let mut sorted: Vec<&Rule> = rules.iter().collect();
    sorted.sort_by(|a, b| {
        b.confidence
            .total_cmp(&a.confidence)
            .then_with(|| a.antecedent.cmp(&b.antecedent))
            .then_with(|| a.consequent.cmp(&b.consequent))
    });
    sorted
}

/// Write the frequent itemsets and rules report
pub fn write_report<W: Write>(
    out: &mut W,
    frequent: &FrequentItemsets,
    rules: &[Rule],
    thresholds: &Thresholds,
) -> io::Result<()> {
    writeln!(
        out,
        "==Frequent itemsets (min_sup={})",
        percent(thresholds.min_support())
    )?;
    for (itemset, support) in sorted_itemsets(frequent) {
        writeln!(out, "{itemset}, {}", percent(support))?;
    }

    writeln!(
        out,
        "==High-confidence association rules (min_conf={})",
        percent(thresholds.min_confidence())
    )?;
    for rule in sorted_rules(rules) {
        writeln!(
            out,
            "{} => {} (Conf: {}, Supp: {})",
            rule.antecedent,
            rule.consequent,
            percent(rule.confidence),
            percent(rule.support)
        )?;
    }

    Ok(())
}

/// Write the report to `output_path`, or to stdout when it is `-`
pub fn save_report(
    output_path: &str,
    frequent: &FrequentItemsets,
    rules: &[Rule],
    thresholds: &Thresholds,
) -> crate::Result<()> {
    if output_path == STDOUT_DESTINATION {
        let mut out = io::stdout().lock();
        write_report(&mut out, frequent, rules, thresholds)?;
        out.flush()?;
        return Ok(());
    }

    let file = File::create(output_path)
        .with_context(|| format!("failed to create report file {output_path}"))?;
    let mut out = BufWriter::new(file);
    write_report(&mut out, frequent, rules, thresholds)
        .and_then(|()| out.flush())
        .with_context(|| format!("failed to write report to {output_path}"))?;

    Ok(())
}

fn percent(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}
