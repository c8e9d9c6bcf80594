use crate::charts::fields::{Category, Metric};
use crate::charts::spec::{ChartSpec, ChartType, Hints, Series};
use crate::domain::Listing;
use indexmap::IndexMap;

pub const UNKNOWN: &str = "Unknown";

/// Counts listings per key. Keys keep the order they were first seen in.
pub fn count_by<F>(listings: &[Listing], key: F) -> IndexMap<String, u64>
where
    F: Fn(&Listing) -> String,
{
    let mut counts = IndexMap::new();
    for l in listings {
        *counts.entry(key(l)).or_insert(0) += 1;
    }
    counts
}

/// Frequency of each category; empty values are counted under `fallback`.
pub fn frequency(listings: &[Listing], category: Category, fallback: &str) -> IndexMap<String, u64> {
    count_by(listings, |l| {
        let k = category.of(l);
        if k.is_empty() {
            fallback.to_string()
        } else {
            k
        }
    })
}

/// Mean of `value` per category. The raw category is the key, empty included.
pub fn mean_by(listings: &[Listing], category: Category, value: Metric) -> IndexMap<String, f64> {
    let mut acc: IndexMap<String, (f64, u64)> = IndexMap::new();
    for l in listings {
        let slot = acc.entry(category.of(l)).or_insert((0.0, 0));
        slot.0 += value.of(l);
        slot.1 += 1;
    }

    // every key was inserted with a listing, so n >= 1
    acc.into_iter()
        .map(|(k, (sum, n))| (k, sum / n as f64))
        .collect()
}

pub fn frequency_chart(
    listings: &[Listing],
    category: Category,
    fallback: &str,
    chart_type: ChartType,
    label: &str,
    hints: Hints,
) -> ChartSpec {
    let (labels, counts) = frequency(listings, category, fallback).into_iter().unzip();
    ChartSpec::labelled(chart_type, label, labels, Series::Counts(counts), hints)
}

pub fn mean_chart(
    listings: &[Listing],
    category: Category,
    value: Metric,
    chart_type: ChartType,
    label: &str,
    hints: Hints,
) -> ChartSpec {
    let (labels, means) = mean_by(listings, category, value).into_iter().unzip();
    ChartSpec::labelled(chart_type, label, labels, Series::Values(means), hints)
}
