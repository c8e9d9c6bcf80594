use crate::charts::categorical::count_by;
use crate::charts::fields::Metric;
use crate::charts::spec::{ChartSpec, ChartType, Hints, Series};
use crate::domain::listing::format_number;
use crate::domain::Listing;

pub const DEFAULT_BINS: usize = 5;

// Score buckets are 0.1 wide; multiplying by 10 keeps 0.3 in [0.3, 0.4).
const SCORE_BUCKETS_PER_UNIT: f64 = 10.0;

/// One equal-width interval. `[low, high)`, except the last bucket which also
/// holds the maximum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bucket {
    pub low: f64,
    pub high: f64,
    pub count: u64,
}

/// How bucket edges are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Dollars,
    Sqft,
}

impl Unit {
    pub fn label(self, low: f64, high: f64) -> String {
        let (low, high) = (format_number(round_half_up(low)), format_number(round_half_up(high)));
        match self {
            Unit::Dollars => format!("${low}–{high}"),
            Unit::Sqft => format!("{low}–{high} sqft"),
        }
    }
}

/// Index of the bucket `value` falls into, clamped to `[0, bins - 1]`.
/// A zero width (all values equal) maps everything to bucket 0.
pub fn bucket_index(value: f64, min: f64, width: f64, bins: usize) -> usize {
    let raw = ((value - min) / width).floor();
    if !raw.is_finite() || raw < 0.0 {
        return 0;
    }
    (raw as usize).min(bins - 1)
}

/// Splits the observed range into `bins` equal-width buckets and counts
/// membership. Returns `None` when there are no values.
pub fn equal_width_buckets(values: &[f64], bins: usize) -> Option<Vec<Bucket>> {
    let bins = bins.max(1);
    let min = values.iter().copied().reduce(f64::min)?;
    let max = values.iter().copied().reduce(f64::max)?;
    let width = (max - min) / bins as f64;

    let mut buckets: Vec<Bucket> = (0..bins)
        .map(|i| Bucket {
            low: min + i as f64 * width,
            high: min + (i + 1) as f64 * width,
            count: 0,
        })
        .collect();

    for &v in values {
        buckets[bucket_index(v, min, width, bins)].count += 1;
    }

    Some(buckets)
}

pub fn histogram(
    listings: &[Listing],
    metric: Metric,
    bins: usize,
    unit: Unit,
    label: &str,
    hints: Hints,
) -> Option<ChartSpec> {
    let values: Vec<f64> = listings.iter().map(|l| metric.of(l)).collect();
    let buckets = equal_width_buckets(&values, bins)?;

    let labels = buckets.iter().map(|b| unit.label(b.low, b.high)).collect();
    let counts = buckets.iter().map(|b| b.count).collect();

    Some(ChartSpec::labelled(
        ChartType::Bar,
        label,
        labels,
        Series::Counts(counts),
        hints,
    ))
}

/// `0.42` -> `"0.4-0.5"`. No range check: a score of 1.3 lands in `"1.3-1.4"`.
pub fn score_bucket_label(score: f64) -> String {
    // + 0.0 folds -0 so it prints as "0.0"
    let low = (score * SCORE_BUCKETS_PER_UNIT).floor() / SCORE_BUCKETS_PER_UNIT + 0.0;
    format!("{:.1}-{:.1}", low, low + 1.0 / SCORE_BUCKETS_PER_UNIT)
}

/// Fixed-width score distribution, independent of the observed min and max.
/// Labels keep first-seen order, and empty input yields an empty chart.
pub fn score_histogram(listings: &[Listing], label: &str, hints: Hints) -> ChartSpec {
    let (labels, counts) = count_by(listings, |l| score_bucket_label(l.score))
        .into_iter()
        .unzip();
    ChartSpec::labelled(ChartType::Bar, label, labels, Series::Counts(counts), hints)
}

// Rounds .5 towards positive infinity.
fn round_half_up(n: f64) -> f64 {
    (n + 0.5).floor()
}
