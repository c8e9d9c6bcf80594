use crate::charts::binning::{self, Unit, DEFAULT_BINS};
use crate::charts::categorical::{self, UNKNOWN};
use crate::charts::fields::{Category, Metric};
use crate::charts::pairwise::{self, Radius};
use crate::charts::spec::{ChartSpec, ChartType, Hints};
use crate::domain::{normalize_all, Listing};
use crate::source::RawRecord;
use indexmap::IndexMap;
use serde::Serialize;

/// Chart key -> chart, in table order. `None` means "not enough data".
pub type Catalog = IndexMap<&'static str, Option<ChartSpec>>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Aggregation {
    Frequency { category: Category, fallback: &'static str },
    Mean { category: Category, value: Metric },
    Histogram { metric: Metric, unit: Unit },
    ScoreBuckets,
    Pairs { x: Metric, y: Metric, radius: Option<Radius> },
    Trend { x: Metric, y: Metric },
}

/// One entry of the chart table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartDef {
    pub key: &'static str,
    /// Dataset label shown by the renderer.
    pub label: &'static str,
    pub chart_type: ChartType,
    pub hints: Hints,
    pub aggregation: Aggregation,
}

const COUNT_TOP: Hints = Hints::LegendTop;

pub const CHARTS: [ChartDef; 18] = [
    ChartDef {
        key: "homeType",
        label: "Home Types",
        chart_type: ChartType::Pie,
        hints: COUNT_TOP,
        aggregation: Aggregation::Frequency { category: Category::HomeType, fallback: UNKNOWN },
    },
    ChartDef {
        key: "bedrooms",
        label: "Bedrooms",
        chart_type: ChartType::Bar,
        hints: COUNT_TOP,
        aggregation: Aggregation::Frequency { category: Category::Bedrooms, fallback: UNKNOWN },
    },
    ChartDef {
        key: "bathrooms",
        label: "Bathrooms",
        chart_type: ChartType::Bar,
        hints: COUNT_TOP,
        aggregation: Aggregation::Frequency { category: Category::Bathrooms, fallback: UNKNOWN },
    },
    ChartDef {
        key: "priceDist",
        label: "Price Range",
        chart_type: ChartType::Bar,
        hints: Hints::Axes { x: "Price", y: "Count" },
        aggregation: Aggregation::Histogram { metric: Metric::Price, unit: Unit::Dollars },
    },
    ChartDef {
        key: "areaDist",
        label: "Living Area",
        chart_type: ChartType::Bar,
        hints: Hints::Axes { x: "Sqft", y: "Count" },
        aggregation: Aggregation::Histogram { metric: Metric::LivingArea, unit: Unit::Sqft },
    },
    ChartDef {
        key: "yearBuiltDist",
        label: "Year Built",
        chart_type: ChartType::Bar,
        hints: COUNT_TOP,
        aggregation: Aggregation::Frequency { category: Category::YearBuilt, fallback: UNKNOWN },
    },
    ChartDef {
        key: "priceArea",
        label: "Price vs Area",
        chart_type: ChartType::Scatter,
        hints: Hints::Axes { x: "Sqft", y: "$" },
        aggregation: Aggregation::Pairs { x: Metric::LivingArea, y: Metric::Price, radius: None },
    },
    ChartDef {
        key: "priceYear",
        label: "Price over Year",
        chart_type: ChartType::Line,
        hints: Hints::Plain,
        aggregation: Aggregation::Trend { x: Metric::YearBuilt, y: Metric::Price },
    },
    ChartDef {
        key: "pricePerSqft",
        label: "Price per Sqft",
        chart_type: ChartType::Bar,
        hints: Hints::Plain,
        aggregation: Aggregation::Histogram { metric: Metric::PricePerSqft, unit: Unit::Dollars },
    },
    ChartDef {
        key: "bedsBaths",
        label: "Beds vs Baths",
        chart_type: ChartType::Bubble,
        hints: Hints::Plain,
        aggregation: Aggregation::Pairs {
            x: Metric::Bedrooms,
            y: Metric::Bathrooms,
            radius: Some(Radius::Fixed(5.0)),
        },
    },
    ChartDef {
        key: "avgPriceType",
        label: "Avg Price",
        chart_type: ChartType::Bar,
        hints: Hints::Plain,
        aggregation: Aggregation::Mean { category: Category::HomeType, value: Metric::Price },
    },
    ChartDef {
        key: "countByZip",
        label: "Count by Zip",
        chart_type: ChartType::Bar,
        hints: Hints::Plain,
        aggregation: Aggregation::Frequency { category: Category::Zipcode, fallback: "N/A" },
    },
    ChartDef {
        key: "homeStatus",
        label: "Home Status",
        chart_type: ChartType::Doughnut,
        hints: Hints::Plain,
        aggregation: Aggregation::Frequency { category: Category::HomeStatus, fallback: UNKNOWN },
    },
    ChartDef {
        key: "countByCity",
        label: "Count by City",
        chart_type: ChartType::Bar,
        hints: Hints::Plain,
        aggregation: Aggregation::Frequency { category: Category::City, fallback: UNKNOWN },
    },
    ChartDef {
        key: "avgAreaType",
        label: "Avg Living Area",
        chart_type: ChartType::Bar,
        hints: Hints::Plain,
        aggregation: Aggregation::Mean { category: Category::HomeType, value: Metric::LivingArea },
    },
    ChartDef {
        key: "scoreDist",
        label: "Score Range",
        chart_type: ChartType::Bar,
        hints: Hints::Plain,
        aggregation: Aggregation::ScoreBuckets,
    },
    ChartDef {
        key: "scorePrice",
        label: "Price vs Score",
        chart_type: ChartType::Scatter,
        hints: Hints::Axes { x: "Score", y: "$" },
        aggregation: Aggregation::Pairs { x: Metric::Score, y: Metric::Price, radius: None },
    },
    ChartDef {
        key: "areaYear",
        label: "Area vs Year",
        chart_type: ChartType::Scatter,
        hints: Hints::Axes { x: "Year", y: "Sqft" },
        aggregation: Aggregation::Pairs { x: Metric::YearBuilt, y: Metric::LivingArea, radius: None },
    },
];

impl ChartDef {
    pub fn build(&self, listings: &[Listing]) -> Option<ChartSpec> {
        let (ty, label, hints) = (self.chart_type, self.label, self.hints);

        match self.aggregation {
            Aggregation::Frequency { category, fallback } => Some(categorical::frequency_chart(
                listings, category, fallback, ty, label, hints,
            )),
            Aggregation::Mean { category, value } => Some(categorical::mean_chart(
                listings, category, value, ty, label, hints,
            )),
            Aggregation::Histogram { metric, unit } => {
                binning::histogram(listings, metric, DEFAULT_BINS, unit, label, hints)
            }
            Aggregation::ScoreBuckets => Some(binning::score_histogram(listings, label, hints)),
            Aggregation::Pairs { x, y, radius } => Some(pairwise::scatter_chart(
                listings, x, y, radius, ty, label, hints,
            )),
            Aggregation::Trend { x, y } => Some(pairwise::line_chart(listings, x, y, label, hints)),
        }
    }
}

/// Runs every chart definition over the same listings.
pub fn build_catalog(listings: &[Listing]) -> Catalog {
    CHARTS
        .iter()
        .map(|def| (def.key, def.build(listings)))
        .collect()
}

/// The full response body: `{ listings, charts }`.
#[derive(Debug, Clone, Serialize)]
pub struct PropertyReport {
    pub listings: Vec<Listing>,
    pub charts: Catalog,
}

impl PropertyReport {
    pub fn from_raw(raw: &[RawRecord]) -> Self {
        let listings = normalize_all(raw);
        let charts = build_catalog(&listings);
        let empty = charts.values().filter(|c| c.is_none()).count();

        tracing::debug!(
            listings = listings.len(),
            charts = charts.len(),
            empty,
            "built chart catalog"
        );

        Self { listings, charts }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::spec::Series;
    use serde_json::{json, Value};

    const KEYS: [&str; 18] = [
        "homeType",
        "bedrooms",
        "bathrooms",
        "priceDist",
        "areaDist",
        "yearBuiltDist",
        "priceArea",
        "priceYear",
        "pricePerSqft",
        "bedsBaths",
        "avgPriceType",
        "countByZip",
        "homeStatus",
        "countByCity",
        "avgAreaType",
        "scoreDist",
        "scorePrice",
        "areaYear",
    ];

    fn sample() -> Vec<RawRecord> {
        serde_json::from_value(json!([
            {
                "id": "1",
                "score": 0.42,
                "metadata": {
                    "price": "100000", "livingArea": "1000", "homeType": "Condo",
                    "bedrooms": "2", "bathrooms": "1", "yearBuilt": "1990",
                    "homeStatus": "FOR_SALE", "city": "Austin",
                    "address": "{\"zipcode\":\"78701\"}"
                }
            },
            {
                "id": "2",
                "score": 0.47,
                "metadata": {
                    "price": "200000", "livingArea": "2000", "homeType": "Condo",
                    "bedrooms": "3", "bathrooms": "2", "yearBuilt": "1985",
                    "homeStatus": "", "city": "Austin",
                    "address": "not json"
                }
            }
        ]))
        .unwrap()
    }

    #[test]
    fn catalog_has_every_key_in_order() {
        let catalog = build_catalog(&[]);
        let keys: Vec<_> = catalog.keys().copied().collect();
        assert_eq!(keys, KEYS);

        let defs: Vec<_> = CHARTS.iter().map(|d| d.key).collect();
        assert_eq!(defs, KEYS);
    }

    #[test]
    fn empty_input_nulls_only_equal_width_histograms() {
        let catalog = build_catalog(&[]);

        for (key, chart) in &catalog {
            let expect_null = matches!(*key, "priceDist" | "areaDist" | "pricePerSqft");
            assert_eq!(chart.is_none(), expect_null, "{key}");
        }
    }

    #[test]
    fn report_from_sample() {
        let report = PropertyReport::from_raw(&sample());
        let charts = &report.charts;

        assert_eq!(report.listings.len(), 2);

        let price = charts["priceDist"].as_ref().unwrap();
        assert_eq!(price.series(), Some(&Series::Counts(vec![1, 0, 0, 0, 1])));

        let avg = charts["avgPriceType"].as_ref().unwrap();
        assert_eq!(avg.labels(), ["Condo".to_string()]);
        assert_eq!(avg.series(), Some(&Series::Values(vec![150000.0])));

        let score = charts["scoreDist"].as_ref().unwrap();
        assert_eq!(score.labels(), ["0.4-0.5".to_string()]);
        assert_eq!(score.series(), Some(&Series::Counts(vec![2])));

        let zips = charts["countByZip"].as_ref().unwrap();
        assert_eq!(zips.labels(), ["78701", "N/A"].map(String::from));

        let status = charts["homeStatus"].as_ref().unwrap();
        assert_eq!(status.labels(), ["FOR_SALE", "Unknown"].map(String::from));

        let year = charts["priceYear"].as_ref().unwrap();
        assert_eq!(year.labels(), ["1985", "1990"].map(String::from));
    }

    #[test]
    fn report_serializes_to_wire_shape() {
        let v: Value = serde_json::to_value(PropertyReport::from_raw(&sample())).unwrap();

        assert_eq!(v["listings"][0]["livingArea"], json!(1000.0));
        assert_eq!(v["listings"][1]["zipcode"], json!(""));

        let charts = v["charts"].as_object().unwrap();
        assert_eq!(charts.len(), 18);
        assert_eq!(charts["homeType"]["type"], "pie");
        assert_eq!(charts["homeStatus"]["type"], "doughnut");
        assert_eq!(charts["bedsBaths"]["type"], "bubble");
        assert_eq!(charts["bedsBaths"]["data"]["datasets"][0]["data"][0]["r"], json!(5.0));
        assert_eq!(charts["priceDist"]["options"]["scales"]["x"]["title"]["text"], "Price");

        let empty: Value = serde_json::to_value(PropertyReport::from_raw(&[])).unwrap();
        assert_eq!(empty["charts"]["priceDist"], Value::Null);
        assert_eq!(empty["listings"], json!([]));
    }
}
