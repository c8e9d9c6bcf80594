use crate::charts::fields::Metric;
use crate::charts::spec::{ChartData, ChartSpec, ChartType, Dataset, Hints, Point, Series};
use crate::domain::listing::format_number;
use crate::domain::Listing;

/// Bubble size: either a constant or read from the listing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Radius {
    Fixed(f64),
    Field(Metric),
}

impl Radius {
    fn of(self, l: &Listing) -> f64 {
        match self {
            Radius::Fixed(r) => r,
            Radius::Field(m) => m.of(l),
        }
    }
}

/// One point per listing, in listing order.
pub fn points(listings: &[Listing], x: Metric, y: Metric, radius: Option<Radius>) -> Vec<Point> {
    listings
        .iter()
        .map(|l| Point {
            x: x.of(l),
            y: y.of(l),
            r: radius.map(|r| r.of(l)),
        })
        .collect()
}

pub fn scatter_chart(
    listings: &[Listing],
    x: Metric,
    y: Metric,
    radius: Option<Radius>,
    chart_type: ChartType,
    label: &str,
    hints: Hints,
) -> ChartSpec {
    ChartSpec::points(chart_type, label, points(listings, x, y, radius), hints)
}

/// Line series: listings sorted (stably) by `x`, `x` values as labels and
/// `y` values as data.
pub fn line_chart(listings: &[Listing], x: Metric, y: Metric, label: &str, hints: Hints) -> ChartSpec {
    let mut sorted: Vec<&Listing> = listings.iter().collect();
    sorted.sort_by(|a, b| x.of(a).total_cmp(&x.of(b)));

    ChartSpec {
        chart_type: ChartType::Line,
        data: ChartData {
            labels: Some(sorted.iter().map(|l| format_number(x.of(l))).collect()),
            datasets: vec![Dataset {
                label: label.to_string(),
                data: Series::Values(sorted.iter().map(|l| y.of(l)).collect()),
                fill: Some(false),
            }],
        },
        options: hints.into(),
    }
}
