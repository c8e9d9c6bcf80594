use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Pie,
    Bar,
    Doughnut,
    Scatter,
    Bubble,
    Line,
}

/// A renderer-agnostic chart description. Serializes to the
/// `{ type, data: { labels, datasets }, options }` shape the frontend expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    pub label: String,
    pub data: Series,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Series {
    Counts(Vec<u64>),
    Values(Vec<f64>),
    Points(Vec<Point>),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r: Option<f64>,
}

/// Rendering hints. Renderers are free to ignore these.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartOptions {
    pub responsive: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugins: Option<Plugins>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scales: Option<Scales>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plugins {
    pub legend: Legend,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub position: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scales {
    pub x: Axis,
    pub y: Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: AxisTitle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTitle {
    pub display: bool,
    pub text: &'static str,
}

/// Which rendering hints a chart carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hints {
    Plain,
    LegendTop,
    Axes { x: &'static str, y: &'static str },
}

impl From<Hints> for ChartOptions {
    fn from(h: Hints) -> Self {
        let axis = |text: &'static str| Axis {
            title: AxisTitle {
                display: true,
                text,
            },
        };

        match h {
            Hints::Plain => ChartOptions {
                responsive: true,
                plugins: None,
                scales: None,
            },
            Hints::LegendTop => ChartOptions {
                responsive: true,
                plugins: Some(Plugins {
                    legend: Legend { position: "top" },
                }),
                scales: None,
            },
            Hints::Axes { x, y } => ChartOptions {
                responsive: true,
                plugins: None,
                scales: Some(Scales {
                    x: axis(x),
                    y: axis(y),
                }),
            },
        }
    }
}

impl ChartSpec {
    /// Single-dataset chart with category labels.
    pub fn labelled(
        chart_type: ChartType,
        label: &str,
        labels: Vec<String>,
        data: Series,
        hints: Hints,
    ) -> Self {
        ChartSpec {
            chart_type,
            data: ChartData {
                labels: Some(labels),
                datasets: vec![Dataset {
                    label: label.to_string(),
                    data,
                    fill: None,
                }],
            },
            options: hints.into(),
        }
    }

    /// Single-dataset chart of coordinate points, no labels.
    pub fn points(chart_type: ChartType, label: &str, points: Vec<Point>, hints: Hints) -> Self {
        ChartSpec {
            chart_type,
            data: ChartData {
                labels: None,
                datasets: vec![Dataset {
                    label: label.to_string(),
                    data: Series::Points(points),
                    fill: None,
                }],
            },
            options: hints.into(),
        }
    }

    #[cfg(test)]
    pub fn labels(&self) -> &[String] {
        self.data.labels.as_deref().unwrap_or(&[])
    }

    /// The first dataset's series; every chart built here has exactly one.
    #[cfg(test)]
    pub fn series(&self) -> Option<&Series> {
        self.data.datasets.first().map(|d| &d.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bar_chart_wire_shape() {
        let spec = ChartSpec::labelled(
            ChartType::Bar,
            "Bedrooms",
            vec!["3".into(), "4".into()],
            Series::Counts(vec![2, 1]),
            Hints::LegendTop,
        );

        assert_eq!(
            serde_json::to_value(&spec).unwrap(),
            json!({
                "type": "bar",
                "data": {
                    "labels": ["3", "4"],
                    "datasets": [{ "label": "Bedrooms", "data": [2, 1] }]
                },
                "options": { "responsive": true, "plugins": { "legend": { "position": "top" } } }
            })
        );
    }

    #[test]
    fn scatter_omits_labels_and_radius() {
        let spec = ChartSpec::points(
            ChartType::Scatter,
            "Price vs Area",
            vec![Point { x: 1000.0, y: 2.0, r: None }],
            Hints::Axes { x: "Sqft", y: "$" },
        );

        let v = serde_json::to_value(&spec).unwrap();
        assert!(v["data"].get("labels").is_none());
        assert_eq!(v["data"]["datasets"][0]["data"][0], json!({ "x": 1000.0, "y": 2.0 }));
        assert_eq!(v["options"]["scales"]["x"]["title"], json!({ "display": true, "text": "Sqft" }));
        assert_eq!(v["options"]["scales"]["y"]["title"]["text"], "$");
    }
}
