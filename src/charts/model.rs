//! Chart descriptions handed to a renderer.

use serde::Serialize;

/// A titled figure made of one or more panels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub title: String,
    pub panels: Vec<Panel>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panel {
    pub title: String,
    #[serde(flatten)]
    pub kind: PanelKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Vertical,
    Horizontal,
}

/// One named set of values, aligned with the panel's categories.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub label: String,
    pub x: f64,
    pub y: f64,
    /// Marker size, when it encodes a third value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slice {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PanelKind {
    Bar {
        x_label: String,
        y_label: String,
        categories: Vec<String>,
        series: Vec<Series>,
        orientation: Orientation,
    },
    Scatter {
        x_label: String,
        y_label: String,
        points: Vec<ScatterPoint>,
    },
    Pie {
        slices: Vec<Slice>,
    },
}

impl Panel {
    /// Single-series vertical bar panel.
    pub fn bar(
        title: &str,
        x_label: &str,
        y_label: &str,
        categories: Vec<String>,
        values: Vec<f64>,
    ) -> Self {
        Self {
            title: title.to_string(),
            kind: PanelKind::Bar {
                x_label: x_label.to_string(),
                y_label: y_label.to_string(),
                categories,
                series: vec![Series {
                    name: y_label.to_string(),
                    values,
                }],
                orientation: Orientation::Vertical,
            },
        }
    }

    /// Bars grouped per category, one bar per series.
    pub fn grouped_bar(
        title: &str,
        x_label: &str,
        y_label: &str,
        categories: Vec<String>,
        series: Vec<Series>,
    ) -> Self {
        Self {
            title: title.to_string(),
            kind: PanelKind::Bar {
                x_label: x_label.to_string(),
                y_label: y_label.to_string(),
                categories,
                series,
                orientation: Orientation::Vertical,
            },
        }
    }

    pub fn scatter(title: &str, x_label: &str, y_label: &str, points: Vec<ScatterPoint>) -> Self {
        Self {
            title: title.to_string(),
            kind: PanelKind::Scatter {
                x_label: x_label.to_string(),
                y_label: y_label.to_string(),
                points,
            },
        }
    }

    pub fn pie(title: &str, slices: Vec<Slice>) -> Self {
        Self {
            title: title.to_string(),
            kind: PanelKind::Pie { slices },
        }
    }

    /// Switch a bar panel to horizontal bars; other panels are unchanged.
    pub fn horizontal(mut self) -> Self {
        if let PanelKind::Bar { orientation, .. } = &mut self.kind {
            *orientation = Orientation::Horizontal;
        }
        self
    }
}
