//! Grouping projected points into legend-ready series

use crate::palette::series_color;
use crate::project::ProjectedPoint;
use serde::{Deserialize, Serialize};

/// One scatter series: every point that shares a predicted label, with
/// the palette color assigned to that label.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ScatterSeries {
    pub label: String,
    /// Hex fill color, e.g. "#0088FE".
    pub color: String,
    pub points: Vec<ProjectedPoint>,
}

/// Group points by predicted label, in first-appearance order, and assign
/// palette colors by series index.
pub fn group_into_series(points: Vec<ProjectedPoint>) -> Vec<ScatterSeries> {
    let mut series: Vec<ScatterSeries> = Vec::new();
    for point in points {
        match series.iter_mut().find(|s| s.label == point.label) {
            Some(existing) => existing.points.push(point),
            None => series.push(ScatterSeries {
                label: point.label.clone(),
                color: String::new(),
                points: vec![point],
            }),
        }
    }
    for (index, entry) in series.iter_mut().enumerate() {
        entry.color = series_color(index).to_string();
    }
    series
}
