//! 2D projection of class-probability vectors

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use teavision_domain::{PredictionOutcome, ProbabilityMap};

/// One batch member to project: a display name plus its classifier output.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ProjectionSample {
    /// Display name for tooltips, usually the file name.
    pub name: String,
    pub predicted: String,
    pub confidence: f64,
    pub probabilities: ProbabilityMap,
}

impl ProjectionSample {
    pub fn new(
        name: impl Into<String>,
        predicted: impl Into<String>,
        confidence: f64,
        probabilities: ProbabilityMap,
    ) -> Self {
        Self {
            name: name.into(),
            predicted: predicted.into(),
            confidence,
            probabilities,
        }
    }

    /// Build from a completed prediction.
    pub fn from_outcome(name: impl Into<String>, outcome: &PredictionOutcome) -> Self {
        Self {
            name: name.into(),
            predicted: outcome.prediction.clone(),
            confidence: outcome.confidence,
            probabilities: outcome.probabilities.clone(),
        }
    }
}

/// A projected scatter point.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
    /// Predicted class label; drives series grouping and point color.
    pub label: String,
    pub confidence: f64,
    pub name: String,
}

/// Project a batch of probability vectors onto the plane.
///
/// Each class label gets a fixed direction on the unit circle (label `i`
/// of `m` sits at angle `2*pi*i/m`); a sample's point is its
/// probability-weighted sum of those directions. Identical probability
/// vectors therefore land on identical points, a one-hot vector lands on
/// its label's direction, and a uniform vector lands at the origin.
///
/// The first sample pins the label order for the whole batch; labels a
/// later sample lacks read as probability 0, and labels absent from the
/// first sample are ignored. With fewer than two samples there is nothing
/// to compare against, so the result is empty. The function also returns
/// an empty batch instead of propagating degenerate inputs: an empty
/// label set on the first sample, or any non-finite coordinate.
pub fn project(samples: &[ProjectionSample]) -> Vec<ProjectedPoint> {
    if samples.len() < 2 {
        return Vec::new();
    }

    let labels: Vec<&str> = samples[0].probabilities.labels().collect();
    let m = labels.len();
    if m == 0 {
        return Vec::new();
    }

    let mut points = Vec::with_capacity(samples.len());
    for sample in samples {
        let mut x = 0.0;
        let mut y = 0.0;
        for (i, label) in labels.iter().enumerate() {
            let p = sample.probabilities.get(label);
            let angle = 2.0 * PI * i as f64 / m as f64;
            x += p * angle.cos();
            y += p * angle.sin();
        }
        if !x.is_finite() || !y.is_finite() {
            return Vec::new();
        }

        let label = if sample.predicted.is_empty() {
            "Unknown".to_string()
        } else {
            sample.predicted.clone()
        };
        let confidence = if sample.confidence.is_finite() {
            sample.confidence
        } else {
            0.0
        };
        points.push(ProjectedPoint {
            x,
            y,
            label,
            confidence,
            name: sample.name.clone(),
        });
    }
    points
}
