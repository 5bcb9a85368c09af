//! Scatter-chart preparation for batch prediction results
//!
//! Turns a batch of class-probability vectors into 2D points a scatter
//! chart can plot directly:
//! - project: the circular simplex embedding (one fixed direction per
//!   class label, probabilities as weights)
//! - group_into_series: per-label series with palette colors, ready for
//!   a legend
//!
//! Everything here is pure; rendering belongs to the host.

pub mod palette;
pub mod project;
pub mod series;

pub use palette::*;
pub use project::*;
pub use series::*;
