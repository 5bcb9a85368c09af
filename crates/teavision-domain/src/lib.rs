//! Domain types shared across the teavision suite
//!
//! This crate provides the canonical vocabulary for tea-leaf image
//! classification tooling:
//! - TeaRegion, LeafGrade: producing regions and leaf grades as the datasets encode them
//! - ModelKind, ImageKind: selectable classifier models and input variants
//! - ProbabilityMap, PredictionOutcome: classifier results
//! - Account: the signed-in user as the backend reports it
//! - SampleName: dataset file-stem parsing (`REGION_GRADE_NNN`)

pub mod account;
pub mod error;
pub mod grade;
pub mod model;
pub mod prediction;
pub mod probability;
pub mod region;
pub mod sample;

pub use account::*;
pub use error::*;
pub use grade::*;
pub use model::*;
pub use prediction::*;
pub use probability::*;
pub use region::*;
pub use sample::*;
