//! HTTP client for the TeaVision prediction backend
//!
//! Wraps the backend's REST surface behind typed async operations:
//! - Image classification (`/predict`) and RGB analysis (`/analyze_rgb`)
//! - Region/group prediction from handcrafted features (`/predict_region_group`)
//! - Polyphenol-based region prediction with multi-backend failover
//! - Authentication, chatbot relay, and admin usage summaries
//!
//! Replies are decoded into `teavision-domain` types where one exists;
//! otherwise the wire structs are exposed directly.

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod wire;

pub use client::*;
pub use config::*;
pub use endpoint::*;
pub use error::*;
pub use wire::{
    HealthReply, PolyphenolPrediction, PolyphenolSample, PredictionReply, RecentUser,
    RegionGroupResult, RegionInfoReply, RgbAnalysisReply, UsageSummary,
};
