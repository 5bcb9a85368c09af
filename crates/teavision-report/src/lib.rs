//! CSV reports and measurement file readers
//!
//! Three exchange formats:
//! - Prediction history reports, per account or platform-wide
//! - RGB analysis exports from channel-mean batches
//! - Polyphenol measurement CSVs uploaded for region prediction
//!
//! Writers take any `io::Write`; readers take any `io::Read` plus a
//! file-path convenience wrapper.

pub mod error;
pub mod history;
pub mod polyphenol;
pub mod rgb;

pub use error::*;
pub use history::*;
pub use polyphenol::*;
pub use rgb::*;
