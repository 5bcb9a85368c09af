//! Dataset sample-name parsing
//!
//! Sample files are named `REGION_GRADE_NNN.<ext>`, e.g. `NU_OP_001.jpg`:
//! region code, leaf grade, then a sequence number.

use crate::{LeafGrade, TeaRegion};
use serde::{Deserialize, Serialize};

/// Parsed view of a dataset sample file name.
///
/// Parsing is tolerant: missing or malformed tokens yield `None` from the
/// accessors rather than failing construction.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SampleName {
    stem: String,
}

impl SampleName {
    /// Build from a file name, stripping the extension if present.
    pub fn from_file_name(name: &str) -> SampleName {
        let trimmed = name.trim();
        let stem = match trimmed.rsplit_once('.') {
            Some((stem, _ext)) if !stem.is_empty() => stem,
            _ => trimmed,
        };
        SampleName {
            stem: stem.to_string(),
        }
    }

    pub fn stem(&self) -> &str {
        &self.stem
    }

    fn token(&self, index: usize) -> Option<&str> {
        self.stem.split('_').nth(index).filter(|t| !t.is_empty())
    }

    /// Raw region code token, e.g. "NU".
    pub fn region_code(&self) -> Option<&str> {
        self.token(0)
    }

    pub fn region(&self) -> Option<TeaRegion> {
        self.region_code().and_then(TeaRegion::from_code)
    }

    pub fn grade(&self) -> Option<LeafGrade> {
        self.token(1).and_then(LeafGrade::from_token)
    }

    /// Trailing sequence number, e.g. 1 for `NU_OP_001`.
    pub fn sequence(&self) -> Option<u32> {
        self.token(2).and_then(|t| t.parse().ok())
    }
}
