//! Leaf grades encoded in the dataset sample names

use serde::{Deserialize, Serialize};

/// Leaf grade groups the group classifiers distinguish.
///
/// The grade is the second `_`-separated token of a sample stem
/// (`NU_OP_001` is an OP sample).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum LeafGrade {
    Op,
    Bop,
    Bopf,
    Dust,
}

impl LeafGrade {
    /// All grades, in the order the group classifiers report them.
    pub const ALL: [LeafGrade; 4] = [
        LeafGrade::Op,
        LeafGrade::Bop,
        LeafGrade::Bopf,
        LeafGrade::Dust,
    ];

    /// Grade token as it appears in sample names and classifier labels.
    pub fn as_str(&self) -> &'static str {
        match self {
            LeafGrade::Op => "OP",
            LeafGrade::Bop => "BOP",
            LeafGrade::Bopf => "BOPF",
            LeafGrade::Dust => "DUST",
        }
    }

    /// Spelled-out grade name.
    pub fn full_name(&self) -> &'static str {
        match self {
            LeafGrade::Op => "Orange Pekoe",
            LeafGrade::Bop => "Broken Orange Pekoe",
            LeafGrade::Bopf => "Broken Orange Pekoe Fannings",
            LeafGrade::Dust => "Dust",
        }
    }

    /// Parse a grade token (case-insensitive).
    pub fn from_token(token: &str) -> Option<LeafGrade> {
        match token.trim().to_ascii_uppercase().as_str() {
            "OP" => Some(LeafGrade::Op),
            "BOP" => Some(LeafGrade::Bop),
            "BOPF" => Some(LeafGrade::Bopf),
            "DUST" => Some(LeafGrade::Dust),
            _ => None,
        }
    }
}
