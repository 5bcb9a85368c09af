//! Tea producing regions and their dataset folder codes

use serde::{Deserialize, Serialize};

/// A Sri Lankan tea producing region recognized by the region classifiers.
///
/// Dataset folders and sample stems identify regions by two-letter codes,
/// e.g. `NU_OP_001` is a Nuwara Eliya sample. Classifier labels carry the
/// long form, e.g. "Nuwara Eliya Region".
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TeaRegion {
    Dimbula,
    Uva,
    NuwaraEliya,
    Sabaragamuwa,
    Kandy,
    Ruhuna,
    Udapussellawa,
}

impl TeaRegion {
    /// All regions, in the order the datasets enumerate them.
    pub const ALL: [TeaRegion; 7] = [
        TeaRegion::Dimbula,
        TeaRegion::Uva,
        TeaRegion::NuwaraEliya,
        TeaRegion::Sabaragamuwa,
        TeaRegion::Kandy,
        TeaRegion::Ruhuna,
        TeaRegion::Udapussellawa,
    ];

    /// Two-letter dataset code.
    pub fn code(&self) -> &'static str {
        match self {
            TeaRegion::Dimbula => "DI",
            TeaRegion::Uva => "UV",
            TeaRegion::NuwaraEliya => "NU",
            TeaRegion::Sabaragamuwa => "SB",
            TeaRegion::Kandy => "KA",
            TeaRegion::Ruhuna => "RU",
            TeaRegion::Udapussellawa => "UP",
        }
    }

    /// Region name without the "Region" suffix.
    pub fn name(&self) -> &'static str {
        match self {
            TeaRegion::Dimbula => "Dimbula",
            TeaRegion::Uva => "Uva",
            TeaRegion::NuwaraEliya => "Nuwara Eliya",
            TeaRegion::Sabaragamuwa => "Sabaragamuwa",
            TeaRegion::Kandy => "Kandy",
            TeaRegion::Ruhuna => "Ruhuna",
            TeaRegion::Udapussellawa => "Udapussellawa",
        }
    }

    /// Label as the classifiers emit it, e.g. "Dimbula Region".
    pub fn display_name(&self) -> String {
        format!("{} Region", self.name())
    }

    /// Parse a two-letter dataset code (case-insensitive).
    pub fn from_code(code: &str) -> Option<TeaRegion> {
        match code.trim().to_ascii_uppercase().as_str() {
            "DI" => Some(TeaRegion::Dimbula),
            "UV" => Some(TeaRegion::Uva),
            "NU" => Some(TeaRegion::NuwaraEliya),
            "SB" => Some(TeaRegion::Sabaragamuwa),
            "KA" => Some(TeaRegion::Kandy),
            "RU" => Some(TeaRegion::Ruhuna),
            "UP" => Some(TeaRegion::Udapussellawa),
            _ => None,
        }
    }

    /// Parse a classifier label such as "Uva Region" or a bare name.
    pub fn from_label(label: &str) -> Option<TeaRegion> {
        let name = label.trim().trim_end_matches(" Region");
        TeaRegion::ALL
            .iter()
            .copied()
            .find(|r| r.name().eq_ignore_ascii_case(name))
    }
}
