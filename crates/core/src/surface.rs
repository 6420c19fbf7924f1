//! Tooth surface vocabulary.

use serde::{Deserialize, Serialize};

/// The five tooth surfaces the analysis service may attach to a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Surface {
    Occlusal,
    Buccal,
    Lingual,
    Mesial,
    Distal,
}

impl Surface {
    /// Return the surface as its lowercase wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Occlusal => "occlusal",
            Self::Buccal => "buccal",
            Self::Lingual => "lingual",
            Self::Mesial => "mesial",
            Self::Distal => "distal",
        }
    }

    /// Case-insensitive parse; `None` for anything unrecognized.
    ///
    /// Surface is advisory, so an unexpected value degrades to "no
    /// surface" instead of invalidating the whole entry.
    pub fn from_wire(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "occlusal" => Some(Self::Occlusal),
            "buccal" => Some(Self::Buccal),
            "lingual" => Some(Self::Lingual),
            "mesial" => Some(Self::Mesial),
            "distal" => Some(Self::Distal),
            _ => None,
        }
    }
}
