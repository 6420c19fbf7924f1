//! Clinical procedure vocabulary and upstream status inference.
//!
//! The analysis service is prompted to emit one of six procedure names,
//! but real responses also arrive with free-form `status` strings or no
//! procedure at all. [`Procedure::from_wire`] and
//! [`Procedure::from_status`] hold the tolerant mapping rules in one
//! place; everything downstream works with the closed enum.

use serde::{Deserialize, Serialize};

use crate::color::{palette, Color};

/// A clinical procedure or finding attached to one tooth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Procedure {
    Cavity,
    Filling,
    Extraction,
    Examination,
    Cleaning,
    Crown,
    /// Anything the service emitted that is not a recognized procedure.
    Unknown,
}

impl Procedure {
    /// Return the procedure as its lowercase wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cavity => "cavity",
            Self::Filling => "filling",
            Self::Extraction => "extraction",
            Self::Examination => "examination",
            Self::Cleaning => "cleaning",
            Self::Crown => "crown",
            Self::Unknown => "unknown",
        }
    }

    /// Parse an explicit `procedure` field value.
    ///
    /// Matching is case-insensitive; empty and unrecognized names map to
    /// [`Procedure::Unknown`] rather than failing, since an unexpected
    /// procedure still identifies a finding worth charting.
    pub fn from_wire(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "cavity" => Self::Cavity,
            "filling" => Self::Filling,
            "extraction" => Self::Extraction,
            "examination" => Self::Examination,
            "cleaning" => Self::Cleaning,
            "crown" => Self::Crown,
            _ => Self::Unknown,
        }
    }

    /// Infer a procedure from a `status` field when no explicit
    /// `procedure` is present.
    ///
    /// Substring `"extract"` wins, then `"fill"`; every other status
    /// lands on [`Procedure::Cavity`] -- including `"healthy"`, which the
    /// upstream service documents as its default status. Observed
    /// service behavior, kept verbatim.
    pub fn from_status(status: &str) -> Self {
        let status = status.to_lowercase();
        if status.contains("extract") {
            Self::Extraction
        } else if status.contains("fill") {
            Self::Filling
        } else {
            Self::Cavity
        }
    }

    /// The chart color for this procedure.
    ///
    /// Cavity, filling, and extraction each have a dedicated family;
    /// everything else renders neutral gray.
    pub fn display_color(self) -> Color {
        match self {
            Self::Cavity => palette::CAVITY,
            Self::Filling => palette::FILLING,
            Self::Extraction => palette::EXTRACTION,
            Self::Examination | Self::Cleaning | Self::Crown | Self::Unknown => palette::NEUTRAL,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
