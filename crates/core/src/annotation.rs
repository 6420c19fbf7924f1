//! Per-tooth clinical findings and visit-level statistics.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::procedure::Procedure;
use crate::surface::Surface;
use crate::tooth::ToothId;

// ---------------------------------------------------------------------------
// ToothAnnotation
// ---------------------------------------------------------------------------

/// One clinical finding tied to one tooth.
///
/// Produced by the analysis layer in upstream order; the scene layer
/// collapses the list into at-most-one annotation per tooth (later
/// entries win).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToothAnnotation {
    /// Canonical tooth position (1-32).
    pub tooth: ToothId,
    /// What was found or done.
    pub procedure: Procedure,
    /// Affected surface, when the service reported one.
    #[serde(default)]
    pub surface: Option<Surface>,
}

impl ToothAnnotation {
    /// Create an annotation with no surface.
    pub fn new(tooth: ToothId, procedure: Procedure) -> Self {
        Self {
            tooth,
            procedure,
            surface: None,
        }
    }

    /// Attach a surface to the finding.
    pub fn with_surface(mut self, surface: Surface) -> Self {
        self.surface = Some(surface);
        self
    }
}

// ---------------------------------------------------------------------------
// VisitSummary
// ---------------------------------------------------------------------------

/// The visit statistics panel numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VisitSummary {
    /// Total findings in the visit log.
    pub total_procedures: usize,
    /// Number of distinct procedure types across the visit.
    pub distinct_procedures: usize,
    /// Number of distinct teeth with at least one finding.
    pub teeth_treated: usize,
}

impl VisitSummary {
    /// Summarize an ordered annotation list.
    pub fn from_annotations(annotations: &[ToothAnnotation]) -> Self {
        let procedures: HashSet<Procedure> =
            annotations.iter().map(|a| a.procedure).collect();
        let teeth: HashSet<ToothId> = annotations.iter().map(|a| a.tooth).collect();

        Self {
            total_procedures: annotations.len(),
            distinct_procedures: procedures.len(),
            teeth_treated: teeth.len(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
