//! Assembly of a complete analysis report.
//!
//! On top of annotation normalization, a response carries two free-text
//! summaries at the payload root: a technical one for the treating dentist
//! and a plain-language one for the patient. [`parse_response_text`] is
//! the entry point for raw service output, which habitually arrives
//! wrapped in markdown code fences despite being requested as bare JSON.

use serde::Serialize;
use serde_json::Value;

use dentition_core::{ToothAnnotation, VisitSummary};

use crate::diagnostics::Diagnostic;
use crate::schema::normalize_annotations;

/// Payload root field carrying the summary written for the dentist.
const DENTIST_SUMMARY_FIELD: &str = "summary_dentist";

/// Payload root field carrying the summary written for the patient.
const PATIENT_SUMMARY_FIELD: &str = "summary_patient";

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// Everything extracted from one analysis response.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// Canonical findings in payload order.
    pub annotations: Vec<ToothAnnotation>,
    /// Technical summary for the treating dentist, when present.
    pub dentist_summary: Option<String>,
    /// Plain-language summary for the patient, when present.
    pub patient_summary: Option<String>,
    /// Problems tolerated while normalizing.
    pub diagnostics: Vec<Diagnostic>,
}

impl AnalysisReport {
    fn empty_with(diagnostic: Diagnostic) -> Self {
        Self {
            annotations: Vec::new(),
            dentist_summary: None,
            patient_summary: None,
            diagnostics: vec![diagnostic],
        }
    }

    /// Visit statistics over the normalized annotations.
    pub fn summary(&self) -> VisitSummary {
        VisitSummary::from_annotations(&self.annotations)
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Normalize an already-parsed JSON payload into a report.
///
/// The summaries are read from the payload root independently of which
/// schema the annotations arrive in, so a response whose findings fail to
/// normalize can still surface its prose.
pub fn normalize_payload(payload: &Value) -> AnalysisReport {
    let (annotations, diagnostics) = normalize_annotations(payload);
    AnalysisReport {
        annotations,
        dentist_summary: string_field(payload, DENTIST_SUMMARY_FIELD),
        patient_summary: string_field(payload, PATIENT_SUMMARY_FIELD),
        diagnostics,
    }
}

/// Parse raw service response text into a report.
///
/// Markdown fencing is stripped before parsing. Text that is not JSON at
/// all yields an empty report with a single malformed-payload diagnostic.
pub fn parse_response_text(text: &str) -> AnalysisReport {
    let cleaned = strip_code_fences(text);
    match serde_json::from_str::<Value>(&cleaned) {
        Ok(payload) => normalize_payload(&payload),
        Err(e) => {
            tracing::warn!(error = %e, "Analysis response is not valid JSON");
            AnalysisReport::empty_with(Diagnostic::malformed(format!(
                "response text is not valid JSON: {e}"
            )))
        }
    }
}

/// Remove the code fencing the service adds despite instructions: the
/// json fence opener, the closing fence, and stray backticks.
fn strip_code_fences(text: &str) -> String {
    text.replace("```json\n", "")
        .replace("\n```", "")
        .replace('`', "")
}

fn string_field(payload: &Value, field: &str) -> Option<String> {
    payload
        .get(field)
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .map(str::to_owned)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
