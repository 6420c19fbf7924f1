//! Payload schema detection and normalization.
//!
//! Each shape the service has been observed to emit is one adapter in
//! [`ADAPTERS`]. An adapter claims a payload by the presence of its root
//! field, never by inspecting entry contents, so a recognized payload with
//! broken entries still lands in the right adapter and degrades per entry.
//! Supporting the next prompt revision means adding an adapter here.

use serde_json::{Map, Value};

use dentition_core::ToothAnnotation;

use crate::diagnostics::Diagnostic;
use crate::entry::RawEntry;

// ---------------------------------------------------------------------------
// Adapters
// ---------------------------------------------------------------------------

/// One recognizable response shape.
pub trait SchemaAdapter {
    /// Schema name used in logs.
    fn name(&self) -> &'static str;

    /// Root field whose presence selects this adapter.
    fn root_field(&self) -> &'static str;

    /// Normalize the payload's entries, appending a diagnostic for each
    /// entry or field that had to be dropped.
    fn normalize(
        &self,
        root: &Map<String, Value>,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Vec<ToothAnnotation> {
        match root.get(self.root_field()) {
            Some(Value::Array(entries)) => canonicalize_entries(entries, diagnostics),
            Some(_) => {
                diagnostics.push(Diagnostic::malformed(format!(
                    "'{}' field is not an array",
                    self.root_field()
                )));
                Vec::new()
            }
            None => Vec::new(),
        }
    }
}

/// The `{"teeth": [{"number": ..}]}` shape from newer prompt revisions.
pub struct TeethSchema;

impl SchemaAdapter for TeethSchema {
    fn name(&self) -> &'static str {
        "teeth-array"
    }

    fn root_field(&self) -> &'static str {
        "teeth"
    }
}

/// The original `{"log": [{"tooth": ..}]}` visit-log shape.
pub struct VisitLogSchema;

impl SchemaAdapter for VisitLogSchema {
    fn name(&self) -> &'static str {
        "visit-log"
    }

    fn root_field(&self) -> &'static str {
        "log"
    }
}

/// Known schemas in detection order. A payload carrying both root fields
/// is read as the first match.
pub const ADAPTERS: &[&dyn SchemaAdapter] = &[&TeethSchema, &VisitLogSchema];

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Normalize a raw analysis payload into canonical annotations.
///
/// Annotations are returned in payload order. This never fails: an
/// unusable payload yields an empty list, and every dropped payload or
/// entry is described by a diagnostic.
pub fn normalize_annotations(payload: &Value) -> (Vec<ToothAnnotation>, Vec<Diagnostic>) {
    let mut diagnostics = Vec::new();

    let Some(root) = payload.as_object() else {
        tracing::warn!("Analysis payload root is not a JSON object");
        diagnostics.push(Diagnostic::malformed("payload root is not a JSON object"));
        return (Vec::new(), diagnostics);
    };

    for adapter in ADAPTERS {
        if root.contains_key(adapter.root_field()) {
            let annotations = adapter.normalize(root, &mut diagnostics);
            tracing::debug!(
                schema = adapter.name(),
                annotations = annotations.len(),
                dropped = diagnostics.len(),
                "Normalized analysis payload"
            );
            return (annotations, diagnostics);
        }
    }

    tracing::warn!("Analysis payload matches no known schema");
    diagnostics.push(Diagnostic::malformed(
        "payload has neither a 'teeth' nor a 'log' field",
    ));
    (Vec::new(), diagnostics)
}

fn canonicalize_entries(
    entries: &[Value],
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<ToothAnnotation> {
    let mut annotations = Vec::with_capacity(entries.len());
    for (index, value) in entries.iter().enumerate() {
        let raw: RawEntry = match serde_json::from_value(value.clone()) {
            Ok(raw) => raw,
            Err(e) => {
                diagnostics.push(Diagnostic::invalid_entry(format!(
                    "entry[{index}] is not a finding object: {e}"
                )));
                continue;
            }
        };
        match raw.canonicalize(index) {
            Ok(annotation) => annotations.push(annotation),
            Err(diagnostic) => diagnostics.push(diagnostic),
        }
    }
    annotations
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
