//! Loose decoding of a single finding entry.
//!
//! Every known payload schema carries the same underlying facts per entry,
//! under drifting field names and types. [`RawEntry`] accepts the union of
//! those fields without judgement; [`RawEntry::canonicalize`] then applies
//! the precedence rules that turn one loose entry into a canonical
//! annotation, or a diagnostic explaining why it was skipped.

use serde::Deserialize;
use serde_json::Value;

use dentition_core::{Procedure, Surface, ToothAnnotation, ToothId};

use crate::diagnostics::Diagnostic;

/// Union of the per-entry fields observed across payload schemas.
///
/// Tooth numbers are kept as raw JSON values because the service emits
/// them both as numbers and as numeric strings.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawEntry {
    /// Tooth number under the visit-log field name.
    #[serde(default)]
    tooth: Option<Value>,
    /// Tooth number under the teeth-array field name.
    #[serde(default)]
    number: Option<Value>,
    #[serde(default)]
    procedure: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    surface: Option<String>,
}

impl RawEntry {
    /// Tooth number from whichever field carries it, with `tooth` taking
    /// precedence over `number` when both are present.
    fn tooth_number(&self) -> Option<i64> {
        let value = self.tooth.as_ref().or(self.number.as_ref())?;
        match value {
            Value::Number(number) => number.as_i64(),
            Value::String(text) => text.trim().parse().ok(),
            _ => None,
        }
    }

    /// Resolve the entry into a canonical annotation.
    ///
    /// An explicit non-empty `procedure` wins over `status`; a non-empty
    /// `status` is inferred into a procedure; an entry carrying neither is
    /// kept with [`Procedure::Unknown`]. Only a missing or out-of-range
    /// tooth number drops the entry.
    pub(crate) fn canonicalize(&self, index: usize) -> Result<ToothAnnotation, Diagnostic> {
        let number = self.tooth_number().ok_or_else(|| {
            Diagnostic::invalid_entry(format!("entry[{index}] has no usable tooth number"))
        })?;
        let tooth = ToothId::try_from(number).map_err(|_| {
            Diagnostic::invalid_entry(format!(
                "entry[{index}] tooth number {number} is outside the permanent dentition"
            ))
        })?;

        let procedure = match (&self.procedure, &self.status) {
            (Some(procedure), _) if !procedure.is_empty() => Procedure::from_wire(procedure),
            (_, Some(status)) if !status.is_empty() => Procedure::from_status(status),
            _ => Procedure::Unknown,
        };

        let surface = self.surface.as_deref().and_then(|raw| {
            let parsed = Surface::from_wire(raw);
            if parsed.is_none() && !raw.trim().is_empty() {
                tracing::debug!(entry = index, surface = raw, "Dropping unrecognized surface");
            }
            parsed
        });

        Ok(ToothAnnotation {
            tooth,
            procedure,
            surface,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
