//! Normalization diagnostics.
//!
//! Dropped payloads and skipped entries are reported here rather than as
//! errors, so callers always receive whatever portion of a response did
//! normalize. Unmapped scene meshes are not a diagnostic; most nodes in
//! the jaw model are not teeth.

use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Kinds
// ---------------------------------------------------------------------------

/// What went wrong while normalizing an analysis response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// The payload root was unusable and no entries were read.
    MalformedPayload,
    /// One entry was skipped; the rest of the payload still normalized.
    InvalidEntry,
}

impl DiagnosticKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticKind::MalformedPayload => "malformed_payload",
            DiagnosticKind::InvalidEntry => "invalid_entry",
        }
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// A single problem tolerated during normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
}

impl Diagnostic {
    pub fn malformed(message: impl Into<String>) -> Self {
        Self {
            kind: DiagnosticKind::MalformedPayload,
            message: message.into(),
        }
    }

    pub fn invalid_entry(message: impl Into<String>) -> Self {
        Self {
            kind: DiagnosticKind::InvalidEntry,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind.as_str(), self.message)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
