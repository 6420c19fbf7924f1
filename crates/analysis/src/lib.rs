//! Adapter for the upstream visit-analysis service.
//!
//! The analysis service returns dental findings as JSON, but the shape of
//! that JSON has drifted across prompt revisions: some responses carry a
//! `log` array of visit entries, others a `teeth` array keyed by tooth
//! number, with the procedure sometimes replaced by a looser `status`
//! description. Responses also tend to arrive wrapped in markdown code
//! fences despite being requested as bare JSON.
//!
//! This crate reconciles every known shape into one canonical annotation
//! list. Normalization never fails: payloads that cannot be read yield an
//! empty list, and per-entry problems are skipped, with everything dropped
//! reported through [`Diagnostic`] records alongside the result.

mod entry;

pub mod diagnostics;
pub mod report;
pub mod schema;

pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use report::{normalize_payload, parse_response_text, AnalysisReport};
pub use schema::normalize_annotations;
