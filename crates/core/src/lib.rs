//! Domain model for the dental visit chart.
//!
//! This crate holds the renderer-agnostic vocabulary shared by the
//! analysis and scene layers:
//!
//! - [`ToothId`] -- canonical tooth numbering (Universal Numbering
//!   System, 1-32), independent of any 3D asset's internal naming.
//! - [`Procedure`] / [`Surface`] -- the clinical vocabulary the upstream
//!   analysis service is prompted to emit, plus the tolerant parsing the
//!   service's actual output requires.
//! - [`ToothAnnotation`] -- one clinical finding tied to one tooth.
//! - [`VisitSummary`] -- the per-visit statistics panel numbers.
//! - [`Color`] and the chart [`palette`](color::palette).
//!
//! It has no internal dependencies so both the normalization layer and
//! the scene layer can build on it.

pub mod annotation;
pub mod color;
pub mod error;
pub mod procedure;
pub mod surface;
pub mod tooth;

pub use annotation::{ToothAnnotation, VisitSummary};
pub use color::Color;
pub use error::CoreError;
pub use procedure::Procedure;
pub use surface::Surface;
pub use tooth::{Arch, ToothId};
