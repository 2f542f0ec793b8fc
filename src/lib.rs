//! Mathscribe - math-notation repair, segmentation, and bidirectional
//! LaTeX ↔ natural notation engine.
//!
//! The engine sits between an upstream math-solver model and the
//! rendering/editing surfaces of a web frontend:
//!
//! - [`sanitize`] strips the control characters model output arrives
//!   with; [`repair`] restores escape prefixes the transport ate
//!   (`rac{-4}{2}` → `\frac{-4}{2}`). [`normalize`] composes the two.
//! - [`segment`] splits mixed prose into `Text`/`Formula` segments with
//!   a depth-counted brace scan, ready for a typesetting renderer.
//! - [`to_latex`], [`to_natural`], and [`to_plain`] translate between
//!   the LaTeX dialect, the linear notation a user types without
//!   knowing LaTeX, and a human-readable one-line form.
//! - [`insert`] performs selection-aware palette insertion, identically
//!   in either dialect.
//!
//! Every function is pure, synchronous, and total over strings:
//! malformed input degrades (reported via [`DegradeReport`] where it
//! matters) and never raises.

pub mod core;
pub mod data;
pub mod editor;
pub mod utils;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export the engine surface
pub use crate::core::latex2natural::{to_natural, to_plain, to_plain_with_options, PlainOptions};
pub use crate::core::natural2latex::to_latex;
pub use crate::core::repair::{repair, repair_with_report};
pub use crate::core::sanitize::sanitize;
pub use crate::core::segment::{segment, segment_with_report, Document, Segment, SegmentKind};
pub use crate::data::patterns::{symbol, SymbolMapping, SYMBOL_TABLE};
pub use crate::editor::{insert, EditSession, EditState, InsertOutcome, Notation, Selection};
pub use crate::utils::error::{EngineError, EngineResult};
pub use crate::utils::report::{DegradeKind, DegradeRecord, DegradeReport};

/// Sanitize then repair: the pipeline every upstream message goes
/// through before rendering or conversion.
pub fn normalize(text: &str) -> String {
    repair(&sanitize(text))
}
