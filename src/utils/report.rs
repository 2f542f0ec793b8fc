//! Degradation reporting.
//!
//! The engine never fails on malformed input; it degrades and keeps
//! going. These records make the degradations observable as values, for
//! report logs and CLI diagnostics.

use serde::Serialize;

use crate::utils::error::{CliDiagnostic, DiagnosticSeverity};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DegradeKind {
    /// A formula candidate had no matching close brace and was dropped
    UnterminatedGroup,
    /// A two-group macro found only its first group
    MissingSecondGroup,
    /// A candidate overlapped a higher-priority one and was discarded
    OverlapDiscard,
    /// A missing escape prefix was restored
    RepairApplied,
}

#[derive(Debug, Clone, Serialize)]
pub struct DegradeRecord {
    pub id: String,
    pub kind: DegradeKind,
    /// Command keyword involved, when there is one
    pub name: Option<String>,
    pub message: String,
    /// The affected slice of the input
    pub snippet: Option<String>,
}

impl DegradeRecord {
    pub fn new(
        id: String,
        kind: DegradeKind,
        name: Option<String>,
        message: impl Into<String>,
        snippet: Option<String>,
    ) -> Self {
        Self {
            id,
            kind,
            name,
            message: message.into(),
            snippet,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DegradeReport {
    /// Operation that produced the report ("repair" or "segment")
    pub operation: String,
    pub records: Vec<DegradeRecord>,
}

impl DegradeReport {
    pub fn new(operation: impl Into<String>, records: Vec<DegradeRecord>) -> Self {
        Self {
            operation: operation.into(),
            records,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Render the records as CLI diagnostics.
    pub fn diagnostics(&self) -> Vec<CliDiagnostic> {
        self.records.iter().map(CliDiagnostic::from).collect()
    }
}

/// Accumulates records and hands out sequential ids.
#[derive(Debug, Default)]
pub struct Recorder {
    records: Vec<DegradeRecord>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(
        &mut self,
        kind: DegradeKind,
        name: Option<String>,
        message: impl Into<String>,
        snippet: Option<String>,
    ) {
        let id = format!("D{:04}", self.records.len() + 1);
        self.records
            .push(DegradeRecord::new(id, kind, name, message, snippet));
    }

    pub fn into_report(self, operation: impl Into<String>) -> DegradeReport {
        DegradeReport::new(operation, self.records)
    }
}

impl From<&DegradeRecord> for CliDiagnostic {
    fn from(record: &DegradeRecord) -> Self {
        let (severity, kind) = match record.kind {
            DegradeKind::UnterminatedGroup => (DiagnosticSeverity::Warning, "unterminated group"),
            DegradeKind::MissingSecondGroup => (DiagnosticSeverity::Warning, "missing second group"),
            DegradeKind::OverlapDiscard => (DiagnosticSeverity::Info, "overlap discarded"),
            DegradeKind::RepairApplied => (DiagnosticSeverity::Info, "repair applied"),
        };
        let mut diag = CliDiagnostic::new(severity, kind, record.message.clone());
        if let Some(ref snippet) = record.snippet {
            diag = diag.with_location(snippet.clone());
        }
        diag
    }
}
