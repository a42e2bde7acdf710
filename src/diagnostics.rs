//! Extraction diagnostics.
//!
//! [`ExtractionDiagnostics`] records what happened during one extraction
//! pass: which artifacts were attempted, which were recovered, and which
//! fenced blocks were present but held invalid JSON.

use crate::types::ArtifactKind;

/// A fenced block that was found but whose body failed to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedBlock {
    /// Fence tag, e.g. `chart_json`.
    pub tag: String,
    /// The serde error message.
    pub reason: String,
}

/// Records what happened during one extraction pass.
///
/// Attached to every [`ExtractionResult`](crate::types::ExtractionResult).
/// Deterministic for a given input, so re-running extraction on the same
/// text yields equal diagnostics.
///
/// # Example
///
/// ```
/// use response_extract::diagnostics::ExtractionDiagnostics;
///
/// let diag = ExtractionDiagnostics::default();
/// assert!(diag.ok()); // nothing malformed
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionDiagnostics {
    /// Extractions that were run, in execution order.
    pub attempted: Vec<ArtifactKind>,

    /// Extractions that produced an artifact.
    pub found: Vec<ArtifactKind>,

    /// Fenced blocks downgraded to absent because of invalid JSON.
    pub malformed: Vec<MalformedBlock>,
}

impl ExtractionDiagnostics {
    /// Quick check: was every present block well formed?
    pub fn ok(&self) -> bool {
        self.malformed.is_empty()
    }

    /// Whether the given extraction was run at all.
    pub fn was_attempted(&self, kind: ArtifactKind) -> bool {
        self.attempted.contains(&kind)
    }
}
