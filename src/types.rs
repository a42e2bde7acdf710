//! Core data model shared by the parsers, the orchestrator, and message records.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::diagnostics::ExtractionDiagnostics;
use crate::error::Result;
use crate::extractor::serialize::outline_to_text;
use crate::payloads::{parse_payload, ChartSpec, ScheduleEvent};

/// One node of an outline (mind map) tree.
///
/// Trees are built top-down from parsed text and never mutated into cycles.
/// An edit produces a new tree that replaces the old one wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineNode {
    /// Label shown for this node. Never empty for parsed trees.
    pub name: String,
    /// Ordered children. Absent in serialized form when empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<OutlineNode>,
}

impl OutlineNode {
    /// Create a childless node.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Append a child, builder style.
    pub fn with_child(mut self, child: OutlineNode) -> Self {
        self.children.push(child);
        self
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(OutlineNode::node_count).sum::<usize>()
    }

    /// Render this subtree as indented bullet text, starting at depth 0.
    pub fn to_outline(&self) -> String {
        outline_to_text(self, 0)
    }
}

/// A study card recovered from one table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub term: String,
    pub definition: String,
}

impl Flashcard {
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
        }
    }
}

/// Byte range `start..end` within a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSpan {
    pub start: usize,
    pub end: usize,
}

/// The kinds of structured artifact the extractor recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    Flashcards,
    Outline,
    Chart,
    Schedule,
}

impl ArtifactKind {
    /// Stable identifier used in logs and events.
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactKind::Flashcards => "flashcards",
            ArtifactKind::Outline => "outline",
            ArtifactKind::Chart => "chart",
            ArtifactKind::Schedule => "schedule",
        }
    }
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything recovered from one model response.
///
/// Owned by the conversation turn it was computed for. Every field is
/// optional: an absent field means the artifact was not present, was
/// malformed, or matched but yielded nothing usable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    /// Text preceding the earliest recognized block, trimmed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intro_text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flashcards: Option<Vec<Flashcard>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outline_tree: Option<OutlineNode>,

    /// Where the bullet run the tree came from sits in the response text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outline_span: Option<TextSpan>,

    /// Body of the first `chart_json` fence, as parsed JSON.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart_payload: Option<Value>,

    /// Body of the first `schedule_json` fence, as parsed JSON.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule_payload: Option<Value>,

    /// What the extraction pass attempted and found. Not persisted.
    #[serde(skip)]
    pub diagnostics: ExtractionDiagnostics,
}

impl ExtractionResult {
    /// True when no artifact was recovered.
    pub fn is_empty(&self) -> bool {
        self.flashcards.is_none()
            && self.outline_tree.is_none()
            && self.chart_payload.is_none()
            && self.schedule_payload.is_none()
    }

    /// Kinds of artifact present in this result, in a fixed order.
    pub fn kinds(&self) -> Vec<ArtifactKind> {
        let mut kinds = Vec::new();
        if self.flashcards.is_some() {
            kinds.push(ArtifactKind::Flashcards);
        }
        if self.outline_tree.is_some() {
            kinds.push(ArtifactKind::Outline);
        }
        if self.chart_payload.is_some() {
            kinds.push(ArtifactKind::Chart);
        }
        if self.schedule_payload.is_some() {
            kinds.push(ArtifactKind::Schedule);
        }
        kinds
    }

    /// Interpret the chart payload as a [`ChartSpec`].
    ///
    /// `Ok(None)` when no chart was extracted.
    pub fn chart_spec(&self) -> Result<Option<ChartSpec>> {
        self.chart_payload
            .as_ref()
            .map(|v| parse_payload("chart_json", v))
            .transpose()
    }

    /// Interpret the schedule payload as a [`ScheduleEvent`].
    ///
    /// `Ok(None)` when no schedule was extracted.
    pub fn schedule_event(&self) -> Result<Option<ScheduleEvent>> {
        self.schedule_payload
            .as_ref()
            .map(|v| parse_payload("schedule_json", v))
            .transpose()
    }
}
