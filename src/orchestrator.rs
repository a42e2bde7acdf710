//! Extraction orchestrator.
//!
//! [`Extractor`] runs every applicable parser over one completed response and
//! gathers what they recover into an [`ExtractionResult`]. The parsers are
//! independent: each computes its own intro text from the full original
//! text, and a missing or malformed artifact never affects the others.

use std::sync::Arc;

use crate::config::{ConversationMode, ExtractorConfig};
use crate::diagnostics::{ExtractionDiagnostics, MalformedBlock};
use crate::events::{emit, Event, EventHandler};
use crate::extractor::{extract_table, parse_outline_with, probe_fenced_json, FenceProbe};
use crate::types::{ArtifactKind, ExtractionResult, TextSpan};

/// Runs the table, fenced JSON, and outline parsers over a response.
///
/// Extraction is a pure function of the text, the mode, and the config:
/// calling [`extract`](Self::extract) twice on the same input yields equal
/// results. The extractor holds no mutable state and can be shared across
/// threads.
///
/// # Example
///
/// ```
/// use response_extract::{ConversationMode, Extractor};
///
/// let text = "Cards:\n| Term | Meaning |\n|---|---|\n| RAM | Memory |\n";
/// let result = Extractor::default().extract(text, ConversationMode::Flashcards);
/// assert_eq!(result.flashcards.unwrap().len(), 1);
/// assert_eq!(result.intro_text.as_deref(), Some("Cards:"));
/// ```
#[derive(Clone, Default)]
pub struct Extractor {
    config: ExtractorConfig,
    events: Option<Arc<dyn EventHandler>>,
}

impl Extractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Self {
            config,
            events: None,
        }
    }

    /// Attach an event handler notified during each pass.
    pub fn with_event_handler(mut self, handler: Arc<dyn EventHandler>) -> Self {
        self.events = Some(handler);
        self
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract every recognized artifact from a finished response.
    ///
    /// The table and both fenced payloads are always attempted. The outline
    /// is attempted only when `mode` is one of the configured outline modes.
    /// `intro_text` comes from whichever recovered artifact starts earliest.
    pub fn extract(&self, text: &str, mode: ConversationMode) -> ExtractionResult {
        let mut result = ExtractionResult::default();
        let mut diag = ExtractionDiagnostics::default();
        // (byte offset, intro) of every recovered artifact
        let mut intros: Vec<(usize, String)> = Vec::new();

        diag.attempted.push(ArtifactKind::Flashcards);
        if let Some(table) = extract_table(text) {
            self.found(&mut diag, ArtifactKind::Flashcards);
            intros.push((table.start, table.intro_text));
            result.flashcards = Some(table.flashcards);
        }

        let fences = [
            (
                ArtifactKind::Chart,
                self.config.chart_tag.as_str(),
                &mut result.chart_payload,
            ),
            (
                ArtifactKind::Schedule,
                self.config.schedule_tag.as_str(),
                &mut result.schedule_payload,
            ),
        ];
        for (kind, tag, slot) in fences {
            diag.attempted.push(kind);
            match probe_fenced_json(text, tag) {
                FenceProbe::Parsed(block) => {
                    self.found(&mut diag, kind);
                    intros.push((block.start, block.intro_text));
                    *slot = Some(block.value);
                }
                FenceProbe::Malformed { reason } => {
                    emit(
                        &self.events,
                        Event::ArtifactMalformed {
                            kind,
                            tag: tag.to_string(),
                            reason: reason.clone(),
                        },
                    );
                    diag.malformed.push(MalformedBlock {
                        tag: tag.to_string(),
                        reason,
                    });
                }
                FenceProbe::Absent => {}
            }
        }

        if self.config.extracts_outline(mode) {
            diag.attempted.push(ArtifactKind::Outline);
            let outline = parse_outline_with(
                text,
                &self.config.root_label,
                &self.config.fallback_root_label,
            );
            if let (Some(tree), Some(start), Some(end)) =
                (outline.tree, outline.start, outline.end)
            {
                tracing::trace!(nodes = tree.node_count(), "outline tree rebuilt");
                self.found(&mut diag, ArtifactKind::Outline);
                intros.push((start, outline.intro_text));
                result.outline_tree = Some(tree);
                result.outline_span = Some(TextSpan { start, end });
            }
        }

        result.intro_text = intros
            .into_iter()
            .min_by_key(|(start, _)| *start)
            .map(|(_, intro)| intro);

        tracing::debug!(
            ?mode,
            found = diag.found.len(),
            malformed = diag.malformed.len(),
            "extraction pass complete"
        );
        emit(
            &self.events,
            Event::ExtractionComplete {
                found: diag.found.len(),
            },
        );

        result.diagnostics = diag;
        result
    }

    fn found(&self, diag: &mut ExtractionDiagnostics, kind: ArtifactKind) {
        tracing::trace!(%kind, "artifact recovered");
        diag.found.push(kind);
        emit(&self.events, Event::ArtifactFound { kind });
    }
}

impl std::fmt::Debug for Extractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Extractor")
            .field("config", &self.config)
            .field("events", &self.events.is_some())
            .finish()
    }
}

/// Extract from `text` with the default configuration.
pub fn extract_response(text: &str, mode: ConversationMode) -> ExtractionResult {
    Extractor::default().extract(text, mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RootLabel;
    use crate::events::FnEventHandler;
    use crate::types::{Flashcard, OutlineNode};
    use serde_json::json;
    use std::sync::Mutex;

    const MIXED: &str = "Here is your study pack.\n\n\
| Term | Definition |\n|---|---|\n| ATP | Energy currency |\n\n\
```chart_json\n{\"type\": \"bar\", \"data\": {\"labels\": [\"a\"], \"datasets\": []}}\n```\n\n\
```schedule_json\n{\"title\": \"Review\", \"startTime\": \"2024-01-01T09:00:00Z\", \"endTime\": \"2024-01-01T10:00:00Z\", \"details\": \"Go over cards\"}\n```\n\n\
Topics:\n- Energy\n  - ATP\n- Cells\n";

    #[test]
    fn test_all_artifacts_in_mind_map_mode() {
        let result = extract_response(MIXED, ConversationMode::MindMap);
        assert_eq!(
            result.flashcards,
            Some(vec![Flashcard::new("ATP", "Energy currency")])
        );
        assert_eq!(result.chart_payload.as_ref().unwrap()["type"], "bar");
        assert_eq!(result.schedule_payload.as_ref().unwrap()["title"], "Review");
        let tree = result.outline_tree.as_ref().unwrap();
        assert_eq!(tree.name, "Topics");
        assert_eq!(tree.children.len(), 2);
        assert_eq!(result.intro_text.as_deref(), Some("Here is your study pack."));
        assert!(result.diagnostics.ok());
        assert_eq!(result.diagnostics.found.len(), 4);
    }

    #[test]
    fn test_outline_skipped_outside_outline_modes() {
        let result = extract_response(MIXED, ConversationMode::Chat);
        assert!(result.outline_tree.is_none());
        assert!(!result.diagnostics.was_attempted(ArtifactKind::Outline));
        assert!(result.flashcards.is_some());
    }

    #[test]
    fn test_malformed_chart_does_not_block_others() {
        let text = "```chart_json\n{broken\n```\n| A | B |\n|---|---|\n| x | y |\n";
        let result = extract_response(text, ConversationMode::Chat);
        assert!(result.chart_payload.is_none());
        assert_eq!(result.flashcards, Some(vec![Flashcard::new("x", "y")]));
        assert_eq!(result.diagnostics.malformed.len(), 1);
        assert_eq!(result.diagnostics.malformed[0].tag, "chart_json");
        assert!(!result.diagnostics.ok());
    }

    #[test]
    fn test_each_fence_fills_its_own_slot() {
        let text = "```schedule_json\n{\"s\": 1}\n```\n```chart_json\n{\"c\": 2}\n```";
        let result = extract_response(text, ConversationMode::Chat);
        assert_eq!(result.chart_payload, Some(json!({"c": 2})));
        assert_eq!(result.schedule_payload, Some(json!({"s": 1})));
    }

    #[test]
    fn test_outline_span_recorded() {
        let text = "Intro\n- a\n- b\n";
        let result = extract_response(text, ConversationMode::MindMap);
        assert_eq!(result.outline_span, Some(TextSpan { start: 6, end: 14 }));
        assert!(extract_response(text, ConversationMode::Chat).outline_span.is_none());
    }

    #[test]
    fn test_intro_from_earliest_artifact() {
        let text = "Chart first:\n```chart_json\n{}\n```\nThen cards:\n| A | B |\n|---|---|\n| x | y |\n";
        let result = extract_response(text, ConversationMode::Chat);
        assert_eq!(result.intro_text.as_deref(), Some("Chart first:"));
    }

    #[test]
    fn test_plain_text_yields_empty_result() {
        let result = extract_response("Just a friendly answer.", ConversationMode::MindMap);
        assert!(result.is_empty());
        assert!(result.intro_text.is_none());
        assert_eq!(result.diagnostics.attempted.len(), 4);
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let extractor = Extractor::default();
        let first = extractor.extract(MIXED, ConversationMode::MindMap);
        let second = extractor.extract(MIXED, ConversationMode::MindMap);
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_tags_and_root_label() {
        let config = ExtractorConfig::default()
            .with_chart_tag("graph")
            .with_root_label(RootLabel::Fixed("Plan".into()))
            .with_outline_modes(vec![ConversationMode::Chat]);
        let text = "```graph\n[1]\n```\n- a\n- b\n";
        let result = Extractor::new(config).extract(text, ConversationMode::Chat);
        assert_eq!(result.chart_payload, Some(json!([1])));
        assert_eq!(result.outline_tree.unwrap().name, "Plan");
    }

    #[test]
    fn test_single_root_outline_kept_as_is() {
        let result = extract_response("- Root\n  - Leaf\n", ConversationMode::MindMap);
        assert_eq!(
            result.outline_tree,
            Some(OutlineNode::new("Root").with_child(OutlineNode::new("Leaf")))
        );
        assert_eq!(result.intro_text.as_deref(), Some(""));
    }

    #[test]
    fn test_events_emitted() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let extractor = Extractor::default().with_event_handler(Arc::new(FnEventHandler(
            move |event: Event| sink.lock().unwrap().push(event),
        )));

        let text = "```chart_json\nnope\n```\n```schedule_json\n{}\n```";
        extractor.extract(text, ConversationMode::Chat);

        let events = seen.lock().unwrap();
        assert!(matches!(
            events[0],
            Event::ArtifactMalformed { kind: ArtifactKind::Chart, .. }
        ));
        assert_eq!(events[1], Event::ArtifactFound { kind: ArtifactKind::Schedule });
        assert_eq!(events[2], Event::ExtractionComplete { found: 1 });
    }

    #[test]
    fn test_extractor_is_shareable_across_threads() {
        let extractor = Arc::new(Extractor::default());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let extractor = extractor.clone();
                std::thread::spawn(move || {
                    let text = format!("| A | B |\n|---|---|\n| t{} | d |\n", i);
                    extractor.extract(&text, ConversationMode::Chat)
                })
            })
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            let result = handle.join().unwrap();
            assert_eq!(result.flashcards.unwrap()[0].term, format!("t{}", i));
        }
    }
}
