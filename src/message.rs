//! Conversation turn records that own extraction results.
//!
//! A [`ChatMessage`] carries the raw text of one turn and, once its response
//! has completed, the artifacts extracted from it. After attachment the only
//! permitted change is swapping in an edited outline tree; the edited tree is
//! what gets rendered back into model context.

use serde::{Deserialize, Serialize};

use crate::types::{ExtractionResult, OutlineNode, TextSpan};

/// Who authored a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One conversation turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    extraction: Option<ExtractionResult>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            extraction: None,
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            extraction: None,
        }
    }

    /// Attach the artifacts extracted from this turn's content.
    ///
    /// An empty result is not attached. Attaching again replaces the previous
    /// result, which is how a caller re-finalizes a turn.
    pub fn attach(&mut self, result: ExtractionResult) {
        self.extraction = (!result.is_empty()).then_some(result);
    }

    /// Artifacts attached to this turn, if any.
    pub fn extraction(&self) -> Option<&ExtractionResult> {
        self.extraction.as_ref()
    }

    /// Replace the outline tree after an interactive edit.
    ///
    /// Returns the previous tree. A message with no attached result gets a
    /// new one holding just the tree.
    pub fn replace_outline(&mut self, tree: OutlineNode) -> Option<OutlineNode> {
        self.extraction
            .get_or_insert_with(ExtractionResult::default)
            .outline_tree
            .replace(tree)
    }

    /// Text to send as this turn's history in future model requests.
    ///
    /// A turn with an outline tree has its original bullet run replaced by
    /// the (possibly edited) tree in bullet form. Everything around the run,
    /// including tables, fences, and the outline's own heading, is kept
    /// verbatim. Without a usable span the tree is appended after the content.
    pub fn context_text(&self) -> String {
        let Some(extraction) = self.extraction.as_ref() else {
            return self.content.clone();
        };
        let Some(tree) = extraction.outline_tree.as_ref() else {
            return self.content.clone();
        };

        let outline = tree.to_outline();
        match extraction.outline_span {
            Some(TextSpan { start, end })
                if start <= end
                    && end <= self.content.len()
                    && self.content.is_char_boundary(start)
                    && self.content.is_char_boundary(end) =>
            {
                format!(
                    "{}{}{}",
                    &self.content[..start],
                    outline,
                    &self.content[end..]
                )
            }
            _ => match self.content.trim() {
                "" => outline,
                content => format!("{}\n\n{}", content, outline),
            },
        }
    }
}
