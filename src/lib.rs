//! # Response Extract
//!
//! Deterministic recovery of structured artifacts from LLM chat responses.
//!
//! Models answer in free-form markdown, and they format inconsistently. This
//! crate scans a finished (or still streaming) response and pulls out what a
//! chat UI can render as something richer than prose:
//! **flashcards** from the first Markdown table, **chart** and **schedule**
//! payloads from tagged JSON fences, and an **outline tree** (mind map) from
//! a run of bullet lines. The tree can be edited and rendered back into
//! bullet text for the next model request.
//!
//! Rendering, storage, and model transport are left to the caller.
//!
//! ## Core Concepts
//!
//! - **[`Extractor`]** - runs every applicable parser over one response and
//!   returns an [`ExtractionResult`]. Never fails: anything missing or
//!   malformed is simply absent.
//! - **[`extractor`]** - the individual parsers, usable on their own.
//! - **[`ChatMessage`]** - a conversation turn that owns its result and
//!   accepts an edited outline tree.
//! - **[`StreamingExtractor`]** - buffers token chunks and extracts once on
//!   completion.
//!
//! ## Quick Start
//!
//! ```
//! use response_extract::{ChatMessage, ConversationMode, Extractor};
//!
//! let text = "Key ideas:\n- Cells\n  - Nucleus\n- Energy\n";
//! let result = Extractor::default().extract(text, ConversationMode::MindMap);
//!
//! let tree = result.outline_tree.as_ref().unwrap();
//! assert_eq!(tree.name, "Key ideas");
//! assert_eq!(tree.children.len(), 2);
//!
//! let mut message = ChatMessage::assistant(text);
//! message.attach(result);
//! assert!(message.context_text().contains("  - Cells\n    - Nucleus\n"));
//! ```

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod events;
pub mod extractor;
pub mod message;
pub mod orchestrator;
pub mod payloads;
pub mod streaming;
pub mod types;

pub use config::{ConversationMode, ExtractorConfig, RootLabel};
pub use diagnostics::ExtractionDiagnostics;
pub use error::{ExtractError, Result};
pub use message::{ChatMessage, Role};
pub use orchestrator::{extract_response, Extractor};
pub use payloads::{ChartSpec, ChartType, ScheduleEvent};
pub use streaming::{extract_stream, FinalizedResponse, StreamingExtractor};
pub use types::{ArtifactKind, ExtractionResult, Flashcard, OutlineNode, TextSpan};
