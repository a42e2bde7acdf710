//! # Response Content Extractors
//!
//! Deterministic parsers that recover structured artifacts embedded in
//! free-form, markdown-flavored model output. Each parser is a pure function
//! of its input text and reports "not present" instead of failing.
//!
//! ## Parsers Available
//!
//! | Parser | Recovers |
//! |--------|----------|
//! | [`extract_table`] | First Markdown table as term/definition flashcards |
//! | [`extract_fenced_json`] | JSON body of the first `` ```<tag> `` fence |
//! | [`parse_outline`] | Bullet outline as a rooted tree |
//!
//! ## Shared Utilities
//!
//! | Function | Purpose |
//! |----------|---------|
//! | [`outline_to_text`] | Render a tree back into bullet outline text |
//! | [`scan::find_fence`] | Locate a tagged fenced block |

pub mod fenced;
pub mod outline;
pub mod scan;
pub mod serialize;
pub mod table;

pub use fenced::{
    extract_fenced_json, probe_fenced_json, FenceProbe, FencedBlock, CHART_TAG, SCHEDULE_TAG,
};
pub use outline::{parse_outline, parse_outline_with, OutlineExtraction};
pub use serialize::outline_to_text;
pub use table::{extract_table, TableBlock};
