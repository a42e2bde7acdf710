//! Fenced JSON payload extraction.
//!
//! Looks for a `` ```<tag> `` fence and parses its body as JSON. A body that
//! is not valid JSON is logged and reported as absent so a malformed payload
//! never disturbs the rest of the extraction pass.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Result;
use crate::extractor::scan::find_fence;
use crate::payloads::parse_payload;

/// Fence tag for chart specifications.
pub const CHART_TAG: &str = "chart_json";

/// Fence tag for calendar events.
pub const SCHEDULE_TAG: &str = "schedule_json";

/// A fenced block whose body parsed as JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct FencedBlock {
    /// The tag the block was opened with.
    pub tag: String,
    /// Parsed body, exactly as the model wrote it. No schema is enforced.
    pub value: Value,
    /// Text before the opening fence, trimmed.
    pub intro_text: String,
    /// Byte offset of the opening backticks.
    pub start: usize,
}

impl FencedBlock {
    /// Deserialize the payload into a typed shape.
    pub fn parse_as<T: DeserializeOwned>(&self) -> Result<T> {
        parse_payload(&self.tag, &self.value)
    }
}

/// Outcome of looking for one tagged fence.
#[derive(Debug, Clone, PartialEq)]
pub enum FenceProbe {
    /// No fence with this tag (or it was never closed).
    Absent,
    /// The fence exists but its body is not valid JSON.
    Malformed {
        /// The serde error message.
        reason: String,
    },
    /// The fence exists and its body parsed.
    Parsed(FencedBlock),
}

/// Look for the first `tag` fence and report what was found.
///
/// Unlike [`extract_fenced_json`], a malformed body is reported as
/// [`FenceProbe::Malformed`] so the caller can record it.
pub fn probe_fenced_json(text: &str, tag: &str) -> FenceProbe {
    let Some(fence) = find_fence(text, tag) else {
        return FenceProbe::Absent;
    };

    match serde_json::from_str::<Value>(fence.body.trim()) {
        Ok(value) => FenceProbe::Parsed(FencedBlock {
            tag: tag.to_string(),
            value,
            intro_text: text[..fence.open].trim().to_string(),
            start: fence.open,
        }),
        Err(e) => {
            tracing::warn!(tag, error = %e, "fenced block body is not valid JSON; ignoring it");
            FenceProbe::Malformed {
                reason: e.to_string(),
            }
        }
    }
}

/// Extract and parse the first fenced block tagged `tag`.
///
/// Returns `None` when the fence is missing, unclosed, or its trimmed body
/// is not valid JSON. Parse failures are logged with the tag, never raised.
///
/// # Examples
///
/// ```
/// use response_extract::extractor::extract_fenced_json;
///
/// let text = "Chart below.\n```chart_json\n{\"a\": 1}\n```";
/// let block = extract_fenced_json(text, "chart_json").unwrap();
/// assert_eq!(block.value["a"], 1);
/// assert_eq!(block.intro_text, "Chart below.");
///
/// assert!(extract_fenced_json("```chart_json\nnot json\n```", "chart_json").is_none());
/// ```
pub fn extract_fenced_json(text: &str, tag: &str) -> Option<FencedBlock> {
    match probe_fenced_json(text, tag) {
        FenceProbe::Parsed(block) => Some(block),
        FenceProbe::Absent | FenceProbe::Malformed { .. } => None,
    }
}
