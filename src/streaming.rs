//! Streaming accumulation with an explicit finalize boundary.
//!
//! Responses arrive as token chunks. [`StreamingExtractor`] buffers them and
//! extracts once when the transport signals completion. A preview over the
//! partial text is available, but partial fences and tables legitimately read
//! as absent until their closing lines arrive, so only the finalized result
//! should be attached to a message.

use futures::{Stream, StreamExt};

use crate::config::ConversationMode;
use crate::message::ChatMessage;
use crate::orchestrator::Extractor;
use crate::types::ExtractionResult;

/// A completed response and what was extracted from it.
#[derive(Debug, Clone, PartialEq)]
pub struct FinalizedResponse {
    pub text: String,
    pub extraction: ExtractionResult,
}

impl FinalizedResponse {
    /// Build the assistant turn for this response with its artifacts attached.
    pub fn into_message(self) -> ChatMessage {
        let mut message = ChatMessage::assistant(self.text);
        message.attach(self.extraction);
        message
    }
}

/// Buffers a streamed response and extracts from it on completion.
///
/// # Example
///
/// ```
/// use response_extract::{ConversationMode, Extractor, StreamingExtractor};
///
/// let mut stream = StreamingExtractor::new(Extractor::default(), ConversationMode::Chart);
/// stream.push("Here:\n```chart_json\n{\"type\": ");
/// assert!(stream.preview().chart_payload.is_none()); // fence not closed yet
///
/// stream.push("\"pie\"}\n```");
/// let done = stream.finalize();
/// assert_eq!(done.extraction.chart_payload.unwrap()["type"], "pie");
/// ```
#[derive(Debug)]
pub struct StreamingExtractor {
    extractor: Extractor,
    mode: ConversationMode,
    buffer: String,
    cached: Option<ExtractionResult>,
    last_extracted_len: usize,
}

impl StreamingExtractor {
    pub fn new(extractor: Extractor, mode: ConversationMode) -> Self {
        Self {
            extractor,
            mode,
            buffer: String::new(),
            cached: None,
            last_extracted_len: 0,
        }
    }

    /// Append a chunk of response text.
    pub fn push(&mut self, chunk: &str) {
        self.buffer.push_str(chunk);
    }

    /// The raw accumulated text.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Extract from the text received so far.
    ///
    /// Re-extracts only when new text has arrived since the last preview.
    pub fn preview(&mut self) -> &ExtractionResult {
        let stale = self.cached.is_none() || self.buffer.len() != self.last_extracted_len;
        if stale {
            self.cached = Some(self.extractor.extract(&self.buffer, self.mode));
            self.last_extracted_len = self.buffer.len();
        }
        self.cached.get_or_insert_with(ExtractionResult::default)
    }

    /// Discard buffered text and any cached preview.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cached = None;
        self.last_extracted_len = 0;
    }

    /// Mark the response complete and extract from the full text.
    pub fn finalize(self) -> FinalizedResponse {
        let extraction = self.extractor.extract(&self.buffer, self.mode);
        tracing::debug!(
            len = self.buffer.len(),
            found = extraction.diagnostics.found.len(),
            "streamed response finalized"
        );
        FinalizedResponse {
            text: self.buffer,
            extraction,
        }
    }
}

/// Drain a stream of response chunks and extract once it ends.
///
/// The first transport error stops the drain and is returned unchanged;
/// extraction itself cannot fail.
pub async fn extract_stream<S, E>(
    extractor: Extractor,
    mode: ConversationMode,
    chunks: S,
) -> Result<FinalizedResponse, E>
where
    S: Stream<Item = Result<String, E>>,
{
    let mut acc = StreamingExtractor::new(extractor, mode);
    futures::pin_mut!(chunks);
    while let Some(chunk) = chunks.next().await {
        acc.push(&chunk?);
    }
    Ok(acc.finalize())
}
