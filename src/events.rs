//! Event hooks for extraction passes.
//!
//! Provides an optional, non-intrusive way to observe extraction. The
//! [`Extractor`](crate::orchestrator::Extractor) emits an event for every
//! artifact it recovers or has to discard, and one when the pass finishes.
//! Implement [`EventHandler`] to drive UI panels or progress displays.

use std::sync::Arc;

use crate::types::ArtifactKind;

/// Events emitted during an extraction pass.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// An artifact was recovered.
    ArtifactFound {
        kind: ArtifactKind,
    },
    /// A fenced block was present but its body was not valid JSON.
    ArtifactMalformed {
        kind: ArtifactKind,
        /// Fence tag of the discarded block.
        tag: String,
        /// The serde error message.
        reason: String,
    },
    /// The pass finished.
    ExtractionComplete {
        /// Number of artifacts recovered.
        found: usize,
    },
}

/// Handler for extraction events.
///
/// This is entirely optional -- extraction works without an event handler.
///
/// # Example
///
/// ```
/// use response_extract::events::{Event, EventHandler};
///
/// struct PanelNotifier;
///
/// impl EventHandler for PanelNotifier {
///     fn on_event(&self, event: Event) {
///         if let Event::ArtifactFound { kind } = event {
///             println!("open {} panel", kind);
///         }
///     }
/// }
/// ```
pub trait EventHandler: Send + Sync {
    /// Called when the extractor emits an event.
    fn on_event(&self, event: Event);
}

/// Emit an event if a handler is present. No-op otherwise.
pub(crate) fn emit(handler: &Option<Arc<dyn EventHandler>>, event: Event) {
    if let Some(ref h) = handler {
        h.on_event(event);
    }
}

/// An [`EventHandler`] backed by a closure.
///
/// # Example
///
/// ```
/// use response_extract::events::{Event, FnEventHandler};
/// use std::sync::Arc;
///
/// let handler = Arc::new(FnEventHandler(|event: Event| {
///     if let Event::ExtractionComplete { found } = event {
///         println!("{} artifacts", found);
///     }
/// }));
/// ```
pub struct FnEventHandler<F: Fn(Event) + Send + Sync>(pub F);

impl<F: Fn(Event) + Send + Sync> EventHandler for FnEventHandler<F> {
    fn on_event(&self, event: Event) {
        (self.0)(event);
    }
}
