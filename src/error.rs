use thiserror::Error;

/// Errors produced by the fallible edges of the crate.
///
/// Extraction itself never fails: a missing, malformed, or degenerate block
/// is reported as absent. These variants cover configuration loading and the
/// conversion of extracted payloads into typed views.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Invalid configuration detected while loading or building.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// JSON parsing failed at the serde level.
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML configuration could not be parsed.
    #[cfg(feature = "yaml")]
    #[error("YAML parsing failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A fenced payload was valid JSON but did not match the requested shape.
    #[error("Payload '{tag}' has unexpected shape: {reason}")]
    PayloadShape {
        /// Fence tag the payload was extracted from.
        tag: String,
        /// The serde error message.
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, ExtractError>;
