//! Extractor configuration.
//!
//! [`ExtractorConfig`] decides which fence tags are recognized, which
//! conversation modes turn on outline extraction, and how a synthetic outline
//! root is labelled. It can be built in code with the `with_*` setters or
//! loaded from JSON (or YAML with the `yaml` feature).

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{ExtractError, Result};
use crate::extractor::fenced::{CHART_TAG, SCHEDULE_TAG};

/// Label used for a synthetic outline root when nothing better is available.
pub const DEFAULT_ROOT_LABEL: &str = "Mind Map";

/// Type alias for the custom labelling function used in [`RootLabel::Custom`].
///
/// Receives the outline's intro text. Returning `None` (or an empty label)
/// falls back to the configured default.
pub type RootLabelFn = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Policy for naming the root synthesized over several top-level outline items.
#[derive(Clone, Default)]
pub enum RootLabel {
    /// Last non-empty line of the intro, with trailing `:` and `.` removed.
    #[default]
    FromIntro,

    /// Always use this label.
    Fixed(String),

    /// Caller-provided labelling function.
    Custom(RootLabelFn),
}

impl RootLabel {
    /// Resolve a label for the given intro text, falling back to `fallback`.
    pub fn resolve(&self, intro: &str, fallback: &str) -> String {
        let label = match self {
            RootLabel::FromIntro => label_from_intro(intro),
            RootLabel::Fixed(label) => Some(label.trim().to_string()),
            RootLabel::Custom(f) => f(intro).map(|s| s.trim().to_string()),
        };
        label
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| fallback.to_string())
    }
}

impl std::fmt::Debug for RootLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RootLabel::FromIntro => write!(f, "FromIntro"),
            RootLabel::Fixed(label) => write!(f, "Fixed({:?})", label),
            RootLabel::Custom(_) => write!(f, "Custom(...)"),
        }
    }
}

fn label_from_intro(intro: &str) -> Option<String> {
    let last = intro.lines().map(str::trim).filter(|l| !l.is_empty()).last()?;
    let label = last.trim_end_matches([':', '.']).trim();
    (!label.is_empty()).then(|| label.to_string())
}

/// The mode a conversation is in when a response completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationMode {
    #[default]
    Chat,
    MindMap,
    Flashcards,
    Chart,
    Schedule,
}

/// Configuration for an [`Extractor`](crate::orchestrator::Extractor).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Fence tag holding chart specifications.
    pub chart_tag: String,

    /// Fence tag holding calendar events.
    pub schedule_tag: String,

    /// Modes in which bullet outlines are extracted as trees.
    pub outline_modes: Vec<ConversationMode>,

    /// Root label used when the policy yields nothing.
    pub fallback_root_label: String,

    /// How synthetic outline roots are named. Not loadable from files.
    #[serde(skip)]
    pub root_label: RootLabel,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            chart_tag: CHART_TAG.to_string(),
            schedule_tag: SCHEDULE_TAG.to_string(),
            outline_modes: vec![ConversationMode::MindMap],
            fallback_root_label: DEFAULT_ROOT_LABEL.to_string(),
            root_label: RootLabel::default(),
        }
    }
}

impl ExtractorConfig {
    /// Set the fence tag holding chart specifications.
    pub fn with_chart_tag(mut self, tag: impl Into<String>) -> Self {
        self.chart_tag = tag.into();
        self
    }

    /// Set the fence tag holding calendar events.
    pub fn with_schedule_tag(mut self, tag: impl Into<String>) -> Self {
        self.schedule_tag = tag.into();
        self
    }

    /// Set the modes in which outlines are extracted.
    pub fn with_outline_modes(mut self, modes: Vec<ConversationMode>) -> Self {
        self.outline_modes = modes;
        self
    }

    /// Set the root label used when the policy yields nothing.
    pub fn with_fallback_root_label(mut self, label: impl Into<String>) -> Self {
        self.fallback_root_label = label.into();
        self
    }

    /// Set the synthetic root labelling policy.
    pub fn with_root_label(mut self, policy: RootLabel) -> Self {
        self.root_label = policy;
        self
    }

    /// Whether responses in `mode` get outline extraction.
    pub fn extracts_outline(&self, mode: ConversationMode) -> bool {
        self.outline_modes.contains(&mode)
    }

    /// Check the configuration for values extraction cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.chart_tag.trim().is_empty() || self.schedule_tag.trim().is_empty() {
            return Err(ExtractError::Config("fence tags must not be empty".into()));
        }
        if self.chart_tag == self.schedule_tag {
            return Err(ExtractError::Config(format!(
                "chart and schedule tags must differ (both '{}')",
                self.chart_tag
            )));
        }
        if self.fallback_root_label.trim().is_empty() {
            return Err(ExtractError::Config(
                "fallback root label must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Load and validate a configuration from JSON. Missing keys take defaults.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration from YAML. Missing keys take defaults.
    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}
