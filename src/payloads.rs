//! Typed views of the two known fenced payload shapes.
//!
//! Extraction returns payloads as raw JSON. Consumers that render a chart or
//! create a calendar entry convert them here and get a shape error when the
//! model wrote something else.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ExtractError, Result};

/// Convert a raw payload into `T`, naming `tag` in the error.
pub(crate) fn parse_payload<T: DeserializeOwned>(tag: &str, value: &Value) -> Result<T> {
    serde_json::from_value(value.clone()).map_err(|e| ExtractError::PayloadShape {
        tag: tag.to_string(),
        reason: e.to_string(),
    })
}

/// Chart kinds a `chart_json` payload may request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartType {
    Bar,
    Line,
    Pie,
    Doughnut,
    Radar,
    PolarArea,
    Scatter,
}

/// A `chart_json` payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    pub data: ChartData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<f64>,
    /// Styling and other renderer-specific keys, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A `schedule_json` payload.
///
/// Times are kept as the ISO-8601 strings the model wrote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEvent {
    pub title: String,
    pub start_time: String,
    pub end_time: String,
    pub details: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}
