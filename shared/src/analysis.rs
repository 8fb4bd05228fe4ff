use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One acne detection returned by the backend, in cropped-face pixel space.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DetectionBox {
    /// `[x1, y1, x2, y2]`
    pub bbox: [f64; 4],
    #[serde(alias = "name", alias = "class_name")]
    pub label: String,
    pub confidence: f64,
}

/// Body of a `POST /upload/` response.
///
/// Every field is optional: the backend either fills in what its models
/// produced or returns a lone `error`. Unknown fields are kept in `extra` so
/// the whole object can be forwarded to the tip generator untouched.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct AnalysisResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skin_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicted_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left_eye_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right_eye_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acne_pred: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acne_confidence: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_probs: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cropped_face: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segmentation_overlay: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_boxes",
        skip_serializing_if = "Option::is_none"
    )]
    pub yolo_boxes: Option<Vec<DetectionBox>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AnalysisResult {
    /// Splits a response into the success payload or the backend's error text.
    pub fn into_outcome(self) -> Result<AnalysisResult, String> {
        match non_empty(&self.error) {
            Some(error) => Err(error.to_string()),
            None => Ok(self),
        }
    }
}

/// Keeps the boxes that parse and drops the rest, so one odd entry only
/// thins out the detection panel.
fn lenient_boxes<'de, D>(deserializer: D) -> Result<Option<Vec<DetectionBox>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(Value::Array(entries)) = Option::<Value>::deserialize(deserializer)? else {
        return Ok(None);
    };

    let boxes = entries
        .into_iter()
        .filter_map(|entry| match serde_json::from_value::<DetectionBox>(entry) {
            Ok(detection) => Some(detection),
            Err(e) => {
                log::warn!("Skipping detection box: {}", e);
                None
            }
        })
        .collect();
    Ok(Some(boxes))
}

/// Treats `None` and `""` alike, the way the page always has.
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Whether a confidence value should be reported at all.
///
/// A confidence of exactly zero is treated like a missing value and hides the
/// acne panel. NaN is never reported.
pub fn confidence_is_reportable(confidence: Option<f64>) -> bool {
    matches!(confidence, Some(c) if c != 0.0 && !c.is_nan())
}

/// Probability in `[0, 1]` rendered as a one-decimal percentage.
pub fn format_percent(probability: f64) -> String {
    format!("{:.1}%", probability * 100.0)
}
