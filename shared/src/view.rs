//! Pure mapping from an [`AnalysisResult`] to what the result panels show.
//!
//! Nothing here touches the DOM; the frontend renders a [`ResultView`] as-is.

use crate::analysis::{
    confidence_is_reportable, format_percent, non_empty, AnalysisResult, DetectionBox,
};
use crate::tips::Recommendation;
use strum::{Display, EnumIter};

pub const SKIN_TYPE_LABELS: [&str; 3] = ["Dry", "Normal", "Oily"];
pub const SKIN_TYPE_COLORS: [&str; 3] = ["#A8D5BA", "#9BA8D5", "#D5B8A8"];

/// The result panels whose visibility depends on the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Panel {
    LeftEyeColor,
    RightEyeColor,
    AcneAnalysis,
    CroppedFace,
    Segmentation,
    Detection,
    TypeProbabilities,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AcneMeter {
    pub fill_percent: f64,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityBar {
    pub label: &'static str,
    pub color: &'static str,
    pub fill_percent: f64,
    pub value_text: String,
}

/// Cropped face plus the overlays that can only exist on top of it.
#[derive(Debug, Clone, PartialEq)]
pub struct FacePanel {
    pub image: String,
    pub segmentation: Option<String>,
    pub detections: Option<Vec<DetectionBox>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub skin_type: String,
    pub left_eye: Option<String>,
    pub right_eye: Option<String>,
    pub acne_level: String,
    pub acne_summary: Option<String>,
    pub acne: Option<AcneMeter>,
    pub face: Option<FacePanel>,
    pub type_probs: Option<Vec<ProbabilityBar>>,
    pub recommendation: Recommendation,
}

impl ResultView {
    pub fn new(result: &AnalysisResult, recommendation: Recommendation) -> Self {
        let skin_type = non_empty(&result.skin_type)
            .or_else(|| non_empty(&result.predicted_type))
            .unwrap_or("Unknown")
            .to_string();

        let reportable = confidence_is_reportable(result.acne_confidence);
        let confidence = result.acne_confidence.unwrap_or_default();

        let acne = match non_empty(&result.acne_pred) {
            Some(pred) if reportable => Some(AcneMeter {
                fill_percent: confidence * 100.0,
                caption: format!("{} - {} Confidence", pred, format_percent(confidence)),
            }),
            _ => None,
        };

        Self {
            skin_type,
            left_eye: non_empty(&result.left_eye_color).map(|c| format!("Left Eye: {}", c)),
            right_eye: non_empty(&result.right_eye_color).map(|c| format!("Right Eye: {}", c)),
            acne_level: non_empty(&result.acne_pred).unwrap_or("Unknown").to_string(),
            acne_summary: reportable
                .then(|| format!("Confidence: {}", format_percent(confidence))),
            acne,
            face: face_panel(result),
            type_probs: probability_bars(result.type_probs.as_deref()),
            recommendation,
        }
    }

    pub fn is_visible(&self, panel: Panel) -> bool {
        match panel {
            Panel::LeftEyeColor => self.left_eye.is_some(),
            Panel::RightEyeColor => self.right_eye.is_some(),
            Panel::AcneAnalysis => self.acne.is_some(),
            Panel::CroppedFace => self.face.is_some(),
            Panel::Segmentation => self
                .face
                .as_ref()
                .is_some_and(|face| face.segmentation.is_some()),
            Panel::Detection => self
                .face
                .as_ref()
                .is_some_and(|face| face.detections.is_some()),
            Panel::TypeProbabilities => self.type_probs.is_some(),
        }
    }

    /// Boxes to paint over the cropped face, if that panel is shown.
    pub fn detections(&self) -> Option<(&str, &[DetectionBox])> {
        let face = self.face.as_ref()?;
        let boxes = face.detections.as_deref()?;
        Some((face.image.as_str(), boxes))
    }
}

fn face_panel(result: &AnalysisResult) -> Option<FacePanel> {
    let image = non_empty(&result.cropped_face)?.to_string();
    let detections = result
        .yolo_boxes
        .as_ref()
        .filter(|boxes| !boxes.is_empty())
        .cloned();

    Some(FacePanel {
        image,
        segmentation: non_empty(&result.segmentation_overlay).map(str::to_string),
        detections,
    })
}

fn probability_bars(probs: Option<&[f64]>) -> Option<Vec<ProbabilityBar>> {
    let probs = probs.filter(|p| p.len() == SKIN_TYPE_LABELS.len())?;
    let bars = probs
        .iter()
        .zip(SKIN_TYPE_LABELS.iter().zip(SKIN_TYPE_COLORS.iter()))
        .map(|(&p, (&label, &color))| ProbabilityBar {
            label,
            color,
            fill_percent: p * 100.0,
            value_text: format_percent(p),
        })
        .collect();
    Some(bars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn full() -> AnalysisResult {
        AnalysisResult {
            skin_type: Some("Oily".into()),
            left_eye_color: Some("Brown".into()),
            right_eye_color: Some("Green".into()),
            acne_pred: Some("Mild".into()),
            acne_confidence: Some(0.42),
            type_probs: Some(vec![0.1, 0.2, 0.7]),
            cropped_face: Some("data:image/jpeg;base64,FACE".into()),
            segmentation_overlay: Some("data:image/jpeg;base64,SEG".into()),
            yolo_boxes: Some(vec![DetectionBox {
                bbox: [10.0, 40.0, 60.0, 90.0],
                label: "pustule".into(),
                confidence: 0.66,
            }]),
            ..Default::default()
        }
    }

    fn view(result: &AnalysisResult) -> ResultView {
        ResultView::new(result, Recommendation::NoTips)
    }

    #[test]
    fn full_result_shows_every_panel() {
        let view = view(&full());
        for panel in Panel::iter() {
            assert!(view.is_visible(panel), "{} should be visible", panel);
        }
    }

    fn assert_hidden_alone(panel: Panel, strip: fn(&mut AnalysisResult)) {
        let mut result = full();
        strip(&mut result);
        let view = view(&result);
        assert!(!view.is_visible(panel), "{} should be hidden", panel);
        for other in Panel::iter().filter(|p| *p != panel) {
            let nested = panel == Panel::CroppedFace
                && matches!(other, Panel::Segmentation | Panel::Detection);
            assert_eq!(view.is_visible(other), !nested, "{} after hiding {}", other, panel);
        }
    }

    #[test]
    fn each_panel_hides_when_its_field_is_missing() {
        assert_hidden_alone(Panel::LeftEyeColor, |r| r.left_eye_color = None);
        assert_hidden_alone(Panel::RightEyeColor, |r| r.right_eye_color = Some(String::new()));
        assert_hidden_alone(Panel::AcneAnalysis, |r| r.acne_pred = None);
        assert_hidden_alone(Panel::AcneAnalysis, |r| r.acne_confidence = None);
        assert_hidden_alone(Panel::CroppedFace, |r| r.cropped_face = None);
        assert_hidden_alone(Panel::Segmentation, |r| r.segmentation_overlay = None);
        assert_hidden_alone(Panel::Detection, |r| r.yolo_boxes = Some(vec![]));
        assert_hidden_alone(Panel::Detection, |r| r.yolo_boxes = None);
        assert_hidden_alone(Panel::TypeProbabilities, |r| r.type_probs = None);
    }

    #[test]
    fn overlays_need_the_cropped_face() {
        let mut result = full();
        result.cropped_face = None;
        let view = view(&result);
        assert!(!view.is_visible(Panel::Segmentation));
        assert!(!view.is_visible(Panel::Detection));
        assert!(view.detections().is_none());
    }

    #[test]
    fn wrong_probability_count_hides_bars() {
        for probs in [vec![], vec![0.5, 0.5], vec![0.25; 4]] {
            let mut result = full();
            result.type_probs = Some(probs);
            assert!(view(&result).type_probs.is_none());
        }
    }

    #[test]
    fn probability_bars_follow_fixed_labels() {
        let bars = view(&full()).type_probs.unwrap();
        let labels: Vec<_> = bars.iter().map(|b| b.label).collect();
        let values: Vec<_> = bars.iter().map(|b| b.value_text.as_str()).collect();
        assert_eq!(labels, ["Dry", "Normal", "Oily"]);
        assert_eq!(values, ["10.0%", "20.0%", "70.0%"]);
        assert_eq!(bars[1].color, "#9BA8D5");
        assert!((bars[2].fill_percent - 70.0).abs() < 1e-9);
    }

    #[test]
    fn skin_type_fallbacks() {
        let mut result = AnalysisResult::default();
        assert_eq!(view(&result).skin_type, "Unknown");
        result.predicted_type = Some("Normal".into());
        assert_eq!(view(&result).skin_type, "Normal");
        result.skin_type = Some(String::new());
        assert_eq!(view(&result).skin_type, "Normal");
    }

    #[test]
    fn acne_caption_and_summary() {
        let view = view(&full());
        let acne = view.acne.unwrap();
        assert_eq!(acne.caption, "Mild - 42.0% Confidence");
        assert!((acne.fill_percent - 42.0).abs() < 1e-9);
        assert_eq!(view.acne_summary.as_deref(), Some("Confidence: 42.0%"));
        assert_eq!(view.acne_level, "Mild");
    }

    #[test]
    fn zero_acne_confidence_hides_the_panel() {
        let mut result = full();
        result.acne_confidence = Some(0.0);
        let view = view(&result);
        assert!(!view.is_visible(Panel::AcneAnalysis));
        assert_eq!(view.acne_summary, None);
        assert_eq!(view.acne_level, "Mild");
    }

    #[test]
    fn eye_color_text() {
        let view = view(&full());
        assert_eq!(view.left_eye.as_deref(), Some("Left Eye: Brown"));
        assert_eq!(view.right_eye.as_deref(), Some("Right Eye: Green"));
    }
}
