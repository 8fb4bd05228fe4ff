use shared::{
    AnalysisResult, Effect, Event, FeedbackReply, Panel, Recommendation, ResultView, Section,
    Session, TipSource, Tone,
};

struct CannedTips;

impl TipSource for CannedTips {
    fn tips(&self, result: &AnalysisResult, _language: &str) -> Option<Vec<String>> {
        let skin = result.skin_type.clone().unwrap_or_default();
        Some(vec![format!("Pick a moisturizer for {} skin", skin.to_lowercase())])
    }
}

fn respond(session: &mut Session, body: &str) -> Vec<Effect> {
    let response: AnalysisResult = serde_json::from_str(body).unwrap();
    match response.into_outcome() {
        Ok(result) => {
            let tips = Recommendation::resolve(Some(&CannedTips), &result, "en");
            let view = ResultView::new(&result, tips);
            session.apply(Event::AnalysisSucceeded(Box::new(view)))
        }
        Err(error) => session.apply(Event::AnalysisFailed(format!("Error: {}", error))),
    }
}

fn submitted_upload() -> Session {
    let mut session = Session::new();
    session.apply(Event::UploadConsent(true));
    assert_eq!(session.apply(Event::SubmitUpload), vec![Effect::SendUpload]);
    session
}

#[test]
fn upload_renders_classification() {
    let mut session = submitted_upload();
    let effects = respond(
        &mut session,
        r#"{"skin_type":"Oily","type_probs":[0.1,0.2,0.7],"acne_pred":"Mild","acne_confidence":0.42}"#,
    );
    assert_eq!(effects, vec![Effect::ShowResults]);
    assert_eq!(session.section(), Section::Results);

    let view = session.results().unwrap();
    assert_eq!(view.skin_type, "Oily");

    let bars = view.type_probs.as_ref().unwrap();
    let rendered: Vec<_> = bars.iter().map(|b| (b.label, b.value_text.as_str())).collect();
    assert_eq!(rendered, [("Dry", "10.0%"), ("Normal", "20.0%"), ("Oily", "70.0%")]);

    let acne = view.acne.as_ref().unwrap();
    assert!((acne.fill_percent - 42.0).abs() < 1e-9);
    assert_eq!(acne.caption, "Mild - 42.0% Confidence");

    assert!(!view.is_visible(Panel::CroppedFace));
    assert!(!view.is_visible(Panel::Detection));
    assert_eq!(view.recommendation.text(), "• Pick a moisturizer for oily skin");
}

#[test]
fn backend_error_alerts_and_resets() {
    let mut session = submitted_upload();
    let effects = respond(&mut session, r#"{"error":"No face detected"}"#);
    assert_eq!(effects[0], Effect::Alert("Error: No face detected".into()));
    assert_eq!(session, Session::new());
}

#[test]
fn detections_only_over_a_cropped_face() {
    let mut session = submitted_upload();
    respond(
        &mut session,
        r#"{
            "skin_type": "Normal",
            "cropped_face": "data:image/jpeg;base64,FACE",
            "yolo_boxes": [
                {"bbox": [4, 30, 40, 60], "label": "nodule", "confidence": 0.31},
                {"bbox": [10, 35, 50, 70], "label": "papule", "confidence": 0.9}
            ]
        }"#,
    );
    let view = session.results().unwrap();
    let (image, boxes) = view.detections().unwrap();
    assert_eq!(image, "data:image/jpeg;base64,FACE");
    let captions: Vec<_> = shared::overlay::layout(boxes)
        .into_iter()
        .map(|glyph| glyph.caption)
        .collect();
    assert_eq!(captions, ["nodule 31.0%", "papule 90.0%"]);
    assert!(!view.is_visible(Panel::Segmentation));
}

#[test]
fn like_round_trip() {
    let mut session = submitted_upload();
    respond(&mut session, r#"{"skin_type":"Dry"}"#);

    let effects = session.apply(Event::Like);
    assert!(matches!(effects.as_slice(), [Effect::SendFeedback(_)]));

    let reply: FeedbackReply = serde_json::from_str(r#"{"message":"Thanks!"}"#).unwrap();
    session.apply(Event::FeedbackSettled(reply.outcome(true)));

    let notice = session.notice().unwrap();
    assert_eq!((notice.text.as_str(), notice.tone), ("Thanks!", Tone::Success));
    let controls = session.feedback().controls();
    assert!(!controls.like && !controls.dislike);
}

#[test]
fn empty_dislike_reason_makes_no_request() {
    let mut session = submitted_upload();
    respond(&mut session, r#"{"skin_type":"Dry"}"#);

    let mut effects = session.apply(Event::Dislike);
    effects.extend(session.apply(Event::SubmitReason));
    assert!(!effects.iter().any(|e| matches!(e, Effect::SendFeedback(_))));
    assert!(session.feedback().controls().reason_visible);
}
