//! The page's UI state machine.
//!
//! [`Session::apply`] is the only place state changes. It never touches the
//! browser; it returns [`Effect`]s for the frontend to carry out and the
//! frontend reports back with further [`Event`]s.

use crate::feedback::{
    FeedbackNotice, FeedbackRequest, FeedbackState, Tone, NETWORK_FAILURE,
    REASON_REQUIRED,
};
use crate::view::ResultView;
use strum::{Display, IntoStaticStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Source {
    Upload,
    Camera,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Stage {
    #[default]
    Input,
    Loading(Source),
    Results(Box<ResultView>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum CameraState {
    #[default]
    Off,
    Starting,
    On,
    Capturing,
}

impl CameraState {
    /// Whether a stream is (or is about to be) held.
    pub fn holds_stream(self) -> bool {
        self != CameraState::Off
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Consent {
    pub upload: bool,
    pub camera: bool,
}

#[derive(Debug, Clone, PartialEq, IntoStaticStr)]
pub enum Event {
    UploadConsent(bool),
    CameraConsent(bool),
    FileSelected,
    /// The file dialog closed without a file.
    FileCleared,
    PreviewReady(String),
    SubmitUpload,

    StartCamera,
    CameraStarted,
    CameraFailed(String),
    StopCamera,
    Capture,
    FrameCaptured(String),
    CaptureFailed(String),

    AnalysisSucceeded(Box<ResultView>),
    /// Carries the full alert text.
    AnalysisFailed(String),
    StartOver,

    Like,
    Dislike,
    ReasonEdited(String),
    SubmitReason,
    /// `Ok(message)` or `Err(message)` from the feedback endpoint.
    FeedbackSettled(Result<String, String>),
    FeedbackNetworkFailed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    ReadPreview,
    ClearFileInput,
    SendUpload,
    AcquireCamera,
    ReleaseCamera,
    CaptureFrame,
    SendCapture(String),
    Alert(String),
    /// Paint overlays and scroll the results into view.
    ShowResults,
    SendFeedback(FeedbackRequest),
}

/// Which of the three mutually exclusive page sections is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Section {
    InputForms,
    Loading,
    Results,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    stage: Stage,
    camera: CameraState,
    consent: Consent,
    preview: Option<String>,
    feedback: FeedbackState,
    notice: Option<FeedbackNotice>,
    reason: String,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn section(&self) -> Section {
        match self.stage {
            Stage::Input => Section::InputForms,
            Stage::Loading(_) => Section::Loading,
            Stage::Results(_) => Section::Results,
        }
    }

    pub fn results(&self) -> Option<&ResultView> {
        match &self.stage {
            Stage::Results(view) => Some(view),
            _ => None,
        }
    }

    pub fn camera(&self) -> CameraState {
        self.camera
    }

    pub fn consent(&self) -> Consent {
        self.consent
    }

    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    pub fn feedback(&self) -> FeedbackState {
        self.feedback
    }

    pub fn notice(&self) -> Option<&FeedbackNotice> {
        self.notice.as_ref()
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn can_submit_upload(&self) -> bool {
        self.stage == Stage::Input && self.consent.upload
    }

    pub fn can_capture(&self) -> bool {
        self.stage == Stage::Input && self.camera == CameraState::On && self.consent.camera
    }

    pub fn apply(&mut self, event: Event) -> Vec<Effect> {
        let label: &'static str = (&event).into();
        let effects = self.transition(event);
        if let Some(effects) = &effects {
            log::trace!("{} -> {:?}", label, effects);
        } else {
            log::debug!(
                "ignoring {} in section {}, camera {}",
                label,
                self.section(),
                self.camera
            );
        }
        effects.unwrap_or_default()
    }

    /// `None` means the event is not legal in the current state.
    fn transition(&mut self, event: Event) -> Option<Vec<Effect>> {
        let in_input = self.stage == Stage::Input;

        match event {
            Event::UploadConsent(checked) if in_input => {
                self.consent.upload = checked;
                Some(vec![])
            }
            Event::CameraConsent(checked) if in_input => {
                self.consent.camera = checked;
                Some(vec![])
            }
            Event::FileSelected if in_input => {
                self.preview = None;
                Some(vec![Effect::ReadPreview])
            }
            Event::FileCleared if in_input => {
                self.preview = None;
                Some(vec![Effect::ClearFileInput])
            }
            Event::PreviewReady(data_uri) if in_input => {
                self.preview = Some(data_uri);
                Some(vec![])
            }
            Event::SubmitUpload if self.can_submit_upload() => {
                self.stage = Stage::Loading(Source::Upload);
                Some(vec![Effect::SendUpload])
            }

            Event::StartCamera if in_input && self.camera == CameraState::Off => {
                self.camera = CameraState::Starting;
                Some(vec![Effect::AcquireCamera])
            }
            Event::CameraStarted if self.camera == CameraState::Starting => {
                self.camera = CameraState::On;
                Some(vec![])
            }
            Event::CameraFailed(message) if self.camera == CameraState::Starting => {
                let alert = format!("Could not access camera: {}", message);
                if in_input {
                    return Some(self.fail(alert));
                }
                // A submission is in flight and owns the session.
                self.camera = CameraState::Off;
                Some(vec![Effect::Alert(alert), Effect::ReleaseCamera])
            }
            Event::StopCamera if self.camera == CameraState::On => {
                self.camera = CameraState::Off;
                Some(vec![Effect::ReleaseCamera])
            }
            Event::Capture if self.can_capture() => {
                self.camera = CameraState::Capturing;
                Some(vec![Effect::CaptureFrame])
            }
            Event::FrameCaptured(data_uri) if in_input && self.camera == CameraState::Capturing => {
                self.stage = Stage::Loading(Source::Camera);
                Some(vec![Effect::SendCapture(data_uri)])
            }
            Event::CaptureFailed(message) if self.camera == CameraState::Capturing => {
                Some(self.fail(format!("Something went wrong: {}", message)))
            }

            Event::AnalysisSucceeded(view) => {
                let Stage::Loading(source) = self.stage else {
                    return None;
                };
                self.stage = Stage::Results(view);
                self.reset_feedback();

                let mut effects = vec![];
                if source == Source::Camera {
                    self.camera = CameraState::Off;
                    effects.push(Effect::ReleaseCamera);
                }
                effects.push(Effect::ShowResults);
                Some(effects)
            }
            Event::AnalysisFailed(alert) if matches!(self.stage, Stage::Loading(_)) => {
                Some(self.fail(alert))
            }
            Event::StartOver if matches!(self.stage, Stage::Results(_)) => Some(self.reset()),

            Event::Like if self.has_results() && self.feedback.can_like() => {
                Some(self.send_feedback(FeedbackRequest::like()))
            }
            Event::Dislike if self.has_results() && self.feedback.can_dislike() => {
                self.feedback = FeedbackState::AwaitingReason;
                self.notice = None;
                Some(vec![])
            }
            Event::ReasonEdited(text) if self.feedback == FeedbackState::AwaitingReason => {
                self.reason = text;
                Some(vec![])
            }
            Event::SubmitReason if self.feedback == FeedbackState::AwaitingReason => {
                let reason = self.reason.trim();
                if reason.is_empty() {
                    return Some(vec![Effect::Alert(REASON_REQUIRED.to_string())]);
                }
                let request = FeedbackRequest::dislike(reason);
                Some(self.send_feedback(request))
            }
            Event::FeedbackSettled(outcome) if self.feedback.is_sending() => {
                let (text, tone) = match outcome {
                    Ok(text) => (text, Tone::Success),
                    Err(text) => (text, Tone::Error),
                };
                Some(self.settle_feedback(text, tone))
            }
            Event::FeedbackNetworkFailed if self.feedback.is_sending() => {
                Some(self.settle_feedback(NETWORK_FAILURE.to_string(), Tone::Error))
            }

            _ => None,
        }
    }

    fn has_results(&self) -> bool {
        matches!(self.stage, Stage::Results(_))
    }

    fn send_feedback(&mut self, request: FeedbackRequest) -> Vec<Effect> {
        self.feedback = FeedbackState::Sending(request.feedback_type);
        self.notice = None;
        vec![Effect::SendFeedback(request)]
    }

    fn settle_feedback(&mut self, text: String, tone: Tone) -> Vec<Effect> {
        let FeedbackState::Sending(kind) = self.feedback else {
            return vec![];
        };
        self.feedback = match tone {
            Tone::Success => FeedbackState::Sent(kind),
            Tone::Error => FeedbackState::Failed(kind),
        };
        self.notice = Some(FeedbackNotice { text, tone });
        self.reason.clear();
        vec![]
    }

    fn reset_feedback(&mut self) {
        self.feedback = FeedbackState::Idle;
        self.notice = None;
        self.reason.clear();
    }

    fn fail(&mut self, alert: String) -> Vec<Effect> {
        let mut effects = vec![Effect::Alert(alert)];
        effects.extend(self.reset());
        effects
    }

    /// Back to the initial input state, releasing the camera if held.
    fn reset(&mut self) -> Vec<Effect> {
        let held = self.camera.holds_stream();
        *self = Session::default();

        let mut effects = vec![];
        if held {
            effects.push(Effect::ReleaseCamera);
        }
        effects.push(Effect::ClearFileInput);
        effects
    }
}
