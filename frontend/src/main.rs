mod api;
mod camera;
mod components;
mod config;
mod error;
mod overlay;
mod tips;

use camera::CameraSession;
use components::camera_section::render_camera_section;
use components::handlers;
use components::header::render_header;
use components::loading::render_loading;
use components::results::render_results;
use components::upload_section::render_upload_section;
use config::AppConfig;
use error::ClientError;
use gloo_file::callbacks::FileReader;
use gloo_file::{File as GlooFile, FileReadError};
use gloo_timers::callback::Timeout;
use overlay::DetectionOverlay;
use shared::session::Event as SessionEvent;
use shared::{AnalysisResult, Section, Session};
use yew::prelude::*;

// Yew msg components
enum Msg {
    // Consent
    SetUploadConsent(bool),
    SetCameraConsent(bool),

    // Upload form
    FileChosen(Option<GlooFile>),
    PreviewLoaded(Result<String, FileReadError>),
    SubmitUpload,

    // Camera
    StartCamera,
    StopCamera,
    CameraReady(CameraSession),
    CameraFailed(ClientError),
    Capture,

    // Analysis
    AnalysisDone(Result<AnalysisResult, ClientError>),
    StartOver,

    // Feedback
    Like,
    Dislike,
    ReasonInput(String),
    SubmitReason,
    FeedbackDone(Result<Result<String, String>, ClientError>),
}

// Main component
struct Model {
    config: AppConfig,
    session: Session,
    file: Option<GlooFile>,
    preview_reader: Option<FileReader>,
    camera: Option<CameraSession>,
    overlay: Option<DetectionOverlay>,
    overlay_pending: bool,
    scroll_timeout: Option<Timeout>,
    file_input: NodeRef,
    video: NodeRef,
    capture_canvas: NodeRef,
    detection_canvas: NodeRef,
    results_anchor: NodeRef,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let config = AppConfig::from_location();
        log::info!("Tip language: {}", config.language);

        Self {
            config,
            session: Session::new(),
            file: None,
            preview_reader: None,
            camera: None,
            overlay: None,
            overlay_pending: false,
            scroll_timeout: None,
            file_input: NodeRef::default(),
            video: NodeRef::default(),
            capture_canvas: NodeRef::default(),
            detection_canvas: NodeRef::default(),
            results_anchor: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let event = match msg {
            // Consent
            Msg::SetUploadConsent(checked) => SessionEvent::UploadConsent(checked),
            Msg::SetCameraConsent(checked) => SessionEvent::CameraConsent(checked),

            // Upload form
            Msg::FileChosen(None) => SessionEvent::FileCleared,
            Msg::FileChosen(Some(file)) => {
                self.file = Some(file);
                SessionEvent::FileSelected
            }
            Msg::PreviewLoaded(result) => {
                self.preview_reader = None;
                match result {
                    Ok(data_uri) => SessionEvent::PreviewReady(data_uri),
                    Err(e) => {
                        log::warn!("Could not read preview: {}", e);
                        return false;
                    }
                }
            }
            Msg::SubmitUpload => SessionEvent::SubmitUpload,

            // Camera
            Msg::StartCamera => SessionEvent::StartCamera,
            Msg::StopCamera => SessionEvent::StopCamera,
            Msg::CameraReady(stream) => return handlers::handle_camera_ready(self, ctx, stream),
            Msg::CameraFailed(e) => {
                log::error!("Camera access failed: {}", e);
                SessionEvent::CameraFailed(e.to_string())
            }
            Msg::Capture => SessionEvent::Capture,

            // Analysis
            Msg::AnalysisDone(Ok(result)) => handlers::handle_analysis_result(self, result),
            Msg::AnalysisDone(Err(e)) => {
                log::error!("Analysis failed: {}", e);
                SessionEvent::AnalysisFailed(e.alert_text())
            }
            Msg::StartOver => SessionEvent::StartOver,

            // Feedback
            Msg::Like => SessionEvent::Like,
            Msg::Dislike => SessionEvent::Dislike,
            Msg::ReasonInput(text) => SessionEvent::ReasonEdited(text),
            Msg::SubmitReason => SessionEvent::SubmitReason,
            Msg::FeedbackDone(Ok(outcome)) => SessionEvent::FeedbackSettled(outcome),
            Msg::FeedbackDone(Err(e)) => {
                log::error!("Feedback request failed: {}", e);
                SessionEvent::FeedbackNetworkFailed
            }
        };

        self.dispatch(ctx, event)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { render_header() }

                <main class="main-content">
                {
                    match self.session.section() {
                        Section::InputForms => html! {
                            <>
                                { render_upload_section(self, ctx) }
                                <div class="divider"><span>{"or"}</span></div>
                                { render_camera_section(self, ctx) }
                            </>
                        },
                        Section::Loading => render_loading(),
                        Section::Results => render_results(self, ctx),
                    }
                }
                </main>

                <footer class="app-footer">
                    <p>{"Your photo is only used for this analysis."}</p>
                </footer>
            </div>
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if std::mem::take(&mut self.overlay_pending) {
            handlers::draw_detections(self);
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.overlay = None;
        self.scroll_timeout = None;
        self.preview_reader = None;
        if self.camera.take().is_some() {
            log::info!("Camera released on unmount");
        }
    }
}

impl Model {
    /// Feeds one event through the session and carries out its effects.
    fn dispatch(&mut self, ctx: &Context<Self>, event: SessionEvent) -> bool {
        for effect in self.session.apply(event) {
            handlers::run_effect(self, ctx, effect);
        }

        if self.session.results().is_none() {
            self.overlay = None;
            self.scroll_timeout = None;
        }
        true
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
