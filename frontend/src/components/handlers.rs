use super::super::{Model, Msg};
use super::utils::alert;
use crate::api;
use crate::camera::{self, CameraSession};
use crate::error::ClientError;
use crate::overlay::DetectionOverlay;
use crate::tips::WindowTips;
use gloo_timers::callback::Timeout;
use shared::session::Event as SessionEvent;
use shared::{AnalysisResult, CameraState, Effect, FeedbackRequest, Recommendation, ResultView};
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Element, FormData, HtmlCanvasElement, HtmlInputElement, HtmlVideoElement, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition,
};
use yew::prelude::*;

pub fn run_effect(model: &mut Model, ctx: &Context<Model>, effect: Effect) {
    match effect {
        Effect::ReadPreview => read_preview(model, ctx),
        Effect::ClearFileInput => clear_file_input(model),
        Effect::SendUpload => {
            let form = api::upload_form(model.file.as_ref());
            send_analysis_request(model, ctx, form);
        }
        Effect::AcquireCamera => acquire_camera(model, ctx),
        Effect::ReleaseCamera => release_camera(model),
        Effect::CaptureFrame => capture_frame(model, ctx),
        Effect::SendCapture(data_uri) => {
            let form = api::capture_form(&data_uri);
            send_analysis_request(model, ctx, form);
        }
        Effect::Alert(text) => alert(&text),
        Effect::ShowResults => show_results(model),
        Effect::SendFeedback(request) => send_feedback_request(model, ctx, request),
    }
}

pub fn handle_analysis_result(model: &Model, result: AnalysisResult) -> SessionEvent {
    let recommendation =
        Recommendation::resolve(Some(&WindowTips), &result, &model.config.language);
    SessionEvent::AnalysisSucceeded(Box::new(ResultView::new(&result, recommendation)))
}

pub fn handle_camera_ready(model: &mut Model, ctx: &Context<Model>, stream: CameraSession) -> bool {
    model.dispatch(ctx, SessionEvent::CameraStarted);

    if model.session.camera() != CameraState::On {
        log::warn!("Dropping camera stream that arrived after the camera was abandoned");
        return false;
    }

    match model.video.cast::<HtmlVideoElement>() {
        Some(video) => stream.attach(&video),
        None => log::warn!("Video element is not mounted"),
    }
    model.camera = Some(stream);
    true
}

pub fn draw_detections(model: &mut Model) {
    let detections = model.session.results().and_then(|view| view.detections());
    let canvas = model.detection_canvas.cast::<HtmlCanvasElement>();

    model.overlay = match (detections, canvas) {
        (Some((source, boxes)), Some(canvas)) => {
            match DetectionOverlay::start(canvas, source, boxes.to_vec()) {
                Ok(overlay) => Some(overlay),
                Err(e) => {
                    log::error!("Could not start detection overlay: {}", e);
                    None
                }
            }
        }
        _ => None,
    };
}

fn read_preview(model: &mut Model, ctx: &Context<Model>) {
    let Some(file) = model.file.as_ref() else {
        return;
    };

    let link = ctx.link().clone();
    let reader = gloo_file::callbacks::read_as_data_url(file, move |result| {
        link.send_message(Msg::PreviewLoaded(result));
    });
    model.preview_reader = Some(reader);
}

fn clear_file_input(model: &mut Model) {
    model.file = None;
    model.preview_reader = None;
    if let Some(input) = model.file_input.cast::<HtmlInputElement>() {
        input.set_value("");
    }
}

fn acquire_camera(model: &Model, ctx: &Context<Model>) {
    let link = ctx.link().clone();
    let config = model.config.clone();

    spawn_local(async move {
        match CameraSession::acquire(&config).await {
            Ok(stream) => link.send_message(Msg::CameraReady(stream)),
            Err(e) => link.send_message(Msg::CameraFailed(e)),
        }
    });
}

fn release_camera(model: &mut Model) {
    if model.camera.take().is_some() {
        if let Some(video) = model.video.cast::<HtmlVideoElement>() {
            video.set_src_object(None);
        }
    }
}

fn capture_frame(model: &mut Model, ctx: &Context<Model>) {
    let video = model.video.cast::<HtmlVideoElement>();
    let canvas = model.capture_canvas.cast::<HtmlCanvasElement>();

    let event = match (video, canvas) {
        (Some(video), Some(canvas)) => {
            match camera::capture_frame(&video, &canvas, &model.config) {
                Ok(data_uri) => SessionEvent::FrameCaptured(data_uri),
                Err(e) => SessionEvent::CaptureFailed(e.to_string()),
            }
        }
        _ => SessionEvent::CaptureFailed("camera preview is not mounted".to_string()),
    };

    model.dispatch(ctx, event);
}

fn send_analysis_request(model: &Model, ctx: &Context<Model>, form: Result<FormData, ClientError>) {
    let link = ctx.link().clone();

    let form = match form {
        Ok(form) => form,
        Err(e) => {
            link.send_message(Msg::AnalysisDone(Err(e)));
            return;
        }
    };

    let config = model.config.clone();
    spawn_local(async move {
        let result = api::analyze(&config, form).await;
        link.send_message(Msg::AnalysisDone(result));
    });
}

fn show_results(model: &mut Model) {
    model.overlay_pending = true;

    let anchor = model.results_anchor.clone();
    let timeout = Timeout::new(model.config.scroll_delay_ms, move || {
        if let Some(element) = anchor.cast::<Element>() {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    });
    model.scroll_timeout = Some(timeout);
}

fn send_feedback_request(model: &Model, ctx: &Context<Model>, request: FeedbackRequest) {
    let link = ctx.link().clone();
    let config = model.config.clone();

    spawn_local(async move {
        log::info!("Sending {} feedback", request.feedback_type);
        let outcome = api::send_feedback(&config, &request).await;
        link.send_message(Msg::FeedbackDone(outcome));
    });
}
