use super::super::{Model, Msg};
use super::utils::hidden_unless;
use shared::CameraState;
use web_sys::HtmlInputElement;
use yew::prelude::*;

pub fn render_camera_section(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();
    let camera = model.session.camera();
    let streaming = matches!(camera, CameraState::On | CameraState::Capturing);

    let handle_consent = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::SetCameraConsent(input.checked())
    });

    html! {
        <div class="camera-card">
            <h2><i class="fa-solid fa-camera"></i>{" Take a Photo"}</h2>

            { render_toggle_button(camera, ctx) }

            <div class="video-container" style={hidden_unless(streaming)}>
                <video id="video" ref={model.video.clone()} autoplay=true playsinline=true></video>
            </div>
            <canvas id="canvas" ref={model.capture_canvas.clone()} style="display: none;"></canvas>

            <label class="privacy-consent">
                <input
                    type="checkbox"
                    id="cameraPrivacyCheckbox"
                    checked={model.session.consent().camera}
                    onchange={handle_consent}
                />
                <span>{"I agree that my photo is processed for this analysis."}</span>
            </label>

            <button
                id="captureBtn"
                class="analyze-btn"
                disabled={!model.session.can_capture()}
                onclick={link.callback(|_| Msg::Capture)}
            >
                {
                    if camera == CameraState::Capturing {
                        html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Processing..."}</> }
                    } else {
                        html! { <><i class="fa-solid fa-camera"></i>{" Capture Photo"}</> }
                    }
                }
            </button>
        </div>
    }
}

fn render_toggle_button(camera: CameraState, ctx: &Context<Model>) -> Html {
    let link = ctx.link();

    match camera {
        CameraState::Off => html! {
            <button id="startCameraBtn" class="analyze-btn" onclick={link.callback(|_| Msg::StartCamera)}>
                <i class="fa-solid fa-video"></i>{" Start Camera"}
            </button>
        },
        CameraState::Starting => html! {
            <button id="startCameraBtn" class="analyze-btn" disabled=true>
                <i class="fa-solid fa-spinner fa-spin"></i>{" Starting Camera..."}
            </button>
        },
        CameraState::On | CameraState::Capturing => html! {
            <button
                id="startCameraBtn"
                class="analyze-btn"
                disabled={camera == CameraState::Capturing}
                onclick={link.callback(|_| Msg::StopCamera)}
            >
                <i class="fa-solid fa-stop"></i>{" Stop Camera"}
            </button>
        },
    }
}
