use crate::config::AppConfig;
use crate::error::ClientError;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    CanvasRenderingContext2d, HtmlCanvasElement, HtmlVideoElement, MediaStream,
    MediaStreamConstraints, MediaStreamTrack,
};

/// Exclusive handle on the live camera stream.
///
/// Dropping it stops every track, so holding at most one `CameraSession`
/// keeps at most one stream alive.
pub struct CameraSession {
    stream: MediaStream,
}

impl CameraSession {
    pub async fn acquire(config: &AppConfig) -> Result<Self, ClientError> {
        let window = web_sys::window().ok_or(ClientError::Unsupported("Window"))?;
        let devices = window
            .navigator()
            .media_devices()
            .map_err(|_| ClientError::Unsupported("Camera"))?;

        let video = js_sys::JSON::parse(&config.video_constraints().to_string())?;
        let constraints = MediaStreamConstraints::new();
        constraints.set_video(&video);

        let promise = devices.get_user_media_with_constraints(&constraints)?;
        let stream = JsFuture::from(promise).await?.dyn_into::<MediaStream>()?;
        log::info!("Camera stream acquired");
        Ok(Self { stream })
    }

    pub fn attach(&self, video: &HtmlVideoElement) {
        video.set_src_object(Some(&self.stream));
    }
}

impl Drop for CameraSession {
    fn drop(&mut self) {
        for track in self.stream.get_tracks().iter() {
            if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
                track.stop();
            }
        }
        log::info!("Camera stream released");
    }
}

/// Snapshots the current video frame at its native size and encodes it.
pub fn capture_frame(
    video: &HtmlVideoElement,
    canvas: &HtmlCanvasElement,
    config: &AppConfig,
) -> Result<String, ClientError> {
    let (width, height) = (video.video_width(), video.video_height());
    canvas.set_width(width);
    canvas.set_height(height);

    let context = canvas
        .get_context("2d")?
        .ok_or(ClientError::Unsupported("Canvas 2D"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(JsValue::from)?;
    context.draw_image_with_html_video_element_and_dw_and_dh(
        video,
        0.0,
        0.0,
        width as f64,
        height as f64,
    )?;

    let data_uri = canvas.to_data_url_with_type_and_encoder_options(
        &config.capture_mime,
        &JsValue::from_f64(config.capture_quality),
    )?;
    Ok(data_uri)
}
