use crate::config::AppConfig;
use crate::error::ClientError;
use gloo_file::File as GlooFile;
use gloo_net::http::Request;
use shared::{AnalysisResult, FeedbackReply, FeedbackRequest};
use web_sys::FormData;

const PHOTO_FIELD: &str = "photo";
const UPLOAD_CONSENT_FIELD: &str = "privacy_consent";
const CAMERA_CONSENT_FIELD: &str = "camera_privacy_consent";

/// Multipart body for the upload form. The file is optional; the backend
/// reports a missing photo itself.
pub fn upload_form(file: Option<&GlooFile>) -> Result<FormData, ClientError> {
    let form = FormData::new()?;
    if let Some(file) = file {
        form.append_with_blob_and_filename(PHOTO_FIELD, file.as_ref(), &file.name())?;
    }
    form.append_with_str(UPLOAD_CONSENT_FIELD, "on")?;
    Ok(form)
}

/// Multipart body for a camera snapshot encoded as a data URI.
pub fn capture_form(data_uri: &str) -> Result<FormData, ClientError> {
    let form = FormData::new()?;
    form.append_with_str(PHOTO_FIELD, data_uri)?;
    form.append_with_str(CAMERA_CONSENT_FIELD, "on")?;
    Ok(form)
}

/// Posts a photo for analysis. The JSON body is read whatever the status,
/// since the backend explains failures in an `error` field.
pub async fn analyze(config: &AppConfig, form: FormData) -> Result<AnalysisResult, ClientError> {
    let response = Request::post(&config.upload_url)
        .header("X-Requested-With", "XMLHttpRequest")
        .body(form)?
        .send()
        .await?;

    let status = response.status();
    let ok = response.ok();
    let result = response.json::<AnalysisResult>().await?.into_outcome();

    match result {
        Ok(_) if !ok => Err(ClientError::Status(status)),
        Ok(result) => Ok(result),
        Err(message) => Err(ClientError::Rejected(message)),
    }
}

/// Sends like/dislike feedback. `Ok`/`Err` carry the text to show the user.
pub async fn send_feedback(
    config: &AppConfig,
    request: &FeedbackRequest,
) -> Result<Result<String, String>, ClientError> {
    let response = Request::post(&config.feedback_url)
        .json(request)?
        .send()
        .await?;

    let ok = response.ok();
    let reply = response.json::<FeedbackReply>().await?;
    Ok(reply.outcome(ok))
}
