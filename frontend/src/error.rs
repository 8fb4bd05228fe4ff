use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("{0}")]
    Network(#[from] gloo_net::Error),

    /// The backend answered with an `error` field.
    #[error("{0}")]
    Rejected(String),

    #[error("Server error: {0}")]
    Status(u16),

    #[error("{0}")]
    Js(String),

    #[error("{0} is not available in this browser")]
    Unsupported(&'static str),
}

impl ClientError {
    /// Text for the blocking alert shown when an analysis attempt fails.
    pub fn alert_text(&self) -> String {
        match self {
            ClientError::Rejected(message) => format!("Error: {}", message),
            other => format!("Something went wrong: {}", other),
        }
    }
}

impl From<JsValue> for ClientError {
    fn from(value: JsValue) -> Self {
        let message = value
            .dyn_ref::<js_sys::Error>()
            .map(|err| String::from(err.message()))
            .or_else(|| value.as_string())
            .unwrap_or_else(|| format!("{:?}", value));
        ClientError::Js(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_text_prefixes() {
        assert_eq!(
            ClientError::Rejected("No face detected".into()).alert_text(),
            "Error: No face detected"
        );
        assert_eq!(
            ClientError::Status(502).alert_text(),
            "Something went wrong: Server error: 502"
        );
        assert_eq!(
            ClientError::Unsupported("Camera").alert_text(),
            "Something went wrong: Camera is not available in this browser"
        );
    }
}
