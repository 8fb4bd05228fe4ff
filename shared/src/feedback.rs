use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

pub const THANKS: &str = "Thank you for your feedback!";
pub const REJECTED: &str = "Failed to submit feedback.";
pub const NETWORK_FAILURE: &str = "Network error: Could not submit feedback.";
pub const REASON_REQUIRED: &str = "Please provide a reason for your feedback.";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FeedbackKind {
    Like,
    Dislike,
}

/// Body of `POST /submit-feedback/`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FeedbackRequest {
    pub feedback_type: FeedbackKind,
    pub dislike_reason: String,
}

impl FeedbackRequest {
    pub fn like() -> Self {
        Self {
            feedback_type: FeedbackKind::Like,
            dislike_reason: String::new(),
        }
    }

    pub fn dislike(reason: impl Into<String>) -> Self {
        Self {
            feedback_type: FeedbackKind::Dislike,
            dislike_reason: reason.into(),
        }
    }
}

/// Body of the feedback endpoint's reply, success or not.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct FeedbackReply {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl FeedbackReply {
    /// Text to show, keyed on whether the HTTP status was a success.
    pub fn outcome(self, success: bool) -> Result<String, String> {
        if success {
            Ok(self.message.filter(|m| !m.is_empty()).unwrap_or_else(|| THANKS.to_string()))
        } else {
            Err(self.error.filter(|e| !e.is_empty()).unwrap_or_else(|| REJECTED.to_string()))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackNotice {
    pub text: String,
    pub tone: Tone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedbackState {
    #[default]
    Idle,
    AwaitingReason,
    Sending(FeedbackKind),
    Sent(FeedbackKind),
    Failed(FeedbackKind),
}

/// Which feedback controls are interactive, and whether the reason box shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FeedbackControls {
    pub like: bool,
    pub dislike: bool,
    pub submit_reason: bool,
    pub reason_visible: bool,
}

impl FeedbackState {
    pub fn controls(self) -> FeedbackControls {
        match self {
            FeedbackState::Idle | FeedbackState::Failed(FeedbackKind::Like) => FeedbackControls {
                like: true,
                dislike: true,
                ..Default::default()
            },
            FeedbackState::AwaitingReason => FeedbackControls {
                submit_reason: true,
                reason_visible: true,
                ..Default::default()
            },
            FeedbackState::Sending(kind) => FeedbackControls {
                reason_visible: kind == FeedbackKind::Dislike,
                ..Default::default()
            },
            FeedbackState::Failed(FeedbackKind::Dislike) => FeedbackControls {
                dislike: true,
                submit_reason: true,
                ..Default::default()
            },
            FeedbackState::Sent(_) => FeedbackControls::default(),
        }
    }

    pub fn can_like(self) -> bool {
        self.controls().like
    }

    pub fn can_dislike(self) -> bool {
        self.controls().dislike
    }

    pub fn is_sending(self) -> bool {
        matches!(self, FeedbackState::Sending(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_wire_format() {
        let body = serde_json::to_value(FeedbackRequest::dislike("too dark")).unwrap();
        assert_eq!(body["feedback_type"], "dislike");
        assert_eq!(body["dislike_reason"], "too dark");

        let body = serde_json::to_value(FeedbackRequest::like()).unwrap();
        assert_eq!(body["feedback_type"], "like");
        assert_eq!(body["dislike_reason"], "");
    }

    #[test]
    fn reply_defaults() {
        assert_eq!(FeedbackReply::default().outcome(true), Ok(THANKS.to_string()));
        assert_eq!(FeedbackReply::default().outcome(false), Err(REJECTED.to_string()));

        let reply: FeedbackReply = serde_json::from_str(r#"{"message":"Thanks!"}"#).unwrap();
        assert_eq!(reply.outcome(true), Ok("Thanks!".to_string()));

        let reply: FeedbackReply =
            serde_json::from_str(r#"{"error":"Dislike reason is required"}"#).unwrap();
        assert_eq!(reply.outcome(false), Err("Dislike reason is required".to_string()));
    }

    #[test]
    fn controls_per_state() {
        let idle = FeedbackState::Idle.controls();
        assert!(idle.like && idle.dislike && !idle.submit_reason && !idle.reason_visible);

        let awaiting = FeedbackState::AwaitingReason.controls();
        assert!(!awaiting.like && !awaiting.dislike && awaiting.submit_reason);
        assert!(awaiting.reason_visible);

        for kind in [FeedbackKind::Like, FeedbackKind::Dislike] {
            let sending = FeedbackState::Sending(kind).controls();
            assert!(!sending.like && !sending.dislike && !sending.submit_reason);
            assert_eq!(FeedbackState::Sent(kind).controls(), FeedbackControls::default());
        }

        let failed_like = FeedbackState::Failed(FeedbackKind::Like).controls();
        assert!(failed_like.like && failed_like.dislike);

        let failed_dislike = FeedbackState::Failed(FeedbackKind::Dislike).controls();
        assert!(!failed_dislike.like && failed_dislike.dislike && failed_dislike.submit_reason);
        assert!(!failed_dislike.reason_visible);
    }

    #[test]
    fn kind_names() {
        assert_eq!(FeedbackKind::Dislike.to_string(), "dislike");
        assert_eq!(FeedbackKind::Like.as_ref(), "like");
    }
}
