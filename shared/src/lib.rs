pub mod analysis;
pub mod feedback;
pub mod overlay;
pub mod session;
pub mod tips;
pub mod view;

pub use analysis::{AnalysisResult, DetectionBox};
pub use feedback::{FeedbackKind, FeedbackReply, FeedbackRequest, FeedbackState, Tone};
pub use session::{CameraState, Effect, Event, Section, Session, Source, Stage};
pub use tips::{Recommendation, TipSource};
pub use view::{Panel, ResultView};
