use super::super::{Model, Msg};
use super::feedback::render_feedback_section;
use super::utils::bar_width;
use shared::view::{AcneMeter, FacePanel, ProbabilityBar};
use yew::prelude::*;

pub fn render_results(model: &Model, ctx: &Context<Model>) -> Html {
    let Some(view) = model.session.results() else {
        return html! {};
    };

    html! {
        <>
            <div id="ajaxResults" class="results-container active" ref={model.results_anchor.clone()}>
                <div class="result-header">
                    <h2><i class="fa-solid fa-droplet"></i>{" Skin Type"}</h2>
                    <p id="skinType" class="skin-type">{ view.skin_type.clone() }</p>
                    {
                        for [&view.left_eye, &view.right_eye]
                            .into_iter()
                            .flatten()
                            .map(|eye| html! { <p class="eye-color">{ eye.clone() }</p> })
                    }
                    <p id="acneLevel" class="acne-level">{ view.acne_level.clone() }</p>
                    {
                        match &view.acne_summary {
                            Some(summary) => html! { <p id="acneConfidence">{ summary.clone() }</p> },
                            None => html! {},
                        }
                    }
                </div>

                { view.face.as_ref().map(|face| render_face_panel(model, face)).unwrap_or_default() }
                { view.type_probs.as_deref().map(render_type_probs).unwrap_or_default() }
                { view.acne.as_ref().map(render_acne_meter).unwrap_or_default() }

                <div class="detailed-results">
                    <h3>{"Recommendations"}</h3>
                    <p id="recommendationText" style="white-space: pre-line;">
                        { view.recommendation.text() }
                    </p>
                </div>

                <button class="analyze-btn" onclick={ctx.link().callback(|_| Msg::StartOver)}>
                    <i class="fa-solid fa-rotate-left"></i>{" Analyze Another Photo"}
                </button>
            </div>

            { render_feedback_section(model, ctx) }
        </>
    }
}

fn render_face_panel(model: &Model, face: &FacePanel) -> Html {
    html! {
        <div id="croppedFaceSection" class="detailed-results">
            <h3>{"Detected Face"}</h3>
            <img id="croppedFaceImage" src={face.image.clone()} alt="Cropped face" />
            {
                match &face.segmentation {
                    Some(overlay) => html! {
                        <div id="segmentationSection">
                            <h3>{"Skin Segmentation"}</h3>
                            <img id="segmentedImage" src={overlay.clone()} alt="Segmentation overlay" />
                        </div>
                    },
                    None => html! {},
                }
            }
            {
                if face.detections.is_some() {
                    html! {
                        <div id="yoloDetectionSection">
                            <h3>{"Acne Detection"}</h3>
                            <canvas id="yoloCanvas" ref={model.detection_canvas.clone()}></canvas>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn render_type_probs(bars: &[ProbabilityBar]) -> Html {
    html! {
        <div id="typeProbsSection" class="detailed-results">
            <h3>{"Skin Type Probabilities"}</h3>
            <div id="typeProbsBars" class="result-bars">
                { for bars.iter().map(|bar| html! {
                    <div class="prob-bar-wrapper">
                        <div class="prob-bar-info">
                            <span class="prob-bar-label">{ bar.label }</span>
                            <span class="prob-bar-value">{ bar.value_text.clone() }</span>
                        </div>
                        <div class="prob-bar">
                            <div
                                class="prob-bar-fill"
                                style={format!("{}; background-color: {};", bar_width(bar.fill_percent), bar.color)}
                            ></div>
                        </div>
                    </div>
                })}
            </div>
        </div>
    }
}

fn render_acne_meter(acne: &AcneMeter) -> Html {
    html! {
        <div id="acneAnalysisSection" class="detailed-results">
            <h3>{"Acne Analysis"}</h3>
            <div class="confidence-meter">
                <div class="meter">
                    <div id="acneConfidenceFill" class="meter-fill" style={bar_width(acne.fill_percent)}></div>
                </div>
                <div id="acneConfidenceText" class="meter-value">{ acne.caption.clone() }</div>
            </div>
        </div>
    }
}
