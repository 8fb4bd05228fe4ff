use super::super::{Model, Msg};
use shared::Tone;
use shared::feedback::FeedbackNotice;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

const SUCCESS_STYLE: &str = "color: #7FB89A; background-color: rgba(168, 213, 186, 0.15); border: 1px solid rgba(168, 213, 186, 0.3);";
const ERROR_STYLE: &str = "color: #C97A7A; background-color: rgba(201, 122, 122, 0.15); border: 1px solid rgba(201, 122, 122, 0.3);";
const NOTICE_LAYOUT: &str = "padding: 16px; border-radius: 12px; font-weight: 500;";

pub fn render_feedback_section(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();
    let state = model.session.feedback();
    let controls = state.controls();

    html! {
        <div id="feedbackSection" class="feedback-section">
            <h3>{"Was this analysis helpful?"}</h3>
            <div class="feedback-buttons">
                <button
                    id="likeBtn"
                    class="feedback-btn"
                    disabled={!controls.like}
                    onclick={link.callback(|_| Msg::Like)}
                >
                    <i class="fa-solid fa-thumbs-up"></i>{" Like"}
                </button>
                <button
                    id="dislikeBtn"
                    class="feedback-btn"
                    disabled={!controls.dislike}
                    onclick={link.callback(|_| Msg::Dislike)}
                >
                    <i class="fa-solid fa-thumbs-down"></i>{" Dislike"}
                </button>
            </div>

            {
                if controls.reason_visible {
                    render_reason_area(model, ctx, controls.submit_reason, state.is_sending())
                } else {
                    html! {}
                }
            }

            { model.session.notice().map(render_notice).unwrap_or_default() }
        </div>
    }
}

fn render_reason_area(model: &Model, ctx: &Context<Model>, can_submit: bool, sending: bool) -> Html {
    let link = ctx.link();
    let handle_input = link.callback(|e: InputEvent| {
        let input: HtmlTextAreaElement = e.target_unchecked_into();
        Msg::ReasonInput(input.value())
    });

    html! {
        <div id="dislikeFeedbackArea" class="dislike-feedback-area">
            <textarea
                id="dislikeReason"
                placeholder="Tell us what could be better..."
                value={model.session.reason().to_string()}
                disabled={sending}
                oninput={handle_input}
            />
            <button
                id="submitDislikeFeedbackBtn"
                class="analyze-btn"
                disabled={!can_submit}
                onclick={link.callback(|_| Msg::SubmitReason)}
            >
                {"Submit Feedback"}
            </button>
        </div>
    }
}

fn render_notice(notice: &FeedbackNotice) -> Html {
    let (class, tone_style) = match notice.tone {
        Tone::Success => ("success", SUCCESS_STYLE),
        Tone::Error => ("error", ERROR_STYLE),
    };

    html! {
        <div
            id="feedbackMessage"
            class={classes!("feedback-message", class)}
            style={format!("{} {}", tone_style, NOTICE_LAYOUT)}
        >
            { notice.text.clone() }
        </div>
    }
}
