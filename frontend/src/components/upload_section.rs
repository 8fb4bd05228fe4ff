use super::super::{Model, Msg};
use super::utils::debounce;
use gloo_file::File as GlooFile;
use web_sys::HtmlInputElement;
use yew::prelude::*;

pub fn render_upload_section(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();

    let handle_change = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let file = input
            .files()
            .and_then(|files| files.item(0))
            .map(GlooFile::from);
        Msg::FileChosen(file)
    });

    let handle_consent = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::SetUploadConsent(input.checked())
    });

    let handle_submit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::SubmitUpload
    });

    let file_input = model.file_input.clone();
    let trigger_file_input = Callback::from(move |_| {
        if let Some(input) = file_input.cast::<web_sys::HtmlElement>() {
            input.click();
        }
    });

    html! {
        <div class="upload-card">
            <h2><i class="fa-solid fa-upload"></i>{" Upload a Photo"}</h2>
            <form id="uploadForm" onsubmit={handle_submit}>
                <input
                    type="file"
                    id="fileInput"
                    name="photo"
                    accept="image/*"
                    style="display: none;"
                    ref={model.file_input.clone()}
                    onchange={handle_change}
                />

                <button
                    type="button"
                    class="analyze-btn"
                    onclick={debounce(300, {
                        let trigger_file_input = trigger_file_input.clone();
                        move || trigger_file_input.emit(())
                    })}
                >
                    <i class="fa-solid fa-image"></i>{" Choose Photo"}
                </button>

                { render_photo_preview(model) }

                <label class="privacy-consent">
                    <input
                        type="checkbox"
                        id="privacyCheckbox"
                        checked={model.session.consent().upload}
                        onchange={handle_consent}
                    />
                    <span>{"I agree that my photo is processed for this analysis."}</span>
                </label>

                <button
                    type="submit"
                    id="analyzeBtn"
                    class="analyze-btn"
                    disabled={!model.session.can_submit_upload()}
                >
                    <i class="fa-solid fa-magnifying-glass"></i>{" Analyze"}
                </button>
            </form>
        </div>
    }
}

fn render_photo_preview(model: &Model) -> Html {
    match model.session.preview() {
        Some(src) => html! {
            <div id="photoPreview" class="photo-preview">
                <img src={src.to_string()} alt="Preview" />
            </div>
        },
        None => html! {},
    }
}
