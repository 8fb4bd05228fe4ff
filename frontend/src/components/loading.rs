use yew::prelude::*;

pub fn render_loading() -> Html {
    html! {
        <div id="loadingSection" class="loading-section">
            <i class="fa-solid fa-spinner fa-spin fa-2x"></i>
            <p>{"Analyzing your photo..."}</p>
        </div>
    }
}
