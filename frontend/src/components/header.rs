use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1><i class="fa-solid fa-face-smile"></i> {" Skin Analysis"}</h1>
            <p class="subtitle">{"Upload a photo or take one with your camera"}</p>
        </header>
    }
}
