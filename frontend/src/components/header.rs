use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1>{"🪐 Predictor de Exoplanetas Habitables"}</h1>
            <p class="subtitle">{"Descubre si un exoplaneta es candidato a ser habitable"}</p>
        </header>
    }
}
