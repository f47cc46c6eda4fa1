use crate::components::utils::render_error_message;
use crate::{Model, Msg};
use shared::{Phase, StarAnalysis};
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

pub fn render_star_analysis(model: &Model, link: &Scope<Model>) -> Html {
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::AnalyzeStar
    });
    let oninput = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::StarIdChanged(input.value())
    });

    html! {
        <div class="star-analysis">
            <h2>{"🔭 Curva de Luz de una Estrella"}</h2>
            <form class="star-form" {onsubmit}>
                <label for="star_id">{"ID de la estrella"}</label>
                <input
                    type="text"
                    id="star_id"
                    name="star_id"
                    value={model.star_id.clone()}
                    placeholder="KIC 10797460"
                    {oninput}
                />
                <button type="submit" class="submit-button">
                    {
                        match model.analysis.phase() {
                            Phase::Loading => "Buscando...",
                            Phase::Error => "Reintentar",
                            Phase::Idle | Phase::Success => "Analizar estrella",
                        }
                    }
                </button>
            </form>
            { render_error_message(model.analysis.error()) }
            { model.analysis.result().map(render_analysis).unwrap_or_default() }
        </div>
    }
}

fn render_analysis(analysis: &StarAnalysis) -> Html {
    html! {
        <div class="analysis-result">
            <h3>{ format!("Estrella {}", analysis.star_id) }</h3>
            <p class="analysis-message">{ &analysis.message }</p>
            <img
                class="light-curve"
                src={analysis.image_url.clone()}
                alt={format!("Curva de luz de {}", analysis.star_id)}
            />
            <table class="transit-parameters">
                { for analysis.parameters.rows().into_iter().map(|(label, value)| html! {
                    <tr>
                        <th>{ label }</th>
                        <td>{ value }</td>
                    </tr>
                }) }
            </table>
        </div>
    }
}
