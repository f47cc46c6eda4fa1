use crate::Model;
use crate::components::utils::render_error_message;
use shared::prediction::{CANDIDATE_LABEL, CONFIRMED_LABEL};
use shared::Verdict;
use yew::prelude::*;

pub fn render_prediction_result(model: &Model) -> Html {
    let error = render_error_message(model.prediction.error());

    let Some(prediction) = model.prediction.result() else {
        return error;
    };

    let verdict_class = match prediction.verdict() {
        Verdict::Candidate => "candidate",
        Verdict::Confirmed => "confirmed",
    };

    html! {
        <div class={classes!("results-container", verdict_class)}>
            <h3>{"📊 Resultados de la Predicción"}</h3>
            <div class="result-grid">
                <div class="result-item">
                    <p class="result-label">{"Clasificación"}</p>
                    <p class="result-value">{ &prediction.predicted_label }</p>
                </div>
                <div class="result-item">
                    <p class="result-label">{"Confianza"}</p>
                    <p class="result-value confidence">{ &prediction.confidence }</p>
                </div>
                <div class="result-item">
                    <p class="result-label">{"Probabilidades"}</p>
                    <div class="probability-row">
                        <span>{ format!("{}:", CANDIDATE_LABEL) }</span>
                        <span class="probability candidate">{ &prediction.probabilities.candidate }</span>
                    </div>
                    <div class="probability-row">
                        <span>{ format!("{}:", CONFIRMED_LABEL) }</span>
                        <span class="probability confirmed">{ &prediction.probabilities.confirmed }</span>
                    </div>
                </div>
            </div>
            <p class="verdict">{ prediction.verdict().message() }</p>
        </div>
    }
}
