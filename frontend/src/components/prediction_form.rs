use crate::{Model, Msg};
use shared::{FeatureField, FieldGroup, Phase};
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

pub fn render_prediction_form(model: &Model, link: &Scope<Model>) -> Html {
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::SubmitPrediction
    });

    html! {
        <form class="prediction-form" {onsubmit}>
            { render_group(model, link, FieldGroup::Required) }

            <div class="advanced-section">
                <button
                    type="button"
                    class="advanced-toggle"
                    onclick={link.callback(|_| Msg::ToggleAdvanced)}
                >
                    <span>{"🔬 Parámetros Opcionales Recomendados (Mejoran la Precisión)"}</span>
                    <span class="toggle-sign">{ if model.show_advanced { "−" } else { "+" } }</span>
                </button>
                {
                    if model.show_advanced {
                        html! {
                            <div class="advanced-fields">
                                { render_group(model, link, FieldGroup::SignalQuality) }
                                { render_group(model, link, FieldGroup::Coordinates) }
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>

            <div class="submit-row">
                <button type="submit" class="submit-button">
                    {
                        match model.prediction.phase() {
                            Phase::Loading => "Analizando...",
                            Phase::Error => "🔁 Reintentar Predicción",
                            Phase::Idle | Phase::Success => "🚀 Realizar Predicción",
                        }
                    }
                </button>
            </div>
        </form>
    }
}

fn render_group(model: &Model, link: &Scope<Model>, group: FieldGroup) -> Html {
    html! {
        <div class="field-group">
            <h2>{ group.heading() }</h2>
            <div class="field-grid">
                { for FeatureField::in_group(group).map(|field| render_field(model, link, field)) }
            </div>
        </div>
    }
}

fn render_field(model: &Model, link: &Scope<Model>, field: FeatureField) -> Html {
    let oninput = link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::FieldChanged(field, input.value())
    });

    let label = if field.is_required() {
        format!("{} *", field.label())
    } else {
        field.label().to_string()
    };
    let (step, min, max) = if field.is_binary_flag() {
        ("1", Some("0"), Some("1"))
    } else {
        ("any", None, None)
    };

    html! {
        <div class="form-field">
            <label for={field.key()}>{ label }</label>
            <input
                type="number"
                {step}
                {min}
                {max}
                id={field.key()}
                name={field.key()}
                value={model.form.get(field).to_string()}
                placeholder={field.placeholder()}
                required={field.is_required()}
                {oninput}
            />
        </div>
    }
}
