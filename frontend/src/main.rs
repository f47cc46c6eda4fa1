mod api;
mod components;

use gloo_console::error;
use shared::analysis::normalize_star_id;
use shared::api::{ANALYZE_UI_ERROR, PREDICT_UI_ERROR, STAR_ID_REQUIRED};
use shared::{ActionState, FeatureField, FeatureForm, PredictionResponse, StarAnalysis};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use components::header::render_header;
use components::prediction_form::render_prediction_form;
use components::results::render_prediction_result;
use components::star_analysis::render_star_analysis;

// Yew msg components
pub enum Msg {
    // Prediction form
    FieldChanged(FeatureField, String),
    ToggleAdvanced,
    SubmitPrediction,
    PredictionSettled(Result<PredictionResponse, String>),

    // Star analysis
    StarIdChanged(String),
    AnalyzeStar,
    AnalysisSettled(Result<StarAnalysis, String>),
}

// Main component. The two actions keep separate state and never wait on
// each other.
pub struct Model {
    pub form: FeatureForm,
    pub show_advanced: bool,
    pub prediction: ActionState<PredictionResponse>,
    pub star_id: String,
    pub analysis: ActionState<StarAnalysis>,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: FeatureForm::default(),
            show_advanced: false,
            prediction: ActionState::default(),
            star_id: String::new(),
            analysis: ActionState::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            // Prediction form
            Msg::FieldChanged(field, value) => {
                self.form.set(field, value);
                true
            }
            Msg::ToggleAdvanced => {
                self.show_advanced = !self.show_advanced;
                true
            }
            Msg::SubmitPrediction => self.handle_submit_prediction(ctx),
            Msg::PredictionSettled(outcome) => {
                self.prediction.resolve(outcome);
                true
            }

            // Star analysis
            Msg::StarIdChanged(star_id) => {
                self.star_id = star_id;
                true
            }
            Msg::AnalyzeStar => self.handle_analyze_star(ctx),
            Msg::AnalysisSettled(outcome) => {
                self.analysis.resolve(outcome);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { render_header() }

                <main class="main-content">
                    <section class="card">
                        { render_prediction_form(self, ctx.link()) }
                        { render_prediction_result(self) }
                    </section>
                    <section class="card">
                        { render_star_analysis(self, ctx.link()) }
                    </section>
                </main>

                <footer class="app-footer">
                    <p>{"Powered by Machine Learning | API Open Source"}</p>
                </footer>
            </div>
        }
    }
}

// Handler methods
impl Model {
    fn handle_submit_prediction(&mut self, ctx: &Context<Self>) -> bool {
        let payload = match self.form.to_payload() {
            Ok(payload) => payload,
            Err(e) => {
                log::warn!("Rejected form input {:?} for {}", e.input, e.field);
                self.prediction.fail_locally(e.to_string());
                return true;
            }
        };

        self.prediction.begin();
        log::info!("Submitting prediction with {} features", payload.len());

        let link = ctx.link().clone();
        spawn_local(async move {
            let outcome = api::send_prediction(&payload).await.map_err(|e| {
                error!(format!("Prediction failed: {}", e));
                PREDICT_UI_ERROR.to_string()
            });
            link.send_message(Msg::PredictionSettled(outcome));
        });

        true
    }

    fn handle_analyze_star(&mut self, ctx: &Context<Self>) -> bool {
        let Some(star_id) = normalize_star_id(&self.star_id).map(str::to_string) else {
            self.analysis.fail_locally(STAR_ID_REQUIRED);
            return true;
        };

        self.analysis.begin();
        log::info!("Requesting light curve for star {}", star_id);

        let link = ctx.link().clone();
        spawn_local(async move {
            let outcome = api::fetch_star_analysis(&star_id).await.map_err(|e| {
                error!(format!("Star analysis failed: {}", e));
                ANALYZE_UI_ERROR.to_string()
            });
            link.send_message(Msg::AnalysisSettled(outcome));
        });

        true
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
