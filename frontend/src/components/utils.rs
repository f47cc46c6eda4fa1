use yew::prelude::*;

pub fn render_error_message(error: Option<&str>) -> Html {
    if let Some(error_msg) = error {
        html! {
            <div class="error-message">
                <p>{ format!("❌ {}", error_msg) }</p>
            </div>
        }
    } else {
        html! {}
    }
}
