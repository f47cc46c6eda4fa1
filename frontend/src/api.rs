use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared::api::{analyze_star_url, PREDICT_PATH};
use shared::{PredictionRequest, PredictionResponse, StarAnalysis};

pub async fn send_prediction(payload: &PredictionRequest) -> Result<PredictionResponse, String> {
    let request = Request::post(PREDICT_PATH)
        .json(payload)
        .map_err(|e| format!("Failed to build request: {}", e))?;

    let response = request
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    read_json(response).await
}

pub async fn fetch_star_analysis(star_id: &str) -> Result<StarAnalysis, String> {
    let response = Request::get(&analyze_star_url(star_id))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    read_json(response).await
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(format!("Server error: {} - {}", status, body));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
