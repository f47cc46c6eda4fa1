use actix_files::Files;
use actix_web::{web, HttpResponse};
use log::{error, info, warn};
use serde_json::{json, Value};
use shared::analysis::normalize_star_id;
use shared::api::{ANALYZE_FAILED, LIGHT_CURVE_NOT_FOUND, PREDICT_FAILED, PREDICT_REJECTED};
use uuid::Uuid;

use crate::error::GatewayError;
use crate::upstream::{UpstreamClient, UpstreamReply};

pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/predict").route(web::post().to(predict)))
        .service(
            web::resource(vec!["/api/analyze-star", "/api/analyze-star/"])
                .route(web::get().to(missing_star_id)),
        )
        .service(web::resource("/api/analyze-star/{star_id}").route(web::get().to(analyze_star)))
        .service(web::resource("/api/health").route(web::get().to(health)));
}

pub fn configure_routes(cfg: &mut web::ServiceConfig, frontend_dir: String) {
    configure_api(cfg);
    cfg.service(Files::new("/", frontend_dir).index_file("index.html"));
}

/// Relays the feature map to the inference service untouched.
async fn predict(
    upstream: web::Data<UpstreamClient>,
    body: web::Bytes,
) -> Result<HttpResponse, GatewayError> {
    let request_id = Uuid::new_v4();

    let features: Value = serde_json::from_slice(&body).map_err(|e| {
        error!("[{}] Prediction request body is not JSON: {}", request_id, e);
        GatewayError::Unavailable { message: PREDICT_FAILED }
    })?;

    info!("[{}] Forwarding prediction request", request_id);
    match upstream.predict(&features).await {
        Ok(UpstreamReply::Success(prediction)) => {
            info!("[{}] Prediction received", request_id);
            Ok(HttpResponse::Ok().json(prediction))
        }
        Ok(UpstreamReply::Rejected { status, body }) => {
            warn!("[{}] Prediction rejected upstream with {}: {}", request_id, status, body);
            Err(GatewayError::Rejected {
                status,
                message: PREDICT_REJECTED,
                details: body,
            })
        }
        Err(e) => {
            error!("[{}] Error calling prediction API: {}", request_id, e);
            Err(GatewayError::Unavailable { message: PREDICT_FAILED })
        }
    }
}

async fn missing_star_id() -> Result<HttpResponse, GatewayError> {
    Err(GatewayError::MissingStarId)
}

async fn analyze_star(
    upstream: web::Data<UpstreamClient>,
    path: web::Path<String>,
) -> Result<HttpResponse, GatewayError> {
    let star_id = normalize_star_id(&path).ok_or(GatewayError::MissingStarId)?;

    let request_id = Uuid::new_v4();
    info!("[{}] Requesting light curve for star {}", request_id, star_id);

    match upstream.analyze_star(star_id).await {
        Ok(UpstreamReply::Success(analysis)) => Ok(HttpResponse::Ok().json(analysis)),
        Ok(UpstreamReply::Rejected { status, body }) => {
            warn!("[{}] Star {} rejected upstream with {}: {}", request_id, star_id, status, body);
            Err(GatewayError::Rejected {
                status,
                message: LIGHT_CURVE_NOT_FOUND,
                details: body,
            })
        }
        Err(e) => {
            error!("[{}] Error calling star analysis API: {}", request_id, e);
            Err(GatewayError::Unavailable { message: ANALYZE_FAILED })
        }
    }
}

async fn health(upstream: web::Data<UpstreamClient>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "upstream": upstream.base_url().as_str(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FakeUpstream, closed_port_url, config_for};
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use shared::ErrorBody;
    use shared::api::{analyze_star_url, STAR_ID_REQUIRED};

    fn client_for(base_url: &str) -> web::Data<UpstreamClient> {
        web::Data::new(UpstreamClient::new(&config_for(base_url)).unwrap())
    }

    #[actix_web::test]
    async fn predict_relays_upstream_json() {
        let prediction = json!({
            "predicted_label": "Candidato",
            "confidence": "87.32%",
            "probabilities": { "Candidato": "87.32%", "Confirmado": "12.68%" }
        });
        let upstream = FakeUpstream::start(200, &prediction.to_string()).await;
        let app = test::init_service(
            App::new()
                .app_data(client_for(&upstream.base_url()))
                .configure(configure_api),
        )
        .await;

        let features = json!({ "period": 8.7, "duration": 3.1, "transit_depth": 450.0 });
        let req = test::TestRequest::post()
            .uri("/api/predict")
            .set_json(&features)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, prediction);

        let seen = upstream.requests();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].method, "POST");
        assert_eq!(seen[0].path, "/predict");
        assert_eq!(seen[0].api_key.as_deref(), Some("test-key"));
        let forwarded: Value = serde_json::from_str(&seen[0].body).unwrap();
        assert_eq!(forwarded, features);
        upstream.stop().await;
    }

    #[actix_web::test]
    async fn predict_wraps_upstream_rejection() {
        let upstream = FakeUpstream::start(422, r#"{"detail":"period is required"}"#).await;
        let app = test::init_service(
            App::new()
                .app_data(client_for(&upstream.base_url()))
                .configure(configure_api),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/predict")
            .set_json(json!({ "duration": 3.1 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: ErrorBody = test::read_body_json(resp).await;
        assert_eq!(body.error, "Error en la predicción");
        assert_eq!(body.details.as_deref(), Some(r#"{"detail":"period is required"}"#));
        upstream.stop().await;
    }

    #[actix_web::test]
    async fn predict_transport_failure_is_500() {
        let app = test::init_service(
            App::new()
                .app_data(client_for(&closed_port_url()))
                .configure(configure_api),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/predict")
            .set_json(json!({ "period": 8.7 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorBody = test::read_body_json(resp).await;
        assert_eq!(body.error, "Error al realizar la predicción");
        assert_eq!(body.details, None);
    }

    #[actix_web::test]
    async fn predict_with_malformed_upstream_json_is_500() {
        let upstream = FakeUpstream::start(200, "not json").await;
        let app = test::init_service(
            App::new()
                .app_data(client_for(&upstream.base_url()))
                .configure(configure_api),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/predict")
            .set_json(json!({ "period": 8.7 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        upstream.stop().await;
    }

    #[actix_web::test]
    async fn predict_rejects_non_json_body_without_calling_upstream() {
        let upstream = FakeUpstream::start(200, "{}").await;
        let app = test::init_service(
            App::new()
                .app_data(client_for(&upstream.base_url()))
                .configure(configure_api),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/predict")
            .insert_header(("content-type", "application/json"))
            .set_payload("period=8.7")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorBody = test::read_body_json(resp).await;
        assert_eq!(body.error, PREDICT_FAILED);
        assert!(upstream.requests().is_empty());
        upstream.stop().await;
    }

    #[actix_web::test]
    async fn analyze_relays_upstream_json() {
        let analysis = json!({
            "star_id": "10797460",
            "image_url": "https://example.org/curves/10797460.png",
            "message": "Curva de luz generada",
            "parameters": { "period": 9.488, "duration": 2.9575, "transit_time": 170.5387 }
        });
        let upstream = FakeUpstream::start(200, &analysis.to_string()).await;
        let app = test::init_service(
            App::new()
                .app_data(client_for(&upstream.base_url()))
                .configure(configure_api),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/analyze-star/10797460")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, analysis);

        let seen = upstream.requests();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].method, "GET");
        assert_eq!(seen[0].path, "/analyze-star/10797460");
        assert_eq!(seen[0].api_key.as_deref(), Some("test-key"));
        upstream.stop().await;
    }

    #[actix_web::test]
    async fn analyze_relays_not_found_with_details() {
        let upstream = FakeUpstream::start(404, r#"{"detail":"Star 42 not found"}"#).await;
        let app = test::init_service(
            App::new()
                .app_data(client_for(&upstream.base_url()))
                .configure(configure_api),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/analyze-star/42").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: ErrorBody = test::read_body_json(resp).await;
        assert_eq!(body.error, "No se encontró la curva de luz para esta estrella");
        let details = body.details.unwrap_or_default();
        assert!(!details.is_empty());
        assert!(details.contains("Star 42 not found"));
        upstream.stop().await;
    }

    #[actix_web::test]
    async fn analyze_without_star_id_is_400_and_never_calls_upstream() {
        let upstream = FakeUpstream::start(200, "{}").await;
        let app = test::init_service(
            App::new()
                .app_data(client_for(&upstream.base_url()))
                .configure(configure_api),
        )
        .await;

        for uri in ["/api/analyze-star", "/api/analyze-star/"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{}", uri);
            let body: ErrorBody = test::read_body_json(resp).await;
            assert_eq!(body.error, STAR_ID_REQUIRED);
        }
        assert!(upstream.requests().is_empty());
        upstream.stop().await;
    }

    #[actix_web::test]
    async fn analyze_forwards_reserved_characters_encoded_once() {
        let upstream = FakeUpstream::start(200, "{}").await;
        let app = test::init_service(
            App::new()
                .app_data(client_for(&upstream.base_url()))
                .configure(configure_api),
        )
        .await;

        let cases = [
            ("KIC 1/2", "/analyze-star/KIC%201%2F2"),
            ("KOI+7016", "/analyze-star/KOI%2B7016"),
            ("100%", "/analyze-star/100%25"),
        ];
        for (star_id, _) in cases {
            let req = test::TestRequest::get().uri(&analyze_star_url(star_id)).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK, "{}", star_id);
        }

        let seen: Vec<_> = upstream.requests().into_iter().map(|r| r.path).collect();
        let expected: Vec<_> = cases.iter().map(|(_, path)| path.to_string()).collect();
        assert_eq!(seen, expected);
        upstream.stop().await;
    }

    #[actix_web::test]
    async fn blank_encoded_star_id_is_400() {
        let upstream = FakeUpstream::start(200, "{}").await;
        let app = test::init_service(
            App::new()
                .app_data(client_for(&upstream.base_url()))
                .configure(configure_api),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/analyze-star/%20").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(upstream.requests().is_empty());
        upstream.stop().await;
    }

    #[actix_web::test]
    async fn analyze_transport_failure_is_500() {
        let app = test::init_service(
            App::new()
                .app_data(client_for(&closed_port_url()))
                .configure(configure_api),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/analyze-star/42").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorBody = test::read_body_json(resp).await;
        assert_eq!(body.error, "Error al analizar la estrella");
    }

    #[actix_web::test]
    async fn health_reports_upstream() {
        let app = test::init_service(
            App::new()
                .app_data(client_for("http://127.0.0.1:9000"))
                .configure(configure_api),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["upstream"], "http://127.0.0.1:9000/");
    }
}
