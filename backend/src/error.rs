use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use shared::ErrorBody;
use shared::api::STAR_ID_REQUIRED;
use thiserror::Error;

/// Failures a gateway handler can answer with. Each one knows its status
/// code and JSON body.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Star id missing from request path")]
    MissingStarId,
    #[error("Upstream rejected the request with status {status}")]
    Rejected {
        status: u16,
        message: &'static str,
        details: String,
    },
    #[error("{message}")]
    Unavailable { message: &'static str },
}

impl ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::MissingStarId => StatusCode::BAD_REQUEST,
            GatewayError::Rejected { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            GatewayError::Unavailable { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            GatewayError::MissingStarId => ErrorBody::new(STAR_ID_REQUIRED),
            GatewayError::Rejected {
                message, details, ..
            } => ErrorBody::with_details(*message, details.clone()),
            GatewayError::Unavailable { message } => ErrorBody::new(*message),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}
