use serde::{Deserialize, Serialize};

pub const PREDICT_PATH: &str = "/api/predict";
pub const ANALYZE_STAR_PATH: &str = "/api/analyze-star";

/// Header carrying the shared secret on every upstream call.
pub const API_KEY_HEADER: &str = "X-API-Key";

pub const PREDICT_REJECTED: &str = "Error en la predicción";
pub const PREDICT_FAILED: &str = "Error al realizar la predicción";
pub const STAR_ID_REQUIRED: &str = "Se requiere un ID de estrella";
pub const LIGHT_CURVE_NOT_FOUND: &str = "No se encontró la curva de luz para esta estrella";
pub const ANALYZE_FAILED: &str = "Error al analizar la estrella";

pub const PREDICT_UI_ERROR: &str = "Error al realizar la predicción. Por favor intenta nuevamente.";
pub const ANALYZE_UI_ERROR: &str = "Error al analizar la estrella. Por favor intenta nuevamente.";

/// Error payload returned by both gateway endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into(), details: None }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self { error: error.into(), details: Some(details.into()) }
    }
}

pub fn analyze_star_url(star_id: &str) -> String {
    format!("{}/{}", ANALYZE_STAR_PATH, urlencoding::encode(star_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn details_omitted_when_absent() {
        let json = serde_json::to_value(ErrorBody::new(STAR_ID_REQUIRED)).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "Se requiere un ID de estrella" }));
    }

    #[test]
    fn details_kept_when_present() {
        let body = ErrorBody::with_details(PREDICT_REJECTED, "missing field period");
        let json = serde_json::to_string(&body).unwrap();
        let back: ErrorBody = serde_json::from_str(&json).unwrap();
        assert_eq!(back.details.as_deref(), Some("missing field period"));
    }

    #[test]
    fn star_url_escapes_segment() {
        assert_eq!(analyze_star_url("10797460"), "/api/analyze-star/10797460");
        assert_eq!(analyze_star_url("KIC 1/2"), "/api/analyze-star/KIC%201%2F2");
    }
}
