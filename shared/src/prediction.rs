use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const CANDIDATE_LABEL: &str = "Candidato";
pub const CONFIRMED_LABEL: &str = "Confirmado";

// The service formats these as strings, but older deployments send plain numbers.
pub(crate) fn deserialize_display_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "Expected string or number, got: {}",
            other
        ))),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Probabilities {
    #[serde(rename = "Candidato", deserialize_with = "deserialize_display_string")]
    pub candidate: String,
    #[serde(rename = "Confirmado", deserialize_with = "deserialize_display_string")]
    pub confirmed: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub predicted_label: String,
    #[serde(deserialize_with = "deserialize_display_string")]
    pub confidence: String,
    pub probabilities: Probabilities,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Candidate,
    Confirmed,
}

impl Verdict {
    /// Anything other than the candidate label reads as confirmed.
    pub fn from_label(label: &str) -> Self {
        if label == CANDIDATE_LABEL {
            Verdict::Candidate
        } else {
            Verdict::Confirmed
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Verdict::Candidate => {
                "🌟 Este exoplaneta es un candidato prometedor para habitabilidad. Se requiere más investigación."
            }
            Verdict::Confirmed => {
                "✅ Este exoplaneta ha sido confirmado con alta probabilidad de condiciones habitables."
            }
        }
    }
}

impl PredictionResponse {
    pub fn verdict(&self) -> Verdict {
        Verdict::from_label(&self.predicted_label)
    }
}
