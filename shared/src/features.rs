use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::IntoEnumIterator;
use strum_macros::{Display as StrumDisplay, EnumIter, EnumString, IntoStaticStr};

/// Every input the prediction form knows about. The string form of each
/// variant is the JSON key the inference service expects.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    IntoStaticStr,
    EnumString,
    StrumDisplay,
)]
#[strum(serialize_all = "snake_case")]
pub enum FeatureField {
    Period,
    Duration,
    TransitDepth,
    PlanetRadius,
    EqTemp,
    InsolFlux,
    StellarEffTemp,
    StellarLogg,
    StellarRadius,
    KoiModelSnr,
    KoiFpflagNt,
    KoiFpflagSs,
    KoiFpflagCo,
    Ra,
    Dec,
    StellarDist,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum FieldGroup {
    Required,
    SignalQuality,
    Coordinates,
}

impl FieldGroup {
    pub fn heading(self) -> &'static str {
        match self {
            FieldGroup::Required => "⭐ Parámetros Obligatorios",
            FieldGroup::SignalQuality => "🎯 Calidad de Señal y Detección",
            FieldGroup::Coordinates => "📍 Coordenadas Celestiales",
        }
    }
}

impl FeatureField {
    pub fn key(self) -> &'static str {
        self.into()
    }

    pub fn group(self) -> FieldGroup {
        match self {
            FeatureField::KoiModelSnr
            | FeatureField::KoiFpflagNt
            | FeatureField::KoiFpflagSs
            | FeatureField::KoiFpflagCo => FieldGroup::SignalQuality,
            FeatureField::Ra | FeatureField::Dec | FeatureField::StellarDist => {
                FieldGroup::Coordinates
            }
            _ => FieldGroup::Required,
        }
    }

    pub fn is_required(self) -> bool {
        self.group() == FieldGroup::Required
    }

    /// False-positive flags only take 0 or 1.
    pub fn is_binary_flag(self) -> bool {
        matches!(
            self,
            FeatureField::KoiFpflagNt | FeatureField::KoiFpflagSs | FeatureField::KoiFpflagCo
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            FeatureField::Period => "Período Orbital (días)",
            FeatureField::Duration => "Duración del Tránsito (horas)",
            FeatureField::TransitDepth => "Profundidad del Tránsito (ppm)",
            FeatureField::PlanetRadius => "Radio del Planeta (R⊕)",
            FeatureField::EqTemp => "Temperatura de Equilibrio (K)",
            FeatureField::InsolFlux => "Flujo de Insolación (F⊕)",
            FeatureField::StellarEffTemp => "Temperatura Efectiva Estelar (K)",
            FeatureField::StellarLogg => "Gravedad Estelar (log g)",
            FeatureField::StellarRadius => "Radio Estelar (R☉)",
            FeatureField::KoiModelSnr => "Señal a Ruido (SNR)",
            FeatureField::KoiFpflagNt => "¿Señal no es tránsito? (0/1)",
            FeatureField::KoiFpflagSs => "¿Indica eclipse estelar? (0/1)",
            FeatureField::KoiFpflagCo => "¿Centroide desplazado? (0/1)",
            FeatureField::Ra => "Ascensión Recta (RA)",
            FeatureField::Dec => "Declinación (Dec)",
            FeatureField::StellarDist => "Distancia Estelar (pc)",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FeatureField::KoiModelSnr => "Nivel de claridad de la señal",
            FeatureField::KoiFpflagNt => "Curva de luz anómala",
            FeatureField::KoiFpflagSs => "Señal de otra estrella",
            FeatureField::KoiFpflagCo => "Señal no viene del objetivo",
            FeatureField::Ra => "Longitud celestial",
            FeatureField::Dec => "Latitud celestial",
            FeatureField::StellarDist => "Distancia a la estrella",
            required => required.default_value().unwrap_or_default(),
        }
    }

    /// Illustrative seed value shown when the form first renders.
    pub fn default_value(self) -> Option<&'static str> {
        match self {
            FeatureField::Period => Some("8.7"),
            FeatureField::Duration => Some("3.1"),
            FeatureField::TransitDepth => Some("450.0"),
            FeatureField::PlanetRadius => Some("2.1"),
            FeatureField::EqTemp => Some("950"),
            FeatureField::InsolFlux => Some("210.0"),
            FeatureField::StellarEffTemp => Some("5750"),
            FeatureField::StellarLogg => Some("4.5"),
            FeatureField::StellarRadius => Some("1.0"),
            _ => None,
        }
    }

    pub fn in_group(group: FieldGroup) -> impl Iterator<Item = FeatureField> {
        FeatureField::iter().filter(move |field| field.group() == group)
    }
}

#[derive(Debug, Clone, PartialEq, Display)]
#[display(fmt = "El campo «{}» debe ser un número válido.", label)]
pub struct FieldError {
    pub field: FeatureField,
    pub label: &'static str,
    pub input: String,
}

impl std::error::Error for FieldError {}

/// Outbound body for the prediction endpoint: feature key to value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PredictionRequest(BTreeMap<String, f64>);

impl PredictionRequest {
    pub fn get(&self, key: &str) -> Option<f64> {
        self.0.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Text state of the prediction form, one entry per field.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureForm {
    values: BTreeMap<FeatureField, String>,
}

impl Default for FeatureForm {
    fn default() -> Self {
        let values = FeatureField::iter()
            .map(|field| (field, field.default_value().unwrap_or_default().to_string()))
            .collect();
        Self { values }
    }
}

impl FeatureForm {
    /// A form with every field blank.
    pub fn empty() -> Self {
        Self {
            values: FeatureField::iter().map(|field| (field, String::new())).collect(),
        }
    }

    pub fn get(&self, field: FeatureField) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or_default()
    }

    pub fn set(&mut self, field: FeatureField, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Converts every non-empty field to a number. Blank fields are left
    /// out of the payload entirely.
    pub fn to_payload(&self) -> Result<PredictionRequest, FieldError> {
        let mut features = BTreeMap::new();
        for (field, raw) in &self.values {
            let text = raw.trim();
            if text.is_empty() {
                continue;
            }
            let value = parse_feature(text).ok_or_else(|| FieldError {
                field: *field,
                label: field.label(),
                input: raw.clone(),
            })?;
            features.insert(field.key().to_string(), value);
        }
        Ok(PredictionRequest(features))
    }
}

fn parse_feature(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}
