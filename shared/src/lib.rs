pub mod action;
pub mod analysis;
pub mod api;
pub mod features;
pub mod prediction;

pub use action::{ActionState, Phase};
pub use analysis::{StarAnalysis, TransitParameters};
pub use api::ErrorBody;
pub use features::{FeatureField, FeatureForm, FieldError, FieldGroup, PredictionRequest};
pub use prediction::{PredictionResponse, Probabilities, Verdict};
