use diabetes_risk_data::models::{InferencePayload, PredictionPayload};

use super::medical::MedicalInput;

/// Conversion functions between domain entities and data models
/// These follow the pattern convert_to_[target_layer]_[model_name]

/// Convert domain medical input to the backend wire payload
pub fn convert_to_data_payload(input: &MedicalInput) -> PredictionPayload {
    PredictionPayload {
        pregnancies: input.pregnancies,
        glucose: input.glucose,
        blood_pressure: input.blood_pressure,
        skin_thickness: input.skin_thickness,
        insulin: input.insulin,
        bmi: input.bmi,
        diabetes_pedigree_function: input.diabetes_pedigree_function,
        age: input.age,
    }
}

/// Convert domain medical input to the inference service payload
pub fn convert_to_inference_payload(input: &MedicalInput) -> InferencePayload {
    InferencePayload::from(&convert_to_data_payload(input))
}
