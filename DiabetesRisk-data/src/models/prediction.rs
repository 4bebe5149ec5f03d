use serde::{Deserialize, Serialize};

/// Body of `POST /predict` as sent by the form to the backend
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionPayload {
    /// Number of pregnancies
    pub pregnancies: f64,
    
    /// Plasma glucose concentration (mg/dL)
    pub glucose: f64,
    
    /// Diastolic blood pressure (mmHg)
    pub blood_pressure: f64,
    
    /// Triceps skin fold thickness (mm)
    pub skin_thickness: f64,
    
    /// Two-hour serum insulin (μU/mL)
    pub insulin: f64,
    
    /// Body mass index
    pub bmi: f64,
    
    /// Diabetes pedigree function score
    pub diabetes_pedigree_function: f64,
    
    /// Age in years
    pub age: f64,
}

/// Body forwarded to the inference service.
///
/// The model server indexes features by these exact keys, so the
/// renames below must not drift.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InferencePayload {
    #[serde(rename = "Pregnancies")]
    pub pregnancies: f64,
    
    #[serde(rename = "Glucose")]
    pub glucose: f64,
    
    #[serde(rename = "BloodPressure")]
    pub blood_pressure: f64,
    
    #[serde(rename = "SkinThickness")]
    pub skin_thickness: f64,
    
    #[serde(rename = "Insulin")]
    pub insulin: f64,
    
    #[serde(rename = "BMI")]
    pub bmi: f64,
    
    #[serde(rename = "DiabetesPedigreeFunction")]
    pub diabetes_pedigree_function: f64,
    
    #[serde(rename = "Age")]
    pub age: f64,
}

impl From<&PredictionPayload> for InferencePayload {
    fn from(payload: &PredictionPayload) -> Self {
        Self {
            pregnancies: payload.pregnancies,
            glucose: payload.glucose,
            blood_pressure: payload.blood_pressure,
            skin_thickness: payload.skin_thickness,
            insulin: payload.insulin,
            bmi: payload.bmi,
            diabetes_pedigree_function: payload.diabetes_pedigree_function,
            age: payload.age,
        }
    }
}

/// Response body of a successful prediction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionResponse {
    /// Raw risk label as returned by the model (0 or 1)
    pub prediction: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_payload() -> PredictionPayload {
        PredictionPayload {
            pregnancies: 2.0,
            glucose: 150.0,
            blood_pressure: 72.0,
            skin_thickness: 35.0,
            insulin: 0.0,
            bmi: 33.6,
            diabetes_pedigree_function: 0.627,
            age: 50.0,
        }
    }

    #[test]
    fn test_prediction_payload_uses_camel_case_keys() {
        let value = serde_json::to_value(sample_payload()).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();

        for key in [
            "pregnancies",
            "glucose",
            "bloodPressure",
            "skinThickness",
            "insulin",
            "bmi",
            "diabetesPedigreeFunction",
            "age",
        ] {
            assert!(keys.contains(&key), "missing key {}", key);
        }
        assert_eq!(keys.len(), 8);
    }

    #[test]
    fn test_inference_payload_remaps_field_names() {
        let remapped = InferencePayload::from(&sample_payload());
        let value = serde_json::to_value(remapped).unwrap();

        assert_eq!(
            value,
            json!({
                "Pregnancies": 2.0,
                "Glucose": 150.0,
                "BloodPressure": 72.0,
                "SkinThickness": 35.0,
                "Insulin": 0.0,
                "BMI": 33.6,
                "DiabetesPedigreeFunction": 0.627,
                "Age": 50.0
            })
        );
    }

    #[test]
    fn test_prediction_payload_rejects_missing_fields() {
        let body = json!({ "glucose": 120, "age": 30 });
        assert!(serde_json::from_value::<PredictionPayload>(body).is_err());
    }

    #[test]
    fn test_prediction_response_accepts_integer_label() {
        let response: PredictionResponse = serde_json::from_value(json!({ "prediction": 1 })).unwrap();
        assert_eq!(response.prediction, 1);
    }
}
