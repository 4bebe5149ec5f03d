use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use diabetes_risk_domain::entities::{InvalidChoice, LifestyleInput, MedicalInput};

/// Medical measurements sent by the client for a prediction.
///
/// Range checks happen once, in the domain relay.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PredictionRequest {
    /// Number of pregnancies
    pub pregnancies: f64,

    /// Plasma glucose (mg/dL)
    pub glucose: f64,

    /// Diastolic blood pressure (mmHg)
    pub blood_pressure: f64,

    /// Triceps skin fold thickness (mm)
    pub skin_thickness: f64,

    /// 2-hour serum insulin (μU/mL)
    pub insulin: f64,

    /// Body mass index
    pub bmi: f64,

    /// Diabetes pedigree function
    pub diabetes_pedigree_function: f64,

    /// Age in years
    pub age: f64,
}

impl From<PredictionRequest> for MedicalInput {
    fn from(request: PredictionRequest) -> Self {
        MedicalInput {
            pregnancies: request.pregnancies,
            glucose: request.glucose,
            blood_pressure: request.blood_pressure,
            skin_thickness: request.skin_thickness,
            insulin: request.insulin,
            bmi: request.bmi,
            diabetes_pedigree_function: request.diabetes_pedigree_function,
            age: request.age,
        }
    }
}

/// Lifestyle selections; missing fields count as not selected
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LifestyleRequest {
    /// low, moderate or high
    pub physical_activity: Option<String>,
    /// yes or no
    pub smoking: Option<String>,
    /// poor, average or healthy
    pub diet: Option<String>,
    /// never, occasionally or frequently
    pub alcohol: Option<String>,
}

impl TryFrom<LifestyleRequest> for LifestyleInput {
    type Error = InvalidChoice;

    fn try_from(request: LifestyleRequest) -> Result<Self, Self::Error> {
        let mut lifestyle = LifestyleInput::UNSELECTED;
        let choices = [
            ("physicalActivity", request.physical_activity),
            ("smoking", request.smoking),
            ("diet", request.diet),
            ("alcohol", request.alcohol),
        ];
        for (name, value) in choices {
            if let Some(value) = value {
                lifestyle.select(name, &value)?;
            }
        }
        Ok(lifestyle)
    }
}

/// Result state posted to the assessment endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRequest {
    /// Label returned by the prediction service (0 or 1); empty view when absent
    pub prediction: Option<i64>,
    /// Medical fields that were sent for prediction
    pub prediction_input: Option<PredictionRequest>,
    /// Lifestyle selections from the second form step
    pub lifestyle: Option<LifestyleRequest>,
}
