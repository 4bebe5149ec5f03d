use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::lifestyle::LifestyleInput;
use super::medical::MedicalInput;

/// Label value outside the binary {0, 1} contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("prediction label must be 0 or 1, got {0}")]
pub struct InvalidLabel(pub i64);

/// Binary risk label returned by the inference service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum PredictionLabel {
    /// 0: lower predicted risk
    Lower,
    /// 1: higher predicted risk
    Higher,
}

impl PredictionLabel {
    pub fn is_high_risk(self) -> bool {
        self == PredictionLabel::Higher
    }
}

impl TryFrom<i64> for PredictionLabel {
    type Error = InvalidLabel;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(PredictionLabel::Lower),
            1 => Ok(PredictionLabel::Higher),
            other => Err(InvalidLabel(other)),
        }
    }
}

impl From<PredictionLabel> for i64 {
    fn from(label: PredictionLabel) -> Self {
        match label {
            PredictionLabel::Lower => 0,
            PredictionLabel::Higher => 1,
        }
    }
}

impl std::fmt::Display for PredictionLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", i64::from(*self))
    }
}

/// Immutable payload produced by the form when it submits.
///
/// Fields are private so nothing can alter a submission after it was handed out.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    id: Uuid,
    submitted_at: DateTime<Utc>,
    medical: MedicalInput,
    lifestyle: LifestyleInput,
}

impl Submission {
    pub(crate) fn new(medical: MedicalInput, lifestyle: LifestyleInput) -> Self {
        Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            medical,
            lifestyle,
        }
    }

    /// Identifier used to correlate the submission with its completion
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// When the submission was created
    pub fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }

    /// Medical fields, coerced to numbers
    pub fn medical(&self) -> &MedicalInput {
        &self.medical
    }

    /// Lifestyle selections
    pub fn lifestyle(&self) -> &LifestyleInput {
        &self.lifestyle
    }
}

/// Everything the result view needs, passed explicitly after a successful submission
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultState {
    /// Label returned by the prediction service
    pub prediction: PredictionLabel,
    
    /// Medical fields that were sent for prediction
    pub prediction_input: MedicalInput,
    
    /// Lifestyle selections made on the second step
    pub lifestyle: LifestyleInput,
}
