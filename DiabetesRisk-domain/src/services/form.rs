//! Two-step assessment form.
//!
//! Step one collects the medical measurements, step two the lifestyle
//! choices. Submission only exists on step two, and at most one
//! submission can be in flight at a time.

use thiserror::Error;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::entities::lifestyle::LifestyleInput;
use crate::entities::medical::{MedicalDraft, MedicalField};
use crate::entities::prediction::{PredictionLabel, ResultState, Submission};
use crate::services::prediction::{PredictionClient, PredictionError};
use crate::services::validation;

/// Message shown to the user when a prediction cannot be obtained
pub const SUBMISSION_FAILED_MESSAGE: &str = "Prediction failed. Please try again.";

/// Submission progress on the lifestyle step
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionStatus {
    /// Nothing pending
    Idle,
    /// Waiting for the prediction client
    InFlight(Submission),
    /// Last submission failed; holds the user-visible message
    Failed(String),
}

/// Current step of the form
#[derive(Debug, Clone, PartialEq)]
pub enum FormStep {
    /// Step 1: medical measurements
    Medical,
    /// Step 2: lifestyle choices, with its submission state
    Lifestyle(SubmissionStatus),
}

/// Form controller errors
#[derive(Debug, Error)]
pub enum FormError {
    /// Submission was attempted from the medical step
    #[error("Submission is only available on the lifestyle step")]
    NotOnLifestyleStep,
    
    /// A submission is already waiting for its prediction
    #[error("A submission is already in flight")]
    SubmissionInFlight,
    
    /// A medical field is empty or not a number
    #[error("Medical data is incomplete: {0}")]
    IncompleteMedicalData(MedicalField),
    
    /// Completion did not match the submission in flight
    #[error("No submission {0} is in flight")]
    UnknownSubmission(Uuid),
    
    /// The prediction client failed
    #[error("Prediction failed. Please try again.")]
    Prediction(#[source] PredictionError),
}

/// State machine behind the assessment form
#[derive(Debug, Clone)]
pub struct FormController {
    medical: MedicalDraft,
    lifestyle: LifestyleInput,
    step: FormStep,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}

impl FormController {
    /// Fresh form on step 1 with default lifestyle choices
    pub fn new() -> Self {
        Self {
            medical: MedicalDraft::default(),
            lifestyle: LifestyleInput::default(),
            step: FormStep::Medical,
        }
    }

    pub fn step(&self) -> &FormStep {
        &self.step
    }

    pub fn medical(&self) -> &MedicalDraft {
        &self.medical
    }

    pub fn lifestyle(&self) -> &LifestyleInput {
        &self.lifestyle
    }

    /// True while a submission waits for its prediction
    pub fn is_submitting(&self) -> bool {
        matches!(self.step, FormStep::Lifestyle(SubmissionStatus::InFlight(_)))
    }

    /// User-visible error from the last failed submission
    pub fn error_message(&self) -> Option<&str> {
        match &self.step {
            FormStep::Lifestyle(SubmissionStatus::Failed(message)) => Some(message),
            _ => None,
        }
    }

    /// Whether the medical step is complete
    pub fn can_advance(&self) -> bool {
        validation::can_advance(&self.medical)
    }

    /// Edit a medical field; invalid edits and edits during submission are ignored
    pub fn edit_medical(&mut self, name: &str, raw: &str) -> bool {
        if self.is_submitting() {
            return false;
        }
        validation::accept_numeric_edit(&mut self.medical, name, raw)
    }

    /// Change a lifestyle selection; values outside the enumeration are ignored
    pub fn select_lifestyle(&mut self, name: &str, value: &str) -> bool {
        if self.is_submitting() {
            return false;
        }
        match self.lifestyle.select(name, value) {
            Ok(()) => true,
            Err(e) => {
                debug!("Ignoring lifestyle selection: {}", e);
                false
            }
        }
    }

    /// Move from the medical step to the lifestyle step
    pub fn advance(&mut self) -> bool {
        match self.step {
            FormStep::Medical if self.can_advance() => {
                self.step = FormStep::Lifestyle(SubmissionStatus::Idle);
                true
            }
            _ => false,
        }
    }

    /// Return to the medical step. Refused only while a submission is pending.
    pub fn back(&mut self) -> bool {
        match self.step {
            FormStep::Lifestyle(SubmissionStatus::InFlight(_)) => false,
            FormStep::Lifestyle(_) => {
                self.step = FormStep::Medical;
                true
            }
            FormStep::Medical => false,
        }
    }

    /// Start a submission and hand out its immutable payload
    pub fn begin_submission(&mut self) -> Result<Submission, FormError> {
        match &self.step {
            FormStep::Medical => return Err(FormError::NotOnLifestyleStep),
            FormStep::Lifestyle(SubmissionStatus::InFlight(_)) => return Err(FormError::SubmissionInFlight),
            FormStep::Lifestyle(_) => {}
        }

        let medical = self
            .medical
            .to_input()
            .map_err(FormError::IncompleteMedicalData)?;
        let submission = Submission::new(medical, self.lifestyle);

        info!(submission_id = %submission.id(), "Submitting assessment");
        self.step = FormStep::Lifestyle(SubmissionStatus::InFlight(submission.clone()));
        Ok(submission)
    }

    /// Finish the in-flight submission with the prediction outcome.
    ///
    /// On success the returned state is what the result view needs. On
    /// failure the form stays on the lifestyle step with an error message.
    pub fn complete_submission(
        &mut self,
        id: Uuid,
        outcome: Result<PredictionLabel, PredictionError>,
    ) -> Result<ResultState, FormError> {
        let submission = match &self.step {
            FormStep::Lifestyle(SubmissionStatus::InFlight(pending)) if pending.id() == id => pending.clone(),
            _ => return Err(FormError::UnknownSubmission(id)),
        };

        match outcome {
            Ok(prediction) => {
                info!(submission_id = %id, %prediction, "Prediction received");
                self.step = FormStep::Lifestyle(SubmissionStatus::Idle);
                Ok(ResultState {
                    prediction,
                    prediction_input: *submission.medical(),
                    lifestyle: *submission.lifestyle(),
                })
            }
            Err(e) => {
                warn!(submission_id = %id, "Prediction failed: {}", e);
                self.step = FormStep::Lifestyle(SubmissionStatus::Failed(SUBMISSION_FAILED_MESSAGE.to_string()));
                Err(FormError::Prediction(e))
            }
        }
    }

    /// Submit through `client` and wait for the outcome
    pub async fn submit<C>(&mut self, client: &C) -> Result<ResultState, FormError>
    where
        C: PredictionClient + ?Sized,
    {
        let submission = self.begin_submission()?;
        let outcome = client.predict(submission.medical()).await;
        self.complete_submission(submission.id(), outcome)
    }

    /// Start over on an empty form
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
