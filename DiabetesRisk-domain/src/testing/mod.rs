// Testing utilities and mock implementations for the domain layer
// Available to this crate's unit tests and, with the "mock" feature, downstream

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use diabetes_risk_data::client::ClientError;

use crate::entities::medical::{MedicalDraft, MedicalField, MedicalInput};
use crate::health::{ComponentStatus, HealthComponent, HealthServiceTrait, SystemHealth, SystemStatus};
use crate::services::form::FormController;
use crate::services::prediction::{validate_medical_input, PredictionRelayTrait, RelayError};

/// Raw values for a fully filled medical step
pub const SAMPLE_MEDICAL_VALUES: [(MedicalField, &str); 8] = [
    (MedicalField::Pregnancies, "2"),
    (MedicalField::Glucose, "150"),
    (MedicalField::BloodPressure, "120"),
    (MedicalField::SkinThickness, "25"),
    (MedicalField::Insulin, "90"),
    (MedicalField::Bmi, "28"),
    (MedicalField::DiabetesPedigreeFunction, "0.5"),
    (MedicalField::Age, "50"),
];

/// A draft with every medical field filled
pub fn complete_draft() -> MedicalDraft {
    let mut draft = MedicalDraft::default();
    for (field, raw) in SAMPLE_MEDICAL_VALUES {
        *draft.slot_mut(field) = raw.to_string();
    }
    draft
}

/// Fill the medical step of a form through its public edit path
pub fn fill_medical_step(form: &mut FormController) {
    for (field, raw) in SAMPLE_MEDICAL_VALUES {
        assert!(form.edit_medical(field.name(), raw), "sample value for {} rejected", field);
    }
}

/// Parsed counterpart of [`SAMPLE_MEDICAL_VALUES`]
pub fn sample_medical_input() -> MedicalInput {
    MedicalInput {
        pregnancies: 2.0,
        glucose: 150.0,
        blood_pressure: 120.0,
        skin_thickness: 25.0,
        insulin: 90.0,
        bmi: 28.0,
        diabetes_pedigree_function: 0.5,
        age: 50.0,
    }
}

/// Mock implementation of the PredictionRelayTrait for testing
pub struct MockPredictionRelay {
    response: Value,
    should_fail: bool,
    upstream_down: bool,
    received: Mutex<Vec<MedicalInput>>,
}

impl Default for MockPredictionRelay {
    fn default() -> Self {
        Self::new()
    }
}

impl MockPredictionRelay {
    /// Create a relay that answers `{"prediction": 1}`
    pub fn new() -> Self {
        Self {
            response: json!({ "prediction": 1 }),
            should_fail: false,
            upstream_down: false,
            received: Mutex::new(Vec::new()),
        }
    }

    /// Answer with this body instead
    pub fn with_response(mut self, response: Value) -> Self {
        self.response = response;
        self
    }

    /// Configure the mock to fail every relay as if inference returned 500
    pub fn with_failure(mut self) -> Self {
        self.should_fail = true;
        self
    }

    /// Configure the mock to report the inference service as unreachable,
    /// the way a gateway in front of it answers
    pub fn with_upstream_down(mut self) -> Self {
        self.upstream_down = true;
        self
    }

    /// Inputs that passed validation and were relayed
    pub fn received(&self) -> Vec<MedicalInput> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl PredictionRelayTrait for MockPredictionRelay {
    async fn relay(&self, input: &MedicalInput) -> Result<Value, RelayError> {
        validate_medical_input(input)?;
        self.received.lock().unwrap().push(*input);

        if self.should_fail {
            return Err(RelayError::Upstream(ClientError::Status {
                status: 500,
                body: "model crashed".to_string(),
            }));
        }
        Ok(self.response.clone())
    }

    async fn check_upstream(&self) -> Result<(), RelayError> {
        if self.upstream_down {
            Err(RelayError::Upstream(ClientError::Status {
                status: 503,
                body: "inference service unreachable".to_string(),
            }))
        } else {
            Ok(())
        }
    }
}

/// Mock implementation of health services for testing system health
pub struct MockHealthService {
    status: SystemStatus,
    components: HashMap<String, HealthComponent>,
}

impl Default for MockHealthService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockHealthService {
    /// Create a mock reporting every component healthy
    pub fn new() -> Self {
        let mut components = HashMap::new();
        for name in ["api", "inference"] {
            components.insert(
                name.to_string(),
                HealthComponent {
                    status: ComponentStatus::Healthy,
                    details: None,
                },
            );
        }
        Self {
            status: SystemStatus::Healthy,
            components,
        }
    }

    /// Report the inference service as unreachable
    pub fn with_inference_down(self) -> Self {
        self.with_system_status(SystemStatus::Degraded).with_component(
            "inference",
            ComponentStatus::Unhealthy,
            Some("inference service unreachable".to_string()),
        )
    }

    pub fn with_system_status(mut self, status: SystemStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_component(mut self, name: &str, status: ComponentStatus, details: Option<String>) -> Self {
        self.components
            .insert(name.to_string(), HealthComponent { status, details });
        self
    }
}

#[async_trait]
impl HealthServiceTrait for MockHealthService {
    async fn get_system_health(&self) -> SystemHealth {
        SystemHealth {
            status: self.status.clone(),
            components: self.components.clone(),
        }
    }

    async fn check_inference_status(&self) -> Result<(), String> {
        match self.components.get("inference") {
            Some(HealthComponent {
                status: ComponentStatus::Unhealthy,
                details,
            }) => Err(details.clone().unwrap_or_else(|| "unhealthy".to_string())),
            _ => Ok(()),
        }
    }
}

