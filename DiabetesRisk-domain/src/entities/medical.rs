use serde::{Deserialize, Serialize};
use validator::Validate;

/// One of the eight medical measurements collected on the first form step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MedicalField {
    Pregnancies,
    Glucose,
    BloodPressure,
    SkinThickness,
    Insulin,
    Bmi,
    DiabetesPedigreeFunction,
    Age,
}

/// Display hint for a medical field. Used for UI guidance only, never for rejection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldHint {
    /// Human-readable label
    pub label: &'static str,
    
    /// Unit shown next to the input
    pub unit: &'static str,
    
    /// Lower bound of the typical range
    pub min: f64,
    
    /// Upper bound of the typical range
    pub max: f64,
}

impl FieldHint {
    /// Whether `value` falls inside the typical range
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

impl MedicalField {
    /// All fields in form order
    pub const ALL: [MedicalField; 8] = [
        MedicalField::Pregnancies,
        MedicalField::Glucose,
        MedicalField::BloodPressure,
        MedicalField::SkinThickness,
        MedicalField::Insulin,
        MedicalField::Bmi,
        MedicalField::DiabetesPedigreeFunction,
        MedicalField::Age,
    ];

    /// Wire/form name of the field
    pub fn name(self) -> &'static str {
        match self {
            MedicalField::Pregnancies => "pregnancies",
            MedicalField::Glucose => "glucose",
            MedicalField::BloodPressure => "bloodPressure",
            MedicalField::SkinThickness => "skinThickness",
            MedicalField::Insulin => "insulin",
            MedicalField::Bmi => "bmi",
            MedicalField::DiabetesPedigreeFunction => "diabetesPedigreeFunction",
            MedicalField::Age => "age",
        }
    }

    /// Look a field up by its form name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }

    /// Display range, label and unit
    pub fn hint(self) -> FieldHint {
        let (label, unit, min, max) = match self {
            MedicalField::Pregnancies => ("Pregnancies", "count", 0.0, 20.0),
            MedicalField::Glucose => ("Glucose", "mg/dL", 50.0, 200.0),
            MedicalField::BloodPressure => ("Blood Pressure", "mmHg", 40.0, 140.0),
            MedicalField::SkinThickness => ("Skin Thickness", "mm", 0.0, 100.0),
            MedicalField::Insulin => ("Insulin", "μU/mL", 0.0, 900.0),
            MedicalField::Bmi => ("BMI", "kg/m²", 10.0, 70.0),
            MedicalField::DiabetesPedigreeFunction => ("Diabetes Pedigree Function", "score", 0.0, 2.5),
            MedicalField::Age => ("Age", "years", 1.0, 120.0),
        };
        FieldHint { label, unit, min, max }
    }
}

impl std::fmt::Display for MedicalField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Numeric medical measurements as submitted for prediction
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MedicalInput {
    /// Number of pregnancies
    #[validate(range(min = 0.0, message = "pregnancies cannot be negative"))]
    pub pregnancies: f64,
    
    /// Plasma glucose concentration (mg/dL)
    #[validate(range(min = 0.0, message = "glucose cannot be negative"))]
    pub glucose: f64,
    
    /// Diastolic blood pressure (mmHg)
    #[validate(range(min = 0.0, message = "bloodPressure cannot be negative"))]
    pub blood_pressure: f64,
    
    /// Triceps skin fold thickness (mm)
    #[validate(range(min = 0.0, message = "skinThickness cannot be negative"))]
    pub skin_thickness: f64,
    
    /// Two-hour serum insulin (μU/mL)
    #[validate(range(min = 0.0, message = "insulin cannot be negative"))]
    pub insulin: f64,
    
    /// Body mass index
    #[validate(range(min = 0.0, message = "bmi cannot be negative"))]
    pub bmi: f64,
    
    /// Diabetes pedigree function score
    #[validate(range(min = 0.0, message = "diabetesPedigreeFunction cannot be negative"))]
    pub diabetes_pedigree_function: f64,
    
    /// Age in years
    #[validate(range(min = 0.0, message = "age cannot be negative"))]
    pub age: f64,
}

impl MedicalInput {
    /// Value of a single field
    pub fn value(&self, field: MedicalField) -> f64 {
        match field {
            MedicalField::Pregnancies => self.pregnancies,
            MedicalField::Glucose => self.glucose,
            MedicalField::BloodPressure => self.blood_pressure,
            MedicalField::SkinThickness => self.skin_thickness,
            MedicalField::Insulin => self.insulin,
            MedicalField::Bmi => self.bmi,
            MedicalField::DiabetesPedigreeFunction => self.diabetes_pedigree_function,
            MedicalField::Age => self.age,
        }
    }
}

/// Raw text state of the medical step. An empty string means "not entered yet".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalDraft {
    pub pregnancies: String,
    pub glucose: String,
    pub blood_pressure: String,
    pub skin_thickness: String,
    pub insulin: String,
    pub bmi: String,
    pub diabetes_pedigree_function: String,
    pub age: String,
}

impl MedicalDraft {
    /// Raw text of a field
    pub fn get(&self, field: MedicalField) -> &str {
        match field {
            MedicalField::Pregnancies => &self.pregnancies,
            MedicalField::Glucose => &self.glucose,
            MedicalField::BloodPressure => &self.blood_pressure,
            MedicalField::SkinThickness => &self.skin_thickness,
            MedicalField::Insulin => &self.insulin,
            MedicalField::Bmi => &self.bmi,
            MedicalField::DiabetesPedigreeFunction => &self.diabetes_pedigree_function,
            MedicalField::Age => &self.age,
        }
    }

    pub(crate) fn slot_mut(&mut self, field: MedicalField) -> &mut String {
        match field {
            MedicalField::Pregnancies => &mut self.pregnancies,
            MedicalField::Glucose => &mut self.glucose,
            MedicalField::BloodPressure => &mut self.blood_pressure,
            MedicalField::SkinThickness => &mut self.skin_thickness,
            MedicalField::Insulin => &mut self.insulin,
            MedicalField::Bmi => &mut self.bmi,
            MedicalField::DiabetesPedigreeFunction => &mut self.diabetes_pedigree_function,
            MedicalField::Age => &mut self.age,
        }
    }

    /// Coerce every field to a number.
    ///
    /// Returns the first field that is empty or not a finite non-negative number.
    pub fn to_input(&self) -> Result<MedicalInput, MedicalField> {
        let parse = |field: MedicalField| -> Result<f64, MedicalField> {
            self.get(field)
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite() && *value >= 0.0)
                .ok_or(field)
        };

        Ok(MedicalInput {
            pregnancies: parse(MedicalField::Pregnancies)?,
            glucose: parse(MedicalField::Glucose)?,
            blood_pressure: parse(MedicalField::BloodPressure)?,
            skin_thickness: parse(MedicalField::SkinThickness)?,
            insulin: parse(MedicalField::Insulin)?,
            bmi: parse(MedicalField::Bmi)?,
            diabetes_pedigree_function: parse(MedicalField::DiabetesPedigreeFunction)?,
            age: parse(MedicalField::Age)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_round_trip_through_lookup() {
        for field in MedicalField::ALL {
            assert_eq!(MedicalField::from_name(field.name()), Some(field));
        }
        assert_eq!(MedicalField::from_name("Glucose"), None);
        assert_eq!(MedicalField::from_name("cholesterol"), None);
    }

    #[test]
    fn test_glucose_hint_range() {
        let hint = MedicalField::Glucose.hint();
        assert_eq!(hint.unit, "mg/dL");
        assert!(hint.contains(50.0));
        assert!(hint.contains(200.0));
        assert!(!hint.contains(201.0));
    }

    #[test]
    fn test_validate_rejects_negative_values() {
        let input = MedicalInput {
            glucose: -1.0,
            ..MedicalInput::default()
        };
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("glucose"));

        assert!(MedicalInput::default().validate().is_ok());
    }

    #[test]
    fn test_draft_to_input_coerces_numbers() {
        let draft = MedicalDraft {
            pregnancies: "2".to_string(),
            glucose: "150".to_string(),
            blood_pressure: "72".to_string(),
            skin_thickness: "35".to_string(),
            insulin: "0".to_string(),
            bmi: "33.6".to_string(),
            diabetes_pedigree_function: "0.627".to_string(),
            age: "50".to_string(),
        };

        let input = draft.to_input().unwrap();
        assert_eq!(input.glucose, 150.0);
        assert_eq!(input.bmi, 33.6);
        assert_eq!(input.value(MedicalField::DiabetesPedigreeFunction), 0.627);
    }

    #[test]
    fn test_draft_to_input_reports_first_missing_field() {
        let draft = MedicalDraft {
            pregnancies: "1".to_string(),
            glucose: "100".to_string(),
            ..MedicalDraft::default()
        };
        assert_eq!(draft.to_input(), Err(MedicalField::BloodPressure));
    }
}
