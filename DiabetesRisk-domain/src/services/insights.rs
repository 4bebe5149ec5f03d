//! Risk explanation: turns submitted inputs into risk factors and advice.
//!
//! Everything here is a pure function of its arguments.

use crate::entities::lifestyle::{Alcohol, Diet, LifestyleInput, PhysicalActivity, Smoking};
use crate::entities::medical::MedicalInput;
use crate::entities::prediction::ResultState;
use crate::entities::recommendation::{
    LifestyleCategory, LifestyleRecommendation, MedicalRecommendation, Priority, Recommendations, RiskFactor,
};

/// Glucose above this (mg/dL) is flagged
pub const GLUCOSE_THRESHOLD: f64 = 140.0;
/// Blood pressure above this (mmHg) is flagged
pub const BLOOD_PRESSURE_THRESHOLD: f64 = 130.0;
/// BMI at or above this is flagged
pub const OBESITY_BMI_THRESHOLD: f64 = 30.0;
/// Age above this is flagged
pub const AGE_THRESHOLD: f64 = 45.0;

fn glucose_elevated(input: &MedicalInput) -> bool {
    input.glucose > GLUCOSE_THRESHOLD
}

fn blood_pressure_elevated(input: &MedicalInput) -> bool {
    input.blood_pressure > BLOOD_PRESSURE_THRESHOLD
}

fn bmi_obese(input: &MedicalInput) -> bool {
    input.bmi >= OBESITY_BMI_THRESHOLD
}

/// Derive risk factors; each field is checked independently
pub fn derive_risk_factors(input: &MedicalInput) -> Vec<RiskFactor> {
    let mut factors = Vec::new();

    if glucose_elevated(input) {
        factors.push(RiskFactor::new(format!("Elevated glucose level ({} mg/dL)", input.glucose)));
    }
    if blood_pressure_elevated(input) {
        factors.push(RiskFactor::new(format!(
            "Elevated blood pressure ({} mmHg)",
            input.blood_pressure
        )));
    }
    if bmi_obese(input) {
        factors.push(RiskFactor::new(format!("High BMI ({}) indicating obesity", input.bmi)));
    }
    if input.age > AGE_THRESHOLD {
        factors.push(RiskFactor::new(format!("Age ({}) increases diabetes risk", input.age)));
    }

    factors
}

fn medical(text: &str, priority: Priority) -> MedicalRecommendation {
    MedicalRecommendation {
        text: text.to_string(),
        priority,
    }
}

fn tip(text: &str, icon: &str, category: LifestyleCategory) -> LifestyleRecommendation {
    LifestyleRecommendation {
        text: text.to_string(),
        icon: icon.to_string(),
        category,
    }
}

/// Derive medical and lifestyle recommendations.
///
/// Evaluation order is display order. The lifestyle list is never empty:
/// when no lifestyle tip applies it holds a single `General` entry.
pub fn derive_recommendations(input: &MedicalInput, lifestyle: &LifestyleInput) -> Recommendations {
    let mut medical_recs = Vec::new();

    if glucose_elevated(input) {
        medical_recs.push(medical(
            "Your glucose levels are elevated. Consider consulting a doctor for an HbA1c test.",
            Priority::High,
        ));
    }
    if blood_pressure_elevated(input) {
        medical_recs.push(medical(
            "Your blood pressure is above normal. Regular monitoring is recommended.",
            Priority::High,
        ));
    }
    if bmi_obese(input) {
        medical_recs.push(medical(
            "Weight loss of 5-10% can significantly reduce your diabetes risk.",
            Priority::Medium,
        ));
    }

    let mut tips = Vec::new();

    if lifestyle.physical_activity == PhysicalActivity::Low {
        tips.push(tip(
            "Aim for at least 150 minutes of moderate exercise per week.",
            "🏃‍♂️",
            LifestyleCategory::Activity,
        ));
    }

    if lifestyle.smoking == Smoking::Yes {
        tips.push(tip(
            "Quitting smoking can improve insulin sensitivity within weeks.",
            "🚭",
            LifestyleCategory::Habits,
        ));
    }

    match lifestyle.diet {
        Diet::Poor => tips.push(tip(
            "Focus on whole foods: vegetables, lean proteins, and whole grains.",
            "🥗",
            LifestyleCategory::Nutrition,
        )),
        Diet::Average => tips.push(tip(
            "Consider reducing processed foods and added sugars for additional benefits.",
            "🍎",
            LifestyleCategory::Nutrition,
        )),
        Diet::Healthy => {}
    }

    if lifestyle.alcohol == Alcohol::Frequently {
        tips.push(tip(
            "Limit alcohol to 1 drink/day for women, 2 for men to reduce risk.",
            "🚱",
            LifestyleCategory::Habits,
        ));
    }

    if tips.is_empty() {
        tips.push(tip(
            "Your current lifestyle choices are helping to reduce your diabetes risk!",
            "👍",
            LifestyleCategory::General,
        ));
    }

    Recommendations {
        medical: medical_recs,
        lifestyle: tips,
    }
}

/// Full explanation of one result
#[derive(Debug, Clone, PartialEq)]
pub struct Explanation {
    pub is_high_risk: bool,
    pub risk_factors: Vec<RiskFactor>,
    pub recommendations: Recommendations,
}

/// Explain a result state: label, factors and recommendations together
pub fn explain(state: &ResultState) -> Explanation {
    Explanation {
        is_high_risk: state.prediction.is_high_risk(),
        risk_factors: derive_risk_factors(&state.prediction_input),
        recommendations: derive_recommendations(&state.prediction_input, &state.lifestyle),
    }
}
