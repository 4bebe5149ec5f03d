use serde::{Deserialize, Serialize};

/// Human-readable explanation of one threshold breach
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RiskFactor(String);

impl RiskFactor {
    pub(crate) fn new(text: String) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RiskFactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for RiskFactor {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Urgency of a medical recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
}

/// Grouping of a lifestyle tip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifestyleCategory {
    Activity,
    Habits,
    Nutrition,
    /// Positive reinforcement when no lifestyle tip applies
    General,
}

/// Recommendation derived from a medical threshold
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalRecommendation {
    pub text: String,
    pub priority: Priority,
}

/// Recommendation derived from a lifestyle choice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifestyleRecommendation {
    pub text: String,
    pub icon: String,
    pub category: LifestyleCategory,
}

/// Both recommendation lists for one assessment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendations {
    /// Medical recommendations in glucose, blood pressure, BMI order
    pub medical: Vec<MedicalRecommendation>,
    
    /// Lifestyle tips; never empty
    pub lifestyle: Vec<LifestyleRecommendation>,
}

impl Recommendations {
    /// The positive-reinforcement entry, if it is the only lifestyle entry
    pub fn positive_reinforcement(&self) -> Option<&LifestyleRecommendation> {
        match self.lifestyle.as_slice() {
            [only] if only.category == LifestyleCategory::General => Some(only),
            _ => None,
        }
    }
}
