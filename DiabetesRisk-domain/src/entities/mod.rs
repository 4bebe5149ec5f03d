// Domain entities and value objects
pub mod conversions;
pub mod lifestyle;
pub mod medical;
pub mod prediction;
pub mod recommendation;

// Re-export common types for easier imports
pub use lifestyle::{Alcohol, Diet, InvalidChoice, LifestyleInput, PhysicalActivity, Smoking};
pub use medical::{FieldHint, MedicalDraft, MedicalField, MedicalInput};
pub use prediction::{InvalidLabel, PredictionLabel, ResultState, Submission};
pub use recommendation::{
    LifestyleCategory, LifestyleRecommendation, MedicalRecommendation, Priority, Recommendations, RiskFactor,
};
