// Public entities for the DiabetesRisk API
// Request and response bodies shared across the HTTP boundary

// Prediction and assessment request bodies
pub mod prediction;

// Common entities for error handling
pub mod common;
