// DiabetesRisk Domain
// Business logic for the diabetes risk predictor: the two-step form, the
// risk explainer, result rendering and the inference relay.

// Services that implement business logic
pub mod services;

// Domain entities
pub mod entities;

// Health checks and system status
pub mod health;

// Testing utilities - available to unit tests and with the mock feature
#[cfg(any(test, feature = "mock"))]
pub mod testing;
