// Wire models
// Field names here are the contract with the services on the other end of the wire.

pub mod prediction;

pub use prediction::{InferencePayload, PredictionPayload, PredictionResponse};
