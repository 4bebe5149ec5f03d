// DiabetesRisk Data
// This crate handles wire formats and external service interactions

// HTTP clients for the backend relay and the inference service
pub mod client;

// Wire models exchanged with the backend and the inference service
pub mod models;
