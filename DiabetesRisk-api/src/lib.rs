// DiabetesRisk-api lib.rs
//
// HTTP surface of the diabetes risk predictor: the prediction relay, the
// assessment endpoint, health and API docs.

// Public modules
pub mod api;
pub mod config;
pub mod entities;
pub mod openapi;
