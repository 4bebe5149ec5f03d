pub mod assessment;
pub mod health;
pub mod prediction;

// Tests module
#[cfg(test)]
mod tests;

// Re-export handlers for easier imports
pub use assessment::create_assessment;
pub use health::health_check;
pub use prediction::{predict, root};
