//! Domain layer health check functionality
//! The relay is only useful while the inference service answers, so health
//! reports on both the API process and that upstream.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::services::prediction::PredictionRelayTrait;

/// System health status
#[derive(Debug, Clone, PartialEq)]
pub enum SystemStatus {
    /// All components are healthy
    Healthy,
    /// Some components are degraded but the system is functional
    Degraded,
    /// System is not functioning properly
    Unhealthy,
}

/// Component health status
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

/// Represents a health component with status and optional details
#[derive(Debug, Clone)]
pub struct HealthComponent {
    pub status: ComponentStatus,
    pub details: Option<String>,
}

/// Represents the overall health of the system
#[derive(Debug, Clone)]
pub struct SystemHealth {
    pub status: SystemStatus,
    /// Map of component names to their health status
    pub components: HashMap<String, HealthComponent>,
}

/// Trait for health services
#[async_trait]
pub trait HealthServiceTrait: Send + Sync {
    /// Get the overall system health
    async fn get_system_health(&self) -> SystemHealth;

    /// Check whether the inference service answers
    async fn check_inference_status(&self) -> Result<(), String>;
}

/// Health service backed by the prediction relay
pub struct RelayHealthService {
    relay: Arc<dyn PredictionRelayTrait + Send + Sync>,
}

impl RelayHealthService {
    pub fn new(relay: Arc<dyn PredictionRelayTrait + Send + Sync>) -> Self {
        Self { relay }
    }
}

#[async_trait]
impl HealthServiceTrait for RelayHealthService {
    async fn get_system_health(&self) -> SystemHealth {
        let inference = match self.check_inference_status().await {
            Ok(()) => HealthComponent {
                status: ComponentStatus::Healthy,
                details: None,
            },
            Err(e) => {
                warn!("Inference service health check failed: {}", e);
                HealthComponent {
                    status: ComponentStatus::Unhealthy,
                    details: Some(e),
                }
            }
        };

        // The API keeps serving the form logic without inference, so a
        // missing upstream degrades rather than fails the system.
        let status = if inference.status == ComponentStatus::Healthy {
            SystemStatus::Healthy
        } else {
            SystemStatus::Degraded
        };

        let api = HealthComponent {
            status: ComponentStatus::Healthy,
            details: None,
        };

        SystemHealth {
            status,
            components: vec![("api".to_string(), api), ("inference".to_string(), inference)]
                .into_iter()
                .collect(),
        }
    }

    async fn check_inference_status(&self) -> Result<(), String> {
        self.relay.check_upstream().await.map_err(|e| e.to_string())
    }
}

/// Create the default health service
pub fn create_health_service(
    relay: Arc<dyn PredictionRelayTrait + Send + Sync>,
) -> Arc<dyn HealthServiceTrait + Send + Sync> {
    Arc::new(RelayHealthService::new(relay))
}
