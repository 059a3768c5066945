//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{
    config::AppConfig, example_service::DefaultExampleService, ports::ExampleService,
};
use crate::use_cases::ExampleCommand;

/// Main application state.
///
/// Holds the service port and the use cases built on top of it.
pub struct App {
    pub service: Arc<dyn ExampleService>,
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub example: ExampleCommand,
}

impl App {
    /// Wire the real service from configuration.
    pub fn new(config: &AppConfig) -> Self {
        tracing::debug!(
            param1 = %config.param1,
            param2 = %config.param2,
            "Constructing example service"
        );
        let service = DefaultExampleService::new(config.param1.clone(), config.param2.clone());
        Self::with_service(Arc::new(service))
    }

    /// Wire an arbitrary implementation of the service port.
    pub fn with_service(service: Arc<dyn ExampleService>) -> Self {
        let use_cases = UseCases {
            example: ExampleCommand::new(service.clone()),
        };
        Self { service, use_cases }
    }
}
