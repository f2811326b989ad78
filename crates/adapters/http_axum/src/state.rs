//! Shared application state for axum handlers.

use std::sync::Arc;

use drivehub_app::ports::DriverRepository;
use drivehub_app::services::driver_service::DriverService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not need to
/// be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<DR> {
    /// Driver CRUD service.
    pub driver_service: Arc<DriverService<DR>>,
}

impl<DR> Clone for AppState<DR> {
    fn clone(&self) -> Self {
        Self {
            driver_service: Arc::clone(&self.driver_service),
        }
    }
}

impl<DR> AppState<DR>
where
    DR: DriverRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(driver_service: DriverService<DR>) -> Self {
        Self {
            driver_service: Arc::new(driver_service),
        }
    }
}
