//! Storage port — repository trait for driver persistence.

use std::future::Future;

use drivehub_domain::driver::{Driver, NewDriver};
use drivehub_domain::error::DriveHubError;
use drivehub_domain::id::DriverId;

/// Repository for persisting and querying [`Driver`]s.
///
/// Absence is never an error: lookups and single-row writes report a missing
/// row through `Option` / `bool`.
pub trait DriverRepository {
    /// Insert a new driver; the store assigns its id.
    fn create(
        &self,
        driver: NewDriver,
    ) -> impl Future<Output = Result<Driver, DriveHubError>> + Send;

    /// Get a driver by its identifier.
    fn get_by_id(
        &self,
        id: DriverId,
    ) -> impl Future<Output = Result<Option<Driver>, DriveHubError>> + Send;

    /// Get all drivers in store order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Driver>, DriveHubError>> + Send;

    /// Overwrite the stored row with the same id.
    ///
    /// Resolves to `None` when no such row exists.
    fn update(
        &self,
        driver: Driver,
    ) -> impl Future<Output = Result<Option<Driver>, DriveHubError>> + Send;

    /// Delete a driver, resolving to `false` when nothing matched.
    fn delete(&self, id: DriverId) -> impl Future<Output = Result<bool, DriveHubError>> + Send;

    /// Number of stored drivers.
    fn count(&self) -> impl Future<Output = Result<u64, DriveHubError>> + Send;
}
