//! Driver service — the resource actions for drivers.
//!
//! Every action that can miss its target returns an outcome enum with a
//! `NotFound` variant; validation failures come back as `Invalid` outcomes
//! carrying what the user typed. `Err` is reserved for storage failures.

use drivehub_domain::driver::{Driver, DriverDraft, DriverParams};
use drivehub_domain::error::{DriveHubError, ValidationErrors};
use drivehub_domain::id::DriverId;

use crate::ports::DriverRepository;

/// Result of [`DriverService::create_driver`].
#[derive(Debug)]
pub enum CreateOutcome {
    Created(Driver),
    /// Nothing was stored; `draft` holds the submitted values.
    Invalid {
        draft: DriverDraft,
        errors: ValidationErrors,
    },
}

/// Result of [`DriverService::update_driver`].
#[derive(Debug)]
pub enum UpdateOutcome {
    Updated(Driver),
    /// The stored `driver` is unchanged; `draft` holds the submitted values.
    Invalid {
        driver: Driver,
        draft: DriverDraft,
        errors: ValidationErrors,
    },
    NotFound,
}

/// Result of [`DriverService::destroy_driver`].
#[derive(Debug, PartialEq, Eq)]
pub enum DestroyOutcome {
    Destroyed,
    NotFound,
}

/// Application service for driver CRUD operations.
pub struct DriverService<R> {
    repo: R,
}

impl<R: DriverRepository> DriverService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List all drivers in store order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_drivers(&self) -> Result<Vec<Driver>, DriveHubError> {
        self.repo.get_all().await
    }

    /// Look up a driver by id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn find_driver(&self, id: DriverId) -> Result<Option<Driver>, DriveHubError> {
        self.repo.get_by_id(id).await
    }

    /// Blank form model for a new driver. Touches no storage.
    #[must_use]
    #[tracing::instrument(skip(self))]
    pub fn new_driver_form(&self) -> DriverDraft {
        Driver::template()
    }

    /// Validate `params` and store a new driver with `available` forced on.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, params))]
    pub async fn create_driver(
        &self,
        params: DriverParams,
    ) -> Result<CreateOutcome, DriveHubError> {
        log_unpermitted(&params);
        let draft = params.draft_over(&Driver::template());
        match params.into_new_driver() {
            Ok(new_driver) => {
                let driver = self.repo.create(new_driver).await?;
                tracing::info!(driver_id = %driver.id, "driver created");
                Ok(CreateOutcome::Created(driver))
            }
            Err(errors) => {
                tracing::debug!(%errors, "driver rejected");
                Ok(CreateOutcome::Invalid { draft, errors })
            }
        }
    }

    /// Load a driver for its edit form.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn edit_driver_form(&self, id: DriverId) -> Result<Option<Driver>, DriveHubError> {
        self.find_driver(id).await
    }

    /// Apply `params` as a partial update to the driver with `id`.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, params))]
    pub async fn update_driver(
        &self,
        id: DriverId,
        params: DriverParams,
    ) -> Result<UpdateOutcome, DriveHubError> {
        let Some(driver) = self.repo.get_by_id(id).await? else {
            return Ok(UpdateOutcome::NotFound);
        };

        log_unpermitted(&params);
        match driver.apply(&params) {
            Ok(changed) => match self.repo.update(changed).await? {
                Some(saved) => {
                    tracing::info!(driver_id = %saved.id, "driver updated");
                    Ok(UpdateOutcome::Updated(saved))
                }
                None => Ok(UpdateOutcome::NotFound),
            },
            Err(errors) => {
                tracing::debug!(driver_id = %id, %errors, "driver update rejected");
                let draft = params.draft_over(&driver.draft());
                Ok(UpdateOutcome::Invalid {
                    driver,
                    draft,
                    errors,
                })
            }
        }
    }

    /// Delete the driver with `id`.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn destroy_driver(&self, id: DriverId) -> Result<DestroyOutcome, DriveHubError> {
        if self.repo.get_by_id(id).await?.is_none() {
            return Ok(DestroyOutcome::NotFound);
        }
        if self.repo.delete(id).await? {
            tracing::info!(driver_id = %id, "driver destroyed");
            Ok(DestroyOutcome::Destroyed)
        } else {
            Ok(DestroyOutcome::NotFound)
        }
    }

    /// Number of stored drivers.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn count_drivers(&self) -> Result<u64, DriveHubError> {
        self.repo.count().await
    }
}

fn log_unpermitted(params: &DriverParams) {
    let keys: Vec<&str> = params.unpermitted_keys().collect();
    if !keys.is_empty() {
        tracing::debug!(?keys, "unpermitted driver parameters dropped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drivehub_domain::driver::NewDriver;
    use drivehub_domain::error::ValidationError;
    use std::collections::BTreeMap;
    use std::future::Future;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryDriverRepo {
        store: Mutex<(i64, BTreeMap<DriverId, Driver>)>,
    }

    impl DriverRepository for InMemoryDriverRepo {
        fn create(
            &self,
            driver: NewDriver,
        ) -> impl Future<Output = Result<Driver, DriveHubError>> + Send {
            let mut guard = self.store.lock().unwrap();
            guard.0 += 1;
            let stored = Driver {
                id: DriverId::new(guard.0),
                name: driver.name,
                vin: driver.vin,
                available: driver.available,
                created_at: driver.created_at,
                updated_at: driver.created_at,
            };
            guard.1.insert(stored.id, stored.clone());
            async { Ok(stored) }
        }

        fn get_by_id(
            &self,
            id: DriverId,
        ) -> impl Future<Output = Result<Option<Driver>, DriveHubError>> + Send {
            let result = self.store.lock().unwrap().1.get(&id).cloned();
            async { Ok(result) }
        }

        fn get_all(&self) -> impl Future<Output = Result<Vec<Driver>, DriveHubError>> + Send {
            let result: Vec<Driver> = self.store.lock().unwrap().1.values().cloned().collect();
            async { Ok(result) }
        }

        fn update(
            &self,
            driver: Driver,
        ) -> impl Future<Output = Result<Option<Driver>, DriveHubError>> + Send {
            let mut guard = self.store.lock().unwrap();
            let result = guard.1.get_mut(&driver.id).map(|slot| {
                *slot = driver.clone();
                driver
            });
            async { Ok(result) }
        }

        fn delete(&self, id: DriverId) -> impl Future<Output = Result<bool, DriveHubError>> + Send {
            let removed = self.store.lock().unwrap().1.remove(&id).is_some();
            async move { Ok(removed) }
        }

        fn count(&self) -> impl Future<Output = Result<u64, DriveHubError>> + Send {
            let count = self.store.lock().unwrap().1.len() as u64;
            async move { Ok(count) }
        }
    }

    fn make_service() -> DriverService<InMemoryDriverRepo> {
        DriverService::new(InMemoryDriverRepo::default())
    }

    fn valid_params() -> DriverParams {
        DriverParams::default()
            .name("Solomon Mehru")
            .vin("WBWSS52P9NEYLVDE9")
    }

    async fn seed(svc: &DriverService<InMemoryDriverRepo>) -> Driver {
        match svc
            .create_driver(DriverParams::default().name("Update Me").vin("ABCDEFGHIJKLMNOPQ"))
            .await
            .unwrap()
        {
            CreateOutcome::Created(driver) => driver,
            CreateOutcome::Invalid { errors, .. } => panic!("seed rejected: {errors}"),
        }
    }

    #[tokio::test]
    async fn should_list_nothing_when_store_empty() {
        let svc = make_service();
        assert!(svc.list_drivers().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_create_driver_when_valid() {
        let svc = make_service();

        let outcome = svc.create_driver(valid_params()).await.unwrap();
        let CreateOutcome::Created(driver) = outcome else {
            panic!("expected driver to be created");
        };

        assert_eq!(driver.name, "Solomon Mehru");
        assert_eq!(driver.vin.as_str(), "WBWSS52P9NEYLVDE9");
        assert!(driver.available);
        assert_eq!(svc.count_drivers().await.unwrap(), 1);
        assert_eq!(svc.find_driver(driver.id).await.unwrap(), Some(driver));
    }

    #[tokio::test]
    async fn should_force_available_when_caller_disables_it() {
        let svc = make_service();
        let outcome = svc
            .create_driver(valid_params().available(false))
            .await
            .unwrap();
        assert!(matches!(outcome, CreateOutcome::Created(driver) if driver.available));
    }

    #[tokio::test]
    async fn should_not_store_driver_when_vin_malformed() {
        let svc = make_service();

        let outcome = svc
            .create_driver(DriverParams::default().name("Richard Salazar").vin("48765"))
            .await
            .unwrap();

        let CreateOutcome::Invalid { draft, errors } = outcome else {
            panic!("expected validation failure");
        };
        assert_eq!(draft.vin, "48765");
        assert!(errors.has_field("vin"));
        assert_eq!(svc.count_drivers().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn should_not_store_driver_when_name_missing() {
        let svc = make_service();
        let outcome = svc
            .create_driver(DriverParams::default().vin("abcdefghijklmnopq"))
            .await
            .unwrap();
        assert!(matches!(outcome, CreateOutcome::Invalid { .. }));
        assert_eq!(svc.count_drivers().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn should_return_none_when_driver_missing() {
        let svc = make_service();
        assert!(svc.find_driver(DriverId::new(-1)).await.unwrap().is_none());
        assert!(
            svc.edit_driver_form(DriverId::new(-1))
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn should_hand_out_blank_available_template() {
        let svc = make_service();
        let draft = svc.new_driver_form();
        assert!(draft.name.is_empty());
        assert!(draft.available);
        assert_eq!(svc.count_drivers().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn should_update_driver_when_valid() {
        let svc = make_service();
        let driver = seed(&svc).await;

        let outcome = svc
            .update_driver(
                driver.id,
                DriverParams::default()
                    .name("new name")
                    .vin("ABCDEFGHIJKLMNOPQ"),
            )
            .await
            .unwrap();

        assert!(matches!(outcome, UpdateOutcome::Updated(ref d) if d.id == driver.id));
        let fetched = svc.find_driver(driver.id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "new name");
        assert_eq!(svc.count_drivers().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn should_keep_driver_unchanged_when_update_invalid() {
        let svc = make_service();
        let driver = seed(&svc).await;

        let outcome = svc
            .update_driver(driver.id, DriverParams::default().name("new name").vin(""))
            .await
            .unwrap();

        let UpdateOutcome::Invalid {
            driver: unchanged,
            draft,
            errors,
        } = outcome
        else {
            panic!("expected validation failure");
        };
        assert_eq!(unchanged, driver);
        assert_eq!(draft.name, "new name");
        assert_eq!(errors, ValidationErrors::from(ValidationError::BlankVin));
        assert_eq!(svc.find_driver(driver.id).await.unwrap(), Some(driver));
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_missing_driver() {
        let svc = make_service();
        let outcome = svc
            .update_driver(DriverId::new(-1), valid_params())
            .await
            .unwrap();
        assert!(matches!(outcome, UpdateOutcome::NotFound));
    }

    #[tokio::test]
    async fn should_update_nothing_when_only_unpermitted_keys_supplied() {
        let svc = make_service();
        let driver = seed(&svc).await;

        let outcome = svc
            .update_driver(driver.id, DriverParams::default().unpermitted("admin"))
            .await
            .unwrap();

        let UpdateOutcome::Updated(updated) = outcome else {
            panic!("expected update to go through");
        };
        assert_eq!(updated.name, driver.name);
        assert_eq!(updated.vin, driver.vin);
    }

    #[tokio::test]
    async fn should_report_not_found_before_missing_params() {
        let svc = make_service();
        let outcome = svc
            .update_driver(DriverId::new(-1), DriverParams::default())
            .await
            .unwrap();
        assert!(matches!(outcome, UpdateOutcome::NotFound));
    }

    #[tokio::test]
    async fn should_destroy_driver_when_exists() {
        let svc = make_service();
        let driver = seed(&svc).await;

        let outcome = svc.destroy_driver(driver.id).await.unwrap();

        assert_eq!(outcome, DestroyOutcome::Destroyed);
        assert_eq!(svc.count_drivers().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn should_return_not_found_when_destroying_missing_driver() {
        let svc = make_service();
        seed(&svc).await;

        let outcome = svc.destroy_driver(DriverId::new(-1)).await.unwrap();

        assert_eq!(outcome, DestroyOutcome::NotFound);
        assert_eq!(svc.count_drivers().await.unwrap(), 1);
    }
}
