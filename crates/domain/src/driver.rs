//! Driver — the single record managed by drivehub.
//!
//! Drivers are created from a [`DriverParams`] allow-list, read back by id,
//! partially updated, and deleted. Identity is assigned by the store.

mod params;
mod vin;

pub use params::DriverParams;
pub use vin::{VIN_LENGTH, Vin};

use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, ValidationErrors};
use crate::id::DriverId;
use crate::time::{self, Timestamp};

/// A persisted driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Driver {
    pub id: DriverId,
    pub name: String,
    pub vin: Vin,
    pub available: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A validated driver that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDriver {
    pub name: String,
    pub vin: Vin,
    pub available: bool,
    pub created_at: Timestamp,
}

/// Raw, unvalidated field values backing a create or edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DriverDraft {
    pub name: String,
    pub vin: String,
    pub available: bool,
}

impl Driver {
    /// Empty form model for a driver that does not exist yet.
    #[must_use]
    pub fn template() -> DriverDraft {
        DriverDraft {
            available: true,
            ..DriverDraft::default()
        }
    }

    /// Current values as form input.
    #[must_use]
    pub fn draft(&self) -> DriverDraft {
        DriverDraft {
            name: self.name.clone(),
            vin: self.vin.to_string(),
            available: self.available,
        }
    }

    /// Apply a partial update, returning the changed driver.
    ///
    /// Only supplied fields change. `id` and `created_at` are never touched;
    /// `updated_at` is refreshed.
    ///
    /// # Errors
    ///
    /// Returns every [`ValidationError`] found on the merged values, or
    /// [`ValidationError::MissingParameters`] when `params` is empty.
    pub fn apply(&self, params: &DriverParams) -> Result<Self, ValidationErrors> {
        if params.is_empty() {
            return Err(ValidationError::MissingParameters.into());
        }

        let mut errors = ValidationErrors::new();
        let name = params.name.clone().unwrap_or_else(|| self.name.clone());
        check_name(&name, &mut errors);
        let vin = match &params.vin {
            Some(raw) => check_vin(raw.clone(), &mut errors),
            None => Some(self.vin.clone()),
        };

        match vin {
            Some(vin) => errors.into_result(Self {
                id: self.id,
                name,
                vin,
                available: params.available.unwrap_or(self.available),
                created_at: self.created_at,
                updated_at: time::now(),
            }),
            None => Err(errors),
        }
    }
}

impl DriverParams {
    /// Validate the supplied fields and build a [`NewDriver`].
    ///
    /// `available` is forced to `true` after validation whatever the caller
    /// sent; `id` is dropped.
    ///
    /// # Errors
    ///
    /// Returns every [`ValidationError`] found, or
    /// [`ValidationError::MissingParameters`] when nothing was supplied.
    pub fn into_new_driver(self) -> Result<NewDriver, ValidationErrors> {
        if self.is_empty() {
            return Err(ValidationError::MissingParameters.into());
        }

        let mut errors = ValidationErrors::new();
        let name = self.name.unwrap_or_default();
        check_name(&name, &mut errors);
        let vin = check_vin(self.vin.unwrap_or_default(), &mut errors);

        match vin {
            Some(vin) => errors.into_result(NewDriver {
                name,
                vin,
                available: true,
                created_at: time::now(),
            }),
            None => Err(errors),
        }
    }
}

fn check_name(name: &str, errors: &mut ValidationErrors) {
    if name.trim().is_empty() {
        errors.push(ValidationError::BlankName);
    }
}

fn check_vin(raw: String, errors: &mut ValidationErrors) -> Option<Vin> {
    Vin::parse(raw).map_err(|err| errors.push(err)).ok()
}
