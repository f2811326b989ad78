//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`DriveHubError`] via `#[from]`. A missing record is *not* an error at the
//! port or service level: lookups return `Option` and callers branch on it.

use std::fmt;

/// Top-level error shared by every layer.
#[derive(Debug, thiserror::Error)]
pub enum DriveHubError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("param is missing or the value is empty: driver")]
    MissingParameters,

    #[error("name can't be blank")]
    BlankName,

    #[error("vin can't be blank")]
    BlankVin,

    #[error("vin is the wrong length (should be {expected} characters, got {actual})")]
    VinLength { expected: usize, actual: usize },

    #[error("vin must contain only letters and digits")]
    VinCharacters,
}

impl ValidationError {
    /// Name of the parameter the failure is attached to.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingParameters => "driver",
            Self::BlankName => "name",
            Self::BlankVin | Self::VinLength { .. } | Self::VinCharacters => "vin",
        }
    }
}

/// Every validation failure found on one input, in detection order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: ValidationError) {
        self.0.push(error);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }

    /// Whether any failure is attached to `field`.
    #[must_use]
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|err| err.field() == field)
    }

    /// Return `value` when no failure was recorded, `self` otherwise.
    ///
    /// # Errors
    ///
    /// Returns `self` when at least one failure was pushed.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(err: ValidationError) -> Self {
        Self(vec![err])
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, err) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            err.fmt(f)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl From<ValidationError> for DriveHubError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err.into())
    }
}

/// A record looked up by id does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}
