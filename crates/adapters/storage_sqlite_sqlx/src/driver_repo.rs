//! `SQLite` implementation of [`DriverRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use drivehub_app::ports::DriverRepository;
use drivehub_domain::driver::{Driver, NewDriver, Vin};
use drivehub_domain::error::DriveHubError;
use drivehub_domain::id::DriverId;
use drivehub_domain::time::Timestamp;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain types without polluting
/// domain structs with database concerns.
struct Wrapper(Driver);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Driver> {
        value.map(|w| w.0)
    }
}

fn parse_timestamp(value: &str) -> Result<Timestamp, sqlx::Error> {
    chrono::DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.to_utc())
        .map_err(|err| sqlx::Error::Decode(Box::new(err)))
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let vin: String = row.try_get("vin")?;
        let available: bool = row.try_get("available")?;
        let created_at: String = row.try_get("created_at")?;
        let updated_at: String = row.try_get("updated_at")?;

        let vin = Vin::parse(vin).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Driver {
            id: DriverId::new(id),
            name,
            vin,
            available,
            created_at: parse_timestamp(&created_at)?,
            updated_at: parse_timestamp(&updated_at)?,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO drivers (name, vin, available, created_at, updated_at)
    VALUES (?, ?, ?, ?, ?)
";

const SELECT_BY_ID: &str = "SELECT * FROM drivers WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM drivers ORDER BY id";
const COUNT: &str = "SELECT COUNT(*) FROM drivers";

const UPDATE: &str = r"
    UPDATE drivers
    SET name = ?, vin = ?, available = ?, updated_at = ?
    WHERE id = ?
";

const DELETE_BY_ID: &str = "DELETE FROM drivers WHERE id = ?";

/// `SQLite`-backed driver repository.
#[derive(Clone)]
pub struct SqliteDriverRepository {
    pool: SqlitePool,
}

impl SqliteDriverRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl DriverRepository for SqliteDriverRepository {
    async fn create(&self, driver: NewDriver) -> Result<Driver, DriveHubError> {
        let created_at = driver.created_at.to_rfc3339();
        let result = sqlx::query(INSERT)
            .bind(&driver.name)
            .bind(driver.vin.as_str())
            .bind(driver.available)
            .bind(&created_at)
            .bind(&created_at)
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Driver {
            id: DriverId::new(result.last_insert_rowid()),
            name: driver.name,
            vin: driver.vin,
            available: driver.available,
            created_at: driver.created_at,
            updated_at: driver.created_at,
        })
    }

    async fn get_by_id(&self, id: DriverId) -> Result<Option<Driver>, DriveHubError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }

    async fn get_all(&self) -> Result<Vec<Driver>, DriveHubError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn update(&self, driver: Driver) -> Result<Option<Driver>, DriveHubError> {
        let result = sqlx::query(UPDATE)
            .bind(&driver.name)
            .bind(driver.vin.as_str())
            .bind(driver.available)
            .bind(driver.updated_at.to_rfc3339())
            .bind(driver.id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok((result.rows_affected() > 0).then_some(driver))
    }

    async fn delete(&self, id: DriverId) -> Result<bool, DriveHubError> {
        let result = sqlx::query(DELETE_BY_ID)
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<u64, DriveHubError> {
        let count: i64 = sqlx::query_scalar(COUNT)
            .fetch_one(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(u64::try_from(count).unwrap_or_default())
    }
}
