//! JSON REST handlers for drivers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use drivehub_app::ports::DriverRepository;
use drivehub_app::services::driver_service::{CreateOutcome, DestroyOutcome, UpdateOutcome};
use drivehub_domain::driver::{Driver, DriverParams};
use drivehub_domain::error::NotFoundError;
use drivehub_domain::id::DriverId;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for create and update: permitted fields nested under `driver`.
#[derive(Deserialize)]
pub struct DriverEnvelope {
    #[serde(default)]
    pub driver: Option<DriverParams>,
}

impl DriverEnvelope {
    fn into_params(self) -> DriverParams {
        self.driver.unwrap_or_default()
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Driver>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and update endpoints.
pub enum GetResponse {
    Ok(Json<Driver>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Driver>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => {
                let location = format!("/api/drivers/{}", json.0.id);
                (StatusCode::CREATED, [(header::LOCATION, location)], json).into_response()
            }
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

fn not_found(id: &str) -> ApiError {
    NotFoundError {
        entity: "Driver",
        id: id.to_string(),
    }
    .into()
}

/// Parse a path id; anything that is not an integer cannot name a driver.
fn parse_id(id: &str) -> Result<DriverId, ApiError> {
    id.parse().map_err(|_| not_found(id))
}

/// `GET /api/drivers`
pub async fn list<DR>(State(state): State<AppState<DR>>) -> Result<ListResponse, ApiError>
where
    DR: DriverRepository + Send + Sync + 'static,
{
    let drivers = state.driver_service.list_drivers().await?;
    Ok(ListResponse::Ok(Json(drivers)))
}

/// `GET /api/drivers/:id`
pub async fn get<DR>(
    State(state): State<AppState<DR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    DR: DriverRepository + Send + Sync + 'static,
{
    let driver_id = parse_id(&id)?;
    match state.driver_service.find_driver(driver_id).await? {
        Some(driver) => Ok(GetResponse::Ok(Json(driver))),
        None => Err(not_found(&id)),
    }
}

/// `POST /api/drivers`
pub async fn create<DR>(
    State(state): State<AppState<DR>>,
    Json(body): Json<DriverEnvelope>,
) -> Result<CreateResponse, ApiError>
where
    DR: DriverRepository + Send + Sync + 'static,
{
    match state.driver_service.create_driver(body.into_params()).await? {
        CreateOutcome::Created(driver) => Ok(CreateResponse::Created(Json(driver))),
        CreateOutcome::Invalid { errors, .. } => Err(errors.into()),
    }
}

/// `PATCH /api/drivers/:id` and `PUT /api/drivers/:id`
pub async fn update<DR>(
    State(state): State<AppState<DR>>,
    Path(id): Path<String>,
    Json(body): Json<DriverEnvelope>,
) -> Result<GetResponse, ApiError>
where
    DR: DriverRepository + Send + Sync + 'static,
{
    let driver_id = parse_id(&id)?;
    match state
        .driver_service
        .update_driver(driver_id, body.into_params())
        .await?
    {
        UpdateOutcome::Updated(driver) => Ok(GetResponse::Ok(Json(driver))),
        UpdateOutcome::Invalid { errors, .. } => Err(errors.into()),
        UpdateOutcome::NotFound => Err(not_found(&id)),
    }
}

/// `DELETE /api/drivers/:id`
pub async fn delete<DR>(
    State(state): State<AppState<DR>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    DR: DriverRepository + Send + Sync + 'static,
{
    let driver_id = parse_id(&id)?;
    match state.driver_service.destroy_driver(driver_id).await? {
        DestroyOutcome::Destroyed => Ok(DeleteResponse::NoContent),
        DestroyOutcome::NotFound => Err(not_found(&id)),
    }
}
