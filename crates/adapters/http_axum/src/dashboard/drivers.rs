//! Dashboard pages for drivers.
//!
//! A missing driver answers with a bare 404. Rejected input re-renders the
//! form with 400 and the submitted values. Successful writes redirect.

use askama::Template;
use axum::extract::rejection::FormRejection;
use axum::extract::{Form, Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use drivehub_app::ports::DriverRepository;
use drivehub_app::services::driver_service::{CreateOutcome, DestroyOutcome, UpdateOutcome};
use drivehub_domain::driver::{Driver, DriverDraft};
use drivehub_domain::error::ValidationErrors;
use drivehub_domain::id::DriverId;

use super::form::DriverForm;
use super::{DashboardError, render};
use crate::state::AppState;

/// Driver list page template.
#[derive(Template)]
#[template(path = "driver_list.html")]
pub struct DriverListTemplate {
    drivers: Vec<Driver>,
}

impl IntoResponse for DriverListTemplate {
    fn into_response(self) -> Response {
        render(&self, StatusCode::OK)
    }
}

/// Driver detail page template.
#[derive(Template)]
#[template(path = "driver_detail.html")]
pub struct DriverDetailTemplate {
    driver: Driver,
}

impl IntoResponse for DriverDetailTemplate {
    fn into_response(self) -> Response {
        render(&self, StatusCode::OK)
    }
}

/// New-driver form template.
#[derive(Template)]
#[template(path = "driver_new.html")]
pub struct DriverNewTemplate {
    action: String,
    method_override: Option<&'static str>,
    draft: DriverDraft,
    errors: ValidationErrors,
    show_available: bool,
}

impl DriverNewTemplate {
    fn new(draft: DriverDraft, errors: ValidationErrors) -> Self {
        Self {
            action: "/drivers".to_string(),
            method_override: None,
            draft,
            errors,
            show_available: false,
        }
    }
}

/// Edit-driver form template.
#[derive(Template)]
#[template(path = "driver_edit.html")]
pub struct DriverEditTemplate {
    driver: Driver,
    action: String,
    method_override: Option<&'static str>,
    draft: DriverDraft,
    errors: ValidationErrors,
    show_available: bool,
}

impl DriverEditTemplate {
    fn new(driver: Driver, draft: DriverDraft, errors: ValidationErrors) -> Self {
        Self {
            action: format!("/drivers/{}", driver.id),
            method_override: Some("patch"),
            driver,
            draft,
            errors,
            show_available: true,
        }
    }
}

impl IntoResponse for DriverEditTemplate {
    fn into_response(self) -> Response {
        render(&self, StatusCode::OK)
    }
}

/// Responses for pages that look a driver up by id.
pub enum LookupResponse<T> {
    Ok(T),
    NotFound,
}

impl<T: IntoResponse> IntoResponse for LookupResponse<T> {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(page) => page.into_response(),
            Self::NotFound => StatusCode::NOT_FOUND.into_response(),
        }
    }
}

/// Response from the create form handler.
pub enum CreateResponse {
    /// Redirect to the new driver's detail page.
    Redirect(String),
    /// Re-render the form with the submitted values.
    Invalid(DriverNewTemplate),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Redirect(path) => found(&path),
            Self::Invalid(page) => render(&page, StatusCode::BAD_REQUEST),
        }
    }
}

/// Response from the update form handler.
pub enum UpdateResponse {
    /// Redirect to the driver's detail page.
    Redirect(String),
    /// Re-render the edit form with the submitted values.
    Invalid(DriverEditTemplate),
    NotFound,
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Redirect(path) => found(&path),
            Self::Invalid(page) => render(&page, StatusCode::BAD_REQUEST),
            Self::NotFound => StatusCode::NOT_FOUND.into_response(),
        }
    }
}

/// Response from the destroy handler.
pub enum DestroyResponse {
    /// Redirect to the driver list.
    Redirect,
    NotFound,
}

impl IntoResponse for DestroyResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Redirect => found("/drivers"),
            Self::NotFound => StatusCode::NOT_FOUND.into_response(),
        }
    }
}

fn driver_path(id: DriverId) -> String {
    format!("/drivers/{id}")
}

/// `302 Found` pointing at `path`.
fn found(path: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, path)]).into_response()
}

/// `GET /drivers` — list all drivers.
pub async fn index<DR>(
    State(state): State<AppState<DR>>,
) -> Result<DriverListTemplate, DashboardError>
where
    DR: DriverRepository + Send + Sync + 'static,
{
    let drivers = state.driver_service.list_drivers().await?;
    Ok(DriverListTemplate { drivers })
}

/// `GET /drivers/:id` — driver detail.
pub async fn show<DR>(
    State(state): State<AppState<DR>>,
    Path(id): Path<String>,
) -> Result<LookupResponse<DriverDetailTemplate>, DashboardError>
where
    DR: DriverRepository + Send + Sync + 'static,
{
    let Ok(driver_id) = id.parse::<DriverId>() else {
        return Ok(LookupResponse::NotFound);
    };
    Ok(match state.driver_service.find_driver(driver_id).await? {
        Some(driver) => LookupResponse::Ok(DriverDetailTemplate { driver }),
        None => LookupResponse::NotFound,
    })
}

/// `GET /drivers/new` — blank creation form.
pub async fn new<DR>(State(state): State<AppState<DR>>) -> Response
where
    DR: DriverRepository + Send + Sync + 'static,
{
    let draft = state.driver_service.new_driver_form();
    render(
        &DriverNewTemplate::new(draft, ValidationErrors::new()),
        StatusCode::OK,
    )
}

/// `POST /drivers` — create a driver, then redirect to it.
pub async fn create<DR>(
    State(state): State<AppState<DR>>,
    form: Result<Form<DriverForm>, FormRejection>,
) -> Result<CreateResponse, DashboardError>
where
    DR: DriverRepository + Send + Sync + 'static,
{
    let params = DriverForm::or_empty(form).into_params();
    Ok(match state.driver_service.create_driver(params).await? {
        CreateOutcome::Created(driver) => {
            CreateResponse::Redirect(driver_path(driver.id))
        }
        CreateOutcome::Invalid { draft, errors } => {
            CreateResponse::Invalid(DriverNewTemplate::new(draft, errors))
        }
    })
}

/// `GET /drivers/:id/edit` — edit form for an existing driver.
pub async fn edit<DR>(
    State(state): State<AppState<DR>>,
    Path(id): Path<String>,
) -> Result<LookupResponse<DriverEditTemplate>, DashboardError>
where
    DR: DriverRepository + Send + Sync + 'static,
{
    let Ok(driver_id) = id.parse::<DriverId>() else {
        return Ok(LookupResponse::NotFound);
    };
    Ok(match state.driver_service.edit_driver_form(driver_id).await? {
        Some(driver) => {
            let draft = driver.draft();
            LookupResponse::Ok(DriverEditTemplate::new(
                driver,
                draft,
                ValidationErrors::new(),
            ))
        }
        None => LookupResponse::NotFound,
    })
}

/// `PATCH /drivers/:id` and `PUT /drivers/:id` — update a driver, then redirect to it.
pub async fn update<DR>(
    State(state): State<AppState<DR>>,
    Path(id): Path<String>,
    form: Result<Form<DriverForm>, FormRejection>,
) -> Result<UpdateResponse, DashboardError>
where
    DR: DriverRepository + Send + Sync + 'static,
{
    apply_update(&state, &id, DriverForm::or_empty(form)).await
}

/// `DELETE /drivers/:id` — destroy a driver, then go back to the list.
pub async fn destroy<DR>(
    State(state): State<AppState<DR>>,
    Path(id): Path<String>,
) -> Result<DestroyResponse, DashboardError>
where
    DR: DriverRepository + Send + Sync + 'static,
{
    apply_destroy(&state, &id).await
}

/// `POST /drivers/:id` — route a `_method` override to update or destroy.
pub async fn dispatch<DR>(
    State(state): State<AppState<DR>>,
    Path(id): Path<String>,
    form: Result<Form<DriverForm>, FormRejection>,
) -> Result<Response, DashboardError>
where
    DR: DriverRepository + Send + Sync + 'static,
{
    let form = DriverForm::or_empty(form);
    let method = form.method.as_deref().map(str::to_ascii_lowercase);
    match method.as_deref() {
        Some("patch" | "put") => Ok(apply_update(&state, &id, form).await?.into_response()),
        Some("delete") => Ok(apply_destroy(&state, &id).await?.into_response()),
        _ => Ok(StatusCode::METHOD_NOT_ALLOWED.into_response()),
    }
}

async fn apply_update<DR>(
    state: &AppState<DR>,
    id: &str,
    form: DriverForm,
) -> Result<UpdateResponse, DashboardError>
where
    DR: DriverRepository + Send + Sync + 'static,
{
    let Ok(driver_id) = id.parse::<DriverId>() else {
        return Ok(UpdateResponse::NotFound);
    };
    let params = form.into_params();
    Ok(
        match state.driver_service.update_driver(driver_id, params).await? {
            UpdateOutcome::Updated(driver) => {
                UpdateResponse::Redirect(driver_path(driver.id))
            }
            UpdateOutcome::Invalid {
                driver,
                draft,
                errors,
            } => UpdateResponse::Invalid(DriverEditTemplate::new(driver, draft, errors)),
            UpdateOutcome::NotFound => UpdateResponse::NotFound,
        },
    )
}

async fn apply_destroy<DR>(
    state: &AppState<DR>,
    id: &str,
) -> Result<DestroyResponse, DashboardError>
where
    DR: DriverRepository + Send + Sync + 'static,
{
    let Ok(driver_id) = id.parse::<DriverId>() else {
        return Ok(DestroyResponse::NotFound);
    };
    Ok(match state.driver_service.destroy_driver(driver_id).await? {
        DestroyOutcome::Destroyed => DestroyResponse::Redirect,
        DestroyOutcome::NotFound => DestroyResponse::NotFound,
    })
}
