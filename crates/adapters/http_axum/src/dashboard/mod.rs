//! Server-side rendered HTML pages for the driver resource (no JavaScript).

#[allow(clippy::missing_errors_doc)]
pub mod drivers;
pub mod form;

use askama::Template;
use axum::Router;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;

use drivehub_app::ports::DriverRepository;
use drivehub_domain::error::DriveHubError;

use crate::state::AppState;

/// Build the dashboard sub-router for SSR HTML pages.
pub fn routes<DR>() -> Router<AppState<DR>>
where
    DR: DriverRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(|| async { Redirect::to("/drivers") }))
        .route(
            "/drivers",
            get(drivers::index::<DR>).post(drivers::create::<DR>),
        )
        .route("/drivers/new", get(drivers::new::<DR>))
        .route(
            "/drivers/{id}",
            get(drivers::show::<DR>)
                .patch(drivers::update::<DR>)
                .put(drivers::update::<DR>)
                .delete(drivers::destroy::<DR>)
                .post(drivers::dispatch::<DR>),
        )
        .route("/drivers/{id}/edit", get(drivers::edit::<DR>))
}

/// Render `template` as an HTML body with `status`.
fn render<T: Template>(template: &T, status: StatusCode) -> Response {
    match template.render() {
        Ok(body) => (status, Html(body)).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "template rendering failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Error surfaced by dashboard handlers.
///
/// Missing records and rejected input are ordinary handler outcomes, so
/// whatever lands here is a failure the page cannot recover from.
#[derive(Debug)]
pub struct DashboardError(DriveHubError);

impl From<DriveHubError> for DashboardError {
    fn from(err: DriveHubError) -> Self {
        Self(err)
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "dashboard request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
    }
}
